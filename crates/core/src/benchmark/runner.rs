use std::sync::Arc;

use tokio::{
    sync::watch,
    time::{sleep, Instant},
};
use tracing::debug;

use super::{
    handle::RunShared, BenchmarkError, BenchmarkHandle, BenchmarkRequest, BenchmarkSummary,
    CallOutcome, InvocationClient, ProgressSink,
};
use crate::relaydash_info;

/// Starts benchmark runs against an [`InvocationClient`].
pub struct BenchmarkRunner<C: ?Sized> {
    client: Arc<C>,
}

impl<C: ?Sized> Clone for BenchmarkRunner<C> {
    fn clone(&self) -> Self {
        Self { client: Arc::clone(&self.client) }
    }
}

impl<C> BenchmarkRunner<C>
where
    C: InvocationClient + ?Sized + 'static,
{
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Validates `request` and starts issuing calls on a new tokio task.
    ///
    /// An invalid request fails here: no call is made and `sink` is never
    /// notified. Must be called from within a tokio runtime.
    pub fn start(
        &self,
        request: BenchmarkRequest,
        sink: Arc<dyn ProgressSink>,
    ) -> Result<BenchmarkHandle, BenchmarkError> {
        request.validate()?;

        let run = Arc::new(RunShared::new(request.operation_id.clone()));
        let (stop_sender, stop_receiver) = watch::channel(false);

        run.mark_running();
        let task = tokio::spawn(drive_run(
            Arc::clone(&self.client),
            request,
            sink,
            Arc::clone(&run),
            stop_receiver,
        ));

        Ok(BenchmarkHandle::new(run, stop_sender, task))
    }
}

/// A closed channel means the handle was dropped, which counts as a stop.
fn stop_requested(stop_receiver: &watch::Receiver<bool>) -> bool {
    *stop_receiver.borrow() || stop_receiver.has_changed().is_err()
}

async fn stop_signalled(stop_receiver: &mut watch::Receiver<bool>) {
    loop {
        if *stop_receiver.borrow_and_update() {
            return;
        }
        if stop_receiver.changed().await.is_err() {
            return;
        }
    }
}

async fn drive_run<C>(
    client: Arc<C>,
    request: BenchmarkRequest,
    sink: Arc<dyn ProgressSink>,
    run: Arc<RunShared>,
    mut stop_receiver: watch::Receiver<bool>,
) where
    C: InvocationClient + ?Sized,
{
    let total_calls = request.total_calls;
    let interval = request.interval();
    let started = Instant::now();
    let mut outcomes: Vec<CallOutcome> = Vec::new();

    relaydash_info!(
        "Benchmarking {}: {} calls over {}s ({:.2} calls/s, {}ms apart)",
        request.operation_id,
        total_calls,
        request.timeframe_seconds,
        request.calls_per_second(),
        interval.as_millis()
    );

    for call_index in 1..=total_calls {
        if stop_requested(&stop_receiver) {
            break;
        }

        let outcome = invoke_once(client.as_ref(), &request, call_index).await;
        if let Some(error) = &outcome.error_message {
            debug!("Call {}/{} to {} failed: {}", call_index, total_calls, request.operation_id, error);
        }

        run.record(outcome.clone());
        outcomes.push(outcome);
        sink.on_progress(&outcomes, call_index, total_calls);

        if call_index < total_calls {
            tokio::select! {
                _ = sleep(interval) => {}
                _ = stop_signalled(&mut stop_receiver) => break,
            }
        }
    }

    let elapsed_millis = millis(started);
    let stopped_early = outcomes.len() < total_calls;
    let summary = BenchmarkSummary::from_outcomes(&outcomes);

    if stopped_early {
        relaydash_info!(
            "Benchmark of {} stopped after {}/{} calls ({:.1}% successful)",
            request.operation_id, summary.total_calls, total_calls, summary.success_rate_percent
        );
    } else {
        relaydash_info!(
            "Benchmark of {} completed: {}/{} calls successful ({:.1}%) in {}ms",
            request.operation_id,
            summary.successful_calls,
            summary.total_calls,
            summary.success_rate_percent,
            elapsed_millis
        );
    }

    run.finish(summary.clone(), stopped_early, elapsed_millis);
    sink.on_complete(&summary, stopped_early);
}

async fn invoke_once<C>(client: &C, request: &BenchmarkRequest, call_index: usize) -> CallOutcome
where
    C: InvocationClient + ?Sized,
{
    let started = Instant::now();
    let result = client.invoke(&request.endpoint, &request.operation_id, &request.parameters).await;
    let duration_millis = millis(started);

    match result {
        Ok(response) => CallOutcome::success(call_index, duration_millis, response),
        Err(failure) => CallOutcome::failure(call_index, duration_millis, failure.describe()),
    }
}

fn millis(since: Instant) -> u64 {
    u64::try_from(since.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::{InvocationFailure, RunState, ValidationError};
    use crate::common_types::Endpoint;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::{
        sync::{
            atomic::{AtomicUsize, Ordering},
            Mutex,
        },
        time::Duration,
    };

    /// Replies from a script, cycling when it runs out, after `delay`.
    struct ScriptedClient {
        script: Vec<Result<Value, InvocationFailure>>,
        delay: Duration,
        calls: AtomicUsize,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    impl ScriptedClient {
        fn new(script: Vec<Result<Value, InvocationFailure>>, delay: Duration) -> Arc<Self> {
            Arc::new(Self {
                script,
                delay,
                calls: AtomicUsize::new(0),
                in_flight: AtomicUsize::new(0),
                max_in_flight: AtomicUsize::new(0),
            })
        }

        fn succeeding() -> Arc<Self> {
            Self::new(vec![Ok(json!({ "data": { "success": true } }))], Duration::ZERO)
        }
    }

    #[async_trait]
    impl InvocationClient for ScriptedClient {
        async fn invoke(
            &self,
            _endpoint: &Endpoint,
            _operation_id: &str,
            _parameters: &Value,
        ) -> Result<Value, InvocationFailure> {
            let now_in_flight = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now_in_flight, Ordering::SeqCst);

            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                sleep(self.delay).await;
            }

            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            self.script[call % self.script.len()].clone()
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum SinkEvent {
        Progress { recorded: usize, completed: usize, total: usize },
        Complete { summary: BenchmarkSummary, stopped_early: bool },
    }

    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<SinkEvent>>,
    }

    impl RecordingSink {
        fn events(&self) -> Vec<SinkEvent> {
            self.events.lock().unwrap().clone()
        }

        fn completions(&self) -> Vec<(BenchmarkSummary, bool)> {
            self.events()
                .into_iter()
                .filter_map(|event| match event {
                    SinkEvent::Complete { summary, stopped_early } => Some((summary, stopped_early)),
                    _ => None,
                })
                .collect()
        }
    }

    impl ProgressSink for RecordingSink {
        fn on_progress(&self, outcomes: &[CallOutcome], completed: usize, total: usize) {
            self.events.lock().unwrap().push(SinkEvent::Progress {
                recorded: outcomes.len(),
                completed,
                total,
            });
        }

        fn on_complete(&self, summary: &BenchmarkSummary, stopped_early: bool) {
            self.events
                .lock()
                .unwrap()
                .push(SinkEvent::Complete { summary: summary.clone(), stopped_early });
        }
    }

    fn request(total_calls: usize, timeframe_seconds: f64) -> BenchmarkRequest {
        BenchmarkRequest::new(
            Endpoint::new("http://localhost:8080", "test-key"),
            "example",
            json!({ "foo": "bar", "baz": 123 }),
            total_calls,
            timeframe_seconds,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_completed_run_records_every_call_in_order() {
        let client = ScriptedClient::succeeding();
        let sink = Arc::new(RecordingSink::default());
        let runner = BenchmarkRunner::new(client.clone());

        let handle = runner.start(request(10, 1.0), sink.clone()).unwrap();
        let report = handle.wait().await.unwrap();

        let indices: Vec<usize> = report.outcomes.iter().map(|o| o.call_index).collect();
        assert_eq!(indices, (1..=10).collect::<Vec<_>>());
        assert!(!report.stopped_early);
        assert_eq!(report.summary.total_calls, 10);
        assert_eq!(report.summary.successful_calls + report.summary.failed_calls, 10);
        assert_eq!(handle.state(), RunState::Completed);
        assert_eq!(client.calls.load(Ordering::SeqCst), 10);

        let events = sink.events();
        assert_eq!(events.len(), 11);
        for (i, event) in events.iter().take(10).enumerate() {
            assert_eq!(
                *event,
                SinkEvent::Progress { recorded: i + 1, completed: i + 1, total: 10 }
            );
        }
        assert_eq!(
            events[10],
            SinkEvent::Complete { summary: report.summary.clone(), stopped_early: false }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_five_calls_over_five_seconds_waits_four_intervals() {
        let sink = Arc::new(RecordingSink::default());
        let runner = BenchmarkRunner::new(ScriptedClient::succeeding());

        let started = Instant::now();
        let handle = runner.start(request(5, 5.0), sink).unwrap();
        let report = handle.wait().await.unwrap();
        let elapsed = started.elapsed();

        assert!(elapsed >= Duration::from_millis(4000), "elapsed {:?}", elapsed);
        assert!(elapsed < Duration::from_millis(4100), "elapsed {:?}", elapsed);
        assert_eq!(report.outcomes.len(), 5);
        assert_eq!(report.summary.success_rate_percent, 100.0);
        assert_eq!(report.summary.average_duration_millis, 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_is_not_shortened_by_slow_calls() {
        let client = ScriptedClient::new(vec![Ok(json!({}))], Duration::from_millis(300));
        let runner = BenchmarkRunner::new(client);

        let started = Instant::now();
        let handle = runner.start(request(3, 3.0), Arc::new(RecordingSink::default())).unwrap();
        let report = handle.wait().await.unwrap();
        let elapsed = started.elapsed();

        // 3 * 300ms of calls plus 2 * 1000ms of pacing
        assert!(elapsed >= Duration::from_millis(2900), "elapsed {:?}", elapsed);
        assert!(elapsed < Duration::from_millis(3000), "elapsed {:?}", elapsed);
        assert!(report.outcomes.iter().all(|o| o.duration_millis == 300));
        assert_eq!(report.summary.min_duration_millis, 300);
        assert_eq!(report.summary.max_duration_millis, 300);
        assert_eq!(report.summary.average_duration_millis, 300.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failures_are_recorded_and_do_not_abort() {
        let client = ScriptedClient::new(
            vec![Err(InvocationFailure::new("timeout"))],
            Duration::from_millis(20),
        );
        let sink = Arc::new(RecordingSink::default());
        let runner = BenchmarkRunner::new(client);

        let handle = runner.start(request(3, 0.3), sink.clone()).unwrap();
        let report = handle.wait().await.unwrap();

        assert_eq!(report.outcomes.len(), 3);
        for outcome in &report.outcomes {
            assert!(!outcome.succeeded);
            assert_eq!(outcome.error_message.as_deref(), Some("timeout"));
            assert!(outcome.response.is_none());
        }
        assert_eq!(report.summary.failed_calls, 3);
        assert_eq!(report.summary.success_rate_percent, 0.0);
        assert_eq!(report.summary.average_duration_millis, 0.0);
        assert_eq!(report.summary.min_duration_millis, 0);
        assert_eq!(report.summary.max_duration_millis, 0);
        assert_eq!(sink.completions(), vec![(report.summary.clone(), false)]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_without_message_is_unknown_error() {
        let client = ScriptedClient::new(
            vec![Ok(json!({ "ok": true })), Err(InvocationFailure::unknown())],
            Duration::ZERO,
        );
        let runner = BenchmarkRunner::new(client);

        let handle = runner.start(request(2, 1.0), Arc::new(RecordingSink::default())).unwrap();
        let report = handle.wait().await.unwrap();

        assert!(report.outcomes[0].succeeded);
        assert_eq!(report.outcomes[0].response, Some(json!({ "ok": true })));
        assert_eq!(report.outcomes[1].error_message.as_deref(), Some("Unknown error"));
        assert_eq!(report.summary.success_rate_percent, 50.0);
    }

    #[tokio::test]
    async fn test_invalid_requests_issue_no_calls() {
        let client = ScriptedClient::succeeding();
        let sink = Arc::new(RecordingSink::default());
        let runner = BenchmarkRunner::new(client.clone());

        let zero_calls = runner.start(request(0, 10.0), sink.clone());
        assert!(matches!(
            zero_calls,
            Err(BenchmarkError::Validation(ValidationError::NoCalls))
        ));

        let no_time = runner.start(request(3, 0.0), sink.clone());
        assert!(matches!(
            no_time,
            Err(BenchmarkError::Validation(ValidationError::InvalidTimeframe(_)))
        ));

        let mut blank = request(3, 1.0);
        blank.operation_id = String::new();
        assert!(matches!(
            runner.start(blank, sink.clone()),
            Err(BenchmarkError::Validation(ValidationError::MissingOperationId))
        ));

        tokio::task::yield_now().await;
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
        assert!(sink.events().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_mid_run_keeps_recorded_outcomes() {
        let client = ScriptedClient::succeeding();
        let sink = Arc::new(RecordingSink::default());
        let runner = BenchmarkRunner::new(client.clone());

        // calls at 0s, 1s, 2s; stop lands during the wait before the 4th
        let handle = runner.start(request(10, 10.0), sink.clone()).unwrap();
        sleep(Duration::from_millis(2500)).await;
        handle.stop();
        let report = handle.wait().await.unwrap();

        assert!(report.stopped_early);
        assert_eq!(report.summary.total_calls, 3);
        assert_eq!(report.outcomes.len(), 3);
        assert_eq!(handle.state(), RunState::Stopped);

        sleep(Duration::from_secs(30)).await;
        assert_eq!(client.calls.load(Ordering::SeqCst), 3);
        assert_eq!(handle.outcomes().len(), 3);

        let completions = sink.completions();
        assert_eq!(completions.len(), 1);
        assert_eq!(completions[0].0.total_calls, 3);
        assert!(completions[0].1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_lets_in_flight_call_finish() {
        let client = ScriptedClient::new(vec![Ok(json!({}))], Duration::from_millis(500));
        let runner = BenchmarkRunner::new(client.clone());

        let handle = runner.start(request(5, 5.0), Arc::new(RecordingSink::default())).unwrap();
        sleep(Duration::from_millis(200)).await;
        handle.stop();
        let report = handle.wait().await.unwrap();

        assert!(report.stopped_early);
        assert_eq!(report.outcomes.len(), 1);
        assert!(report.outcomes[0].succeeded);
        assert_eq!(report.outcomes[0].duration_millis, 500);
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_is_idempotent_and_noop_after_completion() {
        let sink = Arc::new(RecordingSink::default());
        let runner = BenchmarkRunner::new(ScriptedClient::succeeding());

        let handle = runner.start(request(2, 0.2), sink.clone()).unwrap();
        let report = handle.wait().await.unwrap();
        assert!(!report.stopped_early);

        handle.stop();
        handle.stop();

        assert_eq!(handle.state(), RunState::Completed);
        assert_eq!(sink.completions().len(), 1);
        let again = handle.wait().await.unwrap();
        assert!(!again.stopped_early);
        assert_eq!(again.outcomes.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_calls_never_overlap() {
        let client = ScriptedClient::new(vec![Ok(json!({}))], Duration::from_millis(250));
        let runner = BenchmarkRunner::new(client.clone());

        // interval (100ms) shorter than each call
        let handle = runner.start(request(6, 0.6), Arc::new(RecordingSink::default())).unwrap();
        handle.wait().await.unwrap();

        assert_eq!(client.calls.load(Ordering::SeqCst), 6);
        assert_eq!(client.max_in_flight.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_only_after_run_is_over() {
        let runner = BenchmarkRunner::new(ScriptedClient::succeeding());

        let handle = runner.start(request(3, 3.0), Arc::new(RecordingSink::default())).unwrap();
        assert!(handle.is_active());
        assert!(matches!(handle.clear(), Err(BenchmarkError::RunActive)));

        handle.wait().await.unwrap();
        handle.clear().unwrap();

        assert_eq!(handle.state(), RunState::Cleared);
        assert!(handle.outcomes().is_empty());
        assert!(matches!(handle.wait().await, Err(BenchmarkError::Cleared)));

        // stopping a cleared run changes nothing
        handle.stop();
        assert_eq!(handle.state(), RunState::Cleared);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_stops_the_run() {
        let client = ScriptedClient::succeeding();
        let sink = Arc::new(RecordingSink::default());
        let runner = BenchmarkRunner::new(client.clone());

        let handle = runner.start(request(10, 10.0), sink.clone()).unwrap();
        sleep(Duration::from_millis(1500)).await;
        drop(handle);
        sleep(Duration::from_secs(20)).await;

        assert_eq!(client.calls.load(Ordering::SeqCst), 2);
        let completions = sink.completions();
        assert_eq!(completions.len(), 1);
        assert_eq!(completions[0].0.total_calls, 2);
        assert!(completions[0].1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_huge_call_count_starts_and_stops() {
        let client = ScriptedClient::new(vec![Ok(json!({}))], Duration::from_millis(100));
        let sink = Arc::new(RecordingSink::default());
        let runner = BenchmarkRunner::new(client.clone());

        let handle = runner.start(request(usize::MAX, 10.0), sink.clone()).unwrap();
        sleep(Duration::from_millis(250)).await;
        handle.stop();
        let report = handle.wait().await.unwrap();

        assert!(report.stopped_early);
        assert_eq!(report.outcomes.len(), 3);
        assert_eq!(
            sink.events()[0],
            SinkEvent::Progress { recorded: 1, completed: 1, total: usize::MAX }
        );
        assert_eq!(sink.completions().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_enormous_timeframe_still_reports_completion() {
        let sink = Arc::new(RecordingSink::default());
        let runner = BenchmarkRunner::new(ScriptedClient::succeeding());

        let single = runner.start(request(1, 1e20), sink.clone()).unwrap();
        let report = single.wait().await.unwrap();
        assert!(!report.stopped_early);
        assert_eq!(report.outcomes.len(), 1);

        let paced = runner.start(request(2, 1e20), sink.clone()).unwrap();
        sleep(Duration::from_secs(1)).await;
        assert_eq!(paced.outcomes().len(), 1);
        paced.stop();
        let report = paced.wait().await.unwrap();

        assert!(report.stopped_early);
        assert_eq!(report.outcomes.len(), 1);
        let completions = sink.completions();
        assert_eq!(completions.len(), 2);
        assert!(!completions[0].1);
        assert!(completions[1].1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_independent_runs_share_a_runner() {
        let runner = BenchmarkRunner::new(ScriptedClient::succeeding());

        let first = runner.start(request(3, 0.3), Arc::new(RecordingSink::default())).unwrap();
        let second = runner.start(request(4, 0.4), Arc::new(RecordingSink::default())).unwrap();

        let (first, second) = tokio::join!(first.wait(), second.wait());
        assert_eq!(first.unwrap().outcomes.len(), 3);
        assert_eq!(second.unwrap().outcomes.len(), 4);
    }
}
