use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::{
    sync::{watch, Mutex as AsyncMutex},
    task::JoinHandle,
};
use super::{BenchmarkError, BenchmarkReport, BenchmarkSummary, CallOutcome, RunState};
use crate::relaydash_info;

struct RunInner {
    state: RunState,
    outcomes: Vec<CallOutcome>,
    finished: Option<FinishedRun>,
}

struct FinishedRun {
    summary: BenchmarkSummary,
    stopped_early: bool,
    elapsed_millis: u64,
}

/// State shared between a run's task and its handle.
///
/// The task is the only writer of outcomes; the handle reads snapshots.
pub(super) struct RunShared {
    operation_id: String,
    inner: Mutex<RunInner>,
}

impl RunShared {
    pub(super) fn new(operation_id: String) -> Self {
        Self {
            operation_id,
            inner: Mutex::new(RunInner {
                state: RunState::Created,
                outcomes: Vec::new(),
                finished: None,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RunInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(super) fn mark_running(&self) {
        self.lock().state = RunState::Running;
    }

    pub(super) fn record(&self, outcome: CallOutcome) {
        self.lock().outcomes.push(outcome);
    }

    pub(super) fn finish(&self, summary: BenchmarkSummary, stopped_early: bool, elapsed_millis: u64) {
        let mut inner = self.lock();
        inner.state = if stopped_early { RunState::Stopped } else { RunState::Completed };
        inner.finished = Some(FinishedRun { summary, stopped_early, elapsed_millis });
    }

    /// The task died without reaching `finish`; whatever was recorded stays.
    fn abandon(&self) {
        let mut inner = self.lock();
        if inner.state.is_active() {
            let summary = BenchmarkSummary::from_outcomes(&inner.outcomes);
            inner.state = RunState::Stopped;
            inner.finished = Some(FinishedRun { summary, stopped_early: true, elapsed_millis: 0 });
        }
    }

    fn report(&self) -> Result<BenchmarkReport, BenchmarkError> {
        let inner = self.lock();
        if inner.state == RunState::Cleared {
            return Err(BenchmarkError::Cleared);
        }

        let finished = inner.finished.as_ref().ok_or(BenchmarkError::RunActive)?;
        Ok(BenchmarkReport {
            summary: finished.summary.clone(),
            stopped_early: finished.stopped_early,
            elapsed_millis: finished.elapsed_millis,
            outcomes: inner.outcomes.clone(),
        })
    }
}

/// Controls one benchmark run.
///
/// Dropping the handle of an active run asks it to stop, exactly like
/// [`BenchmarkHandle::stop`].
pub struct BenchmarkHandle {
    run: Arc<RunShared>,
    stop_sender: watch::Sender<bool>,
    task: AsyncMutex<Option<JoinHandle<()>>>,
}

impl BenchmarkHandle {
    pub(super) fn new(
        run: Arc<RunShared>,
        stop_sender: watch::Sender<bool>,
        task: JoinHandle<()>,
    ) -> Self {
        Self { run, stop_sender, task: AsyncMutex::new(Some(task)) }
    }

    pub fn state(&self) -> RunState {
        self.run.lock().state
    }

    pub fn is_active(&self) -> bool {
        self.state().is_active()
    }

    /// Everything recorded so far, in call order.
    pub fn outcomes(&self) -> Vec<CallOutcome> {
        self.run.lock().outcomes.clone()
    }

    /// Asks the run to stop.
    ///
    /// A call that is already in flight finishes and is recorded; no further
    /// call is made and a pending pacing wait is cut short. Does nothing if
    /// the run has already finished or a stop was already requested.
    pub fn stop(&self) {
        if !self.is_active() {
            return;
        }

        let already_requested = self.stop_sender.send_replace(true);
        if !already_requested {
            relaydash_info!("Stop requested for benchmark of {}", self.run.operation_id);
        }
    }

    /// Waits for the run to finish and returns its report.
    ///
    /// Safe to call more than once, and safe to cancel: dropping the future
    /// leaves the run untouched.
    pub async fn wait(&self) -> Result<BenchmarkReport, BenchmarkError> {
        let mut task = self.task.lock().await;
        if let Some(join_handle) = task.as_mut() {
            let joined = join_handle.await;
            *task = None;

            if let Err(e) = joined {
                self.run.abandon();
                return Err(BenchmarkError::TaskFailed(e.to_string()));
            }
        }

        self.run.report()
    }

    /// Releases the recorded outcomes. Only allowed once the run is over.
    pub fn clear(&self) -> Result<(), BenchmarkError> {
        let mut inner = self.run.lock();
        if inner.state.is_active() {
            return Err(BenchmarkError::RunActive);
        }

        inner.outcomes = Vec::new();
        inner.finished = None;
        inner.state = RunState::Cleared;
        Ok(())
    }
}
