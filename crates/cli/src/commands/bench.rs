use std::{
    io::{self, Write},
    sync::Arc,
    time::Duration,
};

use chrono::Local;
use clap::Args;
use colored::Colorize;
use relaydash_core::{
    ProgressLineGuard,
    benchmark::{
        BenchmarkHandle, BenchmarkReport, BenchmarkRequest, BenchmarkRunner, CallOutcome,
        ChannelProgressSink, ProgressEvent,
    },
};
use relaydash_sdk::PluginInvoker;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::{
    commands::{error::BenchError, plugins::ParamsArgs},
    connection::Connection,
    console::{print_details, print_success_message, print_table, print_warn_message, truncate},
};

const PROGRESS_BAR_WIDTH: usize = 30;
const RESPONSE_COLUMN_WIDTH: usize = 60;

#[derive(Args)]
pub struct BenchArgs {
    /// The plugin id to benchmark
    pub plugin: String,

    /// Number of calls to make
    #[arg(long, short = 'n', default_value_t = 30)]
    pub calls: usize,

    /// Seconds to spread the calls over
    #[arg(long, short, default_value_t = 60.0)]
    pub timeframe: f64,

    /// Give up on a single call after this many seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    #[command(flatten)]
    pub parameters: ParamsArgs,

    /// Print the full report as JSON instead of tables
    #[arg(long)]
    pub json: bool,
}

pub async fn handle_bench(args: &BenchArgs, connection: &Connection) -> Result<(), BenchError> {
    let endpoint = connection.endpoint()?;
    let parameters = args.parameters.resolve()?;

    warn_if_not_configured(&args.plugin, connection);

    let invoker = match args.timeout {
        Some(seconds) => PluginInvoker::with_timeout(Duration::from_secs(seconds))?,
        None => PluginInvoker::new(),
    };
    let runner = BenchmarkRunner::new(Arc::new(invoker));

    let request =
        BenchmarkRequest::new(endpoint, args.plugin.clone(), parameters, args.calls, args.timeframe);
    let calls_per_second = request.calls_per_second();

    let (sink, events) = ChannelProgressSink::channel();
    let handle = runner.start(request, Arc::new(sink))?;

    if !args.json {
        println!(
            "Benchmarking plugin {}: {} calls over {}s ({:.2} calls/second). Press Ctrl-C to stop.",
            args.plugin.bold(),
            args.calls,
            args.timeframe,
            calls_per_second
        );
    }

    follow_progress(&handle, events, !args.json).await;

    let report = handle.wait().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&args.plugin, &report);
    }

    Ok(())
}

fn warn_if_not_configured(plugin: &str, connection: &Connection) {
    let Ok(document) = connection.configuration().document() else {
        return;
    };

    if !document.plugins.is_empty() && document.plugin(plugin).is_none() {
        print_warn_message(&format!(
            "Plugin {} is not in the stored relayer configuration; calling it anyway.",
            plugin
        ));
    }
}

/// Drains progress events until the run completes, stopping the run on
/// Ctrl-C. Renders a live progress line when `render` is set.
async fn follow_progress(
    handle: &BenchmarkHandle,
    mut events: UnboundedReceiver<ProgressEvent>,
    render: bool,
) {
    let _progress_line = render.then(ProgressLineGuard::activate);
    let mut progress = ProgressLine::default();

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut stop_requested = false;

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Some(ProgressEvent::Progress { latest, completed, total }) => {
                    progress.record(&latest, completed, total);
                    if render {
                        progress.draw();
                    }
                }
                Some(ProgressEvent::Complete { .. }) | None => break,
            },
            _ = &mut ctrl_c, if !stop_requested => {
                stop_requested = true;
                handle.stop();
                if render {
                    println!();
                    print_warn_message("Stopping after the current call...");
                }
            }
        }
    }

    if render {
        println!();
    }
}

#[derive(Default)]
struct ProgressLine {
    completed: usize,
    total: usize,
    successes: usize,
    failures: usize,
    last_duration_millis: u64,
}

impl ProgressLine {
    fn record(&mut self, latest: &CallOutcome, completed: usize, total: usize) {
        self.completed = completed;
        self.total = total;
        self.last_duration_millis = latest.duration_millis;
        if latest.succeeded {
            self.successes += 1;
        } else {
            self.failures += 1;
        }
    }

    fn render(&self) -> String {
        let fraction =
            if self.total == 0 { 0.0 } else { self.completed as f64 / self.total as f64 };
        let filled =
            ((fraction * PROGRESS_BAR_WIDTH as f64).round() as usize).min(PROGRESS_BAR_WIDTH);

        format!(
            "[{}{}] {}/{} calls ({:.1}%) | ok {} | failed {} | last {}ms",
            "#".repeat(filled),
            ".".repeat(PROGRESS_BAR_WIDTH - filled),
            self.completed,
            self.total,
            fraction * 100.0,
            self.successes,
            self.failures,
            self.last_duration_millis
        )
    }

    fn draw(&self) {
        print!("\r\x1b[2K{}", self.render());
        let _ = io::stdout().flush();
    }
}

fn print_report(plugin: &str, report: &BenchmarkReport) {
    let summary = &report.summary;

    print_details(
        &format!("Benchmark statistics for {}", plugin),
        &[
            ("Total calls", summary.total_calls.to_string()),
            ("Successful", summary.successful_calls.to_string()),
            ("Failed", summary.failed_calls.to_string()),
            ("Success rate", format!("{:.1}%", summary.success_rate_percent)),
            ("Average duration", format!("{:.0}ms", summary.average_duration_millis)),
            (
                "Min / max duration",
                format!("{}/{}ms", summary.min_duration_millis, summary.max_duration_millis),
            ),
            ("Elapsed", format!("{:.1}s", report.elapsed_millis as f64 / 1000.0)),
            ("Achieved rate", format!("{:.2} calls/second", report.achieved_calls_per_second())),
        ],
    );

    if !report.outcomes.is_empty() {
        let rows = report.outcomes.iter().map(outcome_row).collect();
        print_table(
            vec!["Call #", "Status", "Duration", "Timestamp", "Response/Error"],
            rows,
            Some("Call results:"),
            None,
        );
    }

    let headline = format!(
        "{}/{} calls successful ({:.1}%)",
        summary.successful_calls, summary.total_calls, summary.success_rate_percent
    );
    if report.stopped_early {
        print_warn_message(&format!("Benchmark stopped early: {}", headline));
    } else {
        print_success_message(&format!("Benchmark completed: {}", headline));
    }
}

fn outcome_row(outcome: &CallOutcome) -> Vec<String> {
    let (status, detail) = if outcome.succeeded {
        let response = outcome
            .response
            .as_ref()
            .map(|response| response.to_string())
            .unwrap_or_default();
        ("Success", response)
    } else {
        let error = outcome.error_message.clone().unwrap_or_default();
        ("Failed", error)
    };

    vec![
        outcome.call_index.to_string(),
        status.to_string(),
        format!("{}ms", outcome.duration_millis),
        outcome.timestamp.with_timezone(&Local).format("%H:%M:%S").to_string(),
        truncate(&detail, RESPONSE_COLUMN_WIDTH),
    ]
}
