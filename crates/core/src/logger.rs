use std::{
    io::Write,
    sync::atomic::{AtomicBool, Ordering},
};

use once_cell::sync::Lazy;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    fmt::{
        format::{Format, Writer},
        MakeWriter,
    },
    EnvFilter,
};

static PROGRESS_LINE_ACTIVE: Lazy<AtomicBool> = Lazy::new(|| AtomicBool::new(false));

/// A writer that keeps log lines from being glued onto a live progress line.
///
/// Logs go to stderr. While a progress line is being redrawn on the terminal,
/// each log write first clears the current line so the log message starts
/// at column zero.
struct ProgressAwareWriter {
    stderr: std::io::Stderr,
}

impl ProgressAwareWriter {
    fn new() -> Self {
        Self { stderr: std::io::stderr() }
    }
}

impl Write for ProgressAwareWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut handle = self.stderr.lock();
        if PROGRESS_LINE_ACTIVE.load(Ordering::Relaxed) {
            handle.write_all(b"\r\x1b[2K")?;
        }
        handle.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.stderr.lock().flush()
    }
}

struct ProgressAwareWriterMaker;

impl<'a> MakeWriter<'a> for ProgressAwareWriterMaker {
    type Writer = ProgressAwareWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ProgressAwareWriter::new()
    }
}

/// Timestamp format: "DD Month - HH:MM:SS.micros", or just "HH:MM:SS" while a
/// progress line is on screen.
struct CustomTimer;

impl tracing_subscriber::fmt::time::FormatTime for CustomTimer {
    fn format_time(&self, writer: &mut Writer<'_>) -> std::fmt::Result {
        let now = chrono::Local::now();
        if PROGRESS_LINE_ACTIVE.load(Ordering::Relaxed) {
            write!(writer, "{}", now.format("%H:%M:%S"))
        } else {
            write!(writer, "{} - {}", now.format("%d %B"), now.format("%H:%M:%S%.6f"))
        }
    }
}

/// Sets up the global logger with the specified log level.
///
/// `RUST_LOG` directives are honoured on top of `log_level`. If a global
/// subscriber is already installed this does nothing.
pub fn setup_logger(log_level: LevelFilter) {
    let filter = EnvFilter::from_default_env().add_directive(log_level.into());

    let format = Format::default().with_timer(CustomTimer).with_level(true).with_target(false);

    let subscriber = tracing_subscriber::fmt()
        .with_writer(ProgressAwareWriterMaker)
        .with_env_filter(filter)
        .event_format(format)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Tells the logger whether a progress line is currently drawn on the terminal.
pub fn set_progress_line_active(active: bool) {
    PROGRESS_LINE_ACTIVE.store(active, Ordering::Relaxed);
}

/// Clears the progress flag when dropped, so an early return or panic while
/// rendering progress does not leave the logger in progress mode.
pub struct ProgressLineGuard;

impl ProgressLineGuard {
    pub fn activate() -> Self {
        set_progress_line_active(true);
        ProgressLineGuard
    }
}

impl Drop for ProgressLineGuard {
    fn drop(&mut self) {
        set_progress_line_active(false);
    }
}
