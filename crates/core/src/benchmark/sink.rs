use tokio::sync::mpsc;

use super::{BenchmarkSummary, CallOutcome};

/// Receives a run's progress as it happens.
///
/// Called from the run's own task right after each outcome is recorded, so
/// implementations must return quickly: a blocking sink stalls the pacing.
pub trait ProgressSink: Send + Sync {
    /// `outcomes` is everything recorded so far, in call order.
    fn on_progress(&self, outcomes: &[CallOutcome], completed: usize, total: usize);

    /// Delivered exactly once per run, after the last outcome.
    fn on_complete(&self, summary: &BenchmarkSummary, stopped_early: bool);
}

#[derive(Debug, Clone)]
pub enum ProgressEvent {
    Progress { latest: CallOutcome, completed: usize, total: usize },
    Complete { summary: BenchmarkSummary, stopped_early: bool },
}

/// Forwards progress onto an unbounded channel so a renderer can live on
/// another task. Only the newest outcome is sent with each event; the
/// receiver accumulates them if it needs the whole list.
pub struct ChannelProgressSink {
    sender: mpsc::UnboundedSender<ProgressEvent>,
}

impl ChannelProgressSink {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ProgressEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl ProgressSink for ChannelProgressSink {
    fn on_progress(&self, outcomes: &[CallOutcome], completed: usize, total: usize) {
        if let Some(latest) = outcomes.last() {
            let _ = self.sender.send(ProgressEvent::Progress {
                latest: latest.clone(),
                completed,
                total,
            });
        }
    }

    fn on_complete(&self, summary: &BenchmarkSummary, stopped_early: bool) {
        let _ = self
            .sender
            .send(ProgressEvent::Complete { summary: summary.clone(), stopped_early });
    }
}
