//! indicatif progress bars for bulk operations

use indicatif::{ProgressBar, ProgressStyle};
use norprog_core::flash::{Operation, Progress};

const BAR_TEMPLATE: &str = "{msg:9} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})";

/// Progress reporter drawing one bar per operation
#[derive(Default)]
pub struct IndicatifProgress {
    bar: Option<ProgressBar>,
}

impl IndicatifProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Progress for IndicatifProgress {
    fn start(&mut self, op: Operation, total: usize) {
        if let Some(old) = self.bar.take() {
            old.abandon();
        }
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(BAR_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb.set_message(op.to_string());
        self.bar = Some(pb);
    }

    fn update(&mut self, done: usize) {
        if let Some(pb) = &self.bar {
            pb.set_position(done as u64);
        }
    }

    fn finish(&mut self) {
        if let Some(pb) = self.bar.take() {
            pb.finish();
        }
    }
}

impl Drop for IndicatifProgress {
    // An operation that failed never calls finish; leave its bar where it stopped.
    fn drop(&mut self) {
        if let Some(pb) = self.bar.take() {
            pb.abandon();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_lifecycle() {
        let mut progress = IndicatifProgress::new();
        progress.start(Operation::Read, 4096);
        progress.update(1024);
        assert_eq!(progress.bar.as_ref().map(|pb| pb.position()), Some(1024));
        assert_eq!(progress.bar.as_ref().and_then(|pb| pb.length()), Some(4096));
        progress.finish();
        assert!(progress.bar.is_none());

        // Updates without a running bar are ignored
        progress.update(10);
    }

    #[test]
    fn test_template_is_valid() {
        assert!(ProgressStyle::default_bar().template(BAR_TEMPLATE).is_ok());
    }
}
