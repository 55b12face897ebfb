//! Spinner shown on standard output while the searches run.

use std::time::Duration;

use driftnet_search::Platform;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub struct SearchProgress {
    bar: ProgressBar,
}

impl SearchProgress {
    /// Spinner on stdout. Stays invisible when stdout is not a terminal.
    pub fn stdout() -> Self {
        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout());
        let style = ProgressStyle::with_template("{spinner:.green} {msg:.bold.green}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_message("Searching...");
        bar.enable_steady_tick(TICK_INTERVAL);
        Self { bar }
    }

    #[cfg(test)]
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn start(&self, platform: Platform) {
        self.bar.set_message(format!("Searching {platform}..."));
    }

    /// Removes the spinner line before the report is printed.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    #[cfg(test)]
    pub fn message(&self) -> String {
        self.bar.message()
    }
}
