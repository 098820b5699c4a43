//! Progress reporting for the decode loop.
//!
//! The decoder never writes to the console itself. It drives a [`Progress`]
//! value supplied by the caller: [`Silent`] for library use and tests,
//! [`ConsoleProgress`] for an `indicatif` bar on stderr.

use indicatif::{ProgressBar, ProgressStyle};

/// Observer advanced by the decoder as elements are stored.
pub trait Progress {
    /// Called once the header is parsed, before any element is decoded.
    fn start(&mut self, _max: u64, _label: &str) {}

    /// Add `amount` decoded elements.
    fn advance(&mut self, amount: u64);
}

impl<P: Progress + ?Sized> Progress for &mut P {
    fn start(&mut self, max: u64, label: &str) {
        (**self).start(max, label)
    }

    fn advance(&mut self, amount: u64) {
        (**self).advance(amount)
    }
}

/// Observer that ignores every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Progress for Silent {
    fn advance(&mut self, _amount: u64) {}
}

/// Number of unsigned-byte elements per progress update.
///
/// Byte payloads report in thousandths of the total; totals under 1000 report
/// every element.
pub fn batch_size(total: usize) -> usize {
    (total / 1000).max(1)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressStatus {
    /// Percentage of the maximum reached so far.
    Running(f64),
    Done,
}

/// Counter behind a progress display.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressState {
    pub current: u64,
    pub max: u64,
    pub label: String,
}

impl ProgressState {
    pub fn new(max: u64, label: impl Into<String>) -> Self {
        Self {
            current: 0,
            max,
            label: label.into(),
        }
    }

    pub fn add(&mut self, amount: u64) -> ProgressStatus {
        self.current = self.current.saturating_add(amount);
        self.status()
    }

    pub fn status(&self) -> ProgressStatus {
        if self.current >= self.max {
            ProgressStatus::Done
        } else {
            ProgressStatus::Running(self.percent())
        }
    }

    pub fn percent(&self) -> f64 {
        if self.max == 0 {
            return 100.0;
        }
        self.current as f64 * 100.0 / self.max as f64
    }

    /// Display line for the current state.
    pub fn render(&self) -> String {
        match self.status() {
            ProgressStatus::Done => format!("{} Done. ", self.label),
            ProgressStatus::Running(pct) => format!("{} %{:.1} ", self.label, pct),
        }
    }
}

/// Console progress bar backed by `indicatif`.
pub struct ConsoleProgress {
    state: ProgressState,
    bar: ProgressBar,
}

impl ConsoleProgress {
    /// Bar drawn on stderr.
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        if let Ok(style) = ProgressStyle::with_template("{msg}[{bar:40.cyan/blue}] {pos}/{len}") {
            bar.set_style(style.progress_chars("=>-"));
        }
        Self::with_bar(bar)
    }

    /// Bar that tracks state but never draws.
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        Self {
            state: ProgressState::new(0, ""),
            bar,
        }
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for ConsoleProgress {
    fn start(&mut self, max: u64, label: &str) {
        self.state = ProgressState::new(max, label);
        self.bar.set_length(max);
        self.bar.set_position(0);
        if self.state.status() == ProgressStatus::Done {
            self.bar.finish_with_message(self.state.render());
        } else {
            self.bar.set_message(self.state.render());
        }
    }

    fn advance(&mut self, amount: u64) {
        self.bar.inc(amount);
        match self.state.add(amount) {
            ProgressStatus::Done => {
                if !self.bar.is_finished() {
                    self.bar.finish_with_message(self.state.render());
                }
            }
            ProgressStatus::Running(_) => self.bar.set_message(self.state.render()),
        }
    }
}
