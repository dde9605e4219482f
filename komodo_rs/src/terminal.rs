//! Simulated terminal: command log, pending input line and history recall.

use tracing::debug;

use crate::commands::{Command, Resolution};

/// Command text of the synthetic welcome entry.
pub const WELCOME_COMMAND: &str = "/welcome";

/// Default welcome output shown on load.
pub const DEFAULT_WELCOME: &str = "Welcome to Komodo! Type komodo for help.";

/// Default distance from the bottom (in px) that still counts as "at the bottom".
pub const DEFAULT_AUTO_SCROLL_THRESHOLD: f64 = 50.0;

/// One recorded (command, output) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Text exactly as the user typed it.
    pub command: String,
    /// Resolved response text.
    pub output: String,
    /// Synthetic first entry shown on load.
    pub is_welcome: bool,
}

impl LogEntry {
    fn welcome(message: &str) -> Self {
        Self {
            command: WELCOME_COMMAND.to_string(),
            output: message.to_string(),
            is_welcome: true,
        }
    }
}

/// Direction for [`Terminal::navigate_history`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    /// Toward earlier commands (ArrowUp).
    Older,
    /// Toward the present (ArrowDown).
    Newer,
}

/// State of one terminal widget.
///
/// The log is append-only apart from `clear`. Recall history is kept
/// separately so it survives a `clear`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Terminal {
    log: Vec<LogEntry>,
    pending: String,
    submitted: Vec<String>,
    // 0 = most recent submitted line
    cursor: Option<usize>,
}

impl Terminal {
    /// Terminal seeded with a welcome entry.
    pub fn new(welcome: &str) -> Self {
        Self {
            log: vec![LogEntry::welcome(welcome)],
            ..Self::default()
        }
    }

    /// Terminal with an empty log.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// True while the user is stepping through history.
    pub fn is_navigating(&self) -> bool {
        self.cursor.is_some()
    }

    /// Mirrors the input box.
    pub fn set_pending(&mut self, text: impl Into<String>) {
        self.pending = text.into();
    }

    /// Submits the pending line.
    pub fn submit_pending(&mut self) -> Resolution {
        let line = std::mem::take(&mut self.pending);
        self.submit(&line)
    }

    /// Resolves `line`, updates the log, and resets the input state.
    pub fn submit(&mut self, line: &str) -> Resolution {
        let command = Command::classify(line);
        let resolution = command.resolve();
        debug!(input = %line, ?command, "terminal submit");

        match &resolution {
            Resolution::Clear => self.log.clear(),
            Resolution::Output(output) => self.log.push(LogEntry {
                command: line.to_string(),
                output: output.clone(),
                is_welcome: false,
            }),
        }

        self.submitted.push(line.to_string());
        self.pending.clear();
        self.cursor = None;
        resolution
    }

    /// Steps the recall cursor and overwrites the pending line with the
    /// recalled command. Never touches the log.
    pub fn navigate_history(&mut self, direction: HistoryDirection) {
        if self.submitted.is_empty() {
            return;
        }
        let oldest = self.submitted.len() - 1;

        match (direction, self.cursor) {
            (HistoryDirection::Older, None) => self.cursor = Some(0),
            (HistoryDirection::Older, Some(i)) => self.cursor = Some((i + 1).min(oldest)),
            (HistoryDirection::Newer, None) => return,
            (HistoryDirection::Newer, Some(0)) => {
                self.cursor = None;
                self.pending.clear();
                return;
            }
            (HistoryDirection::Newer, Some(i)) => self.cursor = Some(i - 1),
        }

        if let Some(i) = self.cursor {
            self.pending = self.submitted[oldest - i].clone();
        }
    }
}

/// Decides whether the output region should follow newly appended entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoScroll {
    threshold: f64,
    follows_output: bool,
}

impl Default for AutoScroll {
    fn default() -> Self {
        Self::new(DEFAULT_AUTO_SCROLL_THRESHOLD)
    }
}

impl AutoScroll {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            follows_output: true,
        }
    }

    /// Recomputes the policy from the scroll container's metrics.
    pub fn observe(&mut self, scroll_height: f64, scroll_top: f64, client_height: f64) {
        self.follows_output = scroll_height - scroll_top - client_height < self.threshold;
    }

    pub fn follows_output(&self) -> bool {
        self.follows_output
    }
}
