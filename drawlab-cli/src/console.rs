//! Timestamped, ANSI-colored console diagnostics.
//!
//! The CLI counterpart of the TUI status bar: every line carries a
//! `YYYY-MM-DD HH:MM:SS` stamp and a colored severity tag. Color is dropped
//! when stdout is not a terminal so piped output stays clean.

use std::path::Path;

use chrono::Local;
use crossterm::style::{Color, Stylize};
use crossterm::tty::IsTty;

use drawlab_core::data::DownloadProgress;

#[derive(Debug, Clone, Copy)]
enum Severity {
    Info,
    Done,
    Warn,
    Error,
}

impl Severity {
    fn tag(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Done => "done",
            Severity::Warn => "warn",
            Severity::Error => "fail",
        }
    }

    fn color(self) -> Color {
        match self {
            Severity::Info => Color::Cyan,
            Severity::Done => Color::Green,
            Severity::Warn => Color::Yellow,
            Severity::Error => Color::Red,
        }
    }
}

/// Console sink for diagnostics lines.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    colored: bool,
}

impl Console {
    pub fn new() -> Self {
        Self {
            colored: std::io::stdout().is_tty(),
        }
    }

    /// Uncolored output regardless of the terminal, for tests and pipes.
    pub fn plain() -> Self {
        Self { colored: false }
    }

    pub fn colored(&self) -> bool {
        self.colored
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.line(Severity::Info, message.as_ref());
    }

    pub fn done(&self, message: impl AsRef<str>) {
        self.line(Severity::Done, message.as_ref());
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        self.line(Severity::Warn, message.as_ref());
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.line(Severity::Error, message.as_ref());
    }

    fn line(&self, severity: Severity, message: &str) {
        println!("{}", self.format_line(severity, message));
    }

    fn format_line(&self, severity: Severity, message: &str) -> String {
        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let tag = severity.tag();
        if self.colored {
            format!("{stamp} {} {message}", tag.with(severity.color()).bold())
        } else {
            format!("{stamp} {tag} {message}")
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

/// Download progress reporter backed by the console.
pub struct ConsoleProgress {
    pub console: Console,
}

impl DownloadProgress for ConsoleProgress {
    fn on_fetch_start(&self, game: &str, url: &str) {
        self.console.info(format!("fetching {game} from {url}"));
    }

    fn on_rows_parsed(&self, game: &str, rows: usize) {
        self.console.info(format!("{game}: parsed {rows} draws"));
    }

    fn on_cached(&self, game: &str, path: &Path) {
        self.console
            .done(format!("{game} cached at {}", path.display()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_carry_stamp_and_tag() {
        let console = Console::plain();
        let line = console.format_line(Severity::Warn, "slow response");
        // "YYYY-MM-DD HH:MM:SS warn slow response"
        assert!(line.ends_with("warn slow response"));
        assert_eq!(line.as_bytes()[4], b'-');
        assert_eq!(line.as_bytes()[10], b' ');
        assert_eq!(line.as_bytes()[13], b':');
    }

    #[test]
    fn colored_lines_carry_escape_codes() {
        let console = Console { colored: true };
        let line = console.format_line(Severity::Error, "boom");
        assert!(line.contains("\u{1b}["));
        assert!(line.contains("boom"));
    }
}
