//! Terminal output for CLI commands.
//!
//! Status lines go to stderr with a [`Tone`]; command results go to stdout
//! through [`Output::data`] so `folio nav --json | jq` stays clean.

use console::{Style, Term};

/// Visual weight of a status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tone {
    Plain,
    Success,
    Warning,
    Error,
    Title,
    Muted,
}

impl Tone {
    fn style(self) -> Style {
        match self {
            Self::Plain => Style::new(),
            Self::Success => Style::new().green(),
            Self::Warning => Style::new().yellow(),
            Self::Error => Style::new().red(),
            Self::Title => Style::new().cyan().bold(),
            Self::Muted => Style::new().dim(),
        }
    }
}

/// Writer pair for status (stderr) and data (stdout).
pub(crate) struct Output {
    status: Term,
    data: Term,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            status: Term::stderr(),
            data: Term::stdout(),
        }
    }

    /// Write a status line in the given tone.
    ///
    /// Write failures (closed pipe, detached terminal) are ignored.
    pub(crate) fn status(&self, tone: Tone, msg: &str) {
        let line = tone.style().apply_to(msg).to_string();
        let _ = self.status.write_line(&line);
    }

    pub(crate) fn info(&self, msg: &str) {
        self.status(Tone::Plain, msg);
    }

    pub(crate) fn success(&self, msg: &str) {
        self.status(Tone::Success, msg);
    }

    pub(crate) fn warning(&self, msg: &str) {
        self.status(Tone::Warning, msg);
    }

    pub(crate) fn error(&self, msg: &str) {
        self.status(Tone::Error, msg);
    }

    /// Site title banner.
    pub(crate) fn highlight(&self, msg: &str) {
        self.status(Tone::Title, msg);
    }

    pub(crate) fn muted(&self, msg: &str) {
        self.status(Tone::Muted, msg);
    }

    /// Write a result line to stdout, unstyled.
    pub(crate) fn data(&self, line: &str) {
        let _ = self.data.write_line(line);
    }
}
