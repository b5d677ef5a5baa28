//! Status lines for the CLI.
//!
//! Converted HTML goes to stdout; everything printed here goes to stderr so
//! `autolink convert < in.txt > out.html` never mixes the two.

use console::{Style, Term};

/// How a status line is colored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tone {
    Plain,
    Success,
    Warning,
    Error,
    Highlight,
}

impl Tone {
    fn style(self) -> Style {
        match self {
            Self::Plain => Style::new(),
            Self::Success => Style::new().green(),
            Self::Warning => Style::new().yellow(),
            Self::Error => Style::new().red().bold(),
            Self::Highlight => Style::new().cyan().bold(),
        }
    }

    /// Apply the tone to a message. Colors follow the terminal unless forced.
    fn paint(self, msg: &str, force: Option<bool>) -> String {
        let mut style = self.style();
        if let Some(force) = force {
            style = style.force_styling(force);
        }
        style.apply_to(msg).to_string()
    }
}

/// Status writer bound to stderr.
pub(crate) struct Output {
    term: Term,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    /// Write one status line. A closed stderr is not worth failing over.
    pub(crate) fn say(&self, tone: Tone, msg: &str) {
        let line = tone.paint(msg, None);
        let _ = self.term.write_line(&line);
    }

    pub(crate) fn info(&self, msg: &str) {
        self.say(Tone::Plain, msg);
    }

    pub(crate) fn success(&self, msg: &str) {
        self.say(Tone::Success, msg);
    }

    pub(crate) fn warning(&self, msg: &str) {
        self.say(Tone::Warning, msg);
    }

    pub(crate) fn error(&self, msg: &str) {
        self.say(Tone::Error, msg);
    }

    pub(crate) fn highlight(&self, msg: &str) {
        self.say(Tone::Highlight, msg);
    }
}
