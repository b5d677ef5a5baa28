//! `autolink convert` command implementation.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use autolink::{Attributes, Autolink};
use clap::Args;

use super::settings::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the convert command.
#[derive(Args)]
pub(crate) struct ConvertArgs {
    /// Input file (default: stdin; `-` also reads stdin).
    file: Option<PathBuf>,

    /// Link email addresses only.
    #[arg(long, conflicts_with_all = ["urls_only", "all"])]
    emails: bool,

    /// Link URLs only.
    #[arg(long, conflicts_with = "all")]
    urls_only: bool,

    /// Link email addresses, then URLs (default).
    #[arg(long)]
    all: bool,

    /// Write the result to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output (log skipped and accepted candidates).
    #[arg(short, long)]
    pub verbose: bool,

    #[command(flatten)]
    settings: ConfigArgs,
}

/// What a conversion links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Emails,
    Urls,
    All,
}

impl ConvertArgs {
    /// Execute the convert command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or input/output fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (config, autolink) = self.settings.build()?;

        let text = read_input(self.file.as_deref())?;
        let converted = convert(&autolink, self.mode(), &text, config.attributes());

        if converted == text {
            output.warning("No links found");
        }

        match &self.output {
            Some(path) => {
                std::fs::write(path, &converted)?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => std::io::stdout().lock().write_all(converted.as_bytes())?,
        }

        Ok(())
    }

    fn mode(&self) -> Mode {
        if self.emails {
            Mode::Emails
        } else if self.urls_only {
            Mode::Urls
        } else {
            Mode::All
        }
    }
}

fn convert(autolink: &Autolink, mode: Mode, text: &str, attribs: &Attributes) -> String {
    match mode {
        Mode::Emails => autolink.convert_email(text, attribs),
        Mode::Urls => autolink.convert(text, attribs),
        Mode::All => autolink.convert_all(text, attribs),
    }
}

fn read_input(file: Option<&Path>) -> Result<String, CliError> {
    match file {
        Some(path) if path != Path::new("-") => {
            tracing::debug!(path = %path.display(), "Reading input file");
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            let mut text = String::new();
            std::io::stdin().lock().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
