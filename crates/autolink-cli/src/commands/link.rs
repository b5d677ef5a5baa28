//! `autolink link` command implementation.

use std::io::{self, Write};

use clap::Args;

use super::settings::ConfigArgs;
use crate::error::CliError;

/// Arguments for the link command.
#[derive(Args)]
pub(crate) struct LinkArgs {
    /// URL or email address to format.
    target: String,

    /// Format the target as an email address.
    #[arg(long)]
    email: bool,

    #[command(flatten)]
    settings: ConfigArgs,
}

impl LinkArgs {
    /// Execute the link command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the target is empty.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let target = self.target.trim();
        if target.is_empty() {
            let message = "link target cannot be empty".to_owned();
            return Err(CliError::Validation(message));
        }

        let (config, autolink) = self.settings.build()?;
        let html = if self.email {
            autolink.link_email(target, config.attributes())
        } else {
            autolink.link(target, config.attributes())
        };

        writeln!(io::stdout(), "{html}")?;
        Ok(())
    }
}
