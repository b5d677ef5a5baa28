//! `autolink schemes` command implementation.

use std::io::{self, Write};

use clap::Args;

use super::settings::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the schemes command.
#[derive(Args)]
pub(crate) struct SchemesArgs {
    #[command(flatten)]
    settings: ConfigArgs,
}

impl SchemesArgs {
    /// Execute the schemes command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (config, autolink) = self.settings.build()?;

        match &config.config_path {
            Some(path) => output.highlight(&format!("Config: {}", path.display())),
            None => output.info("Config: defaults (no autolink.toml found)"),
        }

        if autolink.schemes().is_empty() {
            output.warning("No schemes configured, URLs will not be linked");
        }

        let mut stdout = io::stdout().lock();
        for scheme in autolink.schemes().iter() {
            writeln!(stdout, "{scheme}")?;
        }

        if let Some(scheme) = autolink.link_no_scheme().scheme() {
            output.info(&format!("Bare domains are linked with {scheme}://"));
        }

        Ok(())
    }
}
