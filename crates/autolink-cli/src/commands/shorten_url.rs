//! `autolink shorten-url` command implementation.

use std::io::{self, Write};

use autolink::{DEFAULT_DOTS, DEFAULT_LAST_PART_LIMIT, shorten_url};
use clap::Args;

use crate::error::CliError;

/// Arguments for the shorten-url command.
#[derive(Args)]
pub(crate) struct ShortenUrlArgs {
    /// URL to shorten.
    url: String,

    /// Characters kept from the last path segment.
    #[arg(long, default_value_t = DEFAULT_LAST_PART_LIMIT)]
    limit: usize,

    /// Dots standing in for removed parts.
    #[arg(long, default_value_t = DEFAULT_DOTS)]
    dots: usize,
}

impl ShortenUrlArgs {
    /// Execute the shorten-url command.
    ///
    /// # Errors
    ///
    /// Returns an error if the limit is zero.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        if self.limit == 0 {
            let message = "--limit must be greater than 0".to_owned();
            return Err(CliError::Validation(message));
        }

        let shortened = shorten_url(&self.url, self.limit, self.dots);
        writeln!(io::stdout(), "{shortened}")?;
        Ok(())
    }
}
