//! Configuration arguments shared by commands that build a converter.

use std::path::PathBuf;

use autolink::Autolink;
use autolink_config::{CliSettings, Config, LinkNoSchemeSetting};
use clap::Args;

use crate::error::CliError;

/// Config file location and option overrides.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover autolink.toml).
    #[arg(short, long, env = "AUTOLINK_CONFIG")]
    config: Option<PathBuf>,

    /// Remove known schemes from link texts (overrides config).
    #[arg(long)]
    strip_scheme: bool,

    /// Shorten link texts to this many characters, 0 to disable (overrides config).
    #[arg(long, value_name = "N")]
    text_limit: Option<usize>,

    /// Add a title attribute with the full URL (overrides config).
    #[arg(long)]
    auto_title: bool,

    /// Do not escape href values (overrides config).
    #[arg(long)]
    no_escape: bool,

    /// Link bare domains, optionally with a default scheme (overrides config).
    #[arg(
        long,
        value_name = "SCHEME",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    link_no_scheme: Option<String>,

    /// Additional scheme to link (repeatable).
    #[arg(long = "scheme", value_name = "SCHEME")]
    schemes: Vec<String>,

    /// Attribute added to every link (repeatable).
    #[arg(long = "attr", value_name = "NAME=VALUE", value_parser = parse_attribute)]
    attributes: Vec<(String, String)>,
}

impl ConfigArgs {
    /// Load the configuration with these arguments applied on top.
    pub(crate) fn load(&self) -> Result<Config, CliError> {
        let cli_settings = self.cli_settings();
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::debug!(path = %path.display(), "Using configuration file");
        }
        Ok(config)
    }

    /// Load the configuration and build a converter from it.
    pub(crate) fn build(&self) -> Result<(Config, Autolink), CliError> {
        let config = self.load()?;
        let autolink = config.build_autolink()?;
        Ok((config, autolink))
    }

    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            strip_scheme: self.strip_scheme.then_some(true),
            text_limit: self.text_limit,
            auto_title: self.auto_title.then_some(true),
            escape: self.no_escape.then_some(false),
            link_no_scheme: self.link_no_scheme.as_deref().map(parse_link_no_scheme),
            extra_schemes: self.schemes.clone(),
            attributes: self.attributes.clone(),
        }
    }
}

fn parse_link_no_scheme(value: &str) -> LinkNoSchemeSetting {
    match value {
        "true" => LinkNoSchemeSetting::Enabled(true),
        "false" => LinkNoSchemeSetting::Enabled(false),
        scheme => LinkNoSchemeSetting::Scheme(scheme.to_owned()),
    }
}

/// Parse a `NAME=VALUE` attribute argument.
fn parse_attribute(value: &str) -> Result<(String, String), String> {
    let (name, value) = value
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got {value:?}"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err("attribute name cannot be empty".to_owned());
    }
    Ok((name.to_owned(), value.to_owned()))
}
