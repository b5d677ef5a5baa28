//! Configuration management for autolink.
//!
//! Parses `autolink.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `options.link_no_scheme` (when a scheme name)
//! - every string value in `[attributes]`

mod expand;

use std::path::{Path, PathBuf};

use autolink::{
    AttrValue, Attributes, Autolink, AutolinkOptions, LinkNoScheme, SchemeSet, TextLimit,
};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config;
/// schemes and attributes are added to the configured ones.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override `options.strip_scheme`.
    pub strip_scheme: Option<bool>,
    /// Override `options.text_limit`.
    pub text_limit: Option<usize>,
    /// Override `options.auto_title`.
    pub auto_title: Option<bool>,
    /// Override `options.escape`.
    pub escape: Option<bool>,
    /// Override `options.link_no_scheme`.
    pub link_no_scheme: Option<LinkNoSchemeSetting>,
    /// Schemes appended to `schemes.extra`.
    pub extra_schemes: Vec<String>,
    /// Attributes set on top of `[attributes]`.
    pub attributes: Vec<(String, String)>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "autolink.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Conversion options.
    pub options: OptionsConfig,
    /// Linked schemes.
    pub schemes: SchemesConfig,
    /// Attributes added to every generated link.
    attributes: Attributes,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// `[options]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OptionsConfig {
    /// Remove known schemes from link texts.
    pub strip_scheme: bool,
    /// Maximum link text length; `0` disables shortening.
    pub text_limit: usize,
    /// Add a `title` attribute with the full URL.
    pub auto_title: bool,
    /// Escape `href` values.
    pub escape: bool,
    /// Link bare domains, optionally with a default scheme.
    pub link_no_scheme: LinkNoSchemeSetting,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            strip_scheme: false,
            text_limit: 0,
            auto_title: false,
            escape: true,
            link_no_scheme: LinkNoSchemeSetting::Enabled(false),
        }
    }
}

/// `link_no_scheme` as written in TOML: a flag or a scheme name.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LinkNoSchemeSetting {
    /// `true` links bare domains with `http://`.
    Enabled(bool),
    /// Links bare domains with this scheme.
    Scheme(String),
}

impl Default for LinkNoSchemeSetting {
    fn default() -> Self {
        Self::Enabled(false)
    }
}

impl From<&LinkNoSchemeSetting> for LinkNoScheme {
    fn from(setting: &LinkNoSchemeSetting) -> Self {
        match setting {
            LinkNoSchemeSetting::Enabled(enabled) => Self::from(*enabled),
            LinkNoSchemeSetting::Scheme(scheme) => Self::from(scheme.as_str()),
        }
    }
}

/// `[schemes]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SchemesConfig {
    /// Schemes appended to the base set.
    pub extra: Vec<String>,
    /// Replaces the default schemes when set.
    pub replace: Option<Vec<String>>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`attributes.target`").
        field: String,
        /// Error message (e.g., "${`LINK_TARGET`} not set").
        message: String,
    },
    /// The converter rejected the resulting settings.
    #[error(transparent)]
    Autolink(#[from] autolink::AutolinkError),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require every entry of a scheme list to be a valid scheme name.
fn require_schemes(schemes: &[String], field: &str) -> Result<(), ConfigError> {
    let mut set = SchemeSet::empty();
    for scheme in schemes {
        require_non_empty(scheme, field)?;
        set.add(scheme)
            .map_err(|e| ConfigError::Validation(format!("{field}: {e}")))?;
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `autolink.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(strip_scheme) = settings.strip_scheme {
            self.options.strip_scheme = strip_scheme;
        }
        if let Some(text_limit) = settings.text_limit {
            self.options.text_limit = text_limit;
        }
        if let Some(auto_title) = settings.auto_title {
            self.options.auto_title = auto_title;
        }
        if let Some(escape) = settings.escape {
            self.options.escape = escape;
        }
        if let Some(link_no_scheme) = &settings.link_no_scheme {
            self.options.link_no_scheme = link_no_scheme.clone();
        }
        self.schemes
            .extra
            .extend(settings.extra_schemes.iter().cloned());
        for (name, value) in &settings.attributes {
            self.attributes.set(name.clone(), value.clone());
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let LinkNoSchemeSetting::Scheme(scheme) = &self.options.link_no_scheme {
            require_non_empty(scheme, "options.link_no_scheme")?;
            self.autolink_options()
                .validate()
                .map_err(|e| ConfigError::Validation(format!("options.link_no_scheme: {e}")))?;
        }

        require_schemes(&self.schemes.extra, "schemes.extra")?;
        if let Some(replace) = &self.schemes.replace {
            require_schemes(replace, "schemes.replace")?;
        }

        for (name, _) in self.attributes.iter() {
            require_non_empty(name.trim(), "attributes key")?;
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let LinkNoSchemeSetting::Scheme(scheme) = &self.options.link_no_scheme {
            let scheme = expand::expand_env(scheme, "options.link_no_scheme")?;
            self.options.link_no_scheme = LinkNoSchemeSetting::Scheme(scheme);
        }

        self.attributes = self
            .attributes
            .iter()
            .map(|(name, value)| -> Result<(String, AttrValue), ConfigError> {
                let value = match value {
                    AttrValue::Value(value) => {
                        let field = format!("attributes.{name}");
                        AttrValue::Value(expand::expand_env(value, &field)?)
                    }
                    other => other.clone(),
                };
                Ok((name.to_owned(), value))
            })
            .collect::<Result<_, _>>()?;

        Ok(())
    }

    /// Converter options described by `[options]`.
    #[must_use]
    pub fn autolink_options(&self) -> AutolinkOptions {
        let options = &self.options;
        AutolinkOptions {
            strip_scheme: options.strip_scheme,
            text_limit: (options.text_limit > 0).then_some(TextLimit::Chars(options.text_limit)),
            auto_title: options.auto_title,
            escape: options.escape,
            link_no_scheme: LinkNoScheme::from(&options.link_no_scheme),
        }
    }

    /// Build a converter from this configuration.
    ///
    /// `schemes.replace` replaces the default schemes, then `schemes.extra`
    /// is appended.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Autolink` if an option or scheme is rejected.
    pub fn build_autolink(&self) -> Result<Autolink, ConfigError> {
        let mut autolink = Autolink::with_options(self.autolink_options())?;
        if let Some(replace) = &self.schemes.replace {
            autolink.set_schemes(replace)?;
        }
        autolink.add_schemes(&self.schemes.extra)?;

        tracing::debug!(schemes = %autolink.schemes().alternation(), "Built converter");
        Ok(autolink)
    }

    /// Attributes added to every generated link.
    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}
