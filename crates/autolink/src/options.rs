//! Conversion options.

use std::fmt;
use std::sync::Arc;

use crate::error::{Result, validate_scheme};

/// Scheme injected into `href` values when no-scheme mode is merely enabled.
pub const DEFAULT_NO_SCHEME: &str = "http";

/// Options that change how links are matched and rendered.
///
/// # Example
///
/// ```
/// use autolink::{AutolinkOptions, TextLimit};
///
/// let options = AutolinkOptions {
///     strip_scheme: true,
///     text_limit: Some(TextLimit::Chars(30)),
///     ..Default::default()
/// };
/// assert!(options.escape);
/// ```
#[derive(Clone, Debug)]
pub struct AutolinkOptions {
    /// Remove a recognized `scheme://` prefix from the link text.
    pub strip_scheme: bool,
    /// Shorten or rewrite the link text.
    pub text_limit: Option<TextLimit>,
    /// Add a `title` attribute holding the full URL.
    pub auto_title: bool,
    /// Escape `href` values with the escape handler.
    pub escape: bool,
    /// Link bare `domain.tld` text that has no scheme.
    pub link_no_scheme: LinkNoScheme,
}

impl Default for AutolinkOptions {
    fn default() -> Self {
        Self {
            strip_scheme: false,
            text_limit: None,
            auto_title: false,
            escape: true,
            link_no_scheme: LinkNoScheme::Disabled,
        }
    }
}

impl AutolinkOptions {
    /// Check option values that cannot be expressed in the type.
    ///
    /// # Errors
    ///
    /// Returns `AutolinkError::InvalidConfiguration` if the no-scheme default
    /// is not a valid scheme name.
    pub fn validate(&self) -> Result<()> {
        if let LinkNoScheme::Scheme(scheme) = &self.link_no_scheme {
            validate_scheme(scheme, "link_no_scheme")?;
        }
        Ok(())
    }
}

/// How link text gets shortened.
#[derive(Clone)]
pub enum TextLimit {
    /// Truncate to this many characters, ending with `...`. Zero disables.
    Chars(usize),
    /// Rewrite the link text with a custom function.
    Custom(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl TextLimit {
    /// Wrap a function as a custom limit.
    pub fn custom(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Apply the limit to a link text.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        match self {
            Self::Chars(limit) => crate::shorten::shorten(text, *limit),
            Self::Custom(f) => f(text),
        }
    }
}

impl fmt::Debug for TextLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chars(limit) => f.debug_tuple("Chars").field(limit).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<usize> for TextLimit {
    fn from(limit: usize) -> Self {
        Self::Chars(limit)
    }
}

/// No-scheme mode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LinkNoScheme {
    /// Only text with a recognized scheme is linked.
    #[default]
    Disabled,
    /// Bare domains are linked with `http://` prepended to the `href`.
    Enabled,
    /// Bare domains are linked with this scheme prepended to the `href`.
    Scheme(String),
}

impl LinkNoScheme {
    /// Whether bare domains are linked.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Scheme prepended to scheme-less `href` values, if enabled.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        match self {
            Self::Disabled => None,
            Self::Enabled => Some(DEFAULT_NO_SCHEME),
            Self::Scheme(scheme) => Some(scheme),
        }
    }
}

impl From<bool> for LinkNoScheme {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }
}

impl From<&str> for LinkNoScheme {
    fn from(scheme: &str) -> Self {
        Self::Scheme(scheme.to_owned())
    }
}

impl From<String> for LinkNoScheme {
    fn from(scheme: String) -> Self {
        Self::Scheme(scheme)
    }
}
