//! The set of URL schemes that are turned into links.

use crate::error::{Result, validate_scheme};

/// Schemes recognized by a fresh [`Autolink`](crate::Autolink).
pub const DEFAULT_SCHEMES: &[&str] = &["http", "https", "ftp", "ftps"];

/// Ordered, deduplicated set of lowercase scheme names.
///
/// Matching against the set is case-insensitive. An empty set matches no URL
/// at all.
///
/// # Example
///
/// ```
/// use autolink::SchemeSet;
///
/// let mut schemes = SchemeSet::default();
/// schemes.add("Skype")?;
/// schemes.add("http")?;
///
/// assert_eq!(schemes.as_list(), ["http", "https", "ftp", "ftps", "skype"]);
/// assert_eq!(schemes.alternation(), "http|https|ftp|ftps|skype");
/// # Ok::<(), autolink::AutolinkError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemeSet {
    items: Vec<String>,
}

impl Default for SchemeSet {
    fn default() -> Self {
        Self {
            items: DEFAULT_SCHEMES.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

impl SchemeSet {
    /// Create an empty set.
    #[must_use]
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Add a scheme, lowercased. Adding a known scheme is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `AutolinkError::InvalidConfiguration` if `scheme` is not a
    /// valid scheme name.
    pub fn add(&mut self, scheme: &str) -> Result<()> {
        let scheme = scheme.to_lowercase();
        validate_scheme(&scheme, "scheme")?;
        if !self.items.contains(&scheme) {
            self.items.push(scheme);
        }
        Ok(())
    }

    /// Remove a scheme. Removing an unknown scheme is a no-op.
    pub fn remove(&mut self, scheme: &str) {
        let scheme = scheme.to_lowercase();
        self.items.retain(|s| *s != scheme);
    }

    /// Replace the whole set.
    ///
    /// An empty iterator leaves the set empty.
    ///
    /// # Errors
    ///
    /// Returns `AutolinkError::InvalidConfiguration` if any scheme is invalid;
    /// the set is left unchanged in that case.
    pub fn set<I, S>(&mut self, schemes: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut replacement = Self::empty();
        for scheme in schemes {
            replacement.add(scheme.as_ref())?;
        }
        *self = replacement;
        Ok(())
    }

    /// Check if the set contains a scheme (case-insensitive).
    #[must_use]
    pub fn contains(&self, scheme: &str) -> bool {
        self.items.iter().any(|s| s.eq_ignore_ascii_case(scheme))
    }

    /// Schemes in insertion order.
    #[must_use]
    pub fn as_list(&self) -> &[String] {
        &self.items
    }

    /// Iterate over the schemes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Schemes joined with `|`.
    ///
    /// The names are not regex-escaped; pattern builders do that themselves.
    #[must_use]
    pub fn alternation(&self) -> String {
        self.items.join("|")
    }

    /// Number of schemes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Strip a leading `scheme://` of any scheme in the set.
    ///
    /// Returns `None` if `url` does not start with a known scheme.
    #[must_use]
    pub(crate) fn strip_from<'a>(&self, url: &'a str) -> Option<&'a str> {
        let (scheme, rest) = url.split_once("://")?;
        self.contains(scheme).then_some(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schemes() {
        let schemes = SchemeSet::default();
        assert_eq!(schemes.as_list(), ["http", "https", "ftp", "ftps"]);
    }

    #[test]
    fn test_add_lowercases_and_dedups() {
        let mut schemes = SchemeSet::default();
        schemes.add("A").unwrap();
        schemes.add("b").unwrap();
        schemes.add("HTTP").unwrap();
        assert_eq!(
            schemes.as_list(),
            ["http", "https", "ftp", "ftps", "a", "b"]
        );
        assert_eq!(schemes.alternation(), "http|https|ftp|ftps|a|b");
    }

    #[test]
    fn test_set_replaces() {
        let mut schemes = SchemeSet::default();

        schemes.set(["skype"]).unwrap();
        assert_eq!(schemes.as_list(), ["skype"]);

        schemes.set(["mailto", "MAILTO"]).unwrap();
        assert_eq!(schemes.as_list(), ["mailto"]);

        schemes.remove("mailto");
        assert!(schemes.is_empty());
    }

    #[test]
    fn test_set_invalid_leaves_set_unchanged() {
        let mut schemes = SchemeSet::default();
        assert!(schemes.set(["skype", "no way"]).is_err());
        assert_eq!(schemes.len(), 4);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut schemes = SchemeSet::default();
        schemes.remove("gopher");
        assert_eq!(schemes.len(), 4);
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let schemes = SchemeSet::default();
        assert!(schemes.contains("HTTPS"));
        assert!(!schemes.contains("skype"));
    }

    #[test]
    fn test_strip_from() {
        let schemes = SchemeSet::default();
        let url = "HTTP://example.com/a";
        assert_eq!(schemes.strip_from(url), Some("example.com/a"));
        assert_eq!(schemes.strip_from("skype://example.com"), None);
        assert_eq!(schemes.strip_from("example.com"), None);
    }
}
