//! Custom link rendering.

use crate::attributes::Attributes;

/// Renders the final markup for a link, replacing the default `<a>` element.
///
/// The builder receives the link text unescaped, and the attributes with
/// `href` (and `title`, when enabled) already set. Its output is used
/// verbatim.
///
/// Any `Fn(&str, &Attributes) -> String` closure is a builder:
///
/// ```
/// use autolink::{Attributes, Autolink};
///
/// let mut autolink = Autolink::new();
/// autolink.set_link_builder(|text: &str, attribs: &Attributes| {
///     let href = attribs.get("href").and_then(|v| v.as_str()).unwrap_or_default();
///     format!("[{text}]({href})")
/// });
///
/// assert_eq!(
///     autolink.convert("see http://example.com", &Attributes::new()),
///     "see [http://example.com](http://example.com)"
/// );
/// ```
pub trait LinkBuilder: Send + Sync {
    /// Build the markup for one link.
    fn build_link(&self, text: &str, attribs: &Attributes) -> String;
}

impl<F> LinkBuilder for F
where
    F: Fn(&str, &Attributes) -> String + Send + Sync,
{
    fn build_link(&self, text: &str, attribs: &Attributes) -> String {
        self(text, attribs)
    }
}
