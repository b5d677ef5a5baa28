//! Text escaping for generated markup.

use std::sync::Arc;

/// Shared, swappable escaping function.
///
/// Used for link text, `title` values and (when auto-escaping is enabled)
/// `href` values.
pub type EscapeHandler = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Escape the five HTML special characters.
///
/// `&`, `<`, `>`, `"` and `'` become `&amp;`, `&lt;`, `&gt;`, `&quot;` and
/// `&#039;`. Existing entities are escaped again (`&amp;` becomes
/// `&amp;amp;`).
///
/// # Example
///
/// ```
/// use autolink::escape_html;
///
/// assert_eq!(escape_html("a=1&b='2'"), "a=1&amp;b=&#039;2&#039;");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#039;"),
            _ => result.push(c),
        }
    }
    result
}

/// The handler installed on a fresh [`Autolink`](crate::Autolink).
pub(crate) fn default_handler() -> EscapeHandler {
    Arc::new(escape_html)
}
