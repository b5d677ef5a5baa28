//! Link text shortening.

use std::sync::LazyLock;

use regex::Regex;

/// Default number of characters kept from the last URL segment.
pub const DEFAULT_LAST_PART_LIMIT: usize = 15;

/// Default number of dots standing in for removed URL parts.
pub const DEFAULT_DOTS: usize = 6;

/// RFC 3986 appendix B, anchored. Everything before `path` is kept verbatim.
static URL_PARTS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?s)^(?:(?P<scheme>[^:/?#]+):)?",
        r"(?://(?P<authority>[^/?#]*))?",
        r"(?P<path>[^?#]*)",
        r"(?:\?(?P<query>[^#]*))?",
        r"(?:#(?P<fragment>.*))?$",
    ))
    .unwrap()
});

/// Truncate `text` to `limit` characters, ending with `...`.
///
/// Text that fits is returned unchanged, and a limit of zero disables
/// shortening.
///
/// # Example
///
/// ```
/// use autolink::shorten;
///
/// assert_eq!(shorten("http://example.com/long/path", 20), "http://example.co...");
/// assert_eq!(shorten("http://example.com", 20), "http://example.com");
/// assert_eq!(shorten("http://example.com", 0), "http://example.com");
/// ```
#[must_use]
pub fn shorten(text: &str, limit: usize) -> String {
    if limit == 0 || text.chars().count() <= limit {
        return text.to_owned();
    }

    let mut result: String = text.chars().take(limit.saturating_sub(3)).collect();
    result.push_str("...");
    result
}

/// Shorten a URL while keeping its scheme, credentials, host and port.
///
/// When the path, query and fragment together are longer than
/// `last_part_limit` characters, everything but the text after the last `/`
/// is replaced by `dots` dots. That last part is itself cut to
/// `last_part_limit` characters (followed by `dots` dots) when too long.
/// A `/` always separates the dots from the last part, even when the last
/// part is kept whole (`head/....../page.html`).
///
/// Applying the function to its own output changes nothing.
///
/// # Example
///
/// ```
/// use autolink::{DEFAULT_DOTS, DEFAULT_LAST_PART_LIMIT, shorten_url};
///
/// let url = "http://campus.asukademy.com/learning/job/84-find-internship-opportunity-through-platform.html";
/// assert_eq!(
///     shorten_url(url, DEFAULT_LAST_PART_LIMIT, DEFAULT_DOTS),
///     "http://campus.asukademy.com/....../84-find-interns......"
/// );
/// assert_eq!(shorten_url("http://example.com", 15, 6), "http://example.com/");
/// ```
#[must_use]
pub fn shorten_url(url: &str, last_part_limit: usize, dots: usize) -> String {
    let split = URL_PARTS_RE
        .captures(url)
        .and_then(|caps| caps.name("path"))
        .map_or(url.len(), |path| path.start());
    let (head, tail) = url.split_at(split);

    if tail.is_empty() {
        return format!("{head}/");
    }

    if tail.chars().count() <= last_part_limit {
        return url.to_owned();
    }

    let dots = ".".repeat(dots);
    let last = tail.rsplit_once('/').map_or(tail, |(_, last)| last);

    if last.chars().count() > last_part_limit {
        let kept: String = last.chars().take(last_part_limit).collect();
        format!("{head}/{dots}/{kept}{dots}")
    } else {
        format!("{head}/{dots}/{last}")
    }
}
