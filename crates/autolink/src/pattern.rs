//! Regular expressions for URL and email candidates.
//!
//! Both patterns start with an optional `attr="` prefix. It is captured only
//! so that candidates sitting inside an existing attribute value can be
//! recognized and left alone.

use std::sync::LazyLock;

use regex::Regex;

use crate::schemes::SchemeSet;

/// Name of the capture group holding the `attr="` prefix.
pub(crate) const ATTR_GROUP: &str = "attr";

/// Name of the capture group holding the link text.
pub(crate) const LINK_GROUP: &str = "link";

/// Hostnames linked without a TLD in no-scheme mode.
pub(crate) const BARE_HOSTS: &[&str] = &["localhost"];

/// `href="`, `src="`, ... repeated.
const ATTR_PREFIX: &str = r#"(?P<attr>(?:[a-zA-Z]*=")*)"#;

/// Domain labels followed by a TLD of two or more letters.
const DOMAIN: &str = r"[\-\p{L}\p{N}\p{M}]+\.[\p{L}\p{M}]{2,}";

/// Path, query and fragment characters.
///
/// `"` and `>` are included so that an attribute value such as
/// `href="http://x.com">text` is swallowed whole and rejected.
const CONTINUATION: &str = r#"[/\p{L}\p{N}\p{M}\-._\~:?#\[\]@!$\&'()*+,;=%">]*"#;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?P<attr>(?:[a-zA-Z]*=")*)"#,
        r"(?P<link>",
        r"[a-zA-Z0-9!#$%\&'*+,\-./=?^_`{|}\~:]+",
        r"@",
        r"[a-zA-Z0-9!#$%\&'*+,\-./=?^_`{|}\~]+",
        r#"\.[\p{L}">]{2,}"#,
        r")",
    ))
    .unwrap()
});

/// Pattern for email candidates.
pub(crate) fn email_regex() -> &'static Regex {
    &EMAIL_RE
}

/// Build the URL candidate pattern for a scheme set.
///
/// Returns `None` for an empty scheme set, which links nothing.
pub(crate) fn build_url_regex(schemes: &SchemeSet, no_scheme: bool) -> Option<Regex> {
    if schemes.is_empty() {
        return None;
    }

    let source = url_pattern_source(schemes, no_scheme);
    match Regex::new(&source) {
        Ok(regex) => {
            tracing::debug!(schemes = %schemes.alternation(), no_scheme, "Built URL pattern");
            Some(regex)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to compile URL pattern");
            None
        }
    }
}

fn url_pattern_source(schemes: &SchemeSet, no_scheme: bool) -> String {
    let alternation = schemes
        .iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");

    if no_scheme {
        let bare_hosts = BARE_HOSTS
            .iter()
            .map(|host| format!(r"\b{}\b", regex::escape(host)))
            .collect::<Vec<_>>()
            .join("|");
        format!(
            "{ATTR_PREFIX}(?P<link>(?:(?i:{alternation})?://|@)?(?:{DOMAIN}|{bare_hosts})(?:{CONTINUATION})?)"
        )
    } else {
        format!(
            "{ATTR_PREFIX}(?P<link>(?i:{alternation})://{DOMAIN}(?:{CONTINUATION})?)"
        )
    }
}
