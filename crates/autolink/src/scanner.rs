//! Candidate scanning and splicing.
//!
//! A scan walks the text once, left to right, and keeps the candidates that
//! survive filtering as [`LinkMatch`]es. Rewriting then splices the rendered
//! markup over each match range and copies everything else verbatim.

use std::ops::Range;

use regex::{Captures, Regex};

use crate::pattern::{ATTR_GROUP, LINK_GROUP, email_regex};

/// What kind of link a match is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LinkKind {
    /// A URL, with or without scheme.
    Url,
    /// An email address.
    Email,
}

/// An accepted link candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkMatch<'t> {
    /// Byte range of the link text in the scanned string.
    ///
    /// Excludes the trimmed trailing punctuation, which stays in place.
    pub range: Range<usize>,
    /// The link text.
    pub text: &'t str,
    /// URL or email.
    pub kind: LinkKind,
    /// Trailing `.` or `)` left outside the link.
    pub trailing: Option<char>,
}

/// Collect accepted URL candidates.
pub(crate) fn scan_urls<'t>(regex: &Regex, text: &'t str, no_scheme: bool) -> Vec<LinkMatch<'t>> {
    regex
        .captures_iter(text)
        .filter_map(|caps| accept_url(&caps, no_scheme))
        .collect()
}

/// Collect accepted email candidates.
pub(crate) fn scan_emails(text: &str) -> Vec<LinkMatch<'_>> {
    email_regex()
        .captures_iter(text)
        .filter_map(|caps| accept_email(&caps))
        .collect()
}

/// Replace every match range with the output of `render`.
pub(crate) fn splice<F>(text: &str, matches: &[LinkMatch<'_>], mut render: F) -> String
where
    F: FnMut(&LinkMatch<'_>) -> String,
{
    if matches.is_empty() {
        return text.to_owned();
    }

    let mut result = String::with_capacity(text.len() + matches.len() * 32);
    let mut last = 0;

    for m in matches {
        result.push_str(&text[last..m.range.start]);
        result.push_str(&render(m));
        last = m.range.end;
    }

    result.push_str(&text[last..]);
    result
}

fn accept_url<'t>(caps: &Captures<'t>, no_scheme: bool) -> Option<LinkMatch<'t>> {
    let link = caps.name(LINK_GROUP)?;
    let raw = link.as_str();

    if inside_attribute(caps) {
        tracing::debug!(candidate = raw, "Skipping URL inside attribute value");
        return None;
    }

    if no_scheme && (raw.starts_with("://") || raw.starts_with('@')) {
        tracing::debug!(candidate = raw, "Skipping scheme-less fragment");
        return None;
    }

    if no_scheme && looks_like_email(raw) {
        tracing::debug!(candidate = raw, "Skipping email address");
        return None;
    }

    let raw = cut_stray_markup(raw);
    let (text, trailing) = match raw.chars().next_back() {
        Some(c @ ('.' | ')')) => (&raw[..raw.len() - 1], Some(c)),
        _ => (raw, None),
    };

    tracing::trace!(url = text, "Accepted URL");

    Some(LinkMatch {
        range: link.start()..link.start() + text.len(),
        text,
        kind: LinkKind::Url,
        trailing,
    })
}

fn accept_email<'t>(caps: &Captures<'t>) -> Option<LinkMatch<'t>> {
    let link = caps.name(LINK_GROUP)?;
    let raw = link.as_str();

    if inside_attribute(caps) {
        tracing::debug!(candidate = raw, "Skipping email inside attribute value");
        return None;
    }

    if raw.starts_with('.') {
        tracing::debug!(candidate = raw, "Skipping email starting with a dot");
        return None;
    }

    if raw.contains("://") {
        tracing::debug!(candidate = raw, "Skipping URL with credentials");
        return None;
    }

    let text = cut_stray_markup(raw);
    let tld = text.rsplit_once('.').map_or("", |(_, tld)| tld);
    if tld.chars().count() < 2 {
        tracing::debug!(candidate = raw, "Skipping email without a valid TLD");
        return None;
    }

    tracing::trace!(email = text, "Accepted email");

    Some(LinkMatch {
        range: link.start()..link.start() + text.len(),
        text,
        kind: LinkKind::Email,
        trailing: None,
    })
}

/// Whether the candidate sits in an attribute value.
///
/// A heuristic: text that merely looks like `word="` right before or inside
/// a URL is treated the same as a real attribute.
fn inside_attribute(caps: &Captures<'_>) -> bool {
    let has_prefix = caps.name(ATTR_GROUP).is_some_and(|m| !m.is_empty());
    let link = caps.name(LINK_GROUP).map_or("", |m| m.as_str());
    has_prefix || link.contains("=\"")
}

/// Drop everything from the first `"` or `>` on.
///
/// Both characters are only matched so that attribute values are swallowed
/// whole; outside an attribute they close the surrounding markup.
fn cut_stray_markup(raw: &str) -> &str {
    raw.find(['"', '>']).map_or(raw, |end| &raw[..end])
}

/// A scheme-less candidate with `@` before its path is an email address.
fn looks_like_email(raw: &str) -> bool {
    if raw.contains("://") {
        return false;
    }
    let authority = raw.split(['/', '?', '#']).next().unwrap_or_default();
    authority.contains('@')
}
