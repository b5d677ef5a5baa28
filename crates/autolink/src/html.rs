//! Minimal HTML element serializer.
//!
//! This is a structural serializer only: attribute values and content are
//! written verbatim. Callers escape before handing values in.

use crate::attributes::{AttrValue, Attributes};

/// Elements that self-close when rendered without content.
const UNPAIRED_ELEMENTS: &[&str] = &[
    "img", "br", "hr", "area", "param", "wbr", "base", "link", "meta", "input", "option", "a",
    "source",
];

/// Boolean attributes and the token printed when they are switched on.
const TRUE_VALUE_MAPPING: &[(&str, &str)] = &[
    ("readonly", "readonly"),
    ("disabled", "disabled"),
    ("multiple", "true"),
    ("checked", "checked"),
    ("selected", "selected"),
];

/// Render an HTML element.
///
/// With `content` present the element is always paired. Without content,
/// unpaired elements such as `img` or `a` self-close (`<img src="x" />`)
/// unless `force_paired` is set; other elements render an empty pair.
///
/// # Example
///
/// ```
/// use autolink::{Attributes, html};
///
/// let attribs = Attributes::from([("href", "http://example.com")]);
/// assert_eq!(
///     html::render("a", &attribs, Some("example"), false),
///     r#"<a href="http://example.com">example</a>"#
/// );
/// assert_eq!(html::render("br", &Attributes::new(), None, false), "<br />");
/// ```
#[must_use]
pub fn render(
    tag: &str,
    attribs: &Attributes,
    content: Option<&str>,
    force_paired: bool,
) -> String {
    let tag = tag.trim();
    let paired = force_paired || !is_unpaired(tag);

    let mut html = String::with_capacity(tag.len() * 2 + content.map_or(0, str::len) + 16);
    html.push('<');
    html.push_str(tag);
    html.push_str(&render_attributes(attribs));

    match content {
        Some(content) => {
            html.push('>');
            html.push_str(content);
            push_closing(&mut html, tag);
        }
        None if paired => {
            html.push('>');
            push_closing(&mut html, tag);
        }
        None => html.push_str(" />"),
    }

    html
}

/// Serialize attributes, each preceded by a space.
///
/// `Bare` renders the name alone, `Omitted` renders nothing and string values
/// are double-quoted without escaping. The boolean attributes `readonly`,
/// `disabled`, `checked`, `selected` and `multiple` print their canonical
/// token when truthy and are dropped otherwise.
///
/// # Example
///
/// ```
/// use autolink::{AttrValue, Attributes, html};
///
/// let attribs = Attributes::new()
///     .with("type", "checkbox")
///     .with("checked", true)
///     .with("required", true)
///     .with("disabled", AttrValue::Omitted);
///
/// assert_eq!(
///     html::render_attributes(&attribs),
///     r#" type="checkbox" checked="checked" required"#
/// );
/// ```
#[must_use]
pub fn render_attributes(attribs: &Attributes) -> String {
    let mut out = String::new();

    for (name, value) in attribs.iter() {
        let value = normalize(name, value);
        match value {
            NormalizedValue::Bare => {
                out.push(' ');
                out.push_str(name);
            }
            NormalizedValue::Omitted => {}
            NormalizedValue::Value(value) => {
                out.push(' ');
                out.push_str(name);
                out.push('=');
                out.push_str(&quote(value));
            }
        }
    }

    out
}

/// Wrap a value in double quotes.
#[must_use]
pub fn quote(value: &str) -> String {
    format!("\"{value}\"")
}

fn is_unpaired(tag: &str) -> bool {
    let tag = tag.to_ascii_lowercase();
    UNPAIRED_ELEMENTS.contains(&tag.as_str())
}

fn push_closing(html: &mut String, tag: &str) {
    html.push_str("</");
    html.push_str(tag);
    html.push('>');
}

enum NormalizedValue<'a> {
    Bare,
    Omitted,
    Value(&'a str),
}

fn normalize<'a>(name: &str, value: &'a AttrValue) -> NormalizedValue<'a> {
    if let Some((_, token)) = TRUE_VALUE_MAPPING.iter().find(|(key, _)| *key == name) {
        return if value.is_truthy() {
            NormalizedValue::Value(token)
        } else {
            NormalizedValue::Omitted
        };
    }

    match value {
        AttrValue::Bare => NormalizedValue::Bare,
        AttrValue::Omitted => NormalizedValue::Omitted,
        AttrValue::Value(value) => NormalizedValue::Value(value),
    }
}
