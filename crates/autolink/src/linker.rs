//! The [`Autolink`] converter and its configuration surface.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::attributes::Attributes;
use crate::builder::LinkBuilder;
use crate::error::Result;
use crate::escape::{self, EscapeHandler};
use crate::options::{AutolinkOptions, LinkNoScheme, TextLimit};
use crate::pattern::build_url_regex;
use crate::scanner::{self, LinkMatch};
use crate::schemes::SchemeSet;
use crate::shorten;

/// Finds URLs and email addresses in text and turns them into links.
///
/// Conversions take `&self` and never fail. Configuration changes take
/// `&mut self`; the URL pattern is recompiled whenever the scheme set or the
/// no-scheme mode changes.
///
/// # Example
///
/// ```
/// use autolink::{Attributes, Autolink};
///
/// let autolink = Autolink::new();
/// let html = autolink.convert("Docs: https://docs.rs.", &Attributes::new());
/// assert_eq!(html, r#"Docs: <a href="https://docs.rs">https://docs.rs</a>."#);
/// ```
#[derive(Clone)]
pub struct Autolink {
    pub(crate) options: AutolinkOptions,
    pub(crate) schemes: SchemeSet,
    url_regex: Option<Regex>,
    pub(crate) link_builder: Option<Arc<dyn LinkBuilder>>,
    escape_handler: EscapeHandler,
}

impl Default for Autolink {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Autolink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Autolink")
            .field("options", &self.options)
            .field("schemes", &self.schemes)
            .field("link_builder", &self.link_builder.is_some())
            .finish_non_exhaustive()
    }
}

impl Autolink {
    /// Create a converter with default options and schemes.
    #[must_use]
    pub fn new() -> Self {
        let schemes = SchemeSet::default();
        let url_regex = build_url_regex(&schemes, false);
        Self {
            options: AutolinkOptions::default(),
            schemes,
            url_regex,
            link_builder: None,
            escape_handler: escape::default_handler(),
        }
    }

    /// Create a converter with the given options and default schemes.
    ///
    /// # Errors
    ///
    /// Returns `AutolinkError::InvalidConfiguration` if the options fail
    /// validation.
    pub fn with_options(options: AutolinkOptions) -> Result<Self> {
        let mut autolink = Self::new();
        autolink.set_options(options)?;
        Ok(autolink)
    }

    /// Create a converter with the given options and extra schemes added to
    /// the defaults.
    ///
    /// # Errors
    ///
    /// Returns `AutolinkError::InvalidConfiguration` if the options or a
    /// scheme name are invalid.
    pub fn with_schemes<I, S>(options: AutolinkOptions, schemes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut autolink = Self::with_options(options)?;
        autolink.add_schemes(schemes)?;
        Ok(autolink)
    }

    /// Replace every URL in `text` with a link.
    ///
    /// `attribs` are added to each generated element; `href` is always
    /// overwritten.
    #[must_use]
    pub fn convert(&self, text: &str, attribs: &Attributes) -> String {
        let matches = self.scan(text);
        scanner::splice(text, &matches, |m| self.link(m.text, attribs))
    }

    /// Replace every email address in `text` with a `mailto:` link.
    #[must_use]
    pub fn convert_email(&self, text: &str, attribs: &Attributes) -> String {
        let matches = self.scan_emails(text);
        scanner::splice(text, &matches, |m| self.link_email(m.text, attribs))
    }

    /// Convert email addresses, then URLs.
    ///
    /// Emails go first so the URL pass sees them as attribute values of the
    /// generated links.
    #[must_use]
    pub fn convert_all(&self, text: &str, attribs: &Attributes) -> String {
        let text = self.convert_email(text, attribs);
        self.convert(&text, attribs)
    }

    /// Find the URLs [`convert`](Self::convert) would link.
    #[must_use]
    pub fn scan<'t>(&self, text: &'t str) -> Vec<LinkMatch<'t>> {
        match &self.url_regex {
            Some(regex) => {
                scanner::scan_urls(regex, text, self.options.link_no_scheme.is_enabled())
            }
            None => Vec::new(),
        }
    }

    /// Find the email addresses [`convert_email`](Self::convert_email) would link.
    #[must_use]
    pub fn scan_emails<'t>(&self, text: &'t str) -> Vec<LinkMatch<'t>> {
        scanner::scan_emails(text)
    }

    /// Truncate `text` to `limit` characters. See [`shorten`](crate::shorten()).
    #[must_use]
    pub fn shorten(text: &str, limit: usize) -> String {
        shorten::shorten(text, limit)
    }

    /// Shorten a URL structurally. See [`shorten_url`](crate::shorten_url()).
    #[must_use]
    pub fn shorten_url(url: &str, last_part_limit: usize, dots: usize) -> String {
        shorten::shorten_url(url, last_part_limit, dots)
    }

    /// Add a scheme to the set of linked schemes.
    ///
    /// # Errors
    ///
    /// Returns `AutolinkError::InvalidConfiguration` for an invalid scheme name.
    pub fn add_scheme(&mut self, scheme: &str) -> Result<&mut Self> {
        self.schemes.add(scheme)?;
        self.rebuild_url_regex();
        Ok(self)
    }

    /// Add several schemes at once.
    ///
    /// # Errors
    ///
    /// Returns `AutolinkError::InvalidConfiguration` for an invalid scheme
    /// name. Schemes before the invalid one stay added.
    pub fn add_schemes<I, S>(&mut self, schemes: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let result = schemes
            .into_iter()
            .try_for_each(|scheme| self.schemes.add(scheme.as_ref()));
        self.rebuild_url_regex();
        result?;
        Ok(self)
    }

    /// Stop linking a scheme.
    pub fn remove_scheme(&mut self, scheme: &str) -> &mut Self {
        self.schemes.remove(scheme);
        self.rebuild_url_regex();
        self
    }

    /// Replace the scheme set. An empty set disables URL linking.
    ///
    /// # Errors
    ///
    /// Returns `AutolinkError::InvalidConfiguration` for an invalid scheme
    /// name; the current set is kept in that case.
    pub fn set_schemes<I, S>(&mut self, schemes: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.schemes.set(schemes)?;
        self.rebuild_url_regex();
        Ok(self)
    }

    /// The linked schemes.
    #[must_use]
    pub fn schemes(&self) -> &SchemeSet {
        &self.schemes
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &AutolinkOptions {
        &self.options
    }

    /// Replace all options.
    ///
    /// # Errors
    ///
    /// Returns `AutolinkError::InvalidConfiguration` if the options fail
    /// validation; the current options are kept in that case.
    pub fn set_options(&mut self, options: AutolinkOptions) -> Result<&mut Self> {
        options.validate()?;
        let pattern_changed =
            options.link_no_scheme.is_enabled() != self.options.link_no_scheme.is_enabled();
        self.options = options;
        if pattern_changed {
            self.rebuild_url_regex();
        }
        Ok(self)
    }

    /// Remove known schemes from link texts.
    pub fn set_strip_scheme(&mut self, strip_scheme: bool) -> &mut Self {
        self.options.strip_scheme = strip_scheme;
        self
    }

    /// Whether known schemes are removed from link texts.
    #[must_use]
    pub fn strip_scheme(&self) -> bool {
        self.options.strip_scheme
    }

    /// Set or clear the link text limit.
    pub fn set_text_limit(&mut self, text_limit: Option<TextLimit>) -> &mut Self {
        self.options.text_limit = text_limit;
        self
    }

    /// The link text limit, if any.
    #[must_use]
    pub fn text_limit(&self) -> Option<&TextLimit> {
        self.options.text_limit.as_ref()
    }

    /// Add a `title` attribute with the full URL to every link.
    pub fn set_auto_title(&mut self, auto_title: bool) -> &mut Self {
        self.options.auto_title = auto_title;
        self
    }

    /// Whether links get a `title` attribute.
    #[must_use]
    pub fn auto_title(&self) -> bool {
        self.options.auto_title
    }

    /// Escape `href` values with the escape handler.
    pub fn set_auto_escape(&mut self, escape: bool) -> &mut Self {
        self.options.escape = escape;
        self
    }

    /// Whether `href` values are escaped.
    #[must_use]
    pub fn auto_escape(&self) -> bool {
        self.options.escape
    }

    /// Configure no-scheme mode.
    ///
    /// Accepts `bool` or a default scheme name.
    ///
    /// # Errors
    ///
    /// Returns `AutolinkError::InvalidConfiguration` if the scheme name is
    /// invalid.
    pub fn set_link_no_scheme(
        &mut self,
        link_no_scheme: impl Into<LinkNoScheme>,
    ) -> Result<&mut Self> {
        let options = AutolinkOptions {
            link_no_scheme: link_no_scheme.into(),
            ..self.options.clone()
        };
        self.set_options(options)
    }

    /// Current no-scheme mode.
    #[must_use]
    pub fn link_no_scheme(&self) -> &LinkNoScheme {
        &self.options.link_no_scheme
    }

    /// Render links with a custom builder instead of `<a>` elements.
    pub fn set_link_builder(&mut self, builder: impl LinkBuilder + 'static) -> &mut Self {
        self.link_builder = Some(Arc::new(builder));
        self
    }

    /// Go back to rendering `<a>` elements.
    pub fn clear_link_builder(&mut self) -> &mut Self {
        self.link_builder = None;
        self
    }

    /// The custom link builder, if any.
    #[must_use]
    pub fn link_builder(&self) -> Option<&Arc<dyn LinkBuilder>> {
        self.link_builder.as_ref()
    }

    /// Replace the function used to escape link texts, titles and `href`s.
    pub fn set_escape_handler(
        &mut self,
        handler: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> &mut Self {
        self.escape_handler = Arc::new(handler);
        self
    }

    /// Go back to [`escape_html`](crate::escape_html).
    pub fn reset_escape_handler(&mut self) -> &mut Self {
        self.escape_handler = escape::default_handler();
        self
    }

    /// Escape text with the current escape handler.
    #[must_use]
    pub fn escape(&self, text: &str) -> String {
        (self.escape_handler)(text)
    }

    fn rebuild_url_regex(&mut self) {
        self.url_regex = build_url_regex(&self.schemes, self.options.link_no_scheme.is_enabled());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Autolink>();
    }

    #[test]
    fn test_with_schemes_appends_to_defaults() {
        let options = AutolinkOptions::default();
        let autolink = Autolink::with_schemes(options, ["a", "b", "http"]).unwrap();
        assert_eq!(
            autolink.schemes().as_list(),
            ["http", "https", "ftp", "ftps", "a", "b"]
        );
    }

    #[test]
    fn test_with_options_rejects_invalid_scheme() {
        let options = AutolinkOptions {
            link_no_scheme: LinkNoScheme::from("not a scheme"),
            ..Default::default()
        };
        assert!(Autolink::with_options(options).is_err());
    }

    #[test]
    fn test_set_link_no_scheme_keeps_options_on_error() {
        let mut autolink = Autolink::new();
        autolink.set_link_no_scheme("https").unwrap();
        assert!(autolink.set_link_no_scheme("").is_err());
        assert_eq!(autolink.link_no_scheme(), &LinkNoScheme::from("https"));
    }

    #[test]
    fn test_empty_scheme_set_links_nothing() {
        let mut autolink = Autolink::new();
        autolink.set_schemes(Vec::<String>::new()).unwrap();
        autolink.set_link_no_scheme(true).unwrap();

        let text = "http://example.com and example.com";
        assert_eq!(autolink.convert(text, &Attributes::new()), text);
    }

    #[test]
    fn test_add_schemes_rebuilds_even_on_error() {
        let mut autolink = Autolink::new();
        assert!(autolink.add_schemes(["skype", "bad scheme"]).is_err());
        assert!(autolink.schemes().contains("skype"));
        assert_eq!(
            autolink.convert("skype://example.com", &Attributes::new()),
            r#"<a href="skype://example.com">skype://example.com</a>"#
        );
    }

    #[test]
    fn test_remove_scheme_stops_linking() {
        let mut autolink = Autolink::new();
        autolink.remove_scheme("ftp");
        assert_eq!(
            autolink.convert("ftp://example.com", &Attributes::new()),
            "ftp://example.com"
        );
    }

    #[test]
    fn test_escape_handler_swap_and_reset() {
        let mut autolink = Autolink::new();
        autolink.set_escape_handler(|s: &str| s.replace('&', "&#38;"));
        assert_eq!(autolink.escape("a&b"), "a&#38;b");

        autolink.reset_escape_handler();
        assert_eq!(autolink.escape("a&b"), "a&amp;b");
    }

    #[test]
    fn test_escape_handler_applies_to_next_conversion() {
        let mut autolink = Autolink::new();
        let text = "x http://x.com/?a&b y";
        let escaped = "http://x.com/?a&amp;b";
        let expected = format!("x {} y", anchor(escaped, escaped));
        assert_eq!(convert(&autolink, text), expected);

        autolink.set_escape_handler(|s: &str| s.replace('&', "&#38;"));
        let escaped = "http://x.com/?a&#38;b";
        let expected = format!("x {} y", anchor(escaped, escaped));
        assert_eq!(convert(&autolink, text), expected);

        autolink.set_auto_title(true);
        assert_eq!(
            autolink.link("http://x.com/?a&b", &Attributes::new()),
            format!(r#"<a href="{escaped}" title="{escaped}">{escaped}</a>"#)
        );

        autolink.set_auto_escape(false);
        let raw_href = "http://x.com/?a&b";
        assert_eq!(
            autolink.link("http://x.com/?a&b", &Attributes::new()),
            format!(r#"<a href="{raw_href}" title="{escaped}">{escaped}</a>"#)
        );
    }

    #[test]
    fn test_debug_hides_handlers() {
        let debug = format!("{:?}", Autolink::new());
        assert!(debug.starts_with("Autolink {"));
        assert!(debug.contains("link_builder: false"));
    }

    const CONVERT_INPUT: &str = r#"This is Simple URL:
http://www.google.com.tw

This is URL with query:
http://www.google.com.tw/search?q=foo&num=100

This is URL with multi-level query:
http://example.com/?foo[1]=a&foo[2]=b

This is URL inline: http://example.com/path#top with test.

This is URL in HTML:
<a href="http://example.com/path?foo[1]=a&foo[2]=b">LINK</a>
<a href="http://example.com/path?foo[1]=a&foo[2]=b">http://example.com/path?foo[1]=a&foo[2]=b</a>
<img src="http://example.com/path?foo[1]=a&foo[2]=b" width="100"/>
<div data-target="http://example.com/path?foo[1]=a&foo[2]=b" wdith="100"/></div>
<p>http://example.com/path?foo[1]=a&foo[2]=b</p>
"#;

    const CONVERT_OUTPUT: &str = r#"This is Simple URL:
<a href="http://www.google.com.tw">http://www.google.com.tw</a>

This is URL with query:
<a href="http://www.google.com.tw/search?q=foo&amp;num=100">http://www.google.com.tw/search?q=foo&amp;num=100</a>

This is URL with multi-level query:
<a href="http://example.com/?foo[1]=a&amp;foo[2]=b">http://example.com/?foo[1]=a&amp;foo[2]=b</a>

This is URL inline: <a href="http://example.com/path#top">http://example.com/path#top</a> with test.

This is URL in HTML:
<a href="http://example.com/path?foo[1]=a&foo[2]=b">LINK</a>
<a href="http://example.com/path?foo[1]=a&foo[2]=b">http://example.com/path?foo[1]=a&foo[2]=b</a>
<img src="http://example.com/path?foo[1]=a&foo[2]=b" width="100"/>
<div data-target="http://example.com/path?foo[1]=a&foo[2]=b" wdith="100"/></div>
<p><a href="http://example.com/path?foo[1]=a&amp;foo[2]=b">http://example.com/path?foo[1]=a&amp;foo[2]=b</a></p>
"#;

    const EMAIL_INPUT: &str = r#"This is Simple Email:
sakura@flower.com

This is Email inline: sakura@flower.com with test.

This is Email in HTML:
<a href="sakura@flower.com">LINK</a>
<a href="mailto:sakura@flower.com">sakura@flower.com</a>
<div data-target="sakura@flower.com" wdith="100"/></div>
<div data-target="mailto:sakura@flower.com" wdith="100"/></div>

My email address is sakura@flower.com.

and emails are coming in between(sakura@flower.com)."#;

    const EMAIL_OUTPUT: &str = r#"This is Simple Email:
<a href="mailto:sakura@flower.com">sakura@flower.com</a>

This is Email inline: <a href="mailto:sakura@flower.com">sakura@flower.com</a> with test.

This is Email in HTML:
<a href="sakura@flower.com">LINK</a>
<a href="mailto:sakura@flower.com">sakura@flower.com</a>
<div data-target="sakura@flower.com" wdith="100"/></div>
<div data-target="mailto:sakura@flower.com" wdith="100"/></div>

My email address is <a href="mailto:sakura@flower.com">sakura@flower.com</a>.

and emails are coming in between(<a href="mailto:sakura@flower.com">sakura@flower.com</a>)."#;

    const CAMPUS_URL: &str = concat!(
        "http://campus.asukademy.com/learning/job/",
        "84-find-internship-opportunity-through-platform.html",
    );

    fn convert(autolink: &Autolink, text: &str) -> String {
        autolink.convert(text, &Attributes::new())
    }

    fn anchor(href: &str, text: &str) -> String {
        format!(r#"<a href="{href}">{text}</a>"#)
    }

    #[test]
    fn test_convert_document() {
        assert_eq!(convert(&Autolink::new(), CONVERT_INPUT), CONVERT_OUTPUT);
    }

    #[test]
    fn test_convert_email_document() {
        let autolink = Autolink::new();
        assert_eq!(
            autolink.convert_email(EMAIL_INPUT, &Attributes::new()),
            EMAIL_OUTPUT
        );
    }

    #[test]
    fn test_convert_plain_text_is_unchanged() {
        let text = "Nothing to see here: just words, dots... and a@b";
        assert_eq!(convert(&Autolink::new(), text), text);
    }

    #[test]
    fn test_convert_keeps_trailing_dot_outside() {
        assert_eq!(
            convert(&Autolink::new(), "see http://x.com."),
            r#"see <a href="http://x.com">http://x.com</a>."#
        );
    }

    #[test]
    fn test_convert_default_schemes() {
        let autolink = Autolink::new();
        for url in [
            "ftp://example.com",
            "ftps://example.com",
            "https://example.com",
        ] {
            assert_eq!(convert(&autolink, url), anchor(url, url));
        }
    }

    #[test]
    fn test_add_scheme() {
        let mut autolink = Autolink::new();
        let url = "skype://example.com";
        assert_eq!(convert(&autolink, url), url);

        autolink.add_scheme("skype").unwrap();
        assert_eq!(convert(&autolink, url), anchor(url, url));
    }

    #[test]
    fn test_link_no_scheme() {
        let mut autolink = Autolink::new();
        autolink.set_link_no_scheme("http").unwrap();

        for url in ["ftp://example.com", "https://example.com"] {
            assert_eq!(convert(&autolink, url), anchor(url, url));
        }
        assert_eq!(
            convert(&autolink, "example.com"),
            anchor("http://example.com", "example.com")
        );

        let url = "skype://example.com";
        assert_eq!(convert(&autolink, url), url);

        autolink.add_scheme("skype").unwrap();
        assert_eq!(convert(&autolink, url), anchor(url, url));
    }

    #[test]
    fn test_link_no_scheme_localhost() {
        let mut autolink = Autolink::new();
        assert_eq!(convert(&autolink, "localhost:3000"), "localhost:3000");

        autolink.set_link_no_scheme(true).unwrap();
        assert_eq!(
            convert(&autolink, "localhost:3000"),
            anchor("http://localhost:3000", "localhost:3000")
        );
    }

    #[test]
    fn test_convert_all_with_link_no_scheme() {
        let mut autolink = Autolink::new();
        autolink.set_link_no_scheme(true).unwrap();
        let text = "mail first.last@example.com or visit example.com";
        assert_eq!(
            autolink.convert_all(text, &Attributes::new()),
            r#"mail <a href="mailto:first.last@example.com">first.last@example.com</a> or visit <a href="http://example.com">example.com</a>"#
        );
    }

    #[test]
    fn test_convert_all() {
        let autolink = Autolink::new();
        assert_eq!(
            autolink.convert_all("http://x.com by bob@x.com", &Attributes::new()),
            r#"<a href="http://x.com">http://x.com</a> by <a href="mailto:bob@x.com">bob@x.com</a>"#
        );
    }

    #[test]
    fn test_get_and_set_schemes() {
        let options = AutolinkOptions::default();
        let mut autolink = Autolink::with_schemes(options, ["a", "b", "http"]).unwrap();
        let alternation = autolink.schemes().alternation();
        assert_eq!(alternation, "http|https|ftp|ftps|a|b");

        autolink.set_schemes(["skype"]).unwrap();
        assert_eq!(autolink.schemes().as_list(), ["skype"]);

        autolink.set_schemes(["mailto", "mailto"]).unwrap();
        assert_eq!(autolink.schemes().as_list(), ["mailto"]);

        autolink.remove_scheme("mailto");
        assert!(autolink.schemes().is_empty());
    }

    #[test]
    fn test_text_limit() {
        let mut autolink = Autolink::new();
        autolink.set_text_limit(Some(TextLimit::Chars(50)));
        let text = "http://campus.asukademy.com/learning/job/84-fin...";
        assert_eq!(
            autolink.link(CAMPUS_URL, &Attributes::new()),
            anchor(CAMPUS_URL, text)
        );

        let limit = TextLimit::custom(|url: &str| crate::shorten_url(url, 15, 6));
        autolink.set_text_limit(Some(limit));
        let text = "http://campus.asukademy.com/....../84-find-interns......";
        assert_eq!(
            autolink.link(CAMPUS_URL, &Attributes::new()),
            anchor(CAMPUS_URL, text)
        );
    }

    #[test]
    fn test_strip_scheme_with_text_limit() {
        let mut autolink = Autolink::new();
        autolink
            .set_strip_scheme(true)
            .set_text_limit(Some(TextLimit::Chars(50)));
        let text = "campus.asukademy.com/learning/job/84-find-inter...";
        assert_eq!(convert(&autolink, CAMPUS_URL), anchor(CAMPUS_URL, text));
    }

    #[test]
    fn test_link_strip_scheme_and_auto_title() {
        let mut autolink = Autolink::new();
        let attribs = Attributes::from([("foo", "bar")]);

        autolink.set_strip_scheme(true);
        assert_eq!(
            autolink.link("http://www.google.com", &attribs),
            r#"<a foo="bar" href="http://www.google.com">www.google.com</a>"#
        );

        autolink.set_auto_title(true);
        assert_eq!(
            autolink.link("http://www.google.com", &attribs),
            r#"<a foo="bar" href="http://www.google.com" title="http://www.google.com">www.google.com</a>"#
        );
    }

    #[test]
    fn test_auto_title_escapes_quotes() {
        let mut autolink = Autolink::new();
        autolink.set_auto_title(true);
        let url = r#"http://example.com/path?foo["1"]=a&foo['2']=b"#;
        let escaped = "http://example.com/path?foo[&quot;1&quot;]=a&amp;foo[&#039;2&#039;]=b";
        let expected = format!(
            r#"<a foo="bar" href="{escaped}" title="{escaped}">{escaped}</a>"#
        );
        assert_eq!(
            autolink.link(url, &Attributes::from([("foo", "bar")])),
            expected
        );
    }

    #[test]
    fn test_auto_escape() {
        let mut autolink = Autolink::new();
        let url = "https://example.com/?foo=bar&yoo=baz";
        let escaped = "https://example.com/?foo=bar&amp;yoo=baz";
        assert_eq!(convert(&autolink, url), anchor(escaped, escaped));

        autolink.set_auto_escape(false);
        assert_eq!(convert(&autolink, url), anchor(url, escaped));

        let email = "hello+admin&test@example.org";
        let escaped = "hello+admin&amp;test@example.org";
        autolink.set_auto_escape(true);
        assert_eq!(
            autolink.convert_email(email, &Attributes::new()),
            anchor(&format!("mailto:{escaped}"), escaped)
        );

        autolink.set_auto_escape(false);
        assert_eq!(
            autolink.convert_email(email, &Attributes::new()),
            anchor(&format!("mailto:{email}"), escaped)
        );
    }

    #[test]
    fn test_link_builder() {
        let mut autolink = Autolink::new();
        autolink.set_link_builder(|url: &str, attribs: &Attributes| {
            let pairs: Vec<String> = attribs
                .iter()
                .map(|(name, value)| {
                    let value = value.as_str().unwrap_or_default();
                    format!("{name}={value}")
                })
                .collect();
            format!("{url}{{{}}}", pairs.join(","))
        });
        assert!(autolink.link_builder().is_some());
        assert_eq!(
            autolink.link("http://google.com", &Attributes::from([("foo", "bar")])),
            "http://google.com{foo=bar,href=http://google.com}"
        );

        autolink.clear_link_builder();
        assert_eq!(
            convert(&autolink, "http://google.com"),
            anchor("http://google.com", "http://google.com")
        );
    }

    #[test]
    fn test_convert_email_leading_dot_is_unchanged() {
        let autolink = Autolink::new();
        assert_eq!(
            autolink.convert_email(".user@x.com", &Attributes::new()),
            ".user@x.com"
        );
    }

    #[test]
    fn test_scan_reports_ranges() {
        let autolink = Autolink::new();
        let text = "a http://x.com) b@x.com";
        let urls = autolink.scan(text);
        assert_eq!(urls.len(), 1);
        assert_eq!(&text[urls[0].range.clone()], "http://x.com");
        assert_eq!(urls[0].trailing, Some(')'));

        let emails = autolink.scan_emails(text);
        assert_eq!(emails.len(), 1);
        assert_eq!(emails[0].text, "b@x.com");
    }
}
