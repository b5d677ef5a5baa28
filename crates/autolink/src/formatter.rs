//! Turning a single URL or email address into markup.

use std::borrow::Cow;

use crate::attributes::Attributes;
use crate::html;
use crate::linker::Autolink;

impl Autolink {
    /// Render one URL as a link.
    ///
    /// The link text is the URL itself, possibly without its scheme and
    /// shortened according to the options. `attribs` are copied to the
    /// element; `href` always points at the full URL.
    ///
    /// # Example
    ///
    /// ```
    /// use autolink::{Attributes, Autolink};
    ///
    /// let mut autolink = Autolink::new();
    /// autolink.set_strip_scheme(true);
    ///
    /// let attribs = Attributes::new().with("class", "ext");
    /// assert_eq!(
    ///     autolink.link("https://example.com", &attribs),
    ///     r#"<a class="ext" href="https://example.com">example.com</a>"#
    /// );
    /// ```
    #[must_use]
    pub fn link(&self, url: &str, attribs: &Attributes) -> String {
        let mut text = Cow::Borrowed(url);

        if self.options.strip_scheme
            && let Some(rest) = self.schemes.strip_from(url)
        {
            text = Cow::Borrowed(rest);
        }

        if let Some(limit) = &self.options.text_limit {
            text = Cow::Owned(limit.apply(&text));
        }

        let mut href = self.escape_href(url).into_owned();
        if let Some(scheme) = self.options.link_no_scheme.scheme()
            && !href.contains("://")
        {
            href = format!("{scheme}://{href}");
        }

        self.build_link(&text, url, href, attribs)
    }

    /// Render one email address as a `mailto:` link.
    ///
    /// The link text is always the address itself.
    #[must_use]
    pub fn link_email(&self, email: &str, attribs: &Attributes) -> String {
        let href = format!("mailto:{}", self.escape_href(email));
        self.build_link(email, email, href, attribs)
    }

    fn escape_href<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        if self.options.escape {
            Cow::Owned(self.escape(raw))
        } else {
            Cow::Borrowed(raw)
        }
    }

    fn build_link(&self, text: &str, raw: &str, href: String, attribs: &Attributes) -> String {
        let mut attribs = attribs.clone();
        attribs.set("href", href);
        if self.options.auto_title {
            attribs.set("title", self.escape(raw));
        }

        if let Some(builder) = &self.link_builder {
            return builder.build_link(text, &attribs);
        }

        html::render("a", &attribs, Some(self.escape(text).as_str()), false)
    }
}
