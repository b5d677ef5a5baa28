//! Turn URLs and email addresses in text into HTML links.
//!
//! The crate provides an [`Autolink`] converter that scans text for URLs with
//! a known scheme (and, optionally, bare `domain.tld` text) or for email
//! addresses, and replaces each one with an `<a>` element.
//!
//! # Architecture
//!
//! Conversion runs in three steps:
//! - Scanning: a regular expression built from the [`SchemeSet`] finds
//!   candidates, which are filtered into [`LinkMatch`]es. Candidates inside
//!   existing attribute values are left alone.
//! - Formatting: each match becomes markup according to [`AutolinkOptions`],
//!   either via [`html::render`] or a custom [`LinkBuilder`].
//! - Splicing: markup replaces the match ranges; all other text is copied
//!   verbatim.
//!
//! # Example
//!
//! ```
//! use autolink::{Attributes, Autolink, TextLimit};
//!
//! let mut autolink = Autolink::new();
//! autolink
//!     .set_strip_scheme(true)
//!     .set_text_limit(Some(TextLimit::Chars(20)));
//!
//! let html = autolink.convert_all(
//!     "Read https://www.rust-lang.org/learn/get-started or mail info@example.com",
//!     &Attributes::new().with("target", "_blank"),
//! );
//! assert_eq!(
//!     html,
//!     "Read <a target=\"_blank\" href=\"https://www.rust-lang.org/learn/get-started\">www.rust-lang.org...</a> \
//!      or mail <a target=\"_blank\" href=\"mailto:info@example.com\">info@example.com</a>"
//! );
//! ```

mod attributes;
mod builder;
mod error;
mod escape;
mod formatter;
pub mod html;
mod linker;
mod options;
mod pattern;
mod scanner;
mod schemes;
mod shorten;

pub use attributes::{AttrValue, Attributes};
pub use builder::LinkBuilder;
pub use error::{AutolinkError, Result};
pub use escape::{EscapeHandler, escape_html};
pub use linker::Autolink;
pub use options::{AutolinkOptions, DEFAULT_NO_SCHEME, LinkNoScheme, TextLimit};
pub use scanner::{LinkKind, LinkMatch};
pub use schemes::{DEFAULT_SCHEMES, SchemeSet};
pub use shorten::{DEFAULT_DOTS, DEFAULT_LAST_PART_LIMIT, shorten, shorten_url};
