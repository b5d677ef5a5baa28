//! CLI command implementations.

pub(crate) mod convert;
pub(crate) mod link;
pub(crate) mod schemes;
pub(crate) mod settings;
pub(crate) mod shorten_url;

pub(crate) use convert::ConvertArgs;
pub(crate) use link::LinkArgs;
pub(crate) use schemes::SchemesArgs;
pub(crate) use shorten_url::ShortenUrlArgs;
