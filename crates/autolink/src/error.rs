//! Error types for autolink configuration.

/// Result alias for fallible autolink operations.
pub type Result<T> = std::result::Result<T, AutolinkError>;

/// Error raised when an [`Autolink`](crate::Autolink) is configured with
/// values it cannot work with.
///
/// Conversions themselves never fail: text that does not look like a link is
/// passed through untouched.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AutolinkError {
    /// A scheme name or option value was rejected at registration time.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Check that `scheme` is a valid URI scheme name.
///
/// RFC 3986: `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
pub(crate) fn validate_scheme(scheme: &str, field: &str) -> Result<()> {
    let mut chars = scheme.chars();

    let Some(first) = chars.next() else {
        tracing::warn!(field, "Empty scheme rejected");
        let message = format!("{field} cannot be empty");
        return Err(AutolinkError::InvalidConfiguration(message));
    };

    let valid = first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    if !valid {
        tracing::warn!(field, scheme, "Invalid scheme rejected");
        let message = format!("{field} is not a valid scheme name: {scheme:?}");
        return Err(AutolinkError::InvalidConfiguration(message));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_scheme_accepts_rfc_names() {
        assert!(validate_scheme("http", "scheme").is_ok());
        assert!(validate_scheme("svn+ssh", "scheme").is_ok());
        assert!(validate_scheme("x-custom.v2", "scheme").is_ok());
    }

    #[test]
    fn test_validate_scheme_rejects_empty() {
        let err = validate_scheme("", "link_no_scheme").unwrap_err();
        assert!(err.to_string().contains("link_no_scheme cannot be empty"));
    }

    #[test]
    fn test_validate_scheme_rejects_bad_characters() {
        assert!(validate_scheme("1http", "scheme").is_err());
        assert!(validate_scheme("ht tp", "scheme").is_err());
        assert!(validate_scheme("http://", "scheme").is_err());
    }
}
