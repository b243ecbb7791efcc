//! Error types for git URL parsing.

use thiserror::Error;

/// Errors that can occur while parsing a repository address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GitUrlError {
    /// The address matched none of the supported syntaxes.
    #[error("unknown URL syntax")]
    UnknownSyntax,

    /// The address looked like a URI but the URI grammar rejected it.
    #[error("malformed URI: {0}")]
    MalformedUri(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        assert_eq!(GitUrlError::UnknownSyntax.to_string(), "unknown URL syntax");
        assert_eq!(
            GitUrlError::MalformedUri(url::ParseError::InvalidPort).to_string(),
            "malformed URI: invalid port number"
        );
    }

    #[test]
    fn test_url_parse_error_conversion() {
        let url_error = url::ParseError::EmptyHost;
        let err: GitUrlError = url_error.into();

        assert_eq!(err, GitUrlError::MalformedUri(url::ParseError::EmptyHost));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_unknown_syntax_has_no_source() {
        assert!(GitUrlError::UnknownSyntax.source().is_none());
    }
}
