//! Top-level parse dispatch.

use crate::core::classifier::classify;
use crate::core::{scp, tilde, uri};
use crate::error::GitUrlError;
use crate::types::{GitUrl, Syntax};

/// Parse a repository address into a [`GitUrl`].
///
/// Accepts transport URIs (`ssh://`, `git://`, `http(s)://`, `ftp(s)://`),
/// SCP-like shorthand (`user@host:path`), `~user` home-directory forms with
/// or without a scheme, absolute paths and `file://` URIs.
///
/// # Examples
///
/// ```
/// let url = giturl::parse("ssh://github.com/~foo/dosquad/go-giturl.git")?;
/// assert_eq!(url.hostname(), Some("github.com"));
/// assert_eq!(url.path_username(), Some("foo"));
/// assert_eq!(url.path_relative(), "dosquad/go-giturl.git");
/// assert_eq!(url.slug(), "dosquad/go-giturl");
/// # Ok::<(), giturl::GitUrlError>(())
/// ```
///
/// # Errors
///
/// Returns [`GitUrlError::UnknownSyntax`] when no syntax matches and
/// [`GitUrlError::MalformedUri`] when a URI-shaped address is rejected by
/// the URI grammar.
pub fn parse(raw: &str) -> Result<GitUrl, GitUrlError> {
    match classify(raw) {
        Syntax::TildeUser => tilde::extract(raw),
        Syntax::Transport | Syntax::LocalPath => uri::extract(raw),
        Syntax::ScpLike => scp::extract(raw),
        Syntax::Unknown => Err(GitUrlError::UnknownSyntax),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch() {
        assert_eq!(parse("git@github.com:a/b.git").unwrap().scheme(), Some("git+ssh"));
        assert_eq!(parse("git://github.com/a/b.git").unwrap().scheme(), Some("git"));
        assert_eq!(parse("github.com:~foo/a/b.git").unwrap().path_username(), Some("foo"));
        assert_eq!(parse("/a/b.git").unwrap().scheme(), None);
    }

    #[test]
    fn test_unknown_syntax() {
        assert_eq!(parse(""), Err(GitUrlError::UnknownSyntax));
        assert_eq!(parse("notaurl"), Err(GitUrlError::UnknownSyntax));
    }
}
