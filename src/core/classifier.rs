//! Syntax family detection.
//!
//! The grammars overlap, so they are tried in a fixed order and the first
//! match wins. The tilde-user grammar goes first because a transport URI
//! with a `~user` segment also carries a transport prefix.

use log::trace;

use crate::grammar::{FILE_URI_PREFIX, SCP_LIKE, TILDE_USER, TRANSPORT};
use crate::types::Syntax;

/// Determine which syntax family a raw address belongs to.
///
/// # Examples
///
/// ```
/// use giturl::{classify, Syntax};
///
/// assert_eq!(classify("ssh://host/~user/repo.git"), Syntax::TildeUser);
/// assert_eq!(classify("https://host/repo.git"), Syntax::Transport);
/// assert_eq!(classify("git@host:repo.git"), Syntax::ScpLike);
/// assert_eq!(classify("/srv/repo.git"), Syntax::LocalPath);
/// assert_eq!(classify("notaurl"), Syntax::Unknown);
/// ```
pub fn classify(raw: &str) -> Syntax {
    let syntax = if TILDE_USER.is_match(raw) {
        Syntax::TildeUser
    } else if TRANSPORT.is_match(raw) {
        Syntax::Transport
    } else if !raw.contains("://") && SCP_LIKE.is_match(raw) {
        Syntax::ScpLike
    } else if raw.starts_with('/') || raw.starts_with(FILE_URI_PREFIX) {
        Syntax::LocalPath
    } else {
        Syntax::Unknown
    };

    trace!("classified {:?} as {}", raw, syntax);
    syntax
}
