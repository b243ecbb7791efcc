//! SCP-like `user@host:path` extraction.

use crate::error::GitUrlError;
use crate::grammar::{SCP_LIKE, SCP_LIKE_SCHEME};
use crate::types::GitUrl;

/// Extract user, host and path from an SCP-like address.
///
/// The scheme is always `git+ssh`, which keeps these addresses apart from
/// literal `ssh://` URIs.
pub(crate) fn extract(raw: &str) -> Result<GitUrl, GitUrlError> {
    let caps = SCP_LIKE.captures(raw).ok_or(GitUrlError::UnknownSyntax)?;

    match (caps.name("user"), caps.name("host"), caps.name("path")) {
        (Some(user), Some(host), Some(path)) => Ok(GitUrl {
            scheme: Some(SCP_LIKE_SCHEME.to_string()),
            user: Some(user.as_str().to_string()),
            host: Some(host.as_str().to_string()),
            port: None,
            path: path.as_str().to_string(),
            path_user: None,
            path_relative: path.as_str().to_string(),
        }),
        _ => Err(GitUrlError::UnknownSyntax),
    }
}
