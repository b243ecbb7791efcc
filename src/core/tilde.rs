//! Extraction for addresses with a `~user/` home-directory segment.
//!
//! Real URIs (`ssh://host/~user/repo`) go through the URI parser first.
//! Anything it cannot place on a host, such as `host:~user/repo` or
//! `user@host:~user/repo`, is read straight from the grammar's groups.

use log::debug;

use crate::core::uri::{self, non_empty};
use crate::error::GitUrlError;
use crate::grammar::TILDE_USER;
use crate::types::GitUrl;

/// Outcome of the URI-based attempt.
enum UriAttempt {
    Resolved(GitUrl),
    NotApplicable,
}

pub(crate) fn extract(raw: &str) -> Result<GitUrl, GitUrlError> {
    match from_uri(raw) {
        UriAttempt::Resolved(url) => Ok(url),
        UriAttempt::NotApplicable => {
            debug!("{:?} is not a hosted URI, reading tilde-user groups", raw);
            from_groups(raw)
        }
    }
}

fn from_uri(raw: &str) -> UriAttempt {
    let mut url = match uri::extract(raw) {
        Ok(url) if url.host.is_some() => url,
        _ => return UriAttempt::NotApplicable,
    };

    let user_path = url.path.strip_prefix('/').unwrap_or(&url.path);
    if let Some(after) = user_path.strip_prefix('~') {
        let (path_user, relative) = after.split_once('/').unwrap_or((after, ""));
        url.path_user = non_empty(path_user);
        url.path_relative = relative.to_string();
    }

    UriAttempt::Resolved(url)
}

fn from_groups(raw: &str) -> Result<GitUrl, GitUrlError> {
    let caps = TILDE_USER.captures(raw).ok_or(GitUrlError::UnknownSyntax)?;
    let group = |name: &str| caps.name(name).and_then(|m| non_empty(m.as_str()));

    let mut scheme = group("scheme");
    let mut user = group("user");
    let mut host = group("host");
    // The scheme group only names ssh and git; any other `scheme://` prefix
    // ends up at the front of the user or host capture.
    if scheme.is_none() {
        if let Some(captured) = user.take() {
            let (prefix, rest) = split_scheme(captured);
            scheme = prefix;
            user = non_empty(&rest);
        } else if let Some(captured) = host.take() {
            let (prefix, rest) = split_scheme(captured);
            scheme = prefix;
            host = non_empty(&rest);
        }
    }

    let (host, port) = match (host, group("port")) {
        (Some(host), None) => split_port(host),
        (host, port) => (host, port),
    };
    let path_user = group("pathuser");
    let path_relative = group("path").unwrap_or_default();
    let path = match &path_user {
        Some(path_user) => format!("~{}/{}", path_user, path_relative),
        None => path_relative.clone(),
    };

    Ok(GitUrl {
        scheme,
        user,
        host,
        port,
        path,
        path_user,
        path_relative,
    })
}

/// Split a leading `scheme://` off a captured value.
fn split_scheme(value: String) -> (Option<String>, String) {
    match value.split_once("://") {
        Some((scheme, rest)) => (non_empty(scheme), rest.to_string()),
        None => (None, value),
    }
}

/// Split `host:port` when the greedy host group swallowed the port.
fn split_port(host: String) -> (Option<String>, Option<String>) {
    match host.rsplit_once(':') {
        Some((name, port))
            if !name.is_empty()
                && !port.is_empty()
                && port.bytes().all(|b| b.is_ascii_digit()) =>
        {
            (Some(name.to_string()), Some(port.to_string()))
        }
        _ => (Some(host), None),
    }
}
