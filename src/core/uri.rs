//! Generic URI extraction for transport URIs and local paths.

use url::Url;

use crate::error::GitUrlError;
use crate::grammar::FILE_URI_PREFIX;
use crate::types::GitUrl;

/// Extract a transport URI, `file://` URI or absolute path.
///
/// The `url` crate only validates the input; every field is then read back
/// from the raw text so case, dot segments and spaces stay as written. Bare
/// absolute paths are validated as `file://` URIs, keep no scheme, host or
/// port, and come back byte-for-byte. The record never carries a path user;
/// `path_relative` equals `path`.
pub(crate) fn extract(raw: &str) -> Result<GitUrl, GitUrlError> {
    if raw.starts_with('/') {
        Url::parse(&format!("{}{}", FILE_URI_PREFIX, raw))?;
        return Ok(GitUrl {
            path: raw.to_string(),
            path_relative: raw.to_string(),
            ..GitUrl::default()
        });
    }

    Url::parse(raw)?;
    let parts = split_literal(raw).ok_or(GitUrlError::UnknownSyntax)?;

    Ok(GitUrl {
        scheme: non_empty(parts.scheme),
        user: parts.user.and_then(non_empty),
        host: non_empty(parts.host),
        port: parts.port.and_then(non_empty),
        path: parts.path.to_string(),
        path_user: None,
        path_relative: parts.path.to_string(),
    })
}

/// Pieces of `scheme://[user[:password]@]host[:port][/path][?query][#fragment]`
/// sliced out of the input text.
#[derive(Debug, PartialEq)]
struct LiteralParts<'a> {
    scheme: &'a str,
    user: Option<&'a str>,
    host: &'a str,
    port: Option<&'a str>,
    path: &'a str,
}

fn split_literal(raw: &str) -> Option<LiteralParts<'_>> {
    let (scheme, rest) = raw.split_once("://")?;
    let rest = rest.split(&['?', '#'][..]).next().unwrap_or_default();
    let (authority, path) = match rest.find('/') {
        Some(idx) => rest.split_at(idx),
        None => (rest, ""),
    };

    let (user, host_port) = match authority.rsplit_once('@') {
        Some((userinfo, host_port)) => {
            let user = userinfo.split_once(':').map_or(userinfo, |(user, _)| user);
            (Some(user), host_port)
        }
        None => (None, authority),
    };

    let (host, port) = match host_port.rsplit_once(':') {
        Some((host, port)) if port.bytes().all(|b| b.is_ascii_digit()) => (host, Some(port)),
        _ => (host_port, None),
    };

    Some(LiteralParts {
        scheme,
        user,
        host,
        port,
        path,
    })
}

pub(crate) fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
