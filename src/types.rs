//! Core data structures produced by the parser.

use std::fmt;
use std::str::FromStr;

use crate::error::GitUrlError;

/// Syntax family a raw repository address belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Syntax {
    /// Address with a `~user/` home-directory segment, with or without a scheme.
    TildeUser,
    /// `ssh://`, `git://`, `http(s)://` or `ftp(s)://` URI.
    Transport,
    /// `user@host:path` shorthand.
    ScpLike,
    /// Absolute filesystem path or `file://` URI.
    LocalPath,
    /// None of the above.
    Unknown,
}

impl Syntax {
    /// Whether this family has an extractor.
    pub fn is_known(self) -> bool {
        self != Syntax::Unknown
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Syntax::TildeUser => "tilde-user",
            Syntax::Transport => "transport",
            Syntax::ScpLike => "scp-like",
            Syntax::LocalPath => "local-path",
            Syntax::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// A parsed repository address.
///
/// Built once by [`parse`](crate::parse) and never modified afterwards.
/// Optional parts that were absent or empty in the input are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GitUrl {
    pub(crate) scheme: Option<String>,
    pub(crate) user: Option<String>,
    pub(crate) host: Option<String>,
    pub(crate) port: Option<String>,
    pub(crate) path: String,
    pub(crate) path_user: Option<String>,
    pub(crate) path_relative: String,
}

impl GitUrl {
    /// URL scheme, e.g. `ssh`, `https` or `git+ssh` for SCP-like addresses.
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Principal that authenticates against the host (the part before `@`).
    pub fn username(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Principal named by a `~user` path segment, i.e. whose home directory
    /// the path is relative to.
    pub fn path_username(&self) -> Option<&str> {
        self.path_user.as_deref()
    }

    /// Host name without the port.
    pub fn hostname(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Port exactly as written in the address.
    pub fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }

    /// Host including the port, as `host:port` when a port is present.
    pub fn host(&self) -> Option<String> {
        let host = self.host.as_deref()?;
        Some(match self.port.as_deref() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        })
    }

    /// Full path, including any literal `~user/` segment.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Path relative to the `~user` home directory, or the full path when
    /// there is no such segment.
    pub fn path_relative(&self) -> &str {
        &self.path_relative
    }

    /// Whether the path carries a `~user` segment.
    pub fn has_path_user(&self) -> bool {
        self.path_user.is_some()
    }

    /// Short repository identifier derived from the relative path.
    ///
    /// Strips one trailing `/`, then a `.git` suffix, then one leading `/`.
    ///
    /// ```
    /// let url = giturl::parse("git@github.com:dosquad/go-giturl.git")?;
    /// assert_eq!(url.slug(), "dosquad/go-giturl");
    /// # Ok::<(), giturl::GitUrlError>(())
    /// ```
    pub fn slug(&self) -> String {
        let slug = self.path_relative.as_str();
        let slug = slug.strip_suffix('/').unwrap_or(slug);
        let slug = slug.strip_suffix(".git").unwrap_or(slug);
        let slug = slug.strip_prefix('/').unwrap_or(slug);
        slug.to_string()
    }
}

impl FromStr for GitUrl {
    type Err = GitUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

impl TryFrom<&str> for GitUrl {
    type Error = GitUrlError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        crate::parse(value)
    }
}
