//! Compiled grammars for the supported address syntaxes.
//!
//! Built once on first use and shared read-only afterwards.

use regex::Regex;
use std::sync::LazyLock;

// Regex patterns
const TILDE_USER_PATTERN: &str = concat!(
    r"^((?P<scheme>ssh|git)://|)((?P<user>\S+)@|)(?P<host>\S+)(:(?P<port>\d+)|)",
    r"[/:]~(?P<pathuser>[^/]+)/(?P<path>.*)",
);
const TRANSPORT_PATTERN: &str = r"^(?P<scheme>ssh|git|http(s|)|ftp(s|))://";
const SCP_LIKE_PATTERN: &str = r"(?P<user>\S+)@(?P<host>[\S\.]+):(?P<path>\S+)";

/// `[scheme://][user@]host[:port](/|:)~pathuser/path`
pub(crate) static TILDE_USER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(TILDE_USER_PATTERN)
        .expect("Failed to compile tilde-user grammar - this is a bug")
});

/// `scheme://` prefix for the network transports git understands.
pub(crate) static TRANSPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(TRANSPORT_PATTERN)
        .expect("Failed to compile transport grammar - this is a bug")
});

/// `user@host:path`
pub(crate) static SCP_LIKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(SCP_LIKE_PATTERN)
        .expect("Failed to compile scp-like grammar - this is a bug")
});

/// Scheme recorded for SCP-like addresses, which git reaches over ssh.
pub(crate) const SCP_LIKE_SCHEME: &str = "git+ssh";

/// Prefix of local file URIs.
pub(crate) const FILE_URI_PREFIX: &str = "file://";
