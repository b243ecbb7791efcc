//! giturl - structured parsing of git repository addresses
//!
//! Git accepts a repository address in several informal shapes. This crate
//! recognizes them and turns each into a single [`GitUrl`] record exposing
//! scheme, user, host, port, path and a short slug.
//!
//! # Quick Start
//!
//! ```
//! use giturl::{parse, GitUrl};
//!
//! let url = parse("git@github.com:dosquad/go-giturl.git")?;
//! assert_eq!(url.scheme(), Some("git+ssh"));
//! assert_eq!(url.username(), Some("git"));
//! assert_eq!(url.hostname(), Some("github.com"));
//! assert_eq!(url.slug(), "dosquad/go-giturl");
//!
//! // `GitUrl` also implements `FromStr`
//! let url: GitUrl = "ssh://bar@github.com:1111/~foo/dosquad/go-giturl.git".parse()?;
//! assert_eq!(url.username(), Some("bar"));
//! assert_eq!(url.path_username(), Some("foo"));
//! assert_eq!(url.port(), Some("1111"));
//! # Ok::<(), giturl::GitUrlError>(())
//! ```
//!
//! # Supported Syntaxes
//!
//! Tried in this order, first match wins:
//!
//! | Family     | Shape |
//! |------------|-------|
//! | tilde-user | `[ssh\|git://][user@]host[:port](/\|:)~user/path` |
//! | transport  | `ssh\|git\|http(s)\|ftp(s)://[user@]host[:port]/path` |
//! | scp-like   | `user@host:path` |
//! | local path | `/path` or `file:///path` |
//!
//! # Error Handling
//!
//! [`parse`] returns `Result<GitUrl, GitUrlError>`:
//!
//! - [`GitUrlError::UnknownSyntax`] when the address fits no family
//! - [`GitUrlError::MalformedUri`] when a URI-shaped address is rejected by
//!   the `url` parser; the underlying `url::ParseError` is kept as the source

// Re-export main parsing functions
pub use crate::core::{classify, parse};

// Re-export public types
pub use error::GitUrlError;
pub use types::{GitUrl, Syntax};

// Module declarations
pub mod core;
pub mod error;
mod grammar;
pub mod types;
