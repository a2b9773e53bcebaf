//! Error types for netrc-config-rs.

use crate::token::Keyword;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or parsing a netrc file.
#[derive(Error, Debug)]
pub enum Error {
    /// The netrc file grants permissions beyond owner read/write.
    #[error(
        "netrc file {} has unsafe permissions {:o}: only owner read/write is allowed",
        .path.display(),
        .mode
    )]
    UnsafePermissions { path: PathBuf, mode: u32 },

    /// Netrc file not found.
    #[error("netrc file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Failed to stat the netrc file.
    #[error("failed to read metadata of {}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read the netrc file.
    #[error("failed to read netrc file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No path was given and the home directory could not be determined.
    #[error("could not determine the home directory to locate .netrc")]
    HomeDirNotFound,

    /// Permission bits cannot be inspected on this platform.
    #[error("netrc permission checks are not supported on this platform")]
    UnsupportedPlatform,

    /// A value appeared before any keyword.
    #[error("invalid token '{0}': expected a keyword such as 'machine'")]
    InvalidToken(String),

    /// A field keyword appeared before any `machine` entry.
    #[error("no machine specified before login, password, account or macdef")]
    NoMachineSpecified,

    /// A keyword was the last token and has no value.
    #[error("no value for token '{0}'")]
    NoValueForToken(Keyword),
}

/// Result type alias for netrc-config-rs operations.
pub type Result<T> = std::result::Result<T, Error>;
