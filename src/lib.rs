//! Reader for `.netrc` credential files.
//!
//! A netrc file stores credentials per remote host as a flat stream of
//! whitespace-separated tokens:
//!
//! ```text
//! machine ftp.example.com
//!     login joe
//!     password I am Joe and this is my passphrase
//! machine api.example.com login bot password s3cr3t account ops
//! ```
//!
//! # Quick Start
//!
//! ```no_run
//! use netrc_config_rs::Netrc;
//!
//! // Load ~/.netrc
//! let netrc = Netrc::load().unwrap();
//!
//! if let Some(machine) = netrc.get("ftp.example.com") {
//!     println!("login: {:?}", machine.login());
//! }
//! ```
//!
//! # Permissions
//!
//! A netrc file must be readable and writable by its owner only (mode `600`
//! or stricter). Files with any group or world permission are rejected with
//! [`Error::UnsafePermissions`] before they are read.
//!
//! # Format
//!
//! - Keywords: `machine`, `login`, `password`, `account`, `macdef`
//! - No quoting: a multi-word value is every token after the keyword up to the
//!   next keyword, joined with single spaces
//! - No comments: `#` is ordinary content
//! - `macdef` bodies are stored as text and never executed

mod access;
mod config;
mod error;
mod machine;
mod parser;
mod paths;
mod token;

// Re-export main types
pub use access::{is_safe_mode, FileAccess, LocalFileAccess, ALLOWED_MODE};
pub use config::{LoadOptions, Netrc};
pub use error::{Error, Result};
pub use machine::{Machine, MachineTable};
pub use parser::{parse_into, parse_netrc};
pub use paths::{default_netrc_path, expand_tilde, user_netrc_path, NETRC_FILE_NAME};
pub use token::{tokenize, Keyword, NotAKeyword};
