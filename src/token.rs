//! Keywords and whitespace tokenization for netrc content.

use std::fmt;
use std::str::FromStr;

/// A netrc keyword.
///
/// Any token that does not spell one of these exactly is a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Machine,
    Login,
    Password,
    Account,
    /// Macro definition. The body is stored, never executed.
    Macdef,
}

impl Keyword {
    /// The spelling of this keyword in a netrc file.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Machine => "machine",
            Keyword::Login => "login",
            Keyword::Password => "password",
            Keyword::Account => "account",
            Keyword::Macdef => "macdef",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a token is not a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotAKeyword;

impl FromStr for Keyword {
    type Err = NotAKeyword;

    /// Matching is exact and case-sensitive: `Login` is a value, not a keyword.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "machine" => Ok(Keyword::Machine),
            "login" => Ok(Keyword::Login),
            "password" => Ok(Keyword::Password),
            "account" => Ok(Keyword::Account),
            "macdef" => Ok(Keyword::Macdef),
            _ => Err(NotAKeyword),
        }
    }
}

/// Split netrc content into tokens on runs of whitespace.
///
/// There is no quoting and no comment syntax; `#` is ordinary content.
pub fn tokenize(content: &str) -> Vec<&str> {
    content.split_whitespace().collect()
}
