//! Machine entries stored in a netrc file.

use crate::token::Keyword;
use std::collections::HashMap;
use std::fmt;

/// Mapping from machine name to its entry.
pub type MachineTable = HashMap<String, Machine>;

/// A `machine` entry and its credentials.
///
/// # Security Notes
///
/// The `Debug` implementation redacts the password and the macro body so a
/// machine can be logged without leaking secrets.
#[derive(Clone, Default)]
pub struct Machine {
    /// Host name given after the `machine` keyword.
    pub name: String,
    pub login: Option<String>,
    pub password: Option<String>,
    pub account: Option<String>,
    /// Macro definition body, kept as opaque text.
    pub macdef: Option<String>,
    /// Extra properties attached by callers. The parser never fills these.
    properties: HashMap<String, String>,
}

impl Machine {
    /// Create an empty entry for `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Machine {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Alias for [`Machine::name`].
    pub fn machine(&self) -> &str {
        &self.name
    }

    pub fn login(&self) -> Option<&str> {
        self.login.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    pub fn macdef(&self) -> Option<&str> {
        self.macdef.as_deref()
    }

    /// Get an auxiliary property.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(|s| s.as_str())
    }

    /// Set an auxiliary property, returning the previous value.
    pub fn set_property(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.properties.insert(key.into(), value.into())
    }

    /// Remove an auxiliary property.
    pub fn remove_property(&mut self, key: &str) -> Option<String> {
        self.properties.remove(key)
    }

    /// All auxiliary properties.
    pub fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }

    /// The slot a field keyword writes into. `None` for `machine`, which names
    /// the entry rather than filling a field.
    pub(crate) fn field_mut(&mut self, keyword: Keyword) -> Option<&mut Option<String>> {
        match keyword {
            Keyword::Machine => None,
            Keyword::Login => Some(&mut self.login),
            Keyword::Password => Some(&mut self.password),
            Keyword::Account => Some(&mut self.account),
            Keyword::Macdef => Some(&mut self.macdef),
        }
    }
}

impl fmt::Debug for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("Machine")
            .field("name", &self.name)
            .field("login", &self.login)
            .field("password", &redact(&self.password))
            .field("account", &self.account)
            .field("macdef", &redact(&self.macdef))
            .field("properties", &self.properties)
            .finish()
    }
}
