//! Parsing for .netrc files.
//!
//! A netrc file is a flat stream of whitespace-separated tokens. Keywords
//! (`machine`, `login`, `password`, `account`, `macdef`) switch the parser into
//! a mode, and the token right after a keyword is its value. Further non-keyword
//! tokens extend the active field with a single space, which is how unquoted
//! multi-word passwords are read:
//!
//! ```text
//! machine example.com
//!     login frank
//!     password I am Frank and I use passphr@ze$!!
//! ```
//!
//! A value that spells a keyword in continuation position is always read as the
//! keyword. There is no escaping.

use crate::error::{Error, Result};
use crate::machine::{Machine, MachineTable};
use crate::token::{tokenize, Keyword};
use log::{trace, warn};

/// Parse netrc content into a fresh table.
pub fn parse_netrc(content: &str) -> Result<MachineTable> {
    let mut machines = MachineTable::new();
    parse_into(content, &mut machines)?;
    Ok(machines)
}

/// Fold netrc content into `machines`.
///
/// On error the entries folded before the failing token stay in `machines`.
pub fn parse_into(content: &str, machines: &mut MachineTable) -> Result<()> {
    let tokens = tokenize(content);

    let mut current_keyword: Option<Keyword> = None;
    let mut current_machine: Option<String> = None;
    let mut i = 0;

    while i < tokens.len() {
        let word = tokens[i];

        let is_keyword = match word.parse::<Keyword>() {
            Ok(keyword) => {
                current_keyword = Some(keyword);
                true
            }
            Err(_) => false,
        };

        let keyword = match current_keyword {
            Some(keyword) => keyword,
            None => return Err(Error::InvalidToken(word.to_string())),
        };

        match keyword {
            Keyword::Machine => {
                if is_keyword {
                    let name = value_after(&tokens, i, keyword)?;
                    if machines.insert(name.to_string(), Machine::new(name)).is_some() {
                        warn!("machine '{}' declared more than once, keeping the last entry", name);
                    }
                    trace!("machine '{}'", name);
                    current_machine = Some(name.to_string());
                    i += 1;
                } else {
                    trace!("ignoring extra token after machine name");
                }
            }
            field => {
                let name = current_machine.as_deref().ok_or(Error::NoMachineSpecified)?;
                let machine = machines
                    .entry(name.to_string())
                    .or_insert_with(|| Machine::new(name));

                if let Some(slot) = machine.field_mut(field) {
                    match slot {
                        Some(existing) if !is_keyword => {
                            existing.push(' ');
                            existing.push_str(word);
                            trace!("extended {} of machine '{}'", field, name);
                        }
                        Some(_) => {
                            // Repeated keyword: following values extend the field.
                            value_after(&tokens, i, field)?;
                        }
                        None => {
                            let value = if is_keyword {
                                let value = value_after(&tokens, i, field)?;
                                i += 1;
                                value
                            } else {
                                word
                            };
                            *slot = Some(value.to_string());
                            trace!("set {} of machine '{}'", field, name);
                        }
                    }
                }
            }
        }

        i += 1;
    }

    Ok(())
}

/// The token following the keyword at `index`.
fn value_after<'a>(tokens: &[&'a str], index: usize, keyword: Keyword) -> Result<&'a str> {
    tokens
        .get(index + 1)
        .copied()
        .ok_or(Error::NoValueForToken(keyword))
}
