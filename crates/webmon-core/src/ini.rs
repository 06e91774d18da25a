//! Monitor file reading on top of `rust-ini`.
//!
//! The crate does the scanning. This module shapes its output for the
//! loader: `[DEFAULT]` is kept apart from the named sections, keys are
//! lower-cased, section names keep their case and named sections stay in
//! file order. Quote and escape processing are off, so a value is exactly
//! the text after the separator (`#id` selectors and `;` in URLs included).

use std::collections::HashMap;

use ini::{Ini as IniFile, ParseOption};
use thiserror::Error;

/// Name of the section that supplies fallback values to every other section.
pub const DEFAULT_SECTION: &str = "DEFAULT";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IniError {
    #[error("line {line}: {reason}")]
    Syntax { line: usize, reason: String },

    #[error("key `{key}` appears before any section header")]
    KeyOutsideSection { key: String },
}

impl From<ini::ParseError> for IniError {
    fn from(e: ini::ParseError) -> Self {
        Self::Syntax {
            line: e.line,
            reason: e.msg.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: HashMap<String, String>,
}

impl Section {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            entries: HashMap::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up `key` (already lower-case) in this section only.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

/// Parsed monitor file: the default section plus named sections in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ini {
    defaults: Section,
    sections: Vec<Section>,
}

impl Ini {
    #[must_use]
    pub fn defaults(&self) -> &Section {
        &self.defaults
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

/// Parses INI text.
///
/// A section header that appears twice merges into the first occurrence,
/// and a repeated key keeps its last value.
///
/// # Errors
///
/// Returns [`IniError::Syntax`] when `rust-ini` rejects the text and
/// [`IniError::KeyOutsideSection`] for a key above the first header.
pub fn parse(content: &str) -> Result<Ini, IniError> {
    let options = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    };
    let file = IniFile::load_from_str_opt(content, options)?;

    let mut doc = Ini {
        defaults: Section::new(DEFAULT_SECTION),
        sections: Vec::new(),
    };

    for (name, properties) in file.iter() {
        let section = match name.map(str::trim) {
            None => {
                if let Some((key, _)) = properties.iter().next() {
                    return Err(IniError::KeyOutsideSection {
                        key: key.trim().to_lowercase(),
                    });
                }
                continue;
            }
            Some(DEFAULT_SECTION) => &mut doc.defaults,
            Some(name) => {
                let idx = match doc.sections.iter().position(|s| s.name == name) {
                    Some(idx) => idx,
                    None => {
                        doc.sections.push(Section::new(name));
                        doc.sections.len() - 1
                    }
                };
                &mut doc.sections[idx]
            }
        };

        for (key, value) in properties.iter() {
            section
                .entries
                .insert(key.trim().to_lowercase(), value.trim().to_owned());
        }
    }

    Ok(doc)
}
