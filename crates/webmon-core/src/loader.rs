//! Monitor file discovery and record resolution.
//!
//! The first existing candidate file wins. Structural INI errors abort the
//! load; problems inside a single section only fail that section, so the
//! caller gets one `Result` per section and decides what to do with it.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::app_config::AppConfig;
use crate::error::{ConfigError, RecordError};
use crate::ini::{self, Section};
use crate::price::parse_price;
use crate::record::{AuthContext, Record};

/// Candidate file names, relative to the home directory, in search order.
pub const CONFIG_FILE_NAMES: [&str; 2] = [".webmonitorrc", "webmonitorrc"];

/// Built-in fallback for `cookies` when neither the section nor `[DEFAULT]` sets it.
pub const DEFAULT_COOKIES: &str = "";

/// Built-in fallback for `currency` when neither the section nor `[DEFAULT]` sets it.
pub const DEFAULT_CURRENCY: &str = "PLN";

/// Result of a successful load: where the file was and what each section became.
#[derive(Debug)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub entries: Vec<Result<Record, RecordError>>,
}

/// Finds and reads the monitor file.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    candidates: Vec<PathBuf>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// Searches `~/.webmonitorrc`, then `~/webmonitorrc`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoHomeDir`] if the home directory is unknown.
    pub fn from_home() -> Result<Self, ConfigError> {
        let dirs = BaseDirs::new().ok_or(ConfigError::NoHomeDir)?;
        Ok(Self::in_dir(dirs.home_dir()))
    }

    /// Searches the standard file names inside `dir`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(CONFIG_FILE_NAMES.iter().map(|n| dir.join(n)).collect())
    }

    /// Uses the explicit path from settings when present, otherwise the home
    /// directory search.
    ///
    /// # Errors
    ///
    /// See [`ConfigLoader::from_home`].
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ConfigError> {
        match &config.config_path {
            Some(path) => Ok(Self::new(vec![path.clone()])),
            None => Self::from_home(),
        }
    }

    #[must_use]
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Returns the first candidate that exists as a regular file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] when no candidate exists.
    pub fn locate(&self) -> Result<&Path, ConfigError> {
        self.candidates
            .iter()
            .find(|p| p.is_file())
            .map(PathBuf::as_path)
            .ok_or_else(|| ConfigError::NotFound {
                searched: self.candidates.clone(),
            })
    }

    /// Locates, reads and resolves the monitor file.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NotFound`] when no candidate file exists.
    /// - [`ConfigError::Io`] when the file cannot be read.
    /// - [`ConfigError::Parse`] on a structural INI error.
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let path = self.locate()?;
        tracing::debug!(path = %path.display(), "reading monitor config");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        let entries = parse_records(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        Ok(LoadedConfig {
            path: path.to_path_buf(),
            entries,
        })
    }
}

/// Resolves every named section of `content` into a record.
///
/// # Errors
///
/// Returns [`ini::IniError`] when the text is not structurally valid INI.
/// Per-section problems are returned inside the `Vec`.
pub fn parse_records(content: &str) -> Result<Vec<Result<Record, RecordError>>, ini::IniError> {
    let doc = ini::parse(content)?;
    Ok(doc
        .sections()
        .iter()
        .map(|section| resolve_section(section, doc.defaults()))
        .collect())
}

/// Merges `section` over `defaults` (and the built-in fallbacks) into a record.
fn resolve_section(section: &Section, defaults: &Section) -> Result<Record, RecordError> {
    let name = section.name();
    let lookup = |key: &str| section.get(key).or_else(|| defaults.get(key));
    let require = |key: &'static str| {
        lookup(key).ok_or_else(|| RecordError::MissingKey {
            section: name.to_owned(),
            key,
        })
    };

    let url = require("url")?;
    let selector = require("selector")?;
    let raw_price = require("max_price")?;
    let max_price =
        parse_price(raw_price).map_err(|e| RecordError::invalid(name, "max_price", e.to_string()))?;

    let cookies = parse_cookies(name, lookup("cookies").unwrap_or(DEFAULT_COOKIES))?;
    let currency = lookup("currency").unwrap_or(DEFAULT_CURRENCY);

    Record::new(name, url, selector, max_price, cookies, currency)
}

/// Parses whitespace-separated `key=value` tokens.
///
/// Each token splits on its first `=`. A repeated key keeps the last value.
///
/// # Errors
///
/// Returns [`RecordError::InvalidValue`] for a token with no `=` or an empty key.
pub fn parse_cookies(section: &str, raw: &str) -> Result<AuthContext, RecordError> {
    let mut cookies = AuthContext::new();
    for token in raw.split_whitespace() {
        let (key, value) = token.split_once('=').ok_or_else(|| {
            RecordError::invalid(section, "cookies", format!("token \"{token}\" has no `=`"))
        })?;
        if key.is_empty() {
            return Err(RecordError::invalid(
                section,
                "cookies",
                format!("token \"{token}\" has an empty name"),
            ));
        }
        cookies.insert(key.to_owned(), value.to_owned());
    }
    Ok(cookies)
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
