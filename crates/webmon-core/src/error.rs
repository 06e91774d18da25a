use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ini::IniError;

/// Fatal configuration errors. Any of these aborts the run.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no monitor config file found (searched: {})", join_paths(.searched))]
    NotFound { searched: Vec<PathBuf> },

    #[error("could not determine the home directory to search for a monitor config")]
    NoHomeDir,

    #[error("failed to read monitor config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse monitor config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: IniError,
    },

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// A single monitor section that could not be turned into a [`crate::Record`].
///
/// These are recovered per section: the loader keeps going and the batch
/// runner counts the section as a failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("section [{section}] is missing required key `{key}`")]
    MissingKey { section: String, key: &'static str },

    #[error("section [{section}] has invalid `{key}`: {reason}")]
    InvalidValue {
        section: String,
        key: &'static str,
        reason: String,
    },
}

impl RecordError {
    /// Name of the config section the error came from.
    #[must_use]
    pub fn section(&self) -> &str {
        match self {
            Self::MissingKey { section, .. } | Self::InvalidValue { section, .. } => section,
        }
    }

    pub(crate) fn invalid(section: &str, key: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            section: section.to_owned(),
            key,
            reason: reason.into(),
        }
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| Path::display(p).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
