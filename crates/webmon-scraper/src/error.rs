use thiserror::Error;
use webmon_core::PriceError;

/// Failure to obtain a page body.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
}

/// Why a record could not be classified as a deal or no-deal.
///
/// Each variant belongs to one pipeline stage; see [`EvalError::stage`].
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("invalid selector \"{locator}\": {reason}")]
    InvalidLocator { locator: String, reason: String },

    #[error("selector \"{locator}\" matched {matched} elements, expected exactly 1")]
    LocatorCardinality { locator: String, matched: usize },

    #[error("price parse failed: {0}")]
    PriceParse(#[from] PriceError),
}

impl EvalError {
    /// Pipeline stage that failed, for log fields.
    #[must_use]
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Fetch(_) => "fetch",
            Self::InvalidLocator { .. } | Self::LocatorCardinality { .. } => "locate",
            Self::PriceParse(_) => "parse",
        }
    }
}
