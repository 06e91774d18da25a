//! Record evaluation: fetch → locate → extract → parse → compare.

use rust_decimal::Decimal;
use webmon_core::{parse_price, Record};

use crate::client::PageClient;
use crate::error::EvalError;
use crate::extract::extract_single_text;

/// Result of evaluating one record.
#[derive(Debug)]
pub enum Outcome {
    /// Observed price is at or below the threshold.
    Deal {
        record: Record,
        observed_price: Decimal,
    },
    /// Observed price is above the threshold.
    NoDeal {
        record: Record,
        observed_price: Decimal,
    },
    /// Some stage of the pipeline failed.
    Failure { record: Record, reason: EvalError },
}

impl Outcome {
    /// Classifies an observation against the record's threshold.
    #[must_use]
    pub fn classify(record: Record, observation: Result<Decimal, EvalError>) -> Self {
        match observation {
            Ok(observed_price) if record.is_deal(observed_price) => Self::Deal {
                record,
                observed_price,
            },
            Ok(observed_price) => Self::NoDeal {
                record,
                observed_price,
            },
            Err(reason) => Self::Failure { record, reason },
        }
    }

    #[must_use]
    pub fn record(&self) -> &Record {
        match self {
            Self::Deal { record, .. } | Self::NoDeal { record, .. } | Self::Failure { record, .. } => {
                record
            }
        }
    }

    #[must_use]
    pub fn is_deal(&self) -> bool {
        matches!(self, Self::Deal { .. })
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }
}

/// Evaluates one record end to end. Never fails: every error becomes
/// [`Outcome::Failure`].
pub async fn evaluate(client: &PageClient, record: Record) -> Outcome {
    let observation = observe_price(client, &record).await;
    Outcome::classify(record, observation)
}

async fn observe_price(client: &PageClient, record: &Record) -> Result<Decimal, EvalError> {
    let body = client.fetch(record.url(), record.auth()).await?;
    read_price(&body, record.locator())
}

/// Locates the single element matching `locator` in `markup` and parses its
/// text as a price.
///
/// # Errors
///
/// Returns the locate-stage errors of [`extract_single_text`] or
/// [`EvalError::PriceParse`] when the element text is not a decimal.
pub fn read_price(markup: &str, locator: &str) -> Result<Decimal, EvalError> {
    let text = extract_single_text(markup, locator)?;
    let price = parse_price(&text)?;
    tracing::debug!(locator, %price, "found price");
    Ok(price)
}
