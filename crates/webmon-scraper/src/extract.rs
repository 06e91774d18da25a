//! Locator resolution against page markup.

use scraper::{Html, Selector};

use crate::error::EvalError;

/// Returns the text content of the single element matching `locator`.
///
/// The locator must identify exactly one element; zero or several matches
/// is an error, never a "take the first one" fallback. Text is the
/// concatenation of every descendant text node, untrimmed.
///
/// # Errors
///
/// - [`EvalError::InvalidLocator`] if `locator` is not a valid CSS selector.
/// - [`EvalError::LocatorCardinality`] if it matches zero or several elements.
pub fn extract_single_text(markup: &str, locator: &str) -> Result<String, EvalError> {
    let selector = Selector::parse(locator).map_err(|e| EvalError::InvalidLocator {
        locator: locator.to_owned(),
        reason: e.to_string(),
    })?;

    let document = Html::parse_document(markup);
    let matches: Vec<_> = document.select(&selector).collect();
    match matches.as_slice() {
        [element] => Ok(element.text().collect()),
        _ => Err(EvalError::LocatorCardinality {
            locator: locator.to_owned(),
            matched: matches.len(),
        }),
    }
}
