use std::collections::BTreeMap;

use rust_decimal::Decimal;
use url::Url;

use crate::error::RecordError;

/// Cookie name to value pairs sent with a page fetch. Empty means no auth.
pub type AuthContext = BTreeMap<String, String>;

/// One fully-resolved monitor request.
///
/// Built once at load time from a config section merged over the defaults;
/// nothing about the layered config survives past construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    url: String,
    locator: String,
    max_price: Decimal,
    auth: AuthContext,
    currency: String,
}

impl Record {
    /// Validates and builds a record. `name` is the config section it came
    /// from and is only used for diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::InvalidValue`] when the URL is not an absolute
    /// `http`/`https` address, the locator or currency is blank, or the
    /// threshold is negative.
    pub fn new(
        name: impl Into<String>,
        url: &str,
        locator: &str,
        max_price: Decimal,
        auth: AuthContext,
        currency: &str,
    ) -> Result<Self, RecordError> {
        let name = name.into();

        let url = url.trim();
        let parsed = Url::parse(url)
            .map_err(|e| RecordError::invalid(&name, "url", format!("\"{url}\": {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(RecordError::invalid(
                &name,
                "url",
                format!("unsupported scheme \"{}\"", parsed.scheme()),
            ));
        }

        let locator = locator.trim();
        if locator.is_empty() {
            return Err(RecordError::invalid(&name, "selector", "must not be empty"));
        }

        if max_price.is_sign_negative() && !max_price.is_zero() {
            return Err(RecordError::invalid(
                &name,
                "max_price",
                format!("{max_price} is negative"),
            ));
        }

        let currency = currency.trim();
        if currency.is_empty() {
            return Err(RecordError::invalid(&name, "currency", "must not be empty"));
        }

        Ok(Self {
            url: url.to_owned(),
            locator: locator.to_owned(),
            max_price,
            auth,
            currency: currency.to_owned(),
            name,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn locator(&self) -> &str {
        &self.locator
    }

    /// Inclusive upper threshold: an observed price equal to this is a deal.
    #[must_use]
    pub fn max_price(&self) -> Decimal {
        self.max_price
    }

    #[must_use]
    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// `true` when `observed` is at or below the threshold.
    #[must_use]
    pub fn is_deal(&self, observed: Decimal) -> bool {
        observed <= self.max_price
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn build(url: &str, locator: &str, max_price: &str) -> Result<Record, RecordError> {
        Record::new(
            "item",
            url,
            locator,
            dec(max_price),
            AuthContext::new(),
            "PLN",
        )
    }

    #[test]
    fn valid_record_keeps_fields() {
        let record = build("http://example.test/item", " .price ", "20.00").unwrap();
        assert_eq!(record.name(), "item");
        assert_eq!(record.url(), "http://example.test/item");
        assert_eq!(record.locator(), ".price");
        assert_eq!(record.max_price(), dec("20.00"));
        assert!(record.auth().is_empty());
        assert_eq!(record.currency(), "PLN");
    }

    #[test]
    fn threshold_is_inclusive() {
        let record = build("http://example.test/item", ".price", "20.00").unwrap();
        assert!(record.is_deal(dec("19.99")));
        assert!(record.is_deal(dec("20")));
        assert!(!record.is_deal(dec("20.01")));
    }

    #[test]
    fn relative_url_is_rejected() {
        let err = build("/item", ".price", "1").unwrap_err();
        assert!(
            matches!(err, RecordError::InvalidValue { key: "url", .. }),
            "expected invalid url, got: {err:?}"
        );
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let err = build("ftp://example.test/item", ".price", "1").unwrap_err();
        assert!(matches!(err, RecordError::InvalidValue { key: "url", .. }));
    }

    #[test]
    fn blank_locator_is_rejected() {
        let err = build("http://example.test/", "   ", "1").unwrap_err();
        assert!(matches!(
            err,
            RecordError::InvalidValue {
                key: "selector",
                ..
            }
        ));
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let err = build("http://example.test/", ".p", "-1").unwrap_err();
        assert!(matches!(
            err,
            RecordError::InvalidValue {
                key: "max_price",
                ..
            }
        ));
    }

    #[test]
    fn zero_threshold_is_allowed() {
        assert!(build("http://example.test/", ".p", "0").is_ok());
        assert!(build("http://example.test/", ".p", "-0").is_ok());
    }
}
