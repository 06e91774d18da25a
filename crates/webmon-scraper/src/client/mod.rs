//! HTTP client for monitored pages.

mod cookies;

use std::time::Duration;

use reqwest::Client;
use webmon_core::{AppConfig, AuthContext};

use crate::error::FetchError;

pub(crate) use cookies::cookie_header;

/// Fetches page bodies with a bounded timeout and the record's cookies.
///
/// One request per fetch: a non-2xx response comes back as
/// [`FetchError::UnexpectedStatus`] and a slow page as a timed-out
/// [`FetchError::Http`].
#[derive(Debug, Clone)]
pub struct PageClient {
    client: Client,
}

impl PageClient {
    /// Creates a `PageClient` with the given timeouts and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        request_timeout_secs: u64,
        connect_timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(request_timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Builds a client from runtime settings.
    ///
    /// # Errors
    ///
    /// See [`PageClient::new`].
    pub fn from_app_config(config: &AppConfig) -> Result<Self, FetchError> {
        Self::new(
            config.request_timeout_secs,
            config.connect_timeout_secs,
            &config.user_agent,
        )
    }

    /// Fetches `url` and returns the response body as text.
    ///
    /// `auth` is sent as a single `Cookie` header; an empty context sends none.
    ///
    /// # Errors
    ///
    /// - [`FetchError::UnexpectedStatus`] for any non-2xx status.
    /// - [`FetchError::Http`] for network, TLS or timeout failures.
    pub async fn fetch(&self, url: &str, auth: &AuthContext) -> Result<String, FetchError> {
        let mut request = self
            .client
            .get(url)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9");

        if let Some(cookie) = cookie_header(auth) {
            request = request.header(reqwest::header::COOKIE, cookie);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url, status = status.as_u16(), "page returned non-success status");
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
