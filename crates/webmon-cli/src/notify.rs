//! Deal notifications.
//!
//! Only deals reach the user. No-deals are logged at debug level and
//! failures at error level; neither produces a desktop notification.

use std::time::Duration;

use rust_decimal::Decimal;
use thiserror::Error;
use webmon_core::{format_price, Record};
use webmon_scraper::Outcome;

/// How long a notification command may run before it is abandoned.
const NOTIFY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub(crate) enum NotifyError {
    #[error("failed to launch `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}")]
    Exit {
        command: String,
        status: std::process::ExitStatus,
    },

    #[error("`{command}` did not finish within {}s", NOTIFY_TIMEOUT.as_secs())]
    TimedOut { command: String },
}

/// Somewhere a rendered deal message can be delivered.
pub(crate) trait NotifySink {
    async fn send(&self, message: &str) -> Result<(), NotifyError>;
}

/// Desktop notification through an external command such as `notify-send`.
/// The message is passed as the only argument.
#[derive(Debug, Clone)]
pub(crate) struct DesktopSink {
    command: String,
}

impl DesktopSink {
    pub(crate) fn new(command: &str) -> Self {
        Self {
            command: command.to_owned(),
        }
    }
}

impl NotifySink for DesktopSink {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        let mut command = tokio::process::Command::new(&self.command);
        command.arg(message).kill_on_drop(true);

        let status = tokio::time::timeout(NOTIFY_TIMEOUT, command.status())
            .await
            .map_err(|_| NotifyError::TimedOut {
                command: self.command.clone(),
            })?
            .map_err(|source| NotifyError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(NotifyError::Exit {
                command: self.command.clone(),
                status,
            })
        }
    }
}

/// Writes the message to stdout. Cannot fail.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct StdoutSink;

impl NotifySink for StdoutSink {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        println!("{message}");
        Ok(())
    }
}

/// Renders outcomes and dispatches deals to a sink.
///
/// Sink failures never escape: the message is logged and handed to
/// [`StdoutSink`] instead, so a found deal is not lost.
pub(crate) struct Notifier<S> {
    sink: S,
}

impl<S: NotifySink> Notifier<S> {
    pub(crate) fn new(sink: S) -> Self {
        Self { sink }
    }

    pub(crate) async fn notify(&self, outcome: &Outcome) {
        match outcome {
            Outcome::Deal {
                record,
                observed_price,
            } => {
                let message = render_deal(record, *observed_price);
                tracing::info!(section = record.name(), url = record.url(), "{message}");
                if let Err(e) = self.sink.send(&message).await {
                    tracing::warn!(
                        section = record.name(),
                        error = %e,
                        "notification sink failed, writing deal to stdout"
                    );
                    if let Err(e) = StdoutSink.send(&message).await {
                        tracing::error!(section = record.name(), error = %e, "deal was not delivered");
                    }
                }
            }
            Outcome::NoDeal {
                record,
                observed_price,
            } => {
                tracing::debug!(
                    section = record.name(),
                    url = record.url(),
                    price = %observed_price,
                    max_price = %record.max_price(),
                    "no deal"
                );
            }
            Outcome::Failure { record, reason } => {
                tracing::error!(
                    section = record.name(),
                    url = record.url(),
                    locator = record.locator(),
                    stage = reason.stage(),
                    error = %reason,
                    "record evaluation failed"
                );
            }
        }
    }
}

/// User-facing deal message: URL, observed price, threshold and currency.
pub(crate) fn render_deal(record: &Record, observed_price: Decimal) -> String {
    let currency = record.currency();
    format!(
        "Deal at {} for {} {currency} (threshold {} {currency})",
        record.url(),
        format_price(observed_price),
        format_price(record.max_price()),
    )
}
