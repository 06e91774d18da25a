//! Batch run over every configured record.
//!
//! Loads the monitor file, evaluates records with bounded parallelism, then
//! notifies sequentially in config order. One record's failure never stops
//! the others; only a fatal config error ends the run early.

use futures::stream::{self, StreamExt};
use webmon_core::{ConfigError, ConfigLoader, Record, RecordError};
use webmon_scraper::{evaluate, Outcome, PageClient};

use crate::notify::{NotifySink, Notifier};

/// Counts for one run.
///
/// `evaluated` is the number of records that reached the page evaluator;
/// `failures` also includes sections that could not be turned into records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct RunSummary {
    pub evaluated: usize,
    pub deals: usize,
    pub no_deals: usize,
    pub failures: usize,
}

impl RunSummary {
    fn tally(&mut self, outcome: &Outcome) {
        self.evaluated += 1;
        match outcome {
            Outcome::Deal { .. } => self.deals += 1,
            Outcome::NoDeal { .. } => self.no_deals += 1,
            Outcome::Failure { .. } => self.failures += 1,
        }
    }
}

pub(crate) struct BatchRunner<S> {
    loader: ConfigLoader,
    client: PageClient,
    notifier: Notifier<S>,
    max_concurrent: usize,
}

impl<S: NotifySink> BatchRunner<S> {
    pub(crate) fn new(
        loader: ConfigLoader,
        client: PageClient,
        notifier: Notifier<S>,
        max_concurrent: usize,
    ) -> Self {
        Self {
            loader,
            client,
            notifier,
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// Loads the monitor file and processes every section in it.
    ///
    /// # Errors
    ///
    /// Returns the loader's [`ConfigError`] when the file is missing,
    /// unreadable or structurally invalid. Nothing else fails the run.
    pub(crate) async fn run(&self) -> Result<RunSummary, ConfigError> {
        let loaded = self.loader.load()?;
        tracing::info!(
            path = %loaded.path.display(),
            sections = loaded.entries.len(),
            "loaded monitor config"
        );

        let summary = self.run_entries(loaded.entries).await;
        tracing::info!(
            evaluated = summary.evaluated,
            deals = summary.deals,
            no_deals = summary.no_deals,
            failures = summary.failures,
            "run complete"
        );
        Ok(summary)
    }

    /// Processes already-loaded entries. Malformed sections are logged and
    /// counted as failures; valid records are evaluated and notified.
    pub(crate) async fn run_entries(
        &self,
        entries: Vec<Result<Record, RecordError>>,
    ) -> RunSummary {
        let mut summary = RunSummary::default();

        let mut records = Vec::with_capacity(entries.len());
        for entry in entries {
            match entry {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::error!(section = e.section(), error = %e, "skipping malformed record");
                    summary.failures += 1;
                }
            }
        }

        if records.is_empty() && summary.failures == 0 {
            tracing::warn!("monitor config has no records");
            return summary;
        }

        let outcomes: Vec<Outcome> = stream::iter(records)
            .map(|record| {
                tracing::debug!(section = record.name(), url = record.url(), "evaluating");
                evaluate(&self.client, record)
            })
            .buffered(self.max_concurrent)
            .collect()
            .await;

        for outcome in &outcomes {
            summary.tally(outcome);
            self.notifier.notify(outcome).await;
        }

        summary
    }
}

/// Process exit status for a completed run. Strict mode maps any failure
/// to `2`; otherwise a completed run always exits `0`.
pub(crate) fn exit_status(summary: &RunSummary, strict: bool) -> u8 {
    if strict && summary.failures > 0 {
        2
    } else {
        0
    }
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
