mod logging;
mod notify;
mod runner;

#[cfg(test)]
mod test_support;

use std::process::ExitCode;

use clap::Parser;
use webmon_core::ConfigLoader;
use webmon_scraper::PageClient;

use crate::notify::{DesktopSink, Notifier};
use crate::runner::{exit_status, BatchRunner};

#[derive(Debug, Parser)]
#[command(name = "webmon", version)]
#[command(about = "Check web pages for prices at or below a threshold")]
struct Cli {
    /// Log level on the numeric severity scale (10 debug, 20 info, 30 warning, 40 error)
    #[arg(short = 'l', long = "log-level", default_value_t = logging::DEFAULT_LOG_LEVEL, allow_negative_numbers = true)]
    log_level: i32,

    /// Exit with status 2 when any record fails
    #[arg(long)]
    strict: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    logging::init(cli.log_level)?;

    let config = webmon_core::load_app_config_from_env()?;
    tracing::debug!(?config, "runtime settings");

    let loader = ConfigLoader::from_app_config(&config)?;
    let client = PageClient::from_app_config(&config)?;
    let notifier = Notifier::new(DesktopSink::new(&config.notify_command));
    let runner = BatchRunner::new(loader, client, notifier, config.max_concurrent_fetches);

    let summary = runner.run().await?;
    Ok(ExitCode::from(exit_status(&summary, cli.strict)))
}

#[cfg(test)]
mod tests;
