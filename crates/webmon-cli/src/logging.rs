//! Subscriber setup from the numeric `--log-level` flag.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Info on the numeric severity scale.
pub(crate) const DEFAULT_LOG_LEVEL: i32 = 20;

/// Maps a threshold on the numeric severity scale (10 debug, 20 info,
/// 30 warning, 40 error, 50 critical) onto the most verbose tracing level
/// whose severity is at or above it. `0` and below enable trace output.
/// Above 40 nothing is emitted, since tracing has no critical level.
pub(crate) fn level_filter(level: i32) -> LevelFilter {
    match level {
        i32::MIN..=0 => LevelFilter::TRACE,
        1..=10 => LevelFilter::DEBUG,
        11..=20 => LevelFilter::INFO,
        21..=30 => LevelFilter::WARN,
        31..=40 => LevelFilter::ERROR,
        _ => LevelFilter::OFF,
    }
}

/// Installs the global stderr subscriber. `RUST_LOG`, when set, takes
/// precedence over `level`.
pub(crate) fn init(level: i32) -> anyhow::Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter(level).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))
}
