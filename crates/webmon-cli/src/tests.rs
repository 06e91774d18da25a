use tracing_subscriber::filter::LevelFilter;

use super::*;
use crate::logging::level_filter;

#[test]
fn defaults_to_info_and_non_strict() {
    let cli = Cli::try_parse_from(["webmon"]).expect("expected valid cli args");
    assert_eq!(cli.log_level, 20);
    assert!(!cli.strict);
}

#[test]
fn parses_short_log_level() {
    let cli = Cli::try_parse_from(["webmon", "-l", "10"]).expect("expected valid cli args");
    assert_eq!(cli.log_level, 10);
}

#[test]
fn parses_long_log_level_and_strict() {
    let cli = Cli::try_parse_from(["webmon", "--log-level", "40", "--strict"])
        .expect("expected valid cli args");
    assert_eq!(cli.log_level, 40);
    assert!(cli.strict);
}

#[test]
fn rejects_non_integer_log_level() {
    assert!(Cli::try_parse_from(["webmon", "-l", "debug"]).is_err());
}

#[test]
fn rejects_subcommands() {
    assert!(Cli::try_parse_from(["webmon", "collect"]).is_err());
}

#[test]
fn standard_levels_map_onto_tracing_levels() {
    assert_eq!(level_filter(0), LevelFilter::TRACE);
    assert_eq!(level_filter(10), LevelFilter::DEBUG);
    assert_eq!(level_filter(20), LevelFilter::INFO);
    assert_eq!(level_filter(30), LevelFilter::WARN);
    assert_eq!(level_filter(40), LevelFilter::ERROR);
    assert_eq!(level_filter(50), LevelFilter::OFF);
}

#[test]
fn in_between_levels_round_up_to_the_next_severity() {
    assert_eq!(level_filter(-5), LevelFilter::TRACE);
    assert_eq!(level_filter(1), LevelFilter::DEBUG);
    assert_eq!(level_filter(15), LevelFilter::INFO);
    assert_eq!(level_filter(25), LevelFilter::WARN);
    assert_eq!(level_filter(35), LevelFilter::ERROR);
    assert_eq!(level_filter(41), LevelFilter::OFF);
}
