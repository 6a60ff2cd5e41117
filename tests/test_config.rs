use std::time::Duration;

use clap::error::ErrorKind;
use clap::Parser;
use log::LevelFilter;
use star_shooter::config::{Config, Options};

#[test]
fn default_config_matches_classic_tuning() {
    let c = Config::default();
    assert_eq!((c.width, c.height), (800.0, 600.0));
    assert_eq!(c.player_size, 40.0);
    assert_eq!(c.player_speed, 7.0);
    assert_eq!(c.shoot_delay_ms, 300);
    assert_eq!(c.spawn_chance, 0.02);
    assert_eq!((c.enemy_min_speed, c.enemy_max_speed), (2.0, 5.0));
    assert_eq!(c.star_count, 100);
    assert_eq!(c.starting_lives, 3);
    assert_eq!(c.frame, Duration::from_millis(16));
}

#[test]
fn no_arguments_gives_defaults() {
    let opts = Options::try_parse_from(["star_shooter"]).unwrap();
    assert_eq!(opts.seed, None);
    assert_eq!(opts.log_file, "star_shooter.log");
    assert_eq!(opts.log_level, LevelFilter::Info);
}

#[test]
fn parses_every_option() {
    let opts = Options::try_parse_from([
        "star_shooter", "--seed", "1234", "--log-file", "/tmp/s.log", "--log-level", "debug",
    ])
    .unwrap();
    assert_eq!(opts.seed, Some(1234));
    assert_eq!(opts.log_file, "/tmp/s.log");
    assert_eq!(opts.log_level, LevelFilter::Debug);
}

#[test]
fn accepts_equals_form() {
    let opts = Options::try_parse_from(["star_shooter", "--seed=5", "--log-level=TRACE"]).unwrap();
    assert_eq!(opts.seed, Some(5));
    assert_eq!(opts.log_level, LevelFilter::Trace);
}

#[test]
fn help_flag_is_reported() {
    let err = Options::try_parse_from(["star_shooter", "--help"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
}

#[test]
fn bad_seed_is_rejected() {
    let err = Options::try_parse_from(["star_shooter", "--seed", "abc"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

#[test]
fn bad_log_level_is_rejected() {
    let err = Options::try_parse_from(["star_shooter", "--log-level", "loud"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

#[test]
fn unknown_flag_is_rejected() {
    let err = Options::try_parse_from(["star_shooter", "--fast"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn missing_value_is_rejected() {
    assert!(Options::try_parse_from(["star_shooter", "--log-file"]).is_err());
}
