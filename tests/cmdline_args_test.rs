//! Tests for command-line argument parsing

use clap::{CommandFactory, Parser};
use rotor_tracker::{cli::Args, config::Config, Error};

#[test]
fn test_argument_definitions_are_consistent() {
    Args::command().debug_assert();
}

#[test]
fn test_help_argument() {
    let result = Args::try_parse_from(["rotor-tracker", "--help"]);

    // Help should cause an error (but a specific help error)
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

#[test]
fn test_trace_is_required() {
    let result = Args::try_parse_from(["rotor-tracker"]);
    assert_eq!(
        result.unwrap_err().kind(),
        clap::error::ErrorKind::MissingRequiredArgument
    );
}

#[test]
fn test_print_config_needs_no_trace() {
    let args = Args::try_parse_from(["rotor-tracker", "--print-config"]).unwrap();
    assert!(args.print_config);
    assert!(args.trace.is_none());
}

#[test]
fn test_defaults_leave_config_untouched() {
    let args = Args::try_parse_from(["rotor-tracker", "session.yaml"]).unwrap();
    assert_eq!(args.trace.as_deref(), Some(std::path::Path::new("session.yaml")));
    assert!(!args.debug);

    let mut config = Config::default();
    args.apply_overrides(&mut config);
    assert_eq!(config, Config::default());
}

#[test]
fn test_overrides() {
    let args = Args::try_parse_from([
        "rotor-tracker",
        "session.yaml",
        "--window",
        "5",
        "--threshold",
        "1.5",
        "--hfov",
        "62.2",
        "--fps",
        "30",
        "-C",
        "tracker.yaml",
        "-d",
    ])
    .unwrap();

    assert!(args.debug);
    assert_eq!(args.config.as_deref(), Some(std::path::Path::new("tracker.yaml")));

    let mut config = Config::default();
    args.apply_overrides(&mut config);
    assert_eq!(config.tracking.smoothing_window, 5);
    assert_eq!(config.tracking.movement_threshold, 1.5);
    assert_eq!(config.tracking.horizontal_fov, 62.2);
    assert_eq!(config.camera.replay_fps, 30);
}

#[test]
fn test_invalid_number() {
    let result = Args::try_parse_from(["rotor-tracker", "session.yaml", "--window", "many"]);
    assert_eq!(result.unwrap_err().kind(), clap::error::ErrorKind::ValueValidation);
}

fn write_config(name: &str, yaml: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("rotor_tracker_{}_{name}", std::process::id()));
    std::fs::write(&path, yaml).unwrap();
    path
}

#[test]
fn test_load_config_from_file() {
    let path = write_config("valid.yaml", "tracking:\n  movement_threshold: 50.0\n");
    let args = Args::try_parse_from(["rotor-tracker", "session.yaml", "-C", path.to_str().unwrap()]).unwrap();

    let config = args.load_config().unwrap();
    assert_eq!(config.tracking.movement_threshold, 50.0);
    assert_eq!(config.tracking.smoothing_window, 15);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_unparseable_config_file_is_an_error() {
    let path = write_config(
        "broken.yaml",
        "tracking:\n  smoothing_window: -1\n  movement_threshold: 50.0\n",
    );
    let args = Args::try_parse_from(["rotor-tracker", "session.yaml", "-C", path.to_str().unwrap()]).unwrap();

    assert!(matches!(args.load_config(), Err(Error::ConfigError(_))));

    std::fs::remove_file(path).ok();
}

#[test]
fn test_missing_config_file_is_an_error() {
    let args = Args::try_parse_from(["rotor-tracker", "session.yaml", "-C", "/nonexistent/tracker.yaml"]).unwrap();
    assert!(matches!(args.load_config(), Err(Error::Io(_))));
}

#[test]
fn test_overrides_are_validated() {
    let args = Args::try_parse_from(["rotor-tracker", "session.yaml", "--window", "0"]).unwrap();
    assert!(matches!(args.load_config(), Err(Error::ConfigError(_))));

    let args = Args::try_parse_from(["rotor-tracker", "session.yaml", "--threshold", "0.5"]).unwrap();
    assert_eq!(args.load_config().unwrap().tracking.movement_threshold, 0.5);
}
