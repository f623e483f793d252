//! Integration tests for CLI argument handling
//!
//! Tests the trip metadata flags and --view parsing from command line.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_tripdeck"))
        .args(args)
        .output()
        .expect("Failed to execute tripdeck")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("tripdeck"), "Help should mention tripdeck");
    assert!(stdout.contains("view"), "Help should mention --view flag");
    assert!(
        stdout.contains("trip-name"),
        "Help should mention --trip-name flag"
    );
}

#[test]
fn test_invalid_view_prints_error_and_exits() {
    let output = run_cli(&["--view", "globe"]);
    assert!(!output.status.success(), "Expected invalid view to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid view") || stderr.contains("invalid"),
        "Should print error message about invalid view: {}",
        stderr
    );
}

#[test]
fn test_invalid_start_date_prints_error_and_exits() {
    let output = run_cli(&["--start-date", "next tuesday"]);
    assert!(!output.status.success(), "Expected invalid date to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid date"),
        "Should print error message about invalid date: {}",
        stderr
    );
}

#[test]
fn test_past_start_date_prints_error_and_exits() {
    let output = run_cli(&["--start-date", "2001-01-01"]);
    assert!(!output.status.success(), "Expected past start date to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("before today"),
        "Should print the start-date guard message: {}",
        stderr
    );
}

#[test]
fn test_view_with_timeline_is_valid() {
    // This test just verifies the argument is accepted (doesn't error immediately)
    // The actual state transition is tested in unit tests
    let output = run_cli(&["--view", "timeline", "--help"]);
    // With --help, it should succeed regardless of other flags
    // This is a workaround since we can't easily test TUI apps
    assert!(output.status.success());
}

#[test]
fn test_view_with_map_alias_is_valid() {
    let output = run_cli(&["--view", "map", "--help"]);
    assert!(output.status.success());
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use chrono::NaiveDate;
    use clap::Parser;
    use tripdeck::cli::{parse_date_arg, Cli, StartupConfig};
    use tripdeck::views::View;

    fn today() -> NaiveDate {
        "2025-03-01".parse().unwrap()
    }

    #[test]
    fn test_cli_no_args_has_no_flags() {
        let cli = Cli::parse_from(["tripdeck"]);
        assert!(cli.trip_name.is_none());
        assert!(cli.view.is_none());
    }

    #[test]
    fn test_cli_view_flag_round_trips() {
        let cli = Cli::parse_from(["tripdeck", "--view", "route"]);
        let config = StartupConfig::from_cli(&cli, today()).unwrap();
        assert_eq!(config.initial_view, Some(View::RouteMap));
    }

    #[test]
    fn test_cli_trip_flags_round_trip() {
        let cli = Cli::parse_from([
            "tripdeck",
            "--trip-name",
            "Iberia loop",
            "--end-date",
            "2025-05-20",
        ]);
        let config = StartupConfig::from_cli(&cli, today()).unwrap();
        assert_eq!(config.trip_name.as_deref(), Some("Iberia loop"));
        assert_eq!(config.end_date, Some("2025-05-20".parse().unwrap()));
    }

    #[test]
    fn test_parse_date_arg_rejects_garbage() {
        assert!(parse_date_arg("garbage").is_err());
        assert!(parse_date_arg("2025-06-01").is_ok());
    }
}
