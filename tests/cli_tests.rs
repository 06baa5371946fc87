//! Binary contract tests.
//!
//! These run the built `card-rounds` executable and check stdout and the
//! exit status for each documented invocation.

use std::process::{Command, Output};

fn card_rounds(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_card-rounds"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run card-rounds")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_prints_round_count() {
    let output = card_rounds(&["10"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Number of rounds: 6\n");
}

#[test]
fn test_two_arguments_print_usage() {
    let output = card_rounds(&["3", "4"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "usage: <N cards>\n");
}

#[test]
fn test_missing_argument_prints_usage() {
    let output = card_rounds(&[]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "usage: <N cards>\n");
}

#[test]
fn test_non_integer_prints_error() {
    let output = card_rounds(&["abc"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "error - not an integer\n");
}

#[test]
fn test_zero_prints_usage() {
    let output = card_rounds(&["0"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "usage: <N cards>\n");
}

#[test]
fn test_trace_goes_to_stderr() {
    let output = card_rounds(&["5", "--trace"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Number of rounds: 5\n");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("2 4 5 3 1"), "stderr was: {stderr}");
}

#[test]
fn test_lone_flag_prints_not_an_integer() {
    for arg in ["-abc", "--foo", "--help"] {
        let output = card_rounds(&[arg]);

        assert_eq!(output.status.code(), Some(0), "{arg}");
        assert_eq!(stdout(&output), "error - not an integer\n", "{arg}");
    }
}
