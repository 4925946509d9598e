//! Tests for error handling, suggestions, and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;

fn showreel() -> Command {
    Command::cargo_bin("showreel").unwrap()
}

#[test]
fn unknown_deck_exits_3_with_suggestion() {
    showreel()
        .args(["show", "no-such-deck"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Deck not found"))
        .stderr(predicate::str::contains("showreel list"));
}

#[test]
fn card_out_of_range_exits_2_and_names_the_range() {
    // The fullstack deck has 8 cards.
    showreel()
        .args(["show", "fullstack", "--card", "99"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("does not exist"))
        .stderr(predicate::str::contains("1 through 8"));
}

#[test]
fn card_zero_is_rejected() {
    // Card numbers are 1-based; 0 must never be silently clamped.
    showreel()
        .args(["show", "fullstack", "--card", "0"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn unknown_config_key_exits_4() {
    showreel()
        .args(["config", "get", "not.a.key"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn missing_config_file_exits_4() {
    showreel()
        .args(["--config", "/absolutely/does/not/exist.toml", "list"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn unknown_subcommand_exits_2() {
    showreel().arg("frobnicate").assert().failure().code(2);
}

#[test]
fn no_arguments_shows_help() {
    // arg_required_else_help: bare invocation prints usage and exits non-zero.
    showreel()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
