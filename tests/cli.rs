//! Integration tests for the `numtap` binary in quick mode.

use assert_cmd::Command;
use predicates::prelude::*;

fn numtap() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_numtap"));
    cmd.env_remove("NUMTAP_LANG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn quick_mode_prints_the_result() {
    numtap().args(["--no-color", "5 + 3"])
            .assert()
            .success()
            .stdout("Result: 8\n");
}

#[test]
fn quick_mode_with_variables() {
    numtap().args(["--no-color", "x = 5; x + 3"])
            .assert()
            .success()
            .stdout("Result: 8\n");
}

#[test]
fn quick_mode_conversion() {
    numtap().args(["--no-color", "2 km to meter"])
            .assert()
            .success()
            .stdout("Result: 2000 meter\n");
}

#[test]
fn errors_exit_with_failure() {
    numtap().args(["--no-color", "1 / 0"])
            .assert()
            .failure()
            .code(1)
            .stdout("")
            .stderr("Error: Result is infinite\n");
}

#[test]
fn undefined_symbols_are_named() {
    numtap().args(["--no-color", "one + 1"])
            .assert()
            .code(1)
            .stderr("Error: Undefined symbol: one\n");
}

#[test]
fn blank_expression_fails() {
    numtap().args(["--no-color", "   "])
            .assert()
            .code(1)
            .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn language_flag() {
    numtap().args(["--no-color", "--lang", "de", "1 / 0"])
            .assert()
            .code(1)
            .stderr("Error: Ergebnis ist unendlich\n");
}

#[test]
fn language_from_environment() {
    numtap().env("NUMTAP_LANG", "fr")
            .args(["--no-color", "0 / 0"])
            .assert()
            .code(1)
            .stderr("Error: Opération invalide (NaN)\n");
}

#[test]
fn unsupported_language_falls_back_to_english() {
    numtap().args(["--no-color", "--lang", "xx", "2 km to second"])
            .assert()
            .code(1)
            .stderr("Error: Unit conversion error\n");
}

#[test]
fn version_flags() {
    for flag in ["-v", "--version"] {
        numtap().arg(flag)
                .assert()
                .success()
                .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

#[test]
fn help_flag() {
    numtap().arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage").and(predicate::str::contains("--lang")));
}

#[test]
fn colors_wrap_the_result() {
    numtap().arg("5 + 3")
            .assert()
            .success()
            .stdout(predicate::str::contains("Result: 8"));
}

#[test]
fn leading_minus_is_an_expression() {
    numtap().args(["--no-color", "-5 + 3"])
            .assert()
            .success()
            .stdout("Result: -2\n");
}

#[test]
fn help_lists_examples() {
    numtap().arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Examples:")
                    .and(predicate::str::contains("numtap \"sin(45 deg)\""))
                    .and(predicate::str::contains("interactive mode")));
}

#[test]
fn non_finite_assignment_fails() {
    numtap().args(["--no-color", "x = 0/0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error: Invalid operation (NaN)"));
    numtap().args(["--no-color", "x = 1/0; x"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error: Result is infinite"));
}
