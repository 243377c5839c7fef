use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("string-validator").unwrap();
    cmd.env_remove("STRING_VALIDATOR_DEFAULT_MAX_LENGTH")
        .env_remove("STRING_VALIDATOR_EXPLAIN")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn valid_from_arguments() {
    cmd()
        .args(["Aa1!", "4"])
        .assert()
        .success()
        .stdout(predicate::eq("true\n"));
}

#[test]
fn invalid_from_arguments_still_succeeds() {
    cmd()
        .args(["Aa1!Aa1!Aa1!Aa1!", "10"])
        .assert()
        .success()
        .stdout(predicate::eq("false\n"));
}

#[test]
fn negative_max_length_is_false() {
    cmd()
        .args(["Aa1!", "-1"])
        .assert()
        .success()
        .stdout(predicate::eq("false\n"));
}

#[test]
fn backslash_counts_as_special() {
    cmd()
        .args(["Aa1\\", "10"])
        .assert()
        .success()
        .stdout(predicate::eq("true\n"));
}

#[test]
fn interactive_prompts() {
    cmd()
        .write_stdin("Aa1[]^\n10\n")
        .assert()
        .success()
        .stdout(contains("Enter the string to validate:"))
        .stdout(contains("Enter the max length:"))
        .stdout(contains("Is the string valid? true"));
}

#[test]
fn interactive_whitespace_is_rejected() {
    cmd()
        .write_stdin("Aa 1!\n10\n")
        .assert()
        .success()
        .stdout(contains("Is the string valid? false"));
}

#[test]
fn non_numeric_max_length_fails() {
    cmd()
        .args(["Aa1!", "ten"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(contains("Invalid max length \"ten\""));
}

#[test]
fn non_numeric_prompted_max_length_fails() {
    cmd()
        .write_stdin("Aa1!\nlots\n")
        .assert()
        .failure()
        .code(2)
        .stderr(contains("Invalid max length \"lots\""));
}

#[test]
fn closed_stdin_fails() {
    cmd()
        .write_stdin("")
        .assert()
        .failure()
        .code(2)
        .stderr(contains("the string to validate"));
}

#[test]
fn explain_reports_failed_rules() {
    cmd()
        .args(["--explain", "Aa1Aa1", "10"])
        .assert()
        .success()
        .stdout(predicate::eq("false\n"))
        .stderr(contains("- must contain a special character"));
}

#[test]
fn default_max_length_from_environment() {
    cmd()
        .env("STRING_VALIDATOR_DEFAULT_MAX_LENGTH", "3")
        .arg("Aa1!")
        .assert()
        .success()
        .stdout(predicate::eq("false\n"));
}

#[test]
fn invalid_configuration_fails() {
    cmd()
        .env("STRING_VALIDATOR_DEFAULT_MAX_LENGTH", "0")
        .args(["Aa1!", "4"])
        .assert()
        .failure()
        .code(78)
        .stderr(contains("default_max_length"));
}

#[test]
fn leading_hyphen_input_from_arguments() {
    cmd()
        .args(["-Aa1!", "10"])
        .assert()
        .success()
        .stdout(predicate::eq("true\n"));

    cmd()
        .args(["--explain", "--Aa1", "10"])
        .assert()
        .success()
        .stdout(predicate::eq("true\n"));

    cmd()
        .args(["-5", "10"])
        .assert()
        .success()
        .stdout(predicate::eq("false\n"));
}

#[test]
fn error_message_printed_once() {
    cmd()
        .args(["Aa1!", "ten"])
        .assert()
        .failure()
        .stderr(predicate::function(|err: &str| {
            err.matches("Invalid max length").count() == 1
        }));
}

#[test]
fn only_config_toml_is_read() {
    let dir = TempDir::new().expect("create temp dir");
    fs::write(dir.path().join("config.json"), r#"{"default_max_length": 0}"#)
        .expect("write config.json");

    cmd()
        .current_dir(dir.path())
        .args(["Aa1!", "4"])
        .assert()
        .success()
        .stdout(predicate::eq("true\n"));

    fs::write(dir.path().join("config.toml"), "default_max_length = 3\n")
        .expect("write config.toml");

    cmd()
        .current_dir(dir.path())
        .arg("Aa1!")
        .assert()
        .success()
        .stdout(predicate::eq("false\n"));
}
