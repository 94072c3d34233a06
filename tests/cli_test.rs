/// CLI binary integration tests using assert_cmd
///
/// The shell reads prompts from piped stdin when no terminal is attached, so
/// whole menu flows can be scripted line by line.
mod common;

use assert_cmd::Command;
use assert_cmd::prelude::*;
use common::{EntryBuilder, HistoryFileBuilder};
use predicates::prelude::*;

fn hourly() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hourly"))
}

#[test]
fn test_cli_help_flag() {
    hourly()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("interactive stopwatch"))
        .stdout(predicate::str::contains("Project history file"));
}

#[test]
fn test_cli_version_flag() {
    hourly().arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_exit_on_end_of_input() {
    hourly()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Hourly"))
        .stdout(predicate::str::contains("Exiting Hourly..."));
}

#[test]
fn test_cli_unknown_menu_option_reprompts() {
    hourly()
        .write_stdin("9\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unrecognized option '9'"))
        .stdout(predicate::str::contains("Exiting Hourly..."));
}

#[test]
fn test_cli_scripted_project_creation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("demo.json");
    let input = format!("1\nDemo\n{}\n7\n3\n", path.display());

    hourly()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating 'Demo' project"))
        .stdout(predicate::str::contains("Working on 'Demo' project"))
        .stdout(predicate::str::contains("Closing 'Demo' project"));

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains(r#""name": "Demo""#));
    assert!(written.contains(r#""total_time_worked": "0:00:00""#));
}

#[test]
fn test_cli_rejects_empty_project_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("named.json");
    let input = format!("1\n\nNamed\n{}\n7\n3\n", path.display());

    hourly()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a valid name"))
        .stdout(predicate::str::contains("Creating 'Named' project"));
}

#[test]
fn test_cli_overwrite_asks_for_confirmation() {
    let dir = tempfile::tempdir().unwrap();
    let path = HistoryFileBuilder::new("Old")
        .with_entry(EntryBuilder::new())
        .total("0:00:05")
        .write_to(dir.path(), "clash.json");
    let input = format!("1\nFresh\n{}\ny\n7\n3\n", path.display());

    hourly()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"))
        .stdout(predicate::str::contains("Overwriting"))
        .stdout(predicate::str::contains("Working on 'Fresh' project"));

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains(r#""name": "Fresh""#));
    assert!(written.contains(r#""worked_hours": []"#));
}

#[test]
fn test_cli_record_work_session_scripted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("work.json");
    // Without a terminal the stopwatch stops on the next input line, so the
    // whole record flow can be driven from a script.
    let input = format!("1\nWork\n{}\n1\n\npaired on the parser\n2\n7\n3\n", path.display());

    hourly()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting the stopwatch"))
        .stdout(predicate::str::contains("Time worked:"))
        .stdout(predicate::str::contains("paired on the parser"));

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains(r#""task": "paired on the parser""#));
}

#[test]
fn test_cli_open_project_via_file_argument() {
    let dir = tempfile::tempdir().unwrap();
    let path = HistoryFileBuilder::new("Demo")
        .with_entry(EntryBuilder::new().task("first recorded session"))
        .total("0:00:05")
        .write_to(dir.path(), "demo.json");

    hourly()
        .arg(&path)
        .write_stdin("2\n7\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Working on 'Demo' project"))
        .stdout(predicate::str::contains("Initial Time"))
        .stdout(predicate::str::contains("first recorded session"))
        .stdout(predicate::str::contains("Total time worked: 0:00:05"));
}

#[test]
fn test_cli_missing_file_argument_falls_back_to_welcome() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");

    hourly()
        .arg(&missing)
        .write_stdin("3\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("history file not found"))
        .stdout(predicate::str::contains("What do you want to do?"))
        .stdout(predicate::str::contains("Exiting Hourly..."));
}

#[test]
fn test_cli_open_existing_project_through_menu() {
    let dir = tempfile::tempdir().unwrap();
    let path = HistoryFileBuilder::new("Demo")
        .with_entry(EntryBuilder::new().task("first recorded session"))
        .total("0:00:05")
        .write_to(dir.path(), "demo.json");
    let input = format!("2\n{}\n4\n7\n3\n", path.display());

    hourly()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Opening"))
        .stdout(predicate::str::contains("first recorded session"))
        .stdout(predicate::str::contains("Exiting Hourly..."));
}

#[test]
fn test_cli_filtered_history_query() {
    let dir = tempfile::tempdir().unwrap();
    let path = HistoryFileBuilder::new("Demo")
        .with_entry(EntryBuilder::new().task("keep this one"))
        .with_entry(EntryBuilder::new().task("skip this one"))
        .total("0:00:10")
        .write_to(dir.path(), "demo.json");

    hourly()
        .arg(&path)
        .write_stdin("3\n0\n7\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("keep this one"))
        .stdout(predicate::str::contains("skip this one").not());
}

#[test]
fn test_cli_rejected_query_names_the_bad_token() {
    let dir = tempfile::tempdir().unwrap();
    let path = HistoryFileBuilder::new("Demo")
        .with_entry(EntryBuilder::new())
        .total("0:00:05")
        .write_to(dir.path(), "demo.json");

    hourly()
        .arg(&path)
        .write_stdin("3\n7\n0\n7\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("invalid number or range: 7"))
        .stdout(predicate::str::contains("Please enter valid values."));
}

#[test]
fn test_cli_rename_through_menu() {
    let dir = tempfile::tempdir().unwrap();
    let path = HistoryFileBuilder::new("Demo")
        .with_entry(EntryBuilder::new())
        .total("0:00:05")
        .write_to(dir.path(), "demo.json");

    hourly()
        .arg(&path)
        .write_stdin("6\nRenamed\ny\n7\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed the project to 'Renamed'"))
        .stdout(predicate::str::contains("Closing 'Renamed' project"));

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains(r#""name": "Renamed""#));
}
