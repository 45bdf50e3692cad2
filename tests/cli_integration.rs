//! Integration tests for the `mg` binary.
//!
//! These tests run the real binary with scripted input and check what a
//! user would see.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command for `mg` isolated from any user configuration.
fn mg(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mg").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("xdg"))
        .env_remove("MINIGIT_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn version_flag_works() {
    let home = TempDir::new().unwrap();
    mg(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mg"));
}

#[test]
fn help_lists_commands() {
    let home = TempDir::new().unwrap();
    mg(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("repl"))
        .stdout(predicate::str::contains("completion"));
}

#[test]
fn interactive_session_shows_menu() {
    let home = TempDir::new().unwrap();
    mg(&home)
        .write_stdin("create r1\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the Mini-Git client!"))
        .stdout(predicate::str::contains(
            "Operations: [create, head, history, commit, reset, drop, squash, quit]",
        ))
        .stdout(predicate::str::contains(
            "  New repository created: r1 - No commits",
        ))
        .stdout(predicate::str::contains("\tr1 - No commits"));
}

#[test]
fn quiet_session_prints_results_only() {
    let home = TempDir::new().unwrap();
    let input = "create r1\ncommit r1\na\ncommit r1\nb\ncommit r1\nc\nhistory r1\n2\nreset r1\n5\nhead r1\nquit\n";

    let output = mg(&home).arg("-q").write_stdin(input).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "  New repository created: r1 - No commits");
    assert!(lines[1].starts_with("  New commit: "));
    assert!(lines[4].ends_with(": c"));
    assert!(lines[5].ends_with(": b"));
    assert_eq!(lines[6], "  New head: No commits");
    assert_eq!(lines[7], "No commits");

    let id_c = lines[3].trim_start_matches("  New commit: ");
    assert_eq!(lines[4], format!("{id_c}: c"));
}

#[test]
fn invalid_counts_are_reported() {
    let home = TempDir::new().unwrap();
    mg(&home)
        .arg("-q")
        .write_stdin("create r1\nhistory r1\n-1\nreset r1\nmany\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a positive integer").count(2));
}

#[test]
fn unknown_ids_are_reported() {
    let home = TempDir::new().unwrap();
    mg(&home)
        .arg("-q")
        .write_stdin("create r1\ndrop r1\nnope\ncommit r1\nx\nsquash r1\nnope\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("  No commit dropped!"))
        .stdout(predicate::str::contains("  No commits squashed!"));
}

#[test]
fn unknown_repository_rejected() {
    let home = TempDir::new().unwrap();
    mg(&home)
        .arg("-q")
        .write_stdin("head ghost\ncreate ghost\ncreate ghost\ncreate\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "  **ERROR**: Operation or repository not recognized.",
        ))
        .stdout(predicate::str::contains(
            "  **ERROR**: Repository with that name already exists.",
        ))
        .stdout(predicate::str::contains("Please enter a repository name."));
}

#[test]
fn end_of_input_exits_cleanly() {
    let home = TempDir::new().unwrap();
    mg(&home).arg("-q").write_stdin("create r1\n").assert().success();
}

#[test]
fn script_file_replaces_stdin() {
    let home = TempDir::new().unwrap();
    let script = home.path().join("session.txt");
    fs::write(&script, "create scripted\nhead scripted\nquit\n").unwrap();

    mg(&home)
        .args(["-q", "repl", "--script"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "  New repository created: scripted - No commits",
        ));
}

#[test]
fn missing_script_fails() {
    let home = TempDir::new().unwrap();
    mg(&home)
        .args(["repl", "--script"])
        .arg(home.path().join("absent.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open script"));
}

#[test]
fn config_file_customises_session() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("config.toml");
    fs::write(
        &config,
        "[repl]\nbanner = false\nlist_repositories = false\nprompt = \"mg> \"\n",
    )
    .unwrap();

    mg(&home)
        .arg("--config")
        .arg(&config)
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("mg> "))
        .stdout(predicate::str::contains("Welcome").not())
        .stdout(predicate::str::contains("Available repositories").not());
}

#[test]
fn config_from_home_directory() {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join(".minigit")).unwrap();
    fs::write(
        home.path().join(".minigit/config.toml"),
        "[repl]\nbanner = false\n",
    )
    .unwrap();

    mg(&home)
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome").not());
}

#[test]
fn invalid_config_fails() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("config.toml");
    fs::write(&config, "[repl]\nunknown = 1\n").unwrap();

    mg(&home)
        .arg("--config")
        .arg(&config)
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn debug_logs_to_stderr() {
    let home = TempDir::new().unwrap();
    mg(&home)
        .args(["-q", "--debug"])
        .write_stdin("create r1\ncommit r1\nhello\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("commit created"))
        .stdout(predicate::str::contains("commit created").not());
}

#[test]
fn completion_generates_script() {
    let home = TempDir::new().unwrap();
    mg(&home)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mg"));
}
