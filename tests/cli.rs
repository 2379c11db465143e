//! Integration tests for the `macro-panel` binary.
//!
//! Only failure paths are exercised end-to-end: a valid configuration starts
//! the interactive terminal UI, which needs a real terminal.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const PANEL_BIN: &str = env!("CARGO_BIN_EXE_macro-panel");

/// Isolated config/state directories plus a scratch area for panel files.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    fn write_panel(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("failed to write panel config");
        path
    }

    fn write_settings(&self, content: &str) {
        let settings_dir = self.dir.path().join("config").join("osc-macro-panel");
        fs::create_dir_all(&settings_dir).expect("failed to create settings dir");
        fs::write(settings_dir.join("settings.toml"), content).expect("failed to write settings");
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(PANEL_BIN);
        cmd.current_dir(self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join("config"))
            .env("XDG_STATE_HOME", self.dir.path().join("state"))
            .env_remove("MACRO_PANEL_LOG");
        cmd
    }
}

#[test]
fn help_lists_config_argument() {
    Sandbox::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("[CONFIG]"))
        .stdout(predicate::str::contains("config.txt"));
}

#[test]
fn missing_default_config_is_reported() {
    Sandbox::new()
        .cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error:"))
        .stderr(predicate::str::contains(
            "Couldn't read configuration file 'config.txt'",
        ));
}

#[test]
fn invalid_keyword_reports_line_number() {
    let sandbox = Sandbox::new();
    let panel = sandbox.write_panel("panel.txt", "ip:127.0.0.1:9000\nfoo:bar\n");
    sandbox
        .cmd()
        .arg(&panel)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Configuration error: Line 2: Invalid keyword.",
        ));
}

#[test]
fn invalid_height_reports_line_number() {
    let sandbox = Sandbox::new();
    let panel = sandbox.write_panel("panel.txt", "title:x\nsize:50:999\nip:127.0.0.1:9000\n");
    sandbox
        .cmd()
        .arg(&panel)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Line 2: Invalid height."));
}

#[test]
fn missing_ip_is_reported_without_line() {
    let sandbox = Sandbox::new();
    let panel = sandbox.write_panel("panel.txt", "button:Go:3:red:black\n");
    sandbox
        .cmd()
        .arg(&panel)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Configuration error: No IP endpoint provided.",
        ))
        .stderr(predicate::str::contains("Line").not());
}

#[test]
fn malformed_settings_file_is_fatal() {
    let sandbox = Sandbox::new();
    sandbox.write_settings("[osc]\nsource_port = \"lots\"\n");
    sandbox
        .cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Settings error:"));
}

#[test]
fn configuration_errors_are_logged_to_state_dir() {
    let sandbox = Sandbox::new();
    let panel = sandbox.write_panel("panel.txt", "foo:bar\n");
    sandbox.cmd().arg(&panel).assert().failure();

    let log = sandbox
        .dir
        .path()
        .join("state")
        .join("osc-macro-panel")
        .join("macro-panel.log");
    let content = fs::read_to_string(&log).expect("log file should exist");
    assert!(content.contains("Invalid keyword"), "log was: {content}");
}
