// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

mod beam;
mod sensitivity;

use std::process::Output;
use std::str::from_utf8;

use assert_cmd::{output::OutputError, Command};
use tempfile::TempDir;

fn chord_sensitivity() -> Command {
    Command::cargo_bin("chord_sensitivity").unwrap()
}

fn get_cmd_output(result: Result<Output, OutputError>) -> (String, String) {
    let output = match result {
        Ok(o) => o,
        Err(o) => o.as_output().unwrap().clone(),
    };
    (
        from_utf8(&output.stdout).unwrap().to_string(),
        from_utf8(&output.stderr).unwrap().to_string(),
    )
}

#[test]
fn test_no_args_prints_help() {
    let cmd = chord_sensitivity().ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("sensitivity"), "{stderr}");
    assert!(stderr.contains("beam"), "{stderr}");
}

#[test]
fn test_telescope_prints_toml() {
    for verbosity in [None, Some("-v")] {
        let mut cmd = chord_sensitivity();
        cmd.args(["telescope", "--telescope", "PATHFINDER"]);
        if let Some(v) = verbosity {
            cmd.arg(v);
        }
        let cmd = cmd.ok();
        assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
        let (stdout, stderr) = get_cmd_output(cmd);
        assert!(
            stderr.contains("chord_sensitivity telescope complete."),
            "{stderr}"
        );

        // Only the TOML may appear on stdout.
        let table: toml::Table = toml::from_str(&stdout)
            .unwrap_or_else(|e| panic!("stdout isn't valid TOML ({e}):\n{stdout}"));
        assert_eq!(table["name"].as_str(), Some("PATHFINDER"));
        assert_eq!(table["ndish_ew"].as_integer(), Some(11));
        assert_eq!(table["ndish_ns"].as_integer(), Some(6));
        assert_eq!(table["tsys"].as_float(), Some(30.0));
    }
}

#[test]
fn test_telescope_writes_toml_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("chord.toml");
    let cmd = chord_sensitivity()
        .args(["telescope", "--telescope", "CHORD", "--output"])
        .arg(&path)
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("chord_sensitivity telescope complete."), "{stdout}");

    let contents = std::fs::read_to_string(&path).unwrap();
    let table: toml::Table = toml::from_str(&contents).unwrap();
    assert_eq!(table["name"].as_str(), Some("CHORD"));
    assert_eq!(table["ndish_ew"].as_integer(), Some(22));
    assert_eq!(table["ndish_ns"].as_integer(), Some(24));
}

#[test]
fn test_telescope_unwritable_output_fails() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("missing").join("chord.toml");
    let cmd = chord_sensitivity()
        .args(["telescope", "--output"])
        .arg(&path)
        .ok();
    assert!(cmd.is_err());
    assert!(!path.exists());
}

#[test]
fn test_unknown_telescope_is_rejected() {
    for name in ["INVALID", "chord"] {
        let cmd = chord_sensitivity()
            .args(["telescope", "--telescope", name])
            .ok();
        assert!(cmd.is_err(), "{name} was accepted");
    }
}
