// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::*;

#[test]
fn test_sensitivity() {
    let cmd = chord_sensitivity()
        .args([
            "sensitivity",
            "--tsys",
            "100",
            "--bandwidth",
            "1e6",
            "--time",
            "1",
        ])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Sensitivity:"), "{stdout}");
    // 100 / sqrt(1e6)
    assert!(stdout.contains("1e-1 K"), "{stdout}");
    assert!(stdout.contains("Antennas:         1"), "{stdout}");
}

#[test]
fn test_sensitivity_bad_temperature() {
    let cmd = chord_sensitivity()
        .args([
            "sensitivity",
            "--tsys",
            "-10",
            "--bandwidth",
            "1e6",
            "--time",
            "1",
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(
        stderr.contains("System temperature must be positive"),
        "{stderr}"
    );
}

#[test]
fn test_sensitivity_no_antennas() {
    let cmd = chord_sensitivity()
        .args([
            "sensitivity",
            "--tsys",
            "50",
            "--bandwidth",
            "1e6",
            "--time",
            "1",
            "--n-antennas",
            "0",
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(
        stderr.contains("Number of antennas must be at least 1"),
        "{stderr}"
    );
}
