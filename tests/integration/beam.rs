// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::*;

#[test]
fn test_beam_mixed_units() {
    let cmd = chord_sensitivity()
        .args(["beam", "--freq", "300", "1.0", "500e6"])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("CHORD"), "{stdout}");
    assert!(stdout.contains("Frequency 300 -> 3e8 Hz"), "{stdout}");
    assert!(stdout.contains("Frequency 1 -> 1e9 Hz"), "{stdout}");
    assert!(stdout.contains("Frequency 500000000 -> 5e8 Hz"), "{stdout}");
    assert_eq!(stdout.matches("Synthesised solid angle").count(), 3);
}

#[test]
fn test_beam_out_of_range() {
    let cmd = chord_sensitivity()
        .args(["beam", "--telescope", "PATHFINDER", "--freq", "200"])
        .ok();
    assert!(cmd.is_err());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("Frequency 200"), "{stderr}");
    assert!(stderr.contains("PATHFINDER"), "{stderr}");
    // Nothing was calculated.
    assert!(!stdout.contains("Primary FWHM"), "{stdout}");
}

#[test]
fn test_beam_requires_a_freq() {
    let cmd = chord_sensitivity().args(["beam"]).ok();
    assert!(cmd.is_err());
}
