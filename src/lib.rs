// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Sensitivity and beam-geometry calculations for the Canadian Hydrogen
Observatory and Radio-transient Detector (CHORD) and its pathfinder.
 */

mod cli;
pub mod constants;
mod error;
pub mod sensitivity;
pub mod telescope;

// Re-exports.
pub use cli::{ChordSensitivity, ChordSensitivityError};
pub use error::ErrorKind;
pub use sensitivity::{calculate_sensitivity, SensitivityError, DEFAULT_NUM_ANTENNAS};
pub use telescope::{
    Freq, FreqUnit, Telescope, TelescopeError, TelescopeName, TelescopeParameters,
};
