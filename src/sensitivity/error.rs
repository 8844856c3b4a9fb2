// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with radiometer-equation calculations.

use thiserror::Error;

use crate::ErrorKind;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SensitivityError {
    #[error("System temperature must be positive (got {0} K)")]
    NonPositiveSystemTemperature(f64),

    #[error("Bandwidth must be positive (got {0} Hz)")]
    NonPositiveBandwidth(f64),

    #[error("Integration time must be positive (got {0} s)")]
    NonPositiveIntegrationTime(f64),

    #[error("Number of antennas must be at least 1 (got {0})")]
    TooFewAntennas(usize),
}

impl SensitivityError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}
