// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with telescope models.

use thiserror::Error;

use super::TelescopeName;
use crate::ErrorKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TelescopeError {
    #[error("Telescope name '{0}' not recognised. Choose either 'CHORD' or 'PATHFINDER'.")]
    UnrecognisedName(String),

    #[error("Frequency {freq} is out of {telescope}'s operating range ({min_mhz}-{max_mhz} MHz), or not one of the supported units (Hz, MHz, GHz)")]
    FreqOutOfRange {
        freq: f64,
        telescope: TelescopeName,
        min_mhz: f64,
        max_mhz: f64,
    },

    #[error("{op} only accepts a single frequency, but was given a sequence of {num}")]
    ScalarFreqRequired { op: &'static str, num: usize },
}

impl TelescopeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TelescopeError::UnrecognisedName(_) | TelescopeError::ScalarFreqRequired { .. } => {
                ErrorKind::InvalidArgument
            }
            TelescopeError::FreqOutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }
}
