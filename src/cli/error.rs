// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all command-line errors. This should be the *only* error
//! enum that the binary reports.

use thiserror::Error;

use crate::{SensitivityError, TelescopeError};

#[derive(Error, Debug)]
pub enum ChordSensitivityError {
    #[error("{0}")]
    Sensitivity(#[from] SensitivityError),

    #[error("{0}")]
    Telescope(#[from] TelescopeError),

    #[error("Couldn't serialise the parameter table: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("{0}")]
    IO(#[from] std::io::Error),
}
