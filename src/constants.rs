// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision. The speed of light is the rounded
value used throughout CHORD sensitivity estimates, not the CODATA value.
 */

pub use std::f64::consts::{LN_2, PI};

/// Speed of light \[metres/second\]
pub const VEL_C: f64 = 3e8;

/// Boltzmann constant \[Jy K^-1 m^2\]
pub const K_B: f64 = 1.38e3;

/// Earth's rotation rate \[radians/second\]
pub const OMEGA_EARTH: f64 = 7.29e-5;

/// Multiplier of lambda / D giving the full-width half-maximum of a dish's
/// primary beam.
pub const PRIMARY_BEAM_FWHM_FACTOR: f64 = 1.029;

/// Hz per MHz.
pub const MHZ_TO_HZ: f64 = 1e6;

/// Hz per GHz.
pub const GHZ_TO_HZ: f64 = 1e9;

/// Arcseconds per degree.
pub const ARCSEC_PER_DEG: f64 = 3600.0;
