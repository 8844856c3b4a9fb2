// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Thermal-noise sensitivity via the radiometer equation.

mod error;

pub use error::SensitivityError;

use log::trace;

/// The number of antennas to use when a caller has no better idea; a single
/// dish.
pub const DEFAULT_NUM_ANTENNAS: usize = 1;

/// Calculate the thermal-noise-limited sensitivity of a radio telescope with
/// the radiometer equation:
///
/// `T_sys / sqrt(bandwidth * integration_time * n_antennas)`
///
/// The result has the same unit as `system_temperature` (usually K).
/// `bandwidth` is in Hz and `integration_time` is in seconds. All of these
/// must be positive, and `n_antennas` must be at least 1 (use
/// [`DEFAULT_NUM_ANTENNAS`] for a single dish).
///
/// # Examples
///
/// ```
/// use chord_sensitivity::calculate_sensitivity;
///
/// let s = calculate_sensitivity(100.0, 1e6, 1.0, 1).unwrap();
/// assert!((s - 0.1).abs() < 1e-12);
/// ```
pub fn calculate_sensitivity(
    system_temperature: f64,
    bandwidth: f64,
    integration_time: f64,
    n_antennas: usize,
) -> Result<f64, SensitivityError> {
    // NaNs fail these checks too.
    if !is_positive(system_temperature) {
        return Err(SensitivityError::NonPositiveSystemTemperature(
            system_temperature,
        ));
    }
    if !is_positive(bandwidth) {
        return Err(SensitivityError::NonPositiveBandwidth(bandwidth));
    }
    if !is_positive(integration_time) {
        return Err(SensitivityError::NonPositiveIntegrationTime(
            integration_time,
        ));
    }
    if n_antennas < 1 {
        return Err(SensitivityError::TooFewAntennas(n_antennas));
    }

    let sensitivity =
        system_temperature / (bandwidth * integration_time * n_antennas as f64).sqrt();
    trace!(
        "T_sys {system_temperature}, bandwidth {bandwidth} Hz, {integration_time} s, {n_antennas} antennas -> {sensitivity}"
    );
    Ok(sensitivity)
}

#[inline]
fn is_positive(x: f64) -> bool {
    x > 0.0
}
