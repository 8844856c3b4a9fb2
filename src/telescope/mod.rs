// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Telescope models and beam geometry.
//!
//! A [`Telescope`] wraps one of the static parameter tables. Frequencies given
//! to it may be in Hz, MHz or GHz; each value is independently classified by
//! which unit puts it inside the telescope's operating band (see
//! [`Telescope::convert_freq_to_hz`]).
//!
//! All beam widths are returned in radians. Explicitly-named helpers (e.g.
//! [`Telescope::p_fwhm_deg`]) exist for other units.

mod error;
mod freq;
mod params;

pub use error::TelescopeError;
pub use freq::{Freq, FreqUnit};
pub use params::{TelescopeName, TelescopeParameters, CHORD, PATHFINDER};

use std::str::FromStr;

use log::{debug, trace};
use strum::IntoEnumIterator;

use crate::{
    constants::{ARCSEC_PER_DEG, LN_2, PI, PRIMARY_BEAM_FWHM_FACTOR, VEL_C},
    sensitivity::{calculate_sensitivity, SensitivityError},
};

/// A radio telescope with a fixed configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Telescope {
    params: &'static TelescopeParameters,
}

impl Telescope {
    /// Look up a telescope by its canonical name ("CHORD" or "PATHFINDER").
    /// The name is case-sensitive.
    pub fn new(name: &str) -> Result<Telescope, TelescopeError> {
        let name = TelescopeName::from_str(name)
            .map_err(|_| TelescopeError::UnrecognisedName(name.to_string()))?;
        Ok(Telescope::from_name(name))
    }

    pub fn from_name(name: TelescopeName) -> Telescope {
        debug!("Using the {name} parameter table");
        Telescope {
            params: name.params(),
        }
    }

    pub fn name(&self) -> TelescopeName {
        self.params.name
    }

    pub fn params(&self) -> &'static TelescopeParameters {
        self.params
    }

    /// Work out which unit a single frequency is in. Units are tried in the
    /// order Hz, MHz, GHz, and the first whose (inclusive) band contains `freq`
    /// wins.
    pub fn detect_freq_unit(&self, freq: f64) -> Result<FreqUnit, TelescopeError> {
        let TelescopeParameters {
            freq_min_mhz,
            freq_max_mhz,
            ..
        } = *self.params;

        FreqUnit::iter()
            .find(|unit| {
                let (min, max) = unit.band(freq_min_mhz, freq_max_mhz);
                min <= freq && freq <= max
            })
            .ok_or(TelescopeError::FreqOutOfRange {
                freq,
                telescope: self.params.name,
                min_mhz: freq_min_mhz,
                max_mhz: freq_max_mhz,
            })
    }

    /// Convert a single frequency of unknown unit to Hz.
    pub fn convert_single_freq_to_hz(&self, freq: f64) -> Result<f64, TelescopeError> {
        let unit = self.detect_freq_unit(freq)?;
        trace!("Interpreting frequency {freq} as {unit}");
        Ok(freq * unit.to_hz_factor())
    }

    /// Convert frequencies of unknown unit to Hz. The unit of each value is
    /// detected independently, so a sequence may mix units. A scalar gives a
    /// scalar and a sequence gives a sequence in the same order.
    ///
    /// # Examples
    ///
    /// ```
    /// use chord_sensitivity::{Freq, Telescope};
    ///
    /// let chord = Telescope::new("CHORD").unwrap();
    /// let hz = chord.convert_freq_to_hz(vec![300.0, 1.0, 500e6]).unwrap();
    /// assert_eq!(hz, Freq::Sequence(vec![300e6, 1e9, 500e6]));
    /// ```
    pub fn convert_freq_to_hz<F: Into<Freq>>(&self, freq: F) -> Result<Freq, TelescopeError> {
        let freq: Freq = freq.into();
        freq.try_map(|f| self.convert_single_freq_to_hz(f))
    }

    /// The full-width half-maximum of a dish's primary beam \[radians\]. The
    /// output has the same shape as the input.
    pub fn p_fwhm<F: Into<Freq>>(&self, freq: F) -> Result<Freq, TelescopeError> {
        let freq_hz = self.convert_freq_to_hz(freq)?;
        let dish_diameter = self.params.dish_diameter;
        Ok(freq_hz.map(|f| PRIMARY_BEAM_FWHM_FACTOR * (VEL_C / f) / dish_diameter))
    }

    /// The full-width half-maximum of a dish's primary beam \[degrees\].
    pub fn p_fwhm_deg<F: Into<Freq>>(&self, freq: F) -> Result<Freq, TelescopeError> {
        Ok(self.p_fwhm(freq)?.map(f64::to_degrees))
    }

    /// The full-width half-maximum of the synthesised beam along the
    /// east-west and north-south axes (in that order) \[radians\]. Only a
    /// single frequency is accepted.
    pub fn s_fwhm<F: Into<Freq>>(&self, freq: F) -> Result<[f64; 2], TelescopeError> {
        let freq_hz = self.scalar_freq_to_hz(freq.into(), "s_fwhm")?;
        Ok(self.s_fwhm_inner(freq_hz))
    }

    /// The same as [`Telescope::s_fwhm`], but in arcseconds.
    pub fn s_fwhm_arcsec<F: Into<Freq>>(&self, freq: F) -> Result<[f64; 2], TelescopeError> {
        let [ew, ns] = self.s_fwhm(freq)?;
        Ok([
            ew.to_degrees() * ARCSEC_PER_DEG,
            ns.to_degrees() * ARCSEC_PER_DEG,
        ])
    }

    /// The solid angle of the synthesised beam \[steradians\]. Only a single
    /// frequency is accepted.
    pub fn s_solid_angle<F: Into<Freq>>(&self, freq: F) -> Result<f64, TelescopeError> {
        let freq_hz = self.scalar_freq_to_hz(freq.into(), "s_solid_angle")?;
        let [ew, ns] = self.s_fwhm_inner(freq_hz);
        Ok(PI * ew * ns / (4.0 * LN_2))
    }

    /// The radiometer-equation sensitivity of the whole array, using its own
    /// system temperature and all of its dishes.
    pub fn sensitivity(
        &self,
        bandwidth: f64,
        integration_time: f64,
    ) -> Result<f64, SensitivityError> {
        calculate_sensitivity(
            self.params.tsys,
            bandwidth,
            integration_time,
            self.params.num_dishes() as usize,
        )
    }

    fn scalar_freq_to_hz(&self, freq: Freq, op: &'static str) -> Result<f64, TelescopeError> {
        match freq {
            Freq::Scalar(f) => self.convert_single_freq_to_hz(f),
            Freq::Sequence(v) => Err(TelescopeError::ScalarFreqRequired { op, num: v.len() }),
        }
    }

    fn s_fwhm_inner(&self, freq_hz: f64) -> [f64; 2] {
        let wavelength = VEL_C / freq_hz;
        [
            wavelength / self.params.max_baseline_ew_m(),
            wavelength / self.params.max_baseline_ns_m(),
        ]
    }
}

impl FromStr for Telescope {
    type Err = TelescopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Telescope::new(s)
    }
}
