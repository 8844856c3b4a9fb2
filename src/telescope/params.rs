// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Static parameter tables for the supported array configurations.

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::constants::MHZ_TO_HZ;

/// The array configurations we know about. Parsing from a string is
/// case-sensitive; only the canonical spellings are accepted.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[allow(clippy::upper_case_acronyms)]
pub enum TelescopeName {
    /// The full Canadian Hydrogen Observatory and Radio-transient Detector.
    CHORD,

    /// The CHORD pathfinder array.
    PATHFINDER,
}

impl TelescopeName {
    /// Get the parameter table for this array.
    pub fn params(self) -> &'static TelescopeParameters {
        match self {
            TelescopeName::CHORD => &CHORD,
            TelescopeName::PATHFINDER => &PATHFINDER,
        }
    }
}

/// The fixed description of an array. All geometric and frequency values are
/// positive, and each min is less than its max.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelescopeParameters {
    pub name: TelescopeName,

    /// The number of dishes along the east-west axis.
    pub ndish_ew: u32,

    /// The number of dishes along the north-south axis.
    pub ndish_ns: u32,

    /// \[metres\]
    pub dish_separation_ew: f64,

    /// \[metres\]
    pub dish_separation_ns: f64,

    /// \[metres\]
    pub dish_diameter: f64,

    /// \[degrees\]
    pub latitude: f64,

    /// The lowest operating frequency \[MHz\]
    pub freq_min_mhz: f64,

    /// The highest operating frequency \[MHz\]
    pub freq_max_mhz: f64,

    pub nchannels: u32,

    /// System temperature \[K\]
    pub tsys: f64,

    pub ndumps: u32,

    /// \[degrees\]
    pub min_dec: f64,

    /// \[degrees\]
    pub max_dec: f64,
}

pub const CHORD: TelescopeParameters = TelescopeParameters {
    name: TelescopeName::CHORD,
    ndish_ew: 22,
    ndish_ns: 24,
    dish_separation_ew: 6.3,
    dish_separation_ns: 8.5,
    dish_diameter: 6.0,
    latitude: 49.320750,
    freq_min_mhz: 300.0,
    freq_max_mhz: 1500.0,
    nchannels: 6000,
    tsys: 30.0,
    ndumps: 720,
    min_dec: 20.0,
    max_dec: 80.0,
};

pub const PATHFINDER: TelescopeParameters = TelescopeParameters {
    name: TelescopeName::PATHFINDER,
    ndish_ew: 11,
    ndish_ns: 6,
    dish_separation_ew: 6.3,
    dish_separation_ns: 8.5,
    dish_diameter: 6.0,
    latitude: 49.320750,
    freq_min_mhz: 300.0,
    freq_max_mhz: 1500.0,
    nchannels: 6000,
    tsys: 30.0,
    ndumps: 720,
    min_dec: 20.0,
    max_dec: 80.0,
};

impl TelescopeParameters {
    pub fn num_dishes(&self) -> u32 {
        self.ndish_ew * self.ndish_ns
    }

    /// The longest east-west baseline \[metres\]
    pub fn max_baseline_ew_m(&self) -> f64 {
        self.dish_separation_ew * f64::from(self.ndish_ew)
    }

    /// The longest north-south baseline \[metres\]
    pub fn max_baseline_ns_m(&self) -> f64 {
        self.dish_separation_ns * f64::from(self.ndish_ns)
    }

    pub fn min_freq_hz(&self) -> f64 {
        self.freq_min_mhz * MHZ_TO_HZ
    }

    pub fn max_freq_hz(&self) -> f64 {
        self.freq_max_mhz * MHZ_TO_HZ
    }

    /// The operating band split evenly over the channels \[Hz\]
    pub fn channel_width_hz(&self) -> f64 {
        (self.max_freq_hz() - self.min_freq_hz()) / f64::from(self.nchannels)
    }

    /// Can this array observe the declination (in degrees)? The limits are
    /// inclusive.
    pub fn declination_in_range(&self, dec_deg: f64) -> bool {
        (self.min_dec..=self.max_dec).contains(&dec_deg)
    }
}
