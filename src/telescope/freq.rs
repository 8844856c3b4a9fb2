// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Frequencies of unknown unit, and the units they may be in.

use strum_macros::{Display, EnumIter, IntoStaticStr};

use crate::constants::{GHZ_TO_HZ, MHZ_TO_HZ};

/// The units a frequency may be supplied in. The declaration order is the
/// order that units are tried in when classifying a frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, IntoStaticStr)]
pub enum FreqUnit {
    /// Hertz
    Hz,

    /// MegaHertz
    MHz,

    /// GigaHertz
    GHz,
}

impl FreqUnit {
    /// The number of Hz in one of this unit.
    pub fn to_hz_factor(self) -> f64 {
        match self {
            FreqUnit::Hz => 1.0,
            FreqUnit::MHz => MHZ_TO_HZ,
            FreqUnit::GHz => GHZ_TO_HZ,
        }
    }

    /// Given an operating band in MHz, get the (inclusive) band expressed in
    /// this unit.
    pub(super) fn band(self, min_mhz: f64, max_mhz: f64) -> (f64, f64) {
        match self {
            FreqUnit::Hz => (min_mhz * MHZ_TO_HZ, max_mhz * MHZ_TO_HZ),
            FreqUnit::MHz => (min_mhz, max_mhz),
            FreqUnit::GHz => (min_mhz / 1e3, max_mhz / 1e3),
        }
    }
}

/// One or many frequencies. Operations taking a [`Freq`] return the same
/// shape they were given.
#[derive(Debug, Clone, PartialEq)]
pub enum Freq {
    Scalar(f64),

    /// Ordered; may be empty.
    Sequence(Vec<f64>),
}

impl Freq {
    pub fn len(&self) -> usize {
        match self {
            Freq::Scalar(_) => 1,
            Freq::Sequence(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Freq::Scalar(_))
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Freq::Scalar(f) => Some(*f),
            Freq::Sequence(_) => None,
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        match self {
            Freq::Scalar(f) => std::slice::from_ref(f),
            Freq::Sequence(v) => v,
        }
    }

    /// Apply a fallible function to every value, keeping the shape. The first
    /// error stops the iteration.
    pub fn try_map<E, F>(&self, mut f: F) -> Result<Freq, E>
    where
        F: FnMut(f64) -> Result<f64, E>,
    {
        Ok(match self {
            Freq::Scalar(v) => Freq::Scalar(f(*v)?),
            Freq::Sequence(vs) => {
                Freq::Sequence(vs.iter().map(|&v| f(v)).collect::<Result<_, _>>()?)
            }
        })
    }

    /// Apply a function to every value, keeping the shape.
    pub fn map<F>(&self, mut f: F) -> Freq
    where
        F: FnMut(f64) -> f64,
    {
        match self {
            Freq::Scalar(v) => Freq::Scalar(f(*v)),
            Freq::Sequence(vs) => Freq::Sequence(vs.iter().map(|&v| f(v)).collect()),
        }
    }

    pub fn into_vec(self) -> Vec<f64> {
        match self {
            Freq::Scalar(f) => vec![f],
            Freq::Sequence(v) => v,
        }
    }
}

impl From<f64> for Freq {
    fn from(f: f64) -> Self {
        Freq::Scalar(f)
    }
}

impl From<Vec<f64>> for Freq {
    fn from(v: Vec<f64>) -> Self {
        Freq::Sequence(v)
    }
}

impl From<&[f64]> for Freq {
    fn from(v: &[f64]) -> Self {
        Freq::Sequence(v.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Freq {
    fn from(v: [f64; N]) -> Self {
        Freq::Sequence(v.to_vec())
    }
}
