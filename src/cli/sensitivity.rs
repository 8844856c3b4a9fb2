// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::Parser;
use log::info;

use crate::{calculate_sensitivity, SensitivityError, DEFAULT_NUM_ANTENNAS};

/// Calculate a thermal-noise sensitivity with the radiometer equation.
#[derive(Parser, Debug)]
pub struct SensitivityArgs {
    /// The system temperature [K].
    #[clap(long, allow_hyphen_values = true)]
    tsys: f64,

    /// The bandwidth [Hz].
    #[clap(short, long, allow_hyphen_values = true)]
    bandwidth: f64,

    /// The integration time [seconds].
    #[clap(short, long, allow_hyphen_values = true)]
    time: f64,

    /// The number of antennas.
    #[clap(short, long, default_value_t = DEFAULT_NUM_ANTENNAS)]
    n_antennas: usize,
}

impl SensitivityArgs {
    pub(super) fn run(&self) -> Result<(), SensitivityError> {
        let SensitivityArgs {
            tsys,
            bandwidth,
            time,
            n_antennas,
        } = *self;

        let s = calculate_sensitivity(tsys, bandwidth, time, n_antennas)?;
        info!("T_sys:            {tsys} K");
        info!("Bandwidth:        {bandwidth} Hz");
        info!("Integration time: {time} s");
        info!("Antennas:         {n_antennas}");
        info!("Sensitivity:      {s:e} K");

        Ok(())
    }
}
