// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::Parser;
use log::{debug, info};

use crate::{Telescope, TelescopeError, TelescopeName};

/// Print primary- and synthesised-beam sizes.
#[derive(Parser, Debug)]
pub struct BeamArgs {
    /// The telescope to use.
    #[clap(short = 'T', long, default_value = "CHORD")]
    telescope: TelescopeName,

    /// The frequencies to use. Each may be in Hz, MHz or GHz; the unit is
    /// inferred from the telescope's operating band.
    #[clap(short, long = "freq", required = true, multiple_values = true)]
    freqs: Vec<f64>,
}

impl BeamArgs {
    pub(super) fn run(&self) -> Result<(), TelescopeError> {
        let telescope = Telescope::from_name(self.telescope);
        debug!("{:?}", telescope.params());

        // Check all the frequencies before printing anything.
        let freqs_hz = telescope.convert_freq_to_hz(self.freqs.as_slice())?;
        let p_fwhms = telescope.p_fwhm(self.freqs.as_slice())?;

        info!("{}", telescope.name());
        for ((&freq, &freq_hz), &p_fwhm) in self
            .freqs
            .iter()
            .zip(freqs_hz.as_slice())
            .zip(p_fwhms.as_slice())
        {
            let [s_fwhm_ew, s_fwhm_ns] = telescope.s_fwhm(freq_hz)?;
            let solid_angle = telescope.s_solid_angle(freq_hz)?;

            info!("Frequency {freq} -> {freq_hz:e} Hz");
            info!(
                "    Primary FWHM:            {p_fwhm:e} rad ({:.4} deg)",
                p_fwhm.to_degrees()
            );
            info!("    Synthesised FWHM (EW):   {s_fwhm_ew:e} rad");
            info!("    Synthesised FWHM (NS):   {s_fwhm_ns:e} rad");
            info!("    Synthesised solid angle: {solid_angle:e} sr");
        }

        Ok(())
    }
}
