// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use clap::Parser;
use log::info;

use super::ChordSensitivityError;
use crate::TelescopeName;

/// Print the parameters of a telescope as TOML.
#[derive(Parser, Debug)]
pub struct TelescopeArgs {
    /// The telescope to print.
    #[clap(short = 'T', long, default_value = "CHORD")]
    telescope: TelescopeName,

    /// Write the TOML to this file instead of stdout.
    #[clap(short, long)]
    output: Option<PathBuf>,
}

impl TelescopeArgs {
    /// When true, stdout carries only the TOML and logging goes to stderr.
    pub(super) fn writes_to_stdout(&self) -> bool {
        self.output.is_none()
    }

    pub(super) fn run(&self) -> Result<(), ChordSensitivityError> {
        let toml_str = toml::to_string(self.telescope.params())?;
        match &self.output {
            Some(path) => {
                let mut f = BufWriter::new(File::create(path)?);
                f.write_all(toml_str.as_bytes())?;
                f.flush()?;
                info!("Wrote {} parameters to {}", self.telescope, path.display());
            }
            None => print!("{toml_str}"),
        }
        Ok(())
    }
}
