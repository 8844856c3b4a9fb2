// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command-line interface code. More specific options for subcommands are
//! contained in modules.
//!
//! Only 3 things should be public in this module: `ChordSensitivity`,
//! `ChordSensitivity::run`, and `ChordSensitivityError`.

mod beam;
mod error;
mod sensitivity;
mod telescope;

pub use error::ChordSensitivityError;

use clap::{Args, Parser, Subcommand};
use log::{debug, info};

// Add build-time information from the "built" crate.
include!(concat!(env!("OUT_DIR"), "/built.rs"));

#[derive(Debug, Parser)]
#[clap(
    version,
    about = "Sensitivity and beam-geometry calculations for CHORD and its pathfinder"
)]
#[clap(arg_required_else_help = true)]
#[clap(disable_help_subcommand = true)]
#[clap(infer_subcommands = true)]
#[clap(propagate_version = true)]
#[clap(infer_long_args = true)]
pub struct ChordSensitivity {
    #[clap(flatten)]
    global_opts: GlobalArgs,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct GlobalArgs {
    /// The verbosity of the program. Increase by specifying multiple times
    /// (e.g. -vv). The default is to print only high-level information.
    #[clap(short, long, parse(from_occurrences))]
    #[clap(global = true)]
    verbosity: u8,
}

#[derive(Debug, Subcommand)]
#[clap(arg_required_else_help = true)]
enum Command {
    #[clap(about = "Calculate a thermal-noise sensitivity with the radiometer equation.")]
    Sensitivity(sensitivity::SensitivityArgs),

    #[clap(about = "Print primary- and synthesised-beam sizes at the given frequencies.")]
    Beam(beam::BeamArgs),

    #[clap(about = "Print the parameters of a telescope as TOML.")]
    Telescope(telescope::TelescopeArgs),
}

impl ChordSensitivity {
    pub fn run(self) -> Result<(), ChordSensitivityError> {
        let GlobalArgs { verbosity } = self.global_opts;
        // The telescope subcommand's stdout must stay parseable as TOML.
        let log_target = match &self.command {
            Command::Telescope(args) if args.writes_to_stdout() => env_logger::Target::Stderr,
            _ => env_logger::Target::Stdout,
        };
        setup_logging(verbosity, log_target).expect("Failed to initialise logging.");

        let sub_command = match &self.command {
            Command::Sensitivity(_) => "sensitivity",
            Command::Beam(_) => "beam",
            Command::Telescope(_) => "telescope",
        };
        info!(
            "chord_sensitivity {} {}",
            sub_command,
            env!("CARGO_PKG_VERSION")
        );
        display_build_info();

        match self.command {
            Command::Sensitivity(args) => args.run()?,
            Command::Beam(args) => args.run()?,
            Command::Telescope(args) => args.run()?,
        }

        info!("chord_sensitivity {} complete.", sub_command);
        Ok(())
    }
}

/// Activate a logger. All log messages are put onto `target`. `env_logger`
/// automatically only uses colours and fancy symbols if we're on a tty (e.g. a
/// terminal); piped output will be formatted sensibly. Source code lines are
/// displayed in log messages when verbosity >= 3.
fn setup_logging(
    verbosity: u8,
    target: env_logger::Target,
) -> Result<(), log::SetLoggerError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.target(target);
    builder.format_target(false);
    match verbosity {
        0 => builder.filter_level(log::LevelFilter::Info),
        1 => builder.filter_level(log::LevelFilter::Debug),
        2 => builder.filter_level(log::LevelFilter::Trace),
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
            builder.format(|buf, record| {
                use std::io::Write;

                let timestamp = buf.timestamp();
                let level = record.level();
                let target = record.target();
                let line = record.line().unwrap_or(0);
                let message = record.args();

                writeln!(buf, "[{timestamp} {level} {target}:{line}] {message}")
            })
        }
    };
    builder.try_init()
}

/// Write debug-level log lines of how this executable was compiled.
fn display_build_info() {
    debug!("Compiled at {}", BUILT_TIME_UTC);
    debug!("      with compiler {}", RUSTC_VERSION);
}
