//! Command-line interface of the binary.

use clap::{ArgAction, Parser};

/// Command-line arguments of the mansion explorer.
///
/// The explorer always runs the same fixed scenario, so the only knob is how much diagnostic output
/// goes to the standard error stream.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Raise the diagnostic log level on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
