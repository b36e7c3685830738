//! This crate contains the source code for the binary of the mansion explorer.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::io;

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use detective_quest::{logging, App, Cli, Outcome};

fn main() -> Result<()> {
    install()?;

    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let outcome = App::new()?.run(io::stdin().lock(), &mut io::stdout().lock())?;
    if outcome == Outcome::InputFailure {
        tracing::info!("input closed before the exploration finished");
    }

    Ok(())
}
