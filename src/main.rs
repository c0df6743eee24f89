//! # lcms-track
//!
//! Command-line front end for LC-MS method development calculations.
//!
//! ## Usage
//!
//! ```bash
//! # Solvent needed for 96 injections of a method
//! lcms-track solvent --method method.json --batch-size 96
//!
//! # Injection batches with solvent estimates
//! lcms-track batches --injections injections.json --methods methods.json
//!
//! # Guard column wear on a column
//! lcms-track guard --guards guards.json --injections injections.json --column c1
//!
//! # Allocate injection numbers for a new batch of 24
//! lcms-track plan --injections injections.json --column c1 --method m1 --size 24
//!
//! # Check a stored gradient table
//! lcms-track validate --method method.json
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
