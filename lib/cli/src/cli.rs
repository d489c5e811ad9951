//! The logic for the `ugo-run` CLI tool.

use clap::Parser;

use crate::{commands::Run, logging};

/// The main function for the `ugo-run` CLI tool.
///
/// Failures are printed to stdout like any other output and the process
/// still exits successfully.
pub fn ugo_main() {
    let run = Run::parse();
    logging::set_up_logging(run.verbosity());

    if let Err(e) = run.execute() {
        println!("{e:?}");
    }
}
