//! The commands available in the `ugo-run` binary.
mod run;

pub use run::*;
