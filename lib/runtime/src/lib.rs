//! Host runtime for programs compiled by the µGo compiler to WebAssembly.
//!
//! A µGo program compiled for `wasm32` imports two builtins from the `env`
//! namespace and exports a `main` function. This crate provides those
//! builtins and drives a guest module from its bytes to the end of `main`:
//!
//! ```no_run
//! # async fn run() -> Result<(), ugo_runtime::LoadError> {
//! use ugo_runtime::{Loader, LoaderConfig};
//!
//! Loader::new(LoaderConfig::default()).run().await?;
//! # Ok(())
//! # }
//! ```

#![deny(
    missing_docs,
    dead_code,
    nonstandard_style,
    unused_mut,
    unused_variables,
    unused_unsafe,
    unreachable_patterns
)]

mod error;
pub mod imports;
mod loader;
pub mod output;

pub use crate::{
    error::LoadError,
    imports::{HostEnv, ENV_NAMESPACE, EXIT_BUILTIN, PRINTLN_BUILTIN},
    loader::{Loader, LoaderConfig, DEFAULT_ENTRY_POINT, DEFAULT_MODULE_PATH},
    output::{CapturedOutput, Output},
};

/// Version number of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
