use std::path::PathBuf;

use thiserror::Error;
use wasmer::{CompileError, ExportError, InstantiationError, RuntimeError};

/// An error raised while loading or running a guest module.
///
/// Reading, compiling and instantiating all happen before any guest code
/// runs, so only [`LoadError::Trap`] can be observed after the guest has
/// produced output.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The module file could not be read.
    #[error("unable to read `{}`", .path.display())]
    Io {
        /// The path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The bytes are not a valid WebAssembly module.
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// Linking against the host imports failed, or the start function
    /// trapped.
    #[error(transparent)]
    Instantiation(#[from] InstantiationError),

    /// The module does not export a function under the requested name.
    #[error("the module has no `{name}` function to invoke")]
    MissingEntryPoint {
        /// The export that was looked up.
        name: String,
        /// Why the lookup failed.
        #[source]
        source: ExportError,
    },

    /// The guest trapped while running its entry point.
    #[error(transparent)]
    Trap(#[from] RuntimeError),
}
