use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ugo_runtime::{Loader, LoaderConfig, DEFAULT_ENTRY_POINT, DEFAULT_MODULE_PATH};

#[derive(Debug, Parser)]
#[clap(
    name = "ugo-run",
    about = "Run a µGo program compiled to WebAssembly.",
    version
)]
/// The options for the `ugo-run` command
pub struct Run {
    /// The WebAssembly module to run (binary or text format)
    #[clap(name = "FILE", default_value = DEFAULT_MODULE_PATH)]
    path: PathBuf,

    /// The exported function to invoke
    #[clap(short, long, default_value = DEFAULT_ENTRY_POINT)]
    invoke: String,

    /// Log what the runtime is doing to stderr (repeat for more detail)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Run {
    /// How many times `-v` was given.
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    /// Runs the module to completion.
    pub fn execute(&self) -> Result<()> {
        self.inner_execute()
            .with_context(|| format!("failed to run `{}`", self.path.display()))
    }

    fn inner_execute(&self) -> Result<()> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let loader = Loader::new(LoaderConfig {
            module_path: self.path.clone(),
            entry_point: self.invoke.clone(),
        });
        runtime.block_on(loader.run())?;

        Ok(())
    }
}
