use std::path::PathBuf;

use wasmer::{is_wasm, FunctionEnv, Instance, Module, Store};

use crate::{
    error::LoadError,
    imports::{import_object, HostEnv},
    output::Output,
};

/// Where a µGo build leaves its WebAssembly output.
pub const DEFAULT_MODULE_PATH: &str = "./a.out.wasm";
/// The export µGo programs start from.
pub const DEFAULT_ENTRY_POINT: &str = "main";

/// What to load and where to start executing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// The module to read, relative paths being resolved against the
    /// current directory.
    pub module_path: PathBuf,
    /// The exported function invoked once the module is instantiated.
    pub entry_point: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            module_path: PathBuf::from(DEFAULT_MODULE_PATH),
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
        }
    }
}

/// Reads a guest module, links it against the µGo builtins and runs its
/// entry point.
#[derive(Debug)]
pub struct Loader {
    config: LoaderConfig,
    output: Output,
}

impl Loader {
    /// A loader whose guest writes to standard output.
    pub fn new(config: LoaderConfig) -> Self {
        Loader::with_output(config, Output::stdout())
    }

    /// A loader whose guest writes to `output`.
    pub fn with_output(config: LoaderConfig, output: Output) -> Self {
        Loader { config, output }
    }

    /// The configuration this loader was created with.
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Read the configured module, instantiate it and invoke its entry
    /// point.
    ///
    /// Nothing is instantiated if the file can't be read, and the entry
    /// point is never invoked if instantiation fails.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(path = %self.config.module_path.display())
    )]
    pub async fn run(&self) -> Result<(), LoadError> {
        let path = &self.config.module_path;
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(size = bytes.len(), "Read the module");

        self.run_bytes(bytes)
    }

    /// Instantiate a module from bytes that are already in memory and invoke
    /// its entry point.
    pub fn run_bytes(&self, bytes: impl AsRef<[u8]>) -> Result<(), LoadError> {
        let mut store = Store::default();
        let instance = self.instantiate(&mut store, bytes.as_ref())?;
        self.invoke(&mut store, &instance)
    }

    fn instantiate(&self, store: &mut Store, bytes: &[u8]) -> Result<Instance, LoadError> {
        if !is_wasm(bytes) {
            tracing::debug!("No WebAssembly magic number, compiling the input as text");
        }

        let module = Module::new(&*store, bytes)?;
        tracing::debug!(
            imports = module.imports().count(),
            exports = module.exports().count(),
            "Compiled the module"
        );

        let env = FunctionEnv::new(store, HostEnv::new(self.output.clone()));
        let imports = import_object(store, &env);
        let instance = Instance::new(store, &module, &imports)?;
        tracing::debug!("Instantiated the module");

        Ok(instance)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(entry_point = %self.config.entry_point))]
    fn invoke(&self, store: &mut Store, instance: &Instance) -> Result<(), LoadError> {
        let name = &self.config.entry_point;
        let entry_point = instance
            .exports
            .get_function(name)
            .map_err(|source| LoadError::MissingEntryPoint {
                name: name.clone(),
                source,
            })?;

        // µGo's `main` returns an i32 that nobody looks at.
        let results = entry_point.call(store, &[])?;
        tracing::debug!(?results, "Entry point returned");

        Ok(())
    }
}
