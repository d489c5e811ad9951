//! The builtins a µGo program expects its host to provide.
//!
//! The compiler declares them as
//!
//! ```llvm
//! declare i32 @ugo_builtin_println(i32)
//! declare i32 @ugo_builtin_exit(i32)
//! ```
//!
//! and `wasm-ld --allow-undefined` turns both into function imports from the
//! `env` namespace.

use wasmer::{imports, AsStoreMut, Function, FunctionEnv, FunctionEnvMut, Imports};

use crate::output::Output;

/// The import namespace every builtin lives in.
pub const ENV_NAMESPACE: &str = "env";
/// `ugo_builtin_println(n: i32) -> i32`
pub const PRINTLN_BUILTIN: &str = "ugo_builtin_println";
/// `ugo_builtin_exit(code: i32) -> i32`
pub const EXIT_BUILTIN: &str = "ugo_builtin_exit";

/// State shared by the builtins.
#[derive(Debug, Clone, Default)]
pub struct HostEnv {
    output: Output,
}

impl HostEnv {
    /// Create a [`HostEnv`] whose builtins write to `output`.
    pub fn new(output: Output) -> Self {
        HostEnv { output }
    }
}

fn ugo_builtin_println(env: FunctionEnvMut<HostEnv>, n: i32) -> i32 {
    env.data().output.write_line(n);
    0
}

/// Only reports the code. The guest keeps running and the host process is
/// not terminated.
fn ugo_builtin_exit(env: FunctionEnvMut<HostEnv>, code: i32) -> i32 {
    tracing::debug!(code, "Guest reported an exit code");
    env.data().output.write_line(format_args!("exit: {code}"));
    0
}

/// Build the import object a µGo guest is linked against.
pub fn import_object(store: &mut impl AsStoreMut, env: &FunctionEnv<HostEnv>) -> Imports {
    imports! {
        ENV_NAMESPACE => {
            PRINTLN_BUILTIN => Function::new_typed_with_env(store, env, ugo_builtin_println),
            EXIT_BUILTIN => Function::new_typed_with_env(store, env, ugo_builtin_exit),
        }
    }
}
