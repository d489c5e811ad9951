//! Where the host builtins write their lines.

use std::{
    fmt::Display,
    io::{self, Write},
    sync::Arc,
};

use parking_lot::Mutex;

/// A cloneable handle to a line-oriented writer shared by every builtin of
/// a running guest.
///
/// Writing never fails from the caller's point of view: the guest has no
/// way to react to an I/O error, so failed writes are logged and dropped.
#[derive(Clone)]
pub struct Output {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Output {
    /// An [`Output`] writing to the process' standard output.
    pub fn stdout() -> Self {
        Output::from_writer(io::stdout())
    }

    /// Wrap an arbitrary writer.
    pub fn from_writer(writer: impl Write + Send + 'static) -> Self {
        Output {
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// An [`Output`] backed by memory, along with a handle for reading back
    /// what was written.
    pub fn in_memory() -> (Self, CapturedOutput) {
        let captured = CapturedOutput::default();
        (Output::from_writer(captured.clone()), captured)
    }

    /// Write `line` followed by a newline, flushing immediately so guest
    /// output interleaves correctly with anything else on the stream.
    pub fn write_line(&self, line: impl Display) {
        let mut writer = self.writer.lock();
        let result = writeln!(writer, "{line}").and_then(|_| writer.flush());

        if let Err(error) = result {
            tracing::warn!(%error, "Unable to write guest output");
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Output::stdout()
    }
}

impl std::fmt::Debug for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Output").finish_non_exhaustive()
    }
}

/// The in-memory side of [`Output::in_memory()`].
#[derive(Debug, Clone, Default)]
pub struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }

    /// Everything written so far, split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }
}

impl Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
