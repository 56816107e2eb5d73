//! Engine logger — forwards engine diagnostics to a host-supplied sink.
//!
//! The engine is a library, so it never decides where log output goes: the
//! host application calls [`init_stderr`] or [`init_writer`] once at startup
//! (or not at all, in which case every message is dropped).  All log writes
//! silently ignore I/O errors so that logging can never crash a raster
//! operation.
//!
//! Usage — anywhere in the crate use the `log_info!` / `log_warn!` /
//! `log_err!` macros, or call `crate::logger::write(...)` directly.

use std::io::Write;
use std::sync::{Mutex, OnceLock};

static SINK: OnceLock<Mutex<Box<dyn Write + Send>>> = OnceLock::new();

/// Route engine log output to stderr.  Returns `false` if a sink was
/// already installed (the first one wins).
pub fn init_stderr() -> bool {
    SINK.set(Mutex::new(Box::new(std::io::stderr()))).is_ok()
}

/// Route engine log output to an arbitrary writer (a file the host opened,
/// a test buffer, ...).  Returns `false` if a sink was already installed.
pub fn init_writer(w: Box<dyn Write + Send>) -> bool {
    SINK.set(Mutex::new(w)).is_ok()
}

/// Write a level-tagged line to the sink.  No-op until a sink is installed.
pub fn write(level: &str, msg: &str) {
    if let Some(mutex) = SINK.get()
        && let Ok(mut sink) = mutex.lock()
    {
        let _ = writeln!(sink, "[rasterfe] [{}] {}", level, msg);
    }
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logger::write("INFO", &format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logger::write("WARN", &format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_err {
    ($($arg:tt)*) => {
        $crate::logger::write("ERROR", &format!($($arg)*));
    };
}
