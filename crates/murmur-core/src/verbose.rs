//! Opt-in diagnostic logging.
//!
//! The CLI (or any embedding surface) calls `set_verbose(true)` and the
//! core's `verbose!` call sites start printing to stderr.

use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Enable or disable diagnostic output.
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::SeqCst);
}

/// Whether diagnostic output is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Print a formatted diagnostic line when verbose mode is on.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::verbose::is_verbose() {
            eprintln!("[murmur] {}", format!($($arg)*));
        }
    };
}
