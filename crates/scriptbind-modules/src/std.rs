//! Console output for scripts.
//!
//! Registered under the `std` namespace:
//!
//! - `print(text)` / `println(text)` write to stdout
//! - `eprint(text)` / `eprintln(text)` write to stderr

use scriptbind_core::{BindError, DecodePolicy};
use scriptbind_registry::Module;

pub const NAMESPACE: &str = "std";

#[scriptbind_macros::native_module]
pub mod exports {
    use std::io::Write;

    // =========================================================================
    // OUTPUT FUNCTIONS
    // =========================================================================

    /// Print to stdout without newline.
    /// Usage: `std.print("loading...")`
    pub fn print(text: &str) {
        let mut out = std::io::stdout().lock();
        // Console write failures are ignored.
        let _ = out.write_all(text.as_bytes()).and_then(|()| out.flush());
    }

    /// Print to stdout with newline.
    pub fn println(text: &str) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{text}");
    }

    /// Print to stderr without newline.
    pub fn eprint(text: &str) {
        let mut err = std::io::stderr().lock();
        let _ = err.write_all(text.as_bytes());
    }

    /// Print to stderr with newline.
    pub fn eprintln(text: &str) {
        let mut err = std::io::stderr().lock();
        let _ = writeln!(err, "{text}");
    }
}

/// Bind the `std` module.
pub fn module(policy: DecodePolicy) -> Result<Module, BindError> {
    Module::builder(NAMESPACE)
        .native::<exports::Exports>()
        .policy(policy)
        .build()
}
