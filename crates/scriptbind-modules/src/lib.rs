//! Stock native modules for scriptbind.
//!
//! - **std** - console output (`print`, `println`, `eprint`, `eprintln`)
//! - **log** - leveled logging through `tracing` (`trace` .. `error`)
//!
//! # Usage
//!
//! ```ignore
//! use scriptbind_modules::default_modules;
//!
//! for module in default_modules(DecodePolicy::Lenient)? {
//!     context.install(module)?;
//! }
//! ```

pub mod log;
pub mod std;

use scriptbind_core::{BindError, DecodePolicy};
use scriptbind_registry::Module;

/// Bind every stock module with the given decode policy.
pub fn default_modules(policy: DecodePolicy) -> Result<Vec<Module>, BindError> {
    Ok(vec![std::module(policy)?, log::module(policy)?])
}
