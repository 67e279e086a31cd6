//! Binding generation and registration for scriptbind.
//!
//! The pipeline runs once per native module at startup:
//!
//! ```text
//! NativeModule -> discover() -> generate() per function -> Module -> register()
//! ```
//!
//! After registration only the adapters run.

mod binding;
mod discovery;
mod module;
mod registrar;

pub use binding::{BindingEntry, generate};
pub use discovery::{discover, discover_module};
pub use module::{Module, ModuleBuilder, bind_functions};
pub use registrar::{ScriptRuntime, register};

// Re-export from core so registry users need a single import
pub use scriptbind_core::{BindError, DecodePolicy, ExportedFunction, NativeModule};
