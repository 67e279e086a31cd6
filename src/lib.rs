//! Expose native Rust functions to a dynamically typed scripting runtime.
//!
//! The bridge runs once per native module at startup:
//!
//! 1. **Discovery** picks the callable members of a native module.
//! 2. **Wrapper generation** builds an adapter per function that decodes each
//!    script argument by the parameter's declared type.
//! 3. **Registration** installs the adapters as a namespace in the runtime.
//!
//! After that, a script call resolves `namespace.function`, the adapter
//! decodes the arguments and the native function runs.
//!
//! # Example
//!
//! ```ignore
//! use scriptbind::{Context, Dynamic};
//!
//! #[scriptbind::native_module]
//! pub mod gfx {
//!     pub fn set_layer(layer: u8, name: &str) { /* ... */ }
//! }
//!
//! let mut ctx = Context::new().with_default_modules()?;
//! ctx.install_native::<gfx::Exports>("gfx")?;
//!
//! let engine = ctx.into_engine();
//! engine.call("gfx.set_layer", &[Dynamic::Int(300), "ui".into()])?; // layer == 44
//! ```
//!
//! Code generated by the macros refers to `::scriptbind_core`, so crates
//! using them depend on `scriptbind-core` directly.

mod config;
mod context;
mod engine;

pub use config::{ConfigError, DEFAULT_ENTRY_SCRIPT, ENV_DECODE, ENV_ENTRY, EngineArgs, EngineConfig};
pub use context::{Context, ContextError};
pub use engine::{Engine, EngineError};

pub use scriptbind_core::{
    Adapter, ArgumentSource, Arguments, BindError, BindingHash, CallContext, DecodeError,
    DecodePolicy, Declaration, Dynamic, ExportedFunction, FromNative, NativeError, NativeModule,
    NativeValue, ParamType, TagCategory, TypeTag, decode,
};
pub use scriptbind_macros::{function, native_module};
pub use scriptbind_registry::{
    BindingEntry, Module, ModuleBuilder, ScriptRuntime, bind_functions, discover, discover_module,
    generate, register,
};

/// Stock modules.
pub mod modules {
    pub use scriptbind_modules::*;
}
