//! Startup context for the scripting engine.
//!
//! A `Context` runs the one-shot binding pipeline for each native module
//! (discovery, wrapper generation, registration) against an [`Engine`], then
//! hands the engine over once everything is installed.
//!
//! # Example
//!
//! ```ignore
//! use scriptbind::{Context, EngineConfig};
//!
//! let config = EngineConfig::from_env()?;
//! let mut ctx = Context::with_config(config).with_default_modules()?;
//! ctx.install_native::<audio::Exports>("audio")?;
//!
//! let engine = ctx.into_engine();
//! engine.call("std.println", &["ready".into()])?;
//! ```

use thiserror::Error;

use scriptbind_core::{BindError, ExportedFunction, NativeModule};
use scriptbind_modules::default_modules;
use scriptbind_registry::{Module, bind_functions, discover_module, register};

use crate::config::EngineConfig;
use crate::engine::Engine;

/// Owns the engine while modules are being installed.
#[derive(Debug, Default)]
pub struct Context {
    engine: Engine,
    config: EngineConfig,
    /// Namespaces installed so far, in order
    installed: Vec<String>,
    sealed: bool,
}

impl Context {
    /// Create an empty context with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty context. The config's decode policy applies to every
    /// module bound through `install_native` and `install_functions`.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Install the stock `std` and `log` modules.
    ///
    /// The context is NOT sealed - call `seal()` when done adding modules.
    pub fn with_default_modules(mut self) -> Result<Self, ContextError> {
        for module in default_modules(self.config.decode_policy)? {
            self.install(module)?;
        }
        Ok(self)
    }

    /// Register an already-bound module.
    ///
    /// Installing the same namespace twice replaces the earlier table.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::AlreadySealed` if the context has been sealed.
    pub fn install(&mut self, module: Module) -> Result<(), ContextError> {
        if self.sealed {
            return Err(ContextError::AlreadySealed);
        }

        let namespace = module.namespace().to_string();
        register(&mut self.engine, module);
        if !self.installed.contains(&namespace) {
            self.installed.push(namespace);
        }
        Ok(())
    }

    /// Bind `functions` under `namespace` and register the result.
    pub fn install_functions<I>(&mut self, namespace: &str, functions: I) -> Result<(), ContextError>
    where
        I: IntoIterator<Item = ExportedFunction>,
    {
        if self.sealed {
            return Err(ContextError::AlreadySealed);
        }
        let module = bind_functions(namespace, functions, self.config.decode_policy)?;
        self.install(module)
    }

    /// Discover, bind and register a native module under `namespace`.
    pub fn install_native<M: NativeModule>(&mut self, namespace: &str) -> Result<(), ContextError> {
        self.install_functions(namespace, discover_module::<M>())
    }

    /// Stop accepting modules. Calling this more than once is a no-op.
    pub fn seal(&mut self) {
        if !self.sealed {
            tracing::debug!(namespaces = self.installed.len(), "context sealed");
        }
        self.sealed = true;
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The engine, for calls during setup.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Namespaces installed so far, in installation order.
    pub fn namespaces(&self) -> &[String] {
        &self.installed
    }

    pub fn module_count(&self) -> usize {
        self.installed.len()
    }

    /// Seal the context and take the engine.
    pub fn into_engine(mut self) -> Engine {
        self.seal();
        self.engine
    }
}

/// Errors that can occur during context operations.
#[derive(Debug, Error)]
pub enum ContextError {
    /// Failed to bind a module
    #[error("failed to bind module: {0}")]
    Bind(#[from] BindError),

    /// Context is already sealed - cannot install modules
    #[error("context is already sealed - cannot install modules after seal()")]
    AlreadySealed,
}
