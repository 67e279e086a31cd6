//! In-process scripting runtime.
//!
//! The `Engine` keeps the global environment: a table of adapters per
//! namespace. It is what registration installs into and what script calls go
//! through. Calls run synchronously on the caller's thread.
//!
//! # Example
//!
//! ```ignore
//! let mut engine = Engine::new();
//! register(&mut engine, module);
//!
//! engine.call("gfx.set_layer", &[Dynamic::Int(300), "ui".into()])?;
//! ```

use rustc_hash::FxHashMap;
use thiserror::Error;

use scriptbind_core::{Adapter, CallContext, Dynamic, NativeError};
use scriptbind_registry::{BindingEntry, ScriptRuntime};

/// One installed namespace.
#[derive(Debug, Default)]
struct Table {
    /// Function names in registration order
    order: Vec<String>,
    adapters: FxHashMap<String, Adapter>,
}

impl Table {
    fn from_entries(entries: Vec<BindingEntry>) -> Self {
        let mut table = Table::default();
        for entry in entries {
            let (name, adapter) = entry.into_parts();
            table.order.push(name.clone());
            table.adapters.insert(name, adapter);
        }
        table
    }
}

/// Global environment of script-visible namespaces.
#[derive(Debug, Default)]
pub struct Engine {
    globals: FxHashMap<String, Table>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `namespace.function` with `args`.
    ///
    /// Returns the number of results the adapter produced (always 0).
    pub fn call(&self, path: &str, args: &[Dynamic]) -> Result<usize, EngineError> {
        let (namespace, function) = path
            .split_once('.')
            .ok_or_else(|| EngineError::InvalidPath(path.to_string()))?;
        self.call_in(namespace, function, args)
    }

    /// Call `function` in `namespace` with `args`.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn call_in(
        &self,
        namespace: &str,
        function: &str,
        args: &[Dynamic],
    ) -> Result<usize, EngineError> {
        let adapter = self.lookup(namespace, function)?;
        tracing::trace!(namespace, function, id = %adapter.id(), argc = args.len(), "script call");

        adapter
            .invoke(&CallContext::new(args))
            .map_err(|source| EngineError::Native {
                namespace: namespace.to_string(),
                function: function.to_string(),
                source,
            })
    }

    /// Resolve an adapter without calling it.
    pub fn lookup(&self, namespace: &str, function: &str) -> Result<&Adapter, EngineError> {
        let table = self
            .globals
            .get(namespace)
            .ok_or_else(|| EngineError::UnknownNamespace(namespace.to_string()))?;
        table
            .adapters
            .get(function)
            .ok_or_else(|| EngineError::UnknownFunction {
                namespace: namespace.to_string(),
                function: function.to_string(),
            })
    }

    pub fn has_namespace(&self, namespace: &str) -> bool {
        self.globals.contains_key(namespace)
    }

    /// Installed namespaces, sorted.
    pub fn namespaces(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.globals.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Function names in `namespace`, in registration order.
    pub fn function_names(&self, namespace: &str) -> Option<Vec<&str>> {
        self.globals
            .get(namespace)
            .map(|t| t.order.iter().map(String::as_str).collect())
    }
}

impl ScriptRuntime for Engine {
    fn install_table(&mut self, namespace: &str, entries: Vec<BindingEntry>) -> bool {
        self.globals
            .insert(namespace.to_string(), Table::from_entries(entries))
            .is_some()
    }
}

/// Errors raised while calling into the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("`{0}` is not a `namespace.function` path")]
    InvalidPath(String),

    #[error("unknown namespace `{0}`")]
    UnknownNamespace(String),

    #[error("unknown function `{namespace}.{function}`")]
    UnknownFunction { namespace: String, function: String },

    #[error("`{namespace}.{function}` failed: {source}")]
    Native {
        namespace: String,
        function: String,
        #[source]
        source: NativeError,
    },
}
