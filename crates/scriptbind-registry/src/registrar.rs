//! Module registration into a scripting runtime.

use crate::binding::BindingEntry;
use crate::module::Module;

/// The registration side of a scripting runtime.
///
/// Implementors install a table of adapters as a global namespace. Adapters
/// follow the `(call context) -> result count` convention of
/// [`Adapter::invoke`](scriptbind_core::Adapter::invoke).
pub trait ScriptRuntime {
    /// Install `entries` as the global table `namespace`, replacing any
    /// existing table of that name as a whole.
    ///
    /// Returns `true` if an existing table was replaced.
    fn install_table(&mut self, namespace: &str, entries: Vec<BindingEntry>) -> bool;
}

/// Publish `module` in `runtime` under its namespace.
///
/// Re-registering a namespace replaces the previous table wholesale; this is
/// logged but not treated as an error.
pub fn register<R>(runtime: &mut R, module: Module)
where
    R: ScriptRuntime + ?Sized,
{
    let (namespace, entries) = module.into_parts();
    let count = entries.len();

    if runtime.install_table(&namespace, entries) {
        tracing::warn!(namespace = %namespace, "replaced existing script namespace");
    }
    tracing::debug!(namespace = %namespace, count, "registered module");
}
