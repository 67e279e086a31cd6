//! Discovery: pick the callable members out of a native module.

use scriptbind_core::{Declaration, ExportedFunction, NativeModule};

/// Collect the functions among `declarations`, preserving their order.
///
/// Constants, types and nested modules are skipped silently. Running this
/// twice over the same declarations yields the same sequence.
pub fn discover(declarations: &[Declaration]) -> Vec<ExportedFunction> {
    let mut functions = Vec::new();
    for decl in declarations {
        match decl.as_function() {
            Some(function) => {
                tracing::debug!(name = function.name(), arity = function.arity(), "discovered function");
                functions.push(function.clone());
            }
            None => {
                tracing::trace!(name = decl.name(), kind = decl.kind(), "skipping non-callable member");
            }
        }
    }
    functions
}

/// [`discover`] over a compile-time native module.
pub fn discover_module<M: NativeModule>() -> Vec<ExportedFunction> {
    discover(&M::declarations())
}
