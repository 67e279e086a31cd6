//! Script logging forwarded to `tracing`.
//!
//! Every function takes a message and emits an event with target `script`, so
//! script output can be filtered separately from the host's own logs.

use scriptbind_core::{BindError, DecodePolicy};
use scriptbind_registry::Module;

pub const NAMESPACE: &str = "log";

/// Target used for every event emitted on behalf of a script.
pub const TARGET: &str = "script";

#[scriptbind_macros::native_module]
pub mod exports {
    pub fn trace(message: &str) {
        tracing::trace!(target: super::TARGET, "{message}");
    }

    pub fn debug(message: &str) {
        tracing::debug!(target: super::TARGET, "{message}");
    }

    pub fn info(message: &str) {
        tracing::info!(target: super::TARGET, "{message}");
    }

    pub fn warn(message: &str) {
        tracing::warn!(target: super::TARGET, "{message}");
    }

    pub fn error(message: &str) {
        tracing::error!(target: super::TARGET, "{message}");
    }
}

/// Bind the `log` module.
pub fn module(policy: DecodePolicy) -> Result<Module, BindError> {
    Module::builder(NAMESPACE)
        .native::<exports::Exports>()
        .policy(policy)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriptbind_core::{CallContext, Dynamic};

    #[test]
    fn exports_levels_in_order() {
        let module = module(DecodePolicy::Lenient).unwrap();
        assert_eq!(
            module.names().collect::<Vec<_>>(),
            ["trace", "debug", "info", "warn", "error"]
        );
    }

    #[test]
    fn calls_without_subscriber() {
        let module = module(DecodePolicy::Lenient).unwrap();
        let slots = [Dynamic::from("hello")];
        for entry in module.entries() {
            assert_eq!(entry.adapter().invoke(&CallContext::new(&slots)).unwrap(), 0);
        }
    }
}
