//! Function wrapper generation.

use scriptbind_core::{Adapter, BindError, DecodePolicy, ExportedFunction};

/// A script-visible name paired with its adapter.
#[derive(Debug, Clone)]
pub struct BindingEntry {
    name: String,
    adapter: Adapter,
}

impl BindingEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn adapter(&self) -> &Adapter {
        &self.adapter
    }

    pub fn into_parts(self) -> (String, Adapter) {
        (self.name, self.adapter)
    }
}

/// Generate the adapter for one function.
///
/// Every declared parameter tag is checked here, so a function that cannot be
/// called from a script is rejected before anything runs. Positions in the
/// error are 1-indexed like script arguments.
pub fn generate(
    namespace: &str,
    function: &ExportedFunction,
    policy: DecodePolicy,
) -> Result<BindingEntry, BindError> {
    for (i, tag) in function.params().iter().enumerate() {
        if !tag.is_supported() {
            return Err(BindError::UnsupportedParameter {
                function: function.name().to_string(),
                position: i + 1,
                tag: tag.clone(),
            });
        }
    }

    let adapter = Adapter::new(namespace, function, policy);
    tracing::debug!(
        namespace,
        name = function.name(),
        id = %adapter.id(),
        ?policy,
        "generated adapter"
    );

    Ok(BindingEntry {
        name: function.name().to_string(),
        adapter,
    })
}
