//! Type-erased adapter from the script calling convention to a native callable.

use std::fmt;
use std::sync::Arc;

use crate::binding_hash::BindingHash;
use crate::declaration::{ExportedFunction, NativeCallable};
use crate::decode::{DecodePolicy, decode};
use crate::error::NativeError;
use crate::type_tag::TypeTag;
use crate::value::Arguments;

use super::ArgumentSource;

/// Adapter for one bound native function.
///
/// Holds the parameter schema fixed at generation time, the decode policy and
/// a shared handle to the callable. Invoking it decodes every declared
/// parameter from the call context, calls the native function and reports
/// zero results.
pub struct Adapter {
    id: BindingHash,
    name: Arc<str>,
    params: Arc<[TypeTag]>,
    policy: DecodePolicy,
    inner: Arc<NativeCallable>,
}

impl Adapter {
    /// Build an adapter for `function`. Tags are assumed valid; the wrapper
    /// generator checks them before calling this.
    pub fn new(namespace: &str, function: &ExportedFunction, policy: DecodePolicy) -> Self {
        Self {
            id: BindingHash::from_function(namespace, function.name(), function.params()),
            name: Arc::from(function.name()),
            params: Arc::from(function.params()),
            policy,
            inner: function.callable(),
        }
    }

    /// Stable identity derived from namespace, name and parameter tags.
    pub fn id(&self) -> BindingHash {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[TypeTag] {
        &self.params
    }

    pub fn policy(&self) -> DecodePolicy {
        self.policy
    }

    /// Run the adapter against one call frame.
    ///
    /// Returns the number of values pushed back to the script, which is
    /// always zero: whatever the native function returned has been dropped.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn invoke(&self, ctx: &dyn ArgumentSource) -> Result<usize, NativeError> {
        let mut values = Vec::with_capacity(self.params.len());
        for (i, tag) in self.params.iter().enumerate() {
            values.push(decode(tag, i + 1, ctx, self.policy)?);
        }

        (self.inner)(&Arguments::new(&values))?;
        Ok(0)
    }
}

impl fmt::Debug for Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapter")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("params", &self.params)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

/// Clones share the underlying callable.
impl Clone for Adapter {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            name: Arc::clone(&self.name),
            params: Arc::clone(&self.params),
            policy: self.policy,
            inner: Arc::clone(&self.inner),
        }
    }
}
