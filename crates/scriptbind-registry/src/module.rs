//! Script-facing modules: a namespace and its bound functions.

use rustc_hash::FxHashSet;
use scriptbind_core::{BindError, Declaration, DecodePolicy, ExportedFunction, NativeModule};

use crate::binding::{BindingEntry, generate};
use crate::discovery::discover;

/// A namespace of bound functions, ready to be registered.
///
/// Entry names are unique and keep the order the functions were declared in.
#[derive(Debug, Clone)]
pub struct Module {
    namespace: String,
    entries: Vec<BindingEntry>,
}

impl Module {
    /// Start building a module for `namespace`.
    pub fn builder(namespace: impl Into<String>) -> ModuleBuilder {
        ModuleBuilder::new(namespace)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn entries(&self) -> &[BindingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&BindingEntry> {
        self.entries.iter().find(|e| e.name() == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(BindingEntry::name)
    }

    pub fn into_parts(self) -> (String, Vec<BindingEntry>) {
        (self.namespace, self.entries)
    }
}

/// Run wrapper generation for every function and collect the results under
/// `namespace`.
///
/// Fails on the first function with an unsupported parameter and on a name
/// that appears twice.
#[tracing::instrument(skip(functions), level = "debug")]
pub fn bind_functions<I>(
    namespace: &str,
    functions: I,
    policy: DecodePolicy,
) -> Result<Module, BindError>
where
    I: IntoIterator<Item = ExportedFunction>,
{
    if namespace.is_empty() {
        return Err(BindError::EmptyNamespace);
    }

    let mut seen = FxHashSet::default();
    let mut entries = Vec::new();
    for function in functions {
        if !seen.insert(function.name().to_string()) {
            return Err(BindError::DuplicateFunction {
                namespace: namespace.to_string(),
                name: function.name().to_string(),
            });
        }
        entries.push(generate(namespace, &function, policy)?);
    }

    tracing::debug!(namespace, count = entries.len(), "bound module");
    Ok(Module {
        namespace: namespace.to_string(),
        entries,
    })
}

/// Collects functions for a [`Module`].
///
/// ```ignore
/// let module = Module::builder("audio")
///     .native::<audio::Exports>()
///     .function(ExportedFunction::new("mute", vec![], |_| { mixer::mute(); Ok(()) }))
///     .policy(DecodePolicy::Strict)
///     .build()?;
/// ```
#[derive(Debug)]
pub struct ModuleBuilder {
    namespace: String,
    functions: Vec<ExportedFunction>,
    policy: DecodePolicy,
}

impl ModuleBuilder {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            functions: Vec::new(),
            policy: DecodePolicy::default(),
        }
    }

    pub fn function(mut self, function: ExportedFunction) -> Self {
        self.functions.push(function);
        self
    }

    pub fn functions(mut self, functions: impl IntoIterator<Item = ExportedFunction>) -> Self {
        self.functions.extend(functions);
        self
    }

    /// Add the callable members of a declaration list.
    pub fn declarations(mut self, declarations: &[Declaration]) -> Self {
        self.functions.extend(discover(declarations));
        self
    }

    /// Add the callable members of a native module.
    pub fn native<M: NativeModule>(self) -> Self {
        self.declarations(&M::declarations())
    }

    pub fn policy(mut self, policy: DecodePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn build(self) -> Result<Module, BindError> {
        bind_functions(&self.namespace, self.functions, self.policy)
    }
}
