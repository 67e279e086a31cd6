//! Native module declarations.
//!
//! A native module is described by an ordered list of [`Declaration`]s. Only
//! [`Declaration::Function`] entries are bindable; the rest exist so that a
//! module can describe itself completely and discovery can skip them.

use std::fmt;
use std::sync::Arc;

use crate::error::NativeError;
use crate::type_tag::TypeTag;
use crate::value::Arguments;

/// Type-erased native callable. Receives the decoded arguments of one call.
pub type NativeCallable = dyn Fn(&Arguments<'_>) -> Result<(), NativeError> + Send + Sync;

/// A callable entry point of a native module, with its parameter schema.
///
/// The callable is shared behind an `Arc` so discovery can hand out copies
/// without re-running any code generation.
#[derive(Clone)]
pub struct ExportedFunction {
    name: String,
    params: Vec<TypeTag>,
    callable: Arc<NativeCallable>,
}

impl ExportedFunction {
    /// Declare a function by hand.
    ///
    /// ```ignore
    /// let f = ExportedFunction::new("set_volume", vec![TypeTag::F32], |args| {
    ///     mixer::set_volume(args.get(0)?);
    ///     Ok(())
    /// });
    /// ```
    pub fn new<F>(name: impl Into<String>, params: Vec<TypeTag>, callable: F) -> Self
    where
        F: Fn(&Arguments<'_>) -> Result<(), NativeError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            params,
            callable: Arc::new(callable),
        }
    }

    /// Script-visible name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared parameter tags in native signature order.
    pub fn params(&self) -> &[TypeTag] {
        &self.params
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Shared handle to the callable.
    pub fn callable(&self) -> Arc<NativeCallable> {
        Arc::clone(&self.callable)
    }

    /// Call directly with already-decoded arguments.
    pub fn call(&self, args: &Arguments<'_>) -> Result<(), NativeError> {
        (self.callable)(args)
    }
}

impl fmt::Debug for ExportedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportedFunction")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// One member of a native module.
#[derive(Debug, Clone)]
pub enum Declaration {
    Function(ExportedFunction),
    Constant(&'static str),
    Type(&'static str),
    Module(&'static str),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Declaration::Function(f) => f.name(),
            Declaration::Constant(name) | Declaration::Type(name) | Declaration::Module(name) => {
                name
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Declaration::Function(_) => "function",
            Declaration::Constant(_) => "constant",
            Declaration::Type(_) => "type",
            Declaration::Module(_) => "module",
        }
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Declaration::Function(_))
    }

    pub fn as_function(&self) -> Option<&ExportedFunction> {
        match self {
            Declaration::Function(f) => Some(f),
            _ => None,
        }
    }
}

/// A native module known at compile time.
///
/// Usually implemented by `#[native_module]`, which lists the public items of
/// an inline module in source order.
pub trait NativeModule {
    /// The module's members in declaration order.
    fn declarations() -> Vec<Declaration>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::NativeValue;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn call_through_exported_function() {
        static SEEN: AtomicU32 = AtomicU32::new(0);

        let f = ExportedFunction::new("store", vec![TypeTag::U32], |args| {
            SEEN.store(args.get::<u32>(0)?, Ordering::SeqCst);
            Ok(())
        });

        let values = [NativeValue::U32(9)];
        f.call(&Arguments::new(&values)).unwrap();
        assert_eq!(SEEN.load(Ordering::SeqCst), 9);
        assert_eq!(f.arity(), 1);
        assert_eq!(f.params(), &[TypeTag::U32]);
    }

    #[test]
    fn declaration_kinds() {
        let f = Declaration::Function(ExportedFunction::new("f", vec![], |_| Ok(())));
        let c = Declaration::Constant("MAX");
        let t = Declaration::Type("Mesh");
        let m = Declaration::Module("inner");

        assert!(f.is_callable());
        assert!(!c.is_callable());
        assert_eq!(c.name(), "MAX");
        assert_eq!(t.kind(), "type");
        assert_eq!(m.kind(), "module");
        assert!(f.as_function().is_some());
        assert!(t.as_function().is_none());
    }

    #[test]
    fn debug_omits_callable() {
        let f = ExportedFunction::new("draw", vec![TypeTag::F32], |_| Ok(()));
        let s = format!("{f:?}");
        assert!(s.contains("draw"));
        assert!(s.contains(".."));
    }
}
