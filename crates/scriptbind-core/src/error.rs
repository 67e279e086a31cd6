//! Error types for the bridge.
//!
//! Errors fall into two tiers. [`BindError`] is raised while bindings are
//! generated, before any script runs, and is fatal for the module being
//! bound. [`DecodeError`] and [`NativeError`] happen while a script call is
//! in flight and are reported back to the scripting runtime.

use thiserror::Error;

use crate::type_tag::TypeTag;

/// Errors reading a script argument as a native value.
///
/// Under the lenient decode policy these never leave the decoder: a zero
/// value is substituted instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeError {
    /// The slot does not exist (fewer arguments were passed).
    #[error("argument #{position} is missing (call supplied {supplied} arguments)")]
    Missing { position: usize, supplied: usize },

    /// The slot holds a value of the wrong kind.
    #[error("argument #{position}: expected {expected}, got {actual}")]
    TypeMismatch {
        position: usize,
        expected: &'static str,
        actual: &'static str,
    },

    /// The declared type cannot be decoded at all.
    #[error("type `{tag}` cannot cross the script boundary")]
    Unsupported { tag: TypeTag },
}

/// Errors that can occur during native function execution.
#[derive(Debug, Error)]
pub enum NativeError {
    /// Error decoding arguments
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Typed accessor asked for a different type than was decoded
    #[error("argument {index} is {actual}, requested as {expected}")]
    ArgumentType {
        index: usize,
        expected: TypeTag,
        actual: TypeTag,
    },

    /// Argument index out of bounds
    #[error("argument index {index} out of bounds (function has {count} arguments)")]
    ArgumentIndexOutOfBounds { index: usize, count: usize },

    /// Generic native error
    #[error("native error: {message}")]
    Other { message: String },
}

impl NativeError {
    /// Create a generic native error.
    pub fn other(message: impl Into<String>) -> Self {
        NativeError::Other {
            message: message.into(),
        }
    }
}

/// Build/bind-time failures. None of these are recoverable at runtime.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BindError {
    #[error("function `{function}` parameter #{position} has unsupported type `{tag}`")]
    UnsupportedParameter {
        function: String,
        position: usize,
        tag: TypeTag,
    },

    #[error("function `{name}` is declared twice in namespace `{namespace}`")]
    DuplicateFunction { namespace: String, name: String },

    #[error("namespace name must not be empty")]
    EmptyNamespace,
}

/// Failure parsing a [`TypeTag`] from its textual name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown type tag `{input}`")]
pub struct TagParseError {
    pub input: String,
}

impl TagParseError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_missing() {
        let err = DecodeError::Missing {
            position: 3,
            supplied: 1,
        };
        assert!(err.to_string().contains("#3"));
        assert!(err.to_string().contains("supplied 1"));
    }

    #[test]
    fn decode_error_type_mismatch() {
        let err = DecodeError::TypeMismatch {
            position: 1,
            expected: "number",
            actual: "string",
        };
        assert!(err.to_string().contains("number"));
        assert!(err.to_string().contains("string"));
    }

    #[test]
    fn native_error_from_decode() {
        let err: NativeError = DecodeError::Unsupported { tag: TypeTag::Bool }.into();
        assert!(matches!(err, NativeError::Decode(_)));
        assert!(err.to_string().contains("bool"));
    }

    #[test]
    fn native_error_argument_type() {
        let err = NativeError::ArgumentType {
            index: 0,
            expected: TypeTag::Text,
            actual: TypeTag::U8,
        };
        assert!(err.to_string().contains("text"));
        assert!(err.to_string().contains("u8"));
    }

    #[test]
    fn native_error_other() {
        let err = NativeError::other("device lost");
        assert!(err.to_string().contains("device lost"));
    }

    #[test]
    fn bind_error_unsupported() {
        let err = BindError::UnsupportedParameter {
            function: "upload".into(),
            position: 2,
            tag: TypeTag::Array(Box::new(TypeTag::U8)),
        };
        let msg = err.to_string();
        assert!(msg.contains("upload"));
        assert!(msg.contains("#2"));
        assert!(msg.contains("[u8]"));
    }
}
