//! Semantic parameter type tags.
//!
//! A [`TypeTag`] names the native type a bound function expects at one
//! parameter position. Tags are fixed when a function is declared and drive
//! the argument decoder on every call.
//!
//! Only integers, floats and text can cross the script boundary. The other
//! variants exist so that registration tables can *declare* such parameters;
//! binding a function that uses one fails before any script runs.

use std::fmt;
use std::str::FromStr;

use crate::error::TagParseError;

/// Type representation for native function parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    /// Text borrowed from the call context.
    Text,
    Bool,
    Pointer,
    Void,
    Array(Box<TypeTag>),
    Struct(String),
}

/// How a supported tag is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCategory {
    SignedInt { bits: u8 },
    UnsignedInt { bits: u8 },
    Float { bits: u8 },
    Text,
}

impl TypeTag {
    /// Decode category, or `None` for tags that cannot cross the boundary.
    pub fn category(&self) -> Option<TagCategory> {
        match self {
            TypeTag::I8 => Some(TagCategory::SignedInt { bits: 8 }),
            TypeTag::I16 => Some(TagCategory::SignedInt { bits: 16 }),
            TypeTag::I32 => Some(TagCategory::SignedInt { bits: 32 }),
            TypeTag::I64 => Some(TagCategory::SignedInt { bits: 64 }),
            TypeTag::U8 => Some(TagCategory::UnsignedInt { bits: 8 }),
            TypeTag::U16 => Some(TagCategory::UnsignedInt { bits: 16 }),
            TypeTag::U32 => Some(TagCategory::UnsignedInt { bits: 32 }),
            TypeTag::U64 => Some(TagCategory::UnsignedInt { bits: 64 }),
            TypeTag::F32 => Some(TagCategory::Float { bits: 32 }),
            TypeTag::F64 => Some(TagCategory::Float { bits: 64 }),
            TypeTag::Text => Some(TagCategory::Text),
            TypeTag::Bool
            | TypeTag::Pointer
            | TypeTag::Void
            | TypeTag::Array(_)
            | TypeTag::Struct(_) => None,
        }
    }

    /// Whether a parameter of this type can be bound.
    pub fn is_supported(&self) -> bool {
        self.category().is_some()
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::I8 => write!(f, "i8"),
            TypeTag::I16 => write!(f, "i16"),
            TypeTag::I32 => write!(f, "i32"),
            TypeTag::I64 => write!(f, "i64"),
            TypeTag::U8 => write!(f, "u8"),
            TypeTag::U16 => write!(f, "u16"),
            TypeTag::U32 => write!(f, "u32"),
            TypeTag::U64 => write!(f, "u64"),
            TypeTag::F32 => write!(f, "f32"),
            TypeTag::F64 => write!(f, "f64"),
            TypeTag::Text => write!(f, "text"),
            TypeTag::Bool => write!(f, "bool"),
            TypeTag::Pointer => write!(f, "ptr"),
            TypeTag::Void => write!(f, "void"),
            TypeTag::Array(inner) => write!(f, "[{}]", inner),
            TypeTag::Struct(name) => write!(f, "struct {}", name),
        }
    }
}

impl FromStr for TypeTag {
    type Err = TagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(inner) = s.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
            return Ok(TypeTag::Array(Box::new(inner.parse()?)));
        }
        if let Some(name) = s.strip_prefix("struct ") {
            let name = name.trim();
            if name.is_empty() {
                return Err(TagParseError::new(s));
            }
            return Ok(TypeTag::Struct(name.to_string()));
        }

        match s {
            "i8" => Ok(TypeTag::I8),
            "i16" => Ok(TypeTag::I16),
            "i32" => Ok(TypeTag::I32),
            "i64" => Ok(TypeTag::I64),
            "u8" => Ok(TypeTag::U8),
            "u16" => Ok(TypeTag::U16),
            "u32" => Ok(TypeTag::U32),
            "u64" => Ok(TypeTag::U64),
            "f32" => Ok(TypeTag::F32),
            "f64" => Ok(TypeTag::F64),
            "text" | "str" | "string" => Ok(TypeTag::Text),
            "bool" => Ok(TypeTag::Bool),
            "ptr" | "pointer" => Ok(TypeTag::Pointer),
            "void" => Ok(TypeTag::Void),
            _ => Err(TagParseError::new(s)),
        }
    }
}
