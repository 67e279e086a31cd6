//! Script-side value held in an argument slot.

use std::fmt;

/// A dynamic value supplied by a script caller.
///
/// This is the scripting runtime's view of an argument before any native
/// type has been imposed on it.
#[derive(Clone, PartialEq)]
pub enum Dynamic {
    /// Absent/nil value
    Nil,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// String value (owned)
    String(String),
}

impl Dynamic {
    /// Get a human-readable name for this slot's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Dynamic::Nil => "nil",
            Dynamic::Bool(_) => "boolean",
            Dynamic::Int(_) => "integer",
            Dynamic::Float(_) => "number",
            Dynamic::String(_) => "string",
        }
    }

    /// Read the value as a number.
    ///
    /// Integers widen to `f64`. Strings whose trimmed content parses as a
    /// number are coerced, following the usual scripting-runtime rule.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Dynamic::Int(v) => Some(*v as f64),
            Dynamic::Float(v) => Some(*v),
            Dynamic::String(s) => parse_numeric(s),
            Dynamic::Nil | Dynamic::Bool(_) => None,
        }
    }

    /// Read the value as text. Only strings qualify.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Dynamic::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Parse a numeric string. Rust accepts `inf`/`nan` spellings that script
/// runtimes treat as plain text, so those are rejected.
fn parse_numeric(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.chars().any(|c| matches!(c, 'i' | 'I' | 'n' | 'N')) {
        return None;
    }
    s.parse::<f64>().ok()
}

impl fmt::Debug for Dynamic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dynamic::Nil => write!(f, "Nil"),
            Dynamic::Bool(v) => write!(f, "Bool({})", v),
            Dynamic::Int(v) => write!(f, "Int({})", v),
            Dynamic::Float(v) => write!(f, "Float({})", v),
            Dynamic::String(s) => write!(f, "String({:?})", s),
        }
    }
}

impl From<bool> for Dynamic {
    fn from(v: bool) -> Self {
        Dynamic::Bool(v)
    }
}

impl From<i64> for Dynamic {
    fn from(v: i64) -> Self {
        Dynamic::Int(v)
    }
}

impl From<i32> for Dynamic {
    fn from(v: i32) -> Self {
        Dynamic::Int(v as i64)
    }
}

impl From<f64> for Dynamic {
    fn from(v: f64) -> Self {
        Dynamic::Float(v)
    }
}

impl From<&str> for Dynamic {
    fn from(v: &str) -> Self {
        Dynamic::String(v.to_string())
    }
}

impl From<String> for Dynamic {
    fn from(v: String) -> Self {
        Dynamic::String(v)
    }
}

impl<T: Into<Dynamic>> From<Option<T>> for Dynamic {
    fn from(v: Option<T>) -> Self {
        v.map_or(Dynamic::Nil, Into::into)
    }
}
