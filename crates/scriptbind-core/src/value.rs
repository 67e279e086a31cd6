//! Decoded native argument values and typed access to them.
//!
//! The decoder turns each script slot into a [`NativeValue`] according to the
//! parameter's [`TypeTag`]. A native callable then receives the whole list as
//! [`Arguments`] and pulls out typed values with [`Arguments::get`].
//!
//! ## Supported Parameter Types
//!
//! - Integers: `i8`, `i16`, `i32`, `i64`, `u8`, `u16`, `u32`, `u64`
//! - Floats: `f32`, `f64`
//! - Text: `&str` (borrowed from the call) and `String` (copied)

use crate::error::NativeError;
use crate::type_tag::TypeTag;

/// One decoded argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NativeValue<'a> {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Text(&'a str),
}

impl NativeValue<'_> {
    /// The tag this value was decoded as.
    pub fn tag(&self) -> TypeTag {
        match self {
            NativeValue::I8(_) => TypeTag::I8,
            NativeValue::I16(_) => TypeTag::I16,
            NativeValue::I32(_) => TypeTag::I32,
            NativeValue::I64(_) => TypeTag::I64,
            NativeValue::U8(_) => TypeTag::U8,
            NativeValue::U16(_) => TypeTag::U16,
            NativeValue::U32(_) => TypeTag::U32,
            NativeValue::U64(_) => TypeTag::U64,
            NativeValue::F32(_) => TypeTag::F32,
            NativeValue::F64(_) => TypeTag::F64,
            NativeValue::Text(_) => TypeTag::Text,
        }
    }
}

/// Native types that can appear as parameters of a bound function.
///
/// The associated tag is what the decoder uses for the parameter.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be passed from a script to a native function",
    note = "supported parameter types are integers, `f32`, `f64`, `&str` and `String`"
)]
pub trait ParamType {
    const TAG: TypeTag;
}

/// Extract a typed value from a decoded argument.
pub trait FromNative<'a>: Sized {
    /// Returns `None` if the value was decoded as a different type.
    fn from_native(value: &NativeValue<'a>) -> Option<Self>;
}

macro_rules! impl_native_param {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl ParamType for $ty {
                const TAG: TypeTag = TypeTag::$variant;
            }

            impl<'a> FromNative<'a> for $ty {
                fn from_native(value: &NativeValue<'a>) -> Option<Self> {
                    match value {
                        NativeValue::$variant(v) => Some(*v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_native_param!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
);

impl ParamType for &str {
    const TAG: TypeTag = TypeTag::Text;
}

impl<'a> FromNative<'a> for &'a str {
    fn from_native(value: &NativeValue<'a>) -> Option<Self> {
        match value {
            NativeValue::Text(s) => Some(*s),
            _ => None,
        }
    }
}

impl ParamType for String {
    const TAG: TypeTag = TypeTag::Text;
}

impl<'a> FromNative<'a> for String {
    fn from_native(value: &NativeValue<'a>) -> Option<Self> {
        match value {
            NativeValue::Text(s) => Some((*s).to_string()),
            _ => None,
        }
    }
}

/// Decoded arguments for one native call, in declaration order.
///
/// Indices here are 0-based native parameter indices, not script positions.
#[derive(Debug, Clone, Copy)]
pub struct Arguments<'a> {
    values: &'a [NativeValue<'a>],
}

impl<'a> Arguments<'a> {
    pub fn new(values: &'a [NativeValue<'a>]) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the raw decoded value at `index`.
    pub fn value(&self, index: usize) -> Result<&NativeValue<'a>, NativeError> {
        self.values
            .get(index)
            .ok_or(NativeError::ArgumentIndexOutOfBounds {
                index,
                count: self.values.len(),
            })
    }

    /// Get a typed argument value.
    ///
    /// ```ignore
    /// let id: u32 = args.get(0)?;
    /// let label: &str = args.get(1)?;
    /// ```
    pub fn get<T>(&self, index: usize) -> Result<T, NativeError>
    where
        T: ParamType + FromNative<'a>,
    {
        let value = self.value(index)?;
        T::from_native(value).ok_or_else(|| NativeError::ArgumentType {
            index,
            expected: T::TAG,
            actual: value.tag(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &NativeValue<'a>> {
        self.values.iter()
    }
}
