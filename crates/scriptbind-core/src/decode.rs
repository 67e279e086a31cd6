//! Type-directed argument decoding.
//!
//! [`decode`] reads one script argument slot as the native type named by a
//! [`TypeTag`]:
//!
//! - Integers are read as a number and converted with modular truncation:
//!   `300` into a `u8` parameter becomes `44`. Fractions truncate toward zero.
//!   No range error is ever raised.
//! - Floats are read as a number and narrowed or widened to the declared width.
//! - Text is borrowed from the call context for the duration of the call.
//!
//! When a slot is absent or has the wrong kind, the [`DecodePolicy`] decides:
//! `Lenient` substitutes the zero value (`0`, `0.0`, `""`), `Strict` reports a
//! [`DecodeError`].

use crate::error::DecodeError;
use crate::runtime::ArgumentSource;
use crate::type_tag::{TagCategory, TypeTag};
use crate::value::NativeValue;

/// What to do when an argument cannot be read as its declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    /// Substitute the category's zero value and carry on.
    #[default]
    Lenient,
    /// Fail the call with a script-visible error.
    Strict,
}

impl DecodePolicy {
    pub fn is_strict(self) -> bool {
        matches!(self, DecodePolicy::Strict)
    }
}

/// Decode the argument at 1-indexed `position` as `tag`.
///
/// Returns `Err` only under [`DecodePolicy::Strict`] or for a tag outside the
/// supported set (which binding rejects up front).
pub fn decode<'a, C>(
    tag: &TypeTag,
    position: usize,
    ctx: &'a C,
    policy: DecodePolicy,
) -> Result<NativeValue<'a>, DecodeError>
where
    C: ArgumentSource + ?Sized,
{
    let Some(category) = tag.category() else {
        return Err(DecodeError::Unsupported { tag: tag.clone() });
    };

    let value = match category {
        TagCategory::SignedInt { bits } => {
            let n = wrap_to_u64(read_number(ctx, position, policy)?) as i64;
            match bits {
                8 => NativeValue::I8(n as i8),
                16 => NativeValue::I16(n as i16),
                32 => NativeValue::I32(n as i32),
                _ => NativeValue::I64(n),
            }
        }
        TagCategory::UnsignedInt { bits } => {
            let n = wrap_to_u64(read_number(ctx, position, policy)?);
            match bits {
                8 => NativeValue::U8(n as u8),
                16 => NativeValue::U16(n as u16),
                32 => NativeValue::U32(n as u32),
                _ => NativeValue::U64(n),
            }
        }
        TagCategory::Float { bits: 32 } => {
            NativeValue::F32(read_number(ctx, position, policy)? as f32)
        }
        TagCategory::Float { .. } => NativeValue::F64(read_number(ctx, position, policy)?),
        TagCategory::Text => NativeValue::Text(read_text(ctx, position, policy)?),
    };
    Ok(value)
}

fn read_number<C>(ctx: &C, position: usize, policy: DecodePolicy) -> Result<f64, DecodeError>
where
    C: ArgumentSource + ?Sized,
{
    match ctx.number(position) {
        Some(n) => Ok(n),
        None => fallback(ctx, position, policy, "number", 0.0),
    }
}

fn read_text<'a, C>(
    ctx: &'a C,
    position: usize,
    policy: DecodePolicy,
) -> Result<&'a str, DecodeError>
where
    C: ArgumentSource + ?Sized,
{
    match ctx.text(position) {
        Some(s) => Ok(s),
        None => fallback(ctx, position, policy, "string", ""),
    }
}

fn fallback<C, T>(
    ctx: &C,
    position: usize,
    policy: DecodePolicy,
    expected: &'static str,
    zero: T,
) -> Result<T, DecodeError>
where
    C: ArgumentSource + ?Sized,
{
    let supplied = ctx.arg_count();
    let err = if position == 0 || position > supplied {
        DecodeError::Missing { position, supplied }
    } else {
        DecodeError::TypeMismatch {
            position,
            expected,
            actual: ctx.kind_name(position),
        }
    };

    if policy.is_strict() {
        return Err(err);
    }
    tracing::trace!(%err, "substituting zero value");
    Ok(zero)
}

const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Truncate toward zero and reduce modulo 2^64. Narrower targets then keep
/// the low bits through `as`. NaN and infinities become 0.
fn wrap_to_u64(n: f64) -> u64 {
    if !n.is_finite() {
        return 0;
    }
    // `%` on floats is exact, so `r` is the true remainder with the sign of `n`.
    let r = n.trunc() % TWO_POW_64;
    if r >= TWO_POW_63 {
        r as u64
    } else if r >= -TWO_POW_63 {
        r as i64 as u64
    } else {
        (r + TWO_POW_64) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{CallContext, Dynamic};

    fn one(tag: TypeTag, slot: Dynamic) -> NativeValue<'static> {
        let slots = Box::leak(Box::new([slot]));
        let ctx = Box::leak(Box::new(CallContext::new(slots)));
        decode(&tag, 1, ctx, DecodePolicy::Lenient).unwrap()
    }

    #[test]
    fn u8_wraps_modulo_256() {
        assert_eq!(one(TypeTag::U8, Dynamic::Int(300)), NativeValue::U8(44));
        assert_eq!(one(TypeTag::U8, Dynamic::Float(300.0)), NativeValue::U8(44));
        assert_eq!(one(TypeTag::U8, Dynamic::Int(-1)), NativeValue::U8(255));
        assert_eq!(one(TypeTag::U8, Dynamic::Int(256)), NativeValue::U8(0));
    }

    #[test]
    fn wraps_beyond_64_bits() {
        assert_eq!(
            one(TypeTag::I64, Dynamic::Float(1e19)),
            NativeValue::I64(-8_446_744_073_709_551_616)
        );
        assert_eq!(
            one(TypeTag::U64, Dynamic::Float(-1e19)),
            NativeValue::U64(8_446_744_073_709_551_616)
        );
        assert_eq!(
            one(TypeTag::U8, Dynamic::Float(18_446_744_073_709_555_712.0)),
            NativeValue::U8(0)
        );
        assert_eq!(one(TypeTag::U16, Dynamic::Float(-1e19)), NativeValue::U16(0));
        assert_eq!(
            one(TypeTag::I64, Dynamic::Float(-1e19)),
            NativeValue::I64(8_446_744_073_709_551_616)
        );
    }

    #[test]
    fn non_finite_numbers_become_zero() {
        assert_eq!(one(TypeTag::I32, Dynamic::Float(f64::NAN)), NativeValue::I32(0));
        assert_eq!(one(TypeTag::U64, Dynamic::Float(f64::INFINITY)), NativeValue::U64(0));
        assert_eq!(one(TypeTag::I8, Dynamic::Float(f64::NEG_INFINITY)), NativeValue::I8(0));
    }

    #[test]
    fn signed_narrowing_wraps() {
        assert_eq!(one(TypeTag::I8, Dynamic::Int(200)), NativeValue::I8(-56));
        assert_eq!(one(TypeTag::I16, Dynamic::Int(70000)), NativeValue::I16(4464));
        assert_eq!(one(TypeTag::I32, Dynamic::Int(-5)), NativeValue::I32(-5));
        assert_eq!(
            one(TypeTag::I64, Dynamic::Float(1e15)),
            NativeValue::I64(1_000_000_000_000_000)
        );
    }

    #[test]
    fn fractions_truncate_toward_zero() {
        assert_eq!(one(TypeTag::I32, Dynamic::Float(2.9)), NativeValue::I32(2));
        assert_eq!(one(TypeTag::I32, Dynamic::Float(-2.9)), NativeValue::I32(-2));
        assert_eq!(one(TypeTag::U16, Dynamic::Float(7.5)), NativeValue::U16(7));
    }

    #[test]
    fn unsigned_wide() {
        assert_eq!(one(TypeTag::U32, Dynamic::Int(-1)), NativeValue::U32(u32::MAX));
        assert_eq!(one(TypeTag::U64, Dynamic::Int(-1)), NativeValue::U64(u64::MAX));
        assert_eq!(
            one(TypeTag::U64, Dynamic::Float(1.8e19)),
            NativeValue::U64(18_000_000_000_000_000_000)
        );
    }

    #[test]
    fn floats() {
        assert_eq!(one(TypeTag::F64, Dynamic::Float(0.1)), NativeValue::F64(0.1));
        assert_eq!(one(TypeTag::F32, Dynamic::Float(0.1)), NativeValue::F32(0.1f32));
        assert_eq!(one(TypeTag::F64, Dynamic::Int(3)), NativeValue::F64(3.0));
    }

    #[test]
    fn numeric_strings_coerce() {
        assert_eq!(one(TypeTag::I32, Dynamic::from("12")), NativeValue::I32(12));
        assert_eq!(one(TypeTag::F64, Dynamic::from(" 2.5 ")), NativeValue::F64(2.5));
    }

    #[test]
    fn text_borrows() {
        let slots = [Dynamic::from("hello")];
        let ctx = CallContext::new(&slots);
        let v = decode(&TypeTag::Text, 1, &ctx, DecodePolicy::Lenient).unwrap();
        match v {
            NativeValue::Text(s) => {
                assert_eq!(s, "hello");
                assert!(std::ptr::eq(s.as_ptr(), slots[0].as_text().unwrap().as_ptr()));
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn lenient_fallbacks() {
        let ctx = CallContext::new(&[]);
        assert_eq!(
            decode(&TypeTag::Text, 1, &ctx, DecodePolicy::Lenient).unwrap(),
            NativeValue::Text("")
        );
        assert_eq!(
            decode(&TypeTag::U8, 1, &ctx, DecodePolicy::Lenient).unwrap(),
            NativeValue::U8(0)
        );
        assert_eq!(
            decode(&TypeTag::F32, 2, &ctx, DecodePolicy::Lenient).unwrap(),
            NativeValue::F32(0.0)
        );

        assert_eq!(one(TypeTag::I32, Dynamic::from("hello")), NativeValue::I32(0));
        assert_eq!(one(TypeTag::F64, Dynamic::Bool(true)), NativeValue::F64(0.0));
        assert_eq!(one(TypeTag::Text, Dynamic::Int(5)), NativeValue::Text(""));
        assert_eq!(one(TypeTag::Text, Dynamic::Nil), NativeValue::Text(""));
    }

    #[test]
    fn strict_reports_missing() {
        let slots = [Dynamic::Int(1)];
        let ctx = CallContext::new(&slots);
        let err = decode(&TypeTag::U8, 2, &ctx, DecodePolicy::Strict).unwrap_err();
        assert_eq!(
            err,
            DecodeError::Missing {
                position: 2,
                supplied: 1
            }
        );
    }

    #[test]
    fn strict_reports_mismatch() {
        let slots = [Dynamic::from("abc")];
        let ctx = CallContext::new(&slots);
        let err = decode(&TypeTag::F32, 1, &ctx, DecodePolicy::Strict).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TypeMismatch {
                position: 1,
                expected: "number",
                actual: "string"
            }
        );

        let slots = [Dynamic::Int(3)];
        let ctx = CallContext::new(&slots);
        let err = decode(&TypeTag::Text, 1, &ctx, DecodePolicy::Strict).unwrap_err();
        assert!(matches!(err, DecodeError::TypeMismatch { expected: "string", .. }));
    }

    #[test]
    fn unsupported_tag() {
        let slots = [Dynamic::Bool(true)];
        let ctx = CallContext::new(&slots);
        let err = decode(&TypeTag::Bool, 1, &ctx, DecodePolicy::Lenient).unwrap_err();
        assert_eq!(err, DecodeError::Unsupported { tag: TypeTag::Bool });
    }
}
