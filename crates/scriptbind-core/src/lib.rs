//! Core types for the scriptbind native-to-script bridge.
//!
//! This crate holds everything both sides of the boundary agree on:
//!
//! - [`TypeTag`]: semantic parameter types and which of them can be bound
//! - [`Dynamic`] and [`ArgumentSource`]: the script caller's view of arguments
//! - [`decode`]: the type-directed argument decoder
//! - [`ExportedFunction`], [`Declaration`], [`NativeModule`]: what a native
//!   module exposes
//! - [`Adapter`]: the generated wrapper invoked by the scripting runtime
//!
//! Binding generation and registration live in `scriptbind-registry`.

mod binding_hash;
mod declaration;
mod decode;
mod error;
pub mod runtime;
mod type_tag;
mod value;

pub use binding_hash::BindingHash;
pub use declaration::{Declaration, ExportedFunction, NativeCallable, NativeModule};
pub use decode::{DecodePolicy, decode};
pub use error::{BindError, DecodeError, NativeError, TagParseError};
pub use runtime::{Adapter, ArgumentSource, CallContext, Dynamic};
pub use type_tag::{TagCategory, TypeTag};
pub use value::{Arguments, FromNative, NativeValue, ParamType};
