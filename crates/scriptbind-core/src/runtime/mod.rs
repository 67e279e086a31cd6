//! Runtime side of the bridge.
//!
//! ## Key Types
//!
//! - [`Dynamic`]: script-side value held in an argument slot
//! - [`ArgumentSource`]: what a scripting runtime must expose per call
//! - [`CallContext`]: `ArgumentSource` over a slice of `Dynamic` slots
//! - [`Adapter`]: type-erased wrapper that decodes and calls a native function

mod call_context;
mod dynamic;
mod native_fn;

pub use call_context::{ArgumentSource, CallContext};
pub use dynamic::Dynamic;
pub use native_fn::Adapter;
