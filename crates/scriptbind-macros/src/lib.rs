//! Scriptbind Proc Macros
//!
//! Compile-time schema extraction for native modules.
//!
//! # Macros
//!
//! - `#[native_module]` - List a module's public items as declarations
//! - `#[function]` - Generate binding metadata for a single function
//!
//! # Example
//!
//! ```ignore
//! #[scriptbind_macros::native_module]
//! pub mod audio {
//!     pub const MAX_CHANNELS: u32 = 32;
//!
//!     pub fn set_volume(channel: u8, level: f32) { /* ... */ }
//!
//!     #[script(name = "play")]
//!     pub fn play_clip(path: &str) { /* ... */ }
//! }
//!
//! ctx.install_native::<audio::Exports>("audio")?;
//! ```

use proc_macro::TokenStream;

mod attrs;
mod function;
mod module;

/// Turn an inline module into a native module.
///
/// Every public item becomes a declaration, in source order:
///
/// - `pub fn` - a bindable function; parameter tags come from `ParamType`
/// - `pub const` / `pub static` - a constant
/// - `pub struct` / `enum` / `union` / `type` / `trait` - a type
/// - `pub mod` - a nested module
///
/// Private items, `use`, `impl` blocks and macro invocations are ignored.
///
/// The macro adds `pub fn __declarations()` and a unit struct `Exports`
/// implementing `NativeModule` to the module.
///
/// # Item Attributes
///
/// - `#[script(name = "...")]` - Override the script-visible name
/// - `#[script(skip)]` - Leave a public item out
///
/// Generic, `async` and `self`-taking functions are rejected, as are
/// parameters of type `bool`, `char`, arrays, slices, tuples, pointers and
/// references other than `&str`.
#[proc_macro_attribute]
pub fn native_module(attr: TokenStream, item: TokenStream) -> TokenStream {
    module::native_module_impl(attr, item)
}

/// Generate binding metadata for a free function.
///
/// Emits a hidden `__scriptbind_<fn>_meta()` returning the function's
/// `ExportedFunction`.
///
/// # Attributes
///
/// - `name = "..."` - Override the script-visible name
///
/// # Example
///
/// ```ignore
/// #[scriptbind_macros::function(name = "spawn")]
/// pub fn spawn_entity(kind: &str, x: f32, y: f32) { /* ... */ }
///
/// let f = __scriptbind_spawn_entity_meta();
/// ```
#[proc_macro_attribute]
pub fn function(attr: TokenStream, item: TokenStream) -> TokenStream {
    function::function_impl(attr, item)
}
