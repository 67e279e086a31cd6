//! `impl Trait` parameters cannot be bound.

#[scriptbind::native_module]
pub mod bad {
    pub fn each(callback: impl Fn(u32)) {}
}

fn main() {}
