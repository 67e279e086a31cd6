//! `#[native_module]` takes no arguments.

#[scriptbind::native_module(strict)]
pub mod bad {
    pub fn start() {}
}

fn main() {}
