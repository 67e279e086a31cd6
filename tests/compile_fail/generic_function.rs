//! Generic functions cannot be bound.

#[scriptbind::native_module]
pub mod bad {
    pub fn convert<T: Default>(value: T) -> T {
        value
    }
}

fn main() {}
