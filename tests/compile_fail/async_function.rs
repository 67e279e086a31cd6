//! Async functions cannot be bound.

#[scriptbind::native_module]
pub mod bad {
    pub async fn load(id: u32) {}
}

fn main() {}
