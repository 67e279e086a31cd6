//! Unknown `#[script(...)]` key.

#[scriptbind::native_module]
pub mod bad {
    #[script(rename = "go")]
    pub fn start() {}
}

fn main() {}
