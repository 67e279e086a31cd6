//! Booleans cannot cross the script boundary.

#[scriptbind::native_module]
pub mod bad {
    pub fn set_visible(visible: bool) {}
}

fn main() {}
