//! Arrays cannot cross the script boundary.

#[scriptbind::native_module]
pub mod bad {
    pub fn set_color(rgba: [u8; 4]) {}
}

fn main() {}
