//! Unknown `#[function(...)]` key.

#[scriptbind::function(alias = "go")]
pub fn start() {}

fn main() {}
