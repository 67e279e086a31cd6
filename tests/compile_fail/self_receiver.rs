//! Methods taking `self` cannot be bound.

pub struct Player;

impl Player {
    #[scriptbind::function]
    pub fn jump(&self) {}
}

fn main() {
    let _ = Player;
}
