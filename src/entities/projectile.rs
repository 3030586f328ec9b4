use super::rect::Rect;
use crate::constants::{PROJECTILE_HEIGHT, PROJECTILE_SPEED, PROJECTILE_WIDTH};

/// A cannon shot travelling straight up at a fixed speed.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub x: i32,
    pub y: i32,
}

impl Projectile {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn advance(&mut self) {
        self.y -= PROJECTILE_SPEED;
    }

    /// The shot's bottom edge has left the top of the playfield.
    pub fn is_expired(&self) -> bool {
        self.y + PROJECTILE_HEIGHT < 0
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, PROJECTILE_WIDTH, PROJECTILE_HEIGHT)
    }
}
