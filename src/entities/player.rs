use super::projectile::Projectile;
use super::rect::Rect;
use crate::constants::{
    PLAYER_BOTTOM_MARGIN, PLAYER_HEIGHT, PLAYER_SPEED, PLAYER_WIDTH, PROJECTILE_HEIGHT,
    PROJECTILE_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// The player cannon. Moves horizontally only; vertical position is fixed
/// near the bottom of the playfield for the whole session.
#[derive(Debug, Clone)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub vx: i32,
}

impl Player {
    /// Spawns the cannon centered at the bottom of the playfield.
    pub fn new() -> Self {
        Self {
            x: SCREEN_WIDTH / 2 - PLAYER_WIDTH / 2,
            y: SCREEN_HEIGHT - PLAYER_BOTTOM_MARGIN - PLAYER_HEIGHT,
            vx: 0,
        }
    }

    /// Clears velocity; called at the start of each frame so that only
    /// directions held this frame move the cannon.
    pub fn halt(&mut self) {
        self.vx = 0;
    }

    /// Sets velocity from held input. Last applied direction wins.
    pub fn steer(&mut self, direction: Direction) {
        self.vx = match direction {
            Direction::Left => -PLAYER_SPEED,
            Direction::Right => PLAYER_SPEED,
        };
    }

    /// Applies velocity, then clamps so the bounding box never leaves
    /// `[0, SCREEN_WIDTH]` horizontally.
    pub fn advance(&mut self) {
        self.x += self.vx;

        if self.x + PLAYER_WIDTH > SCREEN_WIDTH {
            self.x = SCREEN_WIDTH - PLAYER_WIDTH;
        }
        if self.x < 0 {
            self.x = 0;
        }
    }

    /// Spawns a projectile whose bottom edge sits at the cannon's top,
    /// horizontally centered on the cannon.
    pub fn fire(&self) -> Projectile {
        let center_x = self.x + PLAYER_WIDTH / 2;
        Projectile::new(center_x - PROJECTILE_WIDTH / 2, self.y - PROJECTILE_HEIGHT)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_spawns_centered_near_bottom() {
        let player = Player::new();
        assert_eq!(player.x, SCREEN_WIDTH / 2 - PLAYER_WIDTH / 2);
        assert_eq!(player.y, SCREEN_HEIGHT - PLAYER_BOTTOM_MARGIN - PLAYER_HEIGHT);
        assert_eq!(player.vx, 0);
    }

    #[test]
    fn test_player_steer_left_then_advance() {
        let mut player = Player::new();
        let start_x = player.x;
        player.steer(Direction::Left);
        player.advance();
        assert_eq!(player.x, start_x - PLAYER_SPEED);
    }

    #[test]
    fn test_player_steer_right_then_advance() {
        let mut player = Player::new();
        let start_x = player.x;
        player.steer(Direction::Right);
        player.advance();
        assert_eq!(player.x, start_x + PLAYER_SPEED);
    }

    #[test]
    fn test_player_halt_stops_motion() {
        let mut player = Player::new();
        let start_x = player.x;
        player.steer(Direction::Left);
        player.halt();
        player.advance();
        assert_eq!(player.x, start_x);
    }

    #[test]
    fn test_last_applied_direction_wins() {
        let mut player = Player::new();
        player.steer(Direction::Left);
        player.steer(Direction::Right);
        assert_eq!(player.vx, PLAYER_SPEED);
    }

    #[test]
    fn test_player_clamped_at_left_edge() {
        let mut player = Player::new();
        player.x = 3;
        player.steer(Direction::Left);
        player.advance();
        assert_eq!(player.x, 0);
    }

    #[test]
    fn test_player_clamped_at_right_edge() {
        let mut player = Player::new();
        player.x = SCREEN_WIDTH - PLAYER_WIDTH - 3;
        player.steer(Direction::Right);
        player.advance();
        assert_eq!(player.x, SCREEN_WIDTH - PLAYER_WIDTH);
    }

    #[test]
    fn test_fire_centers_projectile_above_cannon() {
        let player = Player::new();
        let projectile = player.fire();
        let bounds = projectile.bounds();
        assert_eq!(bounds.bottom(), player.y);
        assert_eq!(bounds.x + PROJECTILE_WIDTH / 2, player.x + PLAYER_WIDTH / 2);
    }

    // Property-based tests
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_player_box_stays_in_bounds(
                initial_x in 0i32..(SCREEN_WIDTH - PLAYER_WIDTH),
                inputs in prop::collection::vec(
                    prop::option::of(prop::bool::ANY),
                    0..200
                )
            ) {
                let mut player = Player::new();
                player.x = initial_x;
                for input in inputs {
                    player.halt();
                    match input {
                        Some(true) => player.steer(Direction::Right),
                        Some(false) => player.steer(Direction::Left),
                        None => {}
                    }
                    player.advance();
                    prop_assert!(player.bounds().left() >= 0);
                    prop_assert!(player.bounds().right() <= SCREEN_WIDTH);
                }
            }
        }
    }
}
