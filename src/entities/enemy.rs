use rand::Rng;

use super::rect::Rect;
use crate::constants::{
    ENEMY_DESPAWN_MARGIN, ENEMY_HEIGHT, ENEMY_SPAWN_Y_RANGE, ENEMY_SPEED_RANGE, ENEMY_WIDTH,
    SCREEN_HEIGHT, SCREEN_WIDTH,
};

/// A descending enemy. Speed is fixed at spawn time and never changes.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
    pub speed: i32,
}

impl Enemy {
    pub fn new(x: i32, y: i32, speed: i32) -> Self {
        Self { x, y, speed }
    }

    /// Spawns an enemy above the visible playfield with randomized
    /// horizontal position, stagger and descent speed.
    pub fn spawn(rng: &mut impl Rng) -> Self {
        Self {
            x: rng.random_range(0..=SCREEN_WIDTH - ENEMY_WIDTH),
            y: rng.random_range(ENEMY_SPAWN_Y_RANGE),
            speed: rng.random_range(ENEMY_SPEED_RANGE),
        }
    }

    pub fn advance(&mut self) {
        self.y += self.speed;
    }

    /// The enemy has fallen past the floor plus margin and can be evicted.
    pub fn is_expired(&self) -> bool {
        self.y > SCREEN_HEIGHT + ENEMY_DESPAWN_MARGIN
    }

    /// The enemy's top edge has reached the floor: the loss condition.
    pub fn has_breached(&self) -> bool {
        self.y >= SCREEN_HEIGHT
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, ENEMY_WIDTH, ENEMY_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_enemy_advances_by_its_speed() {
        let mut enemy = Enemy::new(100, -40, 3);
        enemy.advance();
        assert_eq!(enemy.y, -37);
        enemy.advance();
        assert_eq!(enemy.y, -34);
    }

    #[test]
    fn test_enemy_breach_at_floor() {
        let mut enemy = Enemy::new(100, SCREEN_HEIGHT - 1, 1);
        assert!(!enemy.has_breached());
        enemy.advance();
        assert!(enemy.has_breached());
    }

    #[test]
    fn test_enemy_breaches_before_expiring() {
        let enemy = Enemy::new(100, SCREEN_HEIGHT, 1);
        assert!(enemy.has_breached());
        assert!(!enemy.is_expired());

        let gone = Enemy::new(100, SCREEN_HEIGHT + ENEMY_DESPAWN_MARGIN + 1, 1);
        assert!(gone.is_expired());
    }

    #[test]
    fn test_spawn_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let enemy = Enemy::spawn(&mut rng);
            assert!(enemy.x >= 0);
            assert!(enemy.x + ENEMY_WIDTH <= SCREEN_WIDTH);
            assert!(ENEMY_SPAWN_Y_RANGE.contains(&enemy.y));
            assert!(ENEMY_SPEED_RANGE.contains(&enemy.speed));
        }
    }

    #[test]
    fn test_unobstructed_descent_frame_count() {
        // Spawned at y = -40 with speed 5, the top edge reaches the floor
        // after exactly 128 frames: -40 + 5 * 128 = 600.
        let mut enemy = Enemy::new(0, -40, 5);
        let mut frames = 0;
        while !enemy.has_breached() {
            enemy.advance();
            frames += 1;
        }
        assert_eq!(frames, 128);
        assert_eq!(enemy.y, SCREEN_HEIGHT);
    }

    // Property-based tests
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_enemy_y_strictly_increases(
                start_y in -100i32..0,
                speed in 2i32..5,
                frames in 1usize..300
            ) {
                let mut enemy = Enemy::new(0, start_y, speed);
                let mut prev_y = enemy.y;
                for _ in 0..frames {
                    enemy.advance();
                    prop_assert_eq!(enemy.y, prev_y + speed);
                    prev_y = enemy.y;
                }
            }
        }
    }
}
