//! Fixed gameplay constants. All positions and sizes live in a logical
//! 800x600 playfield; the renderer scales to terminal cells each frame.

use std::ops::{Range, RangeInclusive};
use std::time::Duration;

pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;

/// Target frame budget (~60 FPS).
pub const FRAME_BUDGET: Duration = Duration::from_millis(16);

pub const PLAYER_SPEED: i32 = 8;
pub const PROJECTILE_SPEED: i32 = 7;

pub const PLAYER_WIDTH: i32 = 50;
pub const PLAYER_HEIGHT: i32 = 40;
/// Gap between the player's bottom edge and the floor of the playfield.
pub const PLAYER_BOTTOM_MARGIN: i32 = 10;

pub const ENEMY_WIDTH: i32 = 40;
pub const ENEMY_HEIGHT: i32 = 40;
/// Downward speed picked per enemy at spawn time.
pub const ENEMY_SPEED_RANGE: Range<i32> = 2..5;
/// Enemies spawn staggered above the visible playfield.
pub const ENEMY_SPAWN_Y_RANGE: RangeInclusive<i32> = -100..=-40;
/// An enemy this far past the floor despawns (the loss check fires first).
pub const ENEMY_DESPAWN_MARGIN: i32 = 10;

pub const PROJECTILE_WIDTH: i32 = 10;
pub const PROJECTILE_HEIGHT: i32 = 20;

/// One enemy per second, wall clock.
pub const SPAWN_INTERVAL: Duration = Duration::from_millis(1000);

/// Destroying this many enemies wins the session.
pub const WIN_SCORE: u32 = 20;

pub const MAX_NAME_LEN: usize = 10;
pub const LEADERBOARD_SIZE: u32 = 5;
