// Library exports for testing
pub use entities::{Direction, Enemy, GameState, Outcome, Player, Projectile, Rect};
pub use score::{ScoreRecord, ScoreStore};

pub mod app;
pub mod constants;
pub mod entities;
pub mod input;
pub mod renderer;
pub mod score;
