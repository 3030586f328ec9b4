mod enemy;
mod game_state;
mod player;
mod projectile;
mod rect;

// Re-export all public types
pub use enemy::Enemy;
pub use game_state::{GameState, Outcome};
pub use player::{Direction, Player};
pub use projectile::Projectile;
pub use rect::Rect;
