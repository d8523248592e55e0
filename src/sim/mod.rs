//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per call, counted in frames rather than wall time
//! - Seeded RNG only
//! - Stable iteration order (collection order)
//! - Reports `GameEvent`s instead of playing sounds; drawing happens in `scene`

pub mod collision;
pub mod movement;
pub mod rect;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::collide;
pub use rect::Rect;
pub use state::{
    Bullet, Collidable, Direction, Enemy, ExpFragment, Familiar, Flash, GameEvent, Player, World,
};
pub use tick::tick;
