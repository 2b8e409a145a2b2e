//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (enemies in spawn order)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod spawner;
pub mod state;
pub mod tick;

pub use body::{Body, BodyKind, Bounds};
pub use collision::intersects;
pub use spawner::Spawner;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, award_time_point, tick};
