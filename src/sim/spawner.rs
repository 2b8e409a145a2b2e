//! Enemy spawning
//!
//! A new box appears at the far end of the ground every `rate` ticks. Each
//! spawn shortens the interval until it reaches the floor.

use glam::Vec3;
use rand::Rng;

use super::body::{Body, BodyKind};
use crate::consts::{ENEMY_SIZE, SPAWN_Y};
use crate::tuning::Tuning;

/// Spawn cadence tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawner {
    rate: u32,
}

impl Spawner {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            rate: tuning.spawn_rate_start.max(1),
        }
    }

    /// Current spawn interval in ticks
    #[inline]
    pub fn rate(&self) -> u32 {
        self.rate
    }

    /// True on ticks where a spawn is due
    #[inline]
    pub fn is_due(&self, frames: u64) -> bool {
        frames % self.rate as u64 == 0
    }

    /// Shrink the interval by one step, never below the floor
    pub fn tighten(&mut self, tuning: &Tuning) {
        let floor = tuning.spawn_rate_floor.max(1);
        if self.rate > floor {
            self.rate = self.rate.saturating_sub(tuning.spawn_rate_step).max(floor);
        }
    }

    /// Spawn a body if one is due on this frame
    ///
    /// The returned body has id 0; the caller assigns the entity ID.
    pub fn maybe_spawn<R: Rng>(&mut self, frames: u64, tuning: &Tuning, rng: &mut R) -> Option<Body> {
        if !self.is_due(frames) {
            return None;
        }
        self.tighten(tuning);
        Some(spawn_body(tuning, rng, 0))
    }
}

/// Create an oncoming box at a random lane position
///
/// Draws the bonus roll first, then the x position.
pub fn spawn_body<R: Rng>(tuning: &Tuning, rng: &mut R, id: u32) -> Body {
    let kind = if rng.random::<f32>() < tuning.bonus_chance {
        BodyKind::Bonus
    } else {
        BodyKind::Normal
    };
    let x = (rng.random::<f32>() - 0.5) * 2.0 * tuning.spawn_half_width;

    Body::cube(ENEMY_SIZE, Vec3::new(x, SPAWN_Y, tuning.spawn_z))
        .with_id(id)
        .with_kind(kind)
        .with_gravity(tuning.gravity)
        .with_velocity(Vec3::new(0.0, 0.0, tuning.spawn_speed_z))
        .with_z_acceleration(true)
}
