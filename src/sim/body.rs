//! Axis-aligned box bodies
//!
//! Every simulated object (player, ground, enemies, bonus boxes) is a [`Body`]:
//! a box with fixed dimensions, a position, a velocity and per-tick gravity.
//! Its face bounds are derived from position and size and refreshed whenever
//! the position changes.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::collision::intersects;
use crate::consts::{GRAVITY, RESTITUTION, Z_ACCELERATION};

/// What happens when the player touches this body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BodyKind {
    /// Ends the session on contact
    #[default]
    Normal,
    /// Grants bonus score and disappears on contact
    Bonus,
}

/// Face positions of an axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub back: f32,
    pub front: f32,
}

impl Bounds {
    /// Bounds of a box of `size` centered on `center`
    pub fn from_center(center: Vec3, size: Vec3) -> Self {
        let half = size / 2.0;
        Self {
            left: center.x - half.x,
            right: center.x + half.x,
            bottom: center.y - half.y,
            top: center.y + half.y,
            back: center.z - half.z,
            front: center.z + half.z,
        }
    }
}

/// A simulated axis-aligned box
#[derive(Debug, Clone)]
pub struct Body {
    /// Entity ID pairing the body with its visual (0 for scenery)
    pub id: u32,
    pub kind: BodyKind,
    /// Width, height, depth. Fixed at creation.
    size: Vec3,
    pub position: Vec3,
    pub velocity: Vec3,
    /// Added to velocity.y every tick
    pub gravity: f32,
    /// Gain forward (z) speed every tick
    pub z_acceleration: bool,
    bounds: Bounds,
}

impl Body {
    /// Create a body at rest with default gravity
    pub fn new(size: Vec3, position: Vec3) -> Self {
        debug_assert!(size.cmpgt(Vec3::ZERO).all(), "body dimensions must be positive");
        Self {
            id: 0,
            kind: BodyKind::Normal,
            size,
            position,
            velocity: Vec3::ZERO,
            gravity: GRAVITY,
            z_acceleration: false,
            bounds: Bounds::from_center(position, size),
        }
    }

    /// Cube with equal edges
    pub fn cube(edge: f32, position: Vec3) -> Self {
        Self::new(Vec3::splat(edge), position)
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_kind(mut self, kind: BodyKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_z_acceleration(mut self, enabled: bool) -> Self {
        self.z_acceleration = enabled;
        self
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.size
    }

    #[inline]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// True for bonus boxes
    #[inline]
    pub fn is_bonus(&self) -> bool {
        self.kind == BodyKind::Bonus
    }

    /// Recompute face bounds from the current position
    pub fn update_bounds(&mut self) {
        self.bounds = Bounds::from_center(self.position, self.size);
    }

    /// Advance one tick: forward acceleration, horizontal motion, then gravity
    pub fn update(&mut self, ground: &Body) {
        self.update_bounds();

        if self.z_acceleration {
            self.velocity.z += Z_ACCELERATION;
        }

        self.position.x += self.velocity.x;
        self.position.z += self.velocity.z;

        self.apply_gravity(ground);
    }

    /// Accumulate gravity, then either bounce off `ground` or keep falling
    ///
    /// The contact test looks one step ahead, so a body about to land bounces
    /// from its current height instead of sinking into the ground.
    pub fn apply_gravity(&mut self, ground: &Body) {
        self.update_bounds();
        self.velocity.y += self.gravity;

        if intersects(self, ground) {
            // Position stays put on contact
            self.velocity.y *= -RESTITUTION;
        } else {
            self.position.y += self.velocity.y;
            self.update_bounds();
        }
    }
}
