//! Data-driven game balance
//!
//! [`Tuning`] mirrors the gameplay constants in [`crate::consts`]. Every field
//! defaults to its constant, so a config document only needs the values it
//! wants to override.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Gameplay constants that can be overridden at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Gravity given to every spawned body (units/tick², negative = down)
    pub gravity: f32,
    /// Player horizontal speed while a direction is held
    pub player_speed: f32,
    /// Vertical velocity set by a jump
    pub jump_velocity: f32,
    /// Initial spawn interval in ticks
    pub spawn_rate_start: u32,
    /// Amount the interval shrinks on each spawn
    pub spawn_rate_step: u32,
    /// The interval never shrinks below this
    pub spawn_rate_floor: u32,
    /// Probability that a spawn is a bonus box
    pub bonus_chance: f32,
    /// Score granted per bonus pickup
    pub bonus_score: u64,
    /// Enemies spawn at x in [-half_width, half_width)
    pub spawn_half_width: f32,
    /// Spawn depth (negative = far end of the ground)
    pub spawn_z: f32,
    /// Initial forward speed of spawned bodies
    pub spawn_speed_z: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            player_speed: PLAYER_SPEED,
            jump_velocity: JUMP_VELOCITY,
            spawn_rate_start: SPAWN_RATE_START,
            spawn_rate_step: SPAWN_RATE_STEP,
            spawn_rate_floor: SPAWN_RATE_FLOOR,
            bonus_chance: BONUS_CHANCE,
            bonus_score: BONUS_SCORE,
            spawn_half_width: SPAWN_HALF_WIDTH,
            spawn_z: SPAWN_Z,
            spawn_speed_z: SPAWN_SPEED_Z,
        }
    }
}

impl Tuning {
    /// Check every value against its accepted range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.gravity.is_finite() && self.gravity < 0.0) {
            return Err(out_of_range("gravity", self.gravity as f64, "< 0.0"));
        }
        if !(self.player_speed.is_finite() && self.player_speed >= 0.0) {
            return Err(out_of_range("player_speed", self.player_speed as f64, ">= 0.0"));
        }
        if !(self.jump_velocity.is_finite() && self.jump_velocity > 0.0) {
            return Err(out_of_range("jump_velocity", self.jump_velocity as f64, "> 0.0"));
        }
        if self.spawn_rate_floor == 0 {
            return Err(out_of_range("spawn_rate_floor", 0.0, ">= 1"));
        }
        if self.spawn_rate_start < self.spawn_rate_floor {
            return Err(out_of_range(
                "spawn_rate_start",
                self.spawn_rate_start as f64,
                ">= spawn_rate_floor",
            ));
        }
        if !(0.0..=1.0).contains(&self.bonus_chance) {
            return Err(out_of_range("bonus_chance", self.bonus_chance as f64, "0.0 ..= 1.0"));
        }
        if !(self.spawn_half_width.is_finite() && self.spawn_half_width >= 0.0) {
            return Err(out_of_range(
                "spawn_half_width",
                self.spawn_half_width as f64,
                ">= 0.0",
            ));
        }
        if !self.spawn_z.is_finite() {
            return Err(out_of_range("spawn_z", self.spawn_z as f64, "finite"));
        }
        if !self.spawn_speed_z.is_finite() {
            return Err(out_of_range("spawn_speed_z", self.spawn_speed_z as f64, "finite"));
        }
        Ok(())
    }
}

fn out_of_range(name: &'static str, value: f64, expected: &'static str) -> ConfigError {
    ConfigError::OutOfRange {
        name,
        value,
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(Tuning::default().validate(), Ok(()));
    }

    #[test]
    fn test_partial_override() {
        let tuning: Tuning = serde_json::from_str(r#"{ "bonus_chance": 0.5 }"#).unwrap();
        assert_eq!(tuning.bonus_chance, 0.5);
        assert_eq!(tuning.spawn_rate_start, SPAWN_RATE_START);
        assert_eq!(tuning.gravity, GRAVITY);
    }

    #[test]
    fn test_rejects_bad_chance() {
        let tuning = Tuning {
            bonus_chance: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::OutOfRange { name: "bonus_chance", .. })
        ));
    }

    #[test]
    fn test_rejects_zero_floor() {
        let tuning = Tuning {
            spawn_rate_floor: 0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_rejects_start_below_floor() {
        let tuning = Tuning {
            spawn_rate_start: 10,
            spawn_rate_floor: 20,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::OutOfRange { name: "spawn_rate_start", .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite_spawn_speed() {
        let tuning = Tuning {
            spawn_speed_z: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::OutOfRange { name: "spawn_speed_z", .. })
        ));
    }

    #[test]
    fn test_rejects_upward_gravity() {
        let tuning = Tuning {
            gravity: 0.01,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }
}
