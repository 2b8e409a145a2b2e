//! Cube Dodge - A 3D runner/dodge arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, collisions, spawning, session state)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Browser input handling
//! - `audio`: Jump clip and background music playback
//! - `tuning` / `settings`: Data-driven game balance and configuration
//! - `ui`: Score display

pub mod audio;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use error::ConfigError;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
///
/// All speeds are in world units per tick; the game ticks once per display refresh.
pub mod consts {
    /// Gravity applied to every body (units/tick²)
    pub const GRAVITY: f32 = -0.002;
    /// Vertical velocity is multiplied by this on ground contact (bounce damping)
    pub const RESTITUTION: f32 = 0.5;
    /// Forward speed gained each tick by bodies with z-acceleration
    pub const Z_ACCELERATION: f32 = 0.0003;

    /// Player horizontal speed while a direction is held
    pub const PLAYER_SPEED: f32 = 0.05;
    /// Vertical velocity set by a jump
    pub const JUMP_VELOCITY: f32 = 0.08;
    /// Player starts with a slight downward drift
    pub const PLAYER_START_VELOCITY_Y: f32 = -0.01;
    /// Player cube edge length
    pub const PLAYER_SIZE: f32 = 1.0;

    /// Ground slab (width, height, depth) centered at GROUND_Y
    pub const GROUND_WIDTH: f32 = 10.0;
    pub const GROUND_HEIGHT: f32 = 0.5;
    pub const GROUND_DEPTH: f32 = 50.0;
    pub const GROUND_Y: f32 = -2.0;

    /// Enemy spawning
    pub const SPAWN_RATE_START: u32 = 200;
    pub const SPAWN_RATE_STEP: u32 = 20;
    pub const SPAWN_RATE_FLOOR: u32 = 20;
    pub const BONUS_CHANCE: f32 = 0.1;
    /// Enemies spawn at x in [-SPAWN_HALF_WIDTH, SPAWN_HALF_WIDTH)
    pub const SPAWN_HALF_WIDTH: f32 = 5.0;
    pub const SPAWN_Y: f32 = 0.0;
    pub const SPAWN_Z: f32 = -20.0;
    pub const SPAWN_SPEED_Z: f32 = 0.005;
    pub const ENEMY_SIZE: f32 = 1.0;

    /// Score granted by a bonus box
    pub const BONUS_SCORE: u64 = 100;
    /// Wall-clock interval between time score increments (ms)
    pub const SCORE_INTERVAL_MS: i32 = 1000;

    /// Background music volume
    pub const MUSIC_VOLUME: f32 = 0.3;
}
