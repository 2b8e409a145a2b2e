//! Game state and core simulation types
//!
//! Everything a session needs lives in one [`GameState`], owned by the tick
//! driver. There are no globals, so sessions are reproducible from a seed.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::spawner::Spawner;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticking, scoring and spawning
    Active,
    /// Player hit an enemy. Terminal.
    GameOver,
}

/// Notifications for the renderer, audio and HUD collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new enemy entered the scene
    Spawned { id: u32, bonus: bool },
    /// An enemy left the scene
    Despawned { id: u32 },
    /// The player jumped (jump sound cue)
    Jumped,
    /// A bonus box was collected
    BonusCollected { id: u32 },
    /// The score changed to the given value
    ScoreChanged(u64),
    /// The session ended with the given final score
    GameOver { score: u64 },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Gameplay constants for this session
    pub tuning: Tuning,
    pub score: u64,
    /// Ticks simulated so far
    pub frames: u64,
    pub phase: GamePhase,
    pub spawner: Spawner,
    pub player: Body,
    pub ground: Body,
    /// Live enemies in spawn order
    pub enemies: Vec<Body>,
    /// Events produced since the last drain. Only `drain_events` empties it.
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new session with the given tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let player = Body::cube(PLAYER_SIZE, Vec3::ZERO)
            .with_gravity(tuning.gravity)
            .with_velocity(Vec3::new(0.0, PLAYER_START_VELOCITY_Y, 0.0));
        let ground = Body::new(
            Vec3::new(GROUND_WIDTH, GROUND_HEIGHT, GROUND_DEPTH),
            Vec3::new(0.0, GROUND_Y, 0.0),
        );

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            spawner: Spawner::new(&tuning),
            tuning,
            score: 0,
            frames: 0,
            phase: GamePhase::Active,
            player,
            ground,
            enemies: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Active
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Add points and notify the score display. Ignored after game over.
    pub fn add_score(&mut self, points: u64) {
        if !self.is_active() {
            return;
        }
        self.score += points;
        self.events.push(GameEvent::ScoreChanged(self.score));
    }

    /// Enter the terminal game-over phase (idempotent)
    pub fn end_session(&mut self) {
        if self.is_game_over() {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver { score: self.score });
        log::info!(
            "Game over: score {} after {} frames (seed {})",
            self.score,
            self.frames,
            self.seed
        );
    }

    /// Run the spawner for the current frame
    pub(super) fn run_spawner(&mut self) {
        let spawned = self
            .spawner
            .maybe_spawn(self.frames, &self.tuning, &mut self.rng);

        if let Some(mut body) = spawned {
            body.id = self.next_entity_id();
            log::debug!(
                "Spawned {} #{} at x={:.2} (next interval {})",
                if body.is_bonus() { "bonus" } else { "enemy" },
                body.id,
                body.position.x,
                self.spawner.rate()
            );
            self.events.push(GameEvent::Spawned {
                id: body.id,
                bonus: body.is_bonus(),
            });
            self.enemies.push(body);
        }
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
