//! Per-frame simulation tick
//!
//! Core game loop that advances the session by one display frame.

use super::collision::intersects;
use super::state::{GameEvent, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub forward: bool,
    pub back: bool,
    /// Jump was pressed since the previous tick (edge, not level)
    pub jump: bool,
}

/// Advance the game state by one frame
///
/// Does nothing once the session is over. Events accumulate in
/// `state.events` until the caller drains them with
/// [`GameState::drain_events`]; a driver that never drains grows the queue
/// without bound.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if !state.is_active() {
        return;
    }

    // Horizontal velocity comes straight from held keys, no coasting
    let speed = state.tuning.player_speed;
    state.player.velocity.x = if input.left {
        -speed
    } else if input.right {
        speed
    } else {
        0.0
    };
    state.player.velocity.z = if input.back {
        speed
    } else if input.forward {
        -speed
    } else {
        0.0
    };

    if input.jump {
        state.player.velocity.y = state.tuning.jump_velocity;
        state.events.push(GameEvent::Jumped);
    }

    state.player.update(&state.ground);

    let mut i = 0;
    while i < state.enemies.len() {
        state.enemies[i].update(&state.ground);

        if !intersects(&state.player, &state.enemies[i]) {
            i += 1;
            continue;
        }

        if state.enemies[i].is_bonus() {
            // Removing shifts the next enemy into slot i
            let bonus = state.enemies.remove(i);
            state.add_score(state.tuning.bonus_score);
            state.events.push(GameEvent::BonusCollected { id: bonus.id });
            state.events.push(GameEvent::Despawned { id: bonus.id });
            log::info!("Bonus #{} collected, score {}", bonus.id, state.score);
        } else {
            state.end_session();
            return;
        }
    }

    state.run_spawner();
    state.frames += 1;
}

/// Award one point of time score (driven by a wall-clock timer)
///
/// Returns false once the session is over; the score never moves again.
pub fn award_time_point(state: &mut GameState) -> bool {
    if !state.is_active() {
        return false;
    }
    state.add_score(1);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::body::{Body, BodyKind};
    use crate::sim::state::GamePhase;
    use crate::tuning::Tuning;
    use glam::Vec3;

    /// A session past frame 0 whose spawner will not fire during a test
    fn quiet_state() -> GameState {
        let mut state = GameState::with_tuning(
            1,
            Tuning {
                spawn_rate_start: 1_000_000,
                spawn_rate_floor: 1_000_000,
                ..Default::default()
            },
        );
        state.frames = 1;
        state
    }

    fn box_at_player(state: &mut GameState, kind: BodyKind) {
        let id = state.next_entity_id();
        let body = Body::cube(ENEMY_SIZE, state.player.position)
            .with_id(id)
            .with_kind(kind);
        state.enemies.push(body);
    }

    #[test]
    fn test_first_tick_spawns() {
        let mut state = GameState::new(12345);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.frames, 1);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.spawner.rate(), SPAWN_RATE_START - SPAWN_RATE_STEP);
        assert!(matches!(state.events[0], GameEvent::Spawned { .. }));
    }

    #[test]
    fn test_horizontal_input() {
        let mut state = quiet_state();

        let input = TickInput {
            left: true,
            back: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.player.velocity.x, -PLAYER_SPEED);
        assert_eq!(state.player.velocity.z, PLAYER_SPEED);
        assert!((state.player.position.x + PLAYER_SPEED).abs() < 1e-6);

        // Left wins over right, back wins over forward
        let input = TickInput {
            left: true,
            right: true,
            forward: true,
            back: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.player.velocity.x, -PLAYER_SPEED);
        assert_eq!(state.player.velocity.z, PLAYER_SPEED);

        let input = TickInput {
            right: true,
            forward: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.player.velocity.x, PLAYER_SPEED);
        assert_eq!(state.player.velocity.z, -PLAYER_SPEED);

        // Releasing everything stops the player immediately
        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.velocity.x, 0.0);
        assert_eq!(state.player.velocity.z, 0.0);
    }

    #[test]
    fn test_jump() {
        let mut state = quiet_state();
        state.drain_events();

        let input = TickInput {
            jump: true,
            ..Default::default()
        };
        let y_before = state.player.position.y;
        tick(&mut state, &input);

        let expected_vy = JUMP_VELOCITY + GRAVITY;
        assert!((state.player.velocity.y - expected_vy).abs() < 1e-6);
        assert!(state.player.position.y > y_before);
        assert!(state.events.contains(&GameEvent::Jumped));
    }

    #[test]
    fn test_three_bonus_pickups() {
        let mut state = quiet_state();
        for _ in 0..3 {
            box_at_player(&mut state, BodyKind::Bonus);
        }

        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 3 * BONUS_SCORE);
        assert!(state.enemies.is_empty());
        assert_eq!(state.phase, GamePhase::Active);

        // Time points accrue alongside
        assert!(award_time_point(&mut state));
        assert!(award_time_point(&mut state));
        assert_eq!(state.score, 3 * BONUS_SCORE + 2);

        let collected = state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::BonusCollected { .. }))
            .count();
        let despawned = state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::Despawned { .. }))
            .count();
        assert_eq!(collected, 3);
        assert_eq!(despawned, 3);
    }

    #[test]
    fn test_bonus_removal_keeps_order() {
        let mut state = quiet_state();
        let far = |state: &mut GameState, x: f32| {
            let id = state.next_entity_id();
            state
                .enemies
                .push(Body::cube(ENEMY_SIZE, Vec3::new(x, 0.0, -10.0)).with_id(id));
            id
        };
        let first = far(&mut state, -4.0);
        box_at_player(&mut state, BodyKind::Bonus);
        let last = far(&mut state, 4.0);

        tick(&mut state, &TickInput::default());
        let ids: Vec<u32> = state.enemies.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![first, last]);
    }

    #[test]
    fn test_enemy_contact_ends_session() {
        let mut state = quiet_state();
        tick(&mut state, &TickInput::default());
        award_time_point(&mut state);
        let frames = state.frames;

        box_at_player(&mut state, BodyKind::Normal);
        tick(&mut state, &TickInput::default());

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.frames, frames, "game-over tick stops before the frame counter");
        assert!(state.events.contains(&GameEvent::GameOver { score: 1 }));

        // Nothing moves or scores afterwards
        let player_pos = state.player.position;
        for _ in 0..10 {
            tick(&mut state, &TickInput {
                left: true,
                jump: true,
                ..Default::default()
            });
            assert!(!award_time_point(&mut state));
        }
        assert_eq!(state.score, 1);
        assert_eq!(state.frames, frames);
        assert_eq!(state.player.position, player_pos);
    }

    #[test]
    fn test_events_accumulate_until_drained() {
        let mut state = quiet_state();
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        for _ in 0..3 {
            tick(&mut state, &jump);
        }
        assert_eq!(state.events.len(), 3);

        let drained = state.drain_events();
        assert_eq!(drained, vec![GameEvent::Jumped; 3]);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_enemy_z_velocity_after_100_ticks() {
        let mut state = quiet_state();
        let id = state.next_entity_id();
        state.enemies.push(
            Body::cube(ENEMY_SIZE, Vec3::new(4.0, SPAWN_Y, SPAWN_Z))
                .with_id(id)
                .with_velocity(Vec3::new(0.0, 0.0, SPAWN_SPEED_Z))
                .with_z_acceleration(true),
        );

        for _ in 0..100 {
            tick(&mut state, &TickInput::default());
        }

        let enemy = state.enemies.iter().find(|e| e.id == id).unwrap();
        let expected = SPAWN_SPEED_Z + 100.0 * Z_ACCELERATION;
        assert!((enemy.velocity.z - expected).abs() < 1e-5);
    }

    #[test]
    fn test_player_settles_on_ground() {
        let mut state = quiet_state();
        for _ in 0..2000 {
            tick(&mut state, &TickInput::default());
        }
        let gap = state.player.bounds().bottom - state.ground.bounds().top;
        assert!((0.0..0.01).contains(&gap), "gap {}", gap);
        assert!(state.player.velocity.y.abs() < 0.01);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput {
                left: true,
                ..Default::default()
            },
            TickInput {
                jump: true,
                ..Default::default()
            },
            TickInput {
                right: true,
                forward: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for i in 0..1200 {
            let input = &inputs[(i / 50) % inputs.len()];
            tick(&mut state1, input);
            tick(&mut state2, input);
        }

        assert_eq!(state1.frames, state2.frames);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.phase, state2.phase);
        assert_eq!(state1.enemies.len(), state2.enemies.len());
        for (a, b) in state1.enemies.iter().zip(&state2.enemies) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.kind, b.kind);
            assert_eq!(a.position, b.position);
        }
    }
}
