//! Keyboard input state
//!
//! Browser key events only flip flags here; the game loop reads a
//! [`TickInput`] snapshot at the top of each frame.

use crate::sim::TickInput;

/// Movement directions on the ground plane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    /// Away from the camera (-z)
    Forward,
    /// Toward the camera (+z)
    Back,
}

/// Logical game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    Jump,
}

/// Map a `KeyboardEvent.code` to an action (WASD and arrows, Space to jump)
pub fn action_for_code(code: &str) -> Option<Action> {
    match code {
        "KeyA" | "ArrowLeft" => Some(Action::Move(Direction::Left)),
        "KeyD" | "ArrowRight" => Some(Action::Move(Direction::Right)),
        "KeyW" | "ArrowUp" => Some(Action::Move(Direction::Forward)),
        "KeyS" | "ArrowDown" => Some(Action::Move(Direction::Back)),
        "Space" => Some(Action::Jump),
        _ => None,
    }
}

/// Held keys plus a one-shot jump latch
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub forward: bool,
    pub back: bool,
    jump_held: bool,
    jump_queued: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press
    ///
    /// Auto-repeat presses while jump is held do not queue another jump.
    pub fn press(&mut self, action: Action) {
        match action {
            Action::Move(dir) => *self.flag(dir) = true,
            Action::Jump => {
                if !self.jump_held {
                    self.jump_queued = true;
                }
                self.jump_held = true;
            }
        }
    }

    /// Handle a key release
    pub fn release(&mut self, action: Action) {
        match action {
            Action::Move(dir) => *self.flag(dir) = false,
            Action::Jump => self.jump_held = false,
        }
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Snapshot for one tick, consuming the queued jump
    pub fn take_tick_input(&mut self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
            forward: self.forward,
            back: self.back,
            jump: std::mem::take(&mut self.jump_queued),
        }
    }

    fn flag(&mut self, dir: Direction) -> &mut bool {
        match dir {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
            Direction::Forward => &mut self.forward,
            Direction::Back => &mut self.back,
        }
    }
}
