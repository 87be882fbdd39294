//! One simulation step per input sample
//!
//! There is no clock: each angular-rate sample moves the ball once.

use glam::Vec2;

use super::collision::{clamp_to_arena, resolve};
use super::state::GameState;

/// One angular-rate reading (rotation rate around the device x and y axes)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    pub rotation_x: f32,
    pub rotation_y: f32,
}

impl TickInput {
    pub fn new(rotation_x: f32, rotation_y: f32) -> Self {
        Self {
            rotation_x,
            rotation_y,
        }
    }

    /// Screen-space displacement for this sample.
    ///
    /// Device axes are swapped relative to the screen: rotation around the
    /// y axis moves the ball horizontally, rotation around x moves it vertically.
    pub fn movement(&self, sensitivity: Vec2) -> Vec2 {
        Vec2::new(
            self.rotation_y * sensitivity.x,
            self.rotation_x * sensitivity.y,
        )
    }
}

/// What a step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Game not running (no maze yet, or already won)
    Ignored,
    Moved,
    /// This step put the ball in the goal
    Won,
}

/// Advance the game state by one input sample
pub fn tick(state: &mut GameState, input: &TickInput) -> StepOutcome {
    let Some(arena) = state.arena else {
        return StepOutcome::Ignored;
    };
    if state.won {
        return StepOutcome::Ignored;
    }

    let radius = state.ball.radius;
    let moved = state.ball.pos + input.movement(state.sensitivity);
    let resolved = resolve(moved, radius, &state.walls);
    state.ball.pos = clamp_to_arena(resolved, radius, arena.width, arena.height);

    if state.ball_in_goal() {
        state.won = true;
        StepOutcome::Won
    } else {
        StepOutcome::Moved
    }
}
