//! Game session: the surface the presentation shell talks to
//!
//! Owns the game state, applies shell events one at a time, and hands out
//! snapshots for the renderer to draw.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::platform::AngularRateSource;
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, Rect, StepOutcome, TickInput, tick};

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub ball: Vec2,
    pub ball_radius: f32,
    pub walls: Vec<Rect>,
    pub goal: Option<Rect>,
    pub won: bool,
}

/// A single play session
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    /// Sensor suspended (app in background)
    paused: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl Session {
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: GameState::new(settings.ball_radius, settings.sensitivity()),
            paused: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Drawable area measured. Only the first usable size builds the maze.
    ///
    /// A size is usable when both sides are finite and wider than the ball.
    pub fn on_arena_sized(&mut self, width: f32, height: f32) -> bool {
        let radius = self.state.ball.radius;
        let fits = width.is_finite() && height.is_finite() && width.min(height) > 2.0 * radius;
        if !fits {
            log::warn!(
                "Arena {}x{} can't hold a ball of radius {}, ignoring",
                width,
                height,
                radius
            );
            return false;
        }
        if !self.state.initialize(width, height) {
            log::debug!("Arena already sized, ignoring {}x{}", width, height);
            return false;
        }
        log::info!(
            "Maze generated for {}x{} arena ({} walls)",
            width,
            height,
            self.state.walls.len()
        );
        true
    }

    /// Apply one angular-rate sample
    pub fn on_input_sample(&mut self, rotation_x: f32, rotation_y: f32) -> StepOutcome {
        if self.paused {
            return StepOutcome::Ignored;
        }
        let outcome = tick(&mut self.state, &TickInput::new(rotation_x, rotation_y));
        if outcome == StepOutcome::Won {
            log::info!(
                "Goal reached at ({:.1}, {:.1})",
                self.state.ball.pos.x,
                self.state.ball.pos.y
            );
        }
        outcome
    }

    pub fn on_reset_requested(&mut self) {
        if !self.state.is_initialized() {
            log::debug!("Reset before arena sized, ignoring");
            return;
        }
        self.state.reset();
        log::info!("Game reset");
    }

    /// Shell went to the background; sensor samples stop counting
    pub fn on_pause(&mut self) {
        self.paused = true;
    }

    pub fn on_resume(&mut self) {
        self.paused = false;
    }

    /// Feed every sample from a source in order. Returns how many moved the game.
    pub fn drain(&mut self, source: &mut impl AngularRateSource) -> usize {
        self.drain_with(source, |_, _| {})
    }

    /// Like `drain`, calling `on_step` with each applied outcome and the
    /// running count of applied samples.
    pub fn drain_with(
        &mut self,
        source: &mut impl AngularRateSource,
        mut on_step: impl FnMut(StepOutcome, usize),
    ) -> usize {
        let mut applied = 0;
        while let Some(sample) = source.next_sample() {
            let outcome = self.on_input_sample(sample.rotation_x, sample.rotation_y);
            if outcome != StepOutcome::Ignored {
                applied += 1;
                on_step(outcome, applied);
            }
        }
        applied
    }

    pub fn ball(&self) -> Vec2 {
        self.state.ball.pos
    }

    pub fn walls(&self) -> &[Rect] {
        &self.state.walls
    }

    pub fn goal(&self) -> Option<Rect> {
        self.state.goal
    }

    pub fn won(&self) -> bool {
        self.state.won
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.state.phase(),
            ball: self.state.ball.pos,
            ball_radius: self.state.ball.radius,
            walls: self.state.walls.clone(),
            goal: self.state.goal,
            won: self.state.won,
        }
    }
}
