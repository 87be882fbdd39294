//! Game state and core simulation types
//!
//! Everything the renderer needs to draw a frame lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::maze::{self, Maze};
use super::rect::Rect;
use crate::consts::*;
use crate::maze_center;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Arena size not known yet, no maze
    Uninitialized,
    /// Ball responds to input
    Playing,
    /// Ball reached the goal; input ignored until reset
    Won,
}

/// Drawable area size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Ball start position for this arena
    pub fn center_of_maze(&self) -> Vec2 {
        maze_center(self.width, self.height)
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub radius: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            radius: BALL_RADIUS,
        }
    }
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self { pos, radius }
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Arena size, set once on first layout
    pub arena: Option<Arena>,
    pub ball: Ball,
    /// Maze walls in generation order
    pub walls: Vec<Rect>,
    pub goal: Option<Rect>,
    /// Rotation rate → movement scale (x uses rotation_y, y uses rotation_x)
    pub sensitivity: Vec2,
    pub won: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(BALL_RADIUS, Vec2::new(SENSITIVITY_X, SENSITIVITY_Y))
    }
}

impl GameState {
    /// Create an uninitialized state; the maze appears on `initialize`
    pub fn new(ball_radius: f32, sensitivity: Vec2) -> Self {
        Self {
            arena: None,
            ball: Ball::new(Vec2::ZERO, ball_radius),
            walls: Vec::new(),
            goal: None,
            sensitivity,
            won: false,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.arena.is_some()
    }

    pub fn phase(&self) -> GamePhase {
        if !self.is_initialized() {
            GamePhase::Uninitialized
        } else if self.won {
            GamePhase::Won
        } else {
            GamePhase::Playing
        }
    }

    /// Generate the maze for an arena and place the ball at its center.
    ///
    /// Returns false (and changes nothing) if the state was already initialized.
    pub fn initialize(&mut self, width: f32, height: f32) -> bool {
        if self.is_initialized() {
            return false;
        }

        let Maze { walls, goal, start } = maze::generate(width, height);
        self.arena = Some(Arena::new(width, height));
        self.walls = walls;
        self.goal = Some(goal);
        self.ball.pos = start;
        self.won = false;
        true
    }

    /// Put the ball back at the maze center and clear the win.
    /// Walls, goal and arena are kept.
    pub fn reset(&mut self) {
        if let Some(arena) = self.arena {
            self.ball.pos = arena.center_of_maze();
            self.won = false;
        }
    }

    /// Whether the ball center is strictly inside the goal
    pub fn ball_in_goal(&self) -> bool {
        self.goal
            .is_some_and(|goal| goal.contains_point_strict(self.ball.pos))
    }
}
