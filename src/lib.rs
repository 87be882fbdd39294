//! Tilt Maze - steer a ball through a maze by tilting the device
//!
//! Core modules:
//! - `sim`: Deterministic simulation (maze, collisions, game state)
//! - `platform`: Angular-rate input sources
//! - `session`: Shell-facing lifecycle and state readout
//! - `settings`: Tunable sensitivity and ball size

pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::{Session, Snapshot};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Ball radius in arena units
    pub const BALL_RADIUS: f32 = 15.0;

    /// Rotation rate → movement scale, per axis
    pub const SENSITIVITY_X: f32 = 5.0;
    pub const SENSITIVITY_Y: f32 = 5.0;

    /// Fraction of the smaller arena side covered by the maze
    pub const MAZE_FILL: f32 = 0.8;
    pub const WALL_THICKNESS: f32 = 10.0;

    /// Goal square, inset from the maze's bottom-right corner
    pub const GOAL_SIZE: f32 = 20.0;
    pub const GOAL_INSET: f32 = 10.0;

    /// Tolerance used when checking wall penetration
    pub const PENETRATION_EPSILON: f32 = 1e-3;
}

/// Side length of the square maze for an arena
#[inline]
pub fn maze_size(width: f32, height: f32) -> f32 {
    width.min(height) * consts::MAZE_FILL
}

/// Top-left corner of the maze, centered in the arena
#[inline]
pub fn maze_origin(width: f32, height: f32) -> Vec2 {
    let size = maze_size(width, height);
    Vec2::new((width - size) / 2.0, (height - size) / 2.0)
}

/// Center of the maze (ball start position)
#[inline]
pub fn maze_center(width: f32, height: f32) -> Vec2 {
    maze_origin(width, height) + Vec2::splat(maze_size(width, height) / 2.0)
}
