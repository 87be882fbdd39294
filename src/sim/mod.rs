//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per input sample, no wall-clock time
//! - No randomness in maze generation
//! - Stable wall order (generation order) for collision resolution
//! - No rendering or platform dependencies

pub mod collision;
pub mod maze;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, Side, clamp_to_arena, resolve, resolve_wall};
pub use maze::{Maze, WALL_COUNT, generate};
pub use rect::Rect;
pub use state::{Arena, Ball, GamePhase, GameState};
pub use tick::{StepOutcome, TickInput, tick};
