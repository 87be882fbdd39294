//! Maze layout
//!
//! The maze is a fixed square layout scaled to the arena: a perimeter, four
//! horizontal and four vertical interior walls, and a small goal square in the
//! bottom-right corner. No randomness; the same arena always yields the same maze.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::{maze_center, maze_origin, maze_size};

/// Interior horizontal walls as (left, top, right) fractions of the maze size.
/// Bottom is `top + WALL_THICKNESS`.
const HORIZONTAL_WALLS: [(f32, f32, f32); 4] = [
    (0.0, 0.25, 0.5),
    (0.6, 0.25, 1.0),
    (0.5, 0.5, 0.9),
    (0.0, 0.75, 0.8),
];

/// Interior vertical walls as (left, top, bottom) fractions of the maze size.
/// Right is `left + WALL_THICKNESS`.
const VERTICAL_WALLS: [(f32, f32, f32); 4] = [
    (0.5, 0.0, 0.15),
    (0.75, 0.25, 0.5),
    (0.33, 0.5, 0.75),
    (0.8, 0.75, 1.0),
];

/// Number of walls in every generated maze
pub const WALL_COUNT: usize = 4 + HORIZONTAL_WALLS.len() + VERTICAL_WALLS.len();

/// A generated maze
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Maze {
    /// Walls in generation order: perimeter, horizontal, vertical
    pub walls: Vec<Rect>,
    pub goal: Rect,
    /// Initial ball position (maze center)
    pub start: Vec2,
}

/// Build the maze for an arena of the given size.
///
/// Sizes must be positive; anything else produces degenerate rectangles.
pub fn generate(width: f32, height: f32) -> Maze {
    let size = maze_size(width, height);
    let origin = maze_origin(width, height);
    let (sx, sy) = (origin.x, origin.y);
    let t = WALL_THICKNESS;

    let mut walls = Vec::with_capacity(WALL_COUNT);

    // Perimeter: top, bottom, left, right
    walls.push(Rect::new(sx, sy, sx + size, sy + t));
    walls.push(Rect::new(sx, sy + size - t, sx + size, sy + size));
    walls.push(Rect::new(sx, sy, sx + t, sy + size));
    walls.push(Rect::new(sx + size - t, sy, sx + size, sy + size));

    walls.extend(HORIZONTAL_WALLS.iter().map(|&(left, top, right)| {
        let y = sy + size * top;
        Rect::new(sx + size * left, y, sx + size * right, y + t)
    }));

    walls.extend(VERTICAL_WALLS.iter().map(|&(left, top, bottom)| {
        let x = sx + size * left;
        Rect::new(x, sy + size * top, x + t, sy + size * bottom)
    }));

    let goal_far = sx + size - GOAL_INSET;
    let goal_far_y = sy + size - GOAL_INSET;
    let goal = Rect::new(
        goal_far - GOAL_SIZE,
        goal_far_y - GOAL_SIZE,
        goal_far,
        goal_far_y,
    );

    Maze {
        walls,
        goal,
        start: maze_center(width, height),
    }
}

/// Bounds of the whole maze (the outer edge of the perimeter walls)
pub fn maze_bounds(width: f32, height: f32) -> Rect {
    Rect::from_origin_size(
        maze_origin(width, height),
        Vec2::splat(maze_size(width, height)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_wall_count_and_shape() {
        let maze = generate(400.0, 400.0);
        assert_eq!(maze.walls.len(), 12);
        assert_eq!(WALL_COUNT, 12);
        for wall in &maze.walls {
            assert!(wall.is_well_formed(), "degenerate wall {:?}", wall);
        }
    }

    #[test]
    fn test_generate_goal_inside_maze() {
        let maze = generate(400.0, 400.0);
        assert!((maze.goal.width() - 20.0).abs() < 0.001);
        assert!((maze.goal.height() - 20.0).abs() < 0.001);
        assert!(maze_bounds(400.0, 400.0).contains_rect(&maze.goal));
        assert_eq!(maze.goal, Rect::new(330.0, 330.0, 350.0, 350.0));
    }

    #[test]
    fn test_generate_start_at_center() {
        let maze = generate(400.0, 400.0);
        assert_eq!(maze.start, Vec2::new(200.0, 200.0));
        // Start must not be inside any wall
        for wall in &maze.walls {
            assert!(!wall.contains_point_strict(maze.start));
        }
    }

    #[test]
    fn test_generate_perimeter() {
        let maze = generate(400.0, 400.0);
        assert_eq!(maze.walls[0], Rect::new(40.0, 40.0, 360.0, 50.0));
        assert_eq!(maze.walls[1], Rect::new(40.0, 350.0, 360.0, 360.0));
        assert_eq!(maze.walls[2], Rect::new(40.0, 40.0, 50.0, 360.0));
        assert_eq!(maze.walls[3], Rect::new(350.0, 40.0, 360.0, 360.0));
    }

    #[test]
    fn test_generate_interior_offsets() {
        let maze = generate(400.0, 400.0);
        // First horizontal wall: (0.0, 0.25) .. (0.5, 0.25 + t)
        let h1 = maze.walls[4];
        assert!((h1.left - 40.0).abs() < 0.001);
        assert!((h1.top - 120.0).abs() < 0.001);
        assert!((h1.right - 200.0).abs() < 0.001);
        assert!((h1.bottom - 130.0).abs() < 0.001);
        // Third vertical wall sits at 0.33 of the maze
        let v3 = maze.walls[10];
        assert!((v3.left - (40.0 + 320.0 * 0.33)).abs() < 0.001);
        assert!((v3.right - v3.left - 10.0).abs() < 0.001);
        assert!((v3.top - 200.0).abs() < 0.001);
        assert!((v3.bottom - 280.0).abs() < 0.001);
    }

    #[test]
    fn test_generate_is_deterministic() {
        assert_eq!(generate(480.0, 800.0), generate(480.0, 800.0));
    }

    #[test]
    fn test_generate_every_wall_inside_maze() {
        for (w, h) in [(400.0, 400.0), (1080.0, 1920.0), (300.0, 200.0)] {
            let maze = generate(w, h);
            let bounds = maze_bounds(w, h);
            for wall in &maze.walls {
                assert!(wall.left >= bounds.left - 0.001);
                assert!(wall.right <= bounds.right + 0.001);
                assert!(wall.top >= bounds.top - 0.001);
                assert!(wall.bottom <= bounds.bottom + 0.001);
            }
        }
    }
}
