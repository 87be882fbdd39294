//! Collision detection and response against axis-aligned walls
//!
//! The ball is treated as its bounding box. Each overlapping wall pushes the
//! ball out through the side with the least penetration. Walls are handled one
//! at a time in order, each correction feeding into the next, so a ball wedged
//! between two walls ends up wherever the last correction put it.

use glam::Vec2;

use super::rect::Rect;

/// Wall side the ball is pushed out through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

/// Result of a collision check against one wall
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the ball overlapped the wall
    pub hit: bool,
    /// Side chosen for the push-out (if hit)
    pub side: Option<Side>,
    /// Penetration depth along the chosen side
    pub penetration: f32,
    /// Corrected ball center
    pub pos: Vec2,
}

impl CollisionResult {
    pub fn miss(pos: Vec2) -> Self {
        Self {
            hit: false,
            side: None,
            penetration: 0.0,
            pos,
        }
    }
}

/// Penetration depths of the ball's bounding box into a wall, in the order
/// left, right, top, bottom.
pub fn penetration_depths(pos: Vec2, radius: f32, wall: &Rect) -> [(Side, f32); 4] {
    [
        (Side::Left, (pos.x + radius - wall.left).abs()),
        (Side::Right, (wall.right - (pos.x - radius)).abs()),
        (Side::Top, (pos.y + radius - wall.top).abs()),
        (Side::Bottom, (wall.bottom - (pos.y - radius)).abs()),
    ]
}

/// Side with the smallest penetration depth.
///
/// Exact ties go to the earlier side in left, right, top, bottom order.
pub fn penetration_side(pos: Vec2, radius: f32, wall: &Rect) -> (Side, f32) {
    let depths = penetration_depths(pos, radius, wall);
    let mut best = depths[0];
    for &(side, depth) in &depths[1..] {
        if depth < best.1 {
            best = (side, depth);
        }
    }
    best
}

/// Check one wall and push the ball out of it if they overlap
pub fn resolve_wall(pos: Vec2, radius: f32, wall: &Rect) -> CollisionResult {
    if !wall.overlaps_circle_bounds(pos, radius) {
        return CollisionResult::miss(pos);
    }

    let (side, penetration) = penetration_side(pos, radius, wall);
    let mut corrected = pos;
    match side {
        Side::Left => corrected.x = wall.left - radius,
        Side::Right => corrected.x = wall.right + radius,
        Side::Top => corrected.y = wall.top - radius,
        Side::Bottom => corrected.y = wall.bottom + radius,
    }

    CollisionResult {
        hit: true,
        side: Some(side),
        penetration,
        pos: corrected,
    }
}

/// Resolve the ball against every wall in order, returning the corrected center
pub fn resolve(pos: Vec2, radius: f32, walls: &[Rect]) -> Vec2 {
    walls.iter().enumerate().fold(pos, |pos, (index, wall)| {
        let result = resolve_wall(pos, radius, wall);
        if let (true, Some(side)) = (result.hit, result.side) {
            log::trace!(
                "Wall {} pushed ball out {:?} by {:.3}",
                index,
                side,
                result.penetration
            );
        }
        result.pos
    })
}

/// Clamp a ball center so the ball stays inside the arena.
///
/// Both sides must be larger than the ball's diameter.
#[inline]
pub fn clamp_to_arena(pos: Vec2, radius: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        pos.x.clamp(radius, width - radius),
        pos.y.clamp(radius, height - radius),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PENETRATION_EPSILON;

    const R: f32 = 15.0;

    fn horizontal_wall() -> Rect {
        Rect::new(100.0, 100.0, 300.0, 110.0)
    }

    #[test]
    fn test_resolve_wall_miss() {
        let result = resolve_wall(Vec2::new(200.0, 200.0), R, &horizontal_wall());
        assert!(!result.hit);
        assert_eq!(result.pos, Vec2::new(200.0, 200.0));
    }

    #[test]
    fn test_resolve_wall_pushes_below() {
        // Ball moved up from y=140 to y=120, top of the ball is 5 into the wall
        let result = resolve_wall(Vec2::new(200.0, 120.0), R, &horizontal_wall());
        assert!(result.hit);
        assert_eq!(result.side, Some(Side::Bottom));
        assert!((result.penetration - 5.0).abs() < 0.001);
        assert_eq!(result.pos, Vec2::new(200.0, 125.0));
    }

    #[test]
    fn test_resolve_wall_pushes_above() {
        let result = resolve_wall(Vec2::new(200.0, 88.0), R, &horizontal_wall());
        assert_eq!(result.side, Some(Side::Top));
        assert_eq!(result.pos, Vec2::new(200.0, 85.0));
    }

    #[test]
    fn test_resolve_wall_pushes_sideways() {
        let wall = Rect::new(100.0, 0.0, 110.0, 300.0);
        let left = resolve_wall(Vec2::new(90.0, 150.0), R, &wall);
        assert_eq!(left.side, Some(Side::Left));
        assert_eq!(left.pos, Vec2::new(85.0, 150.0));

        let right = resolve_wall(Vec2::new(122.0, 150.0), R, &wall);
        assert_eq!(right.side, Some(Side::Right));
        assert_eq!(right.pos, Vec2::new(125.0, 150.0));
    }

    #[test]
    fn test_exact_tie_prefers_left_then_right_then_top() {
        // Square wall centered on the ball: all four depths are equal
        let wall = Rect::new(190.0, 190.0, 210.0, 210.0);
        let pos = Vec2::new(200.0, 200.0);
        let depths = penetration_depths(pos, R, &wall);
        assert!(depths.iter().all(|&(_, d)| (d - depths[0].1).abs() < 1e-6));
        assert_eq!(penetration_side(pos, R, &wall).0, Side::Left);
        assert_eq!(resolve_wall(pos, R, &wall).pos, Vec2::new(175.0, 200.0));

        // Right ties with top and bottom once left is out of the running
        let wall = Rect::new(100.0, 190.0, 210.0, 210.0);
        assert_eq!(penetration_side(pos, R, &wall).0, Side::Right);

        // Top ties with bottom
        let wall = Rect::new(100.0, 190.0, 300.0, 210.0);
        assert_eq!(penetration_side(pos, R, &wall).0, Side::Top);
    }

    #[test]
    fn test_resolve_leaves_no_penetration() {
        let wall = horizontal_wall();
        for x in [95.0, 150.0, 200.0, 290.0, 310.0] {
            for y in [90.0, 100.0, 105.0, 112.0, 120.0] {
                let pos = resolve(Vec2::new(x, y), R, &[wall]);
                let overlap = wall.circle_bounds_overlap(pos, R);
                assert!(
                    overlap.x <= PENETRATION_EPSILON || overlap.y <= PENETRATION_EPSILON,
                    "ball at ({x}, {y}) resolved to {pos:?} still overlaps by {overlap:?}"
                );
            }
        }
    }

    #[test]
    fn test_resolve_is_order_dependent() {
        // Ball straddles a ledge and the post at its end
        let ledge = Rect::new(0.0, 200.0, 200.0, 210.0);
        let post = Rect::new(200.0, 150.0, 210.0, 210.0);
        let pos = Vec2::new(205.0, 198.0);

        // Ledge first shoves the ball right, into the post, which shoves it further right
        let a = resolve(pos, R, &[ledge, post]);
        assert_eq!(a, Vec2::new(225.0, 198.0));

        // Post first ties left/right and goes left, then the ledge lifts it
        let b = resolve(pos, R, &[post, ledge]);
        assert_eq!(b, Vec2::new(185.0, 185.0));
        assert_ne!(a, b);
    }

    #[test]
    fn test_clamp_to_arena() {
        let clamped = clamp_to_arena(Vec2::new(-50.0, 500.0), R, 400.0, 400.0);
        assert_eq!(clamped, Vec2::new(15.0, 385.0));
        let inside = clamp_to_arena(Vec2::new(200.0, 200.0), R, 400.0, 400.0);
        assert_eq!(inside, Vec2::new(200.0, 200.0));
    }
}
