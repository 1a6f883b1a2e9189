//! Axis-aligned collision tests
//!
//! The overlap test is four half-plane checks between the player
//! rectangle and a boundary. The bottom check is asymmetric on purpose:
//! instead of the player's full height it uses the y position inflated by
//! 15%, so the hitbox starts near the feet and the head can pass in front
//! of a tile. Gameplay was tuned against this exact formula, so it is
//! kept literally.

use super::rect::Rect;
use crate::map::Boundary;

/// Overlap test between the probing rectangle and a boundary rectangle.
///
/// All four checks must hold:
/// - left:   `r1.x + r1.w >= r2.x`
/// - right:  `r1.x <= r2.x + r2.w`
/// - bottom: `r1.y + r1.y * 0.15 <= r2.y + r2.h`
/// - top:    `r1.y + r1.h >= r2.y`
pub fn rects_collide(rect1: Rect, rect2: Rect) -> bool {
    let hit_left = rect1.right() >= rect2.x;
    let hit_right = rect1.x <= rect2.right();
    // foot hitbox: 15% of the y position, not a fixed inset
    let hit_bottom = rect1.y + rect1.y * 0.15 <= rect2.bottom();
    let hit_top = rect1.bottom() >= rect2.y;

    hit_left && hit_right && hit_bottom && hit_top
}

/// Probe a world shift of (dx, dy): does any boundary, moved by that
/// delta, overlap the player? Called before committing a scroll step;
/// a blocked probe cancels the step.
pub fn scroll_blocked(player: Rect, boundaries: &[Boundary], dx: f32, dy: f32) -> bool {
    boundaries
        .iter()
        .any(|boundary| rects_collide(player, boundary.rect.translated(dx, dy)))
}
