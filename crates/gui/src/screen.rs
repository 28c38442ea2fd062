//! World-to-screen mapping for the 2D viewport.

use egui::{Pos2, Rect};
use glam::DVec2;

/// Uniform world-to-screen scale.
pub const SCALE: f32 = 1.5;

/// Maps a world point into screen coordinates, anchored at the viewport's
/// top-left corner. World and screen are both y-down.
pub fn to_screen(rect: Rect, world: DVec2) -> Pos2 {
    Pos2::new(
        rect.left() + world.x as f32 * SCALE,
        rect.top() + world.y as f32 * SCALE,
    )
}
