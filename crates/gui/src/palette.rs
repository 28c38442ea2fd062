//! Viewport colors.

use egui::Color32;

/// Dark red clear color.
pub const BACKGROUND: Color32 = Color32::from_rgb(100, 0, 0);

/// Reference circles.
pub const CIRCLES: Color32 = Color32::from_rgb(100, 100, 100);

/// The drive gear's pitch circle, brighter than the other references.
pub const PITCH_CIRCLE: Color32 = Color32::from_rgb(200, 200, 200);

/// Gear outlines.
pub const OUTLINE: Color32 = Color32::from_rgb(200, 200, 200);

/// Rolling-distance indicator outline.
pub const INDICATOR: Color32 = Color32::from_rgb(255, 255, 255);
