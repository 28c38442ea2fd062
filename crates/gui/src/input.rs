//! Pointer-to-rotation mapping.

/// Linear map from the pointer's vertical position within the viewport (in
/// points) to the drive gear's rotation angle in radians: one radian per
/// hundred points, zero at y = 100.
pub fn angle_from_pointer_y(y: f32) -> f64 {
    f64::from(y) / 100.0 - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_one_hundred_points() {
        assert!(angle_from_pointer_y(100.0).abs() < 1e-12);
    }

    #[test]
    fn one_radian_per_hundred_points() {
        let delta = angle_from_pointer_y(250.0) - angle_from_pointer_y(150.0);
        assert!((delta - 1.0).abs() < 1e-12);
    }

    #[test]
    fn top_edge_is_minus_one_radian() {
        assert!((angle_from_pointer_y(0.0) + 1.0).abs() < 1e-12);
    }
}
