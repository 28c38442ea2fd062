//! Coupled rotation of two meshing gears sharing one tooth geometry.

use std::f64::consts::PI;
use std::sync::Arc;

use glam::DVec2;

use crate::profile::GearProfile;
use crate::settings::GearSettings;
use crate::view::GearView;

/// A drive gear, its mate, and a rolling-distance indicator, all sharing one
/// profile.
///
/// The mate sits one pitch diameter to the right of the drive gear, so the
/// two pitch circles touch on the line of centers. Its phase is offset by
/// half an angular pitch on top of the half-turn flip, which places a tooth
/// of one gear in the gap of the other.
#[derive(Debug, Clone)]
pub struct MeshPair {
    pub drive: GearView,
    pub driven: GearView,
    /// Dependent view translated along the pitch line by the rolled arc
    /// length. Visualizes the rack-equivalent displacement of the mesh.
    pub indicator: GearView,
    pitch_radius: f64,
    angular_pitch: f64,
    driven_center: DVec2,
}

impl MeshPair {
    pub fn new(profile: Arc<GearProfile>, settings: &GearSettings, drive_center: DVec2) -> Self {
        let driven_center = drive_center + DVec2::new(settings.pitch_diameter(), 0.0);
        let mut pair = Self {
            drive: GearView::new(profile.clone(), drive_center),
            driven: GearView::new(profile.clone(), driven_center),
            indicator: GearView::new(profile, driven_center),
            pitch_radius: settings.pitch_diameter() / 2.0,
            angular_pitch: settings.angular_pitch(),
            driven_center,
        };
        pair.set_drive_angle(0.0);
        pair
    }

    /// Rotates the drive gear to `angle` and derives the mate's phase and
    /// the indicator's rolled position from it.
    pub fn set_drive_angle(&mut self, angle: f64) {
        self.drive.angle = angle;
        self.driven.angle = -angle + PI + self.angular_pitch / 2.0;
        self.indicator.pos = self.driven_center + DVec2::new(0.0, angle * self.pitch_radius);
    }

    pub fn drive_angle(&self) -> f64 {
        self.drive.angle
    }

    /// Tangency point of the two pitch circles, fixed on the line of
    /// centers regardless of rotation.
    pub fn pitch_point(&self) -> DVec2 {
        (self.drive.pos + self.driven.pos) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> (GearSettings, MeshPair) {
        let settings = GearSettings::new(30, 1.0);
        let profile = Arc::new(GearProfile::generate(&settings));
        let pair = MeshPair::new(profile, &settings, DVec2::new(200.0, 200.0));
        (settings, pair)
    }

    #[test]
    fn centers_are_one_pitch_diameter_apart() {
        let (settings, pair) = pair();
        let dist = pair.drive.pos.distance(pair.driven.pos);
        assert!((dist - settings.pitch_diameter()).abs() < 1e-12);
    }

    #[test]
    fn pitch_circles_stay_tangent_for_all_angles() {
        let (settings, mut pair) = pair();
        let pitch_r = settings.pitch_diameter() / 2.0;
        for i in 0..50 {
            let theta = -2.0 + 0.1 * f64::from(i);
            pair.set_drive_angle(theta);
            let contact = pair.pitch_point();
            assert!((contact.distance(pair.drive.pos) - pitch_r).abs() < 1e-9);
            assert!((contact.distance(pair.driven.pos) - pitch_r).abs() < 1e-9);
        }
    }

    #[test]
    fn driven_phase_includes_flip_and_half_pitch() {
        let (settings, mut pair) = pair();
        pair.set_drive_angle(0.7);
        let expected = -0.7 + PI + settings.angular_pitch() / 2.0;
        assert!((pair.driven.angle - expected).abs() < 1e-12);
    }

    #[test]
    fn rolled_arc_lengths_agree() {
        let (_, mut pair) = pair();
        pair.set_drive_angle(0.0);
        let driven_start = pair.driven.angle;
        pair.set_drive_angle(1.3);
        // Equal pitch radii: the driven gear rolls back exactly as far as
        // the drive gear rolls forward.
        assert!(((pair.driven.angle - driven_start) + 1.3).abs() < 1e-12);
    }

    #[test]
    fn indicator_tracks_pitch_line_displacement() {
        let (settings, mut pair) = pair();
        pair.set_drive_angle(0.5);
        let expected = pair.driven.pos + DVec2::new(0.0, 0.5 * settings.pitch_diameter() / 2.0);
        assert!(pair.indicator.pos.distance(expected) < 1e-12);
        assert_eq!(pair.indicator.pos.x, pair.driven.pos.x);
    }
}
