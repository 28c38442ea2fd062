//! Closed-form involute tooth profile generation.

use glam::{DAffine2, DVec2};

use crate::settings::GearSettings;

/// Sweep step for the involute roll parameter, in radians.
const ROLL_STEP: f64 = 0.01;

/// Tolerance for deciding whether the flank root needs the synthetic
/// dedendum connector point.
const ROOT_TOL: f64 = 1e-9;

/// Point on the involute of a circle of radius `base_radius` at roll
/// parameter `t`. The curve starts on the +X axis and unwinds clockwise.
pub fn involute_point(base_radius: f64, t: f64) -> DVec2 {
    base_radius * DVec2::new(t.cos(), -t.sin()) + base_radius * t * DVec2::new(t.sin(), t.cos())
}

/// Roll parameter at which the involute of `base_diameter` crosses the
/// circle of `diameter`. Zero for diameters at or below the base circle,
/// where the involute has no point.
pub fn roll_angle_at_diameter(base_diameter: f64, diameter: f64) -> f64 {
    let ratio = (diameter * diameter) / (base_diameter * base_diameter);
    (ratio - 1.0).max(0.0).sqrt()
}

/// Full gear outline in the gear's local frame, origin at the axis.
///
/// Built once from [`GearSettings`] and immutable afterwards; share it
/// between views with an `Arc`.
#[derive(Debug, Clone)]
pub struct GearProfile {
    points: Vec<DVec2>,
    root_connector: bool,
}

impl GearProfile {
    pub fn generate(settings: &GearSettings) -> Self {
        let base_r = settings.base_diameter() / 2.0;
        let addendum_r = settings.addendum_diameter() / 2.0;
        let clearing_r = settings.clearing_diameter() / 2.0;
        let dedendum_r = settings.dedendum_diameter() / 2.0;

        // One flank, root to tip. Points below the clearing circle fall in
        // the undercut region and are skipped.
        let mut half = Vec::new();
        let mut t =
            roll_angle_at_diameter(settings.base_diameter(), settings.dedendum_diameter());
        loop {
            let p = involute_point(base_r, t);
            let radius = p.length();
            if radius >= addendum_r {
                // Land the tip exactly on the addendum circle.
                half.push(p * (addendum_r / radius));
                break;
            }
            if radius >= clearing_r {
                half.push(p);
            }
            t += ROLL_STEP;
        }

        // When the base circle sits above the root circle the involute
        // cannot reach down to the dedendum radius. Patch the gap with a
        // point at the dedendum radius along the first flank point's
        // direction. An approximation of the root transition, not an exact
        // trochoid.
        let mut root_connector = false;
        if let Some(&first) = half.first() {
            if first.length() > dedendum_r + ROOT_TOL {
                half.insert(0, first.normalize() * dedendum_r);
                root_connector = true;
            }
        }

        // Put the flank's pitch-circle point at a quarter of the angular
        // pitch, so the mirrored pair spans half a pitch of tooth thickness
        // at the pitch circle.
        let tp = roll_angle_at_diameter(settings.base_diameter(), settings.pitch_diameter());
        let pitch_point = involute_point(base_r, tp);
        let pitch_polar = pitch_point.y.atan2(pitch_point.x);
        let align = DAffine2::from_angle(settings.angular_pitch() / 4.0 - pitch_polar);
        for p in &mut half {
            *p = align.transform_point2(*p);
        }

        // Mirror into a full tooth: the mirrored copy first, then the
        // original flank reversed.
        let mut tooth: Vec<DVec2> = half.iter().map(|p| DVec2::new(p.x, -p.y)).collect();
        tooth.extend(half.iter().rev());

        // Replicate around the axis and close the loop.
        let mut points = tooth.clone();
        for i in 1..settings.num_teeth {
            let rot = DAffine2::from_angle(settings.angular_pitch() * f64::from(i));
            points.extend(tooth.iter().map(|p| rot.transform_point2(*p)));
        }
        if let Some(&first) = points.first() {
            points.push(first);
        }

        tracing::debug!(
            teeth = settings.num_teeth,
            points = points.len(),
            root_connector,
            "generated gear profile"
        );

        Self {
            points,
            root_connector,
        }
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Whether a synthetic point at the dedendum radius was inserted at the
    /// root of each flank.
    pub fn has_root_connector(&self) -> bool {
        self.root_connector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn sample() -> (GearSettings, GearProfile) {
        let settings = GearSettings {
            num_teeth: 30,
            module: 1.0,
            pressure_angle_deg: 20.0,
        };
        let profile = GearProfile::generate(&settings);
        (settings, profile)
    }

    #[test]
    fn roll_angle_inverts_involute_radius() {
        let base_d = 28.0;
        for d in [28.5, 30.0, 32.0] {
            let t = roll_angle_at_diameter(base_d, d);
            let p = involute_point(base_d / 2.0, t);
            assert!((p.length() - d / 2.0).abs() < TOL, "diameter {d}");
        }
    }

    #[test]
    fn roll_angle_clamps_below_base_circle() {
        assert_eq!(roll_angle_at_diameter(28.0, 27.0), 0.0);
        assert_eq!(roll_angle_at_diameter(28.0, 28.0), 0.0);
    }

    #[test]
    fn profile_is_a_closed_loop() {
        let (_, profile) = sample();
        let points = profile.points();
        assert!(points.len() > 2);
        assert_eq!(points.first(), points.last());
    }

    #[test]
    fn radii_stay_between_root_and_tip() {
        let (settings, profile) = sample();
        let addendum_r = settings.addendum_diameter() / 2.0;
        let clearing_r = settings.clearing_diameter() / 2.0;
        let dedendum_r = settings.dedendum_diameter() / 2.0;

        for p in profile.points() {
            let radius = p.length();
            assert!(radius <= addendum_r + TOL, "above tip: {radius}");
            assert!(radius >= dedendum_r - TOL, "below root: {radius}");
            if radius < clearing_r - 1e-6 {
                // Only the synthetic connector may dip below the clearing
                // circle, and it sits exactly on the root circle.
                assert!(
                    (radius - dedendum_r).abs() < TOL,
                    "stray point below clearing: {radius}"
                );
            }
        }
    }

    #[test]
    fn tooth_is_mirror_symmetric() {
        let (settings, profile) = sample();
        let tooth_len = (profile.points().len() - 1) / settings.num_teeth as usize;
        let tooth = &profile.points()[..tooth_len];
        for i in 0..tooth_len {
            let a = tooth[i];
            let b = tooth[tooth_len - 1 - i];
            assert!((a.x - b.x).abs() < TOL);
            assert!((a.y + b.y).abs() < TOL);
        }
    }

    #[test]
    fn adjacent_teeth_are_one_angular_pitch_apart() {
        let (settings, profile) = sample();
        let tooth_len = (profile.points().len() - 1) / settings.num_teeth as usize;
        let rot = DAffine2::from_angle(settings.angular_pitch());
        let points = profile.points();
        for i in (0..tooth_len).step_by(7) {
            let expected = rot.transform_point2(points[i]);
            let actual = points[i + tooth_len];
            assert!(expected.distance(actual) < 1e-9, "tooth point {i}");
        }
    }

    #[test]
    fn root_connector_reported_when_base_exceeds_root() {
        // base ≈ 28.19 > dedendum 27: the involute starts above the root
        // circle and the connector is required.
        let (_, profile) = sample();
        assert!(profile.has_root_connector());
    }
}
