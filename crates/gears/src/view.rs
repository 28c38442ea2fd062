//! Positioned, rotatable reference to a shared gear profile.

use std::sync::Arc;

use glam::{DAffine2, DVec2};

use crate::profile::GearProfile;

/// A gear placed in world space.
///
/// Several views may share one profile; the pose is the only per-gear state
/// that changes per frame.
#[derive(Debug, Clone)]
pub struct GearView {
    profile: Arc<GearProfile>,
    pub pos: DVec2,
    pub angle: f64,
}

impl GearView {
    pub fn new(profile: Arc<GearProfile>, pos: DVec2) -> Self {
        Self {
            profile,
            pos,
            angle: 0.0,
        }
    }

    pub fn profile(&self) -> &GearProfile {
        &self.profile
    }

    /// Local-to-world rigid transform: translate to `pos`, then rotate by
    /// `angle` about the gear axis.
    pub fn transform(&self) -> DAffine2 {
        DAffine2::from_translation(self.pos) * DAffine2::from_angle(self.angle)
    }

    pub fn to_world(&self, local: DVec2) -> DVec2 {
        self.transform().transform_point2(local)
    }

    /// Maps a world-space point into the gear's local frame.
    pub fn to_local(&self, world: DVec2) -> DVec2 {
        self.transform().inverse().transform_point2(world)
    }

    /// Profile points mapped through the current pose, in drawing order.
    pub fn world_points(&self) -> impl Iterator<Item = DVec2> + '_ {
        let transform = self.transform();
        self.profile
            .points()
            .iter()
            .map(move |p| transform.transform_point2(*p))
    }
}
