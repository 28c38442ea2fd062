//! Application state: gear parameters and the profile and mesh pair derived
//! from them.

use std::sync::Arc;

use gears::{GearProfile, GearSettings, MeshPair};
use glam::DVec2;

/// Center of the drive gear in world coordinates.
pub const DRIVE_CENTER: DVec2 = DVec2::new(130.0, 200.0);

/// Which reference circles to overlay on the drive gear.
#[derive(Debug, Clone, Copy)]
pub struct CircleOverlays {
    pub pitch: bool,
    pub base: bool,
    pub addendum: bool,
    pub dedendum: bool,
    pub clearing: bool,
}

impl Default for CircleOverlays {
    fn default() -> Self {
        Self {
            pitch: true,
            base: true,
            addendum: true,
            dedendum: true,
            clearing: true,
        }
    }
}

/// Combined application state.
pub struct AppState {
    pub settings: GearSettings,
    pub profile: Arc<GearProfile>,
    pub mesh: MeshPair,
    pub overlays: CircleOverlays,
}

impl AppState {
    pub fn new(settings: GearSettings) -> Self {
        let profile = Arc::new(GearProfile::generate(&settings));
        let mesh = MeshPair::new(profile.clone(), &settings, DRIVE_CENTER);
        Self {
            settings,
            profile,
            mesh,
            overlays: CircleOverlays::default(),
        }
    }

    /// Rebuilds the profile and mesh pair after a parameter edit, keeping
    /// the current drive angle.
    pub fn regenerate(&mut self) {
        let angle = self.mesh.drive_angle();
        self.profile = Arc::new(GearProfile::generate(&self.settings));
        self.mesh = MeshPair::new(self.profile.clone(), &self.settings, DRIVE_CENTER);
        self.mesh.set_drive_angle(angle);
        tracing::info!(
            teeth = self.settings.num_teeth,
            module = self.settings.module,
            "regenerated gear pair"
        );
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(GearSettings::default())
    }
}
