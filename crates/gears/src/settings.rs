//! Gear sizing parameters and the reference circles derived from them.

use std::f64::consts::TAU;

/// Input parameters of a spur gear.
///
/// Reference diameters are derived on demand so the parameters can be edited
/// freely without keeping redundant state in sync.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearSettings {
    pub num_teeth: u32,
    pub module: f64,
    /// Degrees. Between 14 and 20 in common use.
    pub pressure_angle_deg: f64,
}

impl Default for GearSettings {
    fn default() -> Self {
        Self {
            num_teeth: 30,
            module: 6.0,
            pressure_angle_deg: 20.0,
        }
    }
}

impl GearSettings {
    pub fn new(num_teeth: u32, module: f64) -> Self {
        Self {
            num_teeth,
            module,
            ..Default::default()
        }
    }

    pub fn pitch_diameter(&self) -> f64 {
        self.module * f64::from(self.num_teeth)
    }

    pub fn addendum_diameter(&self) -> f64 {
        self.pitch_diameter() + self.module * 2.0
    }

    /// Lowest diameter a flank point may reach before the undercut region
    /// is skipped.
    pub fn clearing_diameter(&self) -> f64 {
        self.pitch_diameter() - self.module * 2.0
    }

    /// Root circle, one module below the clearing circle.
    pub fn dedendum_diameter(&self) -> f64 {
        self.pitch_diameter() - self.module * 3.0
    }

    pub fn base_diameter(&self) -> f64 {
        self.pitch_diameter() * self.pressure_angle_deg.to_radians().cos()
    }

    /// Angle spanned by one tooth-and-gap period around the axis.
    pub fn angular_pitch(&self) -> f64 {
        TAU / f64::from(self.num_teeth)
    }
}
