//! Involute spur gear geometry: sizing parameters, closed-form tooth profile
//! generation, and posed views for drawing meshing pairs.

pub mod mesh;
pub mod profile;
pub mod settings;
pub mod view;

pub use mesh::MeshPair;
pub use profile::{involute_point, roll_angle_at_diameter, GearProfile};
pub use settings::GearSettings;
pub use view::GearView;
