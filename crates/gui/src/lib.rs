// Library crate: exposes testable modules for unit tests.
// GUI-specific modules (app, viewport drawing) remain in the binary crate.

pub mod input;
pub mod palette;
pub mod screen;
pub mod state;
