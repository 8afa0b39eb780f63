pub mod drag;
pub mod editor_plugin;
pub mod highlight;
pub mod interaction;
pub mod mesh;
pub mod pan_orbit_camera_plugin;
pub mod picking;
pub mod preview;
pub mod settings;
