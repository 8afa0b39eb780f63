use bevy::prelude::*;
use cube_extrude::core::{editor_plugin::EditorPlugin, settings::ExtrusionSettings};

fn main() {
    App::new()
        .add_plugins(EditorPlugin {
            main_window_canvas_selector: None,
            width: 1280.0,
            height: 720.0,
            settings: ExtrusionSettings::default(),
        })
        .run();
}
