use bevy::prelude::*;
use wasm_bindgen::prelude::*;

use crate::core::editor_plugin::EditorPlugin;

#[cfg(target_arch = "wasm32")]
pub mod events;
pub mod transport;

#[wasm_bindgen]
pub fn init_app_with_canvas_selector(
    canvas_selector: String,
    width: f32,
    height: f32,
    options: transport::ExtrusionOptions,
) {
    let mut app = App::new();

    app.add_plugins(EditorPlugin {
        main_window_canvas_selector: Some(canvas_selector),
        width,
        height,
        settings: options.into(),
    });

    #[cfg(target_arch = "wasm32")]
    app.add_plugins(events::EventPlugin);

    app.run();
}
