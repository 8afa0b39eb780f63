use bevy::prelude::*;
use wasm_bindgen::prelude::*;

use crate::core::interaction::FaceExtruded;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = __wasm_callback_handles__)]
    fn face_extruded(face: u32, x: f32, y: f32, z: f32);
}

pub struct EventPlugin;

impl Plugin for EventPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, Self::forward_extrusions);
    }
}

impl EventPlugin {
    fn forward_extrusions(mut extruded: EventReader<FaceExtruded>) {
        for event in extruded.read() {
            let Vec3 { x, y, z } = event.displacement;
            face_extruded(event.face.0, x, y, z);
        }
    }
}
