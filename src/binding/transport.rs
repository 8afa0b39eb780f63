use wasm_bindgen::prelude::*;

use crate::core::settings::ExtrusionSettings;

#[derive(Clone, Copy, Debug)]
#[wasm_bindgen]
pub struct ExtrusionOptions {
    pub projection_depth: f32,
    pub displacement_scale: f32,
    pub cube_size: f32,
}

#[wasm_bindgen]
impl ExtrusionOptions {
    #[wasm_bindgen(constructor)]
    pub fn new(projection_depth: f32, displacement_scale: f32, cube_size: f32) -> Self {
        Self {
            projection_depth,
            displacement_scale,
            cube_size,
        }
    }
}

impl Default for ExtrusionOptions {
    fn default() -> Self {
        let settings = ExtrusionSettings::default();
        Self {
            projection_depth: settings.projection_depth,
            displacement_scale: settings.displacement_scale,
            cube_size: settings.cube_size,
        }
    }
}

impl From<ExtrusionOptions> for ExtrusionSettings {
    fn from(options: ExtrusionOptions) -> Self {
        Self {
            projection_depth: options.projection_depth,
            displacement_scale: options.displacement_scale,
            cube_size: options.cube_size,
            ..Default::default()
        }
    }
}
