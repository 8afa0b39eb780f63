use bevy::prelude::*;

use crate::utils::projection::{DISPLACEMENT_SCALE, PROJECTION_DEPTH};

use super::{highlight::PALETTE_SIZE, mesh::FACE_COUNT};

/// Tunables of the extrusion interaction.
#[derive(Resource, Clone, Debug)]
pub struct ExtrusionSettings {
    /// NDC depth used for both the drag anchor and every drag sample.
    pub projection_depth: f32,
    /// Multiplier applied to the displacement measured on the projection plane.
    pub displacement_scale: f32,
    /// Colour of the extrusion preview surface.
    pub preview_color: Color,
    /// Edge length of the cube spawned at startup.
    pub cube_size: f32,
}

impl Default for ExtrusionSettings {
    fn default() -> Self {
        Self {
            projection_depth: PROJECTION_DEPTH,
            displacement_scale: DISPLACEMENT_SCALE,
            preview_color: Color::rgb_u8(12, 242, 93),
            cube_size: 1.0,
        }
    }
}

/// Colour for every material index the highlight tracker can display.
///
/// The cube surface is a single translucent material tinted with entry 0.
/// Per face colours, the home entries `0..FACE_COUNT` included, show up on
/// the face outlines only.
#[derive(Resource, Clone, Debug, Deref)]
pub struct FacePalette(pub Vec<Color>);

impl Default for FacePalette {
    fn default() -> Self {
        let mut colors = vec![Color::rgba(1.0, 0.0, 0.75, 0.4); FACE_COUNT];
        // hover
        colors.push(Color::rgb(0.25, 0.75, 0.35));
        // selected
        colors.push(Color::rgb(0.3, 0.8, 0.4));

        debug_assert_eq!(colors.len(), PALETTE_SIZE);
        Self(colors)
    }
}

impl FacePalette {
    pub fn color(&self, material: usize) -> Color {
        self.0.get(material).copied().unwrap_or(Color::WHITE)
    }
}
