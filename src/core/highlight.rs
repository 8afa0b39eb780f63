use bevy::prelude::*;

use super::{
    interaction::CubeInteraction,
    mesh::{face_outline, positions, FaceId, FACE_COUNT},
    settings::FacePalette,
};

/// Material index shown on a hovered face.
pub const HOVER_MATERIAL: usize = FACE_COUNT;

/// Material index shown on the face being dragged.
pub const SELECTED_MATERIAL: usize = FACE_COUNT + 1;

/// Number of material indices a [`FacePalette`] has to provide.
pub const PALETTE_SIZE: usize = FACE_COUNT + 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighlightRecord {
    pub home: usize,
    pub hover: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaceVisual {
    Home,
    Hovered,
    Selected,
}

/// Which material each face of the cube currently displays.
#[derive(Clone, Debug)]
pub struct HighlightTracker {
    records: [HighlightRecord; FACE_COUNT],
    displayed: [usize; FACE_COUNT],
}

impl Default for HighlightTracker {
    fn default() -> Self {
        Self::new(std::array::from_fn(|face| face))
    }
}

impl HighlightTracker {
    pub fn new(home: [usize; FACE_COUNT]) -> Self {
        Self {
            records: home.map(|home| HighlightRecord {
                home,
                hover: HOVER_MATERIAL,
            }),
            displayed: home,
        }
    }

    /// Shows `quad` as hovered and every other face in its home material.
    pub fn hover(&mut self, quad: usize) {
        for (face, record) in self.records.iter().enumerate() {
            self.displayed[face] = if face == quad {
                record.hover
            } else {
                record.home
            };
        }
    }

    pub fn clear(&mut self) {
        for (displayed, record) in self.displayed.iter_mut().zip(self.records.iter()) {
            *displayed = record.home;
        }
    }

    /// Marks `quad` as the face being dragged. It stays selected until the
    /// next idle pointer move.
    pub fn select(&mut self, quad: usize) {
        if let Some(displayed) = self.displayed.get_mut(quad) {
            *displayed = SELECTED_MATERIAL;
        }
    }

    pub fn displayed(&self, quad: usize) -> Option<usize> {
        self.displayed.get(quad).copied()
    }

    pub fn visual(&self, quad: usize) -> Option<FaceVisual> {
        let displayed = self.displayed(quad)?;
        let record = self.records[quad];

        Some(if displayed == SELECTED_MATERIAL {
            FaceVisual::Selected
        } else if displayed == record.hover {
            FaceVisual::Hovered
        } else {
            FaceVisual::Home
        })
    }
}

/// Outlines every face of the cube in the colour of its displayed material.
pub fn draw_face_highlights(
    query: Query<(&Handle<Mesh>, &GlobalTransform, &CubeInteraction)>,
    meshes: Res<Assets<Mesh>>,
    palette: Res<FacePalette>,
    mut gizmos: Gizmos,
) {
    for (handle, transform, interaction) in query.iter() {
        let Some(mesh) = meshes.get(handle) else {
            continue;
        };
        let (Some(indices), Ok(positions)) = (mesh.indices(), positions(mesh)) else {
            continue;
        };

        for quad in 0..FACE_COUNT {
            let Ok(outline) = face_outline(FaceId::from_quad(quad), indices) else {
                continue;
            };
            let Some(material) = interaction.highlight().displayed(quad) else {
                continue;
            };

            let corners: Vec<Vec3> = outline
                .iter()
                .chain(outline.first())
                .filter_map(|v| positions.get(*v as usize))
                .map(|p| transform.transform_point(Vec3::from_array(*p)))
                .collect();

            gizmos.linestrip(corners, palette.color(material));
        }
    }
}
