use std::fmt;

use bevy::{
    math::Vec3,
    prelude::*,
    render::{
        mesh::{Indices, PrimitiveTopology, VertexAttributeValues},
        render_asset::RenderAssetUsages,
    },
    utils::HashSet,
};
use thiserror::Error;

/// Logical faces of the cube.
pub const FACE_COUNT: usize = 6;

/// Index slots per face: two triangles.
const FACE_SLOTS: usize = 6;

/// Corner indices of every face, in `+X, -X, +Y, -Y, +Z, -Z` order.
///
/// Corner `i` sits at `(±h, ±h, ±h)` with the sign of x, y and z taken from
/// bits 0, 1 and 2 of `i`. Each quad `[a, b, c, d]` is counter-clockwise when
/// seen from outside and becomes the triangles `(a, b, c)` and `(a, c, d)`.
const CUBE_QUADS: [[u32; 4]; FACE_COUNT] = [
    [5, 1, 3, 7],
    [0, 4, 6, 2],
    [2, 6, 7, 3],
    [0, 1, 5, 4],
    [4, 5, 7, 6],
    [0, 2, 3, 1],
];

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    #[error("mesh has no index buffer")]
    MissingIndices,
    #[error("mesh has no position attribute")]
    MissingPositions,
    #[error("mesh positions are not Float32x3")]
    UnsupportedPositionFormat,
    #[error("face {face} is outside a mesh of {facets} facets")]
    FaceOutOfRange { face: FaceId, facets: usize },
    #[error("vertex {vertex} is outside a mesh of {vertices} vertices")]
    VertexOutOfRange { vertex: u32, vertices: usize },
}

/// Facet (triangle) index reported by picking.
///
/// Two consecutive facets form one logical face of the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FaceId(pub u32);

impl FaceId {
    /// Index of the logical face, `0..FACE_COUNT` for the cube.
    pub fn quad(self) -> usize {
        (self.0 / 2) as usize
    }

    /// First facet of the pair this facet belongs to.
    pub fn first_facet(self) -> u32 {
        2 * (self.0 / 2)
    }

    pub fn from_quad(quad: usize) -> Self {
        Self(2 * quad as u32)
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Builds an axis aligned cube centred on the origin whose faces share their
/// corner vertices, so moving a face stretches its neighbours with it.
pub fn cube_mesh(size: f32) -> Mesh {
    let half = size * 0.5;

    let positions: Vec<[f32; 3]> = (0..8u32)
        .map(|corner| {
            let sign = |bit: u32| if corner & bit != 0 { half } else { -half };
            [sign(1), sign(2), sign(4)]
        })
        .collect();

    let indices: Vec<u32> = CUBE_QUADS
        .iter()
        .flat_map(|&[a, b, c, d]| [a, b, c, a, c, d])
        .collect();

    let triangles: Vec<usize> = indices.iter().map(|i| *i as usize).collect();
    let normals = smooth_normals(&positions, &triangles);

    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

/// Returns the six raw index slots of the two facets making up `face`.
pub fn face_index_slots(face: FaceId, indices: &Indices) -> Result<[u32; FACE_SLOTS], MeshError> {
    let start = 3 * face.first_facet() as usize;

    if start + FACE_SLOTS > indices.len() {
        return Err(MeshError::FaceOutOfRange {
            face,
            facets: indices.len() / 3,
        });
    }

    let mut slots = [0u32; FACE_SLOTS];
    for (slot, index) in slots.iter_mut().zip(indices.iter().skip(start)) {
        *slot = index as u32;
    }
    Ok(slots)
}

/// Unique vertices of `face`.
///
/// The two triangles share an edge, so a quad yields at most four vertices
/// even though it occupies six index slots. Every vertex in the set must be
/// moved exactly once.
pub fn vertices_for_face(face: FaceId, indices: &Indices) -> Result<HashSet<u32>, MeshError> {
    Ok(face_index_slots(face, indices)?.into_iter().collect())
}

/// Quad corners of `face` in winding order, for faces laid out as the fan
/// `(a, b, c), (a, c, d)`.
pub fn face_outline(face: FaceId, indices: &Indices) -> Result<[u32; 4], MeshError> {
    let slots = face_index_slots(face, indices)?;
    let [a, b, c] = [slots[0], slots[1], slots[2]];
    let d = slots[3..]
        .iter()
        .copied()
        .find(|v| *v != a && *v != b && *v != c)
        .unwrap_or(c);

    Ok([a, b, c, d])
}

pub fn positions(mesh: &Mesh) -> Result<&[[f32; 3]], MeshError> {
    match mesh
        .attribute(Mesh::ATTRIBUTE_POSITION)
        .ok_or(MeshError::MissingPositions)?
    {
        VertexAttributeValues::Float32x3(positions) => Ok(positions),
        _ => Err(MeshError::UnsupportedPositionFormat),
    }
}

fn positions_mut(mesh: &mut Mesh) -> Result<&mut Vec<[f32; 3]>, MeshError> {
    match mesh
        .attribute_mut(Mesh::ATTRIBUTE_POSITION)
        .ok_or(MeshError::MissingPositions)?
    {
        VertexAttributeValues::Float32x3(positions) => Ok(positions),
        _ => Err(MeshError::UnsupportedPositionFormat),
    }
}

fn position_at(positions: &[[f32; 3]], vertex: u32) -> Result<Vec3, MeshError> {
    positions
        .get(vertex as usize)
        .map(|p| Vec3::from_array(*p))
        .ok_or(MeshError::VertexOutOfRange {
            vertex,
            vertices: positions.len(),
        })
}

/// Positions of the six index slots of `face`, duplicates included.
pub fn face_slot_positions(mesh: &Mesh, face: FaceId) -> Result<[Vec3; FACE_SLOTS], MeshError> {
    let indices = mesh.indices().ok_or(MeshError::MissingIndices)?;
    let slots = face_index_slots(face, indices)?;
    let positions = positions(mesh)?;

    let mut corners = [Vec3::ZERO; FACE_SLOTS];
    for (corner, vertex) in corners.iter_mut().zip(slots) {
        *corner = position_at(positions, vertex)?;
    }
    Ok(corners)
}

/// Permanently moves the vertices of `face` by `displacement`.
///
/// Returns how many vertices were moved.
pub fn extrude_face(mesh: &mut Mesh, displacement: Vec3, face: FaceId) -> Result<usize, MeshError> {
    let vertices = vertices_for_face(face, mesh.indices().ok_or(MeshError::MissingIndices)?)?;

    let positions = positions_mut(mesh)?;
    if let Some(vertex) = vertices.iter().find(|v| **v as usize >= positions.len()) {
        return Err(MeshError::VertexOutOfRange {
            vertex: *vertex,
            vertices: positions.len(),
        });
    }

    for vertex in vertices.iter() {
        let position = &mut positions[*vertex as usize];
        *position = (Vec3::from_array(*position) + displacement).to_array();
    }

    recompute_normals(mesh)?;
    Ok(vertices.len())
}

/// Recomputes the normals of an indexed triangle list after its positions
/// changed.
pub fn recompute_normals(mesh: &mut Mesh) -> Result<(), MeshError> {
    let indices: Vec<usize> = mesh
        .indices()
        .ok_or(MeshError::MissingIndices)?
        .iter()
        .collect();
    let normals = smooth_normals(positions(mesh)?, &indices);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);

    Ok(())
}

/// Area weighted vertex normals. Triangles referencing missing vertices are
/// skipped.
fn smooth_normals(positions: &[[f32; 3]], indices: &[usize]) -> Vec<[f32; 3]> {
    let mut normals = vec![Vec3::ZERO; positions.len()];
    for triangle in indices.chunks_exact(3) {
        let [a, b, c] = [triangle[0], triangle[1], triangle[2]];
        if a.max(b).max(c) >= positions.len() {
            continue;
        }

        let [pa, pb, pc] = [a, b, c].map(|i| Vec3::from_array(positions[i]));
        let weighted = (pb - pa).cross(pc - pa);
        for vertex in [a, b, c] {
            normals[vertex] += weighted;
        }
    }

    normals
        .into_iter()
        .map(|n| n.normalize_or_zero().to_array())
        .collect()
}
