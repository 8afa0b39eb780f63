use bevy::{
    math::{Affine3A, Ray3d, Vec3},
    prelude::Mesh,
};

use super::mesh::{positions, FaceId, MeshError};

/// Closest facet hit by a pointer ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceHit {
    pub face: FaceId,
    pub point: Vec3,
    /// Unit normal of the hit facet, facing the ray.
    pub normal: Vec3,
}

/// Möller-Trumbore. Returns the ray parameter of the hit.
fn ray_triangle_intersection(origin: Vec3, direction: Vec3, [a, b, c]: [Vec3; 3]) -> Option<f32> {
    const EPSILON: f32 = 1e-7;

    let edge1 = b - a;
    let edge2 = c - a;
    let h = direction.cross(edge2);
    let det = edge1.dot(h);

    if det.abs() < EPSILON {
        return None;
    }

    let inv_det = 1.0 / det;
    let s = origin - a;
    let u = inv_det * s.dot(h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = inv_det * direction.dot(q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = inv_det * edge2.dot(q);
    (t > EPSILON).then_some(t)
}

/// Casts `ray` (world space) against `mesh` placed by `transform`.
///
/// Only front facing triangles are considered, so the face under the pointer
/// is never one seen through the cube.
pub fn pick_face(mesh: &Mesh, transform: &Affine3A, ray: Ray3d) -> Result<Option<FaceHit>, MeshError> {
    let indices = mesh.indices().ok_or(MeshError::MissingIndices)?;
    let positions = positions(mesh)?;

    let to_local = transform.inverse();
    let origin = to_local.transform_point3(ray.origin);
    let direction = to_local.transform_vector3(*ray.direction);

    let indices: Vec<usize> = indices.iter().collect();
    let mut closest: Option<(usize, f32, Vec3)> = None;

    for (facet, triangle) in indices.chunks_exact(3).enumerate() {
        let Some(corners) = triangle
            .iter()
            .map(|i| positions.get(*i).map(|p| Vec3::from_array(*p)))
            .collect::<Option<Vec<_>>>()
        else {
            continue;
        };
        let corners = [corners[0], corners[1], corners[2]];

        let normal = (corners[1] - corners[0]).cross(corners[2] - corners[0]);
        if normal.dot(direction) >= 0.0 {
            continue;
        }

        let Some(t) = ray_triangle_intersection(origin, direction, corners) else {
            continue;
        };
        if closest.map_or(true, |(_, best, _)| t < best) {
            closest = Some((facet, t, normal));
        }
    }

    Ok(closest.map(|(facet, t, normal)| {
        let point = transform.transform_point3(origin + direction * t);
        FaceHit {
            face: FaceId(facet as u32),
            point,
            normal: transform.transform_vector3(normal).normalize(),
        }
    }))
}
