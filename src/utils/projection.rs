use bevy::{
    math::{primitives::Direction3d, Mat4, Ray3d, Vec2, Vec3},
    render::camera::Camera,
    transform::components::GlobalTransform,
};

/// Normalized device depth at which pointer positions are un-projected.
///
/// Anchors and drag samples must be taken at the same depth, otherwise every
/// displacement carries a constant bias.
pub const PROJECTION_DEPTH: f32 = 0.04;

/// Extra factor applied to displacements computed on the projection plane.
pub const DISPLACEMENT_SCALE: f32 = 1.0;

/// Camera matrices needed to un-project a pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    /// World to view.
    pub view: Mat4,
    /// View to clip.
    pub projection: Mat4,
    /// Logical viewport size in pixels.
    pub viewport: Vec2,
}

impl CameraState {
    pub fn from_camera(camera: &Camera, transform: &GlobalTransform) -> Option<Self> {
        let viewport = camera.logical_viewport_size()?;

        Some(Self {
            view: transform.compute_matrix().inverse(),
            projection: camera.projection_matrix(),
            viewport,
        })
    }
}

/// Converts a pixel position into a world-space point lying at `depth` in
/// normalized device coordinates.
pub fn screen_to_world(screen: Vec2, depth: f32, camera: &CameraState) -> Vec3 {
    let ndc = Vec3::new(
        screen.x / camera.viewport.x * 2.0 - 1.0,
        1.0 - screen.y / camera.viewport.y * 2.0,
        depth,
    );

    // The cube is drawn with an identity world matrix; its own transform is
    // handled by the caller.
    let clip_from_world = camera.projection * camera.view * Mat4::IDENTITY;
    clip_from_world.inverse().project_point3(ndc)
}

/// World space ray through a pixel, from the near plane towards the far one.
///
/// Returns `None` when the camera matrices are degenerate.
pub fn pointer_ray(screen: Vec2, camera: &CameraState) -> Option<Ray3d> {
    let near = screen_to_world(screen, 1.0, camera);
    // Reverse-z: zero depth is infinitely far away.
    let far = screen_to_world(screen, f32::EPSILON, camera);

    let direction = Direction3d::new(far - near).ok()?;
    near.is_finite().then_some(Ray3d {
        origin: near,
        direction,
    })
}

/// Projects the pointer movement `current - anchor` onto `normal`.
///
/// The scalar is signed, so dragging against the normal pushes the face in.
pub fn displacement_along_normal(current: Vec3, anchor: Vec3, normal: Vec3) -> Vec3 {
    let length = normal.length();
    if length <= f32::EPSILON {
        return Vec3::ZERO;
    }

    let direction = normal / length;
    let scalar = (current - anchor).dot(normal) / length;
    direction * scalar
}
