use bevy::{
    prelude::*,
    render::{mesh::PrimitiveTopology, render_asset::RenderAssetUsages},
};

use super::mesh::{face_slot_positions, FaceId, MeshError};

/// Scene capability the preview needs: spawn and dispose a flat surface.
pub trait SurfaceHost {
    fn spawn_surface(&mut self, corners: [Vec3; 6], color: Color) -> Entity;
    fn despawn_surface(&mut self, surface: Entity);
}

/// Shared material of preview surfaces. The colour comes from vertex colours.
#[derive(Resource, Default)]
pub struct PreviewMaterial(pub Handle<StandardMaterial>);

/// Keeps at most one live preview of the face being dragged.
#[derive(Debug, Default)]
pub struct ExtrusionPreview {
    instance: Option<Entity>,
}

impl ExtrusionPreview {
    /// Replaces the live preview with the face of `mesh` offset by
    /// `displacement`.
    pub fn simulate(
        &mut self,
        mesh: &Mesh,
        displacement: Vec3,
        face: FaceId,
        color: Color,
        host: &mut impl SurfaceHost,
    ) -> Result<(), MeshError> {
        self.destroy(host);

        // Both triangles are rebuilt as is, shared corners included.
        let corners = face_slot_positions(mesh, face)?.map(|corner| corner + displacement);
        self.instance = Some(host.spawn_surface(corners, color));

        Ok(())
    }

    pub fn destroy(&mut self, host: &mut impl SurfaceHost) {
        if let Some(instance) = self.instance.take() {
            host.despawn_surface(instance);
        }
    }

    pub fn instance(&self) -> Option<Entity> {
        self.instance
    }
}

/// Builds the two preview triangles, flat shaded and painted with `color`.
pub fn preview_mesh(corners: [Vec3; 6], color: Color) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());

    mesh.insert_attribute(
        Mesh::ATTRIBUTE_POSITION,
        corners.iter().map(|c| c.to_array()).collect::<Vec<_>>(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, vec![color.as_rgba_f32(); 6]);

    mesh.with_computed_flat_normals()
}

/// [`SurfaceHost`] backed by [`Commands`].
///
/// The mesh asset is added by a deferred command so callers may keep the cube
/// mesh borrowed from `Assets<Mesh>` while previewing.
pub struct PreviewSpawner<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    transform: Transform,
}

impl<'a, 'w, 's> PreviewSpawner<'a, 'w, 's> {
    /// `transform` places the preview in the same space as the cube mesh.
    pub fn new(commands: &'a mut Commands<'w, 's>, transform: Transform) -> Self {
        Self {
            commands,
            transform,
        }
    }
}

impl SurfaceHost for PreviewSpawner<'_, '_, '_> {
    fn spawn_surface(&mut self, corners: [Vec3; 6], color: Color) -> Entity {
        let mesh = preview_mesh(corners, color);
        let transform = self.transform;

        let entity = self
            .commands
            .spawn(Name::from("Extrusion Preview"))
            .id();

        self.commands.add(move |world: &mut World| {
            let mesh = world.resource_mut::<Assets<Mesh>>().add(mesh);
            let material = world
                .get_resource::<PreviewMaterial>()
                .map(|material| material.0.clone())
                .unwrap_or_default();

            if let Some(mut preview) = world.get_entity_mut(entity) {
                preview.insert(PbrBundle {
                    mesh,
                    material,
                    transform,
                    ..default()
                });
            }
        });

        entity
    }

    fn despawn_surface(&mut self, surface: Entity) {
        self.commands.entity(surface).despawn();
    }
}
