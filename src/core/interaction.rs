use bevy::{
    math::Affine3A, prelude::*, render::primitives::Aabb, window::PrimaryWindow,
};
use thiserror::Error;

use crate::utils::projection::{
    displacement_along_normal, pointer_ray, screen_to_world, CameraState,
};

use super::{
    drag::{DragError, DragState},
    highlight::{draw_face_highlights, FaceVisual, HighlightTracker},
    mesh::{extrude_face, FaceId, MeshError, FACE_COUNT},
    pan_orbit_camera_plugin::{PanOrbitCameraUpdate, PrimaryCamera},
    picking::{pick_face, FaceHit},
    preview::{ExtrusionPreview, PreviewSpawner, SurfaceHost},
    settings::ExtrusionSettings,
};

pub struct InteractionPlugin;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InteractionError {
    #[error(transparent)]
    Drag(#[from] DragError),
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Pointer position in logical pixels, origin at the top left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub position: Vec2,
}

/// Everything a handler needs to know about the view for one event.
pub struct ViewContext<'a> {
    pub camera: CameraState,
    /// Maps world space into the space of the cube's vertex buffer.
    pub world_to_local: Affine3A,
    pub settings: &'a ExtrusionSettings,
}

/// A committed extrusion, in the cube's local space.
#[derive(Event, Clone, Copy, Debug, PartialEq)]
pub struct FaceExtruded {
    pub entity: Entity,
    pub face: FaceId,
    pub displacement: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extrusion {
    pub face: FaceId,
    pub displacement: Vec3,
}

/// Interaction state of one extrudable cube.
#[derive(Component, Default)]
pub struct CubeInteraction {
    drag: DragState,
    highlight: HighlightTracker,
    preview: ExtrusionPreview,
    last_displacement: Vec3,
}

impl CubeInteraction {
    pub fn new(home_materials: [usize; FACE_COUNT]) -> Self {
        Self {
            highlight: HighlightTracker::new(home_materials),
            ..default()
        }
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn highlight(&self) -> &HighlightTracker {
        &self.highlight
    }

    pub fn preview(&self) -> &ExtrusionPreview {
        &self.preview
    }

    /// Displacement of the latest drag sample, in local space.
    pub fn last_displacement(&self) -> Vec3 {
        self.last_displacement
    }

    /// Local space displacement the pointer currently represents, if dragging.
    fn sample_displacement(&self, event: &PointerEvent, view: &ViewContext) -> Option<(FaceId, Vec3)> {
        let session = self.drag.session()?;

        let current = screen_to_world(event.position, view.settings.projection_depth, &view.camera);
        let world = displacement_along_normal(current, session.anchor, session.normal)
            * view.settings.displacement_scale;

        Some((session.face, view.world_to_local.transform_vector3(world)))
    }

    pub fn on_pointer_move(
        &mut self,
        event: &PointerEvent,
        pick: Option<&FaceHit>,
        mesh: &Mesh,
        view: &ViewContext,
        host: &mut impl SurfaceHost,
    ) -> Result<(), InteractionError> {
        let Some((face, displacement)) = self.sample_displacement(event, view) else {
            match pick {
                Some(hit) => {
                    let quad = hit.face.quad();
                    if self.highlight.visual(quad) != Some(FaceVisual::Hovered) {
                        debug!("Hovering face {quad}");
                    }
                    self.highlight.hover(quad);
                }
                None => self.highlight.clear(),
            }
            return Ok(());
        };

        self.last_displacement = displacement;
        self.preview
            .simulate(mesh, displacement, face, view.settings.preview_color, host)?;

        debug!("Previewing face {face} at {displacement}");
        Ok(())
    }

    /// Starts a drag on the picked face, or commits the running one.
    pub fn on_pointer_down(
        &mut self,
        event: &PointerEvent,
        pick: Option<&FaceHit>,
        mesh: &mut Mesh,
        view: &ViewContext,
        host: &mut impl SurfaceHost,
    ) -> Result<Option<Extrusion>, InteractionError> {
        match self.sample_displacement(event, view) {
            Some((face, displacement)) => {
                self.last_displacement = displacement;

                let moved = extrude_face(mesh, displacement, face)?;
                self.drag.end();
                self.preview.destroy(host);

                info!("Extruded face {face} by {displacement} ({moved} vertices)");
                Ok(Some(Extrusion { face, displacement }))
            }
            None => {
                let Some(hit) = pick else {
                    return Ok(None);
                };

                let anchor =
                    screen_to_world(event.position, view.settings.projection_depth, &view.camera);
                self.drag.begin(anchor, hit.normal, hit.face)?;
                self.highlight.select(hit.face.quad());
                self.last_displacement = Vec3::ZERO;

                debug!("Started dragging face {} along {}", hit.face, hit.normal);
                Ok(None)
            }
        }
    }
}

/// Camera state of the primary camera, refreshed every frame.
///
/// `None` until the camera has a viewport.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct ActiveCamera(pub Option<CameraState>);

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<FaceExtruded>()
            .init_resource::<ActiveCamera>()
            .add_systems(
                Update,
                (
                    Self::track_primary_camera,
                    Self::dispatch_pointer_events,
                    draw_face_highlights,
                )
                    .chain()
                    .after(PanOrbitCameraUpdate),
            );
    }
}

impl InteractionPlugin {
    fn track_primary_camera(
        camera: Query<(&Camera, &GlobalTransform), With<PrimaryCamera>>,
        mut active_camera: ResMut<ActiveCamera>,
    ) {
        let state = camera
            .get_single()
            .ok()
            .and_then(|(camera, transform)| CameraState::from_camera(camera, transform));

        if active_camera.0 != state {
            active_camera.0 = state;
        }
    }

    /// Feeds this frame's latest cursor move, then any left click, to every
    /// cube.
    fn dispatch_pointer_events(
        mut commands: Commands,
        mut cursor_moved: EventReader<CursorMoved>,
        mouse: Res<ButtonInput<MouseButton>>,
        window: Query<&Window, With<PrimaryWindow>>,
        active_camera: Res<ActiveCamera>,
        mut cubes: Query<(Entity, &Handle<Mesh>, &GlobalTransform, &mut CubeInteraction)>,
        mut meshes: ResMut<Assets<Mesh>>,
        settings: Res<ExtrusionSettings>,
        mut extruded: EventWriter<FaceExtruded>,
    ) {
        let moved = cursor_moved.read().last().map(|event| event.position);
        let pressed = mouse.just_pressed(MouseButton::Left);
        if moved.is_none() && !pressed {
            return;
        }

        let Some(cursor) = moved.or_else(|| {
            window
                .get_single()
                .ok()
                .and_then(|window| window.cursor_position())
        }) else {
            return;
        };
        let Some(camera_state) = active_camera.0 else {
            warn!("Primary camera has no viewport yet");
            return;
        };
        let ray = pointer_ray(cursor, &camera_state);

        let event = PointerEvent { position: cursor };

        for (entity, handle, transform, mut interaction) in cubes.iter_mut() {
            let affine = transform.affine();
            let view = ViewContext {
                camera: camera_state,
                world_to_local: affine.inverse(),
                settings: &settings,
            };
            let mut host = PreviewSpawner::new(&mut commands, transform.compute_transform());

            // `get_mut` marks the asset modified. Only a click may edit it.
            let Some(mesh) = meshes.get(handle) else {
                warn!("Cube {entity:?} has no mesh asset");
                continue;
            };
            let pick = match ray.map(|ray| pick_face(mesh, &affine, ray)).transpose() {
                Ok(pick) => pick.flatten(),
                Err(error) => {
                    error!("Picking cube {entity:?} failed: {error}");
                    continue;
                }
            };

            if moved.is_some() {
                if let Err(error) =
                    interaction.on_pointer_move(&event, pick.as_ref(), mesh, &view, &mut host)
                {
                    error!("Pointer move on cube {entity:?} failed: {error}");
                }
            }

            if !pressed {
                continue;
            }
            let Some(mesh) = meshes.get_mut(handle) else {
                continue;
            };

            match interaction.on_pointer_down(&event, pick.as_ref(), mesh, &view, &mut host) {
                Ok(Some(extrusion)) => {
                    // Bounds are recomputed for entities without an Aabb.
                    commands.entity(entity).remove::<Aabb>();
                    extruded.send(FaceExtruded {
                        entity,
                        face: extrusion.face,
                        displacement: extrusion.displacement,
                    });
                }
                Ok(None) => {}
                Err(error) => error!("Pointer down on cube {entity:?} failed: {error}"),
            }
        }
    }
}

#[cfg(test)]
mod test {
    use std::f32::consts::{FRAC_1_SQRT_2, FRAC_PI_4};

    use bevy::{math::Affine3A, prelude::*, render::primitives::Aabb};

    use super::{
        ActiveCamera, CubeInteraction, Extrusion, FaceExtruded, InteractionPlugin, PointerEvent,
        ViewContext,
    };
    use crate::{
        core::{
            highlight::FaceVisual,
            mesh::{cube_mesh, positions, FaceId},
            picking::FaceHit,
            preview::testing::RecordingHost,
            settings::ExtrusionSettings,
        },
        utils::projection::CameraState,
    };

    // With identity matrices and a 2x2 viewport, pixel (x, y) un-projects to
    // (x - 1, 1 - y, depth).
    fn identity_camera() -> CameraState {
        CameraState {
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            viewport: Vec2::new(2.0, 2.0),
        }
    }

    fn view(settings: &ExtrusionSettings) -> ViewContext<'_> {
        ViewContext {
            camera: identity_camera(),
            world_to_local: Affine3A::IDENTITY,
            settings,
        }
    }

    fn pointer(x: f32, y: f32) -> PointerEvent {
        PointerEvent {
            position: Vec2::new(x, y),
        }
    }

    fn hit_on(face: FaceId, point: Vec3, normal: Vec3) -> FaceHit {
        FaceHit {
            face,
            point,
            normal,
        }
    }

    fn face_zero_hit() -> FaceHit {
        hit_on(FaceId(0), Vec3::new(0.5, 0.0, 0.0), Vec3::X)
    }

    fn vertex(mesh: &Mesh, index: usize) -> Vec3 {
        Vec3::from_array(positions(mesh).unwrap()[index])
    }

    #[test]
    fn test_hover_then_leave() {
        let settings = ExtrusionSettings::default();
        let mesh = cube_mesh(1.0);
        let mut host = RecordingHost::default();
        let mut interaction = CubeInteraction::default();

        let hit = hit_on(FaceId(5), Vec3::new(0.0, 0.5, 0.1), Vec3::Y);
        interaction
            .on_pointer_move(&pointer(1.0, 0.5), Some(&hit), &mesh, &view(&settings), &mut host)
            .unwrap();

        for face in 0..6 {
            let expected = if face == 2 {
                FaceVisual::Hovered
            } else {
                FaceVisual::Home
            };
            assert_eq!(interaction.highlight().visual(face), Some(expected));
        }

        interaction
            .on_pointer_move(&pointer(0.0, 0.0), None, &mesh, &view(&settings), &mut host)
            .unwrap();
        for face in 0..6 {
            assert_eq!(interaction.highlight().visual(face), Some(FaceVisual::Home));
        }

        // Hovering never touches geometry or spawns previews.
        assert_eq!(positions(&mesh).unwrap(), positions(&cube_mesh(1.0)).unwrap());
        assert!(host.live.is_empty());
        assert!(!interaction.drag().is_dragging());
    }

    #[test]
    fn test_full_extrude_cycle() {
        let settings = ExtrusionSettings::default();
        let mut mesh = cube_mesh(1.0);
        let original = cube_mesh(1.0);
        let mut host = RecordingHost::default();
        let mut interaction = CubeInteraction::default();
        let hit = face_zero_hit();

        // Pixel (1.5, 1.0) un-projects to x = 0.5.
        let started = interaction
            .on_pointer_down(&pointer(1.5, 1.0), Some(&hit), &mut mesh, &view(&settings), &mut host)
            .unwrap();
        assert_eq!(started, None);

        let session = interaction.drag().session().copied().unwrap();
        assert_eq!(session.face, FaceId(0));
        assert_eq!(session.normal, Vec3::X);
        assert!((session.anchor.x - 0.5).abs() < 1e-6);
        assert_eq!(interaction.highlight().visual(0), Some(FaceVisual::Selected));

        // Moving to x = 0.7 represents +0.2 along the normal.
        interaction
            .on_pointer_move(&pointer(1.7, 1.0), Some(&hit), &mesh, &view(&settings), &mut host)
            .unwrap();
        assert!(interaction
            .last_displacement()
            .abs_diff_eq(Vec3::new(0.2, 0.0, 0.0), 1e-5));
        assert_eq!(host.live.len(), 1);
        let (_, corners, color) = host.live[0];
        assert_eq!(color, settings.preview_color);
        for corner in corners {
            assert!((corner.x - 0.7).abs() < 1e-5);
        }

        // The geometry is untouched until commit.
        assert_eq!(positions(&mesh).unwrap(), positions(&original).unwrap());

        let committed = interaction
            .on_pointer_down(&pointer(1.7, 1.0), Some(&hit), &mut mesh, &view(&settings), &mut host)
            .unwrap()
            .unwrap();
        assert_eq!(committed.face, FaceId(0));
        assert!(committed
            .displacement
            .abs_diff_eq(Vec3::new(0.2, 0.0, 0.0), 1e-5));

        for index in 0..8 {
            let before = vertex(&original, index);
            let after = vertex(&mesh, index);
            if [1, 3, 5, 7].contains(&index) {
                assert!(after.abs_diff_eq(before + Vec3::new(0.2, 0.0, 0.0), 1e-5));
            } else {
                assert_eq!(after, before);
            }
        }

        assert!(host.live.is_empty());
        assert_eq!(interaction.preview().instance(), None);
        assert!(!interaction.drag().is_dragging());
    }

    #[test]
    fn test_off_mesh_commit() {
        let settings = ExtrusionSettings::default();
        let mut mesh = cube_mesh(1.0);
        let mut host = RecordingHost::default();
        let mut interaction = CubeInteraction::default();

        interaction
            .on_pointer_down(
                &pointer(1.5, 1.0),
                Some(&face_zero_hit()),
                &mut mesh,
                &view(&settings),
                &mut host,
            )
            .unwrap();

        // Dragged off the cube.
        interaction
            .on_pointer_move(&pointer(1.9, 0.2), None, &mesh, &view(&settings), &mut host)
            .unwrap();
        let last = interaction.last_displacement();
        assert!(last.abs_diff_eq(Vec3::new(0.4, 0.0, 0.0), 1e-5));

        let committed = interaction
            .on_pointer_down(&pointer(1.9, 0.2), None, &mut mesh, &view(&settings), &mut host)
            .unwrap();
        assert_eq!(
            committed.map(|Extrusion { face, .. }| face),
            Some(FaceId(0))
        );
        assert!(committed.unwrap().displacement.abs_diff_eq(last, 1e-6));

        assert!((vertex(&mesh, 7).x - 0.9).abs() < 1e-5);
        assert!((vertex(&mesh, 6).x + 0.5).abs() < 1e-6);
        assert!(host.live.is_empty());
        assert!(!interaction.drag().is_dragging());
    }

    #[test]
    fn test_push_in_is_signed() {
        let settings = ExtrusionSettings::default();
        let mut mesh = cube_mesh(1.0);
        let mut host = RecordingHost::default();
        let mut interaction = CubeInteraction::default();

        interaction
            .on_pointer_down(
                &pointer(1.5, 1.0),
                Some(&face_zero_hit()),
                &mut mesh,
                &view(&settings),
                &mut host,
            )
            .unwrap();
        let committed = interaction
            .on_pointer_down(&pointer(1.2, 1.0), None, &mut mesh, &view(&settings), &mut host)
            .unwrap()
            .unwrap();

        assert!(committed
            .displacement
            .abs_diff_eq(Vec3::new(-0.3, 0.0, 0.0), 1e-5));
        assert!((vertex(&mesh, 1).x - 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_displacement_scale_and_local_space() {
        let settings = ExtrusionSettings {
            displacement_scale: 0.5,
            ..Default::default()
        };
        let mut mesh = cube_mesh(1.0);
        let mut host = RecordingHost::default();
        let mut interaction = CubeInteraction::default();

        // The cube is scaled by 2 in the world: local moves are halved again.
        let mut view = view(&settings);
        view.world_to_local = Affine3A::from_scale(Vec3::splat(2.0)).inverse();

        interaction
            .on_pointer_down(&pointer(1.5, 1.0), Some(&face_zero_hit()), &mut mesh, &view, &mut host)
            .unwrap();
        let committed = interaction
            .on_pointer_down(&pointer(1.9, 1.0), None, &mut mesh, &view, &mut host)
            .unwrap()
            .unwrap();

        assert!(committed
            .displacement
            .abs_diff_eq(Vec3::new(0.1, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn test_pointer_down_off_mesh_while_idle() {
        let settings = ExtrusionSettings::default();
        let mut mesh = cube_mesh(1.0);
        let mut host = RecordingHost::default();
        let mut interaction = CubeInteraction::default();

        let result = interaction
            .on_pointer_down(&pointer(0.1, 0.1), None, &mut mesh, &view(&settings), &mut host)
            .unwrap();

        assert_eq!(result, None);
        assert!(!interaction.drag().is_dragging());
        assert_eq!(positions(&mesh).unwrap(), positions(&cube_mesh(1.0)).unwrap());
    }

    #[test]
    fn test_move_while_dragging_keeps_selection() {
        let settings = ExtrusionSettings::default();
        let mut mesh = cube_mesh(1.0);
        let mut host = RecordingHost::default();
        let mut interaction = CubeInteraction::default();

        interaction
            .on_pointer_down(
                &pointer(1.5, 1.0),
                Some(&face_zero_hit()),
                &mut mesh,
                &view(&settings),
                &mut host,
            )
            .unwrap();

        let other = hit_on(FaceId(8), Vec3::new(0.0, 0.0, 0.5), Vec3::Z);
        for x in [1.6, 1.7, 1.8] {
            interaction
                .on_pointer_move(&pointer(x, 1.0), Some(&other), &mesh, &view(&settings), &mut host)
                .unwrap();
        }

        assert_eq!(host.live.len(), 1);
        assert_eq!(interaction.highlight().visual(0), Some(FaceVisual::Selected));
        assert_eq!(interaction.highlight().visual(4), Some(FaceVisual::Home));
        assert_eq!(interaction.drag().session().map(|s| s.face), Some(FaceId(0)));
    }

    // The cube is turned so its +X face looks at the camera at 45 degrees.
    // Pixel (1.3, 1.0) then lands on that face, (0.2, 1.8) misses the cube.
    fn dispatch_app() -> (App, Entity) {
        let mut app = App::new();
        app.add_event::<CursorMoved>()
            .add_event::<FaceExtruded>()
            .add_event::<AssetEvent<Mesh>>()
            .init_resource::<ButtonInput<MouseButton>>()
            .init_resource::<Assets<Mesh>>()
            .insert_resource(ExtrusionSettings::default())
            .insert_resource(ActiveCamera(Some(identity_camera())))
            .add_systems(Update, InteractionPlugin::dispatch_pointer_events)
            .add_systems(PostUpdate, Assets::<Mesh>::asset_events);

        let mesh = app.world.resource_mut::<Assets<Mesh>>().add(cube_mesh(1.0));
        let transform = Transform::from_rotation(Quat::from_rotation_y(-FRAC_PI_4));
        let cube = app
            .world
            .spawn((
                mesh,
                GlobalTransform::from(transform),
                Aabb::default(),
                CubeInteraction::default(),
            ))
            .id();

        (app, cube)
    }

    fn frame(app: &mut App, moves: &[(f32, f32)], press: bool) {
        for &(x, y) in moves {
            app.world.send_event(CursorMoved {
                window: Entity::PLACEHOLDER,
                position: Vec2::new(x, y),
                delta: None,
            });
        }

        {
            let mut mouse = app.world.resource_mut::<ButtonInput<MouseButton>>();
            mouse.release(MouseButton::Left);
            mouse.clear();
            if press {
                mouse.press(MouseButton::Left);
            }
        }

        app.update();
    }

    fn extrusions(app: &App) -> Vec<FaceExtruded> {
        let events = app.world.resource::<Events<FaceExtruded>>();
        let mut reader = events.get_reader();
        let sent = reader.read(events).copied().collect();
        sent
    }

    fn mesh_modifications(app: &App) -> usize {
        let events = app.world.resource::<Events<AssetEvent<Mesh>>>();
        let mut reader = events.get_reader();
        let count = reader
            .read(events)
            .filter(|event| matches!(event, AssetEvent::Modified { .. }))
            .count();
        count
    }

    fn preview_count(app: &mut App) -> usize {
        let mut query = app.world.query::<&Name>();
        query
            .iter(&app.world)
            .filter(|name| name.as_str() == "Extrusion Preview")
            .count()
    }

    fn cube_positions(app: &App, cube: Entity) -> Vec<[f32; 3]> {
        let handle = app.world.get::<Handle<Mesh>>(cube).unwrap();
        let meshes = app.world.resource::<Assets<Mesh>>();
        positions(meshes.get(handle).unwrap()).unwrap().to_vec()
    }

    #[test]
    fn test_dispatch_uses_latest_move_of_frame() {
        let (mut app, cube) = dispatch_app();

        frame(&mut app, &[(0.2, 1.8), (1.3, 1.0)], true);

        let interaction = app.world.get::<CubeInteraction>(cube).unwrap();
        let session = interaction.drag().session().copied().unwrap();
        assert_eq!(session.face.quad(), 0);
        assert!(session.anchor.abs_diff_eq(Vec3::new(0.3, 0.0, 0.04), 1e-5));
        assert!(session
            .normal
            .abs_diff_eq(Vec3::new(FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2), 1e-5));
        assert_eq!(interaction.highlight().visual(0), Some(FaceVisual::Selected));

        assert!(app.world.get::<Aabb>(cube).is_some());
        assert!(extrusions(&app).is_empty());
    }

    #[test]
    fn test_dispatch_commit_emits_event_and_resets_bounds() {
        let (mut app, cube) = dispatch_app();
        let original = cube_positions(&app, cube);

        frame(&mut app, &[(1.3, 1.0)], true);
        frame(&mut app, &[(1.5, 1.0)], false);
        assert_eq!(preview_count(&mut app), 1);

        frame(&mut app, &[(1.5, 1.0)], true);

        // 0.2 along screen x is 0.2 / sqrt(2) along the turned face normal.
        let expected = Vec3::new(0.2 * FRAC_1_SQRT_2, 0.0, 0.0);
        let sent = extrusions(&app);
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].entity, cube);
        assert_eq!(sent[0].face.quad(), 0);
        assert!(sent[0].displacement.abs_diff_eq(expected, 1e-5));

        assert!(app.world.get::<Aabb>(cube).is_none());
        assert_eq!(preview_count(&mut app), 0);
        assert!(mesh_modifications(&app) > 0);

        let after = cube_positions(&app, cube);
        for (vertex, (before, after)) in original.iter().zip(after.iter()).enumerate() {
            let before = Vec3::from_array(*before);
            let after = Vec3::from_array(*after);
            if [1, 3, 5, 7].contains(&vertex) {
                assert!(after.abs_diff_eq(before + expected, 1e-5));
            } else {
                assert_eq!(after, before);
            }
        }

        let interaction = app.world.get::<CubeInteraction>(cube).unwrap();
        assert!(!interaction.drag().is_dragging());
    }

    #[test]
    fn test_dispatch_idle_miss_changes_nothing() {
        let (mut app, cube) = dispatch_app();
        let original = cube_positions(&app, cube);

        frame(&mut app, &[(0.2, 1.8)], true);

        let interaction = app.world.get::<CubeInteraction>(cube).unwrap();
        assert!(!interaction.drag().is_dragging());
        for face in 0..6 {
            assert_eq!(interaction.highlight().visual(face), Some(FaceVisual::Home));
        }
        assert_eq!(cube_positions(&app, cube), original);
        assert!(app.world.get::<Aabb>(cube).is_some());
        assert!(extrusions(&app).is_empty());
        assert_eq!(preview_count(&mut app), 0);
    }

    #[test]
    fn test_dispatch_hover_leaves_mesh_asset_untouched() {
        let (mut app, cube) = dispatch_app();

        frame(&mut app, &[(1.3, 1.0)], false);
        frame(&mut app, &[(1.2, 0.9)], false);

        let interaction = app.world.get::<CubeInteraction>(cube).unwrap();
        assert_eq!(interaction.highlight().visual(0), Some(FaceVisual::Hovered));
        assert_eq!(mesh_modifications(&app), 0);
    }
}
