use bevy::{
    prelude::*, render::view::RenderLayers, window::WindowResolution, winit::WinitSettings,
};

use super::{
    interaction::{CubeInteraction, InteractionPlugin},
    mesh::cube_mesh,
    pan_orbit_camera_plugin::{PanOrbitCameraPlugin, PanOrbitCameraUpdate, PrimaryCamera},
    preview::PreviewMaterial,
    settings::{ExtrusionSettings, FacePalette},
};

pub struct EditorPlugin {
    /// Canvas to render into when running in a browser.
    pub main_window_canvas_selector: Option<String>,
    pub width: f32,
    pub height: f32,
    pub settings: ExtrusionSettings,
}

#[derive(Component)]
struct SyncWithCamera;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        let embedded = self.main_window_canvas_selector.is_some();

        app.add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Cube Extrude".into(),
                    resolution: WindowResolution::new(self.width, self.height),
                    transparent: embedded,
                    canvas: self.main_window_canvas_selector.clone(),
                    ..default()
                }),
                ..default()
            }),
            PanOrbitCameraPlugin,
            InteractionPlugin,
        ))
        .insert_resource(WinitSettings::game())
        .insert_resource(self.settings.clone())
        .insert_resource(FacePalette::default())
        .init_resource::<PreviewMaterial>()
        .insert_resource(ClearColor(if embedded {
            Color::NONE
        } else {
            Color::rgb(0.12, 0.12, 0.14)
        }))
        .add_systems(Startup, Self::populate_scene)
        .add_systems(Update, Self::sync_light_with_camera.after(PanOrbitCameraUpdate));
    }
}

impl EditorPlugin {
    fn populate_scene(
        mut ambient_light: ResMut<AmbientLight>,
        mut commands: Commands,
        mut meshes: ResMut<Assets<Mesh>>,
        mut materials: ResMut<Assets<StandardMaterial>>,
        mut preview_material: ResMut<PreviewMaterial>,
        settings: Res<ExtrusionSettings>,
        palette: Res<FacePalette>,
    ) {
        ambient_light.brightness = 250.0;

        preview_material.0 = materials.add(StandardMaterial {
            cull_mode: None,
            double_sided: true,
            base_color: Color::WHITE,
            ..default()
        });

        commands.spawn((
            PbrBundle {
                mesh: meshes.add(cube_mesh(settings.cube_size)),
                material: materials.add(StandardMaterial {
                    base_color: palette.color(0),
                    alpha_mode: AlphaMode::Blend,
                    ..default()
                }),
                ..default()
            },
            CubeInteraction::new(std::array::from_fn(|face| face)),
            Name::from("Cube"),
        ));

        commands.spawn((
            DirectionalLightBundle {
                directional_light: DirectionalLight {
                    illuminance: light_consts::lux::OVERCAST_DAY * 2.,
                    ..default()
                },

                ..default()
            },
            SyncWithCamera,
            RenderLayers::all(),
        ));

        info!("Spawned cube of size {}", settings.cube_size);
    }

    fn sync_light_with_camera(
        mut query: Query<&mut Transform, (With<SyncWithCamera>, Without<PrimaryCamera>)>,
        camera_query: Query<&Transform, With<PrimaryCamera>>,
    ) {
        let Ok(camera_transform) = camera_query.get_single() else {
            return;
        };

        for mut light_transform in query.iter_mut() {
            *light_transform = *camera_transform;
        }
    }
}
