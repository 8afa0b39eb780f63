use std::f32::consts::{FRAC_PI_2, PI, TAU};

use bevy::{
    input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel},
    prelude::*,
};

/// Camera the pointer is un-projected through.
#[derive(Component)]
pub struct PrimaryCamera;

#[derive(Bundle)]
pub struct PanOrbitCameraBundle {
    pub camera: Camera3dBundle,
    pub state: PanOrbitState,
    pub settings: PanOrbitSettings,
    pub primary: PrimaryCamera,
}

impl Default for PanOrbitCameraBundle {
    fn default() -> Self {
        Self {
            camera: Camera3dBundle::default(),
            state: PanOrbitState::default(),
            settings: PanOrbitSettings::default(),
            primary: PrimaryCamera,
        }
    }
}

#[derive(Component)]
pub struct PanOrbitState {
    pub center: Vec3,
    pub radius: f32,
    pub upside_down: bool,
    pub pitch: f32,
    pub yaw: f32,
}

/// The configuration of the orbit controller
#[derive(Component)]
pub struct PanOrbitSettings {
    /// Radians per pixel of mouse motion
    pub orbit_sensitivity: f32,
    /// Exponent per scrolled line
    pub zoom_sensitivity: f32,
    /// Button to hold for orbiting. The left button belongs to extrusion.
    pub orbit_key: MouseButton,
    /// For devices with smooth scrolling, like touchpads
    pub scroll_pixel_sensitivity: f32,
    pub min_radius: f32,
}

impl Default for PanOrbitState {
    fn default() -> Self {
        PanOrbitState {
            center: Vec3::ZERO,
            radius: 3.0,
            upside_down: false,
            pitch: -0.55196005,
            yaw: 0.4406954,
        }
    }
}

impl Default for PanOrbitSettings {
    fn default() -> Self {
        PanOrbitSettings {
            orbit_sensitivity: 0.2f32.to_radians(),
            zoom_sensitivity: 0.1,
            orbit_key: MouseButton::Right,
            scroll_pixel_sensitivity: 1.0 / 16.0,
            min_radius: 1.0,
        }
    }
}

#[derive(SystemSet, Hash, Debug, Eq, Clone, PartialEq)]
pub struct PanOrbitCameraUpdate;

pub struct PanOrbitCameraPlugin;

impl Plugin for PanOrbitCameraPlugin {
    fn build(&self, app: &mut App) {
        app.world.spawn(PanOrbitCameraBundle::default());

        app.add_systems(
            Update,
            Self::pan_orbit_camera_controller
                .run_if(any_with_component::<PanOrbitState>)
                .in_set(PanOrbitCameraUpdate),
        );
    }
}

impl PanOrbitCameraPlugin {
    fn pan_orbit_camera_controller(
        mouse: Res<ButtonInput<MouseButton>>,
        mut evr_motion: EventReader<MouseMotion>,
        mut evr_scroll: EventReader<MouseWheel>,
        mut q_camera: Query<(&PanOrbitSettings, &mut PanOrbitState, &mut Transform)>,
    ) {
        let total_motion: Vec2 = evr_motion.read().map(|ev| ev.delta).sum();

        let scroll: Vec<MouseWheel> = evr_scroll.read().cloned().collect();

        for (settings, mut state, mut transform) in &mut q_camera {
            let mut any = false;

            let total_scroll_lines: f32 = scroll
                .iter()
                .map(|ev| match ev.unit {
                    MouseScrollUnit::Line => ev.y,
                    MouseScrollUnit::Pixel => ev.y * settings.scroll_pixel_sensitivity,
                })
                .sum();

            if mouse.just_pressed(settings.orbit_key) {
                state.upside_down = state.pitch < -FRAC_PI_2 || state.pitch > FRAC_PI_2;
            }

            if mouse.pressed(settings.orbit_key) && total_motion != Vec2::ZERO {
                any = true;
                let mut orbit = -total_motion * settings.orbit_sensitivity;
                if state.upside_down {
                    orbit.x = -orbit.x;
                }

                state.yaw += orbit.x;
                state.pitch += orbit.y;
                // wrap around, to stay between +- 180 degrees
                if state.yaw > PI {
                    state.yaw -= TAU;
                }
                if state.yaw < -PI {
                    state.yaw += TAU;
                }
                if state.pitch > PI {
                    state.pitch -= TAU;
                }
                if state.pitch < -PI {
                    state.pitch += TAU;
                }
            }

            if total_scroll_lines != 0.0 {
                any = true;
                state.radius = (state.radius * (-total_scroll_lines * settings.zoom_sensitivity).exp())
                    .max(settings.min_radius);
            }

            if any || state.is_added() {
                // YXZ Euler Rotation performs yaw/pitch/roll.
                transform.rotation = Quat::from_euler(EulerRot::YXZ, state.yaw, state.pitch, 0.0);
                transform.translation = state.center + transform.back() * state.radius;
            }
        }
    }
}
