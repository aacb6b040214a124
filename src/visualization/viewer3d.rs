use std::collections::VecDeque;

use bevy::prelude::*;
use bevy::log::LogPlugin;
use bevy::math::primitives::{Sphere, Cuboid};
use log::info;

use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec3;

/// Component tagging each sphere with its body index into Scenario.system.bodies
#[derive(Component)]
struct BodyIndex3(pub usize);

/// Past screen-space positions, one trail per body
#[derive(Resource, Default)]
struct Trails(Vec<VecDeque<Vec3>>);

/// World-space → screen-space scaling factor for positions
const SCALE3D: f32 = 25.0;

/// Distance of the camera from the origin along +Z
const CAMERA_DISTANCE: f32 = 1500.0;

/// Sphere radius in simulation units
const BODY_RADIUS: f32 = 0.4;

/// Half-length of each axis in simulation units
const AXIS_EXTENT: f32 = 20.0;

/// Oldest trail points are dropped past this length
const MAX_TRAIL: usize = 2000;

/// Open a window and step `scenario` once per frame until it is finished,
/// drawing every body and its trajectory so far
pub fn run_3d(scenario: Scenario) {
    info!("run_3d: starting Bevy 3D viewer with {} bodies", scenario.system.bodies.len());

    let trails = Trails(vec![VecDeque::with_capacity(MAX_TRAIL); scenario.system.bodies.len()]);

    // Logging is already set up by the binary through env_logger
    App::new()
        .insert_resource(scenario)
        .insert_resource(trails)
        .add_plugins(DefaultPlugins.build().disable::<LogPlugin>())
        .add_systems(Startup, setup_3d)
        .add_systems(Update, (physics_step_3d, sync_transforms_3d, draw_trails_3d).chain())
        .run();
}

fn to_screen(x: &NVec3) -> Vec3 {
    Vec3::new(x.x as f32, x.y as f32, x.z as f32) * SCALE3D
}

/// Distinct hue per body index
fn body_color(i: usize, n: usize) -> Color {
    let hue = 360.0 * (i as f32) / (n.max(1) as f32);
    Color::hsl(hue, 0.85, 0.6)
}

/// Startup system: spawn camera, light, and one sphere per body
fn setup_3d(mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scenario: Res<Scenario>,
) {
    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)),
            ..Default::default()
        },
        transform: Transform::from_xyz(400.0, 300.0, CAMERA_DISTANCE)
            .looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 1500.0,
            range: 1000.0,
            ..Default::default()
        },
        transform: Transform::from_xyz(100.0, 100.0, CAMERA_DISTANCE),
        ..Default::default()
    });

    spawn_axes(&mut commands, &mut meshes, &mut materials);

    let positions = scenario.state().positions();
    let n = positions.len();
    for (i, x) in positions.iter().enumerate() {
        commands.spawn((
            PbrBundle {
                mesh: meshes.add(Sphere::new(BODY_RADIUS * SCALE3D).mesh()),
                material: materials.add(StandardMaterial {
                    base_color: body_color(i, n),
                    unlit: true,
                    ..Default::default()
                }),
                transform: Transform::from_translation(to_screen(x)),
                ..Default::default()
            },
            BodyIndex3(i),
        ));
    }
}

/// One integrator step per frame; stops once the clock runs out
fn physics_step_3d(mut scenario: ResMut<Scenario>, mut trails: ResMut<Trails>) {
    if !scenario.step() {
        return;
    }

    for (trail, x) in trails.0.iter_mut().zip(scenario.state().positions().iter()) {
        trail.push_back(to_screen(x));
        if trail.len() > MAX_TRAIL {
            trail.pop_front();
        }
    }
}

fn sync_transforms_3d(
    scenario: Res<Scenario>,
    mut query: Query<(&BodyIndex3, &mut Transform)>,
) {
    let positions = scenario.state().positions();
    for (BodyIndex3(i), mut transform) in &mut query {
        if let Some(x) = positions.get(*i) {
            transform.translation = to_screen(x);
        }
    }
}

fn draw_trails_3d(mut gizmos: Gizmos, trails: Res<Trails>) {
    let n = trails.0.len();
    for (i, trail) in trails.0.iter().enumerate() {
        if trail.len() < 2 {
            continue;
        }
        gizmos.linestrip(trail.iter().copied(), body_color(i, n));
    }
}

// =========================================================================================
// Draw 3D axes for visual reference
// =========================================================================================

fn spawn_axes(commands: &mut Commands, meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>) {
    // Axis length and thickness, in *world* units
    let axis_len = 2.0 * AXIS_EXTENT * SCALE3D;
    let axis_thickness = 0.05 * SCALE3D;

    let axes = [
        (Cuboid::new(axis_len, axis_thickness, axis_thickness), Color::srgb(1.0, 0.0, 0.0)), // X
        (Cuboid::new(axis_thickness, axis_len, axis_thickness), Color::srgb(0.0, 1.0, 0.0)), // Y
        (Cuboid::new(axis_thickness, axis_thickness, axis_len), Color::srgb(0.0, 0.0, 1.0)), // Z
    ];

    for (cuboid, color) in axes {
        // Cuboid is centered at its transform origin, so it crosses the world origin
        commands.spawn(PbrBundle {
            mesh: meshes.add(cuboid.mesh()),
            material: materials.add(StandardMaterial {
                base_color: color,
                unlit: true,
                ..Default::default()
            }),
            transform: Transform::from_xyz(0.0, 0.0, 0.0),
            ..Default::default()
        });
    }
}
