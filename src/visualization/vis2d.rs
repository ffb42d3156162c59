use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use rand::Rng;

use crate::simulation::forces::{body_acceleration, gravity_acceleration};
use crate::simulation::integrator::{step_frame, ControlInput};
use crate::simulation::particles::{emit_exhaust, update_particles, EXHAUST_LIFE};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;

/// Cap on the drawn length of a gravity arrow, world units
const ARROW_MAX_LEN: f64 = 100.0;
/// Arrowhead stroke length, world units
const ARROW_HEAD: f32 = 10.0;

const TRAIL_COLOR: Color = Color::srgb(0.5, 0.0, 0.5);
const TARGET_COLOR: Color = Color::srgb(0.0, 1.0, 0.0);
const THRUSTER_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);

/// Component tagging the probe's hull sprite
#[derive(Component)]
struct ProbeSprite;

/// Component tagging the camera that follows the probe
#[derive(Component)]
struct MainCamera;

/// Component tagging the telemetry text block
#[derive(Component)]
struct TelemetryText;

/// Component tagging the mission banner, hidden until the target is reached
#[derive(Component)]
struct MissionText;

pub fn run_2d(scenario: Scenario) {
    let (width, height) = (scenario.display.width, scenario.display.height);

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Space probe under multiple gravities".into(),
                resolution: (width, height).into(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_scene)
        // One logical frame: sample input and integrate, update decoration,
        // then read state back out for drawing. Chained to keep that order.
        .add_systems(
            Update,
            (
                control_and_physics,
                exhaust_step,
                mission_check,
                sync_probe,
                follow_camera,
                draw_trail,
                draw_gravity_arrows,
                draw_particles,
                update_telemetry,
                exit_on_escape,
            )
                .chain(),
        )
        .run();
}

fn to_screen(p: &NVec2) -> Vec2 {
    Vec2::new(p.x as f32, p.y as f32)
}

/// Startup system: camera, star field, one circle per mass, target marker,
/// probe sprite, and the two text blocks
fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    scenario: Res<Scenario>,
) {
    info!(
        "scenario ready: {} masses, target at ({:.0}, {:.0})",
        scenario.masses.len(),
        scenario.target.x.x,
        scenario.target.x.y
    );

    commands.spawn((Camera2dBundle::default(), MainCamera));

    // Background stars, scattered once over the playfield
    let mut rng = rand::thread_rng();
    let area = scenario.display.star_area;
    for _ in 0..scenario.display.star_count {
        let x = rng.gen_range(-area..=area) as f32;
        let y = rng.gen_range(-area..=area) as f32;
        commands.spawn(SpriteBundle {
            sprite: Sprite {
                color: Color::WHITE,
                custom_size: Some(Vec2::splat(2.0)),
                ..Default::default()
            },
            transform: Transform::from_xyz(x, y, -2.0),
            ..Default::default()
        });
    }

    // One circle mesh per mass
    for body in scenario.masses.iter() {
        let [r, g, b] = body.color;
        commands.spawn(MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius as f32))),
            material: materials.add(ColorMaterial::from(Color::srgb(r, g, b))),
            transform: Transform::from_xyz(body.x.x as f32, body.x.y as f32, -1.0),
            ..Default::default()
        });
    }

    // Target marker, kept visible even when the threshold is tiny
    let target = &scenario.target;
    commands.spawn(MaterialMesh2dBundle {
        mesh: Mesh2dHandle(meshes.add(Circle::new((target.radius as f32).max(5.0)))),
        material: materials.add(ColorMaterial::from(TARGET_COLOR)),
        transform: Transform::from_xyz(target.x.x as f32, target.x.y as f32, -1.0),
        ..Default::default()
    });

    // Probe: white hull with a red thruster block on the back edge
    let probe = &scenario.probe;
    let (w, h) = (probe.width as f32, probe.height as f32);
    commands
        .spawn((
            SpriteBundle {
                sprite: Sprite {
                    color: Color::WHITE,
                    custom_size: Some(Vec2::new(w, h)),
                    ..Default::default()
                },
                transform: Transform::from_xyz(probe.x.x as f32, probe.x.y as f32, 1.0),
                ..Default::default()
            },
            ProbeSprite,
        ))
        .with_children(|parent| {
            parent.spawn(SpriteBundle {
                sprite: Sprite {
                    color: THRUSTER_COLOR,
                    custom_size: Some(Vec2::new(w / 4.0, h / 3.0)),
                    ..Default::default()
                },
                // Centered on the back edge, vertically centered
                transform: Transform::from_xyz(-3.0 * w / 8.0, 0.0, 0.1),
                ..Default::default()
            });
        });

    // Telemetry block, five lines in the top-left corner
    let style = TextStyle {
        font_size: 18.0,
        color: Color::WHITE,
        ..Default::default()
    };
    commands.spawn((
        TextBundle::from_sections([
            TextSection::new("", style.clone()),
            TextSection::new("", style.clone()),
            TextSection::new("", style.clone()),
            TextSection::new("", style.clone()),
            TextSection::new("", style.clone()),
        ])
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..Default::default()
        }),
        TelemetryText,
    ));

    // Mission banner, revealed by update_telemetry once accomplished
    let mut banner = TextBundle::from_section(
        "Mission accomplished - press Esc to exit",
        TextStyle {
            font_size: 24.0,
            color: TARGET_COLOR,
            ..Default::default()
        },
    )
    .with_style(Style {
        position_type: PositionType::Absolute,
        top: Val::Percent(50.0),
        left: Val::Percent(32.0),
        ..Default::default()
    });
    banner.visibility = Visibility::Hidden;
    commands.spawn((banner, MissionText));
}

/// Per-frame input sampling and physics integration on the measured dt
fn control_and_physics(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut scenario: ResMut<Scenario>,
) {
    let dt = time.delta_seconds() as f64;

    // Left turns counter-clockwise (+1), right turns clockwise (-1)
    let direction = if keys.pressed(KeyCode::ArrowLeft) {
        1.0
    } else if keys.pressed(KeyCode::ArrowRight) {
        -1.0
    } else {
        0.0
    };
    let input = ControlInput {
        direction,
        thrusting: keys.pressed(KeyCode::ArrowUp),
    };

    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        probe,
        masses,
        parameters,
        ..
    } = &mut *scenario;

    step_frame(probe, masses, &input, dt, parameters);
}

/// Emit a burst while thrust is held, then integrate and cull the exhaust
fn exhaust_step(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut scenario: ResMut<Scenario>,
) {
    let dt = time.delta_seconds() as f64;

    let Scenario {
        probe,
        particles,
        parameters,
        ..
    } = &mut *scenario;

    if keys.pressed(KeyCode::ArrowUp) {
        let mut rng = rand::thread_rng();
        emit_exhaust(particles, probe, parameters.scale_factor, &mut rng);
    }
    update_particles(particles, dt);
}

fn mission_check(mut scenario: ResMut<Scenario>) {
    let already = scenario.accomplished;
    if scenario.check_mission() && !already {
        info!("mission accomplished, press Esc to exit");
    }
}

fn sync_probe(scenario: Res<Scenario>, mut query: Query<&mut Transform, With<ProbeSprite>>) {
    for mut transform in &mut query {
        transform.translation.x = scenario.probe.x.x as f32;
        transform.translation.y = scenario.probe.x.y as f32;
        transform.rotation = Quat::from_rotation_z(scenario.probe.angle.to_radians() as f32);
    }
}

/// Keep the probe centered on screen
fn follow_camera(scenario: Res<Scenario>, mut query: Query<&mut Transform, With<MainCamera>>) {
    for mut transform in &mut query {
        transform.translation.x = scenario.probe.x.x as f32;
        transform.translation.y = scenario.probe.x.y as f32;
    }
}

/// Purple polyline over the bounded trajectory
fn draw_trail(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    let trail = &scenario.probe.trajectory;
    for (a, b) in trail.iter().zip(trail.iter().skip(1)) {
        gizmos.line_2d(to_screen(a), to_screen(b), TRAIL_COLOR);
    }
}

/// One arrow per mass, along the pull direction, length capped for
/// visibility
fn draw_gravity_arrows(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    let probe = &scenario.probe;
    let start = to_screen(&probe.x);

    for body in scenario.masses.iter() {
        let a = body_acceleration(body, probe.x, probe.min_clearance());
        let magnitude = a.norm();
        if magnitude == 0.0 {
            continue;
        }
        let dir = a / magnitude;
        let len = magnitude.min(ARROW_MAX_LEN);
        let end = to_screen(&(probe.x + dir * len));

        gizmos.line_2d(start, end, Color::WHITE);

        // Arrowhead: two strokes swept back at 135 degrees from the shaft
        let theta = (dir.y as f32).atan2(dir.x as f32);
        for side in [-1.0f32, 1.0] {
            let phi = theta + side * 3.0 * std::f32::consts::FRAC_PI_4;
            let tip = end + Vec2::new(phi.cos(), phi.sin()) * ARROW_HEAD;
            gizmos.line_2d(end, tip, Color::WHITE);
        }
    }
}

/// Exhaust dots fading with remaining life
fn draw_particles(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    for p in scenario.particles.iter() {
        let [r, g, b] = p.color;
        let alpha = (p.life / EXHAUST_LIFE).clamp(0.0, 1.0) as f32;
        gizmos.circle_2d(to_screen(&p.x), p.size as f32, Color::srgba(r, g, b, alpha));
    }
}

/// Refresh the telemetry lines and the mission banner visibility
fn update_telemetry(
    scenario: Res<Scenario>,
    mut texts: Query<&mut Text, With<TelemetryText>>,
    mut banners: Query<&mut Visibility, With<MissionText>>,
) {
    let probe = &scenario.probe;
    let distance = (probe.x - scenario.target.x).norm();
    let total = gravity_acceleration(&scenario.masses, probe.x, probe.min_clearance()).norm();

    for mut text in &mut texts {
        text.sections[0].value = format!("Vertical velocity: {:.2} u/s\n", probe.v.y);
        text.sections[1].value = format!("Horizontal velocity: {:.2} u/s\n", probe.v.x);
        text.sections[2].value = format!("Angle: {:.0} deg\n", probe.angle);
        text.sections[3].value = format!("Distance to target: {:.0} u\n", distance);
        text.sections[4].value = format!("Total gravitational acceleration: {:.2} u/s^2", total);
    }

    for mut visibility in &mut banners {
        *visibility = if scenario.accomplished {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

fn exit_on_escape(keys: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
    }
}
