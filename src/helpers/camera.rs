use bevy::{
    input::{ButtonInput, mouse::MouseWheel},
    math::Vec3,
    prelude::*,
    ui::RelativeCursorPosition,
};

use crate::ui::components::TerminalWindow;

/// Plugin that handles camera setup and control
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup)
            .add_systems(Update, movement);
    }
}

/// The board is painted around the world origin, so the camera starts there
fn setup(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

/// Whether the cursor currently hovers the terminal panel
pub fn cursor_over_terminal(
    terminal_area: &Query<&RelativeCursorPosition, With<TerminalWindow>>,
) -> bool {
    terminal_area.iter().any(|cursor| {
        cursor
            .normalized
            .is_some_and(|pos| pos.x >= 0.0 && pos.x <= 1.0 && pos.y >= 0.0 && pos.y <= 1.0)
    })
}

/// Handle camera movement and zooming
pub fn movement(
    time: Res<Time>,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut scroll_evr: MessageReader<MouseWheel>,
    mut query: Query<(&mut Transform, &mut Projection), With<Camera>>,
    terminal_area: Query<&RelativeCursorPosition, With<TerminalWindow>>,
) {
    let cursor_over_ui = cursor_over_terminal(&terminal_area);

    for (mut transform, mut projection) in query.iter_mut() {
        let mut direction = Vec3::ZERO;

        if keyboard_input.pressed(KeyCode::KeyA) {
            direction -= Vec3::X;
        }
        if keyboard_input.pressed(KeyCode::KeyD) {
            direction += Vec3::X;
        }
        if keyboard_input.pressed(KeyCode::KeyW) {
            direction += Vec3::Y;
        }
        if keyboard_input.pressed(KeyCode::KeyS) {
            direction -= Vec3::Y;
        }

        let Projection::Orthographic(ortho) = &mut *projection else {
            continue;
        };

        for ev in scroll_evr.read() {
            if cursor_over_ui {
                continue;
            }
            let zoom_factor = if ev.y > 0.0 { 0.9 } else { 1.1 };
            ortho.scale *= zoom_factor;
        }

        // Z zooms out, X zooms in
        if keyboard_input.pressed(KeyCode::KeyZ) {
            ortho.scale += 0.5 * time.delta_secs();
        }
        if keyboard_input.pressed(KeyCode::KeyX) {
            ortho.scale -= 0.5 * time.delta_secs();
        }

        ortho.scale = ortho.scale.clamp(0.25, 4.0);

        // Pan speed follows zoom so movement feels the same at every scale
        let movement_speed = 500.0 * ortho.scale;

        let z = transform.translation.z;
        transform.translation += time.delta_secs() * direction * movement_speed;
        // Keep the camera's Z so the paint layers stay in front of it
        transform.translation.z = z;
    }
}
