// RTS orbit camera - arrow-key pan, left-drag rotate, wheel zoom
//
// The letter keys belong to the placement cursor, so camera panning lives on
// the arrow keys only.
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::constants::*;
use crate::types::RtsCamera;

pub fn rts_camera_system(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut scroll_events: EventReader<MouseWheel>,
    mut motion_events: EventReader<MouseMotion>,
    mut camera_query: Query<(&mut Transform, &mut RtsCamera)>,
) {
    let Ok((mut transform, mut camera)) = camera_query.single_mut() else {
        return;
    };
    let delta = time.delta_secs();

    // Mouse drag rotation
    if mouse_button.pressed(MouseButton::Left) {
        for motion in motion_events.read() {
            camera.yaw -= motion.delta.x * CAMERA_ROTATION_SPEED;
            camera.pitch =
                (camera.pitch - motion.delta.y * CAMERA_ROTATION_SPEED).clamp(-1.5, -0.2);
        }
    } else {
        // Drop accumulated motion while not dragging
        motion_events.clear();
    }

    // Arrow-key pan relative to camera yaw
    let mut movement = Vec3::ZERO;
    if keyboard.pressed(KeyCode::ArrowUp) {
        movement.z -= 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowDown) {
        movement.z += 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowLeft) {
        movement.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowRight) {
        movement.x += 1.0;
    }
    if movement.length() > 0.0 {
        let movement = movement.normalize() * CAMERA_SPEED * delta;
        let yaw_rotation = Mat3::from_rotation_y(camera.yaw);
        camera.focus_point += yaw_rotation * movement;
    }

    // Wheel zoom
    for scroll in scroll_events.read() {
        let zoom_delta = match scroll.unit {
            MouseScrollUnit::Line => scroll.y * CAMERA_ZOOM_SPEED,
            MouseScrollUnit::Pixel => scroll.y * CAMERA_ZOOM_SPEED * 0.1,
        };
        camera.distance =
            (camera.distance - zoom_delta).clamp(CAMERA_MIN_HEIGHT, CAMERA_MAX_HEIGHT);
    }

    // Rebuild the transform from focus point, yaw, pitch, and distance
    let rotation = Quat::from_euler(EulerRot::YXZ, camera.yaw, camera.pitch, 0.0);
    let offset = rotation * Vec3::new(0.0, 0.0, camera.distance);
    transform.translation = camera.focus_point + offset;
    transform.rotation = rotation;
}
