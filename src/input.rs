use bevy::prelude::*;
use bevy::ui::RelativeCursorPosition;
use bevy::window::PrimaryWindow;
use bevy_ecs_tilemap::prelude::TilePos;

use crate::board::TrackBoard;
use crate::helpers::camera::cursor_over_terminal;
use crate::track::{CancelWipe, CellWipe, PlaceTrack, RemoveTrack, TrackSet};
use crate::train::{StartTrain, StopTrain};
use crate::ui::components::TerminalWindow;

/// Translates mouse and keyboard into track and train messages
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (handle_board_clicks, handle_train_keys).before(TrackSet::Edit),
        );
    }
}

/// Board cell under the cursor, if any
fn hovered_cell(
    window: &Window,
    camera: &Camera,
    camera_transform: &GlobalTransform,
    board: &TrackBoard,
) -> Option<TilePos> {
    let cursor = window.cursor_position()?;
    let world = camera.viewport_to_world_2d(camera_transform, cursor).ok()?;
    let pixel = board.world_to_board(world);
    board.grid_position(pixel.x, pixel.y)
}

/// Left click lays track, right click removes it or keeps a cell that is being wiped
pub fn handle_board_clicks(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
    terminal_area: Query<&RelativeCursorPosition, With<TerminalWindow>>,
    board: Res<TrackBoard>,
    wiping: Query<(), With<CellWipe>>,
    mut place: MessageWriter<PlaceTrack>,
    mut remove: MessageWriter<RemoveTrack>,
    mut cancel: MessageWriter<CancelWipe>,
) {
    let lay = buttons.just_pressed(MouseButton::Left);
    let clear = buttons.just_pressed(MouseButton::Right);
    if !lay && !clear {
        return;
    }
    if cursor_over_terminal(&terminal_area) {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Some(position) = hovered_cell(window, camera, camera_transform, &board) else {
        return;
    };

    if lay {
        place.write(PlaceTrack { position });
    } else if let Some(cell) = board.cell_at(position) {
        if wiping.contains(cell) {
            cancel.write(CancelWipe { position });
        } else {
            remove.write(RemoveTrack { position });
        }
    }
}

/// Enter or Space starts a train on the first cell, Escape stops it
pub fn handle_train_keys(
    keys: Res<ButtonInput<KeyCode>>,
    mut start: MessageWriter<StartTrain>,
    mut stop: MessageWriter<StopTrain>,
) {
    if keys.any_just_pressed([KeyCode::Enter, KeyCode::Space]) {
        start.write(StartTrain { at: None });
    }
    if keys.just_pressed(KeyCode::Escape) {
        stop.write(StopTrain);
    }
}
