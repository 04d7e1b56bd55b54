use bevy::prelude::*;
use bevy_ecs_tilemap::prelude::TilePos;

use super::messages::{CancelWipe, PlaceTrack, ReconcileCell, RemoveTrack};
use super::wipe::CellWipe;
use crate::board::{TrackBoard, TrackCell};
use crate::ui::logging::TerminalLogEvent;

/// Apply track edits (Input Layer)
/// Places new cells, starts wipes for removals and cancels running wipes.
/// New cells are stored on the board immediately and reconciled once their
/// components exist.
pub fn apply_track_edits(
    mut commands: Commands,
    mut placements: MessageReader<PlaceTrack>,
    mut removals: MessageReader<RemoveTrack>,
    mut cancellations: MessageReader<CancelWipe>,
    mut board: ResMut<TrackBoard>,
    mut cells: Query<&mut TrackCell>,
    wiping: Query<(), With<CellWipe>>,
    mut reconcile_requests: MessageWriter<ReconcileCell>,
    mut log_events: MessageWriter<TerminalLogEvent>,
) {
    for placement in placements.read() {
        handle_placement(
            &mut commands,
            placement.position,
            &mut board,
            &mut reconcile_requests,
            &mut log_events,
        );
    }

    for removal in removals.read() {
        handle_removal(
            &mut commands,
            removal.position,
            &board,
            &wiping,
            &mut log_events,
        );
    }

    for cancellation in cancellations.read() {
        let Some(cell) = board.cell_at(cancellation.position) else {
            continue;
        };
        if !wiping.contains(cell) {
            continue;
        }

        commands.entity(cell).remove::<CellWipe>();
        // Repaint the full segment over the scribbles
        if let Ok(mut track) = cells.get_mut(cell) {
            track.set_changed();
        }
        log_events.write(TerminalLogEvent {
            message: format!(
                "Kept track at ({}, {})",
                cancellation.position.x, cancellation.position.y
            ),
        });
    }
}

fn handle_placement(
    commands: &mut Commands,
    position: TilePos,
    board: &mut ResMut<TrackBoard>,
    reconcile_requests: &mut MessageWriter<ReconcileCell>,
    log_events: &mut MessageWriter<TerminalLogEvent>,
) {
    if !board.contains(position) {
        warn!(
            "Ignoring track placement outside the board at ({}, {})",
            position.x, position.y
        );
        return;
    }
    if board.is_occupied(position) {
        debug!("Track already present at ({}, {})", position.x, position.y);
        return;
    }

    let grid_size = board.config().grid_size;
    let cell = commands.spawn(TrackCell::new(position, grid_size)).id();
    board.insert(position, cell);
    reconcile_requests.write(ReconcileCell { cell });

    log_events.write(TerminalLogEvent {
        message: format!("Laid track at ({}, {})", position.x, position.y),
    });
}

fn handle_removal(
    commands: &mut Commands,
    position: TilePos,
    board: &TrackBoard,
    wiping: &Query<(), With<CellWipe>>,
    log_events: &mut MessageWriter<TerminalLogEvent>,
) {
    let Some(cell) = board.cell_at(position) else {
        warn!(
            "Ignoring removal of missing track at ({}, {})",
            position.x, position.y
        );
        return;
    };
    if wiping.contains(cell) {
        return;
    }

    commands.entity(cell).insert(CellWipe::new(board.config()));
    log_events.write(TerminalLogEvent {
        message: format!("Removing track at ({}, {})", position.x, position.y),
    });
}
