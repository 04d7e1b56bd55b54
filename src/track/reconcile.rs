use bevy::prelude::*;

use super::messages::ReconcileCell;
use super::resolve::resolve;
use crate::board::{TrackBoard, TrackCell};

/// Re-resolve `start` and cascade to the neighbours of every cell whose
/// direction changed
///
/// Uses an explicit worklist instead of recursion. A cell that reports no
/// change ends its branch; settled cells never change, so the cascade is
/// bounded by the unsettled cells reachable from `start`. Every visited cell
/// is mutably borrowed, which marks it for repaint.
///
/// Returns the number of resolutions performed.
pub fn reconcile(start: Entity, board: &TrackBoard, cells: &mut Query<&mut TrackCell>) -> usize {
    let mut worklist = vec![start];
    let mut resolutions = 0;

    while let Some(entity) = worklist.pop() {
        let Ok(mut cell) = cells.get_mut(entity) else {
            continue;
        };

        let neighbors = board.neighbors_of(cell.position());
        resolutions += 1;

        if resolve(&mut cell, &neighbors) {
            // Pushed in reverse so neighbours are visited up, down, left, right
            let neighbors = board.neighbors_of(cell.position());
            let mut pending: Vec<Entity> = neighbors.all().collect();
            pending.reverse();
            worklist.extend(pending);
        }
    }

    resolutions
}

/// Run a reconcile cascade for every requested cell (Logic Layer)
/// Requests come from placements and from the neighbours of removed cells
pub fn reconcile_cells(
    mut requests: MessageReader<ReconcileCell>,
    board: Res<TrackBoard>,
    mut cells: Query<&mut TrackCell>,
) {
    for request in requests.read() {
        let resolutions = reconcile(request.cell, &board, &mut cells);
        debug!(
            "Reconciled cascade from {:?}: {} resolutions",
            request.cell, resolutions
        );
    }
}
