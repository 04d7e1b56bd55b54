use bevy::prelude::*;

use crate::board::{TrackBoard, TrackCell};
use crate::train::Train;
use crate::ui::components::StatusDisplay;

/// Show track and train counts above the terminal
pub fn update_status_display(
    board: Res<TrackBoard>,
    cells: Query<&TrackCell>,
    trains: Query<&Train>,
    mut displays: Query<&mut Text, With<StatusDisplay>>,
) {
    let settled = cells.iter().filter(|cell| cell.is_settled()).count();
    let train = match trains.iter().next() {
        Some(train) => {
            let at = train.coords().current();
            format!("train at ({:.0}, {:.0})", at.x, at.y)
        }
        None => "no train".to_string(),
    };
    let status = format!(
        "Track: {} cells ({} settled) | {}",
        board.len(),
        settled,
        train
    );

    for mut text in displays.iter_mut() {
        if text.0 != status {
            text.0 = status.clone();
        }
    }
}
