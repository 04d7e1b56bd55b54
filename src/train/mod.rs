use bevy::prelude::*;

use crate::track::TrackSet;
use crate::ui::logging::TerminalLogEvent;

// Position history
pub mod coords;
pub use coords::TrainCoords;

// Motion engine
pub mod motion;
pub use motion::{MotionError, advance, reference_corner, travel_sign};

// Messages
pub mod messages;
pub use messages::{HaltReason, StartTrain, StopTrain, TrainHalted};

// Tick driver
pub mod scheduler;
pub use scheduler::{Train, run_train_ticks, start_trains, stop_trains};

#[cfg(test)]
mod tests;

/// Plugin that starts, stops and advances trains
/// Expects `TrackPlugin` to provide the board
pub struct TrainPlugin;

impl Plugin for TrainPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<StartTrain>()
            .add_message::<StopTrain>()
            .add_message::<TrainHalted>()
            .add_message::<TerminalLogEvent>();

        app.add_systems(
            Update,
            (stop_trains, start_trains, run_train_ticks)
                .chain()
                .in_set(TrackSet::Train),
        );
    }
}
