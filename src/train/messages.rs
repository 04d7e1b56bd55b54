use bevy::prelude::*;
use bevy_ecs_tilemap::prelude::TilePos;

use super::motion::MotionError;

/// Message to put a train on the track
/// `None` starts it on the earliest placed cell that still exists
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StartTrain {
    pub at: Option<TilePos>,
}

/// Message to take every running train off the track
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StopTrain;

/// Why a train stopped on its own
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HaltReason {
    /// The train reached a position with no track under it
    OffTrack { x: f32, y: f32 },
    /// The cell under the train could not be travelled
    Motion(MotionError),
}

/// Written when the scheduler removes a train it could not advance
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct TrainHalted {
    pub train: Entity,
    pub reason: HaltReason,
}
