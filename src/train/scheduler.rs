use std::time::Duration;

use bevy::prelude::*;

use super::coords::TrainCoords;
use super::messages::{HaltReason, StartTrain, StopTrain, TrainHalted};
use super::motion::advance;
use crate::board::{TrackBoard, TrackCell};
use crate::ui::logging::TerminalLogEvent;

/// A train gliding over the track, advanced once per tick period
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Train {
    coords: TrainCoords,
    ticker: Timer,
    ticks: u64,
}

impl Train {
    pub fn new(coords: TrainCoords, period: Duration) -> Self {
        Self {
            coords,
            ticker: Timer::new(period, TimerMode::Repeating),
            ticks: 0,
        }
    }

    pub fn coords(&self) -> TrainCoords {
        self.coords
    }

    /// Number of motion steps taken so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// Spawn a train for each start request, replacing any running train
pub fn start_trains(
    mut commands: Commands,
    mut starts: MessageReader<StartTrain>,
    board: Res<TrackBoard>,
    cells: Query<&TrackCell>,
    trains: Query<Entity, With<Train>>,
    mut log_events: MessageWriter<TerminalLogEvent>,
) {
    let Some(start) = starts.read().last().copied() else {
        return;
    };

    let Some(position) = start.at.or_else(|| board.first_cell()) else {
        warn!("Cannot start a train on an empty board");
        return;
    };
    let Some(cell) = board
        .cell_at(position)
        .and_then(|entity| cells.get(entity).ok())
    else {
        warn!(
            "Cannot start a train at ({}, {}): no track there",
            position.x, position.y
        );
        return;
    };

    for train in trains.iter() {
        commands.entity(train).despawn();
    }

    let config = board.config();
    commands.spawn(Train::new(
        TrainCoords::starting_at(cell, config.grid_size),
        config.train_tick,
    ));

    log_events.write(TerminalLogEvent {
        message: format!("Train departing from ({}, {})", position.x, position.y),
    });
}

/// Cancel every running train
pub fn stop_trains(
    mut commands: Commands,
    mut stops: MessageReader<StopTrain>,
    trains: Query<Entity, With<Train>>,
    mut log_events: MessageWriter<TerminalLogEvent>,
) {
    if stops.read().count() == 0 {
        return;
    }

    for train in trains.iter() {
        commands.entity(train).despawn();
        log_events.write(TerminalLogEvent {
            message: "Train stopped".to_string(),
        });
    }
}

/// Advance every train once per elapsed tick period (Logic Layer)
/// A long frame replays every missed period in order instead of skipping them.
pub fn run_train_ticks(
    mut commands: Commands,
    time: Res<Time>,
    board: Res<TrackBoard>,
    cells: Query<&TrackCell>,
    mut trains: Query<(Entity, &mut Train)>,
    mut halted: MessageWriter<TrainHalted>,
    mut log_events: MessageWriter<TerminalLogEvent>,
) {
    for (entity, mut train) in trains.iter_mut() {
        train.ticker.tick(time.delta());
        let due = train.ticker.times_finished_this_tick();

        for _ in 0..due {
            match step_train(train.coords, &board, &cells) {
                Ok(next) => {
                    train.coords = next;
                    train.ticks += 1;
                }
                Err(reason) => {
                    error!("Train {:?} halted: {:?}", entity, reason);
                    halted.write(TrainHalted {
                        train: entity,
                        reason,
                    });
                    log_events.write(TerminalLogEvent {
                        message: describe_halt(&reason),
                    });
                    commands.entity(entity).despawn();
                    break;
                }
            }
        }
    }
}

/// Locate the cell under the train and ask the motion engine for the next position
fn step_train(
    coords: TrainCoords,
    board: &TrackBoard,
    cells: &Query<&TrackCell>,
) -> Result<TrainCoords, HaltReason> {
    let off_track = HaltReason::OffTrack {
        x: coords.current_x,
        y: coords.current_y,
    };

    let cell = board
        .grid_position(coords.current_x, coords.current_y)
        .and_then(|position| board.cell_at(position))
        .and_then(|entity| cells.get(entity).ok())
        .ok_or(off_track)?;

    advance(cell, coords, board.config()).map_err(HaltReason::Motion)
}

fn describe_halt(reason: &HaltReason) -> String {
    match reason {
        HaltReason::OffTrack { x, y } => {
            format!("Train ran out of track at ({:.0}, {:.0})", x, y)
        }
        HaltReason::Motion(error) => format!("Train halted: {}", error),
    }
}
