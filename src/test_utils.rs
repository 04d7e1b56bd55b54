//! Testing utilities for rust-trains
//!
//! Helpers for driving the track and train plugins headlessly. Time is
//! advanced by hand so timer-driven systems are deterministic.

use std::time::Duration;

use bevy::ecs::message::Message;
use bevy::prelude::*;
use bevy_ecs_tilemap::prelude::TilePos;

use crate::board::{BoardConfig, TrackBoard, TrackCell};
use crate::track::{PlaceTrack, RemoveTrack, TrackPlugin};
use crate::train::TrainPlugin;

/// Creates a headless app with the track and train logic on a board of the given size
pub fn create_test_app(columns: u32, rows: u32) -> App {
    let mut app = App::new();
    app.init_resource::<Time>();
    app.insert_resource(BoardConfig::with_size(columns, rows));
    app.add_plugins((TrackPlugin, TrainPlugin));
    app
}

/// Run one frame in which `delta` of time has passed
pub fn advance_time(app: &mut App, delta: Duration) {
    app.world_mut().resource_mut::<Time>().advance_by(delta);
    app.update();
    app.world_mut().resource_mut::<Time>().advance_by(Duration::ZERO);
}

/// Lay a segment and run the frame that reconciles it
pub fn place(app: &mut App, x: u32, y: u32) {
    app.world_mut().write_message(PlaceTrack {
        position: TilePos { x, y },
    });
    app.update();
}

/// Start a removal and run the frame that begins the wipe
pub fn remove(app: &mut App, x: u32, y: u32) {
    app.world_mut().write_message(RemoveTrack {
        position: TilePos { x, y },
    });
    app.update();
}

pub fn cell_entity(app: &App, x: u32, y: u32) -> Option<Entity> {
    app.world()
        .resource::<TrackBoard>()
        .cell_at(TilePos { x, y })
}

/// Snapshot of the cell at a grid position
pub fn cell(app: &App, x: u32, y: u32) -> TrackCell {
    let entity = cell_entity(app, x, y).expect("cell at position");
    app.world()
        .get::<TrackCell>(entity)
        .expect("track cell component")
        .clone()
}

/// Every message of type `M` seen since the collector was installed
#[derive(Resource)]
pub struct Collected<M>(pub Vec<M>);

impl<M> Default for Collected<M> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

fn collect<M: Message + Clone>(mut reader: MessageReader<M>, mut store: ResMut<Collected<M>>) {
    store.0.extend(reader.read().cloned());
}

/// Install a collector for messages of type `M`
pub fn collect_messages<M: Message + Clone>(app: &mut App) {
    app.init_resource::<Collected<M>>()
        .add_systems(Last, collect::<M>);
}

pub fn collected<M: Message + Clone>(app: &App) -> &[M] {
    &app.world().resource::<Collected<M>>().0
}
