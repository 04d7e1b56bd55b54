#![allow(dead_code)]

use std::time::Duration;

use bevy::ecs::message::Message;
use bevy::prelude::*;
use bevy_ecs_tilemap::prelude::TilePos;
use rust_trains::LogicPlugins;
use rust_trains::board::{BoardConfig, TrackBoard, TrackCell};
use rust_trains::track::PlaceTrack;
use rust_trains::train::Train;

/// Headless app running the track and train logic on a board of the given size
pub fn headless_app(columns: u32, rows: u32) -> App {
    let mut app = App::new();
    app.init_resource::<Time>();
    app.insert_resource(BoardConfig::with_size(columns, rows));
    app.add_plugins(LogicPlugins);
    app
}

/// Run one frame in which `delta` of time has passed
pub fn run_for(app: &mut App, delta: Duration) {
    app.world_mut().resource_mut::<Time>().advance_by(delta);
    app.update();
    app.world_mut().resource_mut::<Time>().advance_by(Duration::ZERO);
}

/// Lay every position in order, one frame each
pub fn lay(app: &mut App, positions: &[(u32, u32)]) {
    for &(x, y) in positions {
        app.world_mut().write_message(PlaceTrack {
            position: TilePos { x, y },
        });
        app.update();
    }
}

pub fn cell_at(app: &App, x: u32, y: u32) -> Option<TrackCell> {
    let entity = app
        .world()
        .resource::<TrackBoard>()
        .cell_at(TilePos { x, y })?;
    app.world().get::<TrackCell>(entity).cloned()
}

pub fn trains(app: &mut App) -> Vec<Train> {
    let mut query = app.world_mut().query::<&Train>();
    query.iter(app.world()).cloned().collect()
}

/// Every message of type `M` seen since the recorder was installed
#[derive(Resource)]
pub struct Recorded<M>(pub Vec<M>);

fn record<M: Message + Clone>(mut reader: MessageReader<M>, mut store: ResMut<Recorded<M>>) {
    store.0.extend(reader.read().cloned());
}

pub fn record_messages<M: Message + Clone>(app: &mut App) {
    app.insert_resource(Recorded::<M>(Vec::new()))
        .add_systems(Last, record::<M>);
}

pub fn recorded<M: Message + Clone>(app: &App) -> &[M] {
    &app.world().resource::<Recorded<M>>().0
}
