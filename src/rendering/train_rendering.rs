use bevy::prelude::*;

use crate::board::TrackBoard;
use crate::constants::{TRAIN_COLOR, Z_TRAIN};
use crate::track::TrackSet;
use crate::train::Train;

/// Marker for the sprite painted on a train entity
#[derive(Component)]
pub struct TrainSprite;

pub struct TrainRenderingPlugin;

impl Plugin for TrainRenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (attach_train_sprites, sync_train_transforms)
                .chain()
                .in_set(TrackSet::Render),
        );
    }
}

/// Give newly started trains a grid-sized square sprite
fn attach_train_sprites(
    mut commands: Commands,
    board: Res<TrackBoard>,
    new_trains: Query<(Entity, &Train), Added<Train>>,
) {
    let grid_size = board.config().grid_size;

    for (entity, train) in new_trains.iter() {
        let position = board.board_to_world(train.coords().current());
        commands.entity(entity).insert((
            Sprite {
                color: TRAIN_COLOR,
                custom_size: Some(Vec2::splat(grid_size)),
                ..default()
            },
            Transform::from_translation(position.extend(Z_TRAIN)),
            TrainSprite,
        ));
    }
}

/// Move train sprites to the position computed by the last tick
fn sync_train_transforms(
    board: Res<TrackBoard>,
    mut trains: Query<(&Train, &mut Transform), Changed<Train>>,
) {
    for (train, mut transform) in trains.iter_mut() {
        let position = board.board_to_world(train.coords().current());
        transform.translation.x = position.x;
        transform.translation.y = position.y;
    }
}
