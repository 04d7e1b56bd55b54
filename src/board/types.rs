use bevy::prelude::*;
use bevy_ecs_tilemap::prelude::TilePos;

use crate::track::Direction;

/// A grid cell holding a track segment
///
/// The pixel origin is derived from the grid position once, at construction.
/// Only the direction resolver changes `direction` and `settled`.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct TrackCell {
    position: TilePos,
    origin: Vec2,
    pub(crate) direction: Direction,
    /// Locked once the cell has seen two or more neighbours at the same time
    pub(crate) settled: bool,
}

impl TrackCell {
    pub fn new(position: TilePos, grid_size: f32) -> Self {
        Self {
            position,
            origin: Vec2::new(
                position.x as f32 * grid_size,
                position.y as f32 * grid_size,
            ),
            direction: Direction::None,
            settled: false,
        }
    }

    /// Fixture helper: a fresh cell that already carries a resolved shape
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn position(&self) -> TilePos {
        self.position
    }

    pub fn column(&self) -> u32 {
        self.position.x
    }

    pub fn row(&self) -> u32 {
        self.position.y
    }

    /// Top-left corner of the cell in board pixels (y grows downwards)
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn centre(&self, grid_size: f32) -> Vec2 {
        self.origin + Vec2::splat(grid_size / 2.0)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }
}

/// The occupied orthogonal neighbours of a cell, computed on demand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeighborSet {
    pub up: Option<Entity>,
    pub down: Option<Entity>,
    pub left: Option<Entity>,
    pub right: Option<Entity>,
}

impl NeighborSet {
    /// Every neighbour that is present, in up/down/left/right order
    pub fn all(&self) -> impl Iterator<Item = Entity> {
        [self.up, self.down, self.left, self.right]
            .into_iter()
            .flatten()
    }

    pub fn len(&self) -> usize {
        self.all().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_up(&self) -> bool {
        self.up.is_some()
    }

    pub fn has_down(&self) -> bool {
        self.down.is_some()
    }

    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }
}
