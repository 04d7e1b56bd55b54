use bevy::prelude::*;
use bevy_ecs_tilemap::prelude::{TilePos, TileStorage};

use super::config::BoardConfig;
use super::types::NeighborSet;

/// Grid adapter: stores the cell entity of every occupied grid position and
/// converts between board pixels and grid coordinates
///
/// Board pixel space has its origin at the top-left corner of the board and
/// grows downwards, so "up" is the previous row.
#[derive(Resource, Debug, Clone)]
pub struct TrackBoard {
    config: BoardConfig,
    storage: TileStorage,
    /// Occupied positions in placement order
    placed: Vec<TilePos>,
}

impl Default for TrackBoard {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl TrackBoard {
    pub fn new(config: BoardConfig) -> Self {
        let storage = TileStorage::empty(config.map_size());
        Self {
            config,
            storage,
            placed: Vec::new(),
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn contains(&self, position: TilePos) -> bool {
        position.x < self.config.columns && position.y < self.config.rows
    }

    pub fn cell_at(&self, position: TilePos) -> Option<Entity> {
        if !self.contains(position) {
            return None;
        }
        self.storage.get(&position)
    }

    pub fn is_occupied(&self, position: TilePos) -> bool {
        self.cell_at(position).is_some()
    }

    /// Number of occupied cells
    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// The earliest placed cell that is still on the board
    pub fn first_cell(&self) -> Option<TilePos> {
        self.placed.first().copied()
    }

    /// Occupied positions in placement order
    pub fn positions(&self) -> impl Iterator<Item = TilePos> + '_ {
        self.placed.iter().copied()
    }

    /// Store a cell entity; returns false when the position is off the board or taken
    pub fn insert(&mut self, position: TilePos, cell: Entity) -> bool {
        if !self.contains(position) || self.is_occupied(position) {
            return false;
        }
        self.storage.set(&position, cell);
        self.placed.push(position);
        true
    }

    pub fn remove(&mut self, position: TilePos) -> Option<Entity> {
        let cell = self.cell_at(position)?;
        self.storage.remove(&position);
        self.placed.retain(|placed| *placed != position);
        Some(cell)
    }

    /// Grid position one step away, if it is on the board
    pub fn offset(&self, position: TilePos, dx: i32, dy: i32) -> Option<TilePos> {
        let x = position.x.checked_add_signed(dx)?;
        let y = position.y.checked_add_signed(dy)?;
        let moved = TilePos { x, y };
        self.contains(moved).then_some(moved)
    }

    /// Occupied up/down/left/right neighbours of a grid position
    pub fn neighbors_of(&self, position: TilePos) -> NeighborSet {
        let lookup = |dx: i32, dy: i32| {
            self.offset(position, dx, dy)
                .and_then(|neighbor| self.cell_at(neighbor))
        };

        NeighborSet {
            up: lookup(0, -1),
            down: lookup(0, 1),
            left: lookup(-1, 0),
            right: lookup(1, 0),
        }
    }

    /// Convert a board pixel coordinate into a grid index along one axis
    pub fn pixel_to_grid(&self, pixel: f32) -> Option<u32> {
        if !pixel.is_finite() || pixel < 0.0 {
            return None;
        }
        Some((pixel / self.config.grid_size).floor() as u32)
    }

    /// Grid position containing a board pixel, if it lies on the board
    pub fn grid_position(&self, x: f32, y: f32) -> Option<TilePos> {
        let position = TilePos {
            x: self.pixel_to_grid(x)?,
            y: self.pixel_to_grid(y)?,
        };
        self.contains(position).then_some(position)
    }

    /// Convert a board pixel position into world space
    /// The board is centred on the world origin and world y grows upwards
    pub fn board_to_world(&self, pixel: Vec2) -> Vec2 {
        let half = self.config.pixel_size() / 2.0;
        Vec2::new(pixel.x - half.x, half.y - pixel.y)
    }

    pub fn world_to_board(&self, world: Vec2) -> Vec2 {
        let half = self.config.pixel_size() / 2.0;
        Vec2::new(world.x + half.x, half.y - world.y)
    }
}
