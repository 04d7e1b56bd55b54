use std::time::Duration;

use bevy::prelude::*;
use bevy_ecs_tilemap::prelude::TilemapSize;

use crate::constants::{
    BOARD_COLUMNS, BOARD_ROWS, CURVE_STEP, GRID_SIZE, TRAIN_STEP, TRAIN_TICK, WIPE_INTERVAL,
    WIPE_ITERATIONS, WIPE_PATCH_SIZE,
};

/// Runtime configuration shared by the board, the resolver and the train
/// Insert a custom value before `TrackPlugin` to override the defaults
#[derive(Resource, Debug, Clone, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct BoardConfig {
    pub columns: u32,
    pub rows: u32,
    /// Side length of a cell in pixels
    pub grid_size: f32,
    /// Pixels per tick on straight track
    pub train_step: f32,
    /// Radians per tick on curved track
    pub curve_step: f32,
    pub train_tick: Duration,
    pub wipe_interval: Duration,
    pub wipe_iterations: u32,
    pub wipe_patch_size: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: BOARD_COLUMNS,
            rows: BOARD_ROWS,
            grid_size: GRID_SIZE,
            train_step: TRAIN_STEP,
            curve_step: CURVE_STEP,
            train_tick: TRAIN_TICK,
            wipe_interval: WIPE_INTERVAL,
            wipe_iterations: WIPE_ITERATIONS,
            wipe_patch_size: WIPE_PATCH_SIZE,
        }
    }
}

impl BoardConfig {
    /// Config for a board of the given size, everything else default
    pub fn with_size(columns: u32, rows: u32) -> Self {
        Self {
            columns,
            rows,
            ..Default::default()
        }
    }

    pub fn half_grid(&self) -> f32 {
        self.grid_size / 2.0
    }

    pub fn map_size(&self) -> TilemapSize {
        TilemapSize {
            x: self.columns,
            y: self.rows,
        }
    }

    /// Size of the whole board in pixels
    pub fn pixel_size(&self) -> Vec2 {
        Vec2::new(
            self.columns as f32 * self.grid_size,
            self.rows as f32 * self.grid_size,
        )
    }
}
