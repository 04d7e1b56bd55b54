//! Track and train constants
//!
//! This module centralizes the magic numbers used by the board, the track
//! painter and the train. Runtime values are copied into `BoardConfig`.

use std::f32::consts::PI;
use std::time::Duration;

use bevy::prelude::*;

// ============================================================================
// BOARD CONSTANTS
// ============================================================================

/// Side length of a single grid cell in pixels
pub const GRID_SIZE: f32 = 40.0;

/// Default board width in cells
pub const BOARD_COLUMNS: u32 = 24;

/// Default board height in cells
pub const BOARD_ROWS: u32 = 16;

// ============================================================================
// TRAIN CONSTANTS
// ============================================================================

/// Pixels travelled per tick on a straight segment
pub const TRAIN_STEP: f32 = 10.0;

/// Radians travelled per tick on a curve (2 degrees)
pub const CURVE_STEP: f32 = PI / 90.0;

/// Period of the train tick
pub const TRAIN_TICK: Duration = Duration::from_millis(50);

// ============================================================================
// WIPE EFFECT CONSTANTS
// ============================================================================

/// Period between two scribbles of the wipe effect
pub const WIPE_INTERVAL: Duration = Duration::from_millis(10);

/// Number of scribbles before a wiped cell is gone
pub const WIPE_ITERATIONS: u32 = 40;

/// Side length of a single erased patch in pixels
pub const WIPE_PATCH_SIZE: f32 = 5.0;

// ============================================================================
// RENDERING CONSTANTS
// ============================================================================

/// Distance between the two rails
pub const RAIL_GAUGE: f32 = 12.0;

/// Thickness of a rail
pub const RAIL_WIDTH: f32 = 2.0;

/// Length of a sleeper across the rails
pub const SLEEPER_LENGTH: f32 = 20.0;

/// Thickness of a sleeper
pub const SLEEPER_WIDTH: f32 = 3.0;

/// Sleepers painted per cell
pub const SLEEPERS_PER_CELL: usize = 4;

/// Straight pieces used to approximate a curved rail
pub const CURVE_SEGMENTS: usize = 12;

pub const BOARD_BACKGROUND: Color = Color::srgb(0.95, 0.94, 0.88);
pub const GRID_LINE_COLOR: Color = Color::srgb(0.88, 0.86, 0.8);
pub const RAIL_COLOR: Color = Color::srgb(0.35, 0.35, 0.38);
pub const SLEEPER_COLOR: Color = Color::srgb(0.55, 0.4, 0.25);
pub const BUFFER_STOP_COLOR: Color = Color::srgb(0.8, 0.2, 0.2);
pub const TRAIN_COLOR: Color = Color::srgb(0.1, 0.2, 0.9);

// Z layers
pub const Z_GRID: f32 = 0.0;
pub const Z_SLEEPER: f32 = 1.0;
pub const Z_RAIL: f32 = 2.0;
pub const Z_WIPE: f32 = 3.0;
pub const Z_TRAIN: f32 = 5.0;
