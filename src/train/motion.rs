//! Train motion engine.
//!
//! Straight cells move the train a fixed number of pixels per tick along the
//! centre line. Curved cells move it a fixed angle per tick around a quarter
//! circle of radius `grid_size / 2` centred on the corner the curve wraps.

use bevy::prelude::*;
use thiserror::Error;

use super::coords::TrainCoords;
use crate::board::{BoardConfig, TrackCell};
use crate::track::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MotionError {
    #[error("cell ({column}, {row}) has no resolved direction")]
    UnresolvedDirection { column: u32, row: u32 },
}

/// Comparator over a previous/current pair: +1 while the value grows,
/// -1 while it shrinks, 0 when it stands still
pub fn travel_sign(previous: f32, current: f32) -> f32 {
    if previous == current {
        0.0
    } else if previous > current {
        -1.0
    } else {
        1.0
    }
}

/// Next position of a train inside `cell`
///
/// The returned history always carries the input's current position as its
/// previous sample.
pub fn advance(
    cell: &TrackCell,
    coords: TrainCoords,
    config: &BoardConfig,
) -> Result<TrainCoords, MotionError> {
    let half = config.half_grid();

    let next = match cell.direction() {
        Direction::None => {
            return Err(MotionError::UnresolvedDirection {
                column: cell.column(),
                row: cell.row(),
            });
        }
        Direction::Vertical => Vec2::new(
            cell.x() + half,
            coords.current_y
                + config.train_step * travel_sign(coords.previous_y, coords.current_y),
        ),
        Direction::Horizontal => Vec2::new(
            coords.current_x
                + config.train_step * travel_sign(coords.previous_x, coords.current_x),
            cell.y() + half,
        ),
        curve => advance_on_curve(cell, curve, coords, config),
    };

    Ok(coords.shifted(next))
}

/// Corner of the cell a curve is wrapped around, in board pixels
pub fn reference_corner(cell: &TrackCell, curve: Direction, grid_size: f32) -> Vec2 {
    let origin = cell.origin();
    match curve {
        Direction::LeftDown => origin + Vec2::new(0.0, grid_size),
        Direction::RightUp => origin + Vec2::new(grid_size, 0.0),
        Direction::RightDown => origin + Vec2::splat(grid_size),
        _ => origin,
    }
}

/// Axis flips applied to the current sample and to the previous sample
///
/// The two differ on the x axis: the current flip keys on the "up" curves,
/// the previous flip on the "right" curves.
fn curve_flips(curve: Direction) -> (Vec2, Vec2) {
    let y_flip = match curve {
        Direction::LeftDown | Direction::RightDown => -1.0,
        _ => 1.0,
    };
    let x_flip = match curve {
        Direction::LeftUp | Direction::RightUp => 1.0,
        _ => -1.0,
    };
    let x_flip_last = match curve {
        Direction::RightUp | Direction::RightDown => 1.0,
        _ => -1.0,
    };

    (Vec2::new(x_flip, y_flip), Vec2::new(x_flip_last, y_flip))
}

fn advance_on_curve(
    cell: &TrackCell,
    curve: Direction,
    coords: TrainCoords,
    config: &BoardConfig,
) -> Vec2 {
    let corner = reference_corner(cell, curve, config.grid_size);
    let (flip, last_flip) = curve_flips(curve);

    let offset = (coords.current() - corner) * flip;
    let offset_last = (coords.previous() - corner) * last_flip;

    let angle = offset.y.atan2(offset.x);
    let angle_last = offset_last.y.atan2(offset_last.x);
    let new_angle = angle + config.curve_step * travel_sign(angle_last, angle);

    corner + Vec2::new(new_angle.cos(), new_angle.sin()) * config.half_grid() * flip
}
