use bevy::prelude::*;

use crate::board::TrackCell;

/// Current and previous pixel position of a train
///
/// Two samples are enough to know which way the train is heading. The pair is
/// replaced wholesale every tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Reflect)]
pub struct TrainCoords {
    pub current_x: f32,
    pub current_y: f32,
    pub previous_x: f32,
    pub previous_y: f32,
}

impl TrainCoords {
    pub fn new(current: Vec2, previous: Vec2) -> Self {
        Self {
            current_x: current.x,
            current_y: current.y,
            previous_x: previous.x,
            previous_y: previous.y,
        }
    }

    /// Centre of `cell`, with a history pointing down and to the right
    pub fn starting_at(cell: &TrackCell, grid_size: f32) -> Self {
        // never start exactly on the previous sample
        let previous = Vec2::new(cell.x(), cell.y() - 1.0);
        Self::new(cell.centre(grid_size), previous)
    }

    pub fn current(&self) -> Vec2 {
        Vec2::new(self.current_x, self.current_y)
    }

    pub fn previous(&self) -> Vec2 {
        Vec2::new(self.previous_x, self.previous_y)
    }

    /// Move to `next`, remembering the current position as the previous one
    pub fn shifted(self, next: Vec2) -> Self {
        Self::new(next, self.current())
    }
}
