use crate::board::{NeighborSet, TrackCell};

use super::direction::Direction;

/// Pick the shape a cell should take for the given neighbour occupancy
///
/// Corner joins win over straight-through joins, which win over single-sided
/// stubs. An isolated cell is a horizontal stub.
pub fn direction_for(neighbors: &NeighborSet) -> Direction {
    let up = neighbors.has_up();
    let down = neighbors.has_down();
    let left = neighbors.has_left();
    let right = neighbors.has_right();

    if left && !right && up {
        Direction::LeftUp
    } else if left && !right && down {
        Direction::LeftDown
    } else if !left && right && up {
        Direction::RightUp
    } else if !left && right && down {
        Direction::RightDown
    }
    // greedy joins through both sides
    else if up && down {
        Direction::Vertical
    } else if left && right {
        Direction::Horizontal
    }
    // single neighbour stubs
    else if up || down {
        Direction::Vertical
    } else {
        Direction::Horizontal
    }
}

/// Re-resolve a cell against its current neighbours
///
/// Settled cells are left untouched. Otherwise the direction is updated in
/// place and the cell settles as soon as it sees more than one neighbour.
/// Returns whether the direction changed.
pub fn resolve(cell: &mut TrackCell, neighbors: &NeighborSet) -> bool {
    if cell.settled {
        return false;
    }

    let direction = direction_for(neighbors);
    cell.settled = neighbors.len() > 1;

    if direction == cell.direction {
        return false;
    }
    cell.direction = direction;
    true
}
