use bevy::prelude::*;

/// Resolved shape of a track cell
///
/// Curves are named after the two sides they join, e.g. `LeftUp` runs from the
/// left edge of the cell to its top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum Direction {
    #[default]
    None,
    Horizontal,
    Vertical,
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

impl Direction {
    pub const ALL: [Direction; 7] = [
        Direction::None,
        Direction::Horizontal,
        Direction::Vertical,
        Direction::LeftUp,
        Direction::LeftDown,
        Direction::RightUp,
        Direction::RightDown,
    ];

    pub const CURVES: [Direction; 4] = [
        Direction::LeftUp,
        Direction::LeftDown,
        Direction::RightUp,
        Direction::RightDown,
    ];

    pub fn is_curve(self) -> bool {
        matches!(
            self,
            Direction::LeftUp | Direction::LeftDown | Direction::RightUp | Direction::RightDown
        )
    }

    pub fn is_connected_up(self) -> bool {
        matches!(
            self,
            Direction::Vertical | Direction::LeftUp | Direction::RightUp
        )
    }

    pub fn is_connected_down(self) -> bool {
        matches!(
            self,
            Direction::Vertical | Direction::LeftDown | Direction::RightDown
        )
    }

    pub fn is_connected_left(self) -> bool {
        matches!(
            self,
            Direction::Horizontal | Direction::LeftUp | Direction::LeftDown
        )
    }

    pub fn is_connected_right(self) -> bool {
        matches!(
            self,
            Direction::Horizontal | Direction::RightUp | Direction::RightDown
        )
    }
}
