use bevy::prelude::*;
use bevy_ecs_tilemap::prelude::TilePos;

/// Message to lay a track segment on an empty grid position
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceTrack {
    pub position: TilePos,
}

/// Message to scribble out and remove the segment at a grid position
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveTrack {
    pub position: TilePos,
}

/// Message to abort a removal that is still being wiped
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelWipe {
    pub position: TilePos,
}

/// Message to re-resolve a cell and cascade through its neighbours
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileCell {
    pub cell: Entity,
}

/// Completion of a wipe; written exactly once, after the last scribble
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellWiped {
    pub cell: Entity,
    pub position: TilePos,
}
