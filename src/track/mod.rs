use bevy::prelude::*;

use crate::board::{BoardConfig, TrackBoard};
use crate::ui::logging::TerminalLogEvent;

// Track shapes
pub mod direction;
pub use direction::Direction;

// Direction resolution (Logic Layer)
pub mod resolve;
pub use resolve::{direction_for, resolve};

// Propagation cascade (Logic Layer)
pub mod reconcile;
pub use reconcile::{reconcile, reconcile_cells};

// Messages
pub mod messages;
pub use messages::{CancelWipe, CellWiped, PlaceTrack, ReconcileCell, RemoveTrack};

// Placement and removal handlers (Input Layer)
pub mod editing;
pub use editing::apply_track_edits;

// Removal scribble effect
pub mod wipe;
pub use wipe::{CellWipe, advance_cell_wipes, finish_wiped_cells};


/// Ordering of the per-frame track and train work
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum TrackSet {
    /// Placement, removal and cancellation requests
    Edit,
    /// Running wipe effects and removal of wiped cells
    Wipe,
    /// Direction resolution cascades
    Reconcile,
    /// Train control and ticks
    Train,
    /// Painting of cells and trains
    Render,
}

/// Plugin owning the board, track editing and direction resolution
pub struct TrackPlugin;

impl Plugin for TrackPlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world()
            .get_resource::<BoardConfig>()
            .cloned()
            .unwrap_or_default();

        app.insert_resource(TrackBoard::new(config.clone()))
            .insert_resource(config);

        app.add_message::<PlaceTrack>()
            .add_message::<RemoveTrack>()
            .add_message::<CancelWipe>()
            .add_message::<ReconcileCell>()
            .add_message::<CellWiped>()
            .add_message::<TerminalLogEvent>();

        app.configure_sets(
            Update,
            (
                TrackSet::Edit,
                TrackSet::Wipe,
                TrackSet::Reconcile,
                TrackSet::Train,
                TrackSet::Render,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                apply_track_edits.in_set(TrackSet::Edit),
                (advance_cell_wipes, finish_wiped_cells)
                    .chain()
                    .in_set(TrackSet::Wipe),
                reconcile_cells.in_set(TrackSet::Reconcile),
            ),
        );
    }
}
