// Board configuration
pub mod config;
pub use config::BoardConfig;

// Cells and neighbour sets
pub mod types;
pub use types::{NeighborSet, TrackCell};

// Cell storage and coordinate conversion (Grid Adapter)
pub mod storage;
pub use storage::TrackBoard;
