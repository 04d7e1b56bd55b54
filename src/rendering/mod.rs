// Painters for the board, track cells, wipe scribbles and trains
pub mod board_rendering;
pub mod track_rendering;
pub mod train_rendering;

pub use board_rendering::{BoardRenderingPlugin, TrackPalette};
pub use track_rendering::{PieceKind, TrackPiece, TrackRenderingPlugin, track_pieces};
pub use train_rendering::TrainRenderingPlugin;
