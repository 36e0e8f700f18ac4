//! Rendering boundary
//!
//! The core never touches images or a GPU. It hands out a [`Snapshot`], an
//! ordered list of [`DrawCommand`]s keyed by asset, and fallback quads for
//! any asset the renderer failed to load.

pub mod shapes;
pub mod snapshot;
pub mod vertex;

pub use snapshot::{DrawCommand, ObstacleRects, Snapshot, draw_list};
pub use vertex::Vertex;
