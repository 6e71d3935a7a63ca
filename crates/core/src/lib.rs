//! Grid engine core - pure, deterministic, and testable.
//!
//! This crate owns the entire falling-block state machine: the playfield
//! grid, the active piece lifecycle, movement/rotation legality, locking,
//! and the line-clear cascade. It has no dependencies on rendering, input,
//! or networking; those layers drive it through the mutators and read it
//! back through the query surface.
//!
//! # Module structure
//!
//! - [`pieces`]: the immutable shape catalog (7 kinds, 1/2/4 rotations each)
//! - [`grid`]: the cell matrix with the filled/locked two-flag encoding
//! - [`rng`]: seeded LCG plus the upcoming-piece queue
//! - [`engine`]: the [`GridEngine`] state machine tying it all together
//!
//! # Example
//!
//! ```
//! use gridfall_core::GridEngine;
//! use gridfall_types::{GridConfig, MoveDir};
//!
//! let mut engine = GridEngine::new(GridConfig::default(), 12345);
//!
//! // One frame: inputs first, then gravity.
//! engine.move_horizontal(MoveDir::Left);
//! engine.rotate();
//! engine.gravity_tick();
//!
//! // Renderer reads back the visible overlay.
//! for cell in engine.visible_cells() {
//!     let _ = (cell.col, cell.row, cell.color);
//! }
//! ```

pub mod engine;
pub mod grid;
pub mod pieces;
pub mod rng;

pub use gridfall_types as types;

// Re-export commonly used items for convenience
pub use engine::{ActivePiece, GridEngine};
pub use grid::Grid;
pub use pieces::{rotation_count, shape, shape_width};
pub use rng::{PieceQueue, SimpleRng};
