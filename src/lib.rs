//! Core library for a fixed-grid Conway's Game of Life: a dense grid store
//! and a pure generation-step engine.

pub mod engine;
pub mod grid;
pub mod pos;

pub use engine::{MOORE_OFFSETS, advance, advance_parallel, count_live_neighbors};
pub use grid::Grid;
pub use pos::Pos2;
