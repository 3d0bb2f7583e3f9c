//! Sparse Game of Life Engine
//!
//! This library simulates Conway's Game of Life on an unbounded grid using a
//! sparse live-cell set, with load/save of populations to a self-describing
//! document format.

pub mod config;
pub mod error;
pub mod universe;
pub mod utils;

pub use config::Settings;
pub use error::EngineError;
pub use universe::{Bounds, Cell, Universe, Viewport};
