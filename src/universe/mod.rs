//! Game of Life population engine

pub mod cell;
pub mod engine;
pub mod io;

pub use cell::{Cell, Viewport};
pub use engine::{Bounds, Universe};
pub use io::create_example_patterns;
