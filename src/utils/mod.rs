//! Output formatting helpers

pub mod display;

pub use display::{Color, ColorOutput, PopulationFormatter};
