//! Cell coordinates and viewport metadata

use crate::error::EngineError;
use std::fmt;
use std::str::FromStr;

/// A cell position on the infinite integer lattice.
///
/// Used as a set key, so equality and hashing are derived from both
/// components. The canonical string form is `"x, y"` (e.g. `"3, 7"`), which
/// is also the representation used in persisted population documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The eight Moore-neighborhood positions of this cell.
    pub fn neighbors(self) -> [Cell; 8] {
        let Cell { x, y } = self;
        [
            Cell::new(x - 1, y - 1),
            Cell::new(x, y - 1),
            Cell::new(x + 1, y - 1),
            Cell::new(x - 1, y),
            Cell::new(x + 1, y),
            Cell::new(x - 1, y + 1),
            Cell::new(x, y + 1),
            Cell::new(x + 1, y + 1),
        ]
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

impl FromStr for Cell {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| EngineError::Parse(format!("invalid cell coordinate '{s}'")))?;

        let x = x
            .trim()
            .parse::<i64>()
            .map_err(|_| EngineError::Parse(format!("invalid cell coordinate '{s}'")))?;
        let y = y
            .trim()
            .parse::<i64>()
            .map_err(|_| EngineError::Parse(format!("invalid cell coordinate '{s}'")))?;

        Ok(Cell::new(x, y))
    }
}

/// Viewport dimensions attached to a saved population.
///
/// Pure metadata: the engine round-trips it through save/load without
/// interpreting it. Canonical string form is `"w,h"` (e.g. `"500,500"`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.width, self.height)
    }
}

impl FromStr for Viewport {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(',')
            .ok_or_else(|| EngineError::Parse(format!("invalid viewport size '{s}'")))?;

        let width = w
            .trim()
            .parse::<f64>()
            .map_err(|_| EngineError::Parse(format!("invalid viewport size '{s}'")))?;
        let height = h
            .trim()
            .parse::<f64>()
            .map_err(|_| EngineError::Parse(format!("invalid viewport size '{s}'")))?;

        Ok(Viewport::new(width, height))
    }
}
