//! Persistence for populations
//!
//! A saved population is a self-describing JSON document: the alive-cell
//! count and generation at save time, the caller's viewport size echoed back
//! verbatim on load, and one entry per live cell in the engine's canonical
//! coordinate form:
//!
//! ```json
//! {
//!   "population": 4,
//!   "generation": 12,
//!   "size": "500,500",
//!   "cells": ["0, 0", "0, 1", "1, 0", "1, 1"]
//! }
//! ```

use super::{Cell, Universe, Viewport};
use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
struct PopulationDocument {
    /// Alive-cell count at save time. Informational only; not re-validated
    /// against `cells` on load.
    population: usize,
    generation: u64,
    size: String,
    cells: Vec<String>,
}

impl Universe {
    /// Save the current population, generation, and viewport metadata.
    ///
    /// Any encoding or I/O fault is reported as an [`EngineError`], never a
    /// panic. An empty path is a caller error and is rejected immediately.
    pub fn save_to_file<P: AsRef<Path>>(
        &self,
        path: P,
        size: Viewport,
    ) -> Result<(), EngineError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(EngineError::InvalidArgument("empty file path".into()));
        }

        let document = PopulationDocument {
            population: self.count(),
            generation: self.generation,
            size: size.to_string(),
            cells: self.cells.iter().map(Cell::to_string).collect(),
        };

        let content = serde_json::to_string_pretty(&document)
            .map_err(|e| EngineError::Parse(format!("failed to encode document: {e}")))?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Load a saved population, replacing the current population and
    /// generation counter. Returns the viewport metadata stored alongside.
    ///
    /// The document is parsed into a temporary set and swapped in only on
    /// full success, so a failed load leaves the current population intact.
    /// A single malformed coordinate or attribute fails the whole load;
    /// there is no partial-record skipping.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<Viewport, EngineError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(EngineError::InvalidArgument("empty file path".into()));
        }
        if !path.exists() {
            return Err(EngineError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        let document: PopulationDocument = serde_json::from_str(&content)
            .map_err(|e| EngineError::Parse(e.to_string()))?;

        let size: Viewport = document.size.parse()?;

        let mut cells = HashSet::with_capacity(document.cells.len());
        for entry in &document.cells {
            cells.insert(entry.parse::<Cell>()?);
        }

        self.cells = cells;
        self.generation = document.generation;

        Ok(size)
    }
}

/// Write example pattern files (still life, oscillator, spaceship) into a
/// directory, in the persisted population format.
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<(), EngineError> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let size = Viewport::new(500.0, 500.0);
    let patterns: [(&str, &[(i64, i64)]); 3] = [
        ("block", &[(0, 0), (1, 0), (0, 1), (1, 1)]),
        ("blinker", &[(-1, 0), (0, 0), (1, 0)]),
        ("glider", &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]),
    ];

    for (name, cells) in patterns {
        let mut universe = Universe::new();
        universe.load_cells(cells.iter().map(|&(x, y)| Cell::new(x, y)));
        universe.save_to_file(dir.join(format!("{name}.json")), size)?;
    }

    Ok(())
}
