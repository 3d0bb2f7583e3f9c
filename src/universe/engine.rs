//! Sparse population engine for Conway's Game of Life

use super::Cell;
use itertools::Itertools;
use std::collections::HashSet;

/// Minimal axis-aligned rectangle covering a population.
///
/// Extents are computed per axis as `max - min`. An empty population yields
/// the degenerate all-zero rectangle, which is a defined result rather than
/// an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i64,
    pub min_y: i64,
    pub width: i64,
    pub height: i64,
}

/// The Game of Life universe: a sparse set of live cells on an unbounded
/// grid, plus the generation counter.
///
/// Memory is proportional to the live-cell count, not grid area. The engine
/// owns the population exclusively; all mutation goes through [`advance`],
/// [`load_cells`], the file operations in the `io` module, and [`clear`].
/// There is no internal synchronization: callers needing concurrent access
/// must wrap the universe in their own lock.
///
/// [`advance`]: Universe::advance
/// [`load_cells`]: Universe::load_cells
/// [`clear`]: Universe::clear
#[derive(Debug, Clone, Default)]
pub struct Universe {
    pub(super) cells: HashSet<Cell>,
    pub(super) generation: u64,
}

impl Universe {
    /// Create an empty universe at generation 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the population by one generation under the B3/S23 rule.
    ///
    /// All neighbor counts are evaluated against the prior generation; deaths
    /// and births are committed together as one atomic transition, so no
    /// decision made in this pass can influence another in the same pass.
    /// Returns `false` if the resulting population is extinct.
    pub fn advance(&mut self) -> bool {
        // Dead positions adjacent to at least one live cell, collected while
        // counting neighbors so a second full scan is not needed.
        let mut candidates = HashSet::new();
        let mut dying = Vec::new();

        for &cell in &self.cells {
            let neighbors = self.live_neighbors(cell, Some(&mut candidates));

            // Under-population or overcrowding kills; 2 or 3 neighbors survive.
            if neighbors.len() < 2 || neighbors.len() > 3 {
                dying.push(cell);
            }
        }

        let born: Vec<Cell> = candidates
            .into_iter()
            .filter(|&pos| self.live_neighbors(pos, None).len() == 3)
            .collect();

        for cell in dying {
            self.cells.remove(&cell);
        }
        for cell in born {
            self.cells.insert(cell);
        }

        self.generation += 1;
        !self.cells.is_empty()
    }

    /// The live cells among the eight Moore neighbors of `pos`.
    ///
    /// When `candidates` is supplied, every dead neighbor position is added
    /// to it. This is the single hot path: it runs once per live cell per
    /// generation plus once per unique birth candidate.
    pub(super) fn live_neighbors(
        &self,
        pos: Cell,
        mut candidates: Option<&mut HashSet<Cell>>,
    ) -> Vec<Cell> {
        let mut alive = Vec::new();

        for neighbor in pos.neighbors() {
            if self.cells.contains(&neighbor) {
                alive.push(neighbor);
            } else if let Some(collected) = candidates.as_deref_mut() {
                collected.insert(neighbor);
            }
        }

        alive
    }

    /// Current population as a sequence. Order is unspecified; callers
    /// needing a stable presentation order must sort.
    pub fn population(&self) -> Vec<Cell> {
        self.cells.iter().copied().collect()
    }

    /// Number of live cells.
    pub fn count(&self) -> usize {
        self.cells.len()
    }

    /// Whether the population is extinct.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the cell at `pos` is alive.
    pub fn is_alive(&self, pos: Cell) -> bool {
        self.cells.contains(&pos)
    }

    /// Current generation number.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Minimal rectangle covering all live cells.
    pub fn bounds(&self) -> Bounds {
        let xs = self.cells.iter().map(|cell| cell.x).minmax().into_option();
        let ys = self.cells.iter().map(|cell| cell.y).minmax().into_option();

        match (xs, ys) {
            (Some((min_x, max_x)), Some((min_y, max_y))) => Bounds {
                min_x,
                min_y,
                width: max_x - min_x,
                height: max_y - min_y,
            },
            _ => Bounds::default(),
        }
    }

    /// Merge a sequence of cells into the population.
    ///
    /// Every supplied coordinate becomes (or remains) alive; duplicates
    /// collapse to one entry. The existing population is NOT cleared first;
    /// callers wanting a wholesale replacement must call [`Universe::clear`]
    /// before loading.
    pub fn load_cells<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = Cell>,
    {
        self.cells.extend(cells);
    }

    /// Empty the population and reset the generation counter to 0.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.generation = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn universe_with(cells: &[(i64, i64)]) -> Universe {
        let mut universe = Universe::new();
        universe.load_cells(cells.iter().map(|&(x, y)| Cell::new(x, y)));
        universe
    }

    #[test]
    fn test_new_universe_is_empty() {
        let universe = Universe::new();
        assert_eq!(universe.count(), 0);
        assert_eq!(universe.generation(), 0);
        assert!(universe.is_empty());
    }

    #[test]
    fn test_count_matches_population() {
        let universe = universe_with(&[(0, 0), (1, 0), (0, 1)]);
        assert_eq!(universe.count(), universe.population().len());
        assert_eq!(universe.count(), 3);
    }

    #[test]
    fn test_load_cells_collapses_duplicates() {
        let universe = universe_with(&[(2, 2), (2, 2), (2, 2)]);
        assert_eq!(universe.count(), 1);
    }

    #[test]
    fn test_load_cells_is_additive() {
        let mut universe = universe_with(&[(0, 0)]);
        universe.load_cells([Cell::new(1, 1)]);
        assert_eq!(universe.count(), 2);
        assert!(universe.is_alive(Cell::new(0, 0)));
    }

    #[test]
    fn test_generation_increments_even_when_empty() {
        let mut universe = Universe::new();
        assert!(!universe.advance());
        assert_eq!(universe.generation(), 1);
        assert!(universe.is_empty());
    }

    #[test]
    fn test_isolated_cell_goes_extinct() {
        let mut universe = universe_with(&[(5, 5)]);
        assert!(!universe.advance());
        assert!(universe.is_empty());
        assert_eq!(universe.generation(), 1);
    }

    #[test]
    fn test_overcrowded_cell_dies() {
        // Center of a 3x3 fully-live square has 8 neighbors.
        let mut universe = universe_with(&[
            (0, 0), (1, 0), (2, 0),
            (0, 1), (1, 1), (2, 1),
            (0, 2), (1, 2), (2, 2),
        ]);
        universe.advance();
        assert!(!universe.is_alive(Cell::new(1, 1)));
    }

    #[test]
    fn test_block_is_still_life() {
        let block = [(0, 0), (1, 0), (0, 1), (1, 1)];
        let mut universe = universe_with(&block);

        for _ in 0..5 {
            assert!(universe.advance());
        }

        assert_eq!(universe.count(), 4);
        for &(x, y) in &block {
            assert!(universe.is_alive(Cell::new(x, y)));
        }
        assert_eq!(universe.generation(), 5);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut universe = universe_with(&[(-1, 0), (0, 0), (1, 0)]);

        assert!(universe.advance());
        assert_eq!(universe.count(), 3);
        for y in -1..=1 {
            assert!(universe.is_alive(Cell::new(0, y)));
        }

        assert!(universe.advance());
        for x in -1..=1 {
            assert!(universe.is_alive(Cell::new(x, 0)));
        }
        assert_eq!(universe.generation(), 2);
    }

    #[test]
    fn test_birth_requires_exactly_three_neighbors() {
        // An L-shaped triple: (0,0) is dead with exactly 3 live neighbors.
        let mut universe = universe_with(&[(1, 0), (0, 1), (1, 1)]);
        universe.advance();
        assert!(universe.is_alive(Cell::new(0, 0)));

        // Two isolated cells give their shared neighbors only 2 live
        // neighbors, so nothing is born.
        let mut universe = universe_with(&[(0, 0), (2, 0)]);
        assert!(!universe.advance());
        assert!(universe.is_empty());
    }

    #[test]
    fn test_transition_is_computed_from_prior_generation() {
        // The blinker only oscillates if births and deaths are evaluated
        // against the old state; mid-scan mutation would corrupt it.
        let mut universe = universe_with(&[(-1, 0), (0, 0), (1, 0)]);
        universe.advance();
        universe.advance();

        assert_eq!(universe.count(), 3);
        for x in -1..=1 {
            assert!(universe.is_alive(Cell::new(x, 0)));
        }
    }

    #[test]
    fn test_bounds_empty_is_degenerate() {
        let universe = Universe::new();
        assert_eq!(universe.bounds(), Bounds::default());
    }

    #[test]
    fn test_bounds_two_points() {
        // Extent is max - min per axis, not the legacy abs(max) + abs(min).
        let universe = universe_with(&[(0, 0), (3, 4)]);
        let bounds = universe.bounds();
        assert_eq!(bounds.min_x, 0);
        assert_eq!(bounds.min_y, 0);
        assert_eq!(bounds.width, 3);
        assert_eq!(bounds.height, 4);
    }

    #[test]
    fn test_bounds_negative_coordinates() {
        let universe = universe_with(&[(-3, -2), (5, 7)]);
        let bounds = universe.bounds();
        assert_eq!(bounds.min_x, -3);
        assert_eq!(bounds.min_y, -2);
        assert_eq!(bounds.width, 8);
        assert_eq!(bounds.height, 9);
    }

    #[test]
    fn test_clear_resets_generation() {
        let mut universe = universe_with(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        universe.advance();
        universe.clear();

        assert!(universe.is_empty());
        assert_eq!(universe.generation(), 0);
    }
}
