use crate::cell::Cell;
use std::collections::{BTreeSet, HashSet};

/// Unbounded two-colour grid: every cell is white unless stored as black.
///
/// Memory grows with the number of black cells only, so the ant can wander
/// arbitrarily far.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridState {
    black: HashSet<Cell>,
}

impl GridState {
    /// Create an all-white grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a cell is black
    #[inline]
    pub fn is_black(&self, cell: Cell) -> bool {
        self.black.contains(&cell)
    }

    /// Toggle a cell's colour. Returns `true` if the cell is now black.
    #[inline]
    pub fn flip_color(&mut self, cell: Cell) -> bool {
        if self.black.remove(&cell) {
            false
        } else {
            self.black.insert(cell);
            true
        }
    }

    /// Turn every cell white again
    pub fn reset(&mut self) {
        self.black.clear();
    }

    /// Copy of the black cells in row-major order, detached from the grid
    pub fn snapshot(&self) -> BTreeSet<Cell> {
        self.black.iter().copied().collect()
    }

    /// Number of black cells
    #[inline]
    pub fn black_count(&self) -> usize {
        self.black.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.black.is_empty()
    }

    /// Inclusive (min, max) corners of the black region, `None` if all white
    pub fn bounds(&self) -> Option<(Cell, Cell)> {
        let mut cells = self.black.iter();
        let first = *cells.next()?;
        Some(cells.fold((first, first), |(lo, hi), c| {
            (
                Cell::new(lo.x.min(c.x), lo.y.min(c.y)),
                Cell::new(hi.x.max(c.x), hi.y.max(c.y)),
            )
        }))
    }
}

impl FromIterator<Cell> for GridState {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            black: iter.into_iter().collect(),
        }
    }
}
