//! The fixed 32x32 cell buffer.

use crate::palette::ColorKey;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Cells per row and rows per grid
pub const GRID_SIZE: usize = 32;
/// Total number of cells
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// A cell position, stored as its row-major index `row * 32 + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell(usize);

impl Cell {
    /// Panics if `row` or `col` is outside `0..32`.
    pub fn new(row: usize, col: usize) -> Self {
        assert!(
            row < GRID_SIZE && col < GRID_SIZE,
            "cell ({}, {}) out of range",
            row,
            col
        );
        Cell(row * GRID_SIZE + col)
    }

    /// Checked constructor for coordinates coming from outside the crate.
    pub fn checked(row: usize, col: usize) -> Result<Self> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Ok(Cell(row * GRID_SIZE + col))
        } else {
            Err(Error::InvalidCell { row, col })
        }
    }

    /// Panics if `index >= 1024`.
    pub fn from_index(index: usize) -> Self {
        assert!(index < CELL_COUNT, "cell index {} out of range", index);
        Cell(index)
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn row(self) -> usize {
        self.0 / GRID_SIZE
    }

    pub fn col(self) -> usize {
        self.0 % GRID_SIZE
    }

    /// Up, down, left and right neighbors that lie on the grid.
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        let (row, col) = (self.row(), self.col());
        let up = (row > 0).then(|| Cell(self.0 - GRID_SIZE));
        let down = (row + 1 < GRID_SIZE).then(|| Cell(self.0 + GRID_SIZE));
        let left = (col > 0).then(|| Cell(self.0 - 1));
        let right = (col + 1 < GRID_SIZE).then(|| Cell(self.0 + 1));
        [up, down, left, right].into_iter().flatten()
    }

    /// All cells in row-major order
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT).map(Cell)
    }
}

/// Per-cell color keys, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<ColorKey>,
}

impl Grid {
    /// A grid with every cell set to `fill`
    pub fn new(fill: ColorKey) -> Self {
        Self {
            cells: vec![fill; CELL_COUNT],
        }
    }

    pub fn get(&self, cell: Cell) -> ColorKey {
        self.cells[cell.index()]
    }

    pub fn set(&mut self, cell: Cell, key: ColorKey) {
        self.cells[cell.index()] = key;
    }

    /// Reset every cell to `fill`
    pub fn clear(&mut self, fill: ColorKey) {
        self.cells.iter_mut().for_each(|c| *c = fill);
    }

    /// Keys in row-major order
    pub fn keys(&self) -> &[ColorKey] {
        &self.cells
    }

    /// Overwrite the whole buffer. `keys` must hold exactly 1024 entries.
    pub fn replace_all(&mut self, keys: &[ColorKey]) {
        assert_eq!(keys.len(), CELL_COUNT, "grid replacement must cover every cell");
        self.cells.copy_from_slice(keys);
    }

    /// Number of cells holding `key`
    pub fn count(&self, key: ColorKey) -> usize {
        self.cells.iter().filter(|c| **c == key).count()
    }

    /// SHA-256 of the raw key bytes, hex-encoded. Stable across runs, so
    /// golden tests can pin whole-grid results.
    pub fn digest(&self) -> String {
        let bytes: Vec<u8> = self.cells.iter().map(|k| k.0).collect();
        hex::encode(Sha256::digest(&bytes))
    }

    /// One line per row, one hex digit per cell. Handy in test failures.
    pub fn to_ascii(&self) -> String {
        self.cells
            .chunks(GRID_SIZE)
            .map(|row| row.iter().map(|k| format!("{:X}", k.0 & 0x0F)).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(ColorKey::BLACK)
    }
}
