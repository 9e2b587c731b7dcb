//! Undo/redo log of single-cell color changes.

use crate::grid::{Cell, Grid};
use crate::palette::ColorKey;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A reversible change of one cell from `prev` to `next`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditRecord {
    pub cell: Cell,
    pub prev: ColorKey,
    pub next: ColorKey,
}

impl EditRecord {
    /// The record that undoes this one
    pub fn inverse(self) -> Self {
        EditRecord {
            cell: self.cell,
            prev: self.next,
            next: self.prev,
        }
    }
}

/// Linear undo/redo history. Records move between the two stacks and are
/// never duplicated.
#[derive(Debug, Clone, Default)]
pub struct History {
    /// Oldest record at the front
    undo_stack: VecDeque<EditRecord>,
    redo_stack: Vec<EditRecord>,
    /// Maximum undo depth, 0 for unbounded
    limit: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// History that keeps at most `limit` undo records (0 = unbounded)
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Push a change and drop any redo records. Callers only record real
    /// changes (`prev != next`).
    pub fn record(&mut self, cell: Cell, prev: ColorKey, next: ColorKey) {
        debug_assert_ne!(prev, next, "recorded a no-op edit");
        self.undo_stack.push_back(EditRecord { cell, prev, next });
        self.redo_stack.clear();
        if self.limit > 0 && self.undo_stack.len() > self.limit {
            self.undo_stack.pop_front();
        }
    }

    /// Revert the most recent change. Returns the record applied, or `None`
    /// when there is nothing to undo.
    pub fn undo(&mut self, grid: &mut Grid) -> Option<EditRecord> {
        let rec = self.undo_stack.pop_back()?;
        grid.set(rec.cell, rec.prev);
        self.redo_stack.push(rec.inverse());
        Some(rec)
    }

    /// Re-apply the most recently undone change.
    pub fn redo(&mut self, grid: &mut Grid) -> Option<EditRecord> {
        let inv = self.redo_stack.pop()?;
        // the redo stack holds inverses, so `prev` is the color to restore
        grid.set(inv.cell, inv.prev);
        let rec = inv.inverse();
        self.undo_stack.push_back(rec);
        Some(rec)
    }

    /// Drop all redo records (bulk grid replacements)
    pub fn clear_redo(&mut self) {
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painted(grid: &mut Grid, history: &mut History, cell: Cell, key: ColorKey) {
        let prev = grid.get(cell);
        history.record(cell, prev, key);
        grid.set(cell, key);
    }

    #[test]
    fn undo_restores_previous_color() {
        let mut g = Grid::default();
        let mut h = History::new();
        let c = Cell::new(2, 2);
        painted(&mut g, &mut h, c, ColorKey::RED);

        let rec = h.undo(&mut g).unwrap();
        assert_eq!(rec.prev, ColorKey::BLACK);
        assert_eq!(g.get(c), ColorKey::BLACK);
        assert_eq!(h.undo_depth(), 0);
        assert_eq!(h.redo_depth(), 1);
    }

    #[test]
    fn redo_reapplies_change() {
        let mut g = Grid::default();
        let mut h = History::new();
        let c = Cell::new(0, 7);
        painted(&mut g, &mut h, c, ColorKey::GREEN);
        painted(&mut g, &mut h, c, ColorKey::BLUE);

        h.undo(&mut g);
        h.undo(&mut g);
        assert_eq!(g.get(c), ColorKey::BLACK);
        h.redo(&mut g);
        assert_eq!(g.get(c), ColorKey::GREEN);
        h.redo(&mut g);
        assert_eq!(g.get(c), ColorKey::BLUE);
        assert!(!h.can_redo());
        assert_eq!(h.undo_depth(), 2);
    }

    #[test]
    fn empty_stacks_are_noops() {
        let mut g = Grid::default();
        let mut h = History::new();
        assert!(h.undo(&mut g).is_none());
        assert!(h.redo(&mut g).is_none());
        assert_eq!(g, Grid::default());
    }

    #[test]
    fn new_record_clears_redo() {
        let mut g = Grid::default();
        let mut h = History::new();
        painted(&mut g, &mut h, Cell::new(0, 0), ColorKey::RED);
        h.undo(&mut g);
        assert!(h.can_redo());
        painted(&mut g, &mut h, Cell::new(0, 1), ColorKey::RED);
        assert!(!h.can_redo());
    }

    #[test]
    fn limit_drops_oldest_records() {
        let mut g = Grid::default();
        let mut h = History::with_limit(2);
        for col in 0..4 {
            painted(&mut g, &mut h, Cell::new(0, col), ColorKey::WHITE);
        }
        assert_eq!(h.undo_depth(), 2);
        h.undo(&mut g);
        h.undo(&mut g);
        assert!(h.undo(&mut g).is_none());
        assert_eq!(g.get(Cell::new(0, 0)), ColorKey::WHITE);
        assert_eq!(g.get(Cell::new(0, 1)), ColorKey::WHITE);
        assert_eq!(g.get(Cell::new(0, 2)), ColorKey::BLACK);
    }

    #[test]
    fn bounded_history_keeps_newest_across_many_evictions() {
        let mut g = Grid::default();
        let mut h = History::with_limit(3);
        for idx in 0..500 {
            let prev = g.get(Cell::from_index(idx));
            h.record(Cell::from_index(idx), prev, ColorKey::RED);
            g.set(Cell::from_index(idx), ColorKey::RED);
            assert!(h.undo_depth() <= 3);
        }
        let undone: Vec<_> = std::iter::from_fn(|| h.undo(&mut g))
            .map(|r| r.cell.index())
            .collect();
        assert_eq!(undone, vec![499, 498, 497]);
        assert_eq!(h.redo(&mut g).unwrap().cell.index(), 497);
    }
}
