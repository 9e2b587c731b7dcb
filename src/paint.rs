//! Single-cell painting and flood fill, both recorded in the history.

use crate::grid::{Cell, Grid, CELL_COUNT};
use crate::history::History;
use crate::palette::ColorKey;

/// Paint one cell. Returns `true` if its color changed; painting a cell
/// with its current color records nothing.
pub fn paint_cell(grid: &mut Grid, history: &mut History, cell: Cell, color: ColorKey) -> bool {
    let prev = grid.get(cell);
    if prev == color {
        return false;
    }
    history.record(cell, prev, color);
    grid.set(cell, color);
    true
}

/// Recolor the 4-connected region of cells sharing `start`'s color.
///
/// Iterative with an explicit stack. The target color is read once from
/// the seed, since repainted cells no longer match it. Returns the number
/// of cells changed (one history record each).
pub fn flood_fill(grid: &mut Grid, history: &mut History, start: Cell, color: ColorKey) -> usize {
    let target = grid.get(start);
    if target == color {
        return 0;
    }

    let mut visited = vec![false; CELL_COUNT];
    let mut stack = vec![start];
    let mut changed = 0;

    while let Some(cell) = stack.pop() {
        if visited[cell.index()] {
            continue;
        }
        visited[cell.index()] = true;

        if paint_cell(grid, history, cell, color) {
            changed += 1;
        }

        for n in cell.neighbors() {
            if !visited[n.index()] && grid.get(n) == target {
                stack.push(n);
            }
        }
    }

    log::debug!("flood fill from {:?} changed {} cells", start, changed);
    changed
}
