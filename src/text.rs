//! Word-wrapped bitmap text rendering onto the grid.

use crate::font::{self, Glyph, GLYPH_HEIGHT};
use crate::grid::{Cell, Grid, GRID_SIZE};
use crate::history::History;
use crate::palette::ColorKey;

/// Vertical distance between text lines (glyph rows plus one blank row)
pub const LINE_HEIGHT: usize = GLYPH_HEIGHT + 1;

/// A glyph positioned by its top-left corner. Coordinates may fall past
/// the grid; drawing clips them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub glyph: &'static Glyph,
    pub row: usize,
    pub col: usize,
}

/// Lay out `text` left to right from (0, 0).
///
/// Words are separated by single spaces; each space adds one blank column,
/// so runs of spaces widen the gap. Characters without a glyph are dropped
/// and take no room. A word that would cross column 32 starts a new line.
pub fn layout(text: &str) -> Vec<Placement> {
    let mut placements = Vec::new();
    let mut col = 0usize;
    let mut row = 0usize;

    for word in text.split(' ') {
        let glyphs: Vec<&'static Glyph> = word.chars().filter_map(font::glyph).collect();
        // glyph widths plus one spacer column between glyphs
        let width: usize = glyphs.iter().map(|g| g.width() + 1).sum::<usize>().saturating_sub(1);

        if !glyphs.is_empty() && col + width > GRID_SIZE {
            col = 0;
            row += LINE_HEIGHT;
        }

        for glyph in glyphs {
            placements.push(Placement { glyph, row, col });
            col += glyph.width() + 1;
        }

        col += 1;
    }

    placements
}

/// Clear the grid to `background` and draw `text` in `color`.
///
/// Pixels past the right or bottom edge are dropped. A bulk replacement:
/// nothing is recorded, the redo stack is cleared.
pub fn render_text(
    grid: &mut Grid,
    history: &mut History,
    text: &str,
    color: ColorKey,
    background: ColorKey,
) {
    grid.clear(background);
    let placements = layout(text);
    let mut clipped = 0usize;

    for p in &placements {
        for (dr, dc) in p.glyph.lit() {
            let (row, col) = (p.row + dr, p.col + dc);
            if row < GRID_SIZE && col < GRID_SIZE {
                grid.set(Cell::new(row, col), color);
            } else {
                clipped += 1;
            }
        }
    }

    if clipped > 0 {
        log::debug!("text render clipped {} pixels outside the grid", clipped);
    }
    history.clear_redo();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_cells(grid: &Grid, color: ColorKey) -> Vec<(usize, usize)> {
        Cell::all()
            .filter(|c| grid.get(*c) == color)
            .map(|c| (c.row(), c.col()))
            .collect()
    }

    #[test]
    fn single_a_matches_glyph() {
        let mut g = Grid::default();
        let mut h = History::new();
        render_text(&mut g, &mut h, "A", ColorKey::WHITE, ColorKey::BLACK);

        let pattern = ["010", "101", "111", "101", "101"];
        for (r, row) in pattern.iter().enumerate() {
            for (c, bit) in row.chars().enumerate() {
                let expected = if bit == '1' { ColorKey::WHITE } else { ColorKey::BLACK };
                assert_eq!(g.get(Cell::new(r, c)), expected, "cell ({}, {})", r, c);
            }
        }
        assert_eq!(g.count(ColorKey::WHITE), 10);
    }

    #[test]
    fn glyphs_are_spaced_by_one_column() {
        let p = layout("AB");
        assert_eq!(p.len(), 2);
        assert_eq!((p[0].row, p[0].col), (0, 0));
        assert_eq!((p[1].row, p[1].col), (0, 4));
    }

    #[test]
    fn words_get_an_extra_column() {
        let p = layout("A B");
        // A at 0, advance 4, word gap 1
        assert_eq!(p[1].col, 5);
    }

    #[test]
    fn long_word_wraps_to_next_line() {
        // "MMMMM" is 5*5 + 4 = 29 wide; after "A " (col 5) it cannot fit
        let p = layout("A MMMMM");
        assert_eq!(p[0].col, 0);
        assert_eq!((p[1].row, p[1].col), (6, 0));
        assert!(p[1..].iter().all(|pl| pl.row == 6));
    }

    #[test]
    fn word_ending_exactly_at_edge_does_not_wrap() {
        // eight 3-wide glyphs: 8*4 - 1 = 31 columns
        let p = layout("AAAAAAAA");
        assert!(p.iter().all(|pl| pl.row == 0));
        assert_eq!(p.last().unwrap().col, 28);
    }

    #[test]
    fn unknown_characters_are_skipped() {
        let p = layout("A1!B");
        assert_eq!(p.len(), 2);
        assert_eq!(p[1].col, 4);
        assert!(layout("123").is_empty());
    }

    #[test]
    fn lowercase_is_folded() {
        assert_eq!(layout("hi"), layout("HI"));
    }

    #[test]
    fn render_clears_previous_content() {
        let mut g = Grid::new(ColorKey::RED);
        let mut h = History::new();
        render_text(&mut g, &mut h, "", ColorKey::WHITE, ColorKey::BLACK);
        assert_eq!(g, Grid::new(ColorKey::BLACK));
    }

    #[test]
    fn overflow_is_clipped() {
        let mut g = Grid::default();
        let mut h = History::new();
        // each word is 35 wide, so every word (the first too) wraps; the
        // fifth line starts at row 30 and the sixth falls off entirely
        let text = vec!["TTTTTT"; 6].join(" ");
        let p = layout(&text);
        assert_eq!(p[0].row, 6);
        assert_eq!(p.last().unwrap().row, 36);

        render_text(&mut g, &mut h, &text, ColorKey::YELLOW, ColorKey::BLACK);
        let lit = lit_cells(&g, ColorKey::YELLOW);
        assert!(lit.iter().all(|(r, c)| *r < GRID_SIZE && *c < GRID_SIZE));
        assert!(lit.iter().any(|(r, _)| *r == 31));
    }
}
