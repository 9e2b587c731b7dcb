//! Text code import/export (`.db 0xNN, 0xNN, ...`).

use crate::grid::{Cell, Grid, CELL_COUNT};
use crate::history::History;
use crate::palette::ColorKey;

/// Leading assembler data directive
pub const DIRECTIVE: &str = ".db";

/// Format keys as a `.db` line: `.db 0x00, 0x07, ...`
pub fn format_code<'a, I>(keys: I) -> String
where
    I: IntoIterator<Item = &'a ColorKey>,
{
    let body = keys
        .into_iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} {}", DIRECTIVE, body)
}

/// Serialize all 1024 cells, row-major.
pub fn export_code(grid: &Grid) -> String {
    format_code(grid.keys())
}

/// Parse a comma-separated token list.
///
/// Accepts the `.db` form as produced by [`export_code`] as well as bare
/// lists, with or without `0x` prefixes. Positions keep their index: a
/// token that is empty or not hex yields `None` at that position.
pub fn parse_code(text: &str) -> Vec<Option<ColorKey>> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix(DIRECTIVE)
        .map(str::trim_start)
        .unwrap_or(trimmed);
    if body.is_empty() {
        return Vec::new();
    }
    body.split(',')
        .map(|tok| {
            let tok = tok.trim();
            if tok.is_empty() {
                None
            } else {
                tok.parse::<ColorKey>().ok()
            }
        })
        .collect()
}

/// Summary of an import
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Cells written
    pub applied: usize,
    /// Tokens that could not be parsed (their cells were left as they were)
    pub skipped: usize,
    /// Tokens past cell 1024, ignored
    pub ignored: usize,
    /// The imported span of the grid re-serialized in `.db` form, one
    /// entry per token position (skipped tokens show the kept color)
    pub normalized: String,
}

/// Apply a code to the grid, token `i` to cell `i`.
///
/// Cells past the end of the list keep their colors. Keys are stored
/// without checking them against the palette. A bulk replacement: nothing
/// is recorded, the redo stack is cleared.
pub fn import_code(grid: &mut Grid, history: &mut History, text: &str) -> ImportReport {
    let tokens = parse_code(text);
    let mut report = ImportReport {
        ignored: tokens.len().saturating_sub(CELL_COUNT),
        ..Default::default()
    };

    for (i, tok) in tokens.iter().take(CELL_COUNT).enumerate() {
        match tok {
            Some(key) => {
                grid.set(Cell::from_index(i), *key);
                report.applied += 1;
            }
            None => report.skipped += 1,
        }
    }

    if report.skipped > 0 {
        log::warn!("import skipped {} unparseable tokens", report.skipped);
    }
    if let Some(bad) = tokens.iter().flatten().find(|k| !k.is_valid()) {
        log::warn!("import stored key {} which has no palette color", bad);
    }

    let span = tokens.len().min(CELL_COUNT);
    report.normalized = format_code(&grid.keys()[..span]);
    history.clear_redo();
    report
}
