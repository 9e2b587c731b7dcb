//! Built-in 5-row bitmap font for uppercase A-Z

/// Rows per glyph
pub const GLYPH_HEIGHT: usize = 5;

/// A glyph bitmap: one string per row, `'1'` marks a lit pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub rows: [&'static str; GLYPH_HEIGHT],
}

impl Glyph {
    /// Width in pixels (3 to 5)
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Lit pixels as `(row, col)` offsets within the glyph
    pub fn lit(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'1')
                .map(move |(c, _)| (r, c))
        })
    }
}

const fn g(rows: [&'static str; GLYPH_HEIGHT]) -> Glyph {
    Glyph { rows }
}

static LETTERS: [Glyph; 26] = [
    g(["010", "101", "111", "101", "101"]),           // A
    g(["1110", "1001", "1110", "1001", "1110"]),      // B
    g(["111", "100", "100", "100", "111"]),           // C
    g(["1110", "1001", "1001", "1001", "1110"]),      // D
    g(["111", "100", "111", "100", "111"]),           // E
    g(["111", "100", "111", "100", "100"]),           // F
    g(["011", "100", "100", "101", "011"]),           // G
    g(["101", "101", "111", "101", "101"]),           // H
    g(["111", "010", "010", "010", "111"]),           // I
    g(["011", "001", "001", "101", "111"]),           // J
    g(["1001", "1010", "1100", "1010", "1001"]),      // K
    g(["100", "100", "100", "100", "111"]),           // L
    g(["10001", "11011", "10101", "10001", "10001"]), // M
    g(["1001", "1101", "1011", "1001", "1001"]),      // N
    g(["111", "101", "101", "101", "111"]),           // O
    g(["110", "101", "110", "100", "100"]),           // P
    g(["0110", "1001", "1001", "1001", "0111"]),      // Q
    g(["111", "101", "111", "110", "101"]),           // R
    g(["111", "100", "111", "001", "111"]),           // S
    g(["11111", "00100", "00100", "00100", "00100"]), // T
    g(["1001", "1001", "1001", "1001", "0111"]),      // U
    g(["1001", "1001", "1001", "0101", "0010"]),      // V
    g(["1001", "1001", "1011", "1101", "1001"]),      // W
    g(["1001", "0101", "0010", "0101", "1001"]),      // X
    g(["1001", "0101", "0010", "0010", "0010"]),      // Y
    g(["1111", "0001", "0010", "0100", "1111"]),      // Z
];

/// Glyph for `ch`, case-insensitive. `None` for anything outside A-Z.
pub fn glyph(ch: char) -> Option<&'static Glyph> {
    let upper = ch.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        LETTERS.get((upper as u8 - b'A') as usize)
    } else {
        None
    }
}
