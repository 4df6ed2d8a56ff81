//! Glyph lookup table for mosaic rendering
//!
//! Thirteen glyphs ordered from densest (darkest tile) to emptiest (brightest
//! tile). A tile's mean intensity picks its glyph in buckets of 19 levels.

/// Width of one glyph cell in pixels
pub const TILE_WIDTH: u32 = 10;

/// Height of one glyph cell in pixels
pub const TILE_HEIGHT: u32 = 20;

/// Intensity levels covered by each glyph; the last bucket is open-ended
pub const BUCKET_WIDTH: u8 = 19;

/// One ASCII-art character cell
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    Hash,
    At,
    Ampersand,
    Dollar,
    Percent,
    Bar,
    Exclamation,
    Semicolon,
    Colon,
    Apostrophe,
    Grave,
    Dot,
    Space,
}

impl Glyph {
    /// All glyphs, darkest first; a glyph's position is its bucket index
    pub const ALL: [Glyph; 13] = [
        Glyph::Hash,
        Glyph::At,
        Glyph::Ampersand,
        Glyph::Dollar,
        Glyph::Percent,
        Glyph::Bar,
        Glyph::Exclamation,
        Glyph::Semicolon,
        Glyph::Colon,
        Glyph::Apostrophe,
        Glyph::Grave,
        Glyph::Dot,
        Glyph::Space,
    ];

    /// Pick the glyph for a mean tile intensity
    ///
    /// `0..=18` is `#`, `19..=37` is `@`, and so on; everything from 228 up is a space.
    pub fn from_intensity(intensity: u8) -> Glyph {
        let index = (intensity / BUCKET_WIDTH) as usize;
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    /// Position in [`Glyph::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Resource name, also the file stem of the glyph bitmap
    pub fn name(self) -> &'static str {
        match self {
            Glyph::Hash => "hash",
            Glyph::At => "at",
            Glyph::Ampersand => "ampersand",
            Glyph::Dollar => "dollar",
            Glyph::Percent => "percent",
            Glyph::Bar => "bar",
            Glyph::Exclamation => "exclamation",
            Glyph::Semicolon => "semicolon",
            Glyph::Colon => "colon",
            Glyph::Apostrophe => "apostrophe",
            Glyph::Grave => "grave",
            Glyph::Dot => "dot",
            Glyph::Space => "space",
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Glyph::Hash => '#',
            Glyph::At => '@',
            Glyph::Ampersand => '&',
            Glyph::Dollar => '$',
            Glyph::Percent => '%',
            Glyph::Bar => '|',
            Glyph::Exclamation => '!',
            Glyph::Semicolon => ';',
            Glyph::Colon => ':',
            Glyph::Apostrophe => '\'',
            Glyph::Grave => '`',
            Glyph::Dot => '.',
            Glyph::Space => ' ',
        }
    }

    /// Whether the built-in bitmap inks the cell pixel at `(x, y)`
    ///
    /// Coarse hand-drawn shapes used when no bitmap directory is configured.
    ///
    /// # Arguments
    /// * `x` - Column inside the cell (0-9)
    /// * `y` - Row inside the cell (0-19)
    pub fn inked(self, x: u32, y: u32) -> bool {
        assert!(
            x < TILE_WIDTH && y < TILE_HEIGHT,
            "Glyph coordinates must be inside the 10x20 cell"
        );
        let (x, y) = (x as i32, y as i32);
        let in_body = (2..=17).contains(&y);

        match self {
            Glyph::Space => false,

            Glyph::Hash => {
                // Two uprights crossed by two bars
                let upright = (x == 3 || x == 6) && in_body;
                let bar = (y == 7 || y == 12) && (1..=8).contains(&x);
                upright || bar
            }

            Glyph::At => {
                // Ring with a filled center
                let dx = x * 2 - 9;
                let dy = y * 2 - 19;
                let r2 = dx * dx + dy * dy / 4;
                (40..=64).contains(&r2) || r2 <= 12
            }

            Glyph::Ampersand => {
                // Small loop on top, larger loop below, and a tail
                let top = {
                    let dx = x * 2 - 9;
                    let dy = y * 2 - 11;
                    (14..=26).contains(&(dx * dx + dy * dy))
                };
                let bottom = {
                    let dx = x * 2 - 9;
                    let dy = y * 2 - 27;
                    (36..=56).contains(&(dx * dx + dy * dy))
                };
                let tail = y >= 10 && x == y - 9 && x <= 8;
                top || bottom || tail
            }

            Glyph::Dollar => {
                // S-curve from three bars and two sides, with a center stroke
                let bars = (y == 4 || y == 10 || y == 16) && (2..=7).contains(&x);
                let left = x == 2 && (4..=10).contains(&y);
                let right = x == 7 && (10..=16).contains(&y);
                let stroke = (x == 4 || x == 5) && (2..=18).contains(&y);
                bars || left || right || stroke
            }

            Glyph::Percent => {
                // Slash with a dot on each side
                let slash = in_body && x == 8 - ((y - 2) / 2);
                let upper = (1..=3).contains(&x) && (3..=5).contains(&y);
                let lower = (6..=8).contains(&x) && (14..=16).contains(&y);
                slash || upper || lower
            }

            Glyph::Bar => (x == 4 || x == 5) && (1..=18).contains(&y),

            Glyph::Exclamation => {
                (x == 4 || x == 5) && ((2..=12).contains(&y) || (15..=16).contains(&y))
            }

            Glyph::Semicolon => {
                let dot = (x == 4 || x == 5) && (6..=7).contains(&y);
                let comma = ((x == 4 || x == 5) && (13..=15).contains(&y)) || (x == 3 && y == 16);
                dot || comma
            }

            Glyph::Colon => {
                (x == 4 || x == 5) && ((6..=7).contains(&y) || (13..=14).contains(&y))
            }

            Glyph::Apostrophe => (x == 4 || x == 5) && (2..=6).contains(&y),

            Glyph::Grave => (2..=5).contains(&y) && x == y + 1,

            Glyph::Dot => (x == 4 || x == 5) && (15..=16).contains(&y),
        }
    }
}
