//! Tile display data for rendering collaborators.
//!
//! The engine knows nothing about rendering; this module is the
//! enumerated value → visual mapping a UI needs, shipped as plain data.
//! The classic palette covers 0 and every power of two up to 2048; any
//! value beyond the table falls back to a default style.

use rustc_hash::FxHashMap;

/// The visual for one tile value: a text label and a named background
/// color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileStyle {
    /// Text to draw on the tile. Empty for an empty cell.
    pub label: String,
    /// Background color name (CSS/X11 style).
    pub background: &'static str,
}

/// Lookup table from tile value to background color.
#[derive(Clone, Debug)]
pub struct TileTheme {
    backgrounds: FxHashMap<u32, &'static str>,
    fallback: &'static str,
}

impl Default for TileTheme {
    /// The classic palette: light gray empties up through a gold 2048,
    /// black for anything larger.
    fn default() -> Self {
        let backgrounds = [
            (0, "lightgray"),
            (2, "white"),
            (4, "lightyellow"),
            (8, "lightgoldenrod"),
            (16, "orange"),
            (32, "orangered"),
            (64, "red"),
            (128, "lightgreen"),
            (256, "green"),
            (512, "blue"),
            (1024, "purple"),
            (2048, "gold"),
        ]
        .into_iter()
        .collect();

        Self {
            backgrounds,
            fallback: "black",
        }
    }
}

impl TileTheme {
    /// Create the classic theme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The style for a tile value. Values outside the table get the
    /// fallback background.
    #[must_use]
    pub fn style_for(&self, value: u32) -> TileStyle {
        let label = if value == 0 {
            String::new()
        } else {
            value.to_string()
        };
        let background = self
            .backgrounds
            .get(&value)
            .copied()
            .unwrap_or(self.fallback);
        TileStyle { label, background }
    }
}
