//! Font metrics
//!
//! Metrics are carried on every registered typeface for the layout engine;
//! the liveness bookkeeping itself never looks inside them.

use crate::{FontError, Result};
use std::collections::HashMap;

/// Glyph advance widths and vertical metrics for one typeface variant
///
/// Widths are in font units; use [`FontMetrics::text_width_points`] to
/// convert to points for a given font size.
#[derive(Debug, Clone)]
pub struct FontMetrics {
    units_per_em: u16,
    ascent: i16,
    descent: i16,
    advances: HashMap<char, u16>,
}

impl FontMetrics {
    /// Create metrics with the given vertical extents and an empty
    /// advance table
    ///
    /// Used for typefaces whose widths are resolved by the viewer, or when
    /// the font-program loader supplies widths via [`FontMetrics::set_advance`].
    pub fn new(units_per_em: u16, ascent: i16, descent: i16) -> Self {
        Self {
            units_per_em,
            ascent,
            descent,
            advances: HashMap::new(),
        }
    }

    /// Parse metrics out of a TrueType font program
    ///
    /// Enumerates the unicode cmap subtables to build the advance table.
    pub fn from_ttf(data: &[u8]) -> Result<Self> {
        let face = ttf_parser::Face::parse(data, 0)
            .map_err(|e| FontError::FontParseError(format!("{e:?}")))?;

        let mut advances = HashMap::new();
        if let Some(cmap) = face.tables().cmap {
            for subtable in cmap.subtables {
                if !subtable.is_unicode() {
                    continue;
                }
                subtable.codepoints(|cp| {
                    let Some(c) = char::from_u32(cp) else { return };
                    if advances.contains_key(&c) {
                        return;
                    }
                    if let Some(glyph) = subtable.glyph_index(cp) {
                        if let Some(advance) = face.glyph_hor_advance(glyph) {
                            advances.insert(c, advance);
                        }
                    }
                });
            }
        }

        Ok(Self {
            units_per_em: face.units_per_em(),
            ascent: face.ascender(),
            descent: face.descender(),
            advances,
        })
    }

    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    pub fn ascent(&self) -> i16 {
        self.ascent
    }

    pub fn descent(&self) -> i16 {
        self.descent
    }

    /// Set the advance width for a character (font units)
    pub fn set_advance(&mut self, c: char, advance: u16) {
        self.advances.insert(c, advance);
    }

    /// Advance width for a character, if the font covers it
    pub fn advance(&self, c: char) -> Option<u16> {
        self.advances.get(&c).copied()
    }

    /// Whether the font covers the given character
    pub fn has_glyph(&self, c: char) -> bool {
        self.advances.contains_key(&c)
    }

    /// Total advance of a string in font units
    ///
    /// Characters without a known advance contribute nothing.
    pub fn text_width(&self, text: &str) -> u32 {
        text.chars()
            .filter_map(|c| self.advance(c))
            .map(u32::from)
            .sum()
    }

    /// Total advance of a string in points for the given font size
    pub fn text_width_points(&self, text: &str, font_size: f32) -> f32 {
        let width = self.text_width(text);
        (width as f32 / self.units_per_em as f32) * font_size
    }
}

impl Default for FontMetrics {
    /// Conservative defaults for typefaces without supplied metrics
    fn default() -> Self {
        Self::new(1000, 800, -200)
    }
}
