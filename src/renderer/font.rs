//! Monospace font metrics.
//!
//! Everything is drawn in a courier-style font; these ratios were tuned
//! by eye against printed output rather than taken from font tables.

const PT_PER_INCH_HEIGHT: f64 = 100.0;
const WIDTH_TO_HEIGHT: f64 = 0.82;

/// Font size whose glyphs are `height` inches tall.
pub(super) fn font_pt(height: f64) -> f64 {
    height * PT_PER_INCH_HEIGHT
}

/// Glyph height in inches for a font size.
pub(super) fn font_height(pt: f64) -> f64 {
    pt / PT_PER_INCH_HEIGHT
}

/// Advance width of one character at the given glyph height.
pub(super) fn char_width(height: f64) -> f64 {
    WIDTH_TO_HEIGHT * height
}

pub(super) fn height_from_char_width(width: f64) -> f64 {
    width / WIDTH_TO_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_invert() {
        let h = font_height(14.0);
        assert!((font_pt(h) - 14.0).abs() < 1e-9);
        assert!((height_from_char_width(char_width(h)) - h).abs() < 1e-12);
    }
}
