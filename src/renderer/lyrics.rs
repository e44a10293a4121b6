//! Lyric rendering.
//!
//! Lyrics are placed one character per column of the text art so that
//! they line up under the sine curve above them.

use crate::model::Lyrics;

use super::canvas::{Canvas, FontStyle};
use super::constants::FONT_FAMILY;
use super::font::char_width;
use super::layout::Bounds;
use super::RenderContext;

/// Baseline offset; tall glyphs reach above the nominal font height.
const BASELINE_MUL: f64 = 1.3;

pub(super) fn draw(lyrics: &Lyrics, ctx: &RenderContext, canvas: &mut dyn Canvas, bnd: Bounds) -> Bounds {
    let font_h = ctx.lyric_font_height();
    let font_w = char_width(font_h);
    // half a character left, matching the along-axis text of curves
    let x_start = bnd.left - font_w / 2.0;
    let y = bnd.top + BASELINE_MUL * font_h;

    canvas.set_font(FONT_FAMILY, FontStyle::Regular, ctx.lyric_font_pt);
    let mut buf = [0u8; 4];
    for (i, ch) in lyrics.text.chars().enumerate() {
        canvas.text(x_start + i as f64 * font_w, y, ch.encode_utf8(&mut buf));
    }

    bnd.below(BASELINE_MUL * font_h)
}
