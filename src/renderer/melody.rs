//! Melody number rendering: the digit, its modifier mark and any
//! decoration (brackets or a slide line into the next number).

use crate::model::{Decoration, MelodyLine, MelodyNote, Modifier};

use super::canvas::{CapStyle, Canvas, FontStyle, PaintStyle};
use super::constants::*;
use super::font::char_width;
use super::layout::Bounds;
use super::RenderContext;

// ─── Slide geometry ─────────────────────────────────────────────────

/// Where a slide line leaves or meets a digit glyph, as fractions of the
/// character width (x) and vertical padding (y). Indexed by digit.
#[derive(Debug, Clone, Copy)]
struct SlideAnchor {
    x_start: f64,
    y_start: f64,
    x_end: f64,
    y_end: f64,
}

const fn sa(x_start: f64, y_start: f64, x_end: f64, y_end: f64) -> SlideAnchor {
    SlideAnchor { x_start, y_start, x_end, y_end }
}

const SLIDE_UP: [SlideAnchor; 10] = [
    sa(0.55, 0.10, 0.45, 0.60),
    sa(0.75, 0.14, 0.30, 0.75),
    sa(0.75, 0.14, 0.30, 0.80),
    sa(0.65, 0.14, 0.30, 0.75),
    sa(0.75, 0.14, 0.60, 0.53),
    sa(0.65, 0.14, 0.30, 0.60),
    sa(0.65, 0.14, 0.50, 0.65),
    sa(0.50, 0.10, 0.30, 0.65),
    sa(0.65, 0.14, 0.30, 0.65),
    sa(0.55, 0.25, 0.30, 0.65),
];

const SLIDE_DOWN: [SlideAnchor; 10] = [
    sa(0.55, 0.60, 0.45, 0.10),
    sa(0.55, 0.65, 0.23, 0.25),
    sa(0.65, 0.64, 0.20, 0.25),
    sa(0.65, 0.64, 0.30, 0.20),
    sa(0.65, 0.55, 0.45, 0.20),
    sa(0.70, 0.67, 0.30, 0.10),
    sa(0.80, 0.64, 0.40, 0.15),
    sa(0.75, 0.60, 0.45, 0.10),
    sa(0.65, 0.64, 0.40, 0.10),
    sa(0.50, 0.53, 0.20, 0.15),
];

fn digit_index(c: char) -> Option<usize> {
    c.to_digit(10).map(|d| d as usize)
}

// ─── Metrics ────────────────────────────────────────────────────────

/// Sizes derived from the melody font height.
#[derive(Debug, Clone, Copy)]
pub(super) struct MelodyMetrics {
    pub(super) font_pt: f64,
    pub(super) font_h: f64,
    pub(super) font_w: f64,
    pub(super) v_pad: f64,
}

impl MelodyMetrics {
    pub(super) fn from_context(ctx: &RenderContext) -> Self {
        let font_h = ctx.lyric_font_height();
        Self {
            font_pt: ctx.lyric_font_pt,
            font_h,
            font_w: char_width(font_h),
            v_pad: font_h * 0.3,
        }
    }
}

/// Modifier placement: a melody row has room around each digit, an
/// embedded note on a curve's axis is drawn tight against its digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Spacing {
    Row,
    Inline,
}

fn draw_modifier(canvas: &mut dyn Canvas, note: &MelodyNote, x: f64, y: f64, m: &MelodyMetrics, spacing: Spacing) {
    let p = m.v_pad;
    let (above, h, w) = (note.modifier_above, m.font_h, m.font_w);
    match note.modifier {
        Modifier::Staccato => {
            let (y_mod, r) = match (spacing, above) {
                (Spacing::Row, false) => (y + p * 1.5, p / 1.5),
                (Spacing::Row, true) => (y - h - p / 1.5, p / 1.5),
                (Spacing::Inline, false) => (y - p * 0.25, p / 2.0),
                (Spacing::Inline, true) => (y - h + 0.65 * p, p / 2.0),
            };
            canvas.circle(x + w / 2.0, y_mod, r, PaintStyle::Fill);
        }
        Modifier::Sustain => {
            let y_mod = match (spacing, above) {
                (Spacing::Row, false) => y + p,
                (Spacing::Row, true) => y - h - p,
                (Spacing::Inline, false) => y - 0.6 * p,
                (Spacing::Inline, true) => y - h + 1.2 * p,
            };
            canvas.set_line_width(THINISH_LW);
            canvas.line(x, y_mod, x + w, y_mod);
        }
        Modifier::Vibrato => {
            let (y_mod, y_mid) = match (spacing, above) {
                (Spacing::Row, false) => (y + p / 2.0, y + p / 2.0 + p * 2.0),
                (Spacing::Row, true) => (y - h - p / 2.0, y - h - p / 2.0 - p * 2.0),
                (Spacing::Inline, false) => (y + 0.1 * p, y + 0.1 * p - p * 2.0),
                (Spacing::Inline, true) => (y - h + 0.36 * p, y - h + 0.36 * p + p * 2.0),
            };
            canvas.set_line_width(THINISH_LW);
            canvas.curve(x, y_mod, x + w / 2.0, y_mid, x + w, y_mod, PaintStyle::Stroke);
        }
    }
}

/// Slide line from `digit` at `x` to `next` at `x_next`.
#[allow(clippy::too_many_arguments)]
fn draw_slide(canvas: &mut dyn Canvas, up: bool, digit: char, x: f64, next: char, x_next: f64, y: f64, m: &MelodyMetrics) {
    let (Some(from), Some(to)) = (digit_index(digit), digit_index(next)) else {
        return;
    };
    let (p, h, w) = (m.v_pad, m.font_h, m.font_w);
    let (start, end) = if up {
        let (a, b) = (SLIDE_UP[from], SLIDE_UP[to]);
        ((x + w * a.x_start, y - p * a.y_start), (x_next + w * b.x_end, y - h + p * b.y_end))
    } else {
        let (a, b) = (SLIDE_DOWN[from], SLIDE_DOWN[to]);
        ((x + w * a.x_start, y - h + p * a.y_start), (x_next + w * b.x_end, y - p * b.y_end))
    };
    canvas.set_line_cap_style(CapStyle::Round);
    canvas.set_line_width(FINE_LW);
    canvas.line(start.0, start.1, end.0, end.1);
    canvas.set_line_cap_style(CapStyle::Butt);
}

/// Draw one note with its baseline at `(x, y)`.
///
/// `next` is the following digit and its x position, used by slides.
pub(super) fn draw_note(
    canvas: &mut dyn Canvas,
    note: &MelodyNote,
    x: f64,
    y: f64,
    m: &MelodyMetrics,
    spacing: Spacing,
    next: Option<(char, f64)>,
) {
    canvas.set_font(FONT_FAMILY, FontStyle::Regular, m.font_pt);
    let mut buf = [0u8; 4];
    canvas.text(x, y, note.digit.encode_utf8(&mut buf));

    draw_modifier(canvas, note, x, y, m, spacing);

    match note.decoration {
        Some(Decoration::Brackets) => {
            let y_brac = y - m.v_pad / 2.0;
            canvas.text(x - m.font_w * 0.5, y_brac, "(");
            canvas.text(x + m.font_w * 0.5, y_brac, ")");
        }
        Some(d @ (Decoration::SlideUp | Decoration::SlideDown)) => {
            if let Some((next_digit, x_next)) = next {
                draw_slide(canvas, d == Decoration::SlideUp, note.digit, x, next_digit, x_next, y, m);
            }
        }
        None => {}
    }
}

/// Draw a melody row; digits sit in the same character grid as lyrics.
pub(super) fn draw_line(line: &MelodyLine, ctx: &RenderContext, canvas: &mut dyn Canvas, bnd: Bounds) -> Bounds {
    let m = MelodyMetrics::from_context(ctx);
    let x_start = bnd.left - m.font_w / 2.0;
    let x_at = |col: usize| x_start + col as f64 * m.font_w;
    let y = bnd.top + m.font_h + m.v_pad * 2.0;

    for (col, note) in line.notes.iter().enumerate() {
        let Some(note) = note else { continue };
        let next = line.next_note_after(col).map(|(j, d)| (d, x_at(j)));
        draw_note(canvas, note, x_at(col), y, &m, Spacing::Row, next);
    }

    // number plus the deepest reach of a vibrato curve below it
    let used = m.font_h + m.v_pad * 3.0 + m.v_pad / 2.0 + m.v_pad * 3.0;
    bnd.below(used)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{NullCanvas, SvgCanvas};

    fn note(digit: char, modifier: Modifier, decoration: Option<Decoration>) -> Option<MelodyNote> {
        Some(MelodyNote {
            digit,
            modifier,
            modifier_above: false,
            decoration,
        })
    }

    fn ctx() -> RenderContext {
        RenderContext {
            lyric_font_pt: 20.0,
            longest_humps: 4.0,
            spacing_ratio: 1.5,
            amplitude_ratio: 0.8,
            thicknesses: STRING_THICKNESSES,
        }
    }

    #[test]
    fn slide_needs_a_following_digit() {
        let line = MelodyLine {
            notes: vec![note('3', Modifier::Staccato, Some(Decoration::SlideUp)), None, None],
        };
        let mut svg = SvgCanvas::new(4.0, 4.0);
        draw_line(&line, &ctx(), &mut svg, Bounds::new(0.0, 0.5, 4.0, 4.0));
        // digit and dot only
        assert_eq!(svg.element_count(), 2);
    }

    #[test]
    fn slide_connects_to_next_digit() {
        let line = MelodyLine {
            notes: vec![note('3', Modifier::Sustain, Some(Decoration::SlideDown)), None, note('5', Modifier::Vibrato, None)],
        };
        let mut svg = SvgCanvas::new(4.0, 4.0);
        draw_line(&line, &ctx(), &mut svg, Bounds::new(0.0, 0.5, 4.0, 4.0));
        // two digits, a bar, a curve and the slide
        assert_eq!(svg.element_count(), 5);
    }

    #[test]
    fn used_height_is_independent_of_content() {
        let a = MelodyLine { notes: vec![note('1', Modifier::Staccato, None)] };
        let b = MelodyLine { notes: vec![note('1', Modifier::Vibrato, Some(Decoration::Brackets))] };
        let bnd = Bounds::new(1.0, 0.0, 5.0, 3.0);
        let ra = draw_line(&a, &ctx(), &mut NullCanvas, bnd);
        let rb = draw_line(&b, &ctx(), &mut NullCanvas, bnd);
        assert_eq!(ra, rb);
        assert!(ra.top > 1.0);
    }
}
