//! Annotated sine rendering.
//!
//! The curve is a cosine starting on a crest, one period per hump, drawn
//! as short line segments. Its amplitude decays linearly to zero over the
//! trailing humps. Chord labels and embedded melody numbers sit on the
//! axis; accent marks (`^`, `v`, `|` or any character) sit on the curve.

use std::f64::consts::PI;

use crate::hump::phase;
use crate::model::{AnnotatedSine, SineAnnotation};

use super::canvas::{CapStyle, Canvas, FontStyle, PaintStyle, Point};
use super::constants::*;
use super::font::{char_width, font_pt};
use super::layout::Bounds;
use super::melody::{draw_note, MelodyMetrics, Spacing};
use super::RenderContext;

/// Vertical extents of a curve row, derived from the lyric font.
#[derive(Debug, Clone, Copy)]
struct Geometry {
    amplitude: f64,
    /// How far a mark reaches beyond the curve.
    overhang: f64,
    /// Extra lift for marks sitting on a crest or trough.
    tip_hover: f64,
}

impl Geometry {
    fn new(ctx: &RenderContext) -> Self {
        let lfh = ctx.lyric_font_height();
        let overhang = lfh / 3.0;
        Self {
            amplitude: ctx.amplitude_ratio * lfh,
            overhang,
            tip_hover: overhang / 2.0,
        }
    }

    fn used_height(&self) -> f64 {
        2.0 * (self.amplitude + self.overhang + self.tip_hover)
    }
}

/// True at a crest or trough of the curve.
fn on_tip(position: f64) -> bool {
    let ph = phase(position);
    ph == 0.0 || ph == 0.5
}

fn on_axis_crossing(position: f64) -> bool {
    let ph = phase(position);
    ph == 0.25 || ph == 0.75
}

pub(super) fn draw(sine: &AnnotatedSine, ctx: &RenderContext, canvas: &mut dyn Canvas, bnd: Bounds) -> Bounds {
    let g = Geometry::new(ctx);
    let used = g.used_height();

    let x_start = bnd.left;
    let (width, trailing_width) = ctx.curve_widths(bnd.right - PADDING - x_start, sine);
    if width <= 0.0 || sine.humps <= 0.0 {
        return bnd.below(used);
    }
    let frequency = 2.0 * PI * sine.humps / width;
    let y_axis = bnd.top + used / 2.0;

    draw_curve(canvas, x_start, y_axis, width, trailing_width, frequency, g.amplitude);

    // ─── along the axis ─────────────────────────────────────────────
    let font_h = g.amplitude * AXIS_TEXT_MUL;
    let font_w = char_width(font_h);
    let x_of = |position: f64| x_start + (position / sine.humps) * width - font_w / 2.0;
    let y_text = y_axis + font_h / 2.0;

    for (i, aa) in sine.along_axis.iter().enumerate() {
        draw_axis_annotation(canvas, aa, x_of(aa.position), y_text, font_h, ctx);

        let Some(next) = sine.along_axis.get(i + 1) else { continue };
        if !aa.slide || next.position <= aa.position {
            continue;
        }
        // fading echoes of the label, gliding towards the next one
        let steps = (next.position - aa.position) / SLIDE_STEP_HUMPS;
        let alpha_step = -SLIDE_START_ALPHA / steps;
        let mut k = 0usize;
        loop {
            let p = aa.position + k as f64 * SLIDE_STEP_HUMPS;
            if p >= next.position {
                break;
            }
            canvas.set_alpha((SLIDE_START_ALPHA + k as f64 * alpha_step).max(0.0));
            draw_axis_annotation(canvas, aa, x_of(p), y_text, font_h, ctx);
            k += 1;
        }
        canvas.set_alpha(1.0);
    }

    // ─── along the curve ────────────────────────────────────────────
    canvas.set_line_cap_style(CapStyle::Square);
    for mark in &sine.along_sine {
        if mark.ch == ' ' {
            continue;
        }
        let eq_x = (mark.position / sine.humps) * width;
        let mut eq_y = g.amplitude * (frequency * eq_x).cos();
        if on_axis_crossing(mark.position) && collides_with_axis_text(mark, &sine.along_axis) {
            eq_y = g.amplitude;
        }
        let tip = Point::new(x_start + eq_x, y_axis - eq_y);
        draw_curve_mark(canvas, mark, tip, y_axis, &g);
    }
    canvas.set_line_cap_style(CapStyle::Butt);

    bnd.below(used)
}

fn draw_curve(
    canvas: &mut dyn Canvas,
    x_start: f64,
    y_axis: f64,
    width: f64,
    trailing_width: f64,
    frequency: f64,
    amplitude: f64,
) {
    canvas.set_line_width(FINEST_LW);
    let max_width = width + trailing_width;
    let mut last: Option<Point> = None;
    let mut i = 0usize;
    loop {
        let x = i as f64 * CURVE_RESOLUTION;
        if x > max_width {
            break;
        }
        let amp = if x <= width {
            amplitude
        } else {
            amplitude * (max_width - x) / trailing_width
        };
        let p = Point::new(x_start + x, y_axis - amp * (frequency * x).cos());
        if let Some(prev) = last {
            canvas.line(prev.x, prev.y, p.x, p.y);
        }
        last = Some(p);
        i += 1;
    }
}

/// A mark on an axis crossing would overlap a label there, or the
/// sub/superscript of a label one column to its left.
fn collides_with_axis_text(mark: &SineAnnotation, along_axis: &[SineAnnotation]) -> bool {
    along_axis.iter().any(|aa| {
        mark.position == aa.position || (mark.position == aa.position + 0.25 && aa.has_script())
    })
}

fn draw_axis_annotation(
    canvas: &mut dyn Canvas,
    aa: &SineAnnotation,
    x: f64,
    y: f64,
    font_h: f64,
    ctx: &RenderContext,
) {
    let font_w = char_width(font_h);
    let style = FontStyle::bold_if(aa.bolded);

    if let Some(note) = &aa.melody {
        let m = MelodyMetrics::from_context(ctx);
        // nudge so the digit reads as centred on the axis
        draw_note(canvas, note, x + font_w * 0.16, y - font_h * 0.15, &m, Spacing::Inline, None);
        return;
    }

    let mut buf = [0u8; 4];
    canvas.set_font(FONT_FAMILY, style, font_pt(font_h));
    canvas.text(x, y, aa.ch.encode_utf8(&mut buf));

    if aa.has_script() {
        let x_script = x + font_w - font_w * 0.1;
        let script_h = font_h * SUBSUP_SIZE_MUL;
        canvas.set_font(FONT_FAMILY, style, font_pt(script_h));
        if let Some(sub) = aa.subscript {
            canvas.text(x_script, y - font_h / 2.0 + script_h, sub.encode_utf8(&mut buf));
        }
        if let Some(sup) = aa.superscript {
            canvas.text(x_script, y - font_h / 2.0, sup.encode_utf8(&mut buf));
        }
    }
}

fn draw_curve_mark(canvas: &mut dyn Canvas, mark: &SineAnnotation, tip: Point, y_axis: f64, g: &Geometry) {
    canvas.set_line_width(if mark.bolded { THICKER_LW } else { THINISH_LW });
    let c = g.overhang;

    match mark.ch {
        'v' | '^' => {
            // chevron with 45 degree arms; `v` opens upwards, `^` downwards
            let dir = if mark.ch == 'v' { -1.0 } else { 1.0 };
            let mut tip = tip;
            if on_tip(mark.position) {
                tip.y += dir * g.tip_hover;
            }
            let left = Point::new(tip.x - c, tip.y + dir * c);
            let right = Point::new(tip.x + c, tip.y + dir * c);
            if mark.bolded {
                canvas.polygon(&[left, right, tip], PaintStyle::FillStroke);
            } else {
                canvas.line(left.x, left.y, tip.x, tip.y);
                canvas.line(tip.x, tip.y, right.x, right.y);
            }
        }
        '|' => {
            canvas.line(tip.x, y_axis - g.amplitude - c, tip.x, y_axis + g.amplitude + c);
        }
        other => {
            let h = 2.0 * c;
            let w = char_width(h);
            // centred on the curve, pushed outwards on a crest or trough
            let mut shift = h / 2.0;
            let ph = phase(mark.position);
            if ph == 0.5 {
                shift += h / 2.0;
            } else if ph == 0.0 {
                shift -= h / 2.0;
            }
            let mut buf = [0u8; 4];
            canvas.set_font(FONT_FAMILY, FontStyle::bold_if(mark.bolded), font_pt(h));
            canvas.text(tip.x - w / 2.0, tip.y + shift, other.encode_utf8(&mut buf));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{NullCanvas, SvgCanvas};

    fn ctx() -> RenderContext {
        RenderContext {
            lyric_font_pt: 20.0,
            longest_humps: 4.0,
            spacing_ratio: 1.5,
            amplitude_ratio: 0.8,
            thicknesses: STRING_THICKNESSES,
        }
    }

    fn sine(humps: f64, trailing: f64) -> AnnotatedSine {
        AnnotatedSine {
            humps,
            trailing_humps: trailing,
            along_axis: vec![],
            along_sine: vec![],
            anchor: None,
        }
    }

    #[test]
    fn used_height_covers_both_sides_of_the_curve() {
        let bnd = Bounds::new(1.0, 0.25, 11.0, 4.25);
        let out = draw(&sine(4.0, 0.0), &ctx(), &mut NullCanvas, bnd);
        // amplitude 0.16, overhang 0.2/3, hover 0.1/3
        let expected = 2.0 * (0.16 + 0.2 / 3.0 + 0.1 / 3.0);
        assert!((out.top - 1.0 - expected).abs() < 1e-9);
        assert_eq!(out.left, bnd.left);
    }

    #[test]
    fn shorter_curves_use_fewer_segments() {
        let bnd = Bounds::new(1.0, 0.25, 11.0, 4.25);
        let mut long = SvgCanvas::new(8.5, 11.0);
        let mut short = SvgCanvas::new(8.5, 11.0);
        draw(&sine(4.0, 0.0), &ctx(), &mut long, bnd);
        draw(&sine(2.0, 0.0), &ctx(), &mut short, bnd);
        assert!(short.element_count() < long.element_count());
        assert!(short.element_count() > 100);
    }

    #[test]
    fn marks_move_off_axis_labels() {
        let label = SineAnnotation::plain(1.25, true, 'G');
        let mark = SineAnnotation::plain(1.25, false, '^');
        assert!(collides_with_axis_text(&mark, &[label]));
        let mut scripted = SineAnnotation::plain(1.0, true, 'A');
        scripted.subscript = Some('m');
        assert!(collides_with_axis_text(&mark, &[scripted]));
        let elsewhere = SineAnnotation::plain(2.0, true, 'D');
        assert!(!collides_with_axis_text(&mark, &[elsewhere]));
    }

    #[test]
    fn slides_draw_fading_copies() {
        let bnd = Bounds::new(1.0, 0.25, 11.0, 4.25);
        let mut plain = sine(4.0, 0.0);
        plain.along_axis = vec![SineAnnotation::plain(0.0, true, 'F'), SineAnnotation::plain(1.0, true, 'C')];
        let mut slid = plain.clone();
        slid.along_axis[0].slide = true;

        let mut a = SvgCanvas::new(8.5, 11.0);
        let mut b = SvgCanvas::new(8.5, 11.0);
        draw(&plain, &ctx(), &mut a, bnd);
        draw(&slid, &ctx(), &mut b, bnd);
        // one hump at 0.05 hump steps
        assert_eq!(b.element_count() - a.element_count(), 20);
    }
}
