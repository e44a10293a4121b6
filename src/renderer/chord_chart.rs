//! Chord chart rendering: a "cactus" of six string lines with prickles
//! marking chord columns, fret positions on the strings and chord names
//! underneath.
//!
//! The stub at the left of each string shows its gauge, with the melody
//! modifier marks drawn beside the stubs as a reminder.

use log::warn;

use crate::model::{ChordChart, GUITAR_STRINGS};
use crate::parser::chord_scripts;

use super::canvas::{Canvas, FontStyle, PaintStyle};
use super::constants::*;
use super::font::{char_width, font_height};
use super::layout::Bounds;
use super::RenderContext;

const STRING_SPACING: f64 = PADDING / 2.0;
const GAUGE_STUB: f64 = PADDING / 2.0;
const CACTUS_ZONE: f64 = PADDING;
const PRICKLE_SPACING: f64 = PADDING;

fn draw_gauges(canvas: &mut dyn Canvas, ctx: &RenderContext, bnd: &Bounds) {
    let melody_h = ctx.lyric_font_height();
    let melody_w = char_width(melody_h);
    let v_pad = melody_h * 0.3;

    let x_start = bnd.left;
    let x_end = x_start + GAUGE_STUB;
    let margin = (x_end - x_start - melody_w) / 2.0;
    let (mod_start, mod_end) = (x_start + margin, x_start + margin + melody_w);

    for (i, gauge) in ctx.thicknesses.iter().enumerate() {
        let y = bnd.top + CACTUS_ZONE + i as f64 * STRING_SPACING;
        canvas.set_line_width(*gauge);
        canvas.line(x_start, y, x_end, y);

        // upper half of the strings gets its mark above, lower half below
        let above = i < GUITAR_STRINGS / 2;
        let side = if above { -1.0 } else { 1.0 };
        match i {
            2 | 3 => {
                let y_mod = y + side * STRING_SPACING / 3.0;
                canvas.circle(x_start + GAUGE_STUB / 2.0, y_mod, v_pad / 1.5, PaintStyle::Fill);
            }
            1 | 4 => {
                let y_mod = y + side * STRING_SPACING / 3.0;
                canvas.set_line_width(THINISH_LW);
                canvas.line(mod_start, y_mod, mod_end, y_mod);
            }
            _ => {
                let y_mod = y + side * (STRING_SPACING / 4.0 + v_pad / 2.0);
                let y_mid = y_mod + side * v_pad * 2.0;
                canvas.set_line_width(THINISH_LW);
                canvas.curve(mod_start, y_mod, (mod_start + mod_end) / 2.0, y_mid, mod_end, y_mod, PaintStyle::Stroke);
            }
        }
    }
}

pub(super) fn draw(chart: &ChordChart, ctx: &RenderContext, canvas: &mut dyn Canvas, bnd: Bounds) -> Bounds {
    let strings = GUITAR_STRINGS as f64;
    draw_gauges(canvas, ctx, &bnd);

    // separator between gauges and pillar
    let x_pillar = bnd.left + GAUGE_STUB;
    let y_first = bnd.top + CACTUS_ZONE;
    let y_last = y_first + (strings - 1.0) * STRING_SPACING;
    canvas.set_line_width(FINEST_LW);
    canvas.line(x_pillar, y_first, x_pillar, y_last);

    let x_end = bnd.right - PADDING;
    for i in 0..GUITAR_STRINGS {
        let y = y_first + i as f64 * STRING_SPACING;
        canvas.line(x_pillar, y, x_end, y);
    }

    let label_h = font_height(chart.label_font_pt);
    let label_w = char_width(label_h);
    let label_pad = label_h * 0.1;
    let pos_h = font_height(chart.positions_font_pt);
    let pos_w = char_width(pos_h);

    let y_top_prickle = (bnd.top, bnd.top + CACTUS_ZONE / 2.0);
    let y_bottom_start = y_last + CACTUS_ZONE / 2.0;
    let y_bottom_prickle = (y_bottom_start, y_bottom_start + CACTUS_ZONE / 2.0);

    let mut chords = chart.chords.iter();
    let mut drawn = 0usize;
    let mut x = x_pillar + PRICKLE_SPACING / 2.0;
    let mut buf = [0u8; 4];
    while x < x_end {
        canvas.set_line_width(FINEST_LW);
        canvas.line(x, y_top_prickle.0, x, y_top_prickle.1);
        canvas.line(x, y_bottom_prickle.0, x, y_bottom_prickle.1);

        if let Some(chord) = chords.next() {
            let mut name = chord.name.chars();
            let root = name.next().unwrap_or(' ');
            let rest: Vec<char> = name.collect();
            let at = |i: usize| rest.get(i).copied().unwrap_or(' ');
            let scripts = chord_scripts(root, [at(0), at(1), ' ']);

            let x_label = x - label_w / 2.0;
            let y_label = y_bottom_prickle.1 + label_h + label_pad;
            canvas.set_font(FONT_FAMILY, FontStyle::Regular, chart.label_font_pt);
            canvas.text(x_label, y_label, root.encode_utf8(&mut buf));
            canvas.set_font(FONT_FAMILY, FontStyle::Regular, chart.label_font_pt * SUBSUP_SIZE_MUL);
            if let Some(sub) = scripts.subscript {
                canvas.text(x_label + label_w, y_label, sub.encode_utf8(&mut buf));
            }
            if let Some(sup) = scripts.superscript {
                canvas.text(x_label + label_w, y_label - label_h / 2.0, sup.encode_utf8(&mut buf));
            }

            canvas.set_font(FONT_FAMILY, FontStyle::Regular, chart.positions_font_pt);
            for (i, pos) in chord.positions.iter().enumerate() {
                let y_string = y_first + i as f64 * STRING_SPACING;
                if pos == "x" {
                    let ext = pos_w / 2.0;
                    canvas.line(x - ext, y_string - ext, x + ext, y_string + ext);
                    canvas.line(x - ext, y_string + ext, x + ext, y_string - ext);
                } else {
                    canvas.text(x - pos_w / 2.0, y_string + pos_h / 2.0, pos);
                }
            }
            drawn += 1;
        }
        x += PRICKLE_SPACING;
    }
    if drawn < chart.chords.len() {
        warn!(
            "chord chart too wide for its column: {} of {} chords not drawn",
            chart.chords.len() - drawn,
            chart.chords.len()
        );
    }

    let used = CACTUS_ZONE + strings * STRING_SPACING + CACTUS_ZONE + label_h + label_pad;
    bnd.below(used)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Chord;
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

    fn chart(names: &[&str]) -> ChordChart {
        ChordChart {
            chords: names
                .iter()
                .map(|n| Chord {
                    name: n.to_string(),
                    positions: ["x", "3", "2", "0", "1", "0"].map(String::from),
                })
                .collect(),
            label_font_pt: 12.0,
            positions_font_pt: 10.0,
        }
    }

    #[test]
    fn height_is_fixed_by_the_layout() {
        let bnd = Bounds::new(1.0, 0.25, 11.0, 4.25);
        let out = draw(&chart(&["C"]), &ctx(), &mut NullCanvas, bnd);
        let expected = 0.25 + 6.0 * 0.125 + 0.25 + 0.12 + 0.012;
        assert!((out.top - 1.0 - expected).abs() < 1e-9);
    }

    #[test]
    fn more_chords_draw_more() {
        let bnd = Bounds::new(1.0, 0.25, 11.0, 4.25);
        let mut one = SvgCanvas::new(8.5, 11.0);
        let mut two = SvgCanvas::new(8.5, 11.0);
        draw(&chart(&["C"]), &ctx(), &mut one, bnd);
        draw(&chart(&["C", "Am7"]), &ctx(), &mut two, bnd);
        // root, subscript, superscript, five positions and a two-line cross
        assert_eq!(two.element_count() - one.element_count(), 10);
    }
}
