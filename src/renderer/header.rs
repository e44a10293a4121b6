//! Title block: song title on the left; date, time signature, BPM, capo
//! and a little guitar head carrying the tuning on the right.

use crate::model::Header;

use super::canvas::{Canvas, FontStyle, PaintStyle, Point};
use super::constants::*;
use super::font::char_width;
use super::layout::Bounds;

/// Distance of the info block from the right edge.
const INFO_RIGHT_OFFSET: f64 = 2.3;
const INFO_FONT_PT: f64 = 14.0;
const TUNING_FONT_PT: f64 = 9.0;
const TITLE_MAX_PT: f64 = 40.0;
/// Title glyphs reach a little above the nominal font height.
const TITLE_HEIGHT_MUL: f64 = 1.1;

#[derive(Debug, Clone, Copy)]
struct InfoFont {
    h: f64,
    w: f64,
}

impl InfoFont {
    fn new(pt: f64) -> Self {
        let h = pt / 100.0;
        Self { h, w: char_width(h) }
    }
}

fn draw_capo(canvas: &mut dyn Canvas, h: &Header, x: f64, y: f64, f: InfoFont) {
    canvas.text(x, y + 2.5 * f.h, &format!("       {}", h.capo));

    // a capo clamp drawn as a few strokes
    let x1 = x + 6.0 * f.w;
    let x15 = x + 6.25 * f.w;
    let x2 = x + 6.5 * f.w;
    let x3 = x + 6.75 * f.w;
    let x4 = x + 8.0 * f.w;
    let x5 = x + 7.5 * f.w;
    let y1 = y + 0.40 * f.h;
    let y2 = y + 1.35 * f.h;
    let y3 = y + 2.20 * f.h;
    let y4 = y + 2.50 * f.h;

    canvas.set_line_width(THICKER_LW);
    canvas.line(x1, y2, x15, y3);
    canvas.line(x1, y2, x5, y1);
    canvas.set_line_width(THICKER_LW * 1.5);
    canvas.line(x1, y2, x4, y2);
    canvas.line(x3, y2, x2, y4);
}

/// Guitar head with six strings and three keys per side; returns its
/// bottom edge including the keys.
fn draw_guitar_head(canvas: &mut dyn Canvas, h: &Header, x: f64, y: f64, f: InfoFont) -> f64 {
    let x_strings = x + 9.5 * f.w;
    let x_neck = x_strings + f.w;
    let x_head = x_neck + f.w;
    let x_dimple = x_head + 3.7 * f.w;
    let x_head_end = x_head + 4.0 * f.w;

    let y_head_top = y + 0.5 * f.h;
    let y_neck_top = y + 1.0 * f.h;
    let y_neck_bot = y + 2.0 * f.h;
    let y_head_bot = y + 2.5 * f.h;
    let y_dimple = (y_head_top + y_head_bot) / 2.0;

    for i in 0..6 {
        let t = i as f64 / 5.0;
        canvas.set_line_width((1.0 - t) * 0.020 + t * 0.005);
        let ys = y_neck_top + t * (y_neck_bot - y_neck_top);
        canvas.line(x_strings, ys, x_neck, ys);
    }

    canvas.set_line_width(THIN_LW);
    canvas.line(x_neck, y_neck_top, x_neck, y_neck_bot);
    canvas.line(x_neck, y_neck_top, x_head, y_head_top);
    canvas.line(x_neck, y_neck_bot, x_head, y_head_bot);
    canvas.line(x_head, y_head_top, x_head_end, y_head_top);
    canvas.line(x_head, y_head_bot, x_head_end, y_head_bot);
    canvas.line(x_head_end, y_head_top, x_dimple, y_dimple);
    canvas.line(x_dimple, y_dimple, x_head_end, y_head_bot);

    let key_w = f.w / 2.0;
    let key_h = f.h / 2.0;
    let keys = [x_head + 0.5 * f.w, (x_head + x_dimple) / 2.0, x_dimple - 0.5 * f.w];
    let tf = InfoFont::new(TUNING_FONT_PT);
    canvas.set_font(FONT_FAMILY, FontStyle::Regular, TUNING_FONT_PT);
    for (i, kx) in keys.iter().enumerate() {
        let up = [
            Point::new(kx - key_w / 2.0, y_head_top),
            Point::new(*kx, y_head_top - key_h),
            Point::new(kx + key_w / 2.0, y_head_top),
        ];
        let down = [
            Point::new(kx - key_w / 2.0, y_head_bot),
            Point::new(*kx, y_head_bot + key_h),
            Point::new(kx + key_w / 2.0, y_head_bot),
        ];
        canvas.polygon(&up, PaintStyle::Stroke);
        canvas.polygon(&down, PaintStyle::Stroke);
        canvas.text(kx - 1.5 * tf.w, y_head_top + 1.25 * tf.h, &h.tuning[i]);
        canvas.text(kx - 1.5 * tf.w, y_head_bot - 0.45 * tf.h, &h.tuning[i + 3]);
    }

    y_head_bot + key_h
}

/// Largest title size (in points) whose lines fit `width` by `height`.
fn fit_title(lines: &[&str], width: f64, height: f64) -> f64 {
    let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as f64;
    let mut pt = TITLE_MAX_PT;
    while pt > 1.0 {
        let th = TITLE_HEIGHT_MUL * pt / 100.0;
        let tw = char_width(th);
        if tw * longest <= width && th * lines.len() as f64 <= height {
            break;
        }
        pt -= 1.0;
    }
    pt
}

/// Draw the title block at the top of `bnd`; returns the area below it.
pub(super) fn draw(h: &Header, hide_title: bool, canvas: &mut dyn Canvas, bnd: Bounds) -> Bounds {
    let f = InfoFont::new(INFO_FONT_PT);
    let x = bnd.right - INFO_RIGHT_OFFSET;
    let y = bnd.top + PADDING;

    canvas.set_font(FONT_FAMILY, FontStyle::Regular, INFO_FONT_PT);
    canvas.text(x, y - 0.5 * f.h, &format!("DATE:{}", h.date));

    canvas.text(x, y + 1.3 * f.h, &h.time_sig_top);
    canvas.text(x, y + 2.5 * f.h, &h.time_sig_bottom);
    canvas.set_line_width(THIN_LW);
    canvas.line(x, y + 1.5 * f.h, x + f.w, y + 1.5 * f.h);

    canvas.text(x, y + 1.3 * f.h, &format!("  {}", h.bpm));
    canvas.text(x, y + 2.5 * f.h, "  BPM");

    draw_capo(canvas, h, x, y, f);
    let y_head_bottom = draw_guitar_head(canvas, h, x, y, f);

    if !hide_title {
        let mut lines = vec![h.title.as_str()];
        if !h.title_line2.is_empty() {
            lines.push(h.title_line2.as_str());
        }
        let width = x - bnd.left - PADDING / 2.0;
        let height = y_head_bottom - (bnd.top + PADDING / 2.0);
        let pt = fit_title(&lines, width, height);
        let th = TITLE_HEIGHT_MUL * pt / 100.0;
        let excess = (height - th * lines.len() as f64).max(0.0);

        canvas.set_font(FONT_FAMILY, FontStyle::Bold, pt);
        for (i, line) in lines.iter().enumerate() {
            canvas.text(bnd.left, bnd.top + (i + 1) as f64 * th + excess / 2.0, line);
        }
    }

    Bounds {
        top: y_head_bottom + PADDING,
        ..bnd
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{NullCanvas, SvgCanvas};

    fn header(title: &str) -> Header {
        Header {
            title: title.to_string(),
            title_line2: String::new(),
            date: "2021-03-04".to_string(),
            time_sig_top: "4".to_string(),
            time_sig_bottom: "4".to_string(),
            bpm: "92".to_string(),
            capo: "2".to_string(),
            tuning: ["E", "A", "D", "G", "B", "E"].map(String::from),
        }
    }

    #[test]
    fn content_starts_below_the_guitar_head() {
        let bnd = Bounds::page(8.5, 11.0);
        let out = draw(&header("Song"), false, &mut NullCanvas, bnd);
        // padding + head bottom (2.5 fh) + key (0.5 fh) + padding
        assert!((out.top - (0.25 + 0.25 + 3.0 * 0.14 + 0.25)).abs() < 1e-9);
        assert_eq!(out.left, bnd.left);
        assert_eq!(out.right, bnd.right);
    }

    #[test]
    fn long_titles_shrink() {
        assert_eq!(fit_title(&["Hi"], 5.0, 1.0), TITLE_MAX_PT);
        let long = "A".repeat(60);
        assert!(fit_title(&[&long], 5.0, 1.0) < TITLE_MAX_PT);
        assert!(fit_title(&["Hi", "There"], 5.0, 0.6) < fit_title(&["Hi"], 5.0, 0.6));
    }

    #[test]
    fn hidden_title_draws_nothing_for_it() {
        let bnd = Bounds::page(8.5, 11.0);
        let mut shown = SvgCanvas::new(8.5, 11.0);
        let mut hidden = SvgCanvas::new(8.5, 11.0);
        draw(&header("Song"), false, &mut shown, bnd);
        draw(&header("Song"), true, &mut hidden, bnd);
        assert_eq!(shown.element_count(), hidden.element_count() + 1);
    }
}
