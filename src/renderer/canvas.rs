//! The drawing surface every element renderer talks to.
//!
//! Coordinates are inches from the top-left corner of the page, y growing
//! downwards. Text is positioned by its baseline.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// How a closed shape is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintStyle {
    Stroke,
    Fill,
    FillStroke,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapStyle {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
}

impl FontStyle {
    pub fn bold_if(bold: bool) -> Self {
        if bold {
            FontStyle::Bold
        } else {
            FontStyle::Regular
        }
    }
}

/// A stateful 2-D drawing surface.
///
/// Line width, cap style, font and alpha stay in effect until changed.
pub trait Canvas {
    fn set_line_width(&mut self, width: f64);
    fn set_line_cap_style(&mut self, cap: CapStyle);
    fn polygon(&mut self, points: &[Point], style: PaintStyle);
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);
    fn set_font(&mut self, family: &str, style: FontStyle, size_pt: f64);
    fn text(&mut self, x: f64, y: f64, text: &str);
    fn circle(&mut self, x: f64, y: f64, r: f64, style: PaintStyle);
    /// Quadratic curve from `(x0, y0)` to `(x1, y1)` pulled towards `(cx, cy)`.
    #[allow(clippy::too_many_arguments)]
    fn curve(&mut self, x0: f64, y0: f64, cx: f64, cy: f64, x1: f64, y1: f64, style: PaintStyle);
    fn set_alpha(&mut self, alpha: f64);
}

/// Discards every draw call. Layout renders against it to measure
/// an element before committing it to a column.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCanvas;

impl Canvas for NullCanvas {
    fn set_line_width(&mut self, _width: f64) {}
    fn set_line_cap_style(&mut self, _cap: CapStyle) {}
    fn polygon(&mut self, _points: &[Point], _style: PaintStyle) {}
    fn line(&mut self, _x1: f64, _y1: f64, _x2: f64, _y2: f64) {}
    fn set_font(&mut self, _family: &str, _style: FontStyle, _size_pt: f64) {}
    fn text(&mut self, _x: f64, _y: f64, _text: &str) {}
    fn circle(&mut self, _x: f64, _y: f64, _r: f64, _style: PaintStyle) {}
    fn curve(&mut self, _x0: f64, _y0: f64, _cx: f64, _cy: f64, _x1: f64, _y1: f64, _style: PaintStyle) {}
    fn set_alpha(&mut self, _alpha: f64) {}
}
