//! SVG canvas: accumulates SVG elements and produces the final string.
//!
//! Draw calls arrive in inches and are written out in SVG user units
//! (72 per inch), so font sizes in points carry over unchanged.

use super::canvas::{CapStyle, Canvas, FontStyle, PaintStyle, Point};
use super::constants::*;

// ═══════════════════════════════════════════════════════════════════════
// SvgCanvas
// ═══════════════════════════════════════════════════════════════════════

pub struct SvgCanvas {
    elements: Vec<String>,
    width: f64,
    height: f64,
    line_width: f64,
    cap: CapStyle,
    font_family: String,
    font_style: FontStyle,
    font_size: f64,
    alpha: f64,
}

fn u(inches: f64) -> f64 {
    inches * SVG_UNITS_PER_INCH
}

fn escape(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl SvgCanvas {
    /// A blank page of `width` x `height` inches.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
            line_width: THIN_LW,
            cap: CapStyle::default(),
            font_family: FONT_FAMILY.to_string(),
            font_style: FontStyle::default(),
            font_size: 12.0,
            alpha: 1.0,
        }
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn build(self) -> String {
        let (w, h) = (u(self.width), u(self.height));
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w:.2} {h:.2}" width="{w:.2}" height="{h:.2}" style="font-family: 'Courier New', Courier, monospace;">"#,
        );
        svg.push('\n');
        svg.push_str(&format!(
            r#"  <rect x="0" y="0" width="{w:.2}" height="{h:.2}" fill="white"/>"#
        ));
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    fn opacity_attr(&self) -> String {
        if self.alpha < 1.0 {
            format!(r#" opacity="{:.3}""#, self.alpha.max(0.0))
        } else {
            String::new()
        }
    }

    fn cap_attr(&self) -> &'static str {
        match self.cap {
            CapStyle::Butt => "butt",
            CapStyle::Round => "round",
            CapStyle::Square => "square",
        }
    }

    fn paint_attrs(&self, style: PaintStyle) -> String {
        let sw = u(self.line_width);
        match style {
            PaintStyle::Stroke => format!(
                r#"fill="none" stroke="{INK_COLOR}" stroke-width="{sw:.3}" stroke-linecap="{}""#,
                self.cap_attr()
            ),
            PaintStyle::Fill => format!(r#"fill="{INK_COLOR}" stroke="none""#),
            PaintStyle::FillStroke => format!(
                r#"fill="{INK_COLOR}" stroke="{INK_COLOR}" stroke-width="{sw:.3}" stroke-linejoin="miter""#
            ),
        }
    }
}

impl Canvas for SvgCanvas {
    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn set_line_cap_style(&mut self, cap: CapStyle) {
        self.cap = cap;
    }

    fn polygon(&mut self, points: &[Point], style: PaintStyle) {
        if points.is_empty() {
            return;
        }
        let pts = points
            .iter()
            .map(|p| format!("{:.2},{:.2}", u(p.x), u(p.y)))
            .collect::<Vec<_>>()
            .join(" ");
        self.elements.push(format!(
            r#"<polygon points="{pts}" {}{}/>"#,
            self.paint_attrs(style),
            self.opacity_attr()
        ));
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.elements.push(format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{INK_COLOR}" stroke-width="{:.3}" stroke-linecap="{}"{}/>"#,
            u(x1),
            u(y1),
            u(x2),
            u(y2),
            u(self.line_width),
            self.cap_attr(),
            self.opacity_attr()
        ));
    }

    fn set_font(&mut self, family: &str, style: FontStyle, size_pt: f64) {
        self.font_family = family.to_string();
        self.font_style = style;
        self.font_size = size_pt;
    }

    fn text(&mut self, x: f64, y: f64, content: &str) {
        if content.trim().is_empty() {
            return;
        }
        let weight = match self.font_style {
            FontStyle::Regular => "normal",
            FontStyle::Bold => "bold",
        };
        self.elements.push(format!(
            r#"<text x="{:.2}" y="{:.2}" font-family="{}, monospace" font-size="{:.2}" font-weight="{weight}" fill="{INK_COLOR}" xml:space="preserve"{}>{}</text>"#,
            u(x),
            u(y),
            escape(&self.font_family),
            self.font_size,
            self.opacity_attr(),
            escape(content)
        ));
    }

    fn circle(&mut self, x: f64, y: f64, r: f64, style: PaintStyle) {
        self.elements.push(format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.3}" {}{}/>"#,
            u(x),
            u(y),
            u(r),
            self.paint_attrs(style),
            self.opacity_attr()
        ));
    }

    fn curve(&mut self, x0: f64, y0: f64, cx: f64, cy: f64, x1: f64, y1: f64, style: PaintStyle) {
        self.elements.push(format!(
            r#"<path d="M{:.2},{:.2} Q{:.2},{:.2} {:.2},{:.2}" {}{}/>"#,
            u(x0),
            u(y0),
            u(cx),
            u(cy),
            u(x1),
            u(y1),
            self.paint_attrs(style),
            self.opacity_attr()
        ));
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_inches_to_user_units() {
        let mut svg = SvgCanvas::new(8.5, 11.0);
        svg.line(0.0, 0.0, 1.0, 0.5);
        let out = svg.build();
        assert!(out.contains(r#"viewBox="0 0 612.00 792.00""#));
        assert!(out.contains(r#"x2="72.00" y2="36.00""#));
    }

    #[test]
    fn escapes_text_and_skips_blanks() {
        let mut svg = SvgCanvas::new(1.0, 1.0);
        svg.text(0.1, 0.1, "<&>");
        svg.text(0.1, 0.1, "   ");
        assert_eq!(svg.element_count(), 1);
        assert!(svg.build().contains("&lt;&amp;&gt;"));
    }

    #[test]
    fn alpha_becomes_opacity() {
        let mut svg = SvgCanvas::new(1.0, 1.0);
        svg.set_alpha(0.05);
        svg.circle(0.5, 0.5, 0.1, PaintStyle::Fill);
        svg.set_alpha(1.0);
        svg.circle(0.5, 0.5, 0.1, PaintStyle::Fill);
        let out = svg.build();
        assert_eq!(out.matches("opacity=").count(), 1);
    }
}
