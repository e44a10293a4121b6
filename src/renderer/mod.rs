//! Songsheet renderer: draws a compiled songsheet onto a [`Canvas`].
//!
//! Each element renderer receives the bounds still free in its column and
//! returns the bounds left over after drawing. Sizes that depend on the
//! whole song (lyric font, longest curve) are computed once into a
//! [`RenderContext`] and passed down.

mod canvas;
mod chord_chart;
mod constants;
mod font;
mod header;
mod layout;
mod lyrics;
mod melody;
mod sine;
mod svg_builder;

use log::debug;

use crate::config::RenderOptions;
use crate::error::LayoutError;
use crate::hump::humps_to_slots;
use crate::model::{AnnotatedSine, Element, Songsheet, GUITAR_STRINGS};

pub use canvas::{CapStyle, Canvas, FontStyle, NullCanvas, PaintStyle, Point};
pub use layout::{distribute, layout_elements, split_into_columns, Bounds, Extent, GroupKind, Placement};
pub use svg_builder::SvgCanvas;

use constants::*;
use font::*;

pub(crate) use constants::{DEFAULT_PAGE_HEIGHT, DEFAULT_PAGE_WIDTH};

// ═══════════════════════════════════════════════════════════════════════
// Render context
// ═══════════════════════════════════════════════════════════════════════

/// Per-render settings shared by every element renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderContext {
    pub lyric_font_pt: f64,
    /// Widest curve in the song, in humps; 0.0 when there is none.
    pub longest_humps: f64,
    pub spacing_ratio: f64,
    pub amplitude_ratio: f64,
    /// Chord chart string gauges, top row first.
    pub thicknesses: [f64; GUITAR_STRINGS],
}

impl RenderContext {
    /// Size the lyric font so the longest curve's text art exactly fills
    /// one column.
    pub fn new(options: &RenderOptions, column: &Bounds, longest_humps: Option<f64>) -> Self {
        let mut thicknesses = STRING_THICKNESSES;
        if options.mirror_strings {
            thicknesses.reverse();
        }

        let longest = longest_humps.unwrap_or(0.0);
        let chars = humps_to_slots(longest);
        let lyric_font_pt = if chars > 0 {
            let width = column.right - PADDING - column.left;
            font_pt(height_from_char_width(width / chars as f64))
        } else {
            DEFAULT_LYRIC_FONT_PT
        };
        debug!("lyric font {lyric_font_pt:.2}pt for a {longest} hump curve");

        Self {
            lyric_font_pt,
            longest_humps: longest,
            spacing_ratio: options.spacing_ratio,
            amplitude_ratio: options.amplitude_ratio,
            thicknesses,
        }
    }

    pub fn lyric_font_height(&self) -> f64 {
        font_height(self.lyric_font_pt)
    }

    /// Drawn widths of a curve's active and trailing parts, scaled so the
    /// longest curve in the song spans `full`.
    pub(crate) fn curve_widths(&self, full: f64, sine: &AnnotatedSine) -> (f64, f64) {
        let reference = if self.longest_humps > 0.0 {
            self.longest_humps
        } else {
            sine.total_humps()
        };
        if reference <= 0.0 {
            return (0.0, 0.0);
        }
        (full * sine.humps / reference, full * sine.trailing_humps / reference)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Element dispatch
// ═══════════════════════════════════════════════════════════════════════

/// Draw one element into `bnd` and return the bounds left below it.
pub fn draw_element(element: &Element, ctx: &RenderContext, canvas: &mut dyn Canvas, bnd: Bounds) -> Bounds {
    match element {
        Element::Spacer => bnd.below(ctx.lyric_font_height() * ctx.spacing_ratio),
        Element::ChordChart(chart) => chord_chart::draw(chart, ctx, canvas, bnd),
        Element::AnnotatedSine(sine) => sine::draw(sine, ctx, canvas, bnd),
        Element::Melody(line) => melody::draw_line(line, ctx, canvas, bnd),
        Element::Lyrics(lyrics) => lyrics::draw(lyrics, ctx, canvas, bnd),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Draw the header and flow every element onto `canvas`.
pub fn render_to_canvas(
    sheet: &Songsheet,
    options: &RenderOptions,
    canvas: &mut dyn Canvas,
) -> Result<Vec<Placement>, LayoutError> {
    let mut bnd = Bounds::page(options.page_width, options.page_height);
    if let Some(h) = &sheet.header {
        bnd = header::draw(h, options.hide_title, canvas, bnd);
    }

    let columns = split_into_columns(bnd, options.columns)?;
    let ctx = RenderContext::new(options, &columns[0], sheet.longest_humps());
    layout_elements(&sheet.elements, columns, &ctx, canvas)
}

/// Render a compiled songsheet into a complete SVG string.
pub fn render_songsheet_to_svg(sheet: &Songsheet, options: &RenderOptions) -> Result<String, LayoutError> {
    let mut svg = SvgCanvas::new(options.page_width, options.page_height);
    let placements = render_to_canvas(sheet, options, &mut svg)?;
    debug!(
        "rendered {} element(s) as {} svg element(s)",
        placements.len(),
        svg.element_count()
    );
    Ok(svg.build())
}
