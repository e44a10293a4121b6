//! Layout computation: splits the page into columns and flows the
//! compiled elements down them.
//!
//! Every element is first drawn against a [`NullCanvas`] to find out how
//! much height it needs. When the column would be left with less than
//! [`MIN_COLUMN_SLACK`], the element moves to the next column; when there
//! is no next column the song does not fit and layout fails.

use log::{debug, info, warn};
use serde::Serialize;

use crate::error::LayoutError;
use crate::model::CompiledElement;

use super::canvas::{Canvas, NullCanvas};
use super::constants::*;
use super::{draw_element, RenderContext};

// ═══════════════════════════════════════════════════════════════════════
// Bounds
// ═══════════════════════════════════════════════════════════════════════

/// A rectangle on the page, in inches from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Bounds {
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self { top, left, bottom, right }
    }

    /// Printable area of a page; padding is only applied at the top and left.
    pub fn page(width: f64, height: f64) -> Self {
        Self::new(PADDING, PADDING, height, width)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// What is left after `used` inches have been taken off the top.
    pub fn below(&self, used: f64) -> Bounds {
        Bounds {
            top: self.top + used,
            ..*self
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Static / dynamic groups
// ═══════════════════════════════════════════════════════════════════════

/// Size of a group child along the group's axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extent {
    /// A fixed size in inches.
    Static(f64),
    /// An even share of whatever the static children leave over.
    Dynamic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// Children side by side, left to right, each with the full height.
    Row,
    /// Children stacked top to bottom, each with the full width.
    Column,
}

/// Divide `bnd` among `children` along the axis of `kind`.
pub fn distribute(kind: GroupKind, bnd: Bounds, children: &[Extent]) -> Vec<Bounds> {
    let total = match kind {
        GroupKind::Row => bnd.width(),
        GroupKind::Column => bnd.height(),
    };
    let fixed: f64 = children
        .iter()
        .map(|c| match c {
            Extent::Static(v) => *v,
            Extent::Dynamic => 0.0,
        })
        .sum();
    let dynamic_count = children.iter().filter(|c| matches!(c, Extent::Dynamic)).count();

    let mut leftover = total - fixed;
    if leftover < 0.0 {
        warn!("static children need {fixed:.3}in of {total:.3}in; dynamic children get none");
        leftover = 0.0;
    }
    let share = if dynamic_count > 0 {
        leftover / dynamic_count as f64
    } else {
        0.0
    };

    let mut cursor = match kind {
        GroupKind::Row => bnd.left,
        GroupKind::Column => bnd.top,
    };
    children
        .iter()
        .map(|c| {
            let size = match c {
                Extent::Static(v) => *v,
                Extent::Dynamic => share,
            };
            let child = match kind {
                GroupKind::Row => Bounds::new(bnd.top, cursor, bnd.bottom, cursor + size),
                GroupKind::Column => Bounds::new(cursor, bnd.left, cursor + size, bnd.right),
            };
            cursor += size;
            child
        })
        .collect()
}

/// Equal-width columns across `bnd`.
pub fn split_into_columns(bnd: Bounds, columns: usize) -> Result<Vec<Bounds>, LayoutError> {
    if columns == 0 {
        return Err(LayoutError::NoColumns);
    }
    Ok(distribute(GroupKind::Row, bnd, &vec![Extent::Dynamic; columns]))
}

// ═══════════════════════════════════════════════════════════════════════
// Column flow
// ═══════════════════════════════════════════════════════════════════════

/// Where an element ended up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    /// Index into the element list.
    pub element: usize,
    pub column: usize,
    /// The bounds the element was drawn into.
    pub bounds: Bounds,
    /// Height the element used.
    pub height: f64,
}

fn fits(remaining: &Bounds) -> bool {
    remaining.height() >= MIN_COLUMN_SLACK
}

/// Flow `elements` down `columns`, drawing each onto `canvas`.
pub fn layout_elements(
    elements: &[CompiledElement],
    mut columns: Vec<Bounds>,
    ctx: &RenderContext,
    canvas: &mut dyn Canvas,
) -> Result<Vec<Placement>, LayoutError> {
    if columns.is_empty() {
        return Err(LayoutError::NoColumns);
    }
    let mut col = 0;
    let mut placements = Vec::with_capacity(elements.len());

    for (i, ce) in elements.iter().enumerate() {
        let measured = draw_element(&ce.element, ctx, &mut NullCanvas, columns[col]);
        if !fits(&measured) {
            col += 1;
            if col >= columns.len() {
                return Err(LayoutError::Overflow {
                    element: i,
                    columns: columns.len(),
                });
            }
            info!("element {i} (row {}) starts column {}", ce.row, col + 1);

            let remeasured = draw_element(&ce.element, ctx, &mut NullCanvas, columns[col]);
            if !fits(&remeasured) {
                return Err(LayoutError::Overflow {
                    element: i,
                    columns: columns.len(),
                });
            }
        }

        let area = columns[col];
        let reduced = draw_element(&ce.element, ctx, canvas, area);
        debug!(
            "element {i} ({}) in column {col}: {:.3}in",
            ce.element.kind(),
            reduced.top - area.top
        );
        placements.push(Placement {
            element: i,
            column: col,
            bounds: area,
            height: reduced.top - area.top,
        });
        columns[col] = reduced;
    }

    Ok(placements)
}
