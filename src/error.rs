//! Error types for compiling, laying out and querying songsheets.
//!
//! Structural parse errors are recoverable: the compiler simply tries the
//! next element parser. Everything else here is fatal for the operation
//! that produced it, except the playback errors, which the query functions
//! turn into sentinel strings.

use std::fmt;

use thiserror::Error;

/// The element kinds known to the compiler, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum ElementKind {
    Spacer,
    ChordChart,
    AnnotatedSine,
    Melody,
    Lyrics,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Spacer => "spacer",
            ElementKind::ChordChart => "chord chart",
            ElementKind::AnnotatedSine => "annotated sine",
            ElementKind::Melody => "melody",
            ElementKind::Lyrics => "lyrics",
        };
        f.write_str(name)
    }
}

/// An element parser's required shape was not met.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}: {reason}")]
pub struct ElementParseError {
    pub kind: ElementKind,
    pub reason: String,
}

impl ElementParseError {
    pub(crate) fn new(kind: ElementKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            reason: reason.into(),
        }
    }
}

/// Fatal compilation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    /// No element parser accepted the lines starting at `row`.
    #[error("could not parse song at row {row}: {residual:?}\n all errors: {}", join_reasons(.reasons))]
    ChainExhausted {
        row: usize,
        reasons: Vec<ElementParseError>,
        residual: Vec<String>,
    },
}

fn join_reasons(reasons: &[ElementParseError]) -> String {
    reasons
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Fatal layout errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// The elements need more room than the requested columns provide.
    #[error("song doesn't fit on one sheet: element {element} overflows the last of {columns} column(s)")]
    Overflow { element: usize, columns: usize },

    #[error("at least one column is required")]
    NoColumns,
}

/// Playback-time query failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaybackError {
    /// The cursor has no anchor on one side (or the song has no curves).
    #[error("insufficient playback time anchors around the cursor")]
    InsufficientAnchors,

    /// Fewer than two anchors, or anchors with no time between them.
    #[error("couldn't find two playback times to calculate bpm with")]
    CannotEstimate,
}

/// Top-level error for the public API.
#[derive(Debug, Error)]
pub enum SongsheetError {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Playback(#[from] PlaybackError),

    #[error("invalid render options: {0}")]
    Options(String),

    #[error("failed to read or write songsheet: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for SongsheetError {
    fn from(e: serde_json::Error) -> Self {
        SongsheetError::Options(e.to_string())
    }
}
