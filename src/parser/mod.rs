//! Notation compiler: turns songsheet text into a list of elements.
//!
//! Element parsers are tried in a fixed order, from the most structured
//! shape to the catch-all lyric line. A parser either accepts a prefix of
//! the remaining lines or rejects it without consuming anything.

mod annotation;
mod chord_chart;
mod cursor;
mod header;
mod lyrics;
mod melody;
mod sine;
mod spacer;

use log::{debug, warn};

use crate::comments::LineBuffer;
use crate::error::{CompileError, ElementKind, ElementParseError};
use crate::model::{CompiledElement, Element, Songsheet};

pub(crate) use annotation::chord_scripts;

/// An accepted element and the number of lines it consumed.
pub(crate) type Parsed = (Element, usize);

type ElementParser = fn(&[String]) -> Result<Parsed, ElementParseError>;

/// Parser chain in priority order. `Lyrics` accepts any line and must stay last.
const PARSERS: [(ElementKind, ElementParser); 5] = [
    (ElementKind::Spacer, spacer::parse),
    (ElementKind::ChordChart, chord_chart::parse),
    (ElementKind::AnnotatedSine, sine::parse),
    (ElementKind::Melody, melody::parse),
    (ElementKind::Lyrics, lyrics::parse),
];

/// Compile notation lines into elements.
///
/// `first_row` is the buffer row of `lines[0]`; it is recorded on each
/// element so cursor rows can be matched later.
pub fn compile(lines: &[String], first_row: usize) -> Result<Vec<CompiledElement>, CompileError> {
    let mut elements = Vec::new();
    let mut at = 0;

    while at < lines.len() {
        let rest = &lines[at..];
        let mut reasons = Vec::new();
        let mut accepted = None;

        for (kind, parse) in PARSERS {
            match parse(rest) {
                Ok((element, used)) if used > 0 => {
                    debug!("row {}: {} ({} line(s))", first_row + at, kind, used);
                    accepted = Some((element, used));
                    break;
                }
                Ok(_) => reasons.push(ElementParseError::new(kind, "consumed no lines")),
                Err(e) => reasons.push(e),
            }
        }

        let Some((element, used)) = accepted else {
            warn!("no element parser accepted row {}", first_row + at);
            return Err(CompileError::ChainExhausted {
                row: first_row + at,
                reasons,
                residual: rest.to_vec(),
            });
        };
        elements.push(CompiledElement {
            row: first_row + at,
            element,
        });
        at += used;
    }

    Ok(elements)
}

/// Strip comments, read the optional title block and compile the rest.
pub fn parse_songsheet(text: &str) -> Result<Songsheet, CompileError> {
    let buffer = LineBuffer::from_text(text);
    parse_buffer(&buffer)
}

pub(crate) fn parse_buffer(buffer: &LineBuffer) -> Result<Songsheet, CompileError> {
    let lines = buffer.lines();
    let (header, skip) = match header::parse_header(lines) {
        Some((h, used)) => (Some(h), used),
        None => (None, 0),
    };
    let elements = compile(&lines[skip..], skip)?;
    Ok(Songsheet { header, elements })
}
