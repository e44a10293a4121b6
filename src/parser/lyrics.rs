//! Plain lyric lines, the catch-all parser at the end of the chain.

use crate::error::{ElementKind, ElementParseError};
use crate::model::{Element, Lyrics};

use super::Parsed;

pub(super) fn parse(lines: &[String]) -> Result<Parsed, ElementParseError> {
    let first = lines
        .first()
        .ok_or_else(|| ElementParseError::new(ElementKind::Lyrics, "no input lines"))?;
    Ok((Element::Lyrics(Lyrics { text: first.clone() }), 1))
}
