//! Blank spacer lines.

use crate::error::{ElementKind, ElementParseError};
use crate::model::Element;

use super::Parsed;

pub(super) fn parse(lines: &[String]) -> Result<Parsed, ElementParseError> {
    let err = |reason: &str| ElementParseError::new(ElementKind::Spacer, reason);
    let first = lines.first().ok_or_else(|| err("no input lines"))?;
    if !first.trim().is_empty() {
        return Err(err("blank line contains content"));
    }
    Ok((Element::Spacer, 1))
}
