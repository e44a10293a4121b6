//! Annotated sine curves.
//!
//! ```text
//! F   C7/ G          labels along the axis (chords, melody numbers)
//! _   _   _   _      top of the humps
//!  \_/ \_/ \_/..     bottom of the humps, dots decay the curve
//!   ^   ^ 1   v      marks along the curve
//!     00:03.14       optional playback anchor
//! ```

use crate::error::{ElementKind, ElementParseError};
use crate::hump::measure_hump_art;
use crate::model::{Anchor, AnnotatedSine, Element};
use crate::playback_time::anchor_in_line;

use super::annotation::{parse_along_axis, parse_along_sine};
use super::Parsed;

const MIN_LINES: usize = 4;
const HUMP_TOP_PREFIX: &str = "_";
const HUMP_BOTTOM_PREFIX: &str = " \\_/";

/// True if `top`/`bottom` carry the hump-art signature of a sine.
fn is_hump_art(top: &str, bottom: &str) -> bool {
    top.starts_with(HUMP_TOP_PREFIX) && bottom.starts_with(HUMP_BOTTOM_PREFIX)
}

pub(super) fn parse(lines: &[String]) -> Result<Parsed, ElementParseError> {
    let err = |reason: String| ElementParseError::new(ElementKind::AnnotatedSine, reason);

    if lines.len() < MIN_LINES {
        return Err(err(format!(
            "improper number of input lines, want {MIN_LINES} have {}",
            lines.len()
        )));
    }
    if !is_hump_art(&lines[1], &lines[2]) {
        return Err(err("first lines are not sine humps".to_string()));
    }

    let span = measure_hump_art(&lines[1], &lines[2]);
    let anchor = lines
        .get(MIN_LINES)
        .and_then(|l| anchor_in_line(l))
        .map(|(time, char_position)| Anchor { time, char_position });

    let sine = AnnotatedSine {
        humps: span.humps,
        trailing_humps: span.trailing_humps,
        along_axis: parse_along_axis(&lines[0]),
        along_sine: parse_along_sine(&lines[3]),
        anchor,
    };
    let used = if anchor.is_some() { MIN_LINES + 1 } else { MIN_LINES };
    Ok((Element::AnnotatedSine(sine), used))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(src: &[&str]) -> Vec<String> {
        src.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_curve_with_anchor() {
        let src = lines(&[
            "F   C7/ G",
            "_   _   _   _",
            " \\_/ \\_/ \\_/..",
            "  ^   ^     v",
            "    00:03.14",
            "la la la",
        ]);
        let (el, used) = parse(&src).unwrap();
        assert_eq!(used, 5);
        let Element::AnnotatedSine(s) = el else { panic!("not a sine") };
        assert_eq!(s.humps, 3.0);
        assert_eq!(s.trailing_humps, 0.5);
        assert_eq!(s.along_axis.len(), 3);
        assert!(s.along_axis[1].slide);
        assert_eq!(s.along_sine.len(), 3);
        let anchor = s.anchor.unwrap();
        assert_eq!(anchor.char_position, 4);
        assert_eq!(anchor.time.to_string(), "00:03.14");
    }

    #[test]
    fn fifth_line_that_is_not_a_time_stays_unconsumed() {
        let src = lines(&["C", "_   _", " \\_/ \\_/", "", "lyrics here"]);
        let (el, used) = parse(&src).unwrap();
        assert_eq!(used, 4);
        let Element::AnnotatedSine(s) = el else { panic!("not a sine") };
        assert!(s.anchor.is_none());
        assert_eq!(s.humps, 2.0);
    }

    #[test]
    fn needs_hump_signature() {
        let src = lines(&["C", "_   _", "\\_/ \\_/", ""]);
        assert!(parse(&src).is_err());
        let src = lines(&["C", " _   _", " \\_/ \\_/", ""]);
        assert!(parse(&src).is_err());
        assert!(parse(&src[..3]).is_err());
    }
}
