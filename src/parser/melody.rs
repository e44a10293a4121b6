//! Melody rows: a line of digits with modifier rows above and/or below.
//!
//! ```text
//!  .   -       modifiers above (optional)
//!  5   3   2   melody numbers
//!  (   \   ~   modifiers below; decorations: ( brackets, \ and / slides
//! ```

use crate::error::{ElementKind, ElementParseError};
use crate::model::{Decoration, Element, MelodyLine, MelodyNote, Modifier};

use super::annotation::{is_decoration, is_modifier};
use super::Parsed;

const MELODY_LINES: usize = 3;

/// At least one digit, otherwise only digits and whitespace.
fn is_numbers_line(s: &str) -> bool {
    s.chars().all(|c| c.is_whitespace() || c.is_ascii_digit()) && s.chars().any(|c| c.is_ascii_digit())
}

/// At least one modifier or decoration, otherwise only those and whitespace.
fn is_modifiers_line(s: &str) -> bool {
    let marked = |c: char| is_modifier(c) || is_decoration(c);
    s.chars().all(|c| c.is_whitespace() || marked(c)) && s.chars().any(marked)
}

pub(super) fn parse(lines: &[String]) -> Result<Parsed, ElementParseError> {
    let err = |reason: String| ElementParseError::new(ElementKind::Melody, reason);

    if lines.len() < 2 {
        return Err(err(format!(
            "improper number of input lines, want at least 2 have {}",
            lines.len()
        )));
    }

    let third_is_modifiers = lines.len() >= 3 && is_modifiers_line(&lines[2]);
    let (upper, numbers, lower): (&str, &str, &str) =
        if is_numbers_line(&lines[0]) && is_modifiers_line(&lines[1]) {
            ("", lines[0].as_str(), lines[1].as_str())
        } else if is_modifiers_line(&lines[0]) && is_numbers_line(&lines[1]) {
            if third_is_modifiers {
                (lines[0].as_str(), lines[1].as_str(), lines[2].as_str())
            } else {
                (lines[0].as_str(), lines[1].as_str(), "")
            }
        } else {
            return Err(err("could not determine melody number line and modifier line".to_string()));
        };

    let upper: Vec<char> = upper.chars().collect();
    let lower: Vec<char> = lower.chars().collect();
    let mark = |row: &[char], col: usize| row.get(col).copied().filter(|c| !c.is_whitespace());

    let mut notes = Vec::new();
    for (col, digit) in numbers.chars().enumerate() {
        if !digit.is_ascii_digit() {
            notes.push(None);
            continue;
        }
        let above = mark(&upper, col);
        let below = mark(&lower, col);

        let modifier_above = above.and_then(Modifier::from_char);
        let modifier_below = below.and_then(Modifier::from_char);
        let (modifier, is_above) = match (modifier_above, modifier_below) {
            (Some(m), None) => (m, true),
            (None, Some(m)) => (m, false),
            (Some(_), Some(_)) => {
                return Err(err(format!("melody {digit} (col {col}) has modifiers both above and below")));
            }
            (None, None) => {
                return Err(err(format!("no melody modifier for melody {digit} (col {col})")));
            }
        };
        let decoration = below
            .and_then(Decoration::from_char)
            .or_else(|| above.and_then(Decoration::from_char));

        notes.push(Some(MelodyNote {
            digit,
            modifier,
            modifier_above: is_above,
            decoration,
        }));
    }

    let used = MELODY_LINES.min(lines.len());
    Ok((Element::Melody(MelodyLine { notes }), used))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(src: &[&str]) -> Vec<String> {
        src.iter().map(|s| s.to_string()).collect()
    }

    fn melody(src: &[&str]) -> MelodyLine {
        match parse(&lines(src)).unwrap().0 {
            Element::Melody(m) => m,
            other => panic!("expected melody, got {other:?}"),
        }
    }

    #[test]
    fn numbers_then_modifiers() {
        let m = melody(&["1 2", ". -", "next"]);
        assert_eq!(m.notes.len(), 3);
        let n = m.notes[2].unwrap();
        assert_eq!((n.digit, n.modifier, n.modifier_above), ('2', Modifier::Sustain, false));
        assert!(m.notes[1].is_none());
    }

    #[test]
    fn sandwiched_numbers_take_modifiers_from_both_sides() {
        let m = melody(&[" .  ", " 5 3", " ( ~"]);
        let five = m.notes[1].unwrap();
        assert!(five.modifier_above);
        assert_eq!(five.decoration, Some(Decoration::Brackets));
        let three = m.notes[3].unwrap();
        assert_eq!(three.modifier, Modifier::Vibrato);
        assert!(!three.modifier_above);
    }

    #[test]
    fn decorations_attach_to_their_digit() {
        let m = melody(&["(\\", "57", ".~"]);
        assert_eq!(m.notes[0].unwrap().decoration, Some(Decoration::Brackets));
        assert_eq!(m.notes[1].unwrap().decoration, Some(Decoration::SlideUp));
        assert_eq!(m.notes[1].unwrap().modifier, Modifier::Vibrato);
    }

    #[test]
    fn modifiers_above_with_lyrics_below() {
        let (el, used) = parse(&lines(&["- .", "3 4", "la la"])).unwrap();
        assert_eq!(used, 3);
        let Element::Melody(m) = el else { panic!("not a melody") };
        assert!(m.notes[0].unwrap().modifier_above);
    }

    #[test]
    fn two_line_melody_at_end_of_song() {
        let (_, used) = parse(&lines(&["3 4", "- ."])).unwrap();
        assert_eq!(used, 2);
    }

    #[test]
    fn digit_without_modifier_fails_whole_block() {
        let src = lines(&["1 2", ".  ", ""]);
        let e = parse(&src).unwrap_err();
        assert!(e.reason.contains("no melody modifier"));
    }

    #[test]
    fn digit_with_two_modifiers_fails_whole_block() {
        let src = lines(&[".  ", "1 2", ". -"]);
        let e = parse(&src).unwrap_err();
        assert!(e.reason.contains("both above and below"));
    }

    #[test]
    fn rejects_non_melody_shapes() {
        assert!(parse(&lines(&["la la", ". -"])).is_err());
        assert!(parse(&lines(&["1 2", "1 2"])).is_err());
        assert!(parse(&lines(&["1 2"])).is_err());
        assert!(parse(&lines(&["   ", "   "])).is_err());
    }
}
