//! Character-level rules shared by the element parsers: chord labels with
//! sub/superscripts and slides, melody modifiers and decorations.

use crate::model::{Decoration, MelodyNote, Modifier, SineAnnotation};
use crate::hump::chars_to_humps;

use super::cursor::ScanCursor;

pub(crate) fn is_modifier(c: char) -> bool {
    Modifier::from_char(c).is_some()
}

pub(crate) fn is_decoration(c: char) -> bool {
    Decoration::from_char(c).is_some()
}

fn is_script(c: char) -> bool {
    c.is_ascii_digit() || c.is_lowercase()
}

fn is_slide_mark(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Sub/superscript and slide found after a chord root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct ChordScripts {
    pub(crate) subscript: Option<char>,
    pub(crate) superscript: Option<char>,
    pub(crate) slide: bool,
}

impl ChordScripts {
    /// Characters consumed after the root.
    pub(crate) fn extra_chars(&self) -> usize {
        self.subscript.is_some() as usize
            + self.superscript.is_some() as usize
            + self.slide as usize
    }
}

/// Classify the characters following a chord root.
///
/// Only uppercase roots take scripts. A superscript needs a subscript in
/// front of it, and a slide mark must directly follow the script run.
pub(crate) fn chord_scripts(root: char, next: [char; 3]) -> ChordScripts {
    let mut out = ChordScripts::default();
    if !root.is_uppercase() {
        return out;
    }
    if !is_script(next[0]) {
        return out;
    }
    out.subscript = Some(next[0]);
    let after = if is_script(next[1]) {
        out.superscript = Some(next[1]);
        next[2]
    } else {
        next[1]
    };
    out.slide = is_slide_mark(after);
    out
}

/// A digit and a modifier written side by side on one row, in either order.
///
/// A modifier in front of the digit is drawn below it, one after the
/// digit is drawn above.
pub(crate) fn melody_from_pair(first: char, second: char) -> Option<MelodyNote> {
    let (digit, modifier, modifier_above) = match (Modifier::from_char(first), Modifier::from_char(second)) {
        (Some(m), _) if second.is_ascii_digit() => (second, m, false),
        (_, Some(m)) if first.is_ascii_digit() => (first, m, true),
        _ => return None,
    };
    Some(MelodyNote {
        digit,
        modifier,
        modifier_above,
        decoration: None,
    })
}

/// Parse the along-axis line of an annotated sine.
pub(crate) fn parse_along_axis(line: &str) -> Vec<SineAnnotation> {
    let mut out = Vec::new();
    let mut cur = ScanCursor::new(line);

    while !cur.at_end() {
        let ch = cur.peek(0);
        if ch == ' ' {
            cur.advance(1);
            continue;
        }
        let position = chars_to_humps(cur.pos());

        if let Some(note) = melody_from_pair(ch, cur.peek(1)) {
            let mut sa = SineAnnotation::plain(position, false, note.digit);
            sa.melody = Some(note);
            out.push(sa);
            cur.advance(2);
            continue;
        }

        let scripts = chord_scripts(ch, [cur.peek(1), cur.peek(2), cur.peek(3)]);
        out.push(SineAnnotation {
            position,
            bolded: ch.is_uppercase(),
            ch,
            subscript: scripts.subscript,
            superscript: scripts.superscript,
            slide: scripts.slide,
            melody: None,
        });
        cur.advance(1 + scripts.extra_chars());
    }
    out
}

/// Parse the along-curve line of an annotated sine: accents `^`, releases
/// `v`, holds `|` or any other mark. `A` and `V` are bold `^` and `v`.
pub(crate) fn parse_along_sine(line: &str) -> Vec<SineAnnotation> {
    line.chars()
        .enumerate()
        .filter(|(_, c)| *c != ' ')
        .map(|(col, c)| {
            let (ch, bolded) = match c {
                'V' => ('v', true),
                'A' => ('^', true),
                other => (other, false),
            };
            SineAnnotation::plain(chars_to_humps(col), bolded, ch)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscript_superscript_and_slide() {
        let s = chord_scripts('A', ['m', '7', '/']);
        assert_eq!(s.subscript, Some('m'));
        assert_eq!(s.superscript, Some('7'));
        assert!(s.slide);
        assert_eq!(s.extra_chars(), 3);

        let s = chord_scripts('G', ['7', '\\', ' ']);
        assert_eq!(s.subscript, Some('7'));
        assert_eq!(s.superscript, None);
        assert!(s.slide);
    }

    #[test]
    fn lowercase_root_takes_no_scripts() {
        assert_eq!(chord_scripts('a', ['m', '7', ' ']), ChordScripts::default());
    }

    #[test]
    fn superscript_requires_subscript() {
        let s = chord_scripts('C', [' ', '7', '/']);
        assert_eq!(s, ChordScripts::default());
    }

    #[test]
    fn slide_without_script_is_not_a_slide() {
        assert!(!chord_scripts('C', ['/', ' ', ' ']).slide);
    }

    #[test]
    fn melody_pairs() {
        let n = melody_from_pair('.', '5').unwrap();
        assert_eq!((n.digit, n.modifier, n.modifier_above), ('5', Modifier::Staccato, false));
        let n = melody_from_pair('3', '~').unwrap();
        assert_eq!((n.digit, n.modifier, n.modifier_above), ('3', Modifier::Vibrato, true));
        assert!(melody_from_pair('3', '4').is_none());
        assert!(melody_from_pair('F', '.').is_none());
    }

    #[test]
    fn axis_line_advances_past_consumed_runs() {
        let anns = parse_along_axis("Am7/    G   .5");
        let chars: Vec<char> = anns.iter().map(|a| a.ch).collect();
        assert_eq!(chars, vec!['A', 'G', '5']);
        assert_eq!(anns[0].position, 0.0);
        assert!(anns[0].bolded && anns[0].slide);
        assert_eq!(anns[1].position, 2.0);
        assert_eq!(anns[2].position, 3.0);
        assert!(anns[2].melody.is_some());
        assert!(!anns[2].bolded);
    }

    #[test]
    fn curve_line_bold_variants() {
        let anns = parse_along_sine("  ^ V A |");
        let got: Vec<(f64, char, bool)> = anns.iter().map(|a| (a.position, a.ch, a.bolded)).collect();
        assert_eq!(
            got,
            vec![(0.5, '^', false), (1.0, 'v', true), (1.5, '^', true), (2.0, '|', false)]
        );
    }
}
