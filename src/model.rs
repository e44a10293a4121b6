//! Data model for a compiled songsheet.
//!
//! Everything here is produced once by the compiler and read-only
//! afterwards; each element owns its annotations outright.

use serde::Serialize;

use crate::error::ElementKind;
use crate::hump::humps_to_slots;
use crate::playback_time::PlaybackTime;

/// A compiled songsheet: optional title block plus elements in document order.
#[derive(Debug, Clone, Serialize)]
pub struct Songsheet {
    pub header: Option<Header>,
    pub elements: Vec<CompiledElement>,
}

impl Songsheet {
    pub fn annotated_sines(&self) -> impl Iterator<Item = (usize, &AnnotatedSine)> {
        self.elements.iter().filter_map(|ce| match &ce.element {
            Element::AnnotatedSine(sine) => Some((ce.row, sine)),
            _ => None,
        })
    }

    /// Widest curve in the song, in humps (active plus trailing).
    pub fn longest_humps(&self) -> Option<f64> {
        self.annotated_sines()
            .map(|(_, s)| s.total_humps())
            .fold(None, |acc: Option<f64>, h| Some(acc.map_or(h, |a| a.max(h))))
    }
}

/// An element together with the buffer row its first line came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledElement {
    pub row: usize,
    pub element: Element,
}

/// The closed set of songsheet elements.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    Spacer,
    ChordChart(ChordChart),
    AnnotatedSine(AnnotatedSine),
    Melody(MelodyLine),
    Lyrics(Lyrics),
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Spacer => ElementKind::Spacer,
            Element::ChordChart(_) => ElementKind::ChordChart,
            Element::AnnotatedSine(_) => ElementKind::AnnotatedSine,
            Element::Melody(_) => ElementKind::Melody,
            Element::Lyrics(_) => ElementKind::Lyrics,
        }
    }
}

// ─── Chord chart ─────────────────────────────────────────────────────

/// Guitar strings per chord, thick to thin.
pub const GUITAR_STRINGS: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chord {
    /// Root letter plus up to two trailing characters (e.g. "A", "Am", "Am7").
    pub name: String,
    /// Per string, thick to thin: a fret number, "0" for open, "x" for
    /// muted, or empty when the chart leaves the string blank.
    pub positions: [String; GUITAR_STRINGS],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChordChart {
    pub chords: Vec<Chord>,
    pub label_font_pt: f64,
    pub positions_font_pt: f64,
}

// ─── Melody ──────────────────────────────────────────────────────────

/// How a melody number is to be sung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    /// `.` drawn as a dot
    Staccato,
    /// `-` drawn as a bar
    Sustain,
    /// `~` drawn as a curve
    Vibrato,
}

impl Modifier {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Modifier::Staccato),
            '-' => Some(Modifier::Sustain),
            '~' => Some(Modifier::Vibrato),
            _ => None,
        }
    }
}

/// Extra decoration around a melody number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decoration {
    /// `(` tight brackets around the number
    Brackets,
    /// `\` slide up into the next number
    SlideUp,
    /// `/` slide down into the next number
    SlideDown,
}

impl Decoration {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '(' => Some(Decoration::Brackets),
            '\\' => Some(Decoration::SlideUp),
            '/' => Some(Decoration::SlideDown),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MelodyNote {
    pub digit: char,
    pub modifier: Modifier,
    /// Modifier written on the row above the digit (otherwise below).
    pub modifier_above: bool,
    pub decoration: Option<Decoration>,
}

/// A melody row; one slot per character column, `None` for blanks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MelodyLine {
    pub notes: Vec<Option<MelodyNote>>,
}

impl MelodyLine {
    /// Column and digit of the next note after `col`, if any.
    pub fn next_note_after(&self, col: usize) -> Option<(usize, char)> {
        self.notes
            .iter()
            .enumerate()
            .skip(col + 1)
            .find_map(|(i, n)| n.map(|n| (i, n.digit)))
    }
}

// ─── Annotated sine ──────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SineAnnotation {
    /// Position in humps from the start of the curve.
    pub position: f64,
    pub bolded: bool,
    pub ch: char,
    pub subscript: Option<char>,
    pub superscript: Option<char>,
    /// Fade-style glide towards the next annotation on the axis.
    pub slide: bool,
    /// A melody number written on the axis line instead of a label.
    pub melody: Option<MelodyNote>,
}

impl SineAnnotation {
    pub fn plain(position: f64, bolded: bool, ch: char) -> Self {
        Self {
            position,
            bolded,
            ch,
            subscript: None,
            superscript: None,
            slide: false,
            melody: None,
        }
    }

    pub fn has_script(&self) -> bool {
        self.subscript.is_some() || self.superscript.is_some()
    }
}

/// Explicit playback time written under a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Anchor {
    pub time: PlaybackTime,
    /// Character column (from the curve start) the time belongs to.
    pub char_position: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedSine {
    pub humps: f64,
    /// Humps during which the amplitude decays linearly to zero.
    pub trailing_humps: f64,
    pub along_axis: Vec<SineAnnotation>,
    pub along_sine: Vec<SineAnnotation>,
    pub anchor: Option<Anchor>,
}

impl AnnotatedSine {
    pub fn total_humps(&self) -> f64 {
        self.humps + self.trailing_humps
    }

    /// Character slots this curve contributes to the playback timeline.
    pub fn slots(&self) -> usize {
        humps_to_slots(self.total_humps())
    }
}

// ─── Lyrics ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lyrics {
    /// The line verbatim; spacing positions each character under the curve.
    pub text: String,
}

// ─── Header ──────────────────────────────────────────────────────────

/// The title block at the top of a songsheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Header {
    pub title: String,
    pub title_line2: String,
    pub date: String,
    pub time_sig_top: String,
    pub time_sig_bottom: String,
    pub bpm: String,
    pub capo: String,
    /// Tuning key labels: top row left/mid/right, then bottom row.
    pub tuning: [String; 6],
}
