//! Hump coordinate model.
//!
//! A hump is one notated beat of melody/lyric content. In the text art it
//! is 4 character columns wide, which makes the character column the
//! smallest unit of both horizontal position and time:
//!
//! ```text
//! _   _   _      top of the curve, one "_" per hump
//!  \_/ \_/ \_/.. bottom of the curve, trailing dots decay the amplitude
//! ```

/// Character columns per hump.
pub const CHARS_PER_HUMP: f64 = 4.0;

/// Absorbs float error when converting humps back to whole columns.
const SLOT_ROUNDING: f64 = 0.00001;

/// Convert a character column (or column count) to humps.
pub fn chars_to_humps(chars: usize) -> f64 {
    chars as f64 / CHARS_PER_HUMP
}

/// Number of whole character slots covered by `humps`.
pub fn humps_to_slots(humps: f64) -> usize {
    if humps <= 0.0 {
        return 0;
    }
    (humps * CHARS_PER_HUMP + SLOT_ROUNDING) as usize
}

/// Fractional part of a hump position; 0.0 and 0.5 are the crest and the
/// trough of the cosine curve, 0.25 and 0.75 its axis crossings.
pub fn phase(position: f64) -> f64 {
    position - position.trunc()
}

/// Active and trailing humps measured from the two hump-art lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HumpSpan {
    pub humps: f64,
    pub trailing_humps: f64,
}

impl HumpSpan {
    pub fn total(&self) -> f64 {
        self.humps + self.trailing_humps
    }
}

/// Measure the hump art of an annotated sine.
///
/// `top` is the `_   _` line, `bottom` the ` \_/ \_/..` line. The active
/// width is the longer of the two lines, where the bottom line excludes its
/// trailing dots and counts its leading space. Top-line characters that sit
/// above the trailing dots belong to the decay and are not active humps.
pub fn measure_hump_art(top: &str, bottom: &str) -> HumpSpan {
    let bottom = bottom.trim_end();
    let active_bottom = bottom.trim_end_matches('.');
    let dots_start = active_bottom.chars().count();
    let trailing_chars = bottom.chars().filter(|&c| c == '.').count();

    let bottom_chars = active_bottom.trim().chars().count() + 1;
    let mut top_chars = top.trim().chars().count();
    if trailing_chars > 0 {
        top_chars = top_chars.min(dots_start);
    }

    HumpSpan {
        humps: chars_to_humps(top_chars.max(bottom_chars)),
        trailing_humps: chars_to_humps(trailing_chars),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_humps_with_half_hump_decay() {
        let span = measure_hump_art("_   _   _   _", " \\_/ \\_/ \\_/..");
        assert_eq!(span.humps, 3.0);
        assert_eq!(span.trailing_humps, 0.5);
        assert_eq!(span.total(), 3.5);
    }

    #[test]
    fn bottom_line_decides_when_longer() {
        let span = measure_hump_art("_   _", " \\_/ \\_/ \\_/");
        assert_eq!(span.humps, 3.0);
        assert_eq!(span.trailing_humps, 0.0);
    }

    #[test]
    fn top_line_decides_without_decay() {
        // 4 humps plus a quarter: the final crest is drawn
        let span = measure_hump_art("_   _   _   _   _", " \\_/ \\_/ \\_/ \\_/");
        assert_eq!(span.humps, 4.25);
    }

    #[test]
    fn slots_round_float_error() {
        assert_eq!(humps_to_slots(3.5), 14);
        assert_eq!(humps_to_slots(0.1 + 0.2), 1);
        assert_eq!(humps_to_slots(0.0), 0);
        assert_eq!(humps_to_slots(-1.0), 0);
    }

    #[test]
    fn phase_of_positions() {
        assert_eq!(phase(2.25), 0.25);
        assert_eq!(phase(3.0), 0.0);
    }
}
