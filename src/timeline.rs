//! Playback timeline: every annotated sine laid end to end, one slot per
//! character column, with the slots that carry a written time tagged.

use log::{debug, warn};

use crate::model::Songsheet;
use crate::playback_time::PlaybackTime;

/// Where one curve's slots sit in the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Buffer row of the curve element.
    pub row: usize,
    pub start: usize,
    pub len: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    slots: Vec<Option<PlaybackTime>>,
    segments: Vec<Segment>,
}

impl Timeline {
    /// Lay out the curves of `sheet` in document order.
    pub fn build(sheet: &Songsheet) -> Self {
        let mut tl = Timeline::default();
        for (row, sine) in sheet.annotated_sines() {
            let start = tl.slots.len();
            let len = sine.slots();
            tl.slots.resize(start + len, None);
            if let Some(anchor) = sine.anchor {
                if anchor.char_position < len {
                    tl.slots[start + anchor.char_position] = Some(anchor.time);
                } else {
                    warn!(
                        "anchor {} at column {} lies past the end of the curve on row {row} ({len} columns)",
                        anchor.time, anchor.char_position
                    );
                }
            }
            tl.segments.push(Segment { row, start, len });
        }
        debug!("timeline: {} slot(s) over {} curve(s)", tl.slots.len(), tl.segments.len());
        tl
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn time_at(&self, slot: usize) -> Option<PlaybackTime> {
        self.slots.get(slot).copied().flatten()
    }

    /// Tagged slots in timeline order.
    pub fn anchors(&self) -> impl Iterator<Item = (usize, PlaybackTime)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, s)| s.map(|t| (i, t)))
    }

    /// Slot under a cursor at buffer `row`, character column `col` (both 0-based).
    ///
    /// The curve on `row`, or else the closest one above it, is the active
    /// one; a cursor above every curve uses the first. The column is clamped
    /// into the active curve. `None` when there are no curves.
    pub fn slot_at(&self, row: usize, col: usize) -> Option<usize> {
        let after = self.segments.partition_point(|s| s.row <= row);
        let seg = self.segments.get(after.saturating_sub(1))?;
        if seg.len == 0 {
            return None;
        }
        Some(seg.start + col.min(seg.len - 1))
    }

    /// Nearest tagged slot at or before `slot`, and at or after it.
    pub fn surrounding_anchors(
        &self,
        slot: usize,
    ) -> (Option<(usize, PlaybackTime)>, Option<(usize, PlaybackTime)>) {
        let end = (slot + 1).min(self.len());
        let before = self.slots[..end]
            .iter()
            .enumerate()
            .rev()
            .find_map(|(i, s)| s.map(|t| (i, t)));
        let after = self
            .slots
            .iter()
            .enumerate()
            .skip(slot)
            .find_map(|(i, s)| s.map(|t| (i, t)));
        (before, after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_songsheet;

    const TWO_CURVES: &str = "\
C
_   _
 \\_/ \\_/

00:01.00
la la
G
_   _
 \\_/ \\_/

    00:03.00
";

    #[test]
    fn curves_are_laid_end_to_end() {
        let sheet = parse_songsheet(TWO_CURVES).unwrap();
        let tl = Timeline::build(&sheet);
        assert_eq!(tl.len(), 16);
        let anchors: Vec<usize> = tl.anchors().map(|(i, _)| i).collect();
        assert_eq!(anchors, vec![0, 12]);
        assert_eq!(tl.segments()[1].start, 8);
    }

    #[test]
    fn cursor_rows_pick_the_curve_above() {
        let sheet = parse_songsheet(TWO_CURVES).unwrap();
        let tl = Timeline::build(&sheet);
        let second_row = tl.segments()[1].row;
        assert_eq!(tl.slot_at(0, 2), Some(2));
        // the lyric line belongs to the first curve
        assert_eq!(tl.slot_at(5, 3), Some(3));
        assert_eq!(tl.slot_at(second_row, 1), Some(9));
        // clamped into the curve
        assert_eq!(tl.slot_at(second_row, 99), Some(15));
    }

    #[test]
    fn no_curves_no_slots() {
        let sheet = parse_songsheet("just words\n").unwrap();
        let tl = Timeline::build(&sheet);
        assert!(tl.is_empty());
        assert_eq!(tl.slot_at(0, 0), None);
    }

    #[test]
    fn surrounding_anchors_include_the_slot_itself() {
        let sheet = parse_songsheet(TWO_CURVES).unwrap();
        let tl = Timeline::build(&sheet);
        let (before, after) = tl.surrounding_anchors(12);
        assert_eq!(before.map(|a| a.0), Some(12));
        assert_eq!(after.map(|a| a.0), Some(12));
        let (before, after) = tl.surrounding_anchors(13);
        assert_eq!(before.map(|a| a.0), Some(12));
        assert_eq!(after, None);
    }
}
