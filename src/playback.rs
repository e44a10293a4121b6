//! Playback-time queries: the time at an editor cursor, and the song's
//! tempo estimated from its written anchors.
//!
//! Times between two anchors are interpolated linearly over the timeline
//! slots:
//!   `elapsed = (cursor - first) / (last - first) * (last.time - first.time)`
//!
//! The file-based entry points never fail on notation problems; they return
//! the sentinel strings editor integrations match on.

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::comments::LineBuffer;
use crate::error::{PlaybackError, SongsheetError};
use crate::hump::CHARS_PER_HUMP;
use crate::parser::parse_buffer;
use crate::playback_time::PlaybackTime;
use crate::timeline::Timeline;

/// Returned by [`playback_time_at`] when no time can be given.
pub const BAD_PLAYBACK_TIME: &str = "BAD-PLAYBACK-TIME";

/// Prepended by [`fill_bpm`] when the tempo cannot be estimated.
pub const BPM_ERROR_LINE: &str = "//ERROR: couldn't find two playback times to calculate bpm with";

const MIN_BPM: f64 = 50.0;
const MAX_BPM: f64 = 200.0;

/// Time at timeline `slot`.
pub fn resolve(timeline: &Timeline, slot: usize) -> Result<PlaybackTime, PlaybackError> {
    if let Some(t) = timeline.time_at(slot) {
        return Ok(t);
    }
    let (Some((first, t_first)), Some((last, t_last))) = timeline.surrounding_anchors(slot) else {
        return Err(PlaybackError::InsufficientAnchors);
    };
    let ratio = (slot - first) as f64 / (last - first) as f64;
    Ok(t_first.add(t_last.since(t_first).mul_f64(ratio)))
}

/// Raw tempo between the first and last anchors of the whole song.
///
/// Both anchor slots count towards the beats.
pub fn estimate_bpm(timeline: &Timeline) -> Result<f64, PlaybackError> {
    let mut anchors = timeline.anchors();
    let (Some((first, t_first)), Some((last, t_last))) = (anchors.next(), anchors.last()) else {
        return Err(PlaybackError::CannotEstimate);
    };
    let minutes = t_last.since(t_first).as_secs_f64() / 60.0;
    if minutes <= 0.0 {
        return Err(PlaybackError::CannotEstimate);
    }
    let beats = (last - first + 1) as f64 / CHARS_PER_HUMP;
    Ok(beats / minutes)
}

/// Fold a tempo read at half or double speed back into range, once.
pub fn normalize_bpm(bpm: f64) -> f64 {
    let mut bpm = bpm;
    if bpm < MIN_BPM {
        bpm *= 2.0;
    }
    if bpm > MAX_BPM {
        bpm /= 2.0;
    }
    bpm
}

/// Time at a 1-based editor cursor (`x` column, `y` line) in raw notation
/// text, comments included.
pub fn playback_time_in_text(text: &str, x: usize, y: usize) -> Result<PlaybackTime, SongsheetError> {
    let buffer = LineBuffer::from_text(text);
    let sheet = parse_buffer(&buffer)?;
    let timeline = Timeline::build(&sheet);

    let row = buffer.buffer_row(y.saturating_sub(1));
    let slot = timeline
        .slot_at(row, x.saturating_sub(1))
        .ok_or(PlaybackError::InsufficientAnchors)?;
    debug!("cursor {x},{y} -> row {row}, slot {slot} of {}", timeline.len());
    Ok(resolve(&timeline, slot)?)
}

/// The line [`fill_bpm`] would prepend to `text`.
pub fn bpm_line_for_text(text: &str) -> Result<String, SongsheetError> {
    let sheet = parse_buffer(&LineBuffer::from_text(text))?;
    let timeline = Timeline::build(&sheet);
    match estimate_bpm(&timeline) {
        Ok(raw) => Ok(format!("// BPM: {}", normalize_bpm(raw).round() as i64)),
        Err(e) => {
            warn!("{e}");
            Ok(BPM_ERROR_LINE.to_string())
        }
    }
}

/// Playback time at the cursor, or [`BAD_PLAYBACK_TIME`].
pub fn playback_time_at<P: AsRef<Path>>(path: P, x: usize, y: usize) -> String {
    let path = path.as_ref();
    let result = fs::read_to_string(path)
        .map_err(SongsheetError::from)
        .and_then(|text| playback_time_in_text(&text, x, y));
    match result {
        Ok(t) => t.to_string(),
        Err(e) => {
            debug!("no playback time for {}:{y}:{x}: {e}", path.display());
            BAD_PLAYBACK_TIME.to_string()
        }
    }
}

/// Prepend a `// BPM: N` line (or the error line) to the file and return it.
pub fn fill_bpm<P: AsRef<Path>>(path: P) -> Result<String, SongsheetError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let line = bpm_line_for_text(&text)?;
    fs::write(path, format!("{line}\n{text}"))?;
    Ok(line)
}
