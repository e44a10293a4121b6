//! Playback times written into the notation as `mm:ss.cc` anchors.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// Length of an anchor after trimming, e.g. `01:23.45`.
pub const ANCHOR_LEN: usize = 8;

/// A point in the song's audio, measured from an arbitrary zero.
///
/// Only the duration is stored; the string form is always rendered from
/// it, so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct PlaybackTime {
    duration: Duration,
}

impl PlaybackTime {
    pub fn from_duration(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn from_centis(centis: u64) -> Self {
        Self::from_duration(Duration::from_millis(centis * 10))
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Parse a strict `mm:ss.cc` string (digits only, no surrounding space).
    pub fn parse(s: &str) -> Option<Self> {
        let b = s.as_bytes();
        if b.len() != ANCHOR_LEN || b[2] != b':' || b[5] != b'.' {
            return None;
        }
        let two = |i: usize| -> Option<u64> {
            let (hi, lo) = (b[i], b[i + 1]);
            if hi.is_ascii_digit() && lo.is_ascii_digit() {
                Some(((hi - b'0') * 10 + (lo - b'0')) as u64)
            } else {
                None
            }
        };
        let mins = two(0)?;
        let secs = two(3)?;
        let centis = two(6)?;
        Some(Self::from_centis((mins * 60 + secs) * 100 + centis))
    }

    /// Elapsed time from `earlier` to `self` (zero if `earlier` is later).
    pub fn since(&self, earlier: PlaybackTime) -> Duration {
        self.duration.saturating_sub(earlier.duration)
    }

    pub fn add(&self, d: Duration) -> PlaybackTime {
        Self::from_duration(self.duration + d)
    }

    fn total_centis(&self) -> u64 {
        (self.duration.as_secs_f64() * 100.0).round() as u64
    }
}

impl fmt::Display for PlaybackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cs = self.total_centis();
        write!(f, "{:02}:{:02}.{:02}", cs / 6000, (cs % 6000) / 100, cs % 100)
    }
}

impl Serialize for PlaybackTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Look for an anchor on a whole notation line.
///
/// Returns the time and the column of its first character. Anything that is
/// not exactly one `mm:ss.cc` token is simply not an anchor.
pub fn anchor_in_line(line: &str) -> Option<(PlaybackTime, usize)> {
    let trimmed = line.trim();
    if trimmed.chars().count() != ANCHOR_LEN {
        return None;
    }
    let pt = PlaybackTime::parse(trimmed)?;
    let column = line.chars().take_while(|c| *c == ' ').count();
    Some((pt, column))
}
