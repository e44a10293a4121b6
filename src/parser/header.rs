//! Songsheet title block.
//!
//! Four lines; every field below the first line is found at a fixed offset
//! from the column where `DATE:` starts:
//!
//! ```text
//! Wild Horses                DATE:2021-03-04
//! (live version) |           4 92        E A D
//!                            4       02  G B E
//! ---------------------------------------------
//! ```
//!
//! `DATE:` column + 0: time signature (top / bottom), + 2..5: BPM,
//! + 8..10: capo, + 11..17: tuning keys, two characters each.

use crate::model::Header;

pub(crate) const HEADER_LINES: usize = 4;
const DATE_MARK: &str = "DATE:";

/// Characters `start..end` of `line`, trimmed; blank where the line is short.
fn field(line: &[char], start: usize, end: usize) -> String {
    let end = end.min(line.len());
    if start >= end {
        return String::new();
    }
    line[start..end].iter().collect::<String>().trim().to_string()
}

/// Parse the title block at the top of `lines`, if there is one.
///
/// Returns the header and the number of lines it used.
pub(crate) fn parse_header(lines: &[String]) -> Option<(Header, usize)> {
    if lines.len() < HEADER_LINES {
        return None;
    }
    let byte_pos = lines[0].find(DATE_MARK)?;
    let title = lines[0][..byte_pos].trim_end().to_string();
    let date = lines[0][byte_pos + DATE_MARK.len()..].trim().to_string();
    let p = lines[0][..byte_pos].chars().count();

    let title_line2 = match lines[1].split_once('|') {
        Some((before, _)) => before.trim_end().to_string(),
        None => String::new(),
    };

    let top: Vec<char> = lines[1].chars().collect();
    let bottom: Vec<char> = lines[2].chars().collect();

    let header = Header {
        title,
        title_line2,
        date,
        time_sig_top: field(&top, p, p + 1),
        time_sig_bottom: field(&bottom, p, p + 1),
        bpm: field(&top, p + 2, p + 5),
        capo: field(&bottom, p + 8, p + 10),
        tuning: [
            field(&top, p + 11, p + 13),
            field(&top, p + 13, p + 15),
            field(&top, p + 15, p + 17),
            field(&bottom, p + 11, p + 13),
            field(&bottom, p + 13, p + 15),
            field(&bottom, p + 15, p + 17),
        ],
    };
    Some((header, HEADER_LINES))
}
