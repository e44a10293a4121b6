//! Comment stripping.
//!
//! `//` starts a comment that runs to the end of the line. Lines that start
//! with `//` disappear entirely, which shifts every later row; the buffer
//! keeps the original row of each surviving line so editor positions can
//! still be mapped onto it.

pub const COMMENT_PREFIX: &str = "//";

/// Notation lines with comments removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineBuffer {
    lines: Vec<String>,
    /// Original 0-based row of each kept line.
    origin_rows: Vec<usize>,
    removed: usize,
}

impl LineBuffer {
    pub fn from_text(text: &str) -> Self {
        let mut buf = LineBuffer::default();
        for (row, line) in text.split('\n').enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.starts_with(COMMENT_PREFIX) {
                buf.removed += 1;
                continue;
            }
            let kept = match line.find(COMMENT_PREFIX) {
                Some(idx) => &line[..idx],
                None => line,
            };
            buf.lines.push(kept.to_string());
            buf.origin_rows.push(row);
        }
        buf
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of whole lines removed as comments.
    pub fn removed_lines(&self) -> usize {
        self.removed
    }

    /// Map a 0-based row of the original text to a row of this buffer.
    ///
    /// A row that was itself a comment maps to the next kept line.
    pub fn buffer_row(&self, original_row: usize) -> usize {
        self.origin_rows.partition_point(|&r| r < original_row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_whole_and_trailing_comments() {
        let buf = LineBuffer::from_text("// BPM: 120\nla la // hum\n\n// note\nend");
        assert_eq!(buf.lines(), &["la la ", "", "end"]);
        assert_eq!(buf.removed_lines(), 2);
    }

    #[test]
    fn maps_rows_around_removed_lines() {
        let buf = LineBuffer::from_text("// a\none\n// b\ntwo\nthree");
        assert_eq!(buf.buffer_row(1), 0);
        assert_eq!(buf.buffer_row(2), 1);
        assert_eq!(buf.buffer_row(3), 1);
        assert_eq!(buf.buffer_row(4), 2);
    }

    #[test]
    fn windows_line_endings() {
        let buf = LineBuffer::from_text("a\r\nb\r\n");
        assert_eq!(buf.lines(), &["a", "b", ""]);
    }
}
