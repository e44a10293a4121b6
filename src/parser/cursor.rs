//! Character cursor with bounded lookahead for scanning annotation lines.

/// Scans one line left to right. Positions past the end read as a space,
/// so lookahead never needs bounds checks at the call site.
pub(crate) struct ScanCursor {
    chars: Vec<char>,
    pos: usize,
}

impl ScanCursor {
    pub(crate) fn new(line: &str) -> Self {
        Self {
            chars: line.chars().collect(),
            pos: 0,
        }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Character `k` places ahead of the cursor (`peek(0)` is the current one).
    pub(crate) fn peek(&self, k: usize) -> char {
        self.chars.get(self.pos + k).copied().unwrap_or(' ')
    }

    pub(crate) fn advance(&mut self, n: usize) {
        self.pos += n;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookahead_past_end_is_blank() {
        let mut c = ScanCursor::new("Am");
        assert_eq!(c.peek(0), 'A');
        assert_eq!(c.peek(1), 'm');
        assert_eq!(c.peek(2), ' ');
        c.advance(2);
        assert!(c.at_end());
        assert_eq!(c.peek(0), ' ');
    }
}
