use crate::scanner::Scan;

/// Scanner over a borrowed string slice
///
/// Created once per parse invocation and mutated by every parser node
/// during descent. Re-seeking to 0 allows the same scanner to be reused
/// for several independent parses of the same input.
#[derive(Debug, Clone)]
pub struct StringScanner<'t> {
    text: &'t str,
    offset: usize,
    high_water: usize,
}

impl<'t> StringScanner<'t> {
    pub fn new(text: &'t str) -> Self {
        StringScanner {
            text,
            offset: 0,
            high_water: 0,
        }
    }

    /// Scanner starting at `offset` instead of 0
    ///
    /// Panics if `offset` is past the end of `text` or not a character
    /// boundary.
    pub fn with_offset(text: &'t str, offset: usize) -> Self {
        assert!(
            offset <= text.len() && text.is_char_boundary(offset),
            "invalid start offset {} for input of length {}",
            offset,
            text.len()
        );
        StringScanner {
            text,
            offset,
            high_water: offset,
        }
    }
}

impl<'t> Scan<'t> for StringScanner<'t> {
    fn offset(&self) -> usize {
        self.offset
    }

    fn len(&self) -> usize {
        self.text.len()
    }

    fn furthest(&self) -> usize {
        self.high_water
    }

    fn source(&self) -> &'t str {
        self.text
    }

    fn peek(&self) -> Option<char> {
        self.text[self.offset..].chars().next()
    }

    fn read(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.offset += ch.len_utf8();
        if self.offset > self.high_water {
            self.high_water = self.offset;
        }
        Some(ch)
    }

    fn seek(&mut self, offset: usize) {
        assert!(
            offset <= self.text.len() && self.text.is_char_boundary(offset),
            "seek to invalid offset {} in input of length {}",
            offset,
            self.text.len()
        );
        self.offset = offset;
        if offset > self.high_water {
            self.high_water = offset;
        }
    }
}
