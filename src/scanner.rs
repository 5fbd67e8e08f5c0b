use crate::matches::Match;

/// Cursor over an input character sequence
///
/// A scanner owns the parse position for one in-flight parse: every parser
/// node reads and advances it, and combinators rewind it by seeking back to
/// a saved offset after a failed attempt. Offsets are byte offsets into the
/// UTF-8 source; `read` advances one `char` at a time.
///
/// The scanner also doubles as the single construction path for matches, so
/// the span invariants live in one place instead of in every parser.
pub trait Scan<'t> {
    /// Current cursor position
    fn offset(&self) -> usize;

    /// Total length of the input in bytes
    fn len(&self) -> usize;

    /// Furthest offset the cursor has ever reached
    ///
    /// Backtracking seeks do not lower this, which makes it the natural
    /// position to report when a whole parse fails: the deepest point any
    /// alternative got to before giving up.
    fn furthest(&self) -> usize;

    /// The full source text
    fn source(&self) -> &'t str;

    /// Character at the cursor, without advancing; `None` at end of input
    fn peek(&self) -> Option<char>;

    /// Character at the cursor, advancing past it; `None` at end of input
    fn read(&mut self) -> Option<char>;

    /// Move the cursor to an absolute offset
    ///
    /// Used by combinators to rewind after a failed attempt. Panics if
    /// `offset` is outside `[0, len]` or not a character boundary; that is
    /// a bug in a combinator's rewind logic, not a recoverable condition.
    fn seek(&mut self, offset: usize);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True iff the cursor is past the last character
    fn at_end(&self) -> bool {
        self.offset() == self.len()
    }

    /// Slice of the source in `[offset, offset + length)`
    fn substring(&self, offset: usize, length: usize) -> &'t str {
        &self.source()[offset..offset + length]
    }

    /// A failed match at the current offset
    fn no_match(&self) -> Match<'t> {
        Match::failure(self.source(), self.offset())
    }

    /// A successful zero-length match at the current offset
    fn empty_match(&self) -> Match<'t> {
        Match::empty(self.source(), self.offset())
    }

    /// A successful match over `[offset, offset + length)`
    fn create_match(&self, offset: usize, length: usize) -> Match<'t> {
        Match::new(self.source(), offset, length)
    }
}
