/// Outcome of a parse attempt: a span over the source plus a success flag
///
/// A failed match carries the offset where the attempt started and an empty
/// span. Matches are immutable; `concat` produces a new match covering two
/// contiguous spans rather than mutating either operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'t> {
    source: &'t str,
    offset: usize,
    length: usize,
    success: bool,
}

impl<'t> Match<'t> {
    /// Create a successful match over `source[offset..offset + length]`
    pub fn new(source: &'t str, offset: usize, length: usize) -> Self {
        debug_assert!(offset + length <= source.len());
        Match {
            source,
            offset,
            length,
            success: true,
        }
    }

    /// Create a successful zero-length match at `offset`
    pub fn empty(source: &'t str, offset: usize) -> Self {
        Match::new(source, offset, 0)
    }

    /// Create a failed match at `offset`
    pub fn failure(source: &'t str, offset: usize) -> Self {
        Match {
            source,
            offset,
            length: 0,
            success: false,
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    /// Start of the matched span (byte offset into the source)
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the matched span in bytes
    pub fn length(&self) -> usize {
        self.length
    }

    /// Offset one past the end of the matched span
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The source text this match was produced from
    pub fn source(&self) -> &'t str {
        self.source
    }

    /// The matched text (empty for failed and zero-length matches)
    pub fn value(&self) -> &'t str {
        &self.source[self.offset..self.offset + self.length]
    }

    /// Join two contiguous successful matches into one
    ///
    /// `other` must start exactly where `self` ends. Associative: folding a
    /// run of adjacent matches gives the same span regardless of grouping.
    pub fn concat(&self, other: &Match<'t>) -> Match<'t> {
        debug_assert!(self.success && other.success);
        debug_assert_eq!(self.end(), other.offset);
        Match::new(self.source, self.offset, self.length + other.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_is_successful() {
        let m = Match::new("hello", 1, 3);
        assert!(m.success());
        assert_eq!(m.offset(), 1);
        assert_eq!(m.length(), 3);
        assert_eq!(m.end(), 4);
        assert_eq!(m.value(), "ell");
        assert!(!m.is_empty());
    }

    #[test]
    fn test_empty_match() {
        let m = Match::empty("hello", 2);
        assert!(m.success());
        assert!(m.is_empty());
        assert_eq!(m.offset(), 2);
        assert_eq!(m.value(), "");
    }

    #[test]
    fn test_failed_match() {
        let m = Match::failure("hello", 3);
        assert!(!m.success());
        assert!(m.is_empty());
        assert_eq!(m.offset(), 3);
        assert_eq!(m.value(), "");
    }

    #[test]
    fn test_concat_contiguous() {
        let source = "abcdef";
        let left = Match::new(source, 0, 2);
        let right = Match::new(source, 2, 3);
        let joined = left.concat(&right);
        assert!(joined.success());
        assert_eq!(joined.offset(), 0);
        assert_eq!(joined.length(), 5);
        assert_eq!(joined.value(), "abcde");
    }

    #[test]
    fn test_concat_with_empty() {
        let source = "abc";
        let empty = Match::empty(source, 0);
        let rest = Match::new(source, 0, 3);
        let joined = empty.concat(&rest);
        assert_eq!(joined.value(), "abc");
    }

    #[test]
    fn test_concat_is_associative() {
        let source = "abcdef";
        let a = Match::new(source, 0, 2);
        let b = Match::new(source, 2, 2);
        let c = Match::new(source, 4, 2);
        let left_first = a.concat(&b).concat(&c);
        let right_first = a.concat(&b.concat(&c));
        assert_eq!(left_first, right_first);
    }

    #[test]
    fn test_whole_input_match() {
        let m = Match::new("xyz", 0, 3);
        assert_eq!(m.value(), "xyz");
        assert_eq!(m.end(), 3);
    }
}
