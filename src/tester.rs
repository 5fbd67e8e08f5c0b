use crate::error::GrammarError;

/// Predicate over a single character
///
/// Testers are stateless beyond their construction parameters and can be
/// shared across many parses. Any `Fn(char) -> bool` closure is a tester.
pub trait CharTester {
    fn test(&self, ch: char) -> bool;
}

impl<F> CharTester for F
where
    F: Fn(char) -> bool,
{
    fn test(&self, ch: char) -> bool {
        self(ch)
    }
}

/// Matches exactly one character
pub struct SingleCharTester {
    expected: char,
}

impl SingleCharTester {
    pub fn new(expected: char) -> Self {
        SingleCharTester { expected }
    }
}

impl CharTester for SingleCharTester {
    fn test(&self, ch: char) -> bool {
        ch == self.expected
    }
}

/// Matches any character in an inclusive range
pub struct RangeCharTester {
    first: char,
    last: char,
}

impl RangeCharTester {
    /// Rejects inverted ranges at construction
    pub fn new(first: char, last: char) -> Result<Self, GrammarError> {
        if last < first {
            return Err(GrammarError::InvalidRange { first, last });
        }
        Ok(RangeCharTester { first, last })
    }
}

impl CharTester for RangeCharTester {
    fn test(&self, ch: char) -> bool {
        self.first <= ch && ch <= self.last
    }
}

/// Matches any character contained in a fixed set
pub struct SetCharTester {
    chars: Vec<char>,
}

impl SetCharTester {
    pub fn new(chars: &str) -> Self {
        SetCharTester {
            chars: chars.chars().collect(),
        }
    }
}

impl CharTester for SetCharTester {
    fn test(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }
}
