use crate::grammar::Grammar;
use crate::parser::{Parse, ParseResult, ParserId};
use crate::scanner::Scan;

/// Ordered alternation: the first alternative that matches wins
///
/// This is PEG-style prioritized choice, not longest-match. Once an
/// alternative has matched, a later failure in a sibling parser never
/// reopens the choice; grammars needing that must be restructured.
pub struct Choice {
    first: ParserId,
    second: ParserId,
}

impl Choice {
    pub fn new(first: ParserId, second: ParserId) -> Self {
        Choice { first, second }
    }
}

impl Parse for Choice {
    fn parse<'t>(&self, grammar: &Grammar, scanner: &mut dyn Scan<'t>) -> ParseResult<'t> {
        let first = grammar.parse_at(self.first, scanner)?;
        if first.success() {
            return Ok(first);
        }
        // the failed first alternative left the scanner untouched, so the
        // second one starts from the same offset
        grammar.parse_at(self.second, scanner)
    }
}

#[cfg(test)]
mod tests {
    use crate::grammar::Grammar;
    use crate::scanner::Scan;
    use crate::string_scanner::StringScanner;

    #[test]
    fn test_first_alternative_wins() {
        let mut g = Grammar::new();
        let a = g.ch('a');
        let b = g.ch('b');
        let choice = g.choice(a, b);

        let mut scanner = StringScanner::new("a");
        let m = g.parse(choice, &mut scanner).unwrap();
        assert!(m.success());
        assert_eq!(m.value(), "a");
    }

    #[test]
    fn test_second_alternative_from_same_offset() {
        let mut g = Grammar::new();
        let a = g.ch('a');
        let b = g.ch('b');
        let choice = g.choice(a, b);

        let mut scanner = StringScanner::new("b");
        let m = g.parse(choice, &mut scanner).unwrap();
        assert!(m.success());
        assert_eq!(m.value(), "b");
    }

    #[test]
    fn test_both_fail_restores_offset() {
        let mut g = Grammar::new();
        let a = g.ch('a');
        let b = g.ch('b');
        let choice = g.choice(a, b);

        let mut scanner = StringScanner::new("x");
        let m = g.parse(choice, &mut scanner).unwrap();
        assert!(!m.success());
        assert_eq!(scanner.offset(), 0);
    }

    #[test]
    fn test_ordered_not_longest_match() {
        // first alternative matches "a", second would match "ab"; ordered
        // choice picks the first even though the second is longer
        let mut g = Grammar::new();
        let a = g.ch('a');
        let a2 = g.ch('a');
        let b = g.ch('b');
        let ab = g.sequence(a2, b);
        let choice = g.choice(a, ab);

        let mut scanner = StringScanner::new("ab");
        let m = g.parse(choice, &mut scanner).unwrap();
        assert!(m.success());
        assert_eq!(m.value(), "a");
        assert_eq!(m.length(), 1);
        assert_eq!(scanner.offset(), 1);
    }

    #[test]
    fn test_choice_of_folds_alternatives() {
        let mut g = Grammar::new();
        let a = g.ch('a');
        let b = g.ch('b');
        let c = g.ch('c');
        let choice = g.choice_of(&[a, b, c]);

        for input in ["a", "b", "c"] {
            let mut scanner = StringScanner::new(input);
            let m = g.parse(choice, &mut scanner).unwrap();
            assert!(m.success(), "input {:?}", input);
            assert_eq!(m.value(), input);
        }

        let mut scanner = StringScanner::new("x");
        assert!(!g.parse(choice, &mut scanner).unwrap().success());
    }

    #[test]
    fn test_failed_left_alternative_leaves_no_trace() {
        // the left alternative consumes "a" before failing on 'c'; the
        // right alternative must still see the input from the beginning
        let mut g = Grammar::new();
        let a1 = g.ch('a');
        let c = g.ch('c');
        let ac = g.sequence(a1, c);
        let a2 = g.ch('a');
        let b = g.ch('b');
        let ab = g.sequence(a2, b);
        let choice = g.choice(ac, ab);

        let mut scanner = StringScanner::new("ab");
        let m = g.parse(choice, &mut scanner).unwrap();
        assert!(m.success());
        assert_eq!(m.value(), "ab");
    }
}
