use crate::error::GrammarError;
use crate::grammar::Grammar;
use crate::parser::{Parse, ParseResult, ParserId};
use crate::scanner::Scan;

/// Bounded repetition of a parser, greedy up to the upper bound
///
/// Matches the body repeatedly from the current offset until it fails,
/// the inclusive upper bound is reached, or the scanner hits end of
/// input. Fewer than `lower` repetitions fails the whole repetition and
/// rewinds to the pre-attempt offset; partial repetitions are never kept.
///
/// An unbounded repetition of a body that can match without consuming
/// input diverges, the same hazard as non-productive recursion through a
/// rule. The engine does not detect it.
pub struct Repetition {
    parser: ParserId,
    lower: usize,
    /// `None` means unbounded
    upper: Option<usize>,
}

impl Repetition {
    /// Inclusive bounds; rejects `upper < lower` at construction
    pub fn new(parser: ParserId, lower: usize, upper: Option<usize>) -> Result<Self, GrammarError> {
        if upper.is_some_and(|u| u < lower) {
            return Err(GrammarError::InvalidBounds {
                lower,
                upper: upper.unwrap_or(0),
            });
        }
        Ok(Repetition {
            parser,
            lower,
            upper,
        })
    }

    /// `lower` or more repetitions, no upper bound
    pub fn unbounded(parser: ParserId, lower: usize) -> Self {
        Repetition {
            parser,
            lower,
            upper: None,
        }
    }

    /// Zero or one repetition
    pub fn optional(parser: ParserId) -> Self {
        Repetition {
            parser,
            lower: 0,
            upper: Some(1),
        }
    }
}

impl Parse for Repetition {
    fn parse<'t>(&self, grammar: &Grammar, scanner: &mut dyn Scan<'t>) -> ParseResult<'t> {
        let start = scanner.offset();
        let mut total = scanner.empty_match();
        let mut count: usize = 0;

        while self.upper.is_none_or(|u| count < u) && !scanner.at_end() {
            let m = grammar.parse_at(self.parser, scanner)?;
            if !m.success() {
                break;
            }
            total = total.concat(&m);
            count += 1;
        }

        if count < self.lower {
            scanner.seek(start);
            return Ok(scanner.no_match());
        }
        Ok(total)
    }
}
