use crate::grammar::Grammar;
use crate::parser::{Parse, ParseResult, ParserId};
use crate::scanner::Scan;

/// Combinator that matches two parsers one after the other
///
/// Partial consumption is never a valid outcome: when the second parser
/// fails, the scanner is rewound to the sequence's own starting offset,
/// not just past the first part's match.
pub struct Sequence {
    first: ParserId,
    second: ParserId,
}

impl Sequence {
    pub fn new(first: ParserId, second: ParserId) -> Self {
        Sequence { first, second }
    }
}

impl Parse for Sequence {
    fn parse<'t>(&self, grammar: &Grammar, scanner: &mut dyn Scan<'t>) -> ParseResult<'t> {
        let start = scanner.offset();

        let first = grammar.parse_at(self.first, scanner)?;
        if !first.success() {
            return Ok(scanner.no_match());
        }

        let second = grammar.parse_at(self.second, scanner)?;
        if !second.success() {
            scanner.seek(start);
            return Ok(scanner.no_match());
        }

        Ok(first.concat(&second))
    }
}
