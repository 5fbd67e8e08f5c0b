use crate::grammar::Grammar;
use crate::parser::{Parse, ParseResult, ParserId};
use crate::scanner::Scan;

/// And-not: the primary parser matches and the exclusion does not
///
/// The exclusion is probed at the same starting offset as the primary and
/// never consumes input; only the primary's match is kept.
pub struct Difference {
    parser: ParserId,
    exclusion: ParserId,
}

impl Difference {
    pub fn new(parser: ParserId, exclusion: ParserId) -> Self {
        Difference { parser, exclusion }
    }
}

impl Parse for Difference {
    fn parse<'t>(&self, grammar: &Grammar, scanner: &mut dyn Scan<'t>) -> ParseResult<'t> {
        let start = scanner.offset();

        let primary = grammar.parse_at(self.parser, scanner)?;
        if !primary.success() {
            return Ok(primary);
        }
        let after_primary = scanner.offset();

        // probe the exclusion from the shared starting offset
        scanner.seek(start);
        let excluded = grammar.parse_at(self.exclusion, scanner)?;
        if excluded.success() {
            scanner.seek(start);
            return Ok(scanner.no_match());
        }

        scanner.seek(after_primary);
        Ok(primary)
    }
}
