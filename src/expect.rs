use crate::error::ParserError;
use crate::grammar::Grammar;
use crate::matches::Match;
use crate::parser::{Parse, ParseResult, ParserId};
use crate::scanner::Scan;

/// Combinator that turns local failure into a fatal, reported error
///
/// Everywhere else in the engine, failure is a value the enclosing
/// combinator backtracks over. Wrapping a parser in `Expect` marks the
/// point where the grammar author has committed: once parsing reaches
/// here, the wrapped parser *must* match, and a failure is reported with
/// an error id, message, and the line/column of the current offset.
///
/// An optional predicate over the successful match extends the same
/// treatment to semantic checks (e.g. rejecting a duplicate definition).
pub struct Expect {
    error_id: String,
    error_text: String,
    parser: ParserId,
    predicate: Option<Box<dyn Fn(&Match<'_>) -> bool>>,
}

impl Expect {
    pub fn new(error_id: &str, error_text: &str, parser: ParserId) -> Self {
        Expect {
            error_id: error_id.to_owned(),
            error_text: error_text.to_owned(),
            parser,
            predicate: None,
        }
    }

    /// Also require `predicate` to accept the successful match
    pub fn with_predicate<F>(predicate: F, error_id: &str, error_text: &str, parser: ParserId) -> Self
    where
        F: Fn(&Match<'_>) -> bool + 'static,
    {
        Expect {
            error_id: error_id.to_owned(),
            error_text: error_text.to_owned(),
            parser,
            predicate: Some(Box::new(predicate)),
        }
    }

    fn error(&self, scanner: &dyn Scan<'_>, offset: usize) -> ParserError {
        ParserError::from_scan(scanner, offset, &self.error_id, &self.error_text, None)
    }
}

impl Parse for Expect {
    fn parse<'t>(&self, grammar: &Grammar, scanner: &mut dyn Scan<'t>) -> ParseResult<'t> {
        let start = scanner.offset();
        let m = grammar.parse_at(self.parser, scanner)?;
        if !m.success() {
            return Err(self.error(scanner, start));
        }
        if let Some(predicate) = &self.predicate {
            if !predicate(&m) {
                return Err(self.error(scanner, m.offset()));
            }
        }
        Ok(m)
    }
}
