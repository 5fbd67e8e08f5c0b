use crate::grammar::Grammar;
use crate::parser::{Parse, ParseResult};
use crate::scanner::Scan;

/// Parser that always fails at the current offset
///
/// The placeholder body of a rule that has been declared but not yet
/// defined: referencing an unbuilt rule fails loudly instead of silently
/// matching anything.
#[derive(Debug, Default)]
pub struct Nothing;

impl Nothing {
    pub fn new() -> Self {
        Nothing
    }
}

impl Parse for Nothing {
    fn parse<'t>(&self, _grammar: &Grammar, scanner: &mut dyn Scan<'t>) -> ParseResult<'t> {
        Ok(scanner.no_match())
    }
}
