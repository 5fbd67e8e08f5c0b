use crate::grammar::Grammar;
use crate::parser::{Parse, ParseResult};
use crate::scanner::Scan;

/// Parser that matches any single character
///
/// Fails only at end of input.
#[derive(Debug, Default)]
pub struct AnyChar;

impl AnyChar {
    pub fn new() -> Self {
        AnyChar
    }
}

impl Parse for AnyChar {
    fn parse<'t>(&self, _grammar: &Grammar, scanner: &mut dyn Scan<'t>) -> ParseResult<'t> {
        let offset = scanner.offset();
        match scanner.read() {
            Some(ch) => Ok(scanner.create_match(offset, ch.len_utf8())),
            None => Ok(scanner.no_match()),
        }
    }
}
