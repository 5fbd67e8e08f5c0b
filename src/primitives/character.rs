use crate::grammar::Grammar;
use crate::parser::{Parse, ParseResult};
use crate::scanner::Scan;
use crate::tester::CharTester;

/// Parser that matches a single character accepted by a tester
///
/// Succeeds with a length-one match when the tester accepts the character
/// at the cursor; fails without consuming otherwise.
pub struct CharParser {
    tester: Box<dyn CharTester>,
}

impl CharParser {
    pub fn new(tester: impl CharTester + 'static) -> Self {
        CharParser {
            tester: Box::new(tester),
        }
    }
}

impl Parse for CharParser {
    fn parse<'t>(&self, _grammar: &Grammar, scanner: &mut dyn Scan<'t>) -> ParseResult<'t> {
        match scanner.peek() {
            Some(ch) if self.tester.test(ch) => {
                let offset = scanner.offset();
                scanner.read();
                Ok(scanner.create_match(offset, ch.len_utf8()))
            }
            _ => Ok(scanner.no_match()),
        }
    }
}
