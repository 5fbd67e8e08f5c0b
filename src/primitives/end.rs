use crate::grammar::Grammar;
use crate::parser::{Parse, ParseResult};
use crate::scanner::Scan;

/// Parser that succeeds with an empty match only at end of input
///
/// Used to assert full-input consumption at the tail of a root grammar.
#[derive(Debug, Default)]
pub struct End;

impl End {
    pub fn new() -> Self {
        End
    }
}

impl Parse for End {
    fn parse<'t>(&self, _grammar: &Grammar, scanner: &mut dyn Scan<'t>) -> ParseResult<'t> {
        if scanner.at_end() {
            Ok(scanner.empty_match())
        } else {
            Ok(scanner.no_match())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::string_scanner::StringScanner;

    #[test]
    fn test_succeeds_on_empty_input() {
        let grammar = Grammar::new();
        let mut scanner = StringScanner::new("");
        let m = End::new().parse(&grammar, &mut scanner).unwrap();
        assert!(m.success());
        assert!(m.is_empty());
        assert_eq!(m.offset(), 0);
    }

    #[test]
    fn test_fails_before_end() {
        let grammar = Grammar::new();
        let mut scanner = StringScanner::new("a");
        let m = End::new().parse(&grammar, &mut scanner).unwrap();
        assert!(!m.success());
        assert_eq!(scanner.offset(), 0);
    }

    #[test]
    fn test_succeeds_after_consuming_everything() {
        let grammar = Grammar::new();
        let mut scanner = StringScanner::new("ab");
        scanner.seek(2);
        let m = End::new().parse(&grammar, &mut scanner).unwrap();
        assert!(m.success());
        assert_eq!(m.offset(), 2);
    }
}
