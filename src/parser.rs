use crate::error::ParserError;
use crate::grammar::Grammar;
use crate::matches::Match;
use crate::scanner::Scan;

/// Result of one parse attempt
///
/// Local match failure is *not* an error: it is `Ok` with an unsuccessful
/// [`Match`], and the enclosing combinator recovers by rewinding. The `Err`
/// arm carries only fatal, reported failures, raised by [`Expect`] nodes
/// and by `Grammar::parse_or_report`.
///
/// [`Expect`]: crate::expect::Expect
pub type ParseResult<'t> = Result<Match<'t>, ParserError>;

/// Index of a parser node in its [`Grammar`] arena
///
/// Ids are plain indices and are only meaningful for the grammar that
/// issued them; using one with a different grammar is out of contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParserId(pub(crate) usize);

impl ParserId {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// Core trait for parser nodes
///
/// Children are referenced by [`ParserId`] and resolved through the
/// grammar, so implementations dispatch via `Grammar::parse_at` rather
/// than owning sub-parsers directly.
pub trait Parse {
    /// Attempt to parse from the scanner's current position
    ///
    /// On success the scanner ends up exactly at the end of the returned
    /// match; on failure the scanner is left where it started (the central
    /// dispatch in `Grammar::parse_at` restores it even if an
    /// implementation forgets to).
    fn parse<'t>(&self, grammar: &Grammar, scanner: &mut dyn Scan<'t>) -> ParseResult<'t>;
}
