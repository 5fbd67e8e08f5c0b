use crate::parser::ParserId;
use crate::scanner::Scan;
use thiserror::Error;

/// Misuse of the grammar-building API
///
/// These are programmer errors in grammar construction and surface
/// immediately at build time, never during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("invalid character range: {first:?} is greater than {last:?}")]
    InvalidRange { first: char, last: char },

    #[error("invalid repetition bounds: upper bound {upper} is less than lower bound {lower}")]
    InvalidBounds { lower: usize, upper: usize },

    #[error("parser {0:?} is not a rule")]
    NotARule(ParserId),
}

/// Reported, diagnosable parse failure
///
/// Carries a 1-based line/column location resolved from a byte offset, a
/// short stable error identifier, and a free-text description. Produced
/// only at the "parse or report" boundary and by `Expect` nodes; plain
/// combinator failure is a value, never this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parser error at line {line}, column {column}: {error_text} ({error_id})")]
pub struct ParserError {
    pub file_name: Option<String>,
    pub line: u64,
    pub column: u64,
    pub error_id: String,
    pub error_text: String,
}

impl ParserError {
    /// Resolve `offset` against the scanner's source and build an error
    pub fn from_scan(
        scanner: &dyn Scan<'_>,
        offset: usize,
        error_id: &str,
        error_text: &str,
        file_name: Option<&str>,
    ) -> Self {
        let (line, column) = line_column(scanner.source(), offset);
        ParserError {
            file_name: file_name.map(str::to_owned),
            line,
            column,
            error_id: error_id.to_owned(),
            error_text: error_text.to_owned(),
        }
    }
}

/// Convert a byte offset into 1-based line and column
///
/// Rescans the input from the start, counting line terminators up to the
/// target offset. O(offset), which is fine on the rare failure path.
fn line_column(text: &str, offset: usize) -> (u64, u64) {
    let mut line: u64 = 1;
    let mut line_start = 0usize;
    for (i, byte) in text.bytes().enumerate() {
        if i >= offset {
            break;
        }
        if byte == b'\n' {
            line += 1;
            line_start = i + 1;
        }
    }
    (line, 1 + (offset - line_start) as u64)
}
