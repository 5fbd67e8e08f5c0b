//! # rulegraph - Backtracking Parser-Combinator Engine
//!
//! A recursive-descent parser engine built from composable parser nodes:
//! character-level primitives, sequence/choice/repetition/difference
//! combinators, and named rules that close recursive grammars. Grammars
//! are object graphs, not generated code: build the graph once, then
//! parse any number of inputs with it. The engine emphasizes:
//!
//! - **Ordered choice**: PEG-style alternation where the first matching
//!   alternative wins, never longest-match
//! - **Disciplined backtracking**: a failed sub-parse is observably a
//!   no-op on scanner state, enforced centrally rather than per combinator
//! - **Semantic actions**: callbacks fired with each matched value, so
//!   grammars can accumulate results without touching the combinators
//! - **Structured errors**: failures reported with 1-based line/column,
//!   a stable error id, and a message
//!
//! ```
//! use rulegraph::{Grammar, Scan, StringScanner};
//!
//! // ident := letter (letter | digit)*
//! let mut g = Grammar::new();
//! let letter = g.tester(|c: char| c.is_ascii_alphabetic());
//! let digit = g.range('0', '9').unwrap();
//! let tail_char = g.choice(letter, digit);
//! let tail = g.zero_or_more(tail_char);
//! let ident = g.rule("ident");
//! let body = g.sequence(letter, tail);
//! g.define(ident, body).unwrap();
//!
//! let mut scanner = StringScanner::new("x42 rest");
//! let m = g.parse(ident, &mut scanner).unwrap();
//! assert!(m.success());
//! assert_eq!(m.value(), "x42");
//! assert_eq!(scanner.offset(), 3);
//! ```

pub mod action;
pub mod choice;
pub mod debug;
pub mod difference;
pub mod error;
pub mod expect;
pub mod grammar;
pub mod matches;
pub mod parser;
pub mod primitives;
pub mod repetition;
pub mod rule;
pub mod scanner;
pub mod sequence;
pub mod string_scanner;
pub mod tester;

pub use action::{Action, append_to};
pub use debug::{RuleTracer, WriteTracer};
pub use error::{GrammarError, ParserError};
pub use grammar::Grammar;
pub use matches::Match;
pub use parser::{Parse, ParseResult, ParserId};
pub use scanner::Scan;
pub use string_scanner::StringScanner;
pub use tester::{CharTester, RangeCharTester, SetCharTester, SingleCharTester};
