use crate::action::Action;
use crate::choice::Choice;
use crate::debug::RuleTracer;
use crate::difference::Difference;
use crate::error::{GrammarError, ParserError};
use crate::expect::Expect;
use crate::matches::Match;
use crate::parser::{Parse, ParseResult, ParserId};
use crate::primitives::{AnyChar, CharParser, End, Nothing};
use crate::repetition::Repetition;
use crate::rule::Rule;
use crate::scanner::Scan;
use crate::sequence::Sequence;
use crate::string_scanner::StringScanner;
use crate::tester::{CharTester, RangeCharTester, SetCharTester, SingleCharTester};
use std::cell::RefCell;
use std::rc::Rc;

enum NodeKind {
    Plain(Box<dyn Parse>),
    Rule(Rule),
}

struct Node {
    kind: NodeKind,
    actions: RefCell<Vec<Action>>,
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Node {
            kind,
            actions: RefCell::new(Vec::new()),
        }
    }
}

/// Arena of parser nodes forming one grammar graph
///
/// Every combinator lives in a slot of this arena and refers to its
/// children by [`ParserId`], so a rule's body can point back at parsers
/// that were created after it (forward references) or at the rule itself
/// (recursion) without any ownership cycles. Redefining a rule is just
/// updating its slot.
///
/// A grammar is built once, up front, and is then only read during
/// parsing; the one mutable resource of a parse is the scanner.
#[derive(Default)]
pub struct Grammar {
    nodes: Vec<Node>,
}

impl Grammar {
    pub fn new() -> Self {
        Grammar { nodes: Vec::new() }
    }

    /// Insert any parser node and get its id
    pub fn add(&mut self, parser: impl Parse + 'static) -> ParserId {
        self.push(NodeKind::Plain(Box::new(parser)))
    }

    fn push(&mut self, kind: NodeKind) -> ParserId {
        let id = ParserId(self.nodes.len());
        self.nodes.push(Node::new(kind));
        id
    }

    // ---- leaf constructors -------------------------------------------

    /// Parser for one specific character
    pub fn ch(&mut self, expected: char) -> ParserId {
        self.add(CharParser::new(SingleCharTester::new(expected)))
    }

    /// Parser for one character accepted by an arbitrary tester
    pub fn tester(&mut self, tester: impl CharTester + 'static) -> ParserId {
        self.add(CharParser::new(tester))
    }

    /// Parser for one character in an inclusive range
    pub fn range(&mut self, first: char, last: char) -> Result<ParserId, GrammarError> {
        Ok(self.tester(RangeCharTester::new(first, last)?))
    }

    /// Parser for one character out of a fixed set
    pub fn set(&mut self, chars: &str) -> ParserId {
        self.tester(SetCharTester::new(chars))
    }

    /// Parser for any single character
    pub fn any_char(&mut self) -> ParserId {
        self.add(AnyChar::new())
    }

    /// Parser asserting end of input
    pub fn end(&mut self) -> ParserId {
        self.add(End::new())
    }

    /// Parser that always fails
    pub fn nothing(&mut self) -> ParserId {
        self.add(Nothing::new())
    }

    // ---- combinators -------------------------------------------------

    pub fn sequence(&mut self, first: ParserId, second: ParserId) -> ParserId {
        self.add(Sequence::new(first, second))
    }

    /// Left fold of [`sequence`](Self::sequence) over a slice
    ///
    /// An empty slice yields the always-failing parser.
    pub fn sequence_of(&mut self, parsers: &[ParserId]) -> ParserId {
        match parsers.split_first() {
            None => self.nothing(),
            Some((&head, rest)) => rest.iter().fold(head, |acc, &p| self.sequence(acc, p)),
        }
    }

    pub fn choice(&mut self, first: ParserId, second: ParserId) -> ParserId {
        self.add(Choice::new(first, second))
    }

    /// Left fold of [`choice`](Self::choice) over a slice
    ///
    /// An empty slice yields the always-failing parser.
    pub fn choice_of(&mut self, parsers: &[ParserId]) -> ParserId {
        match parsers.split_first() {
            None => self.nothing(),
            Some((&head, rest)) => rest.iter().fold(head, |acc, &p| self.choice(acc, p)),
        }
    }

    /// Repetition with inclusive bounds; `None` upper bound is unbounded
    pub fn repeat(
        &mut self,
        parser: ParserId,
        lower: usize,
        upper: Option<usize>,
    ) -> Result<ParserId, GrammarError> {
        Ok(self.add(Repetition::new(parser, lower, upper)?))
    }

    pub fn zero_or_more(&mut self, parser: ParserId) -> ParserId {
        self.add(Repetition::unbounded(parser, 0))
    }

    pub fn one_or_more(&mut self, parser: ParserId) -> ParserId {
        self.add(Repetition::unbounded(parser, 1))
    }

    pub fn optional(&mut self, parser: ParserId) -> ParserId {
        self.add(Repetition::optional(parser))
    }

    /// `parser` and-not `exclusion`
    pub fn difference(&mut self, parser: ParserId, exclusion: ParserId) -> ParserId {
        self.add(Difference::new(parser, exclusion))
    }

    /// Treat failure of `parser` as a fatal, reported error
    pub fn expect(&mut self, error_id: &str, error_text: &str, parser: ParserId) -> ParserId {
        self.add(Expect::new(error_id, error_text, parser))
    }

    /// Like [`expect`](Self::expect), additionally requiring `predicate`
    /// to accept the successful match
    pub fn expect_if<F>(
        &mut self,
        predicate: F,
        error_id: &str,
        error_text: &str,
        parser: ParserId,
    ) -> ParserId
    where
        F: Fn(&Match<'_>) -> bool + 'static,
    {
        self.add(Expect::with_predicate(predicate, error_id, error_text, parser))
    }

    // ---- rules -------------------------------------------------------

    /// Declare a named rule with the always-failing placeholder body
    pub fn rule(&mut self, name: &str) -> ParserId {
        let placeholder = self.nothing();
        self.push(NodeKind::Rule(Rule::new(name, placeholder)))
    }

    /// Assign (or reassign) a rule's body
    pub fn define(&mut self, rule: ParserId, body: ParserId) -> Result<(), GrammarError> {
        match &mut self.nodes[rule.index()].kind {
            NodeKind::Rule(r) => {
                r.set_body(body);
                Ok(())
            }
            NodeKind::Plain(_) => Err(GrammarError::NotARule(rule)),
        }
    }

    /// Diagnostic name of a rule node, `None` for other nodes
    pub fn rule_name(&self, id: ParserId) -> Option<&str> {
        match &self.nodes[id.index()].kind {
            NodeKind::Rule(r) => Some(r.name()),
            NodeKind::Plain(_) => None,
        }
    }

    /// Look a declared rule up by name
    pub fn find_rule(&self, name: &str) -> Option<ParserId> {
        self.nodes.iter().position(|node| match &node.kind {
            NodeKind::Rule(r) => r.name() == name,
            NodeKind::Plain(_) => false,
        })
        .map(ParserId)
    }

    // ---- actions and tracing -----------------------------------------

    /// Register a semantic action on any node
    ///
    /// Actions fire in registration order after the node matches. An
    /// action must not re-enter the grammar that is firing it.
    pub fn act<F>(&mut self, target: ParserId, action: F)
    where
        F: FnMut(&Match<'_>) + 'static,
    {
        self.nodes[target.index()]
            .actions
            .get_mut()
            .push(Box::new(action));
    }

    /// Attach a diagnostic tracer to a rule
    pub fn attach_tracer(
        &mut self,
        rule: ParserId,
        tracer: Rc<RefCell<dyn RuleTracer>>,
    ) -> Result<(), GrammarError> {
        match &mut self.nodes[rule.index()].kind {
            NodeKind::Rule(r) => {
                r.attach_tracer(tracer);
                Ok(())
            }
            NodeKind::Plain(_) => Err(GrammarError::NotARule(rule)),
        }
    }

    /// Detach all tracers from a rule
    pub fn clear_tracers(&mut self, rule: ParserId) -> Result<(), GrammarError> {
        match &mut self.nodes[rule.index()].kind {
            NodeKind::Rule(r) => {
                r.clear_tracers();
                Ok(())
            }
            NodeKind::Plain(_) => Err(GrammarError::NotARule(rule)),
        }
    }

    // ---- parsing -----------------------------------------------------

    /// Parse with the node `root` from the scanner's current position
    pub fn parse<'t>(&self, root: ParserId, scanner: &mut dyn Scan<'t>) -> ParseResult<'t> {
        self.parse_at(root, scanner)
    }

    /// Dispatch to one node, enforcing the backtracking discipline
    ///
    /// This is the single choke point every parser invocation goes
    /// through: the offset is snapshotted before dispatch and restored
    /// whenever the node reports failure, so a failed sub-parse is
    /// observably a no-op on scanner state even if a `Parse`
    /// implementation mishandles its own rewind. On success, the node's
    /// semantic actions fire here.
    pub fn parse_at<'t>(&self, id: ParserId, scanner: &mut dyn Scan<'t>) -> ParseResult<'t> {
        let node = &self.nodes[id.index()];
        let start = scanner.offset();
        let result = match &node.kind {
            NodeKind::Plain(parser) => parser.parse(self, scanner),
            NodeKind::Rule(rule) => rule.parse(self, scanner),
        };
        match result {
            Ok(m) if m.success() => {
                for action in node.actions.borrow_mut().iter_mut() {
                    action(&m);
                }
                Ok(m)
            }
            Ok(_) => {
                scanner.seek(start);
                Ok(scanner.no_match())
            }
            Err(error) => Err(error),
        }
    }

    /// Parse and convert failure into a reported [`ParserError`]
    ///
    /// The error is located at the furthest offset the scanner reached
    /// during the attempt, which is the deepest point any alternative got
    /// to before the grammar gave up.
    pub fn parse_or_report<'t>(
        &self,
        root: ParserId,
        scanner: &mut dyn Scan<'t>,
        file_name: Option<&str>,
        error_id: &str,
        error_text: &str,
    ) -> Result<Match<'t>, ParserError> {
        let m = self.parse_at(root, scanner)?;
        if m.success() {
            return Ok(m);
        }
        Err(ParserError::from_scan(
            scanner,
            scanner.furthest(),
            error_id,
            error_text,
            file_name,
        ))
    }

    /// Convenience wrapper: parse a whole string with `root`
    pub fn parse_str<'t>(&self, root: ParserId, input: &'t str) -> ParseResult<'t> {
        let mut scanner = StringScanner::new(input);
        self.parse_at(root, &mut scanner)
    }
}
