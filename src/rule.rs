use crate::debug::RuleTracer;
use crate::grammar::Grammar;
use crate::parser::{Parse, ParseResult, ParserId};
use crate::scanner::Scan;
use std::cell::RefCell;
use std::rc::Rc;

/// Named non-terminal with a patchable body
///
/// A rule gives a sub-grammar a stable identity and a mutable slot, which
/// is what makes forward references and (mutual) recursion expressible:
/// declare the rule first with `Grammar::rule` (its body starts as the
/// always-failing placeholder), wire the rest of the graph against its
/// id, then patch the real body in with `Grammar::define`. The body is
/// only ever reassigned during grammar construction, never during a
/// parse.
///
/// The engine does not memoize rule results and does not detect
/// non-productive left recursion; a rule that recurses into itself
/// without consuming input diverges.
pub struct Rule {
    name: String,
    body: ParserId,
    tracers: Vec<Rc<RefCell<dyn RuleTracer>>>,
}

impl Rule {
    pub(crate) fn new(name: &str, body: ParserId) -> Self {
        Rule {
            name: name.to_owned(),
            body,
            tracers: Vec::new(),
        }
    }

    /// Diagnostic name of the rule
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_body(&mut self, body: ParserId) {
        self.body = body;
    }

    pub(crate) fn attach_tracer(&mut self, tracer: Rc<RefCell<dyn RuleTracer>>) {
        self.tracers.push(tracer);
    }

    pub(crate) fn clear_tracers(&mut self) {
        self.tracers.clear();
    }
}

impl Parse for Rule {
    fn parse<'t>(&self, grammar: &Grammar, scanner: &mut dyn Scan<'t>) -> ParseResult<'t> {
        for tracer in &self.tracers {
            tracer.borrow_mut().entered(&self.name, scanner.offset());
        }
        let result = grammar.parse_at(self.body, scanner);
        if let Ok(m) = &result {
            for tracer in &self.tracers {
                tracer.borrow_mut().exited(&self.name, m);
            }
        }
        result
    }
}
