use crate::matches::Match;
use std::cell::RefCell;
use std::rc::Rc;

/// Semantic action fired after a node matches
///
/// Listeners are registered with `Grammar::act`, invoked synchronously in
/// registration order with the completed match, and never invoked on
/// failure. Side effects are entirely the listener's business; listeners
/// typically push onto an evaluation stack or append to an output
/// collection through shared state (`Rc<RefCell<...>>`).
///
/// Actions fire as soon as their own node matches, even if an enclosing
/// combinator later fails and backtracks past it; grammars whose actions
/// are not idempotent should only attach them above backtrack points.
pub type Action = Box<dyn FnMut(&Match<'_>)>;

/// Action that appends each matched value to a shared collection
pub fn append_to(buffer: Rc<RefCell<Vec<String>>>) -> Action {
    Box::new(move |m: &Match<'_>| buffer.borrow_mut().push(m.value().to_owned()))
}
