use crate::matches::Match;
use std::io;

/// Observer for rule entry and exit during a parse
///
/// Purely diagnostic: attaching or detaching tracers never changes parse
/// results. One tracer (behind `Rc<RefCell<...>>`) is typically shared by
/// several rules so it can keep a single indentation depth across them.
pub trait RuleTracer {
    /// Called before the rule's body is tried, with the current offset
    fn entered(&mut self, rule: &str, offset: usize);

    /// Called after the body returned, with the resulting match
    fn exited(&mut self, rule: &str, matched: &Match<'_>);
}

/// Tracer that writes indented enter/exit lines to any `io::Write`
pub struct WriteTracer<W: io::Write> {
    out: W,
    depth: usize,
}

impl<W: io::Write> WriteTracer<W> {
    pub fn new(out: W) -> Self {
        WriteTracer { out, depth: 0 }
    }

    /// The underlying writer, for inspecting captured output
    pub fn get_ref(&self) -> &W {
        &self.out
    }
}

impl<W: io::Write> RuleTracer for WriteTracer<W> {
    fn entered(&mut self, rule: &str, offset: usize) {
        // trace output is best effort; never fail the parse over it
        let _ = writeln!(self.out, "{}{}? at {}", "  ".repeat(self.depth), rule, offset);
        self.depth += 1;
    }

    fn exited(&mut self, rule: &str, matched: &Match<'_>) {
        self.depth = self.depth.saturating_sub(1);
        let outcome = if matched.success() {
            "matched"
        } else {
            "failed"
        };
        let _ = writeln!(
            self.out,
            "{}{} {}",
            "  ".repeat(self.depth),
            rule,
            outcome
        );
    }
}
