//! Property-based tests for the combinator algebra: backtracking never
//! leaks consumed input, successful matches account for exactly what was
//! consumed, and sequencing is associative.

use proptest::prelude::*;
use rulegraph::{Grammar, ParserId, Scan, StringScanner};

/// seq(a, seq(b, c)) over single characters, plus its left-grouped twin
fn grouped_sequences(g: &mut Grammar) -> (ParserId, ParserId) {
    let a1 = g.ch('a');
    let b1 = g.ch('b');
    let c1 = g.ch('c');
    let ab = g.sequence(a1, b1);
    let left = g.sequence(ab, c1);

    let a2 = g.ch('a');
    let b2 = g.ch('b');
    let c2 = g.ch('c');
    let bc = g.sequence(b2, c2);
    let right = g.sequence(a2, bc);
    (left, right)
}

proptest! {
    #[test]
    fn failure_never_consumes(input in "[abx]{0,8}", start in 0usize..9) {
        let start = start.min(input.len());
        let mut g = Grammar::new();
        let a = g.ch('a');
        let b = g.ch('b');
        let seq = g.sequence(a, b);
        let x = g.ch('x');
        let xx = g.sequence(x, x);
        let parser = g.choice(seq, xx);

        let mut scanner = StringScanner::with_offset(&input, start);
        let m = g.parse(parser, &mut scanner).unwrap();
        if !m.success() {
            prop_assert_eq!(scanner.offset(), start);
        }
    }

    #[test]
    fn success_consumes_exactly_the_match(input in "[ab ]{0,10}", start in 0usize..11) {
        let start = start.min(input.len());
        let mut g = Grammar::new();
        let a = g.ch('a');
        let b = g.ch('b');
        let word_char = g.choice(a, b);
        let parser = g.one_or_more(word_char);

        let mut scanner = StringScanner::with_offset(&input, start);
        let m = g.parse(parser, &mut scanner).unwrap();
        if m.success() {
            prop_assert_eq!(m.offset(), start);
            prop_assert_eq!(scanner.offset(), m.end());
            prop_assert_eq!(m.value().len(), m.length());
        } else {
            prop_assert_eq!(scanner.offset(), start);
        }
    }

    #[test]
    fn sequence_grouping_is_associative(input in "[abcd]{0,6}") {
        let mut g = Grammar::new();
        let (left, right) = grouped_sequences(&mut g);

        let mut s1 = StringScanner::new(&input);
        let m1 = g.parse(left, &mut s1).unwrap();
        let mut s2 = StringScanner::new(&input);
        let m2 = g.parse(right, &mut s2).unwrap();

        prop_assert_eq!(m1.success(), m2.success());
        prop_assert_eq!(m1.offset(), m2.offset());
        prop_assert_eq!(m1.length(), m2.length());
        prop_assert_eq!(m1.value(), m2.value());
        prop_assert_eq!(s1.offset(), s2.offset());
    }

    #[test]
    fn repetition_respects_bounds(reps in 0usize..8, lower in 0usize..4, extra in 0usize..4) {
        let upper = lower + extra;
        let input = "x".repeat(reps);
        let mut g = Grammar::new();
        let x = g.ch('x');
        let rep = g.repeat(x, lower, Some(upper)).unwrap();

        let mut scanner = StringScanner::new(&input);
        let m = g.parse(rep, &mut scanner).unwrap();

        let achievable = reps.min(upper);
        if achievable >= lower {
            prop_assert!(m.success());
            prop_assert_eq!(m.length(), achievable);
            prop_assert_eq!(scanner.offset(), achievable);
        } else {
            prop_assert!(!m.success());
            prop_assert_eq!(scanner.offset(), 0);
        }
    }

    #[test]
    fn ordered_choice_prefers_first_alternative(input in "[ab]{1,6}") {
        // both alternatives can match the same head; the first must win
        let mut g = Grammar::new();
        let head = g.set("ab");
        let head2 = g.set("ab");
        let tail = g.zero_or_more(head2);
        let head3 = g.set("ab");
        let longer = g.sequence(head3, tail);
        let parser = g.choice(head, longer);

        let mut scanner = StringScanner::new(&input);
        let m = g.parse(parser, &mut scanner).unwrap();
        prop_assert!(m.success());
        prop_assert_eq!(m.length(), 1);
    }
}
