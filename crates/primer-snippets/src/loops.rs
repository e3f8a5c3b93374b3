//! Loop forms: condition-only, counting, unconditional and range.

use crate::{Context, Snippet, Topic, Transcript};
use std::ops::Range;

/// Count `1..=limit` with a loop that only has a condition.
pub fn while_style(limit: u32) -> Vec<u32> {
    let mut seen = Vec::new();
    let mut i = 1;
    while i <= limit {
        seen.push(i);
        i += 1;
    }
    seen
}

/// Count `0..limit`, skipping `skip` with `continue`.
pub fn classic(limit: u32, skip: u32) -> Vec<u32> {
    let mut seen = Vec::new();
    for i in 0..limit {
        if i == skip {
            continue;
        }
        seen.push(i);
    }
    seen
}

/// An unconditional loop left with `break` once the counter hits `limit`.
pub fn infinite_until(limit: u32) -> Vec<u32> {
    let mut seen = Vec::new();
    let mut i = 0;
    loop {
        if i == limit {
            break;
        }
        seen.push(i);
        i += 1;
    }
    seen
}

/// First multiple of `step` strictly above `floor`; the loop yields it via `break`.
pub fn first_multiple_above(step: u32, floor: u32) -> u32 {
    let mut n = step;
    loop {
        if n > floor {
            break n;
        }
        n += step;
    }
}

/// Half-open: `range_of(3)` is 0, 1, 2.
pub fn range_of(n: u32) -> Range<u32> {
    0..n
}

pub struct Loops;

impl Snippet for Loops {
    fn topic(&self) -> Topic {
        Topic::Loops
    }

    fn run(&self, _ctx: &Context, out: &mut Transcript) {
        out.line("range 0..3 excludes 3:");
        for i in range_of(3) {
            out.line(i);
        }

        out.line("while i <= 3:");
        for i in while_style(3) {
            out.line(i);
        }

        out.line("for i in 0..3, skipping 2:");
        for i in classic(3, 2) {
            out.line(i);
        }

        out.line("loop until i == 3:");
        for i in infinite_until(3) {
            out.line(i);
        }

        out.line(format!(
            "loop breaking with a value: {}",
            first_multiple_above(7, 20)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_excludes_upper_bound() {
        assert_eq!(range_of(3).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(range_of(0).count(), 0);
    }

    #[test]
    fn test_while_style_is_inclusive() {
        assert_eq!(while_style(3), vec![1, 2, 3]);
        assert!(while_style(0).is_empty());
    }

    #[test]
    fn test_classic_continue() {
        assert_eq!(classic(3, 2), vec![0, 1]);
        assert_eq!(classic(4, 0), vec![1, 2, 3]);
    }

    #[test]
    fn test_infinite_until_breaks() {
        assert_eq!(infinite_until(3), vec![0, 1, 2]);
        assert!(infinite_until(0).is_empty());
    }

    #[test]
    fn test_break_value() {
        assert_eq!(first_multiple_above(7, 20), 21);
        assert_eq!(first_multiple_above(5, 0), 5);
    }
}
