//! Variable-length argument lists.

use crate::{Context, Snippet, Topic, Transcript};
use std::fmt::Display;

pub fn sum(nums: &[i32]) -> i32 {
    nums.iter().sum()
}

/// `sum!(1, 2, 3)` collects its arguments into a slice for [`sum`].
#[macro_export]
macro_rules! sum {
    ($($n:expr),* $(,)?) => {
        $crate::variadic::sum(&[$($n),*])
    };
}

/// Arguments of any displayable type, joined by spaces.
pub fn describe_all(items: &[&dyn Display]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub struct Variadic;

impl Snippet for Variadic {
    fn topic(&self) -> Topic {
        Topic::Variadic
    }

    fn run(&self, _ctx: &Context, out: &mut Transcript) {
        out.line(sum!(1, 2, 3, 4, 5, 6));

        let nums = vec![1, 2, 3, 4];
        out.line(sum(&nums));

        out.line(describe_all(&[&1, &"two", &3.5, &true]));
    }
}
