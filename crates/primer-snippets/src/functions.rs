//! Plain functions, multiple return values and callables as parameters.

use crate::{Context, Snippet, Topic, Transcript};

pub fn add(a: i32, b: i32) -> i32 {
    a + b
}

pub fn languages() -> (&'static str, &'static str) {
    ("java", "c")
}

/// Invokes `f` with 1 and hands back what it returned.
pub fn process<F>(f: F) -> i32
where
    F: Fn(i32) -> i32,
{
    f(1)
}

fn double(a: i32) -> i32 {
    a * 2
}

pub struct Functions;

impl Snippet for Functions {
    fn topic(&self) -> Topic {
        Topic::Functions
    }

    fn run(&self, _ctx: &Context, out: &mut Transcript) {
        out.line(add(3, 4));

        let (first, second) = languages();
        out.line(format!("{first} {second}"));

        let fixed = |_a: i32| 2;
        out.line(format!("closure: {}", process(fixed)));
        out.line(format!("fn item: {}", process(double)));
    }
}
