//! Closures that own captured state.

use crate::{Context, Snippet, Topic, Transcript};

/// A counter whose state lives inside the returned closure. Each call bumps
/// and returns it; separate counters never share a count.
pub fn counter() -> impl FnMut() -> u32 {
    let mut count = 0;
    move || {
        count += 1;
        count
    }
}

/// Boxed form, for when counters have to be stored side by side.
pub type Counter = Box<dyn FnMut() -> u32>;

pub fn boxed_counter() -> Counter {
    Box::new(counter())
}

pub struct Closures;

impl Snippet for Closures {
    fn topic(&self) -> Topic {
        Topic::Closures
    }

    fn run(&self, _ctx: &Context, out: &mut Transcript) {
        let mut increment = counter();
        out.line(increment());
        out.line(increment());

        let mut fresh = counter();
        out.line(format!("fresh counter: {}", fresh()));
        out.line(format!("first counter again: {}", increment()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_survives_calls() {
        let mut increment = counter();
        assert_eq!(increment(), 1);
        assert_eq!(increment(), 2);
        assert_eq!(increment(), 3);
    }

    #[test]
    fn test_counters_are_independent() {
        let mut first = counter();
        first();
        assert_eq!(first(), 2);

        let mut second = counter();
        assert_eq!(second(), 1);
        assert_eq!(first(), 3);
    }

    #[test]
    fn test_boxed_counters_side_by_side() {
        let mut counters: Vec<Counter> = vec![boxed_counter(), boxed_counter()];
        counters[0]();
        counters[0]();
        let counts: Vec<u32> = counters.iter_mut().map(|c| c()).collect();
        assert_eq!(counts, vec![3, 1]);
    }
}
