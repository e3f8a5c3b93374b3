//! Passing by value versus passing a mutable reference.

use crate::{Context, Snippet, Topic, Transcript};

/// Overwrites its own copy; the caller's binding is untouched.
#[allow(unused_assignments)]
pub fn change_num(mut num: i32, out: &mut Transcript) -> i32 {
    num = 5;
    out.line(format!("Num value in func: {num}"));
    num
}

/// Writes through the reference, so the caller sees the change.
pub fn change_num_by_ref(num: &mut i32, out: &mut Transcript) {
    *num = 5;
    out.line(format!("In change_num_by_ref: {num}"));
}

pub struct Pointers;

impl Snippet for Pointers {
    fn topic(&self) -> Topic {
        Topic::Pointers
    }

    fn run(&self, _ctx: &Context, out: &mut Transcript) {
        let mut num = 1;
        out.line(format!("Memory address {:p}", &num));

        change_num(num, out);
        out.line(format!("After change_num: {num}"));

        change_num_by_ref(&mut num, out);
        out.line(format!("After change_num_by_ref: {num}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_value_leaves_caller_alone() {
        let mut out = Transcript::new();
        let num = 1;
        assert_eq!(change_num(num, &mut out), 5);
        assert_eq!(num, 1);
        assert_eq!(out.lines(), ["Num value in func: 5"]);
    }

    #[test]
    fn test_by_ref_mutates_caller() {
        let mut out = Transcript::new();
        let mut num = 1;
        change_num_by_ref(&mut num, &mut out);
        assert_eq!(num, 5);
    }
}
