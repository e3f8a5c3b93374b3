//! Fixed-length arrays and their default values.

use crate::{Context, Snippet, Topic, Transcript};

/// Four zeroed integers with the first slot set to `first`.
pub fn with_first(first: i32) -> [i32; 4] {
    let mut nums = [0; 4];
    nums[0] = first;
    nums
}

pub fn grid() -> [[i32; 2]; 2] {
    [[3, 4], [5, 6]]
}

/// Bounds-checked read; indexing past the end would panic instead.
pub fn checked<T: Copy, const N: usize>(arr: &[T; N], index: usize) -> Option<T> {
    arr.get(index).copied()
}

pub struct Arrays;

impl Snippet for Arrays {
    fn topic(&self) -> Topic {
        Topic::Arrays
    }

    fn run(&self, _ctx: &Context, out: &mut Transcript) {
        let nums = with_first(1);
        out.line(format!("{nums:?}"));
        out.line(nums[0]);
        out.line(nums.len());

        let numb = [1, 2, 3, 4];
        out.line(format!("{numb:?}"));

        let vals = <[bool; 4]>::default();
        out.line(format!("{vals:?}"));

        let names = <[String; 3]>::default();
        out.line(format!("{names:?}"));

        out.line(format!("{:?}", grid()));

        match checked(&nums, 4) {
            Some(v) => out.line(format!("nums[4] = {v}")),
            None => out.line(format!("nums[4] is out of bounds for length {}", nums.len())),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_defaults() {
        let nums: [i32; 4] = Default::default();
        assert!(nums.iter().all(|&n| n == 0));

        let vals: [bool; 4] = Default::default();
        assert!(vals.iter().all(|v| !v));

        let names: [String; 3] = Default::default();
        assert!(names.iter().all(String::is_empty));
    }

    #[test]
    fn test_assignment_leaves_rest_zeroed() {
        assert_eq!(with_first(1), [1, 0, 0, 0]);
        assert_eq!(with_first(1).len(), 4);
    }

    #[test]
    fn test_grid_rows() {
        let g = grid();
        assert_eq!(g[1][0], 5);
        assert_eq!(g.iter().flatten().sum::<i32>(), 18);
    }

    #[test]
    fn test_checked_access() {
        let nums = with_first(1);
        assert_eq!(checked(&nums, 0), Some(1));
        assert_eq!(checked(&nums, 3), Some(0));
        assert_eq!(checked(&nums, 4), None);
    }
}
