//! Iterating sequences, maps and text.

use crate::{Context, Snippet, Topic, Transcript};
use indexmap::IndexMap;

pub fn sum(nums: &[i32]) -> i32 {
    let mut total = 0;
    for num in nums {
        total += num;
    }
    total
}

pub fn indexed(nums: &[i32]) -> Vec<(usize, i32)> {
    nums.iter().copied().enumerate().collect()
}

/// Each code point with the byte offset it starts at.
pub fn char_offsets(text: &str) -> Vec<(usize, char)> {
    text.char_indices().collect()
}

pub struct Range;

impl Snippet for Range {
    fn topic(&self) -> Topic {
        Topic::Range
    }

    fn run(&self, _ctx: &Context, out: &mut Transcript) {
        let nums = [1, 2, 3, 4];

        for num in nums {
            out.line(num);
        }
        out.line(format!("sum: {}", sum(&nums)));

        for (i, num) in indexed(&nums) {
            out.line(format!("{num} {i}"));
        }

        let m = IndexMap::from([("name", "harsh"), ("surname", "badagandi")]);
        for (k, v) in &m {
            out.line(format!("{k} {v}"));
        }

        for (i, c) in char_offsets("harsh") {
            out.line(format!("{i} {c}"));
        }

        // multi-byte code points advance the offset by more than one
        for (i, c) in char_offsets("né") {
            out.line(format!("{i} {c}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum() {
        assert_eq!(sum(&[1, 2, 3, 4]), 10);
        assert_eq!(sum(&[]), 0);
    }

    #[test]
    fn test_indexed_pairs() {
        assert_eq!(indexed(&[7, 8]), vec![(0, 7), (1, 8)]);
    }

    #[test]
    fn test_ascii_offsets_are_contiguous() {
        let offsets: Vec<usize> = char_offsets("harsh").iter().map(|(i, _)| *i).collect();
        assert_eq!(offsets, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_multibyte_offsets_skip() {
        assert_eq!(char_offsets("héllo")[2], (3, 'l'));
        assert_eq!(char_offsets("日本"), vec![(0, '日'), (3, '本')]);
    }
}
