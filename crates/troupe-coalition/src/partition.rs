// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Set Partitions
//!
//! Partitions of `n` items into exactly `k` non-empty blocks, encoded as
//! restricted-growth strings: item `i` carries the block label `a[i]`, with
//! `a[0] = 0` and `a[i] <= max(a[..i]) + 1`. Every partition has exactly one
//! such string, so enumerating the strings in lexicographic order lists each
//! partition once.
//!
//! ```rust
//! use troupe_coalition::partition::{bell_number, RestrictedGrowth};
//!
//! let two_blocks: Vec<Vec<usize>> = RestrictedGrowth::new(3, 2).collect();
//! assert_eq!(two_blocks, vec![vec![0, 0, 1], vec![0, 1, 0], vec![0, 1, 1]]);
//! assert_eq!(bell_number(3), 5);
//! ```

/// Enumerator over the restricted-growth strings with exactly `k` blocks.
#[derive(Debug, Clone)]
pub struct RestrictedGrowth {
    blocks: usize,
    labels: Vec<usize>,
    exhausted: bool,
}

impl RestrictedGrowth {
    /// Positions the enumerator on the first string, if any. There is none
    /// for `k == 0` or `k > n`.
    pub fn new(n: usize, k: usize) -> Self {
        let mut enumerator = Self {
            blocks: k,
            labels: vec![0; n],
            exhausted: k == 0 || k > n,
        };
        if !enumerator.exhausted {
            enumerator.fill_suffix(0, 0);
        }
        enumerator
    }

    #[inline]
    pub fn num_blocks(&self) -> usize {
        self.blocks
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// The current string.
    #[inline]
    pub fn labels(&self) -> Option<&[usize]> {
        (!self.exhausted).then_some(self.labels.as_slice())
    }

    /// Moves to the next string. Returns `false` once exhausted.
    pub fn advance(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        let n = self.labels.len();
        let mut prefix_max = Vec::with_capacity(n);
        let mut max = 0;
        for &label in &self.labels {
            max = max.max(label);
            prefix_max.push(max);
        }

        for i in (1..n).rev() {
            let candidate = self.labels[i] + 1;
            if candidate > prefix_max[i - 1] + 1 || candidate >= self.blocks {
                continue;
            }
            let new_max = prefix_max[i - 1].max(candidate);
            if n - 1 - i < self.blocks - 1 - new_max {
                continue;
            }
            self.labels[i] = candidate;
            self.fill_suffix(i + 1, new_max);
            return true;
        }
        self.exhausted = true;
        false
    }

    /// Smallest completion of `labels[..from]` (with prefix maximum
    /// `prefix_max`) that still opens all remaining blocks.
    fn fill_suffix(&mut self, from: usize, prefix_max: usize) {
        let n = self.labels.len();
        let missing = self.blocks - 1 - prefix_max;
        for label in &mut self.labels[from..n - missing] {
            *label = 0;
        }
        for (offset, label) in self.labels[n - missing..].iter_mut().enumerate() {
            *label = prefix_max + 1 + offset;
        }
    }
}

impl Iterator for RestrictedGrowth {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let labels = self.labels()?.to_vec();
        self.advance();
        Some(labels)
    }
}

impl std::iter::FusedIterator for RestrictedGrowth {}

/// Groups `items` into blocks according to the restricted-growth string
/// `labels`.
pub fn blocks<T: Clone>(items: &[T], labels: &[usize]) -> Vec<Vec<T>> {
    debug_assert_eq!(items.len(), labels.len());
    let count = labels.iter().max().map_or(0, |&m| m + 1);
    let mut blocks = vec![Vec::new(); count];
    for (item, &label) in items.iter().zip(labels) {
        blocks[label].push(item.clone());
    }
    blocks
}

/// Number of partitions of `n` items. Saturates.
pub fn bell_number(n: usize) -> u64 {
    let mut row = vec![1u64];
    for _ in 0..n {
        let mut next = Vec::with_capacity(row.len() + 1);
        next.push(row[row.len() - 1]);
        for &value in &row {
            let last = next[next.len() - 1];
            next.push(last.saturating_add(value));
        }
        row = next;
    }
    row[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Stirling numbers of the second kind.
    fn stirling(n: usize, k: usize) -> u64 {
        match (n, k) {
            (0, 0) => 1,
            (_, 0) | (0, _) => 0,
            _ => k as u64 * stirling(n - 1, k) + stirling(n - 1, k - 1),
        }
    }

    #[test]
    fn test_single_and_full_splits() {
        assert_eq!(RestrictedGrowth::new(3, 1).collect::<Vec<_>>(), vec![vec![0, 0, 0]]);
        assert_eq!(RestrictedGrowth::new(3, 3).collect::<Vec<_>>(), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_lexicographic_order() {
        let all: Vec<Vec<usize>> = RestrictedGrowth::new(4, 2).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 0, 0, 1],
                vec![0, 0, 1, 0],
                vec![0, 0, 1, 1],
                vec![0, 1, 0, 0],
                vec![0, 1, 0, 1],
                vec![0, 1, 1, 0],
                vec![0, 1, 1, 1],
            ]
        );
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(RestrictedGrowth::new(0, 0).count(), 0);
        assert_eq!(RestrictedGrowth::new(2, 0).count(), 0);
        assert_eq!(RestrictedGrowth::new(2, 3).count(), 0);
        assert_eq!(RestrictedGrowth::new(1, 1).count(), 1);
    }

    #[test]
    fn test_blocks() {
        let items = ["a", "b", "c", "d"];
        assert_eq!(
            blocks(&items, &[0, 1, 0, 2]),
            vec![vec!["a", "c"], vec!["b"], vec!["d"]]
        );
        assert!(blocks::<&str>(&[], &[]).is_empty());
    }

    #[test]
    fn test_bell_numbers() {
        let expected = [1, 1, 2, 5, 15, 52, 203, 877];
        for (n, &b) in expected.iter().enumerate() {
            assert_eq!(bell_number(n), b, "B({})", n);
        }
    }

    proptest! {
        #[test]
        fn prop_counts_match_stirling_numbers(n in 1usize..8, k in 1usize..8) {
            prop_assert_eq!(RestrictedGrowth::new(n, k).count() as u64, stirling(n, k));
        }

        #[test]
        fn prop_strings_are_valid_and_use_all_blocks(n in 1usize..7, k in 1usize..7) {
            for labels in RestrictedGrowth::new(n, k) {
                prop_assert_eq!(labels[0], 0);
                let mut max = 0;
                for &l in &labels[1..] {
                    prop_assert!(l <= max + 1);
                    max = max.max(l);
                }
                prop_assert_eq!(max + 1, k);
            }
        }
    }
}
