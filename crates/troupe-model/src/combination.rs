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

//! # Bounded Combination Enumeration
//!
//! `LimitedCombination` walks every multiset that fits inside a bound pool:
//! every assignment of counts `0 ..= bound[m]` to the bound's models, minus
//! the empty one, subject to an atom budget.
//!
//! ## Order
//!
//! Counts are stepped like an odometer over the models in canonical key
//! order, the first model being the fastest digit. For the bound
//! `{A: 2, B: 1}` the sequence is `{A: 1}`, `{A: 2}`, `{B: 1}`,
//! `{A: 1, B: 1}`, `{A: 2, B: 1}`. A digit whose increment would exceed the
//! atom budget carries immediately, so assignments over budget are never
//! visited at all.
//!
//! ## Usage
//!
//! The enumerator offers both a cursor interface (`current`, `advance`,
//! `restart`) and `Iterator<Item = ModelPool>`.
//!
//! ```rust
//! use troupe_model::combination::{CombinationMode, LimitedCombination};
//! use troupe_model::pool::ModelPool;
//!
//! let bound = ModelPool::from_pairs([("A", 2), ("B", 1)]);
//! let all: Vec<ModelPool> = LimitedCombination::new(&bound, 2, CombinationMode::Max).collect();
//! assert_eq!(all.len(), 4);
//! ```

use crate::error::ModelError;
use crate::model::ResourceModel;
use crate::pool::{ModelCombination, ModelPool};

/// Which totals an enumerated combination may have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombinationMode {
    /// Every non-empty combination with at most `atom_budget` atoms.
    Max,
    /// Only combinations with exactly `atom_budget` atoms.
    Exact,
}

/// Upper bound on the number of non-empty combinations within `bound`:
/// the product of `count + 1` over all models, minus one. Saturates.
pub fn total_combinations(bound: &ModelPool) -> u64 {
    bound
        .iter()
        .fold(1u64, |acc, (_, c)| acc.saturating_mul(u64::from(c) + 1))
        .saturating_sub(1)
}

/// Restartable enumerator over the multisets inside a bound pool.
#[derive(Debug, Clone)]
pub struct LimitedCombination {
    models: Vec<ResourceModel>,
    bounds: Vec<u32>,
    counts: Vec<u32>,
    total: u64,
    atom_budget: u64,
    mode: CombinationMode,
    limit: Option<u64>,
    position: u64,
    exhausted: bool,
}

impl LimitedCombination {
    /// Positions the enumerator on the first combination, if any.
    pub fn new(bound: &ModelPool, atom_budget: u64, mode: CombinationMode) -> Self {
        let (models, bounds): (Vec<_>, Vec<_>) = bound
            .iter()
            .filter(|&(_, c)| c > 0)
            .map(|(m, c)| (m.clone(), c))
            .unzip();
        let len = models.len();
        let mut enumerator = Self {
            models,
            bounds,
            counts: vec![0; len],
            total: 0,
            atom_budget,
            mode,
            limit: None,
            position: 0,
            exhausted: false,
        };
        enumerator.restart();
        enumerator
    }

    /// Stops after at most `limit` combinations.
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        if limit == 0 {
            self.exhausted = true;
        }
        self
    }

    /// Rewinds to the first combination.
    pub fn restart(&mut self) {
        self.counts.iter_mut().for_each(|c| *c = 0);
        self.total = 0;
        self.position = 0;
        self.exhausted = self.models.is_empty() || self.atom_budget == 0 || self.limit == Some(0);
        if !self.exhausted {
            self.step_to_valid();
        }
    }

    #[inline]
    pub fn atom_budget(&self) -> u64 {
        self.atom_budget
    }

    #[inline]
    pub fn mode(&self) -> CombinationMode {
        self.mode
    }

    /// Zero-based index of the current combination.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// The current combination in atom-list form.
    ///
    /// # Errors
    ///
    /// `ModelError::InvalidArgument` if the combination is too large to list
    /// atom by atom.
    pub fn current(&self) -> Result<Option<ModelCombination>, ModelError> {
        self.current_pool()
            .map(|p| ModelCombination::try_from(&p))
            .transpose()
    }

    /// The current combination as a pool.
    pub fn current_pool(&self) -> Option<ModelPool> {
        if self.exhausted {
            return None;
        }
        Some(
            self.models
                .iter()
                .zip(&self.counts)
                .filter(|&(_, &c)| c > 0)
                .map(|(m, &c)| (m.clone(), c))
                .collect(),
        )
    }

    /// Moves to the next combination. Returns `false` once exhausted.
    pub fn advance(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        self.position += 1;
        if self.limit.is_some_and(|limit| self.position >= limit) {
            self.exhausted = true;
            return false;
        }
        self.step_to_valid();
        !self.exhausted
    }

    fn is_valid(&self) -> bool {
        match self.mode {
            CombinationMode::Max => self.total >= 1 && self.total <= self.atom_budget,
            CombinationMode::Exact => self.total == self.atom_budget,
        }
    }

    /// Increments the odometer at least once, then until the state is valid.
    fn step_to_valid(&mut self) {
        loop {
            if !self.increment() {
                self.exhausted = true;
                return;
            }
            if self.is_valid() {
                return;
            }
        }
    }

    fn increment(&mut self) -> bool {
        for i in 0..self.counts.len() {
            if self.counts[i] < self.bounds[i] && self.total < self.atom_budget {
                self.counts[i] += 1;
                self.total += 1;
                return true;
            }
            self.total -= u64::from(self.counts[i]);
            self.counts[i] = 0;
        }
        false
    }
}

impl Iterator for LimitedCombination {
    type Item = ModelPool;

    fn next(&mut self) -> Option<Self::Item> {
        let pool = self.current_pool()?;
        self.advance();
        Some(pool)
    }
}

impl std::iter::FusedIterator for LimitedCombination {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pool(pairs: &[(&str, u32)]) -> ModelPool {
        ModelPool::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn test_canonical_order() {
        let bound = pool(&[("A", 2), ("B", 1)]);
        let all: Vec<ModelPool> = LimitedCombination::new(&bound, 10, CombinationMode::Max).collect();
        assert_eq!(
            all,
            vec![
                pool(&[("A", 1)]),
                pool(&[("A", 2)]),
                pool(&[("B", 1)]),
                pool(&[("A", 1), ("B", 1)]),
                pool(&[("A", 2), ("B", 1)]),
            ]
        );
        assert_eq!(total_combinations(&bound), 5);
    }

    #[test]
    fn test_budget_restricts_totals() {
        let bound = pool(&[("A", 2), ("B", 1)]);
        let all: Vec<ModelPool> = LimitedCombination::new(&bound, 1, CombinationMode::Max).collect();
        assert_eq!(all, vec![pool(&[("A", 1)]), pool(&[("B", 1)])]);
    }

    #[test]
    fn test_exact_mode() {
        let bound = pool(&[("A", 2), ("B", 1)]);
        let all: Vec<ModelPool> = LimitedCombination::new(&bound, 2, CombinationMode::Exact).collect();
        assert_eq!(all, vec![pool(&[("A", 2)]), pool(&[("A", 1), ("B", 1)])]);
    }

    #[test]
    fn test_limit_and_restart() {
        let bound = pool(&[("A", 3)]);
        let mut c = LimitedCombination::new(&bound, 3, CombinationMode::Max).with_limit(2);
        assert_eq!(c.current_pool(), Some(pool(&[("A", 1)])));
        assert!(c.advance());
        assert_eq!(c.position(), 1);
        assert!(!c.advance());
        assert!(c.is_exhausted());
        assert_eq!(c.current_pool(), None);

        c.restart();
        assert_eq!(c.current().unwrap().map(|comb| comb.len()), Some(1));
        assert_eq!(c.count(), 2);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(LimitedCombination::new(&ModelPool::new(), 3, CombinationMode::Max).count(), 0);
        assert_eq!(LimitedCombination::new(&pool(&[("A", 0)]), 3, CombinationMode::Max).count(), 0);
        assert_eq!(LimitedCombination::new(&pool(&[("A", 2)]), 0, CombinationMode::Max).count(), 0);
        assert_eq!(LimitedCombination::new(&pool(&[("A", 2)]), 5, CombinationMode::Exact).count(), 0);
        assert_eq!(
            LimitedCombination::new(&pool(&[("A", 2)]), 2, CombinationMode::Max)
                .with_limit(0)
                .count(),
            0
        );
    }

    fn arb_bound() -> impl Strategy<Value = ModelPool> {
        prop::collection::btree_map("[A-D]", 0u32..4, 0..4)
            .prop_map(|map| map.into_iter().map(|(k, v)| (ResourceModel::new(k), v)).collect())
    }

    proptest! {
        #[test]
        fn prop_unbudgeted_enumeration_is_complete_and_unique(bound in arb_bound()) {
            let all: Vec<ModelPool> =
                LimitedCombination::new(&bound, bound.total_atoms(), CombinationMode::Max).collect();
            prop_assert_eq!(all.len() as u64, total_combinations(&bound));
            let unique: std::collections::BTreeSet<_> = all.iter().cloned().collect();
            prop_assert_eq!(unique.len(), all.len());
            for p in &all {
                prop_assert!(p.is_subset_of(&bound));
            }
        }

        #[test]
        fn prop_budget_is_respected(bound in arb_bound(), budget in 1u64..5) {
            for p in LimitedCombination::new(&bound, budget, CombinationMode::Max) {
                prop_assert!(p.total_atoms() >= 1 && p.total_atoms() <= budget);
            }
        }
    }
}
