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

//! # Model Pools
//!
//! A `ModelPool` is a multiset of resource models: an ordered map from model
//! to count. Pools describe what is available (a fleet), what is required,
//! per-model upper bounds and candidate combinations alike.
//!
//! ## Normal Form
//!
//! Callers may record a model with count zero (e.g. a catalog entry with no
//! instances available). `normalized` drops those entries; every pool produced
//! by `crate::algebra` or by the combination generator is already normalized.
//! Equality and ordering are derived from the sorted entries, so two pools in
//! normal form compare equal exactly when they hold the same multiset.
//!
//! ## Related Types
//!
//! - `ModelPoolDelta`: signed per-model difference, used to ask whether a
//!   requirement is unmet.
//! - `ModelCombination`: the flat, sorted list form of a pool with one entry
//!   per atom.

use crate::error::ModelError;
use crate::model::ResourceModel;
use std::collections::BTreeMap;

/// A multiset of resource models.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModelPool {
    counts: BTreeMap<ResourceModel, u32>,
}

impl ModelPool {
    /// Creates an empty pool.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a pool from `(model, count)` pairs; repeated models accumulate.
    ///
    /// ```rust
    /// # use troupe_model::pool::ModelPool;
    /// let pool = ModelPool::from_pairs([("Sherpa", 1), ("BaseCamp", 2), ("Sherpa", 1)]);
    /// assert_eq!(pool.get(&"Sherpa".into()), 2);
    /// assert_eq!(pool.total_atoms(), 4);
    /// ```
    pub fn from_pairs<M, I>(pairs: I) -> Self
    where
        M: Into<ResourceModel>,
        I: IntoIterator<Item = (M, u32)>,
    {
        let mut pool = Self::new();
        for (model, count) in pairs {
            pool.add(model.into(), count);
        }
        pool
    }

    /// A pool holding one instance of `model`.
    #[inline]
    pub fn single(model: impl Into<ResourceModel>) -> Self {
        Self::from_pairs([(model.into(), 1)])
    }

    /// Count of `model`, zero if absent.
    #[inline]
    pub fn get(&self, model: &ResourceModel) -> u32 {
        self.counts.get(model).copied().unwrap_or(0)
    }

    /// Sets the count of `model`, returning the previous one if recorded.
    #[inline]
    pub fn insert(&mut self, model: ResourceModel, count: u32) -> Option<u32> {
        self.counts.insert(model, count)
    }

    /// Adds `count` instances of `model` (saturating).
    #[inline]
    pub fn add(&mut self, model: ResourceModel, count: u32) {
        let slot = self.counts.entry(model).or_insert(0);
        *slot = slot.saturating_add(count);
    }

    /// Removes `model`, returning its count if it was recorded.
    #[inline]
    pub fn remove(&mut self, model: &ResourceModel) -> Option<u32> {
        self.counts.remove(model)
    }

    /// Returns `true` if `model` is recorded, even with count zero.
    #[inline]
    pub fn contains(&self, model: &ResourceModel) -> bool {
        self.counts.contains_key(model)
    }

    /// Number of recorded models, including zero-count entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no model is recorded at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns `true` if the pool holds no atoms (no entries, or only zero
    /// counts).
    #[inline]
    pub fn is_null(&self) -> bool {
        self.counts.values().all(|&c| c == 0)
    }

    /// Total number of atoms.
    #[inline]
    pub fn total_atoms(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    /// Number of models with a nonzero count.
    #[inline]
    pub fn distinct_models(&self) -> usize {
        self.counts.values().filter(|&&c| c > 0).count()
    }

    /// Entries in canonical key order.
    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&ResourceModel, u32)> + '_ {
        self.counts.iter().map(|(m, &c)| (m, c))
    }

    /// Recorded models in canonical order.
    #[inline]
    pub fn models(&self) -> impl DoubleEndedIterator<Item = &ResourceModel> + '_ {
        self.counts.keys()
    }

    /// The same multiset without zero-count entries.
    pub fn normalized(&self) -> Self {
        Self {
            counts: self
                .counts
                .iter()
                .filter(|&(_, &c)| c > 0)
                .map(|(m, &c)| (m.clone(), c))
                .collect(),
        }
    }

    /// Drops zero-count entries in place.
    #[inline]
    pub fn normalize(&mut self) {
        self.counts.retain(|_, c| *c > 0);
    }

    /// Keeps only the entries whose model satisfies `predicate`.
    pub fn filtered<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&ResourceModel) -> bool,
    {
        Self {
            counts: self
                .counts
                .iter()
                .filter(|&(m, _)| predicate(m))
                .map(|(m, &c)| (m.clone(), c))
                .collect(),
        }
    }

    /// Returns `true` if every count of `self` is at most the corresponding
    /// count of `other`.
    #[inline]
    pub fn is_subset_of(&self, other: &ModelPool) -> bool {
        crate::algebra::is_subset(self, other)
    }
}

impl FromIterator<(ResourceModel, u32)> for ModelPool {
    fn from_iter<T: IntoIterator<Item = (ResourceModel, u32)>>(iter: T) -> Self {
        Self::from_pairs(iter)
    }
}

impl<'a> IntoIterator for &'a ModelPool {
    type Item = (&'a ResourceModel, &'a u32);
    type IntoIter = std::collections::btree_map::Iter<'a, ResourceModel, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

impl std::fmt::Debug for ModelPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.counts.iter()).finish()
    }
}

impl std::fmt::Display for ModelPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (model, count)) in self.counts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", model.fragment(), count)?;
        }
        write!(f, "}}")
    }
}

/// Signed per-model difference between two pools.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelPoolDelta {
    deltas: BTreeMap<ResourceModel, i64>,
}

impl ModelPoolDelta {
    pub(crate) fn from_map(deltas: BTreeMap<ResourceModel, i64>) -> Self {
        Self { deltas }
    }

    /// Difference for `model`, zero if absent.
    #[inline]
    pub fn get(&self, model: &ResourceModel) -> i64 {
        self.deltas.get(model).copied().unwrap_or(0)
    }

    /// Returns `true` if any dimension is deficient.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.deltas.values().any(|&d| d < 0)
    }

    /// Entries in canonical key order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&ResourceModel, i64)> + '_ {
        self.deltas.iter().map(|(m, &d)| (m, d))
    }

    /// The positive part of the difference as a normalized pool.
    pub fn to_pool(&self) -> ModelPool {
        self.deltas
            .iter()
            .filter(|&(_, &d)| d > 0)
            .map(|(m, &d)| (m.clone(), u32::try_from(d).unwrap_or(u32::MAX)))
            .collect()
    }
}

/// The atoms of a pool listed one by one, sorted.
///
/// `{A: 2, B: 1}` is `[A, A, B]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModelCombination(Vec<ResourceModel>);

impl ModelCombination {
    /// Wraps a list of atoms, sorting it into canonical order.
    pub fn new(mut atoms: Vec<ResourceModel>) -> Self {
        atoms.sort();
        Self(atoms)
    }

    /// The atoms in canonical order.
    #[inline]
    pub fn atoms(&self) -> &[ResourceModel] {
        &self.0
    }

    /// Number of atoms.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no atoms.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Counts the atoms back into a pool.
    pub fn to_pool(&self) -> ModelPool {
        combination_to_pool(self)
    }
}

/// Largest pool, in atoms, that `pool_to_combination` expands.
pub const MAX_COMBINATION_ATOMS: u64 = 1 << 20;

/// Expands a pool into one atom per instance.
///
/// # Errors
///
/// `ModelError::InvalidArgument` if the pool holds more than
/// `MAX_COMBINATION_ATOMS` atoms.
pub fn pool_to_combination(pool: &ModelPool) -> Result<ModelCombination, ModelError> {
    let total = pool.total_atoms();
    if total > MAX_COMBINATION_ATOMS {
        return Err(ModelError::InvalidArgument(format!(
            "{} has {} atoms, more than the {} a combination may list",
            pool, total, MAX_COMBINATION_ATOMS
        )));
    }
    let mut atoms = Vec::with_capacity(total as usize);
    for (model, count) in pool.iter() {
        atoms.extend(std::iter::repeat_n(model.clone(), count as usize));
    }
    Ok(ModelCombination(atoms))
}

/// Counts a combination back into a normalized pool.
pub fn combination_to_pool(combination: &ModelCombination) -> ModelPool {
    combination.0.iter().map(|m| (m.clone(), 1)).collect()
}

impl TryFrom<&ModelPool> for ModelCombination {
    type Error = ModelError;

    fn try_from(pool: &ModelPool) -> Result<Self, Self::Error> {
        pool_to_combination(pool)
    }
}

impl From<&ModelCombination> for ModelPool {
    fn from(combination: &ModelCombination) -> Self {
        combination_to_pool(combination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn m(id: &str) -> ResourceModel {
        ResourceModel::new(id)
    }

    #[test]
    fn test_from_pairs_accumulates() {
        let pool = ModelPool::from_pairs([("A", 1), ("B", 3), ("A", 2)]);
        assert_eq!(pool.get(&m("A")), 3);
        assert_eq!(pool.get(&m("B")), 3);
        assert_eq!(pool.get(&m("C")), 0);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_zero_entries_and_normal_form() {
        let pool = ModelPool::from_pairs([("Camera", 0)]);
        assert!(!pool.is_empty());
        assert!(pool.is_null());
        assert_eq!(pool.distinct_models(), 0);
        let normal = pool.normalized();
        assert!(normal.is_empty());
        assert_eq!(normal, ModelPool::new());
    }

    #[test]
    fn test_total_order_is_usable_in_sets() {
        let mut set = std::collections::BTreeSet::new();
        set.insert(ModelPool::from_pairs([("A", 1)]));
        set.insert(ModelPool::from_pairs([("A", 1), ("B", 1)]));
        set.insert(ModelPool::from_pairs([("A", 1)]));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_delta_to_pool_keeps_positive_part() {
        let mut map = BTreeMap::new();
        map.insert(m("A"), 2);
        map.insert(m("B"), -1);
        map.insert(m("C"), 0);
        let delta = ModelPoolDelta::from_map(map);
        assert!(delta.is_negative());
        assert_eq!(delta.to_pool(), ModelPool::from_pairs([("A", 2)]));
    }

    #[test]
    fn test_combination_expansion() {
        let pool = ModelPool::from_pairs([("B", 1), ("A", 2), ("C", 0)]);
        let combination = pool_to_combination(&pool).unwrap();
        assert_eq!(combination.atoms(), &[m("A"), m("A"), m("B")]);
        assert_eq!(combination.to_pool(), pool.normalized());
    }

    #[test]
    fn test_oversized_pool_is_not_expanded() {
        let huge = ModelPool::from_pairs([("A", u32::MAX)]);
        match pool_to_combination(&huge) {
            Err(ModelError::InvalidArgument(msg)) => assert!(msg.contains("4294967295 atoms")),
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
        let limit = ModelPool::from_pairs([("A", MAX_COMBINATION_ATOMS as u32)]);
        assert_eq!(ModelCombination::try_from(&limit).unwrap().len() as u64, MAX_COMBINATION_ATOMS);
    }

    #[test]
    fn test_display_uses_fragments() {
        let pool = ModelPool::from_pairs([("om#Sherpa", 1), ("om#BaseCamp", 3)]);
        assert_eq!(pool.to_string(), "{BaseCamp: 3, Sherpa: 1}");
    }

    fn arb_pool() -> impl Strategy<Value = ModelPool> {
        prop::collection::btree_map("[A-E]", 0u32..6, 0..5)
            .prop_map(|map| map.into_iter().map(|(k, v)| (ResourceModel::new(k), v)).collect())
    }

    proptest! {
        #[test]
        fn prop_combination_round_trip(pool in arb_pool()) {
            let back = combination_to_pool(&pool_to_combination(&pool).unwrap());
            prop_assert_eq!(back, pool.normalized());
        }

        #[test]
        fn prop_combination_length_matches_atoms(pool in arb_pool()) {
            prop_assert_eq!(pool_to_combination(&pool).unwrap().len() as u64, pool.total_atoms());
        }
    }
}
