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

//! # Functionality Mapping
//!
//! `FunctionalityMapping` caches which pools support which functionality. It
//! is filled by `MappingEngine` through `add` and only read afterwards; all
//! contents are owned values, so a finished mapping is `Send + Sync` and can
//! be shared between readers.
//!
//! Both directions are kept:
//!
//! - functionality → set of supporting pools (`model_pools`),
//! - pool → set of functionalities it supports (`functionalities_of`).
//!
//! Looking up a functionality the mapping knows nothing about yields the
//! empty set, not an error.

use std::collections::{BTreeMap, BTreeSet};
use troupe_model::model::ResourceModel;
use troupe_model::pool::ModelPool;
use troupe_search::stats::SearchStatistics;

static NO_POOLS: BTreeSet<ModelPool> = BTreeSet::new();
static NO_FUNCTIONALITIES: BTreeSet<ResourceModel> = BTreeSet::new();

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FunctionalityMapping {
    model_pool: ModelPool,
    functionalities: Vec<ResourceModel>,
    saturation_bound: ModelPool,
    function_to_pools: BTreeMap<ResourceModel, BTreeSet<ModelPool>>,
    pool_to_functions: BTreeMap<ModelPool, BTreeSet<ResourceModel>>,
    supported: BTreeSet<ResourceModel>,
    statistics: SearchStatistics,
}

impl FunctionalityMapping {
    /// An empty mapping over `model_pool` for `functionalities`, bounded by
    /// `saturation_bound`.
    pub fn new(
        model_pool: ModelPool,
        functionalities: Vec<ResourceModel>,
        saturation_bound: ModelPool,
    ) -> Self {
        Self {
            model_pool,
            functionalities,
            saturation_bound,
            ..Self::default()
        }
    }

    /// Records that `pool` supports `functionality`.
    pub fn add(&mut self, pool: ModelPool, functionality: ResourceModel) {
        let pool = pool.normalized();
        self.pool_to_functions
            .entry(pool.clone())
            .or_default()
            .insert(functionality.clone());
        self.function_to_pools
            .entry(functionality.clone())
            .or_default()
            .insert(pool);
        self.supported.insert(functionality);
    }

    /// Records that `pool` supports every functionality in `functionalities`.
    pub fn add_all<I>(&mut self, pool: &ModelPool, functionalities: I)
    where
        I: IntoIterator<Item = ResourceModel>,
    {
        for f in functionalities {
            self.add(pool.clone(), f);
        }
    }

    /// Pools that support `functionality`; empty if there are none.
    #[inline]
    pub fn model_pools(&self, functionality: &ResourceModel) -> &BTreeSet<ModelPool> {
        self.function_to_pools.get(functionality).unwrap_or(&NO_POOLS)
    }

    /// Functionalities supported by exactly `pool`; empty if there are none.
    #[inline]
    pub fn functionalities_of(&self, pool: &ModelPool) -> &BTreeSet<ResourceModel> {
        self.pool_to_functions
            .get(&pool.normalized())
            .unwrap_or(&NO_FUNCTIONALITIES)
    }

    /// The pool the mapping was computed for.
    #[inline]
    pub fn model_pool(&self) -> &ModelPool {
        &self.model_pool
    }

    /// Every functionality that was considered, supported or not.
    #[inline]
    pub fn functionalities(&self) -> &[ResourceModel] {
        &self.functionalities
    }

    /// The global saturation bound the enumeration ran under.
    #[inline]
    pub fn saturation_bound(&self) -> &ModelPool {
        &self.saturation_bound
    }

    /// Functionalities with at least one supporting pool.
    #[inline]
    pub fn supported_functionalities(&self) -> &BTreeSet<ResourceModel> {
        &self.supported
    }

    #[inline]
    pub fn is_supported(&self, functionality: &ResourceModel) -> bool {
        self.supported.contains(functionality)
    }

    /// Number of distinct supporting pools.
    #[inline]
    pub fn num_pools(&self) -> usize {
        self.pool_to_functions.len()
    }

    /// Returns `true` if no functionality is supported.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.supported.is_empty()
    }

    /// `(functionality, pools)` pairs in functionality order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&ResourceModel, &BTreeSet<ModelPool>)> + '_ {
        self.function_to_pools.iter()
    }

    /// Counters of the computation that produced the mapping.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    #[inline]
    pub(crate) fn statistics_mut(&mut self) -> &mut SearchStatistics {
        &mut self.statistics
    }
}

impl std::fmt::Display for FunctionalityMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "FunctionalityMapping:")?;
        writeln!(f, "    model pool: {}", self.model_pool)?;
        writeln!(f, "    saturation bound: {}", self.saturation_bound)?;
        for functionality in &self.functionalities {
            write!(f, "    {}:", functionality.fragment())?;
            let pools = self.model_pools(functionality);
            if pools.is_empty() {
                writeln!(f, " unsupported")?;
                continue;
            }
            writeln!(f)?;
            for pool in pools {
                writeln!(f, "        {}", pool)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rm(s: &str) -> ResourceModel {
        ResourceModel::new(s)
    }

    fn sample() -> FunctionalityMapping {
        let base = ModelPool::from_pairs([("Sherpa", 1), ("BaseCamp", 3)]);
        let mut m = FunctionalityMapping::new(
            base.clone(),
            vec![rm("ImageProvider"), rm("Transport")],
            base,
        );
        m.add(ModelPool::from_pairs([("Sherpa", 1)]), rm("ImageProvider"));
        m.add(ModelPool::from_pairs([("Sherpa", 1), ("BaseCamp", 0)]), rm("ImageProvider"));
        m
    }

    #[test]
    fn test_add_fills_both_directions() {
        let m = sample();
        let sherpa = ModelPool::from_pairs([("Sherpa", 1)]);
        assert_eq!(m.model_pools(&rm("ImageProvider")).len(), 1);
        assert!(m.model_pools(&rm("ImageProvider")).contains(&sherpa));
        assert!(m.functionalities_of(&sherpa).contains(&rm("ImageProvider")));
        assert_eq!(m.num_pools(), 1);
        assert!(m.is_supported(&rm("ImageProvider")));
        assert!(!m.is_supported(&rm("Transport")));
    }

    #[test]
    fn test_unknown_lookups_are_empty() {
        let m = sample();
        assert!(m.model_pools(&rm("Unknown")).is_empty());
        assert!(m.functionalities_of(&ModelPool::from_pairs([("X", 1)])).is_empty());
    }

    #[test]
    fn test_add_all() {
        let mut m = FunctionalityMapping::default();
        assert!(m.is_empty());
        let pool = ModelPool::from_pairs([("Sherpa", 2)]);
        m.add_all(&pool, [rm("A"), rm("B")]);
        assert_eq!(m.functionalities_of(&pool).len(), 2);
        assert_eq!(m.supported_functionalities().len(), 2);
    }

    #[test]
    fn test_display() {
        let m = sample();
        assert_eq!(
            format!("{}", m),
            "FunctionalityMapping:\n    model pool: {BaseCamp: 3, Sherpa: 1}\n    saturation bound: {BaseCamp: 3, Sherpa: 1}\n    ImageProvider:\n        {Sherpa: 1}\n    Transport: unsupported\n"
        );
    }

    #[test]
    fn test_mapping_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FunctionalityMapping>();
    }
}
