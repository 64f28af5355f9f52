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

//! # Pool Algebra
//!
//! Pure, total arithmetic over `ModelPool`s. Models missing from an operand
//! count as zero, and every result is in normal form (no zero-count entries).
//! Nothing in here fails: a caller who wants to know whether a requirement is
//! unmet inspects the sign of a `delta`.
//!
//! The two bound operations differ in how they treat a model the bound does
//! not allow at all:
//!
//! - `apply_upper_bound` clamps and silently drops such models.
//! - `bounded` rejects the whole pool (`None`), which is how infeasibility
//!   of a candidate under a bound is signalled. `apply_upper_bound_set` uses
//!   the strict variant per element.

use crate::model::ResourceModel;
use crate::pool::{ModelPool, ModelPoolDelta};
use std::collections::{BTreeMap, BTreeSet};

/// Elementwise sum.
pub fn sum(a: &ModelPool, b: &ModelPool) -> ModelPool {
    let mut result = a.normalized();
    for (model, count) in b.iter().filter(|&(_, c)| c > 0) {
        result.add(model.clone(), count);
    }
    result
}

/// Elementwise sum over any number of pools.
pub fn sum_all<'a, I>(pools: I) -> ModelPool
where
    I: IntoIterator<Item = &'a ModelPool>,
{
    pools
        .into_iter()
        .fold(ModelPool::new(), |acc, pool| sum(&acc, pool))
}

/// Signed difference `a - b`.
///
/// ```rust
/// # use troupe_model::{algebra, pool::ModelPool};
/// let have = ModelPool::from_pairs([("A", 1)]);
/// let need = ModelPool::from_pairs([("A", 2), ("B", 1)]);
/// assert!(algebra::delta(&have, &need).is_negative());
/// ```
pub fn delta(a: &ModelPool, b: &ModelPool) -> ModelPoolDelta {
    let mut deltas: BTreeMap<ResourceModel, i64> = BTreeMap::new();
    for (model, count) in a.iter() {
        *deltas.entry(model.clone()).or_insert(0) += i64::from(count);
    }
    for (model, count) in b.iter() {
        *deltas.entry(model.clone()).or_insert(0) -= i64::from(count);
    }
    deltas.retain(|_, d| *d != 0);
    ModelPoolDelta::from_map(deltas)
}

/// Scales every count by `factor`, rounding up.
///
/// Used to grow a supporting combination until it meets a property minimum,
/// so a fractional count always becomes the next whole instance.
pub fn multiply(pool: &ModelPool, factor: f64) -> ModelPool {
    if !factor.is_finite() || factor <= 0.0 {
        return ModelPool::new();
    }
    pool.iter()
        .filter(|&(_, c)| c > 0)
        .map(|(m, c)| {
            let scaled = (f64::from(c) * factor).ceil();
            let scaled = if scaled >= f64::from(u32::MAX) {
                u32::MAX
            } else {
                scaled as u32
            };
            (m.clone(), scaled)
        })
        .collect()
}

/// Elementwise maximum.
pub fn max(a: &ModelPool, b: &ModelPool) -> ModelPool {
    let mut result = a.normalized();
    for (model, count) in b.iter().filter(|&(_, c)| c > 0) {
        if count > result.get(model) {
            result.insert(model.clone(), count);
        }
    }
    result
}

/// Elementwise minimum over the models of `a`.
pub fn min(a: &ModelPool, b: &ModelPool) -> ModelPool {
    a.iter()
        .map(|(m, c)| (m.clone(), c.min(b.get(m))))
        .filter(|&(_, c)| c > 0)
        .collect()
}

/// Clamps each count of `pool` to `bound`. Models the bound does not allow
/// are dropped.
pub fn apply_upper_bound(pool: &ModelPool, bound: &ModelPool) -> ModelPool {
    min(pool, bound)
}

/// Raises each count of `pool` to at least `bound`.
pub fn apply_lower_bound(pool: &ModelPool, bound: &ModelPool) -> ModelPool {
    max(pool, bound)
}

/// Clamps `pool` to `bound`, or rejects it when a model present in the pool
/// has no allowance in the bound.
///
/// ```rust
/// # use troupe_model::{algebra, pool::ModelPool};
/// let bound = ModelPool::from_pairs([("A", 1)]);
/// assert_eq!(
///     algebra::bounded(&ModelPool::from_pairs([("A", 4)]), &bound),
///     Some(ModelPool::from_pairs([("A", 1)]))
/// );
/// assert_eq!(algebra::bounded(&ModelPool::from_pairs([("B", 1)]), &bound), None);
/// ```
pub fn bounded(pool: &ModelPool, bound: &ModelPool) -> Option<ModelPool> {
    let mut result = ModelPool::new();
    for (model, count) in pool.iter().filter(|&(_, c)| c > 0) {
        let limit = bound.get(model);
        if limit == 0 {
            return None;
        }
        result.insert(model.clone(), count.min(limit));
    }
    Some(result)
}

/// Applies `bounded` to each pool of a set, dropping rejected pools.
pub fn apply_upper_bound_set(pools: &BTreeSet<ModelPool>, bound: &ModelPool) -> BTreeSet<ModelPool> {
    pools
        .iter()
        .filter_map(|p| bounded(p, bound))
        .filter(|p| !p.is_empty())
        .collect()
}

/// Returns `true` if every count of `a` is at most the corresponding count
/// of `b`.
pub fn is_subset(a: &ModelPool, b: &ModelPool) -> bool {
    a.iter().all(|(model, count)| count <= b.get(model))
}

/// Elementwise maxima of every pair drawn from `a` and `b`.
///
/// Two resources that must both be served by one pool need, per candidate
/// pair of supporting pools, at least the larger count per model. An empty
/// operand contributes nothing, so the other operand is returned unchanged.
pub fn max_compositions(a: &BTreeSet<ModelPool>, b: &BTreeSet<ModelPool>) -> BTreeSet<ModelPool> {
    if a.is_empty() {
        return b.clone();
    }
    if b.is_empty() {
        return a.clone();
    }
    let mut result = BTreeSet::new();
    for x in a {
        for y in b {
            result.insert(max(x, y));
        }
    }
    result
}
