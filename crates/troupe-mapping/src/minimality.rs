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

//! Minimality of supporting pools.
//!
//! A pool is minimal for a set of functionalities if it fully supports them
//! and no unit can be taken away without losing full support:
//!
//! 1. The pool as a whole must give full support.
//! 2. If a single model entry already gives full support on its own, the
//!    pool may contain nothing else, and that entry must not be reducible by
//!    one instance.
//! 3. Otherwise no model entry with partial support may be reducible by one
//!    instance within the partially supporting sub-pool.

use crate::error::MappingError;
use crate::support::{model_support_type, support_type};
use std::collections::BTreeSet;
use troupe_model::model::ResourceModel;
use troupe_model::pool::ModelPool;
use troupe_model::query::ModelQuery;
use troupe_model::support::SupportType;

pub fn is_minimal<Q>(
    query: &Q,
    pool: &ModelPool,
    functionalities: &[ResourceModel],
) -> Result<bool, MappingError>
where
    Q: ModelQuery + ?Sized,
{
    if support_type(query, functionalities, pool)? != SupportType::FullSupport {
        tracing::trace!("{} gives no full support", pool);
        return Ok(false);
    }

    let mut single_full = false;
    let mut partial = ModelPool::new();
    for (model, count) in pool.iter().filter(|&(_, c)| c > 0) {
        match model_support_type(query, functionalities, model, count)? {
            SupportType::FullSupport => single_full = true,
            SupportType::PartialSupport => {
                partial.insert(model.clone(), count);
            }
            SupportType::NoSupport => {}
        }
    }

    if single_full {
        if pool.distinct_models() != 1 {
            tracing::trace!("{} is redundant: one model alone gives full support", pool);
            return Ok(false);
        }
        return Ok(!still_supported_without_one(query, functionalities, &pool.normalized())?);
    }

    Ok(!still_supported_without_one(query, functionalities, &partial)?)
}

/// Returns `true` if removing one instance of some model of `pool` keeps
/// full support.
fn still_supported_without_one<Q>(
    query: &Q,
    functionalities: &[ResourceModel],
    pool: &ModelPool,
) -> Result<bool, MappingError>
where
    Q: ModelQuery + ?Sized,
{
    for (model, count) in pool.iter() {
        let mut reduced = pool.clone();
        if count <= 1 {
            reduced.remove(model);
        } else {
            reduced.insert(model.clone(), count - 1);
        }
        if support_type(query, functionalities, &reduced)? == SupportType::FullSupport {
            tracing::trace!("{} is redundant: {} suffices", pool, reduced);
            return Ok(true);
        }
    }
    Ok(false)
}

/// Keeps the minimal pools of `pools`.
pub fn filter_non_minimal<Q>(
    query: &Q,
    pools: &BTreeSet<ModelPool>,
    functionalities: &[ResourceModel],
) -> Result<BTreeSet<ModelPool>, MappingError>
where
    Q: ModelQuery + ?Sized,
{
    let mut minimal = BTreeSet::new();
    for pool in pools {
        if is_minimal(query, pool, functionalities)? {
            minimal.insert(pool.clone());
        }
    }
    Ok(minimal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use troupe_model::catalog::{Catalog, CatalogBuilder};

    fn rm(s: &str) -> ResourceModel {
        ResourceModel::new(s)
    }

    fn pool(pairs: &[(&str, u32)]) -> ModelPool {
        ModelPool::from_pairs(pairs.iter().copied())
    }

    /// ImageProvider needs two cameras. A Sherpa has two, a Crex one, a
    /// BaseCamp none.
    fn catalog() -> Catalog {
        CatalogBuilder::new()
            .has("ImageProvider", "Camera", 2, 2)
            .has("Sherpa", "Camera", 0, 2)
            .has("Crex", "Camera", 0, 1)
            .has("BaseCamp", "Battery", 0, 1)
            .build()
    }

    fn minimal(p: &ModelPool) -> bool {
        is_minimal(&catalog(), p, &[rm("ImageProvider")]).unwrap()
    }

    #[test]
    fn test_single_sufficient_instance_is_minimal() {
        assert!(minimal(&pool(&[("Sherpa", 1)])));
    }

    #[test]
    fn test_supersets_of_sufficient_pools_are_not_minimal() {
        assert!(!minimal(&pool(&[("Sherpa", 1), ("BaseCamp", 1)])));
        assert!(!minimal(&pool(&[("Sherpa", 1), ("Crex", 1)])));
        assert!(!minimal(&pool(&[("Sherpa", 2)])));
        assert!(!minimal(&pool(&[("Crex", 3)])));
    }

    #[test]
    fn test_distributed_support_is_minimal() {
        assert!(minimal(&pool(&[("Crex", 2)])));
    }

    #[test]
    fn test_insufficient_pools_are_rejected() {
        assert!(!minimal(&pool(&[("Crex", 1)])));
        assert!(!minimal(&pool(&[("BaseCamp", 5)])));
        assert!(!minimal(&ModelPool::new()));
    }

    #[test]
    fn test_filter_non_minimal() {
        let pools: BTreeSet<ModelPool> = [
            pool(&[("Sherpa", 1)]),
            pool(&[("Sherpa", 1), ("Crex", 1)]),
            pool(&[("Crex", 2)]),
            pool(&[("Crex", 1)]),
        ]
        .into_iter()
        .collect();
        let kept = filter_non_minimal(&catalog(), &pools, &[rm("ImageProvider")]).unwrap();
        let expected: BTreeSet<ModelPool> = [pool(&[("Crex", 2)]), pool(&[("Sherpa", 1)])].into_iter().collect();
        assert_eq!(kept, expected);
    }
}
