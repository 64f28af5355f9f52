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

//! Property values of pools and the scaling of pools to meet property
//! constraints.
//!
//! A pool's value for a property is the sum of its atoms' data-property
//! values. When no atom asserts the property, the maximum transport capacity
//! (`hasTransportCapacity` cardinality) stands in for it.
//!
//! A resource with property constraints, e.g. "transport at least 10 units",
//! may need several copies of a supporting pool. `scaling_factor` returns the
//! smallest whole multiple of the pool whose value lies in the merged bound
//! of every constrained property.

use crate::error::MappingError;
use std::collections::BTreeSet;
use troupe_model::cardinality;
use troupe_model::model::ResourceModel;
use troupe_model::pool::ModelPool;
use troupe_model::query::ModelQuery;
use troupe_model::resource::{self, Resource};
use troupe_model::vocabulary;

/// How the values of different models are folded into one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Aggregation {
    /// Every atom contributes its value.
    #[default]
    Sum,
    /// The smallest value of any model in the pool.
    Min,
    /// The largest value of any model in the pool.
    Max,
}

impl std::fmt::Display for Aggregation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Aggregation::Sum => write!(f, "Sum"),
            Aggregation::Min => write!(f, "Min"),
            Aggregation::Max => write!(f, "Max"),
        }
    }
}

/// Aggregated data-property value of `pool`, or `None` if no model of the
/// pool asserts `property`. Models without a value are skipped.
pub fn data_property_value<Q>(
    query: &Q,
    pool: &ModelPool,
    property: &ResourceModel,
    aggregation: Aggregation,
) -> Option<f64>
where
    Q: ModelQuery + ?Sized,
{
    let mut value: Option<f64> = None;
    for (model, count) in pool.iter().filter(|&(_, c)| c > 0) {
        let Some(v) = query.data_property_value(model, property) else {
            tracing::debug!("'{}' asserts no value for '{}'", model, property);
            continue;
        };
        value = Some(match (aggregation, value) {
            (Aggregation::Sum, acc) => acc.unwrap_or(0.0) + v * f64::from(count),
            (Aggregation::Min, Some(acc)) => acc.min(v),
            (Aggregation::Max, Some(acc)) => acc.max(v),
            (_, None) => v,
        });
    }
    value
}

/// Summed transport capacity of `pool`, or `None` if no model declares one.
pub fn transport_capacity<Q>(query: &Q, pool: &ModelPool) -> Option<f64>
where
    Q: ModelQuery + ?Sized,
{
    let relation = vocabulary::has_transport_capacity();
    let mut capacity: Option<u64> = None;
    for (model, count) in pool.iter().filter(|&(_, c)| c > 0) {
        let restrictions = query.cardinality_restrictions(model, &relation);
        if restrictions.is_empty() {
            continue;
        }
        let per_atom: u64 = cardinality::bounds(&restrictions)
            .values()
            .map(|b| u64::from(b.max))
            .sum();
        capacity = Some(capacity.unwrap_or(0) + per_atom * u64::from(count));
    }
    capacity.map(|c| c as f64)
}

/// The value of `property` for `pool`: the summed data property, falling
/// back to the transport capacity.
pub fn property_value<Q>(query: &Q, pool: &ModelPool, property: &ResourceModel) -> Option<f64>
where
    Q: ModelQuery + ?Sized,
{
    data_property_value(query, pool, property, Aggregation::Sum)
        .or_else(|| transport_capacity(query, pool))
}

/// Smallest factor by which `pool` must be multiplied to satisfy the
/// property constraints of `resource`. A resource without constraints
/// yields `1.0`.
///
/// # Errors
///
/// `MappingError::Unsatisfiable` if the constraints contradict each other,
/// a property value cannot be obtained, or no whole factor brings every
/// property into its bound.
pub fn scaling_factor<Q>(query: &Q, pool: &ModelPool, resource: &Resource) -> Result<f64, MappingError>
where
    Q: ModelQuery + ?Sized,
{
    let clusters = resource.clusters();
    let mut checks = Vec::with_capacity(clusters.len());
    let mut factor: f64 = 1.0;

    for (property, constraints) in &clusters {
        let value = property_value(query, pool, property).ok_or_else(|| {
            MappingError::unsatisfiable(
                resource.model(),
                pool,
                format!("no value for property '{}'", property),
            )
        })?;
        let bound = resource::merge_constraints(property, constraints).map_err(|e| {
            MappingError::unsatisfiable(resource.model(), pool, e.to_string())
        })?;

        if factor * value < bound.min() {
            if value <= 0.0 {
                return Err(MappingError::unsatisfiable(
                    resource.model(),
                    pool,
                    format!("'{}' is {} and cannot reach {}", property, value, bound.min()),
                ));
            }
            factor = factor.max((bound.min() / value).ceil());
        }
        checks.push((property, value, bound));
    }

    for (property, value, bound) in checks {
        let scaled = factor * value;
        if !bound.contains(scaled) {
            return Err(MappingError::unsatisfiable(
                resource.model(),
                pool,
                format!(
                    "'{}' scaled by {} is {}, outside {}",
                    property, factor, scaled, bound
                ),
            ));
        }
    }
    Ok(factor)
}

/// `scaling_factor` for every pool of `pools`, in set order. Pools that
/// cannot satisfy the constraints get `0.0`.
pub fn scaling_factors<Q>(query: &Q, pools: &BTreeSet<ModelPool>, resource: &Resource) -> Vec<f64>
where
    Q: ModelQuery + ?Sized,
{
    pools
        .iter()
        .map(|pool| match scaling_factor(query, pool, resource) {
            Ok(factor) => factor,
            Err(e) => {
                tracing::debug!("{}", e);
                0.0
            }
        })
        .collect()
}
