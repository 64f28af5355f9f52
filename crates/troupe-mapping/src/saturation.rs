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

//! # Functional Saturation Bounds
//!
//! The saturation bound of a functionality is, per model, the number of
//! instances beyond which adding more of that model cannot improve support.
//! For a requirement model R and a provider model P it is
//!
//! ```text
//! ceil(max_l  required_R(l) / offered_P(l))
//! ```
//!
//! over the labels `l` of R's requirement vector, with both vectors
//! class-embedded and undefined ratios (`x / 0`) ignored. A requirement
//! without any minimum is treated as needing one unit of itself.
//!
//! Bounds of several resources combine with the elementwise maximum; the
//! mapping engine clamps the pool with them before enumerating.

use crate::error::MappingError;
use crate::property;
use troupe_model::algebra;
use troupe_model::model::ResourceModel;
use troupe_model::pool::ModelPool;
use troupe_model::query::ModelQuery;
use troupe_model::resource::Resource;
use troupe_model::support::{self, ResourceSupportVector};

/// Instances of `provider` that saturate `requirement`.
pub fn model_saturation_bound<Q>(
    query: &Q,
    requirement: &ResourceModel,
    provider: &ResourceModel,
) -> Result<u32, MappingError>
where
    Q: ModelQuery + ?Sized,
{
    let mut required =
        support::support_vector(query, std::slice::from_ref(requirement), &[], false)?;
    if required.is_null() {
        required = ResourceSupportVector::from_pairs([(requirement.clone(), 1.0)]);
    }
    let offered =
        support::support_vector(query, std::slice::from_ref(provider), required.labels(), true)?;

    let required = required.embed_class_relationship(query);
    let offered = offered.embed_class_relationship(query);
    let ratios = required.ratios(&offered);
    let max = ratios.max_finite_ratio().unwrap_or(0.0).max(0.0);

    tracing::trace!(
        required = %required,
        offered = %offered,
        ratios = %ratios,
        "saturation of '{}' by '{}'",
        requirement.fragment(),
        provider.fragment()
    );
    Ok(max.ceil() as u32)
}

/// Per-model saturation bound of `resource` over the models of `base_pool`.
///
/// With property constraints, a model that contributes at all is bounded by
/// at least the number of its instances needed to meet the constraints, and
/// by zero if it cannot meet them.
pub fn resource_saturation_bound<Q>(
    query: &Q,
    base_pool: &ModelPool,
    resource: &Resource,
) -> Result<ModelPool, MappingError>
where
    Q: ModelQuery + ?Sized,
{
    if base_pool.is_empty() {
        return Err(MappingError::invalid_argument(
            "saturation bound requires a non-empty base pool",
            base_pool,
            std::slice::from_ref(resource.model()),
        ));
    }

    let mut bound = ModelPool::new();
    for model in base_pool.models() {
        let mut saturation = model_saturation_bound(query, resource.model(), model)?;
        if saturation > 0 && resource.has_constraints() {
            let single = ModelPool::from_pairs([(model.clone(), 1)]);
            saturation = match property::scaling_factor(query, &single, resource) {
                Ok(factor) => saturation.max(factor.ceil() as u32),
                Err(e) => {
                    tracing::debug!("'{}' cannot contribute: {}", model.fragment(), e);
                    0
                }
            };
        }
        bound.insert(model.clone(), saturation);
    }
    Ok(bound)
}

/// Elementwise maximum of the saturation bounds of `resources`.
pub fn saturation_bound<Q>(
    query: &Q,
    base_pool: &ModelPool,
    resources: &[Resource],
) -> Result<ModelPool, MappingError>
where
    Q: ModelQuery + ?Sized,
{
    let mut bound = ModelPool::new();
    for resource in resources {
        let local = resource_saturation_bound(query, base_pool, resource)?;
        bound = algebra::max(&bound, &local);
    }
    Ok(bound)
}
