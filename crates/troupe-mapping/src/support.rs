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

//! Support classification of whole pools.
//!
//! A set of functionalities defines the requirement vector (evaluated at the
//! minimum cardinalities). A pool offers the sum of its models' availability
//! vectors (maximum cardinalities), each expressed over the requirement's
//! labels and multiplied by the model's count.

use crate::error::MappingError;
use troupe_model::model::ResourceModel;
use troupe_model::pool::ModelPool;
use troupe_model::query::ModelQuery;
use troupe_model::support::{self, ResourceSupportVector, SupportType};

/// What `functionalities` require together.
pub fn requirement_vector<Q>(
    query: &Q,
    functionalities: &[ResourceModel],
) -> Result<ResourceSupportVector, MappingError>
where
    Q: ModelQuery + ?Sized,
{
    Ok(support::support_vector(query, functionalities, &[], false)?)
}

/// What `pool` offers over `labels`.
pub fn availability_vector<Q>(
    query: &Q,
    pool: &ModelPool,
    labels: &[ResourceModel],
) -> Result<ResourceSupportVector, MappingError>
where
    Q: ModelQuery + ?Sized,
{
    let mut available = ResourceSupportVector::zeros(labels);
    for (model, count) in pool.iter().filter(|&(_, c)| c > 0) {
        let offer = support::support_vector(query, std::slice::from_ref(model), labels, true)?;
        available.accumulate(&offer, f64::from(count));
    }
    Ok(available)
}

/// Classifies how well `pool` serves `functionalities`.
pub fn support_type<Q>(
    query: &Q,
    functionalities: &[ResourceModel],
    pool: &ModelPool,
) -> Result<SupportType, MappingError>
where
    Q: ModelQuery + ?Sized,
{
    let required = requirement_vector(query, functionalities)?;
    let available = availability_vector(query, pool, required.labels())?;
    let support = required.support_from(&available);
    tracing::trace!(
        required = %required,
        available = %available,
        "{} for {} from {}",
        support,
        functionalities.len(),
        pool
    );
    Ok(support)
}

/// `support_type` for a single model entry `{model: count}`.
pub fn model_support_type<Q>(
    query: &Q,
    functionalities: &[ResourceModel],
    model: &ResourceModel,
    count: u32,
) -> Result<SupportType, MappingError>
where
    Q: ModelQuery + ?Sized,
{
    let pool = ModelPool::from_pairs([(model.clone(), count)]);
    support_type(query, functionalities, &pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use troupe_model::catalog::{Catalog, CatalogBuilder};

    fn rm(s: &str) -> ResourceModel {
        ResourceModel::new(s)
    }

    /// ImageProvider needs two cameras; a Sherpa carries two, a Crex one.
    fn catalog() -> Catalog {
        CatalogBuilder::new()
            .subclass("StereoCamera", "Camera")
            .has("ImageProvider", "Camera", 2, 2)
            .has("Sherpa", "Camera", 0, 2)
            .has("Crex", "StereoCamera", 0, 1)
            .build()
    }

    #[test]
    fn test_requirement_uses_minimum() {
        let r = requirement_vector(&catalog(), &[rm("ImageProvider")]).unwrap();
        assert_eq!(r.labels(), &[rm("Camera")]);
        assert_eq!(r.values(), &[2.0]);
    }

    #[test]
    fn test_availability_scales_with_count_and_subclasses() {
        let pool = ModelPool::from_pairs([("Crex", 3), ("Sherpa", 1)]);
        let a = availability_vector(&catalog(), &pool, &[rm("Camera")]).unwrap();
        assert_eq!(a.values(), &[5.0]);
    }

    #[test]
    fn test_classification() {
        let q = catalog();
        let f = [rm("ImageProvider")];
        assert_eq!(
            support_type(&q, &f, &ModelPool::from_pairs([("Sherpa", 1)])).unwrap(),
            SupportType::FullSupport
        );
        assert_eq!(
            support_type(&q, &f, &ModelPool::from_pairs([("Crex", 1)])).unwrap(),
            SupportType::PartialSupport
        );
        assert_eq!(
            model_support_type(&q, &f, &rm("Crex"), 2).unwrap(),
            SupportType::FullSupport
        );
        assert_eq!(
            support_type(&q, &f, &ModelPool::from_pairs([("BaseCamp", 4)])).unwrap(),
            SupportType::NoSupport
        );
    }

    #[test]
    fn test_zero_counts_offer_nothing() {
        let q = catalog();
        let pool = ModelPool::from_pairs([("Sherpa", 0)]);
        assert_eq!(
            support_type(&q, &[rm("ImageProvider")], &pool).unwrap(),
            SupportType::NoSupport
        );
    }
}
