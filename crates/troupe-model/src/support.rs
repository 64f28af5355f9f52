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

//! # Resource Support Vectors
//!
//! A `ResourceSupportVector` places requirements and availability in one
//! labeled vector space. Labels are resource models; values count how many
//! units of that model are required or offered.
//!
//! ## Requirement versus Availability
//!
//! The same cardinality restrictions yield two different vectors depending on
//! `use_max_cardinality`: a requirement is evaluated at its minimum (the
//! least that must hold) and an offer at its maximum (the most a resource can
//! supply). Mixing them up silently turns every answer into nonsense.
//!
//! ## Operations
//!
//! - `support_from`: ternary, elementwise classification (`SupportType`).
//! - `ratios` / `max_finite_ratio`: requirement divided by availability; the
//!   largest finite ratio is the number of provider instances that saturate
//!   the requirement.
//! - `embed_class_relationship`: lets subclass dimensions count toward their
//!   superclass, so a `StereoCamera` offer satisfies a `Camera` requirement.

use crate::cardinality::{self, BoundMap, JoinOperation};
use crate::error::ModelError;
use crate::model::ResourceModel;
use crate::query::ModelQuery;
use crate::vocabulary;

/// Outcome of comparing a requirement against an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SupportType {
    /// No required dimension receives anything.
    NoSupport,
    /// Some required dimension is served, but not all are met.
    PartialSupport,
    /// Every required dimension is met or exceeded.
    FullSupport,
}

impl std::fmt::Display for SupportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSupport => write!(f, "NoSupport"),
            Self::PartialSupport => write!(f, "PartialSupport"),
            Self::FullSupport => write!(f, "FullSupport"),
        }
    }
}

/// Labeled numeric vector over resource models.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResourceSupportVector {
    labels: Vec<ResourceModel>,
    values: Vec<f64>,
}

impl ResourceSupportVector {
    /// Builds a vector from `(label, value)` pairs. Repeated labels
    /// accumulate into the first occurrence.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (ResourceModel, f64)>,
    {
        let mut v = Self::default();
        for (label, value) in pairs {
            match v.position(&label) {
                Some(i) => v.values[i] += value,
                None => {
                    v.labels.push(label);
                    v.values.push(value);
                }
            }
        }
        v
    }

    /// All-zero vector over `labels`.
    pub fn zeros(labels: &[ResourceModel]) -> Self {
        Self::from_pairs(labels.iter().map(|l| (l.clone(), 0.0)))
    }

    #[inline]
    pub fn labels(&self) -> &[ResourceModel] {
        &self.labels
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns `true` if there are no labels or every value is zero.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.values.iter().all(|&v| v == 0.0)
    }

    #[inline]
    fn position(&self, label: &ResourceModel) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Value of `label`, zero if absent.
    #[inline]
    pub fn get(&self, label: &ResourceModel) -> f64 {
        self.position(label).map_or(0.0, |i| self.values[i])
    }

    /// Re-expresses the vector over `labels`, zero-extending missing ones and
    /// dropping the rest.
    pub fn aligned(&self, labels: &[ResourceModel]) -> Self {
        Self {
            labels: labels.to_vec(),
            values: labels.iter().map(|l| self.get(l)).collect(),
        }
    }

    /// Adds `factor * other` onto the labels of `self`.
    pub fn accumulate(&mut self, other: &ResourceSupportVector, factor: f64) {
        for (label, value) in self.labels.iter().zip(self.values.iter_mut()) {
            *value += other.get(label) * factor;
        }
    }

    /// Every value multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            labels: self.labels.clone(),
            values: self.values.iter().map(|v| v * factor).collect(),
        }
    }

    /// Classifies how well `available` serves this requirement.
    ///
    /// ```rust
    /// # use troupe_model::support::{ResourceSupportVector, SupportType};
    /// let need = ResourceSupportVector::from_pairs([("A".into(), 2.0), ("B".into(), 1.0)]);
    /// let some = ResourceSupportVector::from_pairs([("A".into(), 2.0)]);
    /// let all = ResourceSupportVector::from_pairs([("A".into(), 3.0), ("B".into(), 1.0)]);
    /// assert_eq!(need.support_from(&some), SupportType::PartialSupport);
    /// assert_eq!(need.support_from(&all), SupportType::FullSupport);
    /// ```
    pub fn support_from(&self, available: &ResourceSupportVector) -> SupportType {
        let mut met = true;
        let mut touched = false;
        for (label, &required) in self.labels.iter().zip(&self.values) {
            if required <= 0.0 {
                continue;
            }
            let offered = available.get(label);
            if offered > 0.0 {
                touched = true;
            }
            if offered < required {
                met = false;
            }
        }
        match (met, touched) {
            (true, _) => SupportType::FullSupport,
            (false, true) => SupportType::PartialSupport,
            (false, false) => SupportType::NoSupport,
        }
    }

    /// Requirement divided by availability, per label of `self`.
    ///
    /// `0 / 0` is `0`; `x / 0` for `x > 0` is `NaN` (undefined).
    pub fn ratios(&self, available: &ResourceSupportVector) -> Self {
        let values = self
            .labels
            .iter()
            .zip(&self.values)
            .map(|(label, &required)| {
                let offered = available.get(label);
                if offered == 0.0 {
                    if required == 0.0 { 0.0 } else { f64::NAN }
                } else {
                    required / offered
                }
            })
            .collect();
        Self {
            labels: self.labels.clone(),
            values,
        }
    }

    /// Largest finite value. `NaN` and infinite entries are excluded, `None`
    /// if nothing finite remains.
    pub fn max_finite_ratio(&self) -> Option<f64> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))
    }

    /// Lets each dimension accumulate the values of the dimensions whose
    /// label is a strict subclass of its own label.
    pub fn embed_class_relationship<Q>(&self, query: &Q) -> Self
    where
        Q: ModelQuery + ?Sized,
    {
        let mut values = self.values.clone();
        for (i, parent) in self.labels.iter().enumerate() {
            for (j, child) in self.labels.iter().enumerate() {
                if i != j && query.is_subclass_of(child, parent) {
                    values[i] += self.values[j];
                }
            }
        }
        Self {
            labels: self.labels.clone(),
            values,
        }
    }
}

impl std::fmt::Display for ResourceSupportVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, (label, value)) in self.labels.iter().zip(&self.values).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", label.fragment(), value)?;
        }
        write!(f, "]")
    }
}

/// Builds the support vector of `models` from their `has` restrictions.
///
/// With `use_max_cardinality` the vector describes what the models offer,
/// otherwise what they require. Bounds of several models are joined with
/// the maximum. When `filter_labels` is non-empty the vector is expressed
/// over exactly those labels, and each label sums the bounds of every
/// qualification that equals it or is a subclass of it.
///
/// Models without any `has` restriction describe themselves: the vector holds
/// one unit per model.
///
/// # Errors
///
/// `ModelError::InvalidArgument` if restrictions exist but collapse to an
/// empty bound map.
pub fn support_vector<Q>(
    query: &Q,
    models: &[ResourceModel],
    filter_labels: &[ResourceModel],
    use_max_cardinality: bool,
) -> Result<ResourceSupportVector, ModelError>
where
    Q: ModelQuery + ?Sized,
{
    let has = vocabulary::has();
    let mut joined = BoundMap::new();
    let mut any_restriction = false;
    for model in models {
        let restrictions = query.cardinality_restrictions(model, &has);
        if restrictions.is_empty() {
            continue;
        }
        any_restriction = true;
        joined = cardinality::join(&joined, &cardinality::bounds(&restrictions), JoinOperation::Max);
    }

    if !any_restriction {
        let labels = if filter_labels.is_empty() {
            let mut unique = models.to_vec();
            unique.sort();
            unique.dedup();
            unique
        } else {
            filter_labels.to_vec()
        };
        let pairs = labels.iter().map(|label| {
            let units = models.iter().filter(|m| query.is_same_or_subclass_of(m, label)).count();
            (label.clone(), units as f64)
        });
        return Ok(ResourceSupportVector::from_pairs(pairs));
    }

    if joined.is_empty() {
        return Err(ModelError::InvalidArgument(format!(
            "no cardinality bounds for models {:?}",
            models
        )));
    }

    let labels: Vec<ResourceModel> = if filter_labels.is_empty() {
        joined.keys().cloned().collect()
    } else {
        filter_labels.to_vec()
    };
    let pairs = labels.iter().map(|label| {
        let value: u64 = joined
            .iter()
            .filter(|(q, _)| query.is_same_or_subclass_of(q, label))
            .map(|(_, b)| u64::from(b.pick(use_max_cardinality)))
            .sum();
        (label.clone(), value as f64)
    });
    Ok(ResourceSupportVector::from_pairs(pairs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cardinality::CardinalityRestriction;
    use crate::catalog::CatalogBuilder;

    fn v(pairs: &[(&str, f64)]) -> ResourceSupportVector {
        ResourceSupportVector::from_pairs(pairs.iter().map(|&(l, x)| (ResourceModel::new(l), x)))
    }

    #[test]
    fn test_support_classification() {
        let need = v(&[("A", 1.0), ("B", 2.0)]);
        assert_eq!(need.support_from(&v(&[])), SupportType::NoSupport);
        assert_eq!(need.support_from(&v(&[("C", 5.0)])), SupportType::NoSupport);
        assert_eq!(need.support_from(&v(&[("A", 5.0)])), SupportType::PartialSupport);
        assert_eq!(need.support_from(&v(&[("A", 1.0), ("B", 1.0)])), SupportType::PartialSupport);
        assert_eq!(need.support_from(&v(&[("A", 1.0), ("B", 2.0)])), SupportType::FullSupport);
    }

    #[test]
    fn test_zero_requirement_is_fully_supported() {
        assert_eq!(v(&[("A", 0.0)]).support_from(&v(&[])), SupportType::FullSupport);
        assert_eq!(v(&[]).support_from(&v(&[])), SupportType::FullSupport);
    }

    #[test]
    fn test_ratios_and_exclusion_of_undefined() {
        let need = v(&[("A", 5.0), ("B", 0.0), ("C", 1.0)]);
        let offer = v(&[("A", 2.0), ("B", 0.0)]);
        let r = need.ratios(&offer);
        assert_eq!(r.values()[0], 2.5);
        assert_eq!(r.values()[1], 0.0);
        assert!(r.values()[2].is_nan());
        assert_eq!(r.max_finite_ratio(), Some(2.5));
        assert_eq!(v(&[("A", 1.0)]).ratios(&v(&[])).max_finite_ratio(), None);
    }

    #[test]
    fn test_aligned_and_accumulate() {
        let a = v(&[("A", 1.0), ("B", 2.0)]);
        let labels = [ResourceModel::new("B"), ResourceModel::new("C")];
        let aligned = a.aligned(&labels);
        assert_eq!(aligned.values(), &[2.0, 0.0]);

        let mut acc = ResourceSupportVector::zeros(&labels);
        acc.accumulate(&a, 3.0);
        assert_eq!(acc.values(), &[6.0, 0.0]);
        assert_eq!(a.scaled(0.5).values(), &[0.5, 1.0]);
    }

    #[test]
    fn test_embed_class_relationship() {
        let catalog = CatalogBuilder::new().subclass("StereoCamera", "Camera").build();
        let offer = v(&[("Camera", 1.0), ("StereoCamera", 2.0)]);
        let embedded = offer.embed_class_relationship(&catalog);
        assert_eq!(embedded.get(&"Camera".into()), 3.0);
        assert_eq!(embedded.get(&"StereoCamera".into()), 2.0);
    }

    #[test]
    fn test_support_vector_from_restrictions() {
        let has = vocabulary::has();
        let catalog = CatalogBuilder::new()
            .subclass("StereoCamera", "Camera")
            .restriction("Rover", CardinalityRestriction::min(has.clone(), "StereoCamera", 1))
            .restriction("Rover", CardinalityRestriction::max(has.clone(), "StereoCamera", 2))
            .restriction("Mapping", CardinalityRestriction::min(has, "Camera", 1))
            .build();

        let need = support_vector(&catalog, &["Mapping".into()], &[], false).unwrap();
        assert_eq!(need, v(&[("Camera", 1.0)]));

        let offer = support_vector(&catalog, &["Rover".into()], need.labels(), true).unwrap();
        assert_eq!(offer, v(&[("Camera", 2.0)]));
        assert_eq!(need.support_from(&offer), SupportType::FullSupport);
    }

    #[test]
    fn test_support_vector_of_unrestricted_models_is_identity() {
        let catalog = CatalogBuilder::new().build();
        let s = support_vector(&catalog, &["Camera".into()], &[], true).unwrap();
        assert_eq!(s, v(&[("Camera", 1.0)]));
        let filtered = support_vector(&catalog, &["Camera".into()], &["Arm".into()], true).unwrap();
        assert_eq!(filtered, v(&[("Arm", 0.0)]));
    }
}
