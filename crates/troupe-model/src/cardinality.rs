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

//! # Cardinality Restrictions
//!
//! Models describe what they own ("a Sherpa has at most two payload
//! interfaces") and what they need ("a transport functionality has at least
//! one mobile base") as qualified cardinality restrictions. This module
//! collapses a list of restrictions into per-qualification `[min, max]`
//! bounds and joins bounds of several models.

use crate::model::ResourceModel;
use std::collections::BTreeMap;

/// Kind of a qualified cardinality restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CardinalityKind {
    Min,
    Max,
    Exact,
}

/// `relation kind cardinality qualification`, e.g. `has min 1 Camera`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardinalityRestriction {
    relation: ResourceModel,
    qualification: ResourceModel,
    cardinality: u32,
    kind: CardinalityKind,
}

impl CardinalityRestriction {
    #[inline]
    pub fn new(
        relation: impl Into<ResourceModel>,
        qualification: impl Into<ResourceModel>,
        cardinality: u32,
        kind: CardinalityKind,
    ) -> Self {
        Self {
            relation: relation.into(),
            qualification: qualification.into(),
            cardinality,
            kind,
        }
    }

    #[inline]
    pub fn min(relation: impl Into<ResourceModel>, qualification: impl Into<ResourceModel>, n: u32) -> Self {
        Self::new(relation, qualification, n, CardinalityKind::Min)
    }

    #[inline]
    pub fn max(relation: impl Into<ResourceModel>, qualification: impl Into<ResourceModel>, n: u32) -> Self {
        Self::new(relation, qualification, n, CardinalityKind::Max)
    }

    #[inline]
    pub fn exact(relation: impl Into<ResourceModel>, qualification: impl Into<ResourceModel>, n: u32) -> Self {
        Self::new(relation, qualification, n, CardinalityKind::Exact)
    }

    #[inline]
    pub fn relation(&self) -> &ResourceModel {
        &self.relation
    }

    #[inline]
    pub fn qualification(&self) -> &ResourceModel {
        &self.qualification
    }

    #[inline]
    pub fn cardinality(&self) -> u32 {
        self.cardinality
    }

    #[inline]
    pub fn kind(&self) -> CardinalityKind {
        self.kind
    }
}

impl std::fmt::Display for CardinalityRestriction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.kind {
            CardinalityKind::Min => "min",
            CardinalityKind::Max => "max",
            CardinalityKind::Exact => "exactly",
        };
        write!(
            f,
            "{} {} {} {}",
            self.relation.fragment(),
            kind,
            self.cardinality,
            self.qualification.fragment()
        )
    }
}

/// Inclusive count interval for one qualification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CardinalityBound {
    pub min: u32,
    pub max: u32,
}

impl CardinalityBound {
    #[inline]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// `min` or `max` depending on whether availability is asked for.
    #[inline]
    pub const fn pick(&self, use_max: bool) -> u32 {
        if use_max { self.max } else { self.min }
    }
}

/// How bounds of different models are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinOperation {
    /// Counts add up, as for the members of one pool.
    Sum,
    /// The larger count wins, as for alternative requirements served by the
    /// same resources.
    Max,
}

impl JoinOperation {
    #[inline]
    fn apply(self, a: u32, b: u32) -> u32 {
        match self {
            Self::Sum => a.saturating_add(b),
            Self::Max => a.max(b),
        }
    }
}

/// Per-qualification bounds of one or more models.
pub type BoundMap = BTreeMap<ResourceModel, CardinalityBound>;

/// Collapses the restrictions of a single model into bounds.
///
/// Several minima on one qualification keep the largest, several maxima the
/// smallest. When only a minimum is stated, the maximum equals it.
///
/// ```rust
/// # use troupe_model::cardinality::{bounds, CardinalityRestriction, CardinalityBound};
/// # use troupe_model::model::ResourceModel;
/// let r = [
///     CardinalityRestriction::min("has", "Camera", 1),
///     CardinalityRestriction::max("has", "Camera", 3),
///     CardinalityRestriction::exact("has", "Arm", 2),
/// ];
/// let b = bounds(&r);
/// assert_eq!(b[&ResourceModel::new("Camera")], CardinalityBound::new(1, 3));
/// assert_eq!(b[&ResourceModel::new("Arm")], CardinalityBound::new(2, 2));
/// ```
pub fn bounds(restrictions: &[CardinalityRestriction]) -> BoundMap {
    let mut mins: BTreeMap<ResourceModel, u32> = BTreeMap::new();
    let mut maxs: BTreeMap<ResourceModel, u32> = BTreeMap::new();
    for r in restrictions {
        let q = r.qualification.clone();
        match r.kind {
            CardinalityKind::Min => raise(&mut mins, q, r.cardinality),
            CardinalityKind::Max => lower(&mut maxs, q, r.cardinality),
            CardinalityKind::Exact => {
                raise(&mut mins, q.clone(), r.cardinality);
                lower(&mut maxs, q, r.cardinality);
            }
        }
    }

    let mut result = BoundMap::new();
    for (q, &min) in &mins {
        let max = maxs.get(q).copied().unwrap_or(min);
        result.insert(q.clone(), CardinalityBound::new(min, max.max(min)));
    }
    for (q, &max) in &maxs {
        result.entry(q.clone()).or_insert(CardinalityBound::new(0, max));
    }
    result
}

/// Joins two bound maps per qualification.
pub fn join(a: &BoundMap, b: &BoundMap, op: JoinOperation) -> BoundMap {
    let mut result = a.clone();
    for (q, bound) in b {
        let slot = result.entry(q.clone()).or_default();
        slot.min = op.apply(slot.min, bound.min);
        slot.max = op.apply(slot.max, bound.max);
    }
    result
}

fn raise(map: &mut BTreeMap<ResourceModel, u32>, key: ResourceModel, value: u32) {
    let slot = map.entry(key).or_insert(value);
    *slot = (*slot).max(value);
}

fn lower(map: &mut BTreeMap<ResourceModel, u32>, key: ResourceModel, value: u32) {
    let slot = map.entry(key).or_insert(value);
    *slot = (*slot).min(value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_tightest_wins() {
        let r = [
            CardinalityRestriction::min("has", "A", 1),
            CardinalityRestriction::min("has", "A", 2),
            CardinalityRestriction::max("has", "A", 5),
            CardinalityRestriction::max("has", "A", 4),
        ];
        assert_eq!(bounds(&r)[&ResourceModel::new("A")], CardinalityBound::new(2, 4));
    }

    #[test]
    fn test_bounds_max_only_and_min_only() {
        let r = [
            CardinalityRestriction::max("has", "A", 3),
            CardinalityRestriction::min("has", "B", 2),
        ];
        let b = bounds(&r);
        assert_eq!(b[&ResourceModel::new("A")], CardinalityBound::new(0, 3));
        assert_eq!(b[&ResourceModel::new("B")], CardinalityBound::new(2, 2));
    }

    #[test]
    fn test_bounds_inconsistent_max_is_lifted_to_min() {
        let r = [
            CardinalityRestriction::min("has", "A", 3),
            CardinalityRestriction::max("has", "A", 1),
        ];
        assert_eq!(bounds(&r)[&ResourceModel::new("A")], CardinalityBound::new(3, 3));
    }

    #[test]
    fn test_join_sum_and_max() {
        let a = bounds(&[CardinalityRestriction::exact("has", "A", 2)]);
        let b = bounds(&[
            CardinalityRestriction::exact("has", "A", 3),
            CardinalityRestriction::exact("has", "B", 1),
        ]);
        let summed = join(&a, &b, JoinOperation::Sum);
        assert_eq!(summed[&ResourceModel::new("A")], CardinalityBound::new(5, 5));
        assert_eq!(summed[&ResourceModel::new("B")], CardinalityBound::new(1, 1));
        let maxed = join(&a, &b, JoinOperation::Max);
        assert_eq!(maxed[&ResourceModel::new("A")], CardinalityBound::new(3, 3));
    }

    #[test]
    fn test_display() {
        let r = CardinalityRestriction::min("om#has", "om#Camera", 1);
        assert_eq!(r.to_string(), "has min 1 Camera");
    }
}
