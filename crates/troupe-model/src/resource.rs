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

//! # Resources and Property Constraints
//!
//! A `Resource` is a resource model that may carry constraints on its data
//! properties, e.g. "transport with a payload capacity of at least 40". All
//! constraints on one property are merged into a single inclusive
//! `ValueBound`; contradictory constraints are an `Unsatisfiable` error.

use crate::error::ModelError;
use crate::model::ResourceModel;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Comparison a constraint applies to its property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConstraintKind {
    Equal,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
}

impl std::fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Equal => "==",
            Self::LessThan => "<",
            Self::LessOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterOrEqual => ">=",
        };
        f.write_str(symbol)
    }
}

/// A constraint on one data property of a resource, e.g.
/// `payloadCapacity >= 40`.
#[derive(Debug, Clone)]
pub struct PropertyConstraint {
    property: ResourceModel,
    kind: ConstraintKind,
    value: f64,
}

impl PropertyConstraint {
    #[inline]
    pub fn new(property: impl Into<ResourceModel>, kind: ConstraintKind, value: f64) -> Self {
        Self {
            property: property.into(),
            kind,
            value,
        }
    }

    #[inline]
    pub fn property(&self) -> &ResourceModel {
        &self.property
    }

    #[inline]
    pub fn kind(&self) -> ConstraintKind {
        self.kind
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The set of values this constraint admits.
    pub fn to_bound(&self) -> ValueBound {
        let v = self.value;
        match self.kind {
            ConstraintKind::Equal => ValueBound::new(v, v),
            ConstraintKind::LessThan => ValueBound::new(f64::NEG_INFINITY, next_below(v)),
            ConstraintKind::LessOrEqual => ValueBound::new(f64::NEG_INFINITY, v),
            ConstraintKind::GreaterThan => ValueBound::new(next_above(v), f64::INFINITY),
            ConstraintKind::GreaterOrEqual => ValueBound::new(v, f64::INFINITY),
        }
    }
}

impl PartialEq for PropertyConstraint {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PropertyConstraint {}

impl PartialOrd for PropertyConstraint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PropertyConstraint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.property
            .cmp(&other.property)
            .then(self.kind.cmp(&other.kind))
            .then(self.value.total_cmp(&other.value))
    }
}

impl std::hash::Hash for PropertyConstraint {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.property.hash(state);
        self.kind.hash(state);
        self.value.to_bits().hash(state);
    }
}

impl std::fmt::Display for PropertyConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.property.fragment(), self.kind, self.value)
    }
}

/// Inclusive interval `[min, max]` of admissible property values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueBound {
    min: f64,
    max: f64,
}

impl ValueBound {
    #[inline]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Admits every value.
    #[inline]
    pub const fn unbounded() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.min <= self.max)
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Intersection of two bounds, `None` if they are disjoint.
    pub fn intersect(&self, other: &ValueBound) -> Option<ValueBound> {
        let bound = ValueBound::new(self.min.max(other.min), self.max.min(other.max));
        (!bound.is_empty()).then_some(bound)
    }
}

impl std::fmt::Display for ValueBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Merges constraints on `property` into one bound.
///
/// # Errors
///
/// `ModelError::Unsatisfiable` if the constraints admit no value.
///
/// ```rust
/// # use troupe_model::resource::{merge_constraints, ConstraintKind, PropertyConstraint};
/// let cs = [
///     PropertyConstraint::new("capacity", ConstraintKind::GreaterOrEqual, 10.0),
///     PropertyConstraint::new("capacity", ConstraintKind::LessOrEqual, 20.0),
/// ];
/// let b = merge_constraints(&"capacity".into(), &cs).unwrap();
/// assert_eq!((b.min(), b.max()), (10.0, 20.0));
/// ```
pub fn merge_constraints(
    property: &ResourceModel,
    constraints: &[PropertyConstraint],
) -> Result<ValueBound, ModelError> {
    let mut bound = ValueBound::unbounded();
    for c in constraints.iter().filter(|c| &c.property == property) {
        bound = bound
            .intersect(&c.to_bound())
            .ok_or_else(|| ModelError::Unsatisfiable {
                property: property.clone(),
                reason: format!("'{}' contradicts the bound {}", c, bound),
            })?;
    }
    Ok(bound)
}

fn next_above(v: f64) -> f64 {
    if v.is_nan() || v == f64::INFINITY {
        return v;
    }
    if v == 0.0 {
        return f64::from_bits(1);
    }
    let bits = v.to_bits();
    f64::from_bits(if v > 0.0 { bits + 1 } else { bits - 1 })
}

fn next_below(v: f64) -> f64 {
    -next_above(-v)
}

/// A requested or offered resource: a model plus property constraints.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Resource {
    model: ResourceModel,
    constraints: Vec<PropertyConstraint>,
}

impl Resource {
    /// A resource without constraints.
    #[inline]
    pub fn new(model: impl Into<ResourceModel>) -> Self {
        Self {
            model: model.into(),
            constraints: Vec::new(),
        }
    }

    /// Adds a constraint (builder style). Constraints are kept sorted so that
    /// equal resources compare equal regardless of insertion order.
    pub fn with_constraint(mut self, constraint: PropertyConstraint) -> Self {
        let pos = self.constraints.partition_point(|c| c <= &constraint);
        self.constraints.insert(pos, constraint);
        self
    }

    #[inline]
    pub fn model(&self) -> &ResourceModel {
        &self.model
    }

    #[inline]
    pub fn constraints(&self) -> &[PropertyConstraint] {
        &self.constraints
    }

    #[inline]
    pub fn has_constraints(&self) -> bool {
        !self.constraints.is_empty()
    }

    /// Constraints grouped by property.
    pub fn clusters(&self) -> BTreeMap<ResourceModel, Vec<PropertyConstraint>> {
        let mut clusters: BTreeMap<ResourceModel, Vec<PropertyConstraint>> = BTreeMap::new();
        for c in &self.constraints {
            clusters.entry(c.property.clone()).or_default().push(c.clone());
        }
        clusters
    }
}

impl From<ResourceModel> for Resource {
    fn from(model: ResourceModel) -> Self {
        Self::new(model)
    }
}

impl From<&str> for Resource {
    fn from(model: &str) -> Self {
        Self::new(model)
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.model.fragment())?;
        if !self.constraints.is_empty() {
            write!(f, " [")?;
            for (i, c) in self.constraints.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{c}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
