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

//! # Model Query Service
//!
//! `ModelQuery` is the only channel through which the engines learn about the
//! world: the taxonomy, the cardinality restrictions a model carries and
//! scalar data properties. Ontology storage and reasoning live behind it.
//!
//! Implementations are expected to answer repeated queries cheaply; the
//! mapping engine asks the same questions for every enumerated combination.

use crate::cardinality::CardinalityRestriction;
use crate::model::ResourceModel;

/// Read-only access to the organization model.
pub trait ModelQuery {
    /// Subclasses of `model`, excluding `model` itself. Only the direct
    /// children when `direct_only` is set.
    fn subclasses_of(&self, model: &ResourceModel, direct_only: bool) -> Vec<ResourceModel>;

    /// Returns `true` if `model` is a strict subclass of `parent`.
    fn is_subclass_of(&self, model: &ResourceModel, parent: &ResourceModel) -> bool;

    /// Restrictions on `relation` that apply to `model`, inherited ones
    /// included.
    fn cardinality_restrictions(
        &self,
        model: &ResourceModel,
        relation: &ResourceModel,
    ) -> Vec<CardinalityRestriction>;

    /// Value of the data property `property` for `model`, if asserted.
    fn data_property_value(&self, model: &ResourceModel, property: &ResourceModel) -> Option<f64>;

    /// Returns `true` if `subject relation object` holds.
    fn is_related_to(
        &self,
        subject: &ResourceModel,
        relation: &ResourceModel,
        object: &ResourceModel,
    ) -> bool {
        let _ = (subject, relation, object);
        false
    }

    /// Returns `true` if `model` equals `parent` or is a subclass of it.
    #[inline]
    fn is_same_or_subclass_of(&self, model: &ResourceModel, parent: &ResourceModel) -> bool {
        model == parent || self.is_subclass_of(model, parent)
    }
}

impl<Q> ModelQuery for &Q
where
    Q: ModelQuery + ?Sized,
{
    #[inline]
    fn subclasses_of(&self, model: &ResourceModel, direct_only: bool) -> Vec<ResourceModel> {
        (**self).subclasses_of(model, direct_only)
    }

    #[inline]
    fn is_subclass_of(&self, model: &ResourceModel, parent: &ResourceModel) -> bool {
        (**self).is_subclass_of(model, parent)
    }

    #[inline]
    fn cardinality_restrictions(
        &self,
        model: &ResourceModel,
        relation: &ResourceModel,
    ) -> Vec<CardinalityRestriction> {
        (**self).cardinality_restrictions(model, relation)
    }

    #[inline]
    fn data_property_value(&self, model: &ResourceModel, property: &ResourceModel) -> Option<f64> {
        (**self).data_property_value(model, property)
    }

    #[inline]
    fn is_related_to(
        &self,
        subject: &ResourceModel,
        relation: &ResourceModel,
        object: &ResourceModel,
    ) -> bool {
        (**self).is_related_to(subject, relation, object)
    }
}
