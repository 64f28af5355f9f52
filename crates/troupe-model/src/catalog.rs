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

//! # In-Memory Catalog
//!
//! `Catalog` is a self-contained `ModelQuery` implementation for taxonomies
//! that already live in memory: unit tests, benches and embedding
//! applications that assemble their model catalog programmatically.
//!
//! The catalog is assembled with `CatalogBuilder` and frozen by `build`,
//! which computes the transitive subclass closure once. Afterwards every
//! query is a map lookup. Restrictions and data properties are inherited
//! from superclasses, as an OWL reasoner would report them.
//!
//! ```rust
//! use troupe_model::catalog::CatalogBuilder;
//! use troupe_model::query::ModelQuery;
//!
//! let catalog = CatalogBuilder::new()
//!     .subclass("Sherpa", "Rover")
//!     .subclass("Rover", "Actor")
//!     .build();
//! assert!(catalog.is_subclass_of(&"Sherpa".into(), &"Actor".into()));
//! assert!(!catalog.is_subclass_of(&"Actor".into(), &"Sherpa".into()));
//! ```

use crate::cardinality::CardinalityRestriction;
use crate::model::ResourceModel;
use crate::query::ModelQuery;
use crate::vocabulary;
use std::collections::{BTreeMap, BTreeSet};

type Edges = BTreeMap<ResourceModel, BTreeSet<ResourceModel>>;

/// Mutable assembly stage of a `Catalog`.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    parents: Edges,
    restrictions: BTreeMap<ResourceModel, Vec<CardinalityRestriction>>,
    data: BTreeMap<ResourceModel, BTreeMap<ResourceModel, f64>>,
    relations: BTreeSet<(ResourceModel, ResourceModel, ResourceModel)>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `child` a direct subclass of `parent`.
    pub fn subclass(mut self, child: impl Into<ResourceModel>, parent: impl Into<ResourceModel>) -> Self {
        self.parents.entry(child.into()).or_default().insert(parent.into());
        self
    }

    /// Attaches a cardinality restriction to `model`.
    pub fn restriction(mut self, model: impl Into<ResourceModel>, restriction: CardinalityRestriction) -> Self {
        self.restrictions.entry(model.into()).or_default().push(restriction);
        self
    }

    /// Shorthand for `has min <min>` and `has max <max>` on `qualification`.
    pub fn has(
        self,
        model: impl Into<ResourceModel>,
        qualification: impl Into<ResourceModel>,
        min: u32,
        max: u32,
    ) -> Self {
        let model = model.into();
        let qualification = qualification.into();
        self.restriction(
            model.clone(),
            CardinalityRestriction::min(vocabulary::has(), qualification.clone(), min),
        )
        .restriction(model, CardinalityRestriction::max(vocabulary::has(), qualification, max))
    }

    /// Asserts a scalar data property.
    pub fn data_property(
        mut self,
        model: impl Into<ResourceModel>,
        property: impl Into<ResourceModel>,
        value: f64,
    ) -> Self {
        self.data.entry(model.into()).or_default().insert(property.into(), value);
        self
    }

    /// Asserts `subject relation object`.
    pub fn relation(
        mut self,
        subject: impl Into<ResourceModel>,
        relation: impl Into<ResourceModel>,
        object: impl Into<ResourceModel>,
    ) -> Self {
        self.relations.insert((subject.into(), relation.into(), object.into()));
        self
    }

    /// Declares two interface types compatible.
    pub fn compatible(self, a: impl Into<ResourceModel>, b: impl Into<ResourceModel>) -> Self {
        self.relation(a, vocabulary::compatible_with(), b)
    }

    /// Freezes the catalog and computes the subclass closure.
    pub fn build(self) -> Catalog {
        let mut children: Edges = BTreeMap::new();
        for (child, parents) in &self.parents {
            for parent in parents {
                children.entry(parent.clone()).or_default().insert(child.clone());
            }
        }
        let ancestors = closure(&self.parents);
        let descendants = closure(&children);
        Catalog {
            children,
            ancestors,
            descendants,
            restrictions: self.restrictions,
            data: self.data,
            relations: self.relations,
        }
    }
}

fn closure(edges: &Edges) -> Edges {
    let mut result = Edges::new();
    for start in edges.keys() {
        let mut reached = BTreeSet::new();
        let mut stack: Vec<&ResourceModel> = edges[start].iter().collect();
        while let Some(next) = stack.pop() {
            if next == start || !reached.insert(next.clone()) {
                continue;
            }
            if let Some(more) = edges.get(next) {
                stack.extend(more.iter());
            }
        }
        result.insert(start.clone(), reached);
    }
    result
}

/// Immutable in-memory organization model.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    children: Edges,
    ancestors: Edges,
    descendants: Edges,
    restrictions: BTreeMap<ResourceModel, Vec<CardinalityRestriction>>,
    data: BTreeMap<ResourceModel, BTreeMap<ResourceModel, f64>>,
    relations: BTreeSet<(ResourceModel, ResourceModel, ResourceModel)>,
}

impl Catalog {
    /// `model` followed by its ancestors in name order.
    fn lineage<'a>(&'a self, model: &'a ResourceModel) -> impl Iterator<Item = &'a ResourceModel> + 'a {
        std::iter::once(model).chain(self.ancestors.get(model).into_iter().flatten())
    }
}

impl ModelQuery for Catalog {
    fn subclasses_of(&self, model: &ResourceModel, direct_only: bool) -> Vec<ResourceModel> {
        let edges = if direct_only { &self.children } else { &self.descendants };
        edges
            .get(model)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn is_subclass_of(&self, model: &ResourceModel, parent: &ResourceModel) -> bool {
        self.ancestors.get(model).is_some_and(|a| a.contains(parent))
    }

    fn cardinality_restrictions(
        &self,
        model: &ResourceModel,
        relation: &ResourceModel,
    ) -> Vec<CardinalityRestriction> {
        self.lineage(model)
            .filter_map(|m| self.restrictions.get(m))
            .flatten()
            .filter(|r| r.relation() == relation)
            .cloned()
            .collect()
    }

    fn data_property_value(&self, model: &ResourceModel, property: &ResourceModel) -> Option<f64> {
        self.lineage(model)
            .find_map(|m| self.data.get(m).and_then(|props| props.get(property)))
            .copied()
    }

    fn is_related_to(
        &self,
        subject: &ResourceModel,
        relation: &ResourceModel,
        object: &ResourceModel,
    ) -> bool {
        self.relations
            .contains(&(subject.clone(), relation.clone(), object.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(id: &str) -> ResourceModel {
        ResourceModel::new(id)
    }

    fn sample() -> Catalog {
        CatalogBuilder::new()
            .subclass("Sherpa", "Rover")
            .subclass("CREX", "Rover")
            .subclass("Rover", "Actor")
            .has("Rover", "EmiPassive", 1, 2)
            .has("Sherpa", "EmiActive", 0, 4)
            .data_property("Rover", "mass", 100.0)
            .data_property("Sherpa", "mass", 160.0)
            .compatible("EmiActive", "EmiPassive")
            .build()
    }

    #[test]
    fn test_transitive_subclasses() {
        let c = sample();
        assert!(c.is_subclass_of(&m("Sherpa"), &m("Actor")));
        assert!(!c.is_subclass_of(&m("Sherpa"), &m("Sherpa")));
        assert!(c.is_same_or_subclass_of(&m("Sherpa"), &m("Sherpa")));

        let mut all = c.subclasses_of(&m("Actor"), false);
        all.sort();
        assert_eq!(all, vec![m("CREX"), m("Rover"), m("Sherpa")]);
        assert_eq!(c.subclasses_of(&m("Actor"), true), vec![m("Rover")]);
        assert!(c.subclasses_of(&m("Unknown"), false).is_empty());
    }

    #[test]
    fn test_restrictions_are_inherited() {
        let c = sample();
        let r = c.cardinality_restrictions(&m("Sherpa"), &vocabulary::has());
        assert_eq!(r.len(), 4);
        let crex = c.cardinality_restrictions(&m("CREX"), &vocabulary::has());
        assert_eq!(crex.len(), 2);
        assert!(c.cardinality_restrictions(&m("Sherpa"), &m("other")).is_empty());
    }

    #[test]
    fn test_data_property_prefers_own_value() {
        let c = sample();
        assert_eq!(c.data_property_value(&m("Sherpa"), &m("mass")), Some(160.0));
        assert_eq!(c.data_property_value(&m("CREX"), &m("mass")), Some(100.0));
        assert_eq!(c.data_property_value(&m("Actor"), &m("mass")), None);
    }

    #[test]
    fn test_relations_are_directed() {
        let c = sample();
        let rel = vocabulary::compatible_with();
        assert!(c.is_related_to(&m("EmiActive"), &rel, &m("EmiPassive")));
        assert!(!c.is_related_to(&m("EmiPassive"), &rel, &m("EmiActive")));
    }

    #[test]
    fn test_cycles_do_not_hang() {
        let c = CatalogBuilder::new().subclass("A", "B").subclass("B", "A").build();
        assert!(c.is_subclass_of(&m("A"), &m("B")));
        assert!(!c.is_subclass_of(&m("A"), &m("A")));
    }
}
