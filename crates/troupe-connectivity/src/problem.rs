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

//! # Connectivity Problem
//!
//! `ConnectivityProblem` is the immutable half of a connectivity search: the
//! instances of the pool under test, the interface endpoints each instance
//! owns, the compatibility relation between interface types and, per
//! endpoint, the static domain of endpoints it could ever be wired to.
//!
//! Instances are laid out in pool order (ascending model), so all instances
//! of one model are adjacent and carry ordinals `0..count`.
//!
//! Problems are normally derived from a `ModelPool` through a `ModelQuery`
//! with `ConnectivityProblem::from_pool`. `ConnectivityProblemBuilder` builds
//! them by hand, which is what the tests do.

use crate::index::{InstanceIndex, InterfaceIndex, InterfaceTypeIndex};
use fixedbitset::FixedBitSet;
use smallvec::SmallVec;
use std::collections::BTreeMap;
use troupe_model::cardinality;
use troupe_model::model::ResourceModel;
use troupe_model::pool::ModelPool;
use troupe_model::query::ModelQuery;
use troupe_model::vocabulary;

/// A resource instance and its position among the instances of its model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance {
    model: ResourceModel,
    model_index: usize,
    ordinal: usize,
    endpoints: SmallVec<InterfaceIndex, 4>,
}

impl Instance {
    #[inline]
    pub fn model(&self) -> &ResourceModel {
        &self.model
    }

    /// Dense index of the model among the models of the problem.
    #[inline]
    pub fn model_index(&self) -> usize {
        self.model_index
    }

    /// Position among the instances of the same model.
    #[inline]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    #[inline]
    pub fn endpoints(&self) -> &[InterfaceIndex] {
        &self.endpoints
    }
}

impl std::fmt::Display for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.model.fragment(), self.ordinal)
    }
}

/// The immutable search space of one connectivity run.
#[derive(Clone, Debug)]
pub struct ConnectivityProblem {
    models: Vec<ResourceModel>,
    instances: Vec<Instance>,
    interface_types: Vec<ResourceModel>,
    endpoint_instance: Vec<InstanceIndex>,
    endpoint_type: Vec<InterfaceTypeIndex>,
    compatibility: FixedBitSet,
    candidates: Vec<SmallVec<InterfaceIndex, 8>>,
}

impl ConnectivityProblem {
    /// Derives the problem for `pool`.
    ///
    /// Each instance receives the endpoints declared by the `has`
    /// restrictions of its model whose qualification is `interface_base` or
    /// one of its subclasses, at maximum cardinality. Two interface types are
    /// compatible when `compatibleWith` relates them in either direction.
    pub fn from_pool<Q>(pool: &ModelPool, query: &Q, interface_base: &ResourceModel) -> Self
    where
        Q: ModelQuery + ?Sized,
    {
        let mut builder = ConnectivityProblemBuilder::new();
        for (model, count) in pool.iter() {
            if count == 0 {
                continue;
            }
            let interfaces = interfaces_of(query, model, interface_base);
            for _ in 0..count {
                let instance = builder.add_instance(model.clone());
                for (interface, n) in &interfaces {
                    for _ in 0..*n {
                        builder.add_interface(instance, interface.clone());
                    }
                }
            }
        }

        let relation = vocabulary::compatible_with();
        let types = builder.interface_types.clone();
        for (i, a) in types.iter().enumerate() {
            for b in &types[i..] {
                if query.is_related_to(a, &relation, b) || query.is_related_to(b, &relation, a) {
                    builder.add_compatibility(a.clone(), b.clone());
                }
            }
        }

        builder.build()
    }

    #[inline]
    pub fn num_instances(&self) -> usize {
        self.instances.len()
    }

    #[inline]
    pub fn num_endpoints(&self) -> usize {
        self.endpoint_instance.len()
    }

    #[inline]
    pub fn num_interface_types(&self) -> usize {
        self.interface_types.len()
    }

    #[inline]
    pub fn num_models(&self) -> usize {
        self.models.len()
    }

    /// Returns `true` if the problem has no instances at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    #[inline]
    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    /// # Panics
    ///
    /// Panics if `instance` is out of bounds.
    #[inline]
    pub fn instance(&self, instance: InstanceIndex) -> &Instance {
        &self.instances[instance.get()]
    }

    /// # Panics
    ///
    /// Panics if `endpoint` is out of bounds.
    #[inline]
    pub fn endpoint_instance(&self, endpoint: InterfaceIndex) -> InstanceIndex {
        self.endpoint_instance[endpoint.get()]
    }

    /// # Panics
    ///
    /// Panics if `endpoint` is out of bounds.
    #[inline]
    pub fn endpoint_type(&self, endpoint: InterfaceIndex) -> InterfaceTypeIndex {
        self.endpoint_type[endpoint.get()]
    }

    /// The interface model of `endpoint`.
    #[inline]
    pub fn endpoint_model(&self, endpoint: InterfaceIndex) -> &ResourceModel {
        &self.interface_types[self.endpoint_type(endpoint).get()]
    }

    #[inline]
    pub fn interface_type(&self, interface_type: InterfaceTypeIndex) -> &ResourceModel {
        &self.interface_types[interface_type.get()]
    }

    #[inline]
    pub fn is_compatible(&self, a: InterfaceTypeIndex, b: InterfaceTypeIndex) -> bool {
        self.compatibility
            .contains(a.get() * self.interface_types.len() + b.get())
    }

    /// Endpoints on other instances that `endpoint` could be wired to.
    #[inline]
    pub fn candidates(&self, endpoint: InterfaceIndex) -> &[InterfaceIndex] {
        &self.candidates[endpoint.get()]
    }
}

impl std::fmt::Display for ConnectivityProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ConnectivityProblem(instances: {}, endpoints: {}, interface types: {})",
            self.num_instances(),
            self.num_endpoints(),
            self.num_interface_types()
        )
    }
}

/// Interface models and their counts declared by `model`.
fn interfaces_of<Q>(
    query: &Q,
    model: &ResourceModel,
    interface_base: &ResourceModel,
) -> Vec<(ResourceModel, u32)>
where
    Q: ModelQuery + ?Sized,
{
    let restrictions = query.cardinality_restrictions(model, &vocabulary::has());
    cardinality::bounds(&restrictions)
        .into_iter()
        .filter(|(q, bound)| bound.max > 0 && query.is_same_or_subclass_of(q, interface_base))
        .map(|(q, bound)| (q, bound.max))
        .collect()
}

/// Builds a `ConnectivityProblem` instance by instance.
///
/// # Examples
///
/// ```rust
/// use troupe_connectivity::problem::ConnectivityProblemBuilder;
///
/// let mut b = ConnectivityProblemBuilder::new();
/// let rover = b.add_instance("Rover");
/// let dock = b.add_instance("Dock");
/// b.add_interface(rover, "Plug");
/// b.add_interface(dock, "Socket");
/// b.add_compatibility("Plug", "Socket");
/// let problem = b.build();
///
/// assert_eq!(problem.num_instances(), 2);
/// assert_eq!(problem.num_endpoints(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ConnectivityProblemBuilder {
    models: Vec<ResourceModel>,
    model_lookup: BTreeMap<ResourceModel, usize>,
    instance_model: Vec<usize>,
    interface_types: Vec<ResourceModel>,
    type_lookup: BTreeMap<ResourceModel, usize>,
    endpoint_instance: Vec<InstanceIndex>,
    endpoint_type: Vec<InterfaceTypeIndex>,
    compatible_pairs: Vec<(usize, usize)>,
}

impl ConnectivityProblemBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_instance(&mut self, model: impl Into<ResourceModel>) -> InstanceIndex {
        let model = model.into();
        let model_index = match self.model_lookup.get(&model) {
            Some(&i) => i,
            None => {
                let i = self.models.len();
                self.models.push(model.clone());
                self.model_lookup.insert(model, i);
                i
            }
        };
        self.instance_model.push(model_index);
        InstanceIndex::new(self.instance_model.len() - 1)
    }

    /// # Panics
    ///
    /// Panics if `instance` has not been added.
    pub fn add_interface(
        &mut self,
        instance: InstanceIndex,
        interface_type: impl Into<ResourceModel>,
    ) -> InterfaceIndex {
        assert!(
            instance.get() < self.instance_model.len(),
            "called `ConnectivityProblemBuilder::add_interface` with instance index out of bounds: the len is {} but the index is {}",
            self.instance_model.len(),
            instance.get()
        );
        let type_index = self.intern_type(interface_type.into());
        self.endpoint_instance.push(instance);
        self.endpoint_type.push(InterfaceTypeIndex::new(type_index));
        InterfaceIndex::new(self.endpoint_instance.len() - 1)
    }

    /// Declares two interface types compatible. The relation is symmetric.
    pub fn add_compatibility(
        &mut self,
        a: impl Into<ResourceModel>,
        b: impl Into<ResourceModel>,
    ) -> &mut Self {
        let a = self.intern_type(a.into());
        let b = self.intern_type(b.into());
        self.compatible_pairs.push((a, b));
        self
    }

    fn intern_type(&mut self, model: ResourceModel) -> usize {
        if let Some(&i) = self.type_lookup.get(&model) {
            return i;
        }
        let i = self.interface_types.len();
        self.interface_types.push(model.clone());
        self.type_lookup.insert(model, i);
        i
    }

    pub fn build(self) -> ConnectivityProblem {
        let num_types = self.interface_types.len();
        let mut compatibility = FixedBitSet::with_capacity(num_types * num_types);
        for &(a, b) in &self.compatible_pairs {
            compatibility.insert(a * num_types + b);
            compatibility.insert(b * num_types + a);
        }

        let mut ordinals = vec![0usize; self.models.len()];
        let mut instances: Vec<Instance> = self
            .instance_model
            .iter()
            .map(|&model_index| {
                let ordinal = ordinals[model_index];
                ordinals[model_index] += 1;
                Instance {
                    model: self.models[model_index].clone(),
                    model_index,
                    ordinal,
                    endpoints: SmallVec::new(),
                }
            })
            .collect();
        for (e, instance) in self.endpoint_instance.iter().enumerate() {
            instances[instance.get()]
                .endpoints
                .push(InterfaceIndex::new(e));
        }

        let num_endpoints = self.endpoint_instance.len();
        let mut candidates = Vec::with_capacity(num_endpoints);
        for e in 0..num_endpoints {
            let mut domain: SmallVec<InterfaceIndex, 8> = SmallVec::new();
            let e_type = self.endpoint_type[e].get();
            for p in 0..num_endpoints {
                if self.endpoint_instance[p] == self.endpoint_instance[e] {
                    continue;
                }
                if compatibility.contains(e_type * num_types + self.endpoint_type[p].get()) {
                    domain.push(InterfaceIndex::new(p));
                }
            }
            candidates.push(domain);
        }

        ConnectivityProblem {
            models: self.models,
            instances,
            interface_types: self.interface_types,
            endpoint_instance: self.endpoint_instance,
            endpoint_type: self.endpoint_type,
            compatibility,
            candidates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use troupe_model::catalog::CatalogBuilder;

    #[test]
    fn test_builder_assigns_ordinals_per_model() {
        let mut b = ConnectivityProblemBuilder::new();
        let a0 = b.add_instance("A");
        let b0 = b.add_instance("B");
        let a1 = b.add_instance("A");
        let p = b.build();

        assert_eq!(p.instance(a0).ordinal(), 0);
        assert_eq!(p.instance(a1).ordinal(), 1);
        assert_eq!(p.instance(b0).ordinal(), 0);
        assert_eq!(p.instance(a0).model_index(), p.instance(a1).model_index());
        assert_ne!(p.instance(a0).model_index(), p.instance(b0).model_index());
        assert_eq!(p.num_models(), 2);
        assert_eq!(format!("{}", p.instance(a1)), "A#1");
    }

    #[test]
    fn test_candidates_exclude_own_instance_and_incompatible_types() {
        let mut b = ConnectivityProblemBuilder::new();
        let x = b.add_instance("X");
        let y = b.add_instance("Y");
        let x_plug = b.add_interface(x, "Plug");
        let x_socket = b.add_interface(x, "Socket");
        let y_plug = b.add_interface(y, "Plug");
        let y_socket = b.add_interface(y, "Socket");
        b.add_compatibility("Plug", "Socket");
        let p = b.build();

        assert_eq!(p.candidates(x_plug), &[y_socket]);
        assert_eq!(p.candidates(x_socket), &[y_plug]);
        assert_eq!(p.candidates(y_plug), &[x_socket]);
        assert!(p.is_compatible(p.endpoint_type(x_plug), p.endpoint_type(y_socket)));
        assert!(!p.is_compatible(p.endpoint_type(x_plug), p.endpoint_type(y_plug)));
    }

    #[test]
    fn test_from_pool_reads_interfaces_from_restrictions() {
        let catalog = CatalogBuilder::new()
            .subclass("Plug", vocabulary::electro_mechanical_interface())
            .subclass("Socket", vocabulary::electro_mechanical_interface())
            .compatible("Socket", "Plug")
            .has("Rover", "Plug", 0, 2)
            .has("Rover", "Camera", 1, 1)
            .has("Dock", "Socket", 1, 1)
            .build();

        let pool = ModelPool::from_pairs([("Rover", 2), ("Dock", 1)]);
        let p = ConnectivityProblem::from_pool(
            &pool,
            &catalog,
            &vocabulary::electro_mechanical_interface(),
        );

        assert_eq!(p.num_instances(), 3);
        // Camera is not an interface, the two plugs per rover are taken at max.
        assert_eq!(p.num_endpoints(), 5);
        assert_eq!(p.num_interface_types(), 2);

        let dock = p
            .instances()
            .iter()
            .find(|i| i.model().as_str() == "Dock")
            .map(|i| i.endpoints()[0]);
        let dock = match dock {
            Some(e) => e,
            None => panic!("expected a dock endpoint"),
        };
        assert_eq!(p.candidates(dock).len(), 4);
    }

    #[test]
    fn test_from_pool_skips_zero_counts() {
        let catalog = CatalogBuilder::new().build();
        let pool = ModelPool::from_pairs([("Rover", 0)]);
        let p = ConnectivityProblem::from_pool(
            &pool,
            &catalog,
            &vocabulary::electro_mechanical_interface(),
        );
        assert!(p.is_empty());
        assert_eq!(p.num_endpoints(), 0);
    }
}
