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

//! Search state of the connectivity solver.
//!
//! `SearchState` holds the partner variable of every endpoint, which
//! endpoints are decided, how many decided endpoints each instance has and a
//! rollback disjoint-set over instances describing the components of the
//! partial graph.
//!
//! An endpoint is *open* while undecided. Deciding it either wires it to an
//! open partner (both become decided) or leaves it unconnected. An instance
//! without decided endpoints is *untouched*; untouched instances of one model
//! are interchangeable, which the branching exploits.
//!
//! Mutation goes through `SearchTrail` so every change can be undone.

use crate::index::{InstanceIndex, InterfaceIndex};
use fixedbitset::FixedBitSet;
use troupe_core::collections::disjoint_set::RollbackDisjointSet;

#[derive(Debug, Clone)]
pub struct SearchState {
    partners: Vec<Option<InterfaceIndex>>,
    decided: FixedBitSet,
    decided_per_instance: Vec<u32>,
    components: RollbackDisjointSet,
    num_decided: usize,
    num_connections: usize,
}

impl SearchState {
    pub fn new(num_instances: usize, num_endpoints: usize) -> Self {
        Self {
            partners: vec![None; num_endpoints],
            decided: FixedBitSet::with_capacity(num_endpoints),
            decided_per_instance: vec![0; num_instances],
            components: RollbackDisjointSet::new(num_instances),
            num_decided: 0,
            num_connections: 0,
        }
    }

    #[inline]
    pub fn num_instances(&self) -> usize {
        self.decided_per_instance.len()
    }

    #[inline]
    pub fn num_endpoints(&self) -> usize {
        self.partners.len()
    }

    #[inline]
    pub fn num_decided(&self) -> usize {
        self.num_decided
    }

    #[inline]
    pub fn num_connections(&self) -> usize {
        self.num_connections
    }

    #[inline]
    pub fn num_components(&self) -> usize {
        self.components.components()
    }

    /// Returns `true` once all instances form one component. An empty state
    /// is connected.
    #[inline]
    pub fn is_connected(&self) -> bool {
        self.components.components() <= 1
    }

    #[inline]
    pub fn is_open(&self, endpoint: InterfaceIndex) -> bool {
        !self.decided.contains(endpoint.get())
    }

    #[inline]
    pub fn partner(&self, endpoint: InterfaceIndex) -> Option<InterfaceIndex> {
        self.partners[endpoint.get()]
    }

    #[inline]
    pub fn is_untouched(&self, instance: InstanceIndex) -> bool {
        self.decided_per_instance[instance.get()] == 0
    }

    /// Representative of the component containing `instance`.
    #[inline]
    pub fn component_of(&self, instance: InstanceIndex) -> usize {
        self.components.find(instance.get())
    }

    #[inline]
    pub fn component_size(&self, instance: InstanceIndex) -> usize {
        self.components.size_of(instance.get())
    }

    #[inline]
    pub fn same_component(&self, a: InstanceIndex, b: InstanceIndex) -> bool {
        self.components.same(a.get(), b.get())
    }

    #[inline]
    pub fn components(&self) -> &RollbackDisjointSet {
        &self.components
    }

    /// Iterates over the wired endpoint pairs, each pair once with the lower
    /// endpoint first.
    pub fn connections(&self) -> impl Iterator<Item = (InterfaceIndex, InterfaceIndex)> + '_ {
        self.partners
            .iter()
            .enumerate()
            .filter_map(|(e, partner)| match partner {
                Some(p) if e < p.get() => Some((InterfaceIndex::new(e), *p)),
                _ => None,
            })
    }

    /// Wires two open endpoints. Returns `true` if two components merged.
    pub(crate) fn connect(
        &mut self,
        endpoint: InterfaceIndex,
        endpoint_instance: InstanceIndex,
        partner: InterfaceIndex,
        partner_instance: InstanceIndex,
    ) -> bool {
        debug_assert!(
            self.is_open(endpoint) && self.is_open(partner),
            "called `SearchState::connect` with a decided endpoint: {} or {}",
            endpoint,
            partner
        );
        debug_assert_ne!(endpoint_instance, partner_instance);

        self.partners[endpoint.get()] = Some(partner);
        self.partners[partner.get()] = Some(endpoint);
        self.mark_decided(endpoint, endpoint_instance);
        self.mark_decided(partner, partner_instance);
        self.num_connections += 1;
        self.components
            .union(endpoint_instance.get(), partner_instance.get())
    }

    /// Reverts `connect`. Must be called in reverse order of the merges.
    pub(crate) fn disconnect(
        &mut self,
        endpoint: InterfaceIndex,
        endpoint_instance: InstanceIndex,
        partner: InterfaceIndex,
        partner_instance: InstanceIndex,
        merged: bool,
    ) {
        if merged {
            self.components.undo_last();
        }
        self.num_connections -= 1;
        self.unmark_decided(partner, partner_instance);
        self.unmark_decided(endpoint, endpoint_instance);
        self.partners[partner.get()] = None;
        self.partners[endpoint.get()] = None;
    }

    pub(crate) fn leave_unconnected(&mut self, endpoint: InterfaceIndex, instance: InstanceIndex) {
        debug_assert!(
            self.is_open(endpoint),
            "called `SearchState::leave_unconnected` with a decided endpoint: {}",
            endpoint
        );
        self.mark_decided(endpoint, instance);
    }

    pub(crate) fn reopen(&mut self, endpoint: InterfaceIndex, instance: InstanceIndex) {
        self.unmark_decided(endpoint, instance);
    }

    #[inline]
    fn mark_decided(&mut self, endpoint: InterfaceIndex, instance: InstanceIndex) {
        self.decided.insert(endpoint.get());
        self.decided_per_instance[instance.get()] += 1;
        self.num_decided += 1;
    }

    #[inline]
    fn unmark_decided(&mut self, endpoint: InterfaceIndex, instance: InstanceIndex) {
        self.decided.set(endpoint.get(), false);
        self.decided_per_instance[instance.get()] -= 1;
        self.num_decided -= 1;
    }
}

impl std::fmt::Display for SearchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchState(decided: {}/{}, connections: {}, components: {})",
            self.num_decided,
            self.num_endpoints(),
            self.num_connections,
            self.num_components()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ii(i: usize) -> InstanceIndex {
        InstanceIndex::new(i)
    }

    fn ei(i: usize) -> InterfaceIndex {
        InterfaceIndex::new(i)
    }

    #[test]
    fn test_fresh_state() {
        let s = SearchState::new(3, 4);
        assert_eq!(s.num_components(), 3);
        assert!(!s.is_connected());
        assert!((0..4).all(|e| s.is_open(ei(e))));
        assert!((0..3).all(|i| s.is_untouched(ii(i))));
        assert_eq!(s.connections().count(), 0);
    }

    #[test]
    fn test_empty_state_is_connected() {
        assert!(SearchState::new(0, 0).is_connected());
        assert!(SearchState::new(1, 0).is_connected());
    }

    #[test]
    fn test_connect_and_disconnect_round_trip() {
        let mut s = SearchState::new(2, 2);
        let merged = s.connect(ei(0), ii(0), ei(1), ii(1));
        assert!(merged);
        assert!(s.is_connected());
        assert_eq!(s.partner(ei(0)), Some(ei(1)));
        assert_eq!(s.partner(ei(1)), Some(ei(0)));
        assert_eq!(s.num_decided(), 2);
        assert_eq!(s.connections().collect::<Vec<_>>(), vec![(ei(0), ei(1))]);
        assert!(!s.is_untouched(ii(0)));

        s.disconnect(ei(0), ii(0), ei(1), ii(1), merged);
        assert_eq!(s.num_components(), 2);
        assert_eq!(s.partner(ei(0)), None);
        assert!(s.is_open(ei(0)) && s.is_open(ei(1)));
        assert!(s.is_untouched(ii(0)) && s.is_untouched(ii(1)));
        assert_eq!(s.num_connections(), 0);
    }

    #[test]
    fn test_leave_unconnected_touches_instance() {
        let mut s = SearchState::new(2, 2);
        s.leave_unconnected(ei(1), ii(1));
        assert!(!s.is_open(ei(1)));
        assert!(!s.is_untouched(ii(1)));
        assert_eq!(s.num_components(), 2);
        s.reopen(ei(1), ii(1));
        assert!(s.is_open(ei(1)));
        assert!(s.is_untouched(ii(1)));
    }
}
