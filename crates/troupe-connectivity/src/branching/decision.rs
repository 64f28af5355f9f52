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

//! Decisions and the `DecisionBuilder` contract.
//!
//! A decision fixes the variable of one open endpoint: either to an open
//! partner endpoint on an instance in another component, or to
//! "unconnected". Builders only ever propose partners outside the
//! endpoint's component. Any connected labeling contains a spanning tree
//! whose edges all join distinct components at the moment they are added, so
//! this loses no solutions.
//!
//! This module also hosts the helpers shared by all builders: the dynamic
//! candidate filter, variable selection and the symmetry classes of
//! partners.

use crate::index::{InstanceIndex, InterfaceIndex, InterfaceTypeIndex};
use crate::problem::ConnectivityProblem;
use crate::state::SearchState;
use smallvec::SmallVec;
use std::iter::FusedIterator;

/// Fixes the partner variable of `endpoint`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Decision {
    endpoint: InterfaceIndex,
    partner: Option<InterfaceIndex>,
}

impl Decision {
    /// Wires `endpoint` to `partner`.
    #[inline]
    pub fn connect(endpoint: InterfaceIndex, partner: InterfaceIndex) -> Self {
        Self {
            endpoint,
            partner: Some(partner),
        }
    }

    /// Leaves `endpoint` unconnected.
    #[inline]
    pub fn unconnected(endpoint: InterfaceIndex) -> Self {
        Self {
            endpoint,
            partner: None,
        }
    }

    #[inline]
    pub fn endpoint(&self) -> InterfaceIndex {
        self.endpoint
    }

    #[inline]
    pub fn partner(&self) -> Option<InterfaceIndex> {
        self.partner
    }

    #[inline]
    pub fn is_connection(&self) -> bool {
        self.partner.is_some()
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.partner {
            Some(partner) => write!(f, "Decision({} <-> {})", self.endpoint, partner),
            None => write!(f, "Decision({} unconnected)", self.endpoint),
        }
    }
}

/// Produces the alternatives for the next decision level.
///
/// The solver pushes the emitted decisions onto a LIFO stack, so builders
/// emit them least preferred first. An empty iterator marks a dead end.
pub trait DecisionBuilder {
    type DecisionIterator<'a>: Iterator<Item = Decision> + FusedIterator + 'a
    where
        Self: 'a;

    fn name(&self) -> &str;

    fn next_decision<'a>(
        &'a mut self,
        problem: &'a ConnectivityProblem,
        state: &'a SearchState,
    ) -> Self::DecisionIterator<'a>;
}

/// Open endpoints on other components that `endpoint` can be wired to.
#[inline]
pub fn open_candidates<'a>(
    problem: &'a ConnectivityProblem,
    state: &'a SearchState,
    endpoint: InterfaceIndex,
) -> impl Iterator<Item = InterfaceIndex> + 'a {
    let instance = problem.endpoint_instance(endpoint);
    problem
        .candidates(endpoint)
        .iter()
        .copied()
        .filter(move |&p| {
            state.is_open(p) && !state.same_component(instance, problem.endpoint_instance(p))
        })
}

/// Interchangeable partners share a key.
///
/// Open endpoints of one interface type on the same instance are
/// interchangeable, and so are endpoints of one type on untouched instances
/// of the same model.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartnerKey {
    Untouched {
        model: usize,
        interface_type: InterfaceTypeIndex,
    },
    Instance {
        instance: InstanceIndex,
        interface_type: InterfaceTypeIndex,
    },
}

impl PartnerKey {
    #[inline]
    pub fn of(problem: &ConnectivityProblem, state: &SearchState, partner: InterfaceIndex) -> Self {
        let instance = problem.endpoint_instance(partner);
        let interface_type = problem.endpoint_type(partner);
        if state.is_untouched(instance) {
            PartnerKey::Untouched {
                model: problem.instance(instance).model_index(),
                interface_type,
            }
        } else {
            PartnerKey::Instance {
                instance,
                interface_type,
            }
        }
    }
}

/// Collects one representative per symmetry class of the open candidates of
/// `endpoint` into `out`, in candidate order. Returns the number of open
/// candidates before deduplication.
pub fn representative_partners(
    problem: &ConnectivityProblem,
    state: &SearchState,
    endpoint: InterfaceIndex,
    out: &mut Vec<InterfaceIndex>,
) -> usize {
    out.clear();
    let mut seen: SmallVec<PartnerKey, 8> = SmallVec::new();
    let mut total = 0;
    for partner in open_candidates(problem, state, endpoint) {
        total += 1;
        let key = PartnerKey::of(problem, state, partner);
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        out.push(partner);
    }
    total
}

/// Picks the next endpoint to branch on.
///
/// Only open endpoints with at least one open candidate qualify. With
/// `largest_component_first` the endpoint is taken from the largest
/// component that has a qualifying endpoint, preferring the fewest
/// candidates; otherwise the lowest qualifying index wins. Ties resolve to
/// the lower index.
pub fn select_endpoint(
    problem: &ConnectivityProblem,
    state: &SearchState,
    largest_component_first: bool,
) -> Option<InterfaceIndex> {
    let mut best: Option<(InterfaceIndex, usize, usize)> = None;
    for e in InterfaceIndex::range(problem.num_endpoints()) {
        if !state.is_open(e) {
            continue;
        }
        let count = open_candidates(problem, state, e).count();
        if count == 0 {
            continue;
        }
        if !largest_component_first {
            return Some(e);
        }
        let size = state.component_size(problem.endpoint_instance(e));
        let better = match best {
            None => true,
            Some((_, best_size, best_count)) => {
                size > best_size || (size == best_size && count < best_count)
            }
        };
        if better {
            best = Some((e, size, count));
        }
    }
    best.map(|(e, _, _)| e)
}
