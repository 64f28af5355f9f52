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

//! Completeness propagation.
//!
//! While the partial graph has `c > 1` components, every component needs at
//! least one open endpoint with a compatible open partner outside of it, and
//! the `c - 1` merges still required consume two such endpoints each. A node
//! violating either condition cannot be completed and is pruned.

use crate::index::InterfaceIndex;
use crate::monitor::tree_search_monitor::PruneReason;
use crate::problem::ConnectivityProblem;
use crate::state::SearchState;

#[derive(Debug, Clone, Default)]
pub struct ComponentPropagator {
    has_exit: Vec<bool>,
}

impl ComponentPropagator {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn preallocated(num_instances: usize) -> Self {
        Self {
            has_exit: Vec::with_capacity(num_instances),
        }
    }

    /// Checks whether the open endpoints of `state` can still join all
    /// components.
    pub fn propagate(
        &mut self,
        problem: &ConnectivityProblem,
        state: &SearchState,
    ) -> Result<(), PruneReason> {
        let components = state.num_components();
        if components <= 1 {
            return Ok(());
        }

        self.has_exit.clear();
        self.has_exit.resize(problem.num_instances(), false);

        let mut usable = 0usize;
        for e in InterfaceIndex::range(problem.num_endpoints()) {
            if !state.is_open(e) {
                continue;
            }
            let instance = problem.endpoint_instance(e);
            let reaches_out = problem.candidates(e).iter().any(|&p| {
                state.is_open(p) && !state.same_component(instance, problem.endpoint_instance(p))
            });
            if reaches_out {
                usable += 1;
                self.has_exit[state.component_of(instance)] = true;
            }
        }

        let all_exit = (0..problem.num_instances())
            .filter(|&i| state.components().find(i) == i)
            .all(|root| self.has_exit[root]);
        if !all_exit {
            return Err(PruneReason::Disconnected);
        }
        if usable < 2 * (components - 1) {
            return Err(PruneReason::InterfacesExhausted);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::decision::Decision;
    use crate::problem::ConnectivityProblemBuilder;
    use crate::trail::SearchTrail;

    fn ei(i: usize) -> InterfaceIndex {
        InterfaceIndex::new(i)
    }

    #[test]
    fn test_interface_less_instance_is_disconnected() {
        let mut b = ConnectivityProblemBuilder::new();
        let x = b.add_instance("X");
        let y = b.add_instance("Y");
        b.add_instance("Bare");
        b.add_interface(x, "Plug");
        b.add_interface(y, "Socket");
        b.add_compatibility("Plug", "Socket");
        let p = b.build();
        let s = SearchState::new(p.num_instances(), p.num_endpoints());

        let mut prop = ComponentPropagator::new();
        assert_eq!(prop.propagate(&p, &s), Err(PruneReason::Disconnected));
    }

    #[test]
    fn test_too_few_endpoints_for_required_merges() {
        // Three instances but only one plug and two sockets: each socket can
        // reach the plug, yet two merges need four endpoints.
        let mut b = ConnectivityProblemBuilder::new();
        let hub = b.add_instance("Hub");
        let y = b.add_instance("Y");
        let z = b.add_instance("Z");
        b.add_interface(hub, "Plug");
        b.add_interface(y, "Socket");
        b.add_interface(z, "Socket");
        b.add_compatibility("Plug", "Socket");
        let p = b.build();
        let s = SearchState::new(p.num_instances(), p.num_endpoints());

        let mut prop = ComponentPropagator::preallocated(p.num_instances());
        assert_eq!(prop.propagate(&p, &s), Err(PruneReason::InterfacesExhausted));
    }

    #[test]
    fn test_consistent_and_connected_states_pass() {
        let mut b = ConnectivityProblemBuilder::new();
        let x = b.add_instance("X");
        let y = b.add_instance("Y");
        b.add_interface(x, "Plug");
        b.add_interface(y, "Socket");
        b.add_compatibility("Plug", "Socket");
        let p = b.build();
        let mut s = SearchState::new(p.num_instances(), p.num_endpoints());
        let mut prop = ComponentPropagator::new();
        assert_eq!(prop.propagate(&p, &s), Ok(()));

        let mut t = SearchTrail::new();
        t.push_frame();
        t.apply(&mut s, &p, Decision::connect(ei(0), ei(1)));
        assert_eq!(prop.propagate(&p, &s), Ok(()));

        t.backtrack(&mut s);
        t.push_frame();
        t.apply(&mut s, &p, Decision::unconnected(ei(0)));
        assert_eq!(prop.propagate(&p, &s), Err(PruneReason::Disconnected));
    }
}
