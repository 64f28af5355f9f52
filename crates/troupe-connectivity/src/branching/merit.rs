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

//! Merit-ordered branching.
//!
//! Branches on an endpoint of the largest component (fewest open candidates
//! first) and orders its representative partners by merit: the size of the
//! cluster the wiring would form. Growing one large cluster quickly is what
//! reaches a connected labeling in few steps. Partners of equal merit are
//! shuffled with a `ChaCha8Rng`, so a fixed seed reproduces a run exactly.

use crate::branching::decision::{
    Decision, DecisionBuilder, representative_partners, select_endpoint,
};
use crate::index::InterfaceIndex;
use crate::problem::ConnectivityProblem;
use crate::state::SearchState;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct ScoredPartner {
    merit: usize,
    tie_break: u64,
    partner: InterfaceIndex,
}

#[derive(Debug, Clone)]
pub struct MeritBuilder {
    seed: u64,
    rng: ChaCha8Rng,
    partners: Vec<InterfaceIndex>,
    scored: Vec<ScoredPartner>,
    decision_queue: Vec<Decision>,
}

impl MeritBuilder {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            partners: Vec::new(),
            scored: Vec::new(),
            decision_queue: Vec::new(),
        }
    }

    pub fn preallocated(seed: u64, num_endpoints: usize) -> Self {
        Self {
            partners: Vec::with_capacity(num_endpoints),
            scored: Vec::with_capacity(num_endpoints),
            decision_queue: Vec::with_capacity(num_endpoints + 1),
            ..Self::new(seed)
        }
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Rewinds the random stream to its seed.
    pub fn reseed(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
    }
}

impl Default for MeritBuilder {
    fn default() -> Self {
        Self::new(0)
    }
}

impl DecisionBuilder for MeritBuilder {
    type DecisionIterator<'a>
        = std::vec::Drain<'a, Decision>
    where
        Self: 'a;

    fn name(&self) -> &str {
        "MeritBuilder"
    }

    fn next_decision<'a>(
        &'a mut self,
        problem: &'a ConnectivityProblem,
        state: &'a SearchState,
    ) -> Self::DecisionIterator<'a> {
        self.decision_queue.clear();
        self.scored.clear();

        let endpoint = match select_endpoint(problem, state, true) {
            Some(e) => e,
            None => return self.decision_queue.drain(..),
        };

        representative_partners(problem, state, endpoint, &mut self.partners);
        let own_size = state.component_size(problem.endpoint_instance(endpoint));
        for &partner in &self.partners {
            let partner_size = state.component_size(problem.endpoint_instance(partner));
            self.scored.push(ScoredPartner {
                merit: own_size + partner_size,
                tie_break: self.rng.random::<u64>(),
                partner,
            });
        }
        // Ascending: the best partner ends up last and is popped first.
        self.scored.sort_unstable();

        self.decision_queue.push(Decision::unconnected(endpoint));
        self.decision_queue.extend(
            self.scored
                .iter()
                .map(|scored| Decision::connect(endpoint, scored.partner)),
        );
        self.decision_queue.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::ConnectivityProblemBuilder;
    use crate::trail::SearchTrail;

    fn ei(i: usize) -> InterfaceIndex {
        InterfaceIndex::new(i)
    }

    /// A hub with two sockets, a pair (P1 - P2) already wired, one lone rover.
    fn clustered() -> (ConnectivityProblem, SearchState) {
        let mut b = ConnectivityProblemBuilder::new();
        let hub = b.add_instance("Hub");
        b.add_interface(hub, "Socket"); // 0
        b.add_interface(hub, "Socket"); // 1
        let p1 = b.add_instance("P1");
        b.add_interface(p1, "Plug"); // 2
        b.add_interface(p1, "Socket"); // 3
        let p2 = b.add_instance("P2");
        b.add_interface(p2, "Plug"); // 4
        let lone = b.add_instance("Lone");
        b.add_interface(lone, "Plug"); // 5
        b.add_compatibility("Plug", "Socket");
        let p = b.build();

        let mut s = SearchState::new(p.num_instances(), p.num_endpoints());
        let mut t = SearchTrail::new();
        t.push_frame();
        t.apply(&mut s, &p, Decision::connect(ei(3), ei(4)));
        (p, s)
    }

    #[test]
    fn test_best_merit_is_emitted_last() {
        let (p, s) = clustered();
        let mut builder = MeritBuilder::new(7);
        let decisions: Vec<Decision> = builder.next_decision(&p, &s).collect();

        // The P1-P2 cluster (size 2) is the largest; its only open endpoint
        // with candidates is P1's plug, which can reach both hub sockets
        // (one class) only.
        assert_eq!(
            decisions,
            vec![Decision::unconnected(ei(2)), Decision::connect(ei(2), ei(0))]
        );
    }

    #[test]
    fn test_partner_classes_split_touched_and_untouched() {
        let (p, s) = clustered();
        let mut builder = MeritBuilder::new(3);
        let mut partners = Vec::new();
        representative_partners(&p, &s, ei(0), &mut partners);
        assert_eq!(partners, vec![ei(2), ei(5)]);

        let decisions: Vec<Decision> = builder.next_decision(&p, &s).collect();
        assert_eq!(decisions.first(), Some(&Decision::unconnected(ei(2))));
    }

    #[test]
    fn test_same_seed_same_order() {
        let mut b = ConnectivityProblemBuilder::new();
        let hub = b.add_instance("Hub");
        for _ in 0..4 {
            b.add_interface(hub, "Socket");
        }
        for name in ["A", "B", "C", "D"] {
            let r = b.add_instance(name);
            b.add_interface(r, "Plug");
        }
        b.add_compatibility("Plug", "Socket");
        let p = b.build();
        let s = SearchState::new(p.num_instances(), p.num_endpoints());

        let first: Vec<Decision> = MeritBuilder::new(42).next_decision(&p, &s).collect();
        let second: Vec<Decision> = MeritBuilder::new(42).next_decision(&p, &s).collect();
        assert_eq!(first, second);
        // Socket 0 sees four distinct rover models, all of equal merit.
        assert_eq!(first.len(), 5);
        assert_eq!(first[0], Decision::unconnected(ei(0)));
        assert!(first[1..].iter().all(|d| d.endpoint() == ei(0)));
    }

    #[test]
    fn test_reseed_replays_stream() {
        let mut b = ConnectivityProblemBuilder::new();
        let hub = b.add_instance("Hub");
        for _ in 0..3 {
            b.add_interface(hub, "Socket");
        }
        for name in ["A", "B", "C"] {
            let r = b.add_instance(name);
            b.add_interface(r, "Plug");
        }
        b.add_compatibility("Plug", "Socket");
        let p = b.build();
        let s = SearchState::new(p.num_instances(), p.num_endpoints());

        let mut builder = MeritBuilder::preallocated(9, p.num_endpoints());
        let first: Vec<Decision> = builder.next_decision(&p, &s).collect();
        builder.reseed();
        let replay: Vec<Decision> = builder.next_decision(&p, &s).collect();
        assert_eq!(first, replay);
        assert_eq!(builder.seed(), 9);
    }
}
