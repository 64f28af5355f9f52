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

//! Lexicographic branching.
//!
//! Branches on the lowest-indexed open endpoint that still has a partner and
//! tries its representative partners in ascending index order.

use crate::branching::decision::{
    Decision, DecisionBuilder, representative_partners, select_endpoint,
};
use crate::index::InterfaceIndex;
use crate::problem::ConnectivityProblem;
use crate::state::SearchState;

#[derive(Debug, Clone, Default)]
pub struct LexicographicBuilder {
    partners: Vec<InterfaceIndex>,
    decision_queue: Vec<Decision>,
}

impl LexicographicBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn preallocated(num_endpoints: usize) -> Self {
        Self {
            partners: Vec::with_capacity(num_endpoints),
            decision_queue: Vec::with_capacity(num_endpoints + 1),
        }
    }
}

impl DecisionBuilder for LexicographicBuilder {
    type DecisionIterator<'a>
        = std::vec::Drain<'a, Decision>
    where
        Self: 'a;

    fn name(&self) -> &str {
        "LexicographicBuilder"
    }

    fn next_decision<'a>(
        &'a mut self,
        problem: &'a ConnectivityProblem,
        state: &'a SearchState,
    ) -> Self::DecisionIterator<'a> {
        self.decision_queue.clear();

        if let Some(endpoint) = select_endpoint(problem, state, false) {
            representative_partners(problem, state, endpoint, &mut self.partners);
            self.decision_queue.push(Decision::unconnected(endpoint));
            self.decision_queue.extend(
                self.partners
                    .iter()
                    .rev()
                    .map(|&partner| Decision::connect(endpoint, partner)),
            );
        }

        self.decision_queue.drain(..)
    }
}
