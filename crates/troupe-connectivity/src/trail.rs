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

//! Undo log of the connectivity search.
//!
//! Every decision applied to `SearchState` leaves one `TrailEntry` holding
//! enough to revert it, including whether the wiring merged two components
//! (only those are recorded by the disjoint-set history). Frames mark
//! decision levels; `backtrack` reverts everything recorded since the last
//! frame in reverse order.

use crate::branching::decision::Decision;
use crate::index::{InstanceIndex, InterfaceIndex};
use crate::problem::ConnectivityProblem;
use crate::state::SearchState;

/// One reversible mutation of the search state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TrailEntry {
    Connected {
        endpoint: InterfaceIndex,
        endpoint_instance: InstanceIndex,
        partner: InterfaceIndex,
        partner_instance: InstanceIndex,
        merged: bool,
    },
    Unconnected {
        endpoint: InterfaceIndex,
        instance: InstanceIndex,
    },
}

impl std::fmt::Display for TrailEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrailEntry::Connected {
                endpoint,
                partner,
                merged,
                ..
            } => write!(
                f,
                "TrailEntry(connected: {} <-> {}, merged: {})",
                endpoint, partner, merged
            ),
            TrailEntry::Unconnected { endpoint, .. } => {
                write!(f, "TrailEntry(unconnected: {})", endpoint)
            }
        }
    }
}

/// A linear undo log with frame markers.
///
/// Typical usage:
/// 1. `push_frame()` before applying the decision of a new level,
/// 2. `apply(...)` for the decision,
/// 3. `backtrack(state)` to restore the state as it was at the frame.
#[derive(Debug, Clone, Default)]
pub struct SearchTrail {
    entries: Vec<TrailEntry>,
    /// `frames[i]` is the index in `entries` where depth `i` began.
    frames: Vec<usize>,
}

impl SearchTrail {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// At most one entry per endpoint is live at any time.
    #[inline]
    pub fn preallocated(num_endpoints: usize) -> Self {
        Self {
            entries: Vec::with_capacity(num_endpoints),
            frames: Vec::with_capacity(num_endpoints + 1),
        }
    }

    #[inline]
    pub fn ensure_capacity(&mut self, num_endpoints: usize) {
        if self.entries.capacity() < num_endpoints {
            self.entries.reserve(num_endpoints - self.entries.len());
        }
        if self.frames.capacity() < num_endpoints + 1 {
            self.frames.reserve(num_endpoints + 1 - self.frames.len());
        }
    }

    #[inline]
    pub fn num_entries(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.frames.is_empty()
    }

    #[inline]
    pub fn entries(&self) -> &[TrailEntry] {
        &self.entries
    }

    #[inline]
    pub fn push_frame(&mut self) {
        self.frames.push(self.entries.len());
    }

    /// Applies `decision` to `state` and records how to revert it.
    pub fn apply(
        &mut self,
        state: &mut SearchState,
        problem: &ConnectivityProblem,
        decision: Decision,
    ) {
        let endpoint = decision.endpoint();
        let endpoint_instance = problem.endpoint_instance(endpoint);
        let entry = match decision.partner() {
            Some(partner) => {
                let partner_instance = problem.endpoint_instance(partner);
                let merged = state.connect(endpoint, endpoint_instance, partner, partner_instance);
                TrailEntry::Connected {
                    endpoint,
                    endpoint_instance,
                    partner,
                    partner_instance,
                    merged,
                }
            }
            None => {
                state.leave_unconnected(endpoint, endpoint_instance);
                TrailEntry::Unconnected {
                    endpoint,
                    instance: endpoint_instance,
                }
            }
        };
        self.entries.push(entry);
    }

    /// Pops the current frame, reverting every entry recorded since.
    pub fn backtrack(&mut self, state: &mut SearchState) {
        let start = match self.frames.pop() {
            Some(start) => start,
            None => return,
        };
        while self.entries.len() > start {
            if let Some(entry) = self.entries.pop() {
                Self::undo_entry(state, entry);
            }
        }
    }

    /// Reverts all entries across all frames.
    pub fn clear(&mut self, state: &mut SearchState) {
        while let Some(entry) = self.entries.pop() {
            Self::undo_entry(state, entry);
        }
        self.frames.clear();
    }

    /// Forgets all entries and frames without touching any state.
    #[inline]
    pub fn reset(&mut self) {
        self.entries.clear();
        self.frames.clear();
    }

    #[inline]
    fn undo_entry(state: &mut SearchState, entry: TrailEntry) {
        match entry {
            TrailEntry::Connected {
                endpoint,
                endpoint_instance,
                partner,
                partner_instance,
                merged,
            } => state.disconnect(endpoint, endpoint_instance, partner, partner_instance, merged),
            TrailEntry::Unconnected { endpoint, instance } => state.reopen(endpoint, instance),
        }
    }
}

impl std::fmt::Display for SearchTrail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchTrail(entries: {}, frames: {})",
            self.entries.len(),
            self.frames.len()
        )
    }
}
