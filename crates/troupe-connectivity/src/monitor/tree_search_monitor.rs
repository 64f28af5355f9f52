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

//! Tree search monitoring interface
//!
//! Lifecycle: enter → step → {prune | decisions/descend/backtrack} →
//! solution → exit. `ConnectivityStatistics` is handed to every callback.
//! Every callback except `name` defaults to a no-op.

use crate::branching::decision::Decision;
use crate::graph::ConnectionGraph;
use crate::problem::ConnectivityProblem;
use crate::state::SearchState;
use crate::stats::ConnectivityStatistics;
use troupe_search::monitor::search_monitor::SearchCommand;

/// Why a node was pruned.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum PruneReason {
    /// Some component has no open endpoint able to reach another component.
    Disconnected,
    /// Fewer usable open endpoints remain than the outstanding merges need.
    InterfacesExhausted,
}

impl std::fmt::Display for PruneReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PruneReason::Disconnected => write!(f, "Disconnected"),
            PruneReason::InterfacesExhausted => write!(f, "InterfacesExhausted"),
        }
    }
}

pub trait TreeSearchMonitor {
    fn name(&self) -> &str;

    fn on_enter_search(
        &mut self,
        _problem: &ConnectivityProblem,
        _statistics: &ConnectivityStatistics,
    ) {
    }

    fn on_exit_search(&mut self, _statistics: &ConnectivityStatistics) {}

    fn search_command(
        &mut self,
        _state: &SearchState,
        _statistics: &ConnectivityStatistics,
    ) -> SearchCommand {
        SearchCommand::Continue
    }

    fn on_step(&mut self, _state: &SearchState, _statistics: &ConnectivityStatistics) {}

    fn on_prune(
        &mut self,
        _state: &SearchState,
        _reason: PruneReason,
        _statistics: &ConnectivityStatistics,
    ) {
    }

    fn on_decisions_enqueued(
        &mut self,
        _state: &SearchState,
        _count: usize,
        _statistics: &ConnectivityStatistics,
    ) {
    }

    fn on_descend(
        &mut self,
        _state: &SearchState,
        _decision: Decision,
        _statistics: &ConnectivityStatistics,
    ) {
    }

    fn on_backtrack(&mut self, _state: &SearchState, _statistics: &ConnectivityStatistics) {}

    fn on_solution_found(
        &mut self,
        _graph: &ConnectionGraph,
        _statistics: &ConnectivityStatistics,
    ) {
    }
}

impl std::fmt::Debug for dyn TreeSearchMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TreeSearchMonitor({})", self.name())
    }
}

impl std::fmt::Display for dyn TreeSearchMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TreeSearchMonitor({})", self.name())
    }
}

impl<M> TreeSearchMonitor for &mut M
where
    M: TreeSearchMonitor + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn on_enter_search(&mut self, problem: &ConnectivityProblem, statistics: &ConnectivityStatistics) {
        (**self).on_enter_search(problem, statistics)
    }

    fn on_exit_search(&mut self, statistics: &ConnectivityStatistics) {
        (**self).on_exit_search(statistics)
    }

    fn search_command(
        &mut self,
        state: &SearchState,
        statistics: &ConnectivityStatistics,
    ) -> SearchCommand {
        (**self).search_command(state, statistics)
    }

    fn on_step(&mut self, state: &SearchState, statistics: &ConnectivityStatistics) {
        (**self).on_step(state, statistics)
    }

    fn on_prune(
        &mut self,
        state: &SearchState,
        reason: PruneReason,
        statistics: &ConnectivityStatistics,
    ) {
        (**self).on_prune(state, reason, statistics)
    }

    fn on_decisions_enqueued(
        &mut self,
        state: &SearchState,
        count: usize,
        statistics: &ConnectivityStatistics,
    ) {
        (**self).on_decisions_enqueued(state, count, statistics)
    }

    fn on_descend(
        &mut self,
        state: &SearchState,
        decision: Decision,
        statistics: &ConnectivityStatistics,
    ) {
        (**self).on_descend(state, decision, statistics)
    }

    fn on_backtrack(&mut self, state: &SearchState, statistics: &ConnectivityStatistics) {
        (**self).on_backtrack(state, statistics)
    }

    fn on_solution_found(&mut self, graph: &ConnectionGraph, statistics: &ConnectivityStatistics) {
        (**self).on_solution_found(graph, statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prune_reason_display() {
        assert_eq!(PruneReason::Disconnected.to_string(), "Disconnected");
        assert_eq!(
            PruneReason::InterfacesExhausted.to_string(),
            "InterfacesExhausted"
        );
    }
}
