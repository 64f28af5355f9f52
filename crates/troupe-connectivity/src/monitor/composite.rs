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

//! Fan-out monitor.
//!
//! Events are dispatched to the children in insertion order.
//! `search_command` returns the first non-`Continue` answer, so stricter stop
//! conditions go first.

use crate::branching::decision::Decision;
use crate::graph::ConnectionGraph;
use crate::monitor::tree_search_monitor::{PruneReason, TreeSearchMonitor};
use crate::problem::ConnectivityProblem;
use crate::state::SearchState;
use crate::stats::ConnectivityStatistics;
use troupe_search::monitor::search_monitor::SearchCommand;

#[derive(Default)]
pub struct CompositeTreeSearchMonitor<'a> {
    monitors: Vec<Box<dyn TreeSearchMonitor + 'a>>,
}

impl<'a> CompositeTreeSearchMonitor<'a> {
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: TreeSearchMonitor + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn TreeSearchMonitor + 'a>) {
        self.monitors.push(monitor);
    }

    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn TreeSearchMonitor + 'a>] {
        &self.monitors
    }

    #[inline(always)]
    pub fn clear(&mut self) {
        self.monitors.clear();
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a> FromIterator<Box<dyn TreeSearchMonitor + 'a>> for CompositeTreeSearchMonitor<'a> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn TreeSearchMonitor + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Debug for CompositeTreeSearchMonitor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.monitors.iter()).finish()
    }
}

impl<'a> TreeSearchMonitor for CompositeTreeSearchMonitor<'a> {
    fn name(&self) -> &str {
        "CompositeTreeSearchMonitor"
    }

    fn on_enter_search(&mut self, problem: &ConnectivityProblem, statistics: &ConnectivityStatistics) {
        for m in self.monitors.iter_mut() {
            m.on_enter_search(problem, statistics);
        }
    }

    fn on_exit_search(&mut self, statistics: &ConnectivityStatistics) {
        for m in self.monitors.iter_mut() {
            m.on_exit_search(statistics);
        }
    }

    fn search_command(
        &mut self,
        state: &SearchState,
        statistics: &ConnectivityStatistics,
    ) -> SearchCommand {
        for m in self.monitors.iter_mut() {
            let command = m.search_command(state, statistics);
            if command.is_terminate() {
                return command;
            }
        }
        SearchCommand::Continue
    }

    fn on_step(&mut self, state: &SearchState, statistics: &ConnectivityStatistics) {
        for m in self.monitors.iter_mut() {
            m.on_step(state, statistics);
        }
    }

    fn on_prune(
        &mut self,
        state: &SearchState,
        reason: PruneReason,
        statistics: &ConnectivityStatistics,
    ) {
        for m in self.monitors.iter_mut() {
            m.on_prune(state, reason, statistics);
        }
    }

    fn on_decisions_enqueued(
        &mut self,
        state: &SearchState,
        count: usize,
        statistics: &ConnectivityStatistics,
    ) {
        for m in self.monitors.iter_mut() {
            m.on_decisions_enqueued(state, count, statistics);
        }
    }

    fn on_descend(
        &mut self,
        state: &SearchState,
        decision: Decision,
        statistics: &ConnectivityStatistics,
    ) {
        for m in self.monitors.iter_mut() {
            m.on_descend(state, decision, statistics);
        }
    }

    fn on_backtrack(&mut self, state: &SearchState, statistics: &ConnectivityStatistics) {
        for m in self.monitors.iter_mut() {
            m.on_backtrack(state, statistics);
        }
    }

    fn on_solution_found(&mut self, graph: &ConnectionGraph, statistics: &ConnectivityStatistics) {
        for m in self.monitors.iter_mut() {
            m.on_solution_found(graph, statistics);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::no_op::NoOperationMonitor;

    struct Stopper {
        calls: usize,
    }

    impl TreeSearchMonitor for Stopper {
        fn name(&self) -> &str {
            "Stopper"
        }

        fn search_command(
            &mut self,
            _state: &SearchState,
            _statistics: &ConnectivityStatistics,
        ) -> SearchCommand {
            self.calls += 1;
            SearchCommand::Terminate("stop".to_string())
        }
    }

    #[test]
    fn test_first_terminate_wins() {
        let mut second = Stopper { calls: 0 };
        {
            let mut composite = CompositeTreeSearchMonitor::with_capacity(3);
            composite.add_monitor(NoOperationMonitor::new());
            composite.add_monitor(Stopper { calls: 0 });
            composite.add_monitor(&mut second);
            assert_eq!(composite.len(), 3);

            let state = SearchState::new(0, 0);
            let stats = ConnectivityStatistics::default();
            assert_eq!(
                composite.search_command(&state, &stats),
                SearchCommand::Terminate("stop".to_string())
            );
        }
        assert_eq!(second.calls, 0);
    }

    #[test]
    fn test_empty_composite_continues() {
        let mut composite = CompositeTreeSearchMonitor::new();
        assert!(composite.is_empty());
        let state = SearchState::new(0, 0);
        assert_eq!(
            composite.search_command(&state, &ConnectivityStatistics::default()),
            SearchCommand::Continue
        );
    }
}
