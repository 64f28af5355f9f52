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

//! Periodic progress reporting.
//!
//! `LogTreeSearchMonitor` emits a table of progress lines through
//! `tracing::info!` at most once per `log_interval`. The clock is only read
//! when the node counter has all bits of `clock_check_mask` cleared.

use crate::branching::decision::Decision;
use crate::graph::ConnectionGraph;
use crate::monitor::tree_search_monitor::TreeSearchMonitor;
use crate::problem::ConnectivityProblem;
use crate::state::SearchState;
use crate::stats::ConnectivityStatistics;
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Debug, Clone)]
pub struct LogTreeSearchMonitor {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    solutions: u64,
}

impl LogTreeSearchMonitor {
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            solutions: 0,
        }
    }

    #[inline(always)]
    fn log_header(&self) {
        info!(
            "{:<9} | {:<12} | {:<7} | {:<10} | {:<10} | {:<10} | {:<9}",
            "Elapsed", "Nodes", "Depth", "Components", "Wired", "Backtracks", "Solutions"
        );
    }

    #[inline(always)]
    fn log_line(&mut self, state: &SearchState, stats: &ConnectivityStatistics) {
        let now = Instant::now();
        let elapsed = format!("{:.1}s", now.duration_since(self.start_time).as_secs_f32());
        info!(
            "{:<9} | {:<12} | {:<7} | {:<10} | {:<10} | {:<10} | {:<9}",
            elapsed,
            stats.nodes_explored,
            state.num_decided(),
            state.num_components(),
            state.num_connections(),
            stats.backtracks,
            self.solutions
        );
        self.last_log_time = now;
    }
}

impl Default for LogTreeSearchMonitor {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl std::fmt::Display for LogTreeSearchMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogTreeSearchMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}

impl TreeSearchMonitor for LogTreeSearchMonitor {
    fn name(&self) -> &str {
        "LogTreeSearchMonitor"
    }

    fn on_enter_search(&mut self, problem: &ConnectivityProblem, _stats: &ConnectivityStatistics) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.solutions = 0;
        info!(
            instances = problem.num_instances(),
            endpoints = problem.num_endpoints(),
            "connectivity search started"
        );
        self.log_header();
    }

    fn on_descend(
        &mut self,
        state: &SearchState,
        _decision: Decision,
        stats: &ConnectivityStatistics,
    ) {
        if (stats.nodes_explored & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(state, stats);
        }
    }

    fn on_solution_found(&mut self, graph: &ConnectionGraph, _stats: &ConnectivityStatistics) {
        self.solutions += 1;
        info!(edges = graph.num_edges(), "connected wiring found");
    }

    fn on_exit_search(&mut self, stats: &ConnectivityStatistics) {
        info!(
            nodes = stats.nodes_explored,
            solutions = stats.solutions_found,
            elapsed = ?stats.time_total,
            "connectivity search finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_default() {
        let m = LogTreeSearchMonitor::default();
        assert_eq!(m.name(), "LogTreeSearchMonitor");
        assert_eq!(
            format!("{}", m),
            "LogTreeSearchMonitor(log_interval: 1s, clock_check_mask: 4095)"
        );
    }

    #[test]
    fn test_counts_solutions_across_events() {
        let mut m = LogTreeSearchMonitor::new(Duration::ZERO, 0);
        let mut b = crate::problem::ConnectivityProblemBuilder::new();
        b.add_instance("X");
        let p = b.build();
        let stats = ConnectivityStatistics::default();
        m.on_enter_search(&p, &stats);
        m.on_solution_found(&ConnectionGraph::default(), &stats);
        m.on_descend(
            &SearchState::new(1, 0),
            Decision::unconnected(crate::index::InterfaceIndex::new(0)),
            &stats,
        );
        m.on_exit_search(&stats);
        assert_eq!(m.solutions, 1);
    }
}
