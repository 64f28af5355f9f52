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

//! Depth-first connectivity solver.
//!
//! `ConnectivitySolver` owns the reusable search structures (trail, stack,
//! propagator scratch) and runs one `ConnectivitySearchSession` per call to
//! `solve`. The session drives the loop:
//!
//! 1. consult the monitor (a `Terminate` aborts the run),
//! 2. backtrack when the current level has no decisions left, or
//! 3. pop the next decision and descend: apply it, stop at a connected leaf,
//!    prune when the propagator fails, otherwise enqueue the next level.
//!
//! The run ends once the root level is exhausted or the solution limit is
//! reached. Decisions only merge components, and the unconnected alternative
//! of every endpoint is explored last, so the first leaf is usually reached
//! without backtracking.
//!
//! The solver is `Clone`: independent copies can explore in parallel.

use crate::branching::decision::{Decision, DecisionBuilder};
use crate::graph::ConnectionGraph;
use crate::monitor::tree_search_monitor::{PruneReason, TreeSearchMonitor};
use crate::problem::ConnectivityProblem;
use crate::propagation::ComponentPropagator;
use crate::result::ConnectivityOutcome;
use crate::stack::BranchStack;
use crate::state::SearchState;
use crate::stats::ConnectivityStatistics;
use crate::trail::SearchTrail;
use troupe_search::monitor::search_monitor::SearchCommand;
use troupe_search::result::TerminationReason;

#[derive(Clone, Debug)]
pub struct ConnectivitySolver {
    trail: SearchTrail,
    stack: BranchStack,
    propagator: ComponentPropagator,
    solution_limit: usize,
}

impl Default for ConnectivitySolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectivitySolver {
    #[inline]
    pub fn new() -> Self {
        Self {
            trail: SearchTrail::new(),
            stack: BranchStack::new(),
            propagator: ComponentPropagator::new(),
            solution_limit: 1,
        }
    }

    /// Reserves the search structures for problems of the given size.
    #[inline]
    pub fn preallocated(num_instances: usize, num_endpoints: usize) -> Self {
        Self {
            trail: SearchTrail::preallocated(num_endpoints),
            stack: BranchStack::preallocated(num_endpoints),
            propagator: ComponentPropagator::preallocated(num_instances),
            solution_limit: 1,
        }
    }

    /// Stop after `limit` connected wirings (at least one).
    #[inline]
    pub fn with_solution_limit(mut self, limit: usize) -> Self {
        self.solution_limit = limit.max(1);
        self
    }

    #[inline]
    pub fn solution_limit(&self) -> usize {
        self.solution_limit
    }

    pub fn solve<B, S>(
        &mut self,
        problem: &ConnectivityProblem,
        builder: &mut B,
        mut monitor: S,
    ) -> ConnectivityOutcome
    where
        B: DecisionBuilder,
        S: TreeSearchMonitor,
    {
        let session = ConnectivitySearchSession::new(self, problem, builder, &mut monitor);
        let outcome = session.run();
        self.reset();
        outcome
    }

    /// Clears the logical state, keeping allocations.
    #[inline]
    fn reset(&mut self) {
        self.trail.reset();
        self.stack.reset();
    }
}

/// State and logic of a single search run.
struct ConnectivitySearchSession<'a, B, S> {
    solver: &'a mut ConnectivitySolver,
    problem: &'a ConnectivityProblem,
    builder: &'a mut B,
    monitor: &'a mut S,
    state: SearchState,
    first_solution: Option<ConnectionGraph>,
    solutions: usize,
    stats: ConnectivityStatistics,
    start_time: std::time::Instant,
}

impl<B, S> std::fmt::Debug for ConnectivitySearchSession<'_, B, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectivitySearchSession")
            .field("problem", &self.problem)
            .field("state", &self.state)
            .field("solutions", &self.solutions)
            .field("stats", &self.stats)
            .finish()
    }
}

impl<'a, B, S> ConnectivitySearchSession<'a, B, S>
where
    B: DecisionBuilder,
    S: TreeSearchMonitor,
{
    fn new(
        solver: &'a mut ConnectivitySolver,
        problem: &'a ConnectivityProblem,
        builder: &'a mut B,
        monitor: &'a mut S,
    ) -> Self {
        Self {
            solver,
            problem,
            builder,
            monitor,
            state: SearchState::new(problem.num_instances(), problem.num_endpoints()),
            first_solution: None,
            solutions: 0,
            stats: ConnectivityStatistics::default(),
            start_time: std::time::Instant::now(),
        }
    }

    fn run(mut self) -> ConnectivityOutcome {
        self.monitor.on_enter_search(self.problem, &self.stats);

        if !self.initialize() {
            self.stats.set_total_time(self.start_time.elapsed());
            self.monitor.on_exit_search(&self.stats);
            return self.finalize_result(TerminationReason::SearchSpaceExhausted);
        }

        let termination_reason = loop {
            self.monitor.on_step(&self.state, &self.stats);

            if let SearchCommand::Terminate(msg) =
                self.monitor.search_command(&self.state, &self.stats)
            {
                break TerminationReason::Aborted(msg);
            }

            if self.solver.stack.is_level_exhausted() {
                if self.solver.stack.depth() <= 1 {
                    break TerminationReason::SearchSpaceExhausted;
                }
                self.backtrack_step();
            } else {
                self.process_next_decision();
                if self.solutions >= self.solver.solution_limit {
                    break TerminationReason::SolutionLimitReached;
                }
            }
        };

        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);
        self.finalize_result(termination_reason)
    }

    fn finalize_result(self, reason: TerminationReason) -> ConnectivityOutcome {
        match (reason, self.first_solution) {
            (TerminationReason::Aborted(msg), graph) => {
                ConnectivityOutcome::aborted(graph, msg, self.stats)
            }
            (reason, Some(graph)) => ConnectivityOutcome::feasible(graph, reason, self.stats),
            (_, None) => ConnectivityOutcome::infeasible(self.stats),
        }
    }

    /// Sets up the root level. Returns `false` when the root already decides
    /// the run: it is connected, or the propagator refutes it.
    fn initialize(&mut self) -> bool {
        self.solver.trail.ensure_capacity(self.problem.num_endpoints());
        self.solver.stack.ensure_capacity(self.problem.num_endpoints());
        self.stats.on_node_explored();

        if self.state.is_connected() {
            self.handle_solution();
            return false;
        }

        if let Err(reason) = self.solver.propagator.propagate(self.problem, &self.state) {
            self.record_prune(reason);
            return false;
        }

        self.solver.trail.push_frame();
        self.solver.stack.push_level();
        self.enqueue_decisions();
        true
    }

    fn backtrack_step(&mut self) {
        self.stats.on_backtrack();
        self.monitor.on_backtrack(&self.state, &self.stats);

        self.solver.trail.backtrack(&mut self.state);
        self.solver.stack.pop_level();
    }

    fn process_next_decision(&mut self) {
        let decision = match self.solver.stack.next_decision() {
            Some(d) => d,
            None => return,
        };
        self.stats.on_decision_generated();
        self.descend(decision);
    }

    fn descend(&mut self, decision: Decision) {
        debug_assert!(
            self.state.is_open(decision.endpoint()),
            "called `ConnectivitySearchSession::descend` with decided endpoint {}",
            decision.endpoint()
        );

        self.solver.trail.push_frame();
        self.solver
            .trail
            .apply(&mut self.state, self.problem, decision);
        self.solver.stack.push_level();

        self.stats.on_node_explored();
        self.stats
            .on_depth_update(self.solver.stack.depth() as u64);
        self.monitor.on_descend(&self.state, decision, &self.stats);

        if self.state.is_connected() {
            self.handle_solution();
            return;
        }

        if let Err(reason) = self.solver.propagator.propagate(self.problem, &self.state) {
            self.record_prune(reason);
            self.backtrack_step();
            return;
        }

        self.enqueue_decisions();
    }

    fn enqueue_decisions(&mut self) {
        let added = self
            .solver
            .stack
            .offer(self.builder.next_decision(self.problem, &self.state));
        self.monitor
            .on_decisions_enqueued(&self.state, added, &self.stats);
    }

    fn record_prune(&mut self, reason: PruneReason) {
        match reason {
            PruneReason::Disconnected => self.stats.on_pruning_disconnected(),
            PruneReason::InterfacesExhausted => self.stats.on_pruning_exhausted(),
        }
        self.monitor.on_prune(&self.state, reason, &self.stats);
    }

    fn handle_solution(&mut self) {
        let graph = ConnectionGraph::from_state(self.problem, &self.state);
        debug_assert!(graph.is_connected());
        self.solutions += 1;
        self.stats.on_solution_found();
        self.monitor.on_solution_found(&graph, &self.stats);
        if self.first_solution.is_none() {
            self.first_solution = Some(graph);
        }
    }
}
