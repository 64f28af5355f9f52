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

//! Convenience entry points.
//!
//! These functions build the problem from a pool, pick the decision builder
//! configured in `ConnectivityConfig`, attach the time limit and progress log
//! if they are set and run a fresh `ConnectivitySolver`.

use crate::branching::lexicographic::LexicographicBuilder;
use crate::branching::merit::MeritBuilder;
use crate::config::{Branching, ConnectivityConfig};
use crate::graph::ConnectionGraph;
use crate::monitor::composite::CompositeTreeSearchMonitor;
use crate::monitor::log::LogTreeSearchMonitor;
use crate::monitor::wrapper::WrapperMonitor;
use crate::problem::ConnectivityProblem;
use crate::result::ConnectivityOutcome;
use crate::solver::ConnectivitySolver;
use troupe_model::pool::ModelPool;
use troupe_model::query::ModelQuery;
use troupe_search::monitor::time_limit::TimeLimitMonitor;

/// The progress log reads the clock once every 4096 nodes.
const PROGRESS_CLOCK_MASK: u64 = 4095;

/// Builds the problem for `pool` and solves it.
pub fn solve_pool<Q>(pool: &ModelPool, query: &Q, config: &ConnectivityConfig) -> ConnectivityOutcome
where
    Q: ModelQuery + ?Sized,
{
    let problem = ConnectivityProblem::from_pool(pool, query, config.interface_base_class());
    tracing::debug!(
        instances = problem.num_instances(),
        endpoints = problem.num_endpoints(),
        "connectivity problem for {}",
        pool
    );
    solve_problem(&problem, config)
}

pub fn solve_problem(problem: &ConnectivityProblem, config: &ConnectivityConfig) -> ConnectivityOutcome {
    let mut solver = ConnectivitySolver::preallocated(problem.num_instances(), problem.num_endpoints())
        .with_solution_limit(config.min_feasible());

    let mut time_limit = config.timeout().map(TimeLimitMonitor::new);
    let mut monitor = CompositeTreeSearchMonitor::new();
    if let Some(limit) = time_limit.as_mut() {
        monitor.add_monitor(WrapperMonitor::new(limit));
    }
    if let Some(interval) = config.progress_log() {
        monitor.add_monitor(LogTreeSearchMonitor::new(interval, PROGRESS_CLOCK_MASK));
    }

    let outcome = match config.branching() {
        Branching::Merit => {
            let mut builder = MeritBuilder::preallocated(config.seed(), problem.num_endpoints());
            solver.solve(problem, &mut builder, monitor)
        }
        Branching::Lexicographic => {
            let mut builder = LexicographicBuilder::preallocated(problem.num_endpoints());
            solver.solve(problem, &mut builder, monitor)
        }
    };

    tracing::debug!(
        result = %outcome.result(),
        reason = ?outcome.termination_reason(),
        nodes = outcome.statistics().nodes_explored,
        "connectivity search finished"
    );
    outcome
}

/// Returns `true` only if a connected wiring was found. A run stopped by the
/// time limit before finding one counts as infeasible.
pub fn is_feasible<Q>(pool: &ModelPool, query: &Q, config: &ConnectivityConfig) -> bool
where
    Q: ModelQuery + ?Sized,
{
    solve_pool(pool, query, config).is_feasible()
}

/// The first connected wiring of `pool`, if any.
pub fn feasible_connection<Q>(
    pool: &ModelPool,
    query: &Q,
    config: &ConnectivityConfig,
) -> Option<ConnectionGraph>
where
    Q: ModelQuery + ?Sized,
{
    solve_pool(pool, query, config).into_result().into_graph()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use troupe_model::catalog::{Catalog, CatalogBuilder};
    use troupe_model::vocabulary;

    fn catalog() -> Catalog {
        CatalogBuilder::new()
            .subclass("Plug", vocabulary::electro_mechanical_interface())
            .subclass("Socket", vocabulary::electro_mechanical_interface())
            .compatible("Plug", "Socket")
            .has("Rover", "Plug", 1, 1)
            .has("Dock", "Socket", 1, 1)
            .build()
    }

    #[test]
    fn test_rover_and_dock_connect() {
        let pool = ModelPool::from_pairs([("Rover", 1), ("Dock", 1)]);
        let graph = feasible_connection(&pool, &catalog(), &ConnectivityConfig::default())
            .unwrap_or_else(|| panic!("expected a connection graph"));
        assert_eq!(graph.num_nodes(), 2);
        assert_eq!(graph.num_edges(), 1);
        assert_eq!(
            format!("{}", graph),
            "ConnectionGraph(nodes: [Dock#0, Rover#0], edges: [Dock#0.Socket -- Rover#0.Plug])"
        );
    }

    #[test]
    fn test_two_rovers_cannot_connect() {
        let pool = ModelPool::from_pairs([("Rover", 2)]);
        assert!(!is_feasible(&pool, &catalog(), &ConnectivityConfig::default()));
    }

    #[test]
    fn test_empty_and_single_pools_are_feasible() {
        let config = ConnectivityConfig::default();
        assert!(is_feasible(&ModelPool::new(), &catalog(), &config));
        assert!(is_feasible(&ModelPool::single("Rover"), &catalog(), &config));
    }

    #[test]
    fn test_branching_strategies_agree() {
        let pool = ModelPool::from_pairs([("Rover", 1), ("Dock", 2)]);
        let merit = ConnectivityConfig::builder().with_seed(9).build();
        let lex = ConnectivityConfig::builder()
            .with_branching(Branching::Lexicographic)
            .build();
        assert_eq!(
            is_feasible(&pool, &catalog(), &merit),
            is_feasible(&pool, &catalog(), &lex)
        );
    }

    #[test]
    fn test_generous_timeout_does_not_change_answer() {
        let pool = ModelPool::from_pairs([("Rover", 1), ("Dock", 1)]);
        let config = ConnectivityConfig::builder()
            .with_timeout(Duration::from_secs(60))
            .build();
        let outcome = solve_pool(&pool, &catalog(), &config);
        assert!(outcome.is_feasible());
        assert!(outcome.termination_reason().is_proven());
    }

    #[test]
    fn test_progress_log_does_not_change_answer() {
        let config = ConnectivityConfig::builder()
            .with_progress_log(Duration::from_millis(1))
            .build();
        let pool = ModelPool::from_pairs([("Rover", 1), ("Dock", 1)]);
        let outcome = solve_pool(&pool, &catalog(), &config);
        assert!(outcome.is_feasible());
        assert_eq!(outcome.statistics().solutions_found, 1);
        assert!(!is_feasible(&ModelPool::from_pairs([("Rover", 2)]), &catalog(), &config));
    }
}
