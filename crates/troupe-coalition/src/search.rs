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

//! # Coalition Structure Search
//!
//! Splits a group of agents into coalitions such that the structure value
//! reaches a threshold. Structures are visited by increasing number of
//! coalitions, so the grand coalition is tried first and the all-singletons
//! structure last.
//!
//! Agents of one model are interchangeable. Two caches exploit this:
//!
//! - coalition values are keyed by the coalition's model pool, so the oracle
//!   sees each distinct pool once per run;
//! - a structure whose multiset of coalition pools was already evaluated is
//!   skipped.
//!
//! The search stops at the first structure reaching the threshold. Otherwise
//! it reports the best structure with a positive value, or none.
//!
//! Both caches live for one run. The coalition cache holds at most one entry
//! per sub-pool of the agents' pool, the structure cache one entry per
//! evaluated structure, which is at most the Bell number of the agent count.
//! `CoalitionConfig::max_structures` caps the latter together with the
//! number of oracle rounds.

use crate::agent::{self, AtomicAgent};
use crate::config::CoalitionConfig;
use crate::oracle::FeasibilityOracle;
use crate::partition::{self, RestrictedGrowth};
use crate::result::CoalitionOutcome;
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::Instant;
use troupe_model::pool::ModelPool;
use troupe_search::monitor::composite::CompositeMonitor;
use troupe_search::monitor::search_monitor::{SearchCommand, SearchMonitor};
use troupe_search::monitor::time_limit::TimeLimitMonitor;
use troupe_search::result::TerminationReason;
use troupe_search::stats::SearchStatistics;

#[derive(Debug, Clone, Default)]
pub struct CoalitionStructureSearch {
    config: CoalitionConfig,
    coalition_values: FxHashMap<ModelPool, f64>,
    seen_structures: FxHashSet<Vec<ModelPool>>,
}

impl CoalitionStructureSearch {
    #[inline]
    pub fn new(config: CoalitionConfig) -> Self {
        Self {
            config,
            coalition_values: FxHashMap::default(),
            seen_structures: FxHashSet::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> &CoalitionConfig {
        &self.config
    }

    /// Runs the search under the limits of the configuration.
    pub fn solve<O>(&mut self, agents: &[AtomicAgent], oracle: &mut O) -> CoalitionOutcome
    where
        O: FeasibilityOracle + ?Sized,
    {
        let mut monitor = CompositeMonitor::new();
        if let Some(limit) = self.config.time_limit() {
            monitor.add_monitor(TimeLimitMonitor::every_step(limit));
        }
        self.solve_with_monitor(agents, oracle, monitor)
    }

    /// Runs the search, asking `monitor` before every structure whether to
    /// go on.
    pub fn solve_with_monitor<O, M>(
        &mut self,
        agents: &[AtomicAgent],
        oracle: &mut O,
        mut monitor: M,
    ) -> CoalitionOutcome
    where
        O: FeasibilityOracle + ?Sized,
        M: SearchMonitor,
    {
        self.reset();
        let start = Instant::now();
        let mut statistics = SearchStatistics::default();
        let mut best: Option<(Vec<Vec<AtomicAgent>>, f64)> = None;
        let mut evaluated: u64 = 0;
        let threshold = self.config.threshold();
        let n = agents.len();

        monitor.on_enter_search();
        let termination_reason = 'search: {
            for k in 1..=n {
                for labels in RestrictedGrowth::new(n, k) {
                    monitor.on_step();
                    if let SearchCommand::Terminate(msg) = monitor.search_command() {
                        break 'search TerminationReason::Aborted(msg);
                    }
                    if self.config.max_structures().is_some_and(|max| evaluated >= max) {
                        break 'search TerminationReason::Aborted("structure limit reached".to_string());
                    }
                    statistics.on_candidate();

                    let structure = partition::blocks(agents, &labels);
                    let pools: Vec<ModelPool> = structure.iter().map(|c| agent::model_pool(c)).collect();
                    let mut key = pools.clone();
                    key.sort();
                    if !self.seen_structures.insert(key) {
                        statistics.on_cache_hit();
                        continue;
                    }
                    evaluated += 1;

                    let values: Vec<f64> = structure
                        .iter()
                        .zip(&pools)
                        .map(|(coalition, pool)| self.coalition_value(coalition, pool, oracle, &mut statistics))
                        .collect();
                    let value = oracle.evaluate_structure(&values);
                    tracing::trace!(coalitions = k, value, "evaluated structure {:?}", pools);

                    if best.as_ref().is_none_or(|(_, v)| value > *v) {
                        best = Some((structure, value));
                    }
                    if value >= threshold {
                        statistics.on_solution();
                        monitor.on_solution_found();
                        break 'search TerminationReason::SolutionLimitReached;
                    }
                }
            }
            TerminationReason::SearchSpaceExhausted
        };
        monitor.on_exit_search();
        statistics.set_total_time(start.elapsed());

        let (structure, value) = match best {
            Some((structure, value)) if value > 0.0 => (structure, value),
            _ => (Vec::new(), 0.0),
        };
        tracing::info!(
            agents = n,
            coalitions = structure.len(),
            value,
            structures = evaluated,
            reason = %termination_reason,
            "coalition structure search finished in {:?}",
            statistics.solve_duration
        );
        CoalitionOutcome::new(structure, value, termination_reason, statistics)
    }

    fn coalition_value<O>(
        &mut self,
        coalition: &[AtomicAgent],
        pool: &ModelPool,
        oracle: &mut O,
        statistics: &mut SearchStatistics,
    ) -> f64
    where
        O: FeasibilityOracle + ?Sized,
    {
        if let Some(&value) = self.coalition_values.get(pool) {
            statistics.on_cache_hit();
            return value;
        }
        statistics.on_evaluation();
        let value = oracle.evaluate_coalition(coalition);
        self.coalition_values.insert(pool.clone(), value);
        value
    }

    fn reset(&mut self) {
        self.coalition_values.clear();
        self.seen_structures.clear();
    }
}
