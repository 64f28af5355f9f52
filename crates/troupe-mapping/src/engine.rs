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

//! # Mapping Engine
//!
//! Computes a `FunctionalityMapping` for a pool and a list of functionality
//! models. Two strategies exist:
//!
//! - **Bounded**: the pool is clamped with the global saturation bound, then
//!   each functionality enumerates the combinations inside its own bound and
//!   keeps those that are minimal and, optionally, can be wired into one
//!   connected organization.
//! - **Unbounded**: every combination of the pool is tested for full support
//!   of each functionality. No minimality or connectivity filtering.
//!
//! The wall-clock budget of `MappingConfig::time_limit` is checked at every
//! generated combination.

use crate::config::MappingConfig;
use crate::error::MappingError;
use crate::mapping::FunctionalityMapping;
use crate::minimality;
use crate::saturation;
use crate::support;
use std::time::Instant;
use troupe_model::algebra;
use troupe_model::combination::{CombinationMode, LimitedCombination};
use troupe_model::model::ResourceModel;
use troupe_model::pool::ModelPool;
use troupe_model::query::ModelQuery;
use troupe_model::resource::Resource;
use troupe_model::support::SupportType;
use troupe_search::monitor::search_monitor::{SearchCommand, SearchMonitor};
use troupe_search::monitor::time_limit::TimeLimitMonitor;

/// Mapping computation over one query service.
#[derive(Debug, Clone)]
pub struct MappingEngine<'q, Q>
where
    Q: ModelQuery + ?Sized,
{
    query: &'q Q,
    config: MappingConfig,
}

impl<'q, Q> MappingEngine<'q, Q>
where
    Q: ModelQuery + ?Sized,
{
    #[inline]
    pub fn new(query: &'q Q) -> Self {
        Self::with_config(query, MappingConfig::default())
    }

    #[inline]
    pub fn with_config(query: &'q Q, config: MappingConfig) -> Self {
        Self { query, config }
    }

    #[inline]
    pub fn config(&self) -> &MappingConfig {
        &self.config
    }

    #[inline]
    pub fn query(&self) -> &'q Q {
        self.query
    }

    /// Computes which combinations of `pool` support which of
    /// `functionality_models`.
    ///
    /// # Errors
    ///
    /// - `MappingError::InvalidArgument` if `pool` has no entries or
    ///   `functionality_models` is empty.
    /// - `MappingError::SearchTimeout` if the time limit expires.
    /// - Errors of the support computation, e.g. unknown cardinality bounds.
    pub fn compute_functionality_mapping(
        &self,
        pool: &ModelPool,
        functionality_models: &[ResourceModel],
        apply_saturation_bound: bool,
    ) -> Result<FunctionalityMapping, MappingError> {
        if pool.is_empty() {
            return Err(MappingError::invalid_argument(
                "model pool is empty",
                pool,
                functionality_models,
            ));
        }
        if functionality_models.is_empty() {
            return Err(MappingError::invalid_argument(
                "no functionalities given",
                pool,
                functionality_models,
            ));
        }

        let start = Instant::now();
        let mut timer = self.config.time_limit().map(TimeLimitMonitor::every_step);
        if let Some(timer) = timer.as_mut() {
            timer.on_enter_search();
        }

        let mut mapping = if apply_saturation_bound {
            self.compute_bounded(pool, functionality_models, &mut timer)?
        } else {
            self.compute_unbounded(pool, functionality_models, &mut timer)?
        };

        if let Some(timer) = timer.as_mut() {
            timer.on_exit_search();
        }
        mapping.statistics_mut().set_total_time(start.elapsed());
        tracing::info!(
            supported = mapping.supported_functionalities().len(),
            functionalities = functionality_models.len(),
            pools = mapping.num_pools(),
            candidates = mapping.statistics().candidates,
            "functionality mapping computed in {:?}",
            start.elapsed()
        );
        Ok(mapping)
    }

    fn compute_bounded(
        &self,
        pool: &ModelPool,
        functionality_models: &[ResourceModel],
        timer: &mut Option<TimeLimitMonitor>,
    ) -> Result<FunctionalityMapping, MappingError> {
        let resources: Vec<Resource> = functionality_models.iter().cloned().map(Resource::from).collect();
        let global_bound = saturation::saturation_bound(self.query, pool, &resources)?;
        let bounded_pool = algebra::apply_upper_bound(pool, &global_bound);
        tracing::debug!(bound = %global_bound, "bounded pool {}", bounded_pool);

        let mut mapping =
            FunctionalityMapping::new(pool.clone(), functionality_models.to_vec(), bounded_pool.clone());
        if bounded_pool.is_null() {
            tracing::warn!(
                "saturation bound leaves no atoms of {}; no functionality can be supported",
                pool
            );
            return Ok(mapping);
        }

        for resource in &resources {
            let local = saturation::resource_saturation_bound(self.query, pool, resource)?;
            let local_bound = algebra::apply_upper_bound(&bounded_pool, &local);
            if local_bound.is_null() {
                tracing::info!("no model of {} contributes to '{}'", pool, resource.model());
                continue;
            }

            let functionality = std::slice::from_ref(resource.model());
            for combination in self.combinations(&local_bound) {
                self.check_time(timer)?;
                mapping.statistics_mut().on_candidate();

                mapping.statistics_mut().on_evaluation();
                if !minimality::is_minimal(self.query, &combination, functionality)? {
                    continue;
                }
                if self.config.check_connectivity()
                    && !troupe_connectivity::feasibility::is_feasible(
                        &combination,
                        self.query,
                        self.config.connectivity(),
                    )
                {
                    tracing::debug!("{} supports '{}' but cannot be connected", combination, resource.model());
                    continue;
                }
                mapping.statistics_mut().on_solution();
                mapping.add(combination, resource.model().clone());
            }
        }
        Ok(mapping)
    }

    fn compute_unbounded(
        &self,
        pool: &ModelPool,
        functionality_models: &[ResourceModel],
        timer: &mut Option<TimeLimitMonitor>,
    ) -> Result<FunctionalityMapping, MappingError> {
        let mut mapping = FunctionalityMapping::new(pool.clone(), functionality_models.to_vec(), pool.clone());
        for combination in self.combinations(pool) {
            self.check_time(timer)?;
            mapping.statistics_mut().on_candidate();
            for functionality in functionality_models {
                mapping.statistics_mut().on_evaluation();
                let support = support::support_type(self.query, std::slice::from_ref(functionality), &combination)?;
                if support == SupportType::FullSupport {
                    mapping.statistics_mut().on_solution();
                    mapping.add(combination.clone(), functionality.clone());
                }
            }
        }
        Ok(mapping)
    }

    fn combinations(&self, bound: &ModelPool) -> LimitedCombination {
        let combinations = LimitedCombination::new(bound, bound.total_atoms(), CombinationMode::Max);
        match self.config.combination_limit() {
            Some(limit) => combinations.with_limit(limit),
            None => combinations,
        }
    }

    fn check_time(&self, timer: &mut Option<TimeLimitMonitor>) -> Result<(), MappingError> {
        let Some(timer) = timer.as_mut() else {
            return Ok(());
        };
        timer.on_step();
        if let SearchCommand::Terminate(reason) = timer.search_command() {
            tracing::warn!("functionality mapping stopped: {}", reason);
            return Err(MappingError::SearchTimeout {
                elapsed: timer.elapsed(),
            });
        }
        Ok(())
    }

    /// The part of `pool` whose models are proper subclasses of `parent`.
    pub fn allow_subclasses(&self, pool: &ModelPool, parent: &ResourceModel) -> ModelPool {
        pool.filtered(|model| self.query.is_subclass_of(model, parent))
    }
}
