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

//! # Organization Queries
//!
//! `OrganizationAsk` answers questions about what an organization built from
//! a pool of agents can do:
//!
//! - which sub-pools support a functionality (`resource_support`),
//! - whether a pool supports a set of resources and can be wired into one
//!   system (`is_supporting`, `is_feasible`),
//! - how a pool splits into coalitions that each support a set of resources
//!   (`find_feasible_coalition_structure`).
//!
//! Support queries read from a `FunctionalityMapping` computed once by
//! `prepare`. Only the `Actor` models of the prepared pool take part in it.
//!
//! ```rust
//! use troupe::ask::OrganizationAsk;
//! use troupe_model::catalog::CatalogBuilder;
//! use troupe_model::pool::ModelPool;
//! use troupe_model::resource::Resource;
//! use troupe_model::vocabulary;
//! use std::time::Duration;
//!
//! let catalog = CatalogBuilder::new()
//!     .subclass("Sherpa", vocabulary::actor())
//!     .subclass("ImageProvider", vocabulary::functionality())
//!     .has("ImageProvider", "Camera", 1, 1)
//!     .has("Sherpa", "Camera", 0, 2)
//!     .build();
//!
//! let mut ask = OrganizationAsk::new(&catalog);
//! ask.prepare(&ModelPool::from_pairs([("Sherpa", 2)])).unwrap();
//!
//! let sherpa = ModelPool::single("Sherpa");
//! let resources = [Resource::new("ImageProvider")];
//! assert!(ask.is_supporting(&sherpa, &resources, Duration::ZERO).unwrap());
//! ```

use crate::error::AskError;
use std::collections::BTreeSet;
use std::time::Duration;
use troupe_coalition::agent::{self, AtomicAgent};
use troupe_coalition::config::CoalitionConfig;
use troupe_coalition::oracle::FeasibilityOracle;
use troupe_coalition::result::CoalitionOutcome;
use troupe_coalition::search::CoalitionStructureSearch;
use troupe_connectivity::config::ConnectivityConfig;
use troupe_connectivity::feasibility;
use troupe_connectivity::graph::ConnectionGraph;
use troupe_mapping::config::MappingConfig;
use troupe_mapping::engine::MappingEngine;
use troupe_mapping::mapping::FunctionalityMapping;
use troupe_mapping::property::{self, Aggregation};
use troupe_mapping::{minimality, saturation, support};
use troupe_model::algebra;
use troupe_model::model::ResourceModel;
use troupe_model::pool::{ModelCombination, ModelPool};
use troupe_model::query::ModelQuery;
use troupe_model::resource::Resource;
use troupe_model::support::SupportType;
use troupe_model::vocabulary;

pub struct OrganizationAsk<'q, Q>
where
    Q: ModelQuery + ?Sized,
{
    engine: MappingEngine<'q, Q>,
    model_pool: ModelPool,
    mapping: Option<FunctionalityMapping>,
}

impl<Q> std::fmt::Debug for OrganizationAsk<'_, Q>
where
    Q: ModelQuery + ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrganizationAsk")
            .field("config", self.engine.config())
            .field("model_pool", &self.model_pool)
            .field("prepared", &self.mapping.is_some())
            .finish()
    }
}

impl<'q, Q> OrganizationAsk<'q, Q>
where
    Q: ModelQuery + ?Sized,
{
    #[inline]
    pub fn new(query: &'q Q) -> Self {
        Self::with_config(query, MappingConfig::default())
    }

    #[inline]
    pub fn with_config(query: &'q Q, config: MappingConfig) -> Self {
        Self {
            engine: MappingEngine::with_config(query, config),
            model_pool: ModelPool::new(),
            mapping: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &MappingConfig {
        self.engine.config()
    }

    #[inline]
    pub fn query(&self) -> &'q Q {
        self.engine.query()
    }

    /// The `Actor` part of the prepared pool.
    #[inline]
    pub fn model_pool(&self) -> &ModelPool {
        &self.model_pool
    }

    #[inline]
    pub fn is_prepared(&self) -> bool {
        self.mapping.is_some()
    }

    /// The mapping computed by `prepare`.
    pub fn mapping(&self) -> Result<&FunctionalityMapping, AskError> {
        self.mapping.as_ref().ok_or(AskError::NotPrepared)
    }

    /// Restricts `pool` to its `Actor` models and computes the functionality
    /// mapping for every known functionality.
    ///
    /// # Errors
    ///
    /// Whatever `compute_functionality_mapping` reports, e.g. an empty pool
    /// or no functionalities in the query service.
    pub fn prepare(&mut self, pool: &ModelPool) -> Result<(), AskError> {
        let actors = self.engine.allow_subclasses(pool, &vocabulary::actor());
        if !self.config().apply_saturation_bound() {
            tracing::info!("no saturation bound requested; preparing the mapping may take a while");
        }
        let mapping = self.compute_functionality_mapping(
            &actors,
            &self.functionalities(),
            self.config().apply_saturation_bound(),
        )?;
        tracing::debug!("prepared {}", mapping);
        self.model_pool = actors;
        self.mapping = Some(mapping);
        Ok(())
    }

    /// Computes a mapping for `pool` without storing it.
    pub fn compute_functionality_mapping(
        &self,
        pool: &ModelPool,
        functionality_models: &[ResourceModel],
        apply_saturation_bound: bool,
    ) -> Result<FunctionalityMapping, AskError> {
        Ok(self
            .engine
            .compute_functionality_mapping(pool, functionality_models, apply_saturation_bound)?)
    }

    /// Every functionality model the query service knows.
    pub fn functionalities(&self) -> Vec<ResourceModel> {
        self.engine
            .query()
            .subclasses_of(&vocabulary::functionality(), false)
    }

    /// The supported functionalities, each with count one.
    pub fn supported_functionalities(&self) -> Result<ModelPool, AskError> {
        Ok(self
            .mapping()?
            .supported_functionalities()
            .iter()
            .map(|f| (f.clone(), 1))
            .collect())
    }

    /// Pools supporting `resource`. With property constraints, pools are
    /// scaled up to meet them and then clamped to the prepared pool; pools
    /// that cannot meet them are left out.
    pub fn resource_support(&self, resource: &Resource) -> Result<BTreeSet<ModelPool>, AskError> {
        let pools = self.mapping()?.model_pools(resource.model());
        if !resource.has_constraints() {
            return Ok(pools.clone());
        }

        let factors = property::scaling_factors(self.engine.query(), pools, resource);
        let mut scaled = BTreeSet::new();
        for (pool, factor) in pools.iter().zip(factors) {
            if factor == 0.0 {
                continue;
            }
            if factor == 1.0 {
                scaled.insert(pool.clone());
            } else {
                scaled.insert(algebra::multiply(pool, factor));
            }
        }
        Ok(algebra::apply_upper_bound_set(&scaled, &self.model_pool))
    }

    /// Pools supporting all of `resources` together: the elementwise maxima
    /// of one supporting pool per resource. Empty if any resource has no
    /// support.
    pub fn resource_support_set(&self, resources: &[Resource]) -> Result<BTreeSet<ModelPool>, AskError> {
        let mut compositions = BTreeSet::new();
        for resource in resources {
            let pools = self.resource_support(resource)?;
            if pools.is_empty() {
                tracing::debug!("no support for '{}'", resource.model());
                return Ok(BTreeSet::new());
            }
            compositions = algebra::max_compositions(&compositions, &pools);
        }
        Ok(compositions)
    }

    /// `resource_support_set` reduced to minimal pools within the saturation
    /// bound of `resources`.
    pub fn bounded_resource_support(&self, resources: &[Resource]) -> Result<BTreeSet<ModelPool>, AskError> {
        let pools = self.resource_support_set(resources)?;
        let models: Vec<ResourceModel> = resources.iter().map(|r| r.model().clone()).collect();
        let minimal = minimality::filter_non_minimal(self.engine.query(), &pools, &models)?;
        let bound = self.functional_saturation_bound(resources)?;
        Ok(algebra::apply_upper_bound_set(&minimal, &bound))
    }

    /// Pools that support every one of `resources` on their own.
    pub fn intersection(&self, resources: &[Resource]) -> Result<BTreeSet<ModelPool>, AskError> {
        let mapping = self.mapping()?;
        let mut iter = resources.iter();
        let Some(first) = iter.next() else {
            return Ok(BTreeSet::new());
        };
        let mut common = mapping.model_pools(first.model()).clone();
        for resource in iter {
            let pools = mapping.model_pools(resource.model());
            common.retain(|p| pools.contains(p));
        }
        Ok(common)
    }

    /// Saturation bound of `resources` over the prepared pool.
    pub fn functional_saturation_bound(&self, resources: &[Resource]) -> Result<ModelPool, AskError> {
        if self.mapping.is_none() {
            return Err(AskError::NotPrepared);
        }
        Ok(saturation::saturation_bound(
            self.engine.query(),
            &self.model_pool,
            resources,
        )?)
    }

    /// Returns `true` if the prepared pool holds `a` and `b` at the same
    /// time.
    pub fn can_be_distinct(&self, a: &ModelCombination, b: &ModelCombination) -> bool {
        let required = algebra::sum(&a.to_pool(), &b.to_pool());
        !algebra::delta(&self.model_pool, &required).is_negative()
    }

    pub fn support_type(&self, functionalities: &[ResourceModel], pool: &ModelPool) -> Result<SupportType, AskError> {
        Ok(support::support_type(self.engine.query(), functionalities, pool)?)
    }

    pub fn is_minimal(&self, pool: &ModelPool, functionalities: &[ResourceModel]) -> Result<bool, AskError> {
        Ok(minimality::is_minimal(self.engine.query(), pool, functionalities)?)
    }

    pub fn property_value(&self, pool: &ModelPool, property: &ResourceModel) -> Option<f64> {
        property::property_value(self.engine.query(), pool, property)
    }

    pub fn data_property_value(
        &self,
        pool: &ModelPool,
        property: &ResourceModel,
        aggregation: Aggregation,
    ) -> Option<f64> {
        property::data_property_value(self.engine.query(), pool, property, aggregation)
    }

    /// Returns `true` if some pool supporting all of `resources` lies within
    /// `pool` and `pool` can be wired into one system within `timeout`
    /// (zero is unbounded).
    pub fn is_supporting(
        &self,
        pool: &ModelPool,
        resources: &[Resource],
        timeout: Duration,
    ) -> Result<bool, AskError> {
        let supports = self.intersection(resources)?;
        match supports.iter().find(|s| algebra::is_subset(s, pool)) {
            Some(support) => {
                tracing::trace!("{} is covered by {}", support, pool);
                Ok(self.is_feasible(pool, timeout))
            }
            None => Ok(false),
        }
    }

    /// Returns `true` only if a connected wiring of `pool` was found within
    /// `timeout` (zero is unbounded).
    pub fn is_feasible(&self, pool: &ModelPool, timeout: Duration) -> bool {
        feasibility::is_feasible(pool, self.engine.query(), &self.connectivity(timeout))
    }

    /// A connected wiring of `pool`, if one is found within `timeout`.
    pub fn feasible_connection(&self, pool: &ModelPool, timeout: Duration) -> Option<ConnectionGraph> {
        feasibility::feasible_connection(pool, self.engine.query(), &self.connectivity(timeout))
    }

    /// Splits `pool` into coalitions that each support `resources`.
    ///
    /// `timeout` bounds the whole search as well as every connectivity
    /// check within it (zero is unbounded). The outcome holds no coalitions
    /// unless every coalition is feasible; its termination reason tells an
    /// exhausted search from one stopped by the time limit.
    pub fn find_feasible_coalition_structure(
        &self,
        pool: &ModelPool,
        resources: &[Resource],
        timeout: Duration,
    ) -> Result<CoalitionOutcome, AskError> {
        self.mapping()?;
        let agents = AtomicAgent::from_pool(pool);
        let mut oracle = SupportOracle {
            ask: self,
            resources,
            timeout,
        };
        let config = CoalitionConfig::builder().with_time_limit(timeout).build();
        let threshold = config.threshold();
        let outcome = CoalitionStructureSearch::new(config).solve(&agents, &mut oracle);
        if outcome.value() < threshold && !outcome.is_empty() {
            tracing::debug!("no feasible coalition structure, best was {}", outcome);
            return Ok(CoalitionOutcome::new(
                Vec::new(),
                0.0,
                outcome.termination_reason().clone(),
                outcome.statistics().clone(),
            ));
        }
        Ok(outcome)
    }

    fn connectivity(&self, timeout: Duration) -> ConnectivityConfig {
        self.config().connectivity().to_builder().with_timeout(timeout).build()
    }
}

/// Scores a coalition 1 if it supports the resources and can be wired
/// together, 0 otherwise.
struct SupportOracle<'a, 'q, Q>
where
    Q: ModelQuery + ?Sized,
{
    ask: &'a OrganizationAsk<'q, Q>,
    resources: &'a [Resource],
    timeout: Duration,
}

impl<Q> FeasibilityOracle for SupportOracle<'_, '_, Q>
where
    Q: ModelQuery + ?Sized,
{
    fn evaluate_coalition(&mut self, coalition: &[AtomicAgent]) -> f64 {
        let pool = agent::model_pool(coalition);
        match self.ask.is_supporting(&pool, self.resources, self.timeout) {
            Ok(true) => 1.0,
            Ok(false) => 0.0,
            Err(e) => {
                tracing::debug!("{} cannot be evaluated: {}", pool, e);
                0.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use troupe_model::catalog::{Catalog, CatalogBuilder};
    use troupe_model::resource::{ConstraintKind, PropertyConstraint};
    use troupe_search::result::TerminationReason;

    fn rm(s: &str) -> ResourceModel {
        ResourceModel::new(s)
    }

    fn pool(pairs: &[(&str, u32)]) -> ModelPool {
        ModelPool::from_pairs(pairs.iter().copied())
    }

    /// Sherpa and Crex rovers dock through plug and socket. A Sherpa carries
    /// two cameras, a Crex one; a BaseCamp carries batteries only.
    fn catalog() -> Catalog {
        CatalogBuilder::new()
            .subclass("Sherpa", vocabulary::actor())
            .subclass("Crex", vocabulary::actor())
            .subclass("BaseCamp", vocabulary::actor())
            .subclass("ImageProvider", vocabulary::functionality())
            .subclass("PowerSource", vocabulary::functionality())
            .subclass("Plug", vocabulary::electro_mechanical_interface())
            .subclass("Socket", vocabulary::electro_mechanical_interface())
            .compatible("Plug", "Socket")
            .has("ImageProvider", "Camera", 2, 2)
            .has("PowerSource", "Battery", 1, 1)
            .has("Sherpa", "Camera", 0, 2)
            .has("Sherpa", "Socket", 0, 2)
            .has("Crex", "Camera", 0, 1)
            .has("Crex", "Plug", 0, 1)
            .has("BaseCamp", "Battery", 0, 1)
            .data_property("Sherpa", "payload", 4.0)
            .data_property("Crex", "payload", 1.0)
            .build()
    }

    fn prepared<'a>(q: &'a Catalog, base: &ModelPool) -> OrganizationAsk<'a, Catalog> {
        let mut ask = OrganizationAsk::new(q);
        ask.prepare(base).unwrap();
        ask
    }

    #[test]
    fn test_queries_need_preparation() {
        let q = catalog();
        let ask = OrganizationAsk::new(&q);
        assert!(!ask.is_prepared());
        match ask.resource_support(&Resource::new("ImageProvider")) {
            Err(AskError::NotPrepared) => {}
            other => panic!("expected NotPrepared, got {:?}", other),
        }
        match ask.find_feasible_coalition_structure(&pool(&[("Sherpa", 1)]), &[], Duration::ZERO) {
            Err(AskError::NotPrepared) => {}
            other => panic!("expected NotPrepared, got {:?}", other),
        }
    }

    #[test]
    fn test_prepare_keeps_actors_only() {
        let q = catalog();
        let ask = prepared(&q, &pool(&[("Sherpa", 1), ("Crex", 2), ("Camera", 5)]));
        assert_eq!(ask.model_pool(), &pool(&[("Crex", 2), ("Sherpa", 1)]));
        assert_eq!(ask.functionalities().len(), 2);
    }

    #[test]
    fn test_resource_support_and_supported_functionalities() {
        let q = catalog();
        let ask = prepared(&q, &pool(&[("Sherpa", 1), ("Crex", 2), ("BaseCamp", 1)]));
        // Two Crex would carry enough cameras but cannot be wired together.
        let support = ask.resource_support(&Resource::new("ImageProvider")).unwrap();
        assert_eq!(support.into_iter().collect::<Vec<_>>(), vec![pool(&[("Sherpa", 1)])]);
        assert_eq!(
            ask.supported_functionalities().unwrap(),
            pool(&[("ImageProvider", 1), ("PowerSource", 1)])
        );
    }

    #[test]
    fn test_constrained_support_is_scaled_and_bounded() {
        let q = catalog();
        let ask = prepared(&q, &pool(&[("Sherpa", 2), ("Crex", 2)]));
        let heavy = Resource::new("ImageProvider")
            .with_constraint(PropertyConstraint::new("payload", ConstraintKind::GreaterOrEqual, 8.0));
        // A Sherpa carries 4, so two are needed.
        let support = ask.resource_support(&heavy).unwrap();
        assert_eq!(support.into_iter().collect::<Vec<_>>(), vec![pool(&[("Sherpa", 2)])]);
    }

    #[test]
    fn test_resource_support_set_combines_resources() {
        let q = catalog();
        let ask = prepared(&q, &pool(&[("Sherpa", 1), ("BaseCamp", 1)]));
        let both = ask
            .resource_support_set(&[Resource::new("ImageProvider"), Resource::new("PowerSource")])
            .unwrap();
        assert_eq!(
            both.into_iter().collect::<Vec<_>>(),
            vec![pool(&[("BaseCamp", 1), ("Sherpa", 1)])]
        );

        let ask = prepared(&q, &pool(&[("Sherpa", 1)]));
        assert!(
            ask.resource_support_set(&[Resource::new("ImageProvider"), Resource::new("PowerSource")])
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_bounded_resource_support() {
        let q = catalog();
        let ask = prepared(&q, &pool(&[("Sherpa", 2), ("Crex", 2)]));
        let bounded = ask.bounded_resource_support(&[Resource::new("ImageProvider")]).unwrap();
        assert_eq!(bounded.into_iter().collect::<Vec<_>>(), vec![pool(&[("Sherpa", 1)])]);
        assert_eq!(
            ask.functional_saturation_bound(&[Resource::new("ImageProvider")]).unwrap(),
            pool(&[("Crex", 2), ("Sherpa", 1)])
        );
    }

    #[test]
    fn test_intersection() {
        let q = CatalogBuilder::new()
            .subclass("Sherpa", vocabulary::actor())
            .subclass("Crex", vocabulary::actor())
            .subclass("ImageProvider", vocabulary::functionality())
            .subclass("Mapping", vocabulary::functionality())
            .has("ImageProvider", "Camera", 1, 1)
            .has("Mapping", "Lidar", 1, 1)
            .has("Sherpa", "Camera", 0, 1)
            .has("Sherpa", "Lidar", 0, 1)
            .has("Crex", "Camera", 0, 1)
            .build();
        let ask = prepared(&q, &pool(&[("Sherpa", 1), ("Crex", 1)]));
        let both = ask
            .intersection(&[Resource::new("ImageProvider"), Resource::new("Mapping")])
            .unwrap();
        assert_eq!(both.into_iter().collect::<Vec<_>>(), vec![pool(&[("Sherpa", 1)])]);
        assert!(ask.intersection(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_can_be_distinct() {
        let q = catalog();
        let ask = prepared(&q, &pool(&[("Sherpa", 2), ("Crex", 1)]));
        let sherpa = ModelCombination::new(vec![rm("Sherpa")]);
        let crex = ModelCombination::new(vec![rm("Crex")]);
        assert!(ask.can_be_distinct(&sherpa, &sherpa));
        assert!(ask.can_be_distinct(&sherpa, &crex));
        assert!(!ask.can_be_distinct(&crex, &crex));
    }

    #[test]
    fn test_support_and_property_helpers() {
        let q = catalog();
        let ask = prepared(&q, &pool(&[("Sherpa", 1)]));
        let f = [rm("ImageProvider")];
        assert_eq!(ask.support_type(&f, &pool(&[("Crex", 1)])).unwrap(), SupportType::PartialSupport);
        assert!(ask.is_minimal(&pool(&[("Crex", 2)]), &f).unwrap());
        let team = pool(&[("Sherpa", 1), ("Crex", 2)]);
        assert_eq!(ask.property_value(&team, &rm("payload")), Some(6.0));
        assert_eq!(ask.data_property_value(&team, &rm("payload"), Aggregation::Max), Some(4.0));
    }

    #[test]
    fn test_is_supporting_requires_a_wirable_pool() {
        let q = catalog();
        let ask = prepared(&q, &pool(&[("Sherpa", 1), ("Crex", 2)]));
        let images = [Resource::new("ImageProvider")];
        assert!(ask.is_supporting(&pool(&[("Sherpa", 1)]), &images, Duration::ZERO).unwrap());
        assert!(ask.is_supporting(&pool(&[("Sherpa", 1), ("Crex", 1)]), &images, Duration::ZERO).unwrap());
        assert!(!ask.is_supporting(&pool(&[("Crex", 1)]), &images, Duration::ZERO).unwrap());
        assert!(!ask.is_supporting(&pool(&[("Crex", 2)]), &images, Duration::ZERO).unwrap());
        // A BaseCamp has no interface to dock with.
        assert!(!ask.is_supporting(&pool(&[("Sherpa", 1), ("BaseCamp", 1)]), &images, Duration::ZERO).unwrap());
    }

    #[test]
    fn test_feasible_connection() {
        let q = catalog();
        let ask = prepared(&q, &pool(&[("Sherpa", 1)]));
        let graph = ask
            .feasible_connection(&pool(&[("Sherpa", 1), ("Crex", 2)]), Duration::ZERO)
            .unwrap_or_else(|| panic!("expected a connection graph"));
        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.num_edges(), 2);
        assert!(!ask.is_feasible(&pool(&[("Crex", 2)]), Duration::ZERO));
    }

    #[test]
    fn test_coalition_structure() {
        let q = catalog();
        let ask = prepared(&q, &pool(&[("Sherpa", 2)]));
        let images = [Resource::new("ImageProvider")];
        // Sherpas carry sockets only, so two of them cannot be wired together.
        let outcome = ask
            .find_feasible_coalition_structure(&pool(&[("Sherpa", 2)]), &images, Duration::ZERO)
            .unwrap();
        assert_eq!(outcome.pools(), vec![pool(&[("Sherpa", 1)]), pool(&[("Sherpa", 1)])]);
        assert_eq!(outcome.termination_reason(), &TerminationReason::SolutionLimitReached);
    }

    #[test]
    fn test_infeasible_coalition_search_is_exhausted() {
        let q = catalog();
        let ask = prepared(&q, &pool(&[("Sherpa", 2)]));
        let images = [Resource::new("ImageProvider")];
        let outcome = ask
            .find_feasible_coalition_structure(&pool(&[("BaseCamp", 2)]), &images, Duration::ZERO)
            .unwrap();
        assert!(outcome.is_empty());
        assert_eq!(outcome.termination_reason(), &TerminationReason::SearchSpaceExhausted);
        // {BaseCamp: 2} and {BaseCamp: 1} + {BaseCamp: 1}.
        assert_eq!(outcome.statistics().candidates, 2);
    }

    #[test]
    fn test_expired_coalition_budget_aborts() {
        let q = catalog();
        let ask = prepared(&q, &pool(&[("Sherpa", 2)]));
        let images = [Resource::new("ImageProvider")];
        // Three distinct structures; the budget runs out while checking the first.
        let outcome = ask
            .find_feasible_coalition_structure(&pool(&[("BaseCamp", 3)]), &images, Duration::from_nanos(1))
            .unwrap();
        assert!(outcome.is_empty());
        match outcome.termination_reason() {
            TerminationReason::Aborted(msg) => assert_eq!(msg, "time limit reached"),
            other => panic!("expected Aborted termination reason, got {:?}", other),
        }
    }
}
