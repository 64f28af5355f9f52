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

//! # Robot Facade
//!
//! Physical figures of an atomic or composite robotic system, aggregated over
//! its model pool from the data properties of its members:
//!
//! | figure                    | aggregation               |
//! |---------------------------|---------------------------|
//! | mass                      | sum                       |
//! | nominal and max velocity  | slowest member            |
//! | supply voltage            | highest member            |
//! | power source capacity     | sum                       |
//! | nominal power consumption | sum                       |
//! | transport capacity        | sum of max cardinalities  |
//!
//! Members that assert no value for a property are skipped, so a passive
//! payload does not slow a composite down. A figure no member asserts is
//! `None`.

use crate::ask::OrganizationAsk;
use troupe_mapping::property::{self, Aggregation};
use troupe_model::model::ResourceModel;
use troupe_model::pool::ModelPool;
use troupe_model::query::ModelQuery;
use troupe_model::vocabulary;

const SECONDS_PER_HOUR: f64 = 3600.0;

pub struct Robot<'a, 'q, Q>
where
    Q: ModelQuery + ?Sized,
{
    ask: &'a OrganizationAsk<'q, Q>,
    model_pool: ModelPool,
}

impl<'a, 'q, Q> Robot<'a, 'q, Q>
where
    Q: ModelQuery + ?Sized,
{
    /// A composite system made of `model_pool`.
    #[inline]
    pub fn new(ask: &'a OrganizationAsk<'q, Q>, model_pool: ModelPool) -> Self {
        Self { ask, model_pool }
    }

    /// A single instance of `model`.
    #[inline]
    pub fn atomic(ask: &'a OrganizationAsk<'q, Q>, model: impl Into<ResourceModel>) -> Self {
        Self::new(ask, ModelPool::single(model))
    }

    #[inline]
    pub fn model_pool(&self) -> &ModelPool {
        &self.model_pool
    }

    /// Returns `true` for a single instance of a single model.
    #[inline]
    pub fn is_atomic(&self) -> bool {
        self.model_pool.total_atoms() == 1
    }

    fn aggregate(&self, property: &ResourceModel, aggregation: Aggregation) -> Option<f64> {
        self.ask
            .data_property_value(&self.model_pool, property, aggregation)
    }

    /// Mass in kg.
    pub fn mass(&self) -> Option<f64> {
        self.aggregate(&vocabulary::mass(), Aggregation::Sum)
    }

    /// Nominal velocity in m/s.
    pub fn nominal_velocity(&self) -> Option<f64> {
        self.aggregate(&vocabulary::nominal_velocity(), Aggregation::Min)
    }

    /// Maximum velocity in m/s.
    pub fn max_velocity(&self) -> Option<f64> {
        self.aggregate(&vocabulary::max_velocity(), Aggregation::Min)
    }

    /// Supply voltage in V.
    pub fn supply_voltage(&self) -> Option<f64> {
        self.aggregate(&vocabulary::supply_voltage(), Aggregation::Max)
    }

    /// Power source capacity in Ah.
    pub fn power_source_capacity(&self) -> Option<f64> {
        self.aggregate(&vocabulary::power_source_capacity(), Aggregation::Sum)
    }

    /// Nominal power consumption in W.
    pub fn nominal_power_consumption(&self) -> Option<f64> {
        self.aggregate(&vocabulary::nominal_power_consumption(), Aggregation::Sum)
    }

    /// Energy capacity in Ws: capacity [Ah] × supply voltage [V] × 3600.
    pub fn energy_capacity(&self) -> Option<f64> {
        Some(self.power_source_capacity()? * self.supply_voltage()? * SECONDS_PER_HOUR)
    }

    /// Number of agents this system can carry.
    pub fn transport_capacity(&self) -> Option<u32> {
        property::transport_capacity(self.ask.query(), &self.model_pool).map(|c| c as u32)
    }

    /// Energy in Ws spent running for `seconds` at nominal power.
    pub fn estimated_energy_cost_from_time(&self, seconds: f64) -> Option<f64> {
        Some(self.nominal_power_consumption()? * seconds)
    }

    /// Energy in Wh spent travelling `meters` at nominal velocity. `None`
    /// for a system that does not move.
    pub fn estimated_energy_cost(&self, meters: f64) -> Option<f64> {
        let velocity = self.nominal_velocity().filter(|&v| v > 0.0)?;
        Some(self.estimated_energy_cost_from_time(meters / velocity)? / SECONDS_PER_HOUR)
    }

    /// `estimated_energy_cost` as a share of the energy capacity.
    pub fn estimated_relative_energy_cost(&self, meters: f64) -> Option<f64> {
        let capacity = self.energy_capacity().filter(|&c| c > 0.0)?;
        Some(self.estimated_energy_cost(meters)? * SECONDS_PER_HOUR / capacity)
    }
}

impl<Q> std::fmt::Debug for Robot<'_, '_, Q>
where
    Q: ModelQuery + ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Robot").field("model_pool", &self.model_pool).finish()
    }
}

impl<Q> std::fmt::Display for Robot<'_, '_, Q>
where
    Q: ModelQuery + ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Robot({})", self.model_pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use troupe_model::cardinality::CardinalityRestriction;
    use troupe_model::catalog::{Catalog, CatalogBuilder};

    /// A Sherpa rover can carry two payloads; a payload is passive.
    fn catalog() -> Catalog {
        CatalogBuilder::new()
            .data_property("Sherpa", vocabulary::mass(), 120.0)
            .data_property("Sherpa", vocabulary::nominal_velocity(), 0.5)
            .data_property("Sherpa", vocabulary::max_velocity(), 1.2)
            .data_property("Sherpa", vocabulary::supply_voltage(), 24.0)
            .data_property("Sherpa", vocabulary::power_source_capacity(), 10.0)
            .data_property("Sherpa", vocabulary::nominal_power_consumption(), 90.0)
            .data_property("Crex", vocabulary::nominal_velocity(), 0.2)
            .data_property("Crex", vocabulary::mass(), 30.0)
            .data_property("Payload", vocabulary::mass(), 2.5)
            .data_property("Payload", vocabulary::supply_voltage(), 12.0)
            .data_property("Payload", vocabulary::power_source_capacity(), 2.0)
            .restriction(
                "Sherpa",
                CardinalityRestriction::max(vocabulary::has_transport_capacity(), "Payload", 2),
            )
            .build()
    }

    fn close(a: Option<f64>, b: f64) -> bool {
        a.is_some_and(|a| (a - b).abs() < 1e-9)
    }

    #[test]
    fn test_atomic_figures() {
        let q = catalog();
        let ask = OrganizationAsk::new(&q);
        let sherpa = Robot::atomic(&ask, "Sherpa");
        assert!(sherpa.is_atomic());
        assert_eq!(sherpa.mass(), Some(120.0));
        assert_eq!(sherpa.nominal_velocity(), Some(0.5));
        assert_eq!(sherpa.transport_capacity(), Some(2));
        assert_eq!(sherpa.energy_capacity(), Some(10.0 * 24.0 * 3600.0));
        assert_eq!(sherpa.to_string(), "Robot({Sherpa: 1})");
    }

    #[test]
    fn test_composite_aggregation() {
        let q = catalog();
        let ask = OrganizationAsk::new(&q);
        let team = Robot::new(
            &ask,
            ModelPool::from_pairs([("Sherpa", 1), ("Crex", 1), ("Payload", 2)]),
        );
        assert!(!team.is_atomic());
        assert!(close(team.mass(), 155.0));
        // The payloads assert no velocity; the Crex is slowest.
        assert_eq!(team.nominal_velocity(), Some(0.2));
        assert_eq!(team.max_velocity(), Some(1.2));
        assert_eq!(team.supply_voltage(), Some(24.0));
        assert!(close(team.power_source_capacity(), 14.0));
    }

    #[test]
    fn test_energy_estimates() {
        let q = catalog();
        let ask = OrganizationAsk::new(&q);
        let sherpa = Robot::atomic(&ask, "Sherpa");
        assert_eq!(sherpa.estimated_energy_cost_from_time(10.0), Some(900.0));
        // 100 m at 0.5 m/s takes 200 s at 90 W: 18000 Ws = 5 Wh.
        assert!(close(sherpa.estimated_energy_cost(100.0), 5.0));
        assert!(close(
            sherpa.estimated_relative_energy_cost(100.0),
            18_000.0 / 864_000.0
        ));
    }

    #[test]
    fn test_missing_figures_are_none() {
        let q = catalog();
        let ask = OrganizationAsk::new(&q);
        let payload = Robot::atomic(&ask, "Payload");
        assert_eq!(payload.nominal_velocity(), None);
        assert_eq!(payload.estimated_energy_cost(10.0), None);
        assert_eq!(payload.transport_capacity(), None);
        assert_eq!(payload.energy_capacity(), Some(2.0 * 12.0 * 3600.0));
        let crex = Robot::atomic(&ask, "Crex");
        assert_eq!(crex.estimated_relative_energy_cost(10.0), None);
    }
}
