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

//! End-to-end checks across the mapping, saturation and connectivity
//! engines.

use std::time::Duration;
use troupe_connectivity::config::ConnectivityConfig;
use troupe_connectivity::feasibility;
use troupe_mapping::engine::MappingEngine;
use troupe_mapping::saturation;
use troupe_model::catalog::{Catalog, CatalogBuilder};
use troupe_model::model::ResourceModel;
use troupe_model::pool::ModelPool;
use troupe_model::vocabulary;

use crate::ask::OrganizationAsk;

fn rm(s: &str) -> ResourceModel {
    ResourceModel::new(s)
}

fn docking() -> Catalog {
    CatalogBuilder::new()
        .subclass("Plug", vocabulary::electro_mechanical_interface())
        .subclass("Socket", vocabulary::electro_mechanical_interface())
        .compatible("Plug", "Socket")
        .has("Rover", "Plug", 1, 1)
        .has("Dock", "Socket", 1, 1)
        .has("Payload", "Battery", 1, 1)
        .build()
}

#[test]
fn test_zero_count_pool_has_no_support() {
    let q = CatalogBuilder::new().has("ImageProvider", "Camera", 1, 1).build();
    let mapping = MappingEngine::new(&q)
        .compute_functionality_mapping(&ModelPool::from_pairs([("Camera", 0)]), &[rm("ImageProvider")], true)
        .unwrap();
    assert!(mapping.model_pools(&rm("ImageProvider")).is_empty());
    assert!(mapping.supported_functionalities().is_empty());
}

#[test]
fn test_sufficient_single_agent_is_the_minimal_support() {
    let q = CatalogBuilder::new()
        .subclass("Sherpa", vocabulary::actor())
        .subclass("BaseCamp", vocabulary::actor())
        .subclass("ImageProvider", vocabulary::functionality())
        .has("ImageProvider", "Camera", 1, 1)
        .has("Sherpa", "Camera", 0, 1)
        .has("BaseCamp", "Battery", 0, 2)
        .build();
    let mut ask = OrganizationAsk::new(&q);
    ask.prepare(&ModelPool::from_pairs([("Sherpa", 1), ("BaseCamp", 3)]))
        .unwrap();
    let support: Vec<ModelPool> = ask
        .mapping()
        .unwrap()
        .model_pools(&rm("ImageProvider"))
        .iter()
        .cloned()
        .collect();
    assert_eq!(support, vec![ModelPool::single("Sherpa")]);
}

#[test]
fn test_compatible_pair_forms_one_edge() {
    let pool = ModelPool::from_pairs([("Rover", 1), ("Dock", 1)]);
    let graph = feasibility::feasible_connection(&pool, &docking(), &ConnectivityConfig::default())
        .unwrap_or_else(|| panic!("expected a connection graph"));
    assert_eq!(graph.num_nodes(), 2);
    assert_eq!(graph.num_edges(), 1);
}

#[test]
fn test_interface_less_instance_breaks_completeness() {
    let pool = ModelPool::from_pairs([("Rover", 1), ("Dock", 1), ("Payload", 1)]);
    let config = ConnectivityConfig::builder()
        .with_timeout(Duration::from_secs(10))
        .build();
    let outcome = feasibility::solve_pool(&pool, &docking(), &config);
    assert!(outcome.result().is_infeasible());
    assert!(outcome.termination_reason().is_proven());
}

#[test]
fn test_fractional_saturation_rounds_up() {
    let q = CatalogBuilder::new()
        .has("Survey", "Camera", 5, 5)
        .has("Sherpa", "Camera", 0, 2)
        .build();
    assert_eq!(
        saturation::model_saturation_bound(&q, &rm("Survey"), &rm("Sherpa")).unwrap(),
        3
    );
}
