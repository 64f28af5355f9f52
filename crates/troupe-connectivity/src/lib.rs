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

//! # Troupe Connectivity
//!
//! Decides whether the instances of a model pool can be wired into a single
//! connected system through their typed interfaces.
//!
//! Every instance of the pool owns the interface endpoints its model declares
//! (`has` restrictions qualified by a subclass of the interface base class).
//! Each endpoint is a variable whose value is either "unconnected" or a
//! compatible endpoint on another instance. A labeling is a solution once the
//! instance graph it induces is one connected component.
//!
//! The solver is a depth-first search with an explicit decision stack and an
//! undo trail. A rollback disjoint-set tracks the components of the partial
//! graph; after every decision a propagator proves that the remaining open
//! endpoints can still join all components, and prunes the node otherwise.
//!
//! ## Modules
//!
//! - `problem`: The immutable search space built from a pool and a query.
//! - `state`, `trail`, `stack`: Mutable search state and its undo machinery.
//! - `branching`: Decision builders (merit-ordered and lexicographic).
//! - `propagation`: The completeness propagator.
//! - `solver`: `ConnectivitySolver` and its search session.
//! - `monitor`: Tree search monitors (logging, no-op, composite, adapters).
//! - `graph`, `result`, `stats`: What a run produces.
//! - `config`, `feasibility`: Configuration and the convenience entry points.
//!
//! ## Usage
//!
//! ```rust
//! use troupe_connectivity::config::ConnectivityConfig;
//! use troupe_connectivity::feasibility::is_feasible;
//! use troupe_model::catalog::CatalogBuilder;
//! use troupe_model::pool::ModelPool;
//! use troupe_model::vocabulary;
//!
//! let catalog = CatalogBuilder::new()
//!     .subclass("Plug", vocabulary::electro_mechanical_interface())
//!     .subclass("Socket", vocabulary::electro_mechanical_interface())
//!     .compatible("Plug", "Socket")
//!     .has("Rover", "Plug", 1, 1)
//!     .has("Dock", "Socket", 1, 1)
//!     .build();
//!
//! let pool = ModelPool::from_pairs([("Rover", 1), ("Dock", 1)]);
//! assert!(is_feasible(&pool, &catalog, &ConnectivityConfig::default()));
//! ```

pub mod branching;
pub mod config;
pub mod feasibility;
pub mod graph;
pub mod index;
pub mod monitor;
pub mod problem;
pub mod propagation;
pub mod result;
pub mod solver;
pub mod stack;
pub mod state;
pub mod stats;
pub mod trail;
