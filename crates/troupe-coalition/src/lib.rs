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

//! # Troupe Coalition
//!
//! Coalition structure generation over atomic agents: given a pool of
//! agents and an oracle scoring coalitions, find a split of the pool into
//! coalitions that all meet the goal.
//!
//! ## Modules
//!
//! - `agent`: `AtomicAgent`, one instance of a model.
//! - `oracle`: The `FeasibilityOracle` trait.
//! - `partition`: Restricted-growth enumeration of set partitions.
//! - `search`: `CoalitionStructureSearch`.
//! - `config` / `result`: Search limits and the reported outcome.

pub mod agent;
pub mod config;
pub mod oracle;
pub mod partition;
pub mod result;
pub mod search;
