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

//! # Troupe Model
//!
//! **Resource models, model pools and the algebra over them.**
//!
//! Everything the composition engines reason about is expressed in terms of
//! resource models (opaque type identifiers such as a robot type, a camera, a
//! mechanical interface) and multisets of them. This crate holds those value
//! types together with the numeric machinery that compares what a
//! functionality requires against what a pool of resources provides.
//!
//! ## Architecture
//!
//! * **`model`**: `ResourceModel`, the cheap-to-clone identifier.
//! * **`pool`**: `ModelPool`, `ModelPoolDelta` and `ModelCombination`.
//! * **`algebra`**: Pure, total pool arithmetic (sum, delta, scaling, bounds).
//! * **`support`**: `ResourceSupportVector` and the ternary `SupportType`.
//! * **`combination`**: `LimitedCombination`, the bounded multiset enumerator.
//! * **`query`**: The `ModelQuery` trait through which taxonomy, cardinality
//!   restrictions and data properties are obtained.
//! * **`cardinality`**: Cardinality restrictions and their collapse into bounds.
//! * **`resource`**: Resources, property constraints and value bounds.
//! * **`catalog`**: An in-memory `ModelQuery` implementation.
//! * **`vocabulary`**: Well-known class and relation identifiers.
//! * **`error`**: `ModelError`.
//!
//! ## Design Philosophy
//!
//! 1.  **Total arithmetic**: Pool and vector operations never fail. Missing
//!     models count as zero.
//! 2.  **Value semantics**: Pools are ordered maps with a total order so they
//!     can be used directly as set elements and map keys.
//! 3.  **Narrow collaborator surface**: All external knowledge flows through
//!     `ModelQuery`; nothing here parses or stores ontologies.

pub mod algebra;
pub mod cardinality;
pub mod catalog;
pub mod combination;
pub mod error;
pub mod model;
pub mod pool;
pub mod query;
pub mod resource;
pub mod support;
pub mod vocabulary;
