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

//! # Troupe Mapping
//!
//! Answers "which minimal sub-pools of a resource pool support which
//! functionality", the central cache the organization queries read from.
//!
//! ## Modules
//!
//! - `engine`: `MappingEngine`, the bounded and unbounded enumeration
//!   strategies.
//! - `mapping`: `FunctionalityMapping`, the bidirectional result cache.
//! - `support`: Requirement and availability vectors and the support
//!   classification of whole pools.
//! - `minimality`: Redundancy test for supporting pools.
//! - `saturation`: Functional saturation bounds that prune the enumeration.
//! - `property`: Property values and the scaling of pools to meet property
//!   constraints.
//! - `config`: `MappingConfig` and its builder.
//! - `error`: `MappingError`.

pub mod config;
pub mod engine;
pub mod error;
pub mod mapping;
pub mod minimality;
pub mod property;
pub mod saturation;
pub mod support;
