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

//! # Troupe
//!
//! Organization queries over a catalog of resource models: which
//! combinations of agents support a functionality, whether a combination can
//! be wired into one connected system, and how a pool splits into coalitions
//! that each meet a goal.
//!
//! The heavy lifting lives in the member crates; this crate ties them
//! together behind `OrganizationAsk`.
//!
//! ## Modules
//!
//! - `ask`: `OrganizationAsk`, the query facade.
//! - `error`: `AskError`.
//! - `robot`: physical figures of atomic and composite systems.

pub mod ask;
pub mod error;
pub mod robot;

#[cfg(test)]
mod scenarios;
