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

//! # Troupe Search
//!
//! Engine-agnostic plumbing for the bounded searches in this workspace: the
//! combination sweep of the mapping engine, the coalition structure search
//! and the connectivity solver all stop, report and account for their work
//! in the same way.
//!
//! ## Modules
//!
//! - `monitor`: The `SearchMonitor` trait and its stock implementations
//!   (time limit, interrupt flag, solution limit, composite).
//! - `result`: `TerminationReason`, which tells a proven answer apart from
//!   an aborted run.
//! - `stats`: `SearchStatistics` and its builder.

pub mod monitor;
pub mod result;
pub mod stats;
