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

use std::time::Duration;
use troupe_core::num::counter::SaturatingCounter;

/// Counters of one bounded search run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Candidates generated (combinations, partitions, ...).
    pub candidates: u64,
    /// Candidates handed to an evaluation (oracle call, support test).
    pub evaluations: u64,
    /// Evaluations answered from a cache.
    pub cache_hits: u64,
    /// Candidates accepted as solutions.
    pub solutions_found: u64,
    /// Wall-clock duration of the run.
    pub solve_duration: Duration,
}

impl SearchStatistics {
    #[inline]
    pub fn on_candidate(&mut self) {
        self.candidates.bump();
    }

    #[inline]
    pub fn on_evaluation(&mut self) {
        self.evaluations.bump();
    }

    #[inline]
    pub fn on_cache_hit(&mut self) {
        self.cache_hits.bump();
    }

    #[inline]
    pub fn on_solution(&mut self) {
        self.solutions_found.bump();
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.solve_duration = duration;
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Candidates: {}", self.candidates)?;
        writeln!(f, "  Evaluations: {}", self.evaluations)?;
        writeln!(f, "  Cache Hits: {}", self.cache_hits)?;
        writeln!(f, "  Solutions Found: {}", self.solutions_found)?;
        writeln!(
            f,
            "  Solve Duration (secs): {:.3}",
            self.solve_duration.as_secs_f64()
        )
    }
}

/// Builder for `SearchStatistics`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStatisticsBuilder {
    inner: SearchStatistics,
}

impl SearchStatisticsBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn candidates(mut self, candidates: u64) -> Self {
        self.inner.candidates = candidates;
        self
    }

    #[inline]
    pub fn evaluations(mut self, evaluations: u64) -> Self {
        self.inner.evaluations = evaluations;
        self
    }

    #[inline]
    pub fn cache_hits(mut self, cache_hits: u64) -> Self {
        self.inner.cache_hits = cache_hits;
        self
    }

    #[inline]
    pub fn solutions_found(mut self, solutions_found: u64) -> Self {
        self.inner.solutions_found = solutions_found;
        self
    }

    #[inline]
    pub fn solve_duration(mut self, solve_duration: Duration) -> Self {
        self.inner.solve_duration = solve_duration;
        self
    }

    #[inline]
    pub fn build(self) -> SearchStatistics {
        self.inner
    }
}
