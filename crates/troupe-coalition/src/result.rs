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

use crate::agent::{self, AtomicAgent};
use troupe_model::pool::ModelPool;
use troupe_search::result::TerminationReason;
use troupe_search::stats::SearchStatistics;

/// Result of a coalition structure search.
#[derive(Debug, Clone, PartialEq)]
pub struct CoalitionOutcome {
    structure: Vec<Vec<AtomicAgent>>,
    value: f64,
    termination_reason: TerminationReason,
    statistics: SearchStatistics,
}

impl CoalitionOutcome {
    #[inline]
    pub fn new(
        structure: Vec<Vec<AtomicAgent>>,
        value: f64,
        termination_reason: TerminationReason,
        statistics: SearchStatistics,
    ) -> Self {
        Self {
            structure,
            value,
            termination_reason,
            statistics,
        }
    }

    /// The chosen coalitions; empty if no structure had a positive value.
    #[inline]
    pub fn structure(&self) -> &[Vec<AtomicAgent>] {
        &self.structure
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.structure.is_empty()
    }

    /// The model pool of every coalition.
    pub fn pools(&self) -> Vec<ModelPool> {
        self.structure.iter().map(|c| agent::model_pool(c)).collect()
    }
}

impl std::fmt::Display for CoalitionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CoalitionOutcome(value: {}, reason: {}, [", self.value, self.termination_reason)?;
        for (i, pool) in self.pools().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", pool)?;
        }
        write!(f, "])")
    }
}
