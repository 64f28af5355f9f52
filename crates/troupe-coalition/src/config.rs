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

//! Configuration of a coalition structure search.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct CoalitionConfig {
    threshold: f64,
    time_limit: Option<Duration>,
    max_structures: Option<u64>,
}

impl Default for CoalitionConfig {
    fn default() -> Self {
        Self {
            threshold: 1.0,
            time_limit: None,
            max_structures: None,
        }
    }
}

impl CoalitionConfig {
    #[inline]
    pub fn builder() -> CoalitionConfigBuilder {
        CoalitionConfigBuilder::new()
    }

    /// Structure value at which the search stops.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Wall-clock budget; `None` is unbounded.
    #[inline]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// Cap on the number of evaluated structures.
    #[inline]
    pub fn max_structures(&self) -> Option<u64> {
        self.max_structures
    }
}

impl std::fmt::Display for CoalitionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CoalitionConfig(threshold: {}", self.threshold)?;
        match self.time_limit {
            Some(t) => write!(f, ", time limit: {:?}", t)?,
            None => write!(f, ", time limit: none")?,
        }
        match self.max_structures {
            Some(m) => write!(f, ", max structures: {})", m),
            None => write!(f, ", max structures: none)"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CoalitionConfigBuilder {
    config: CoalitionConfig,
}

impl CoalitionConfigBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.config.threshold = threshold;
        self
    }

    /// A zero duration means unbounded.
    #[inline]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.config.time_limit = if limit.is_zero() { None } else { Some(limit) };
        self
    }

    #[inline]
    pub fn with_max_structures(mut self, max: u64) -> Self {
        self.config.max_structures = Some(max);
        self
    }

    #[inline]
    pub fn build(self) -> CoalitionConfig {
        self.config
    }
}
