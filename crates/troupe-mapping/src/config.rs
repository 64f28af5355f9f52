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

//! Configuration of a mapping computation.

use std::time::Duration;
use troupe_connectivity::config::ConnectivityConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingConfig {
    apply_saturation_bound: bool,
    check_connectivity: bool,
    combination_limit: Option<u64>,
    time_limit: Option<Duration>,
    connectivity: ConnectivityConfig,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            apply_saturation_bound: true,
            check_connectivity: true,
            combination_limit: None,
            time_limit: None,
            connectivity: ConnectivityConfig::default(),
        }
    }
}

impl MappingConfig {
    #[inline]
    pub fn builder() -> MappingConfigBuilder {
        MappingConfigBuilder::new()
    }

    /// Bounded strategy when set, exhaustive enumeration otherwise.
    #[inline]
    pub fn apply_saturation_bound(&self) -> bool {
        self.apply_saturation_bound
    }

    /// Whether minimal pools must also pass the connectivity check.
    #[inline]
    pub fn check_connectivity(&self) -> bool {
        self.check_connectivity
    }

    /// Maximum number of combinations enumerated per functionality.
    #[inline]
    pub fn combination_limit(&self) -> Option<u64> {
        self.combination_limit
    }

    /// Wall-clock budget of the whole computation.
    #[inline]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// Budget of a single connectivity check.
    #[inline]
    pub fn feasibility_timeout(&self) -> Option<Duration> {
        self.connectivity.timeout()
    }

    #[inline]
    pub fn connectivity(&self) -> &ConnectivityConfig {
        &self.connectivity
    }
}

impl std::fmt::Display for MappingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MappingConfig(saturation bound: {}, connectivity check: {}, combination limit: ",
            self.apply_saturation_bound, self.check_connectivity
        )?;
        match self.combination_limit {
            Some(n) => write!(f, "{}", n)?,
            None => write!(f, "none")?,
        }
        match self.time_limit {
            Some(t) => write!(f, ", time limit: {:?})", t),
            None => write!(f, ", time limit: none)"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MappingConfigBuilder {
    config: MappingConfig,
}

impl MappingConfigBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_saturation_bound(mut self, apply: bool) -> Self {
        self.config.apply_saturation_bound = apply;
        self
    }

    #[inline]
    pub fn with_connectivity_check(mut self, check: bool) -> Self {
        self.config.check_connectivity = check;
        self
    }

    #[inline]
    pub fn with_combination_limit(mut self, limit: u64) -> Self {
        self.config.combination_limit = Some(limit);
        self
    }

    /// A zero duration means unbounded.
    #[inline]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.config.time_limit = if limit.is_zero() { None } else { Some(limit) };
        self
    }

    /// A zero duration means unbounded.
    #[inline]
    pub fn with_feasibility_timeout(mut self, timeout: Duration) -> Self {
        self.config.connectivity = self.config.connectivity.to_builder().with_timeout(timeout).build();
        self
    }

    #[inline]
    pub fn with_connectivity(mut self, connectivity: ConnectivityConfig) -> Self {
        self.config.connectivity = connectivity;
        self
    }

    #[inline]
    pub fn build(self) -> MappingConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = MappingConfig::default();
        assert!(c.apply_saturation_bound());
        assert!(c.check_connectivity());
        assert_eq!(c.combination_limit(), None);
        assert_eq!(c.time_limit(), None);
        assert_eq!(c.feasibility_timeout(), None);
        assert_eq!(
            format!("{}", c),
            "MappingConfig(saturation bound: true, connectivity check: true, combination limit: none, time limit: none)"
        );
    }

    #[test]
    fn test_builder() {
        let c = MappingConfig::builder()
            .with_saturation_bound(false)
            .with_connectivity_check(false)
            .with_combination_limit(100)
            .with_time_limit(Duration::from_secs(2))
            .with_feasibility_timeout(Duration::from_millis(20))
            .build();
        assert!(!c.apply_saturation_bound());
        assert!(!c.check_connectivity());
        assert_eq!(c.combination_limit(), Some(100));
        assert_eq!(c.time_limit(), Some(Duration::from_secs(2)));
        assert_eq!(c.feasibility_timeout(), Some(Duration::from_millis(20)));
    }

    #[test]
    fn test_zero_time_limit_is_unbounded() {
        let c = MappingConfig::builder().with_time_limit(Duration::ZERO).build();
        assert_eq!(c.time_limit(), None);
    }
}
