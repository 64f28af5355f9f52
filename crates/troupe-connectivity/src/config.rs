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

//! Configuration of a connectivity run.

use std::time::Duration;
use troupe_model::model::ResourceModel;
use troupe_model::vocabulary;

/// Which decision builder drives the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Branching {
    /// Largest component first, partners by merit, seeded tie-breaks.
    #[default]
    Merit,
    /// Lowest endpoint first, partners in index order.
    Lexicographic,
}

impl std::fmt::Display for Branching {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Branching::Merit => write!(f, "Merit"),
            Branching::Lexicographic => write!(f, "Lexicographic"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectivityConfig {
    timeout: Option<Duration>,
    min_feasible: usize,
    seed: u64,
    interface_base_class: ResourceModel,
    branching: Branching,
    progress_log: Option<Duration>,
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            min_feasible: 1,
            seed: 0,
            interface_base_class: vocabulary::electro_mechanical_interface(),
            branching: Branching::Merit,
            progress_log: None,
        }
    }
}

impl ConnectivityConfig {
    #[inline]
    pub fn builder() -> ConnectivityConfigBuilder {
        ConnectivityConfigBuilder::new()
    }

    /// A builder starting from this configuration.
    #[inline]
    pub fn to_builder(&self) -> ConnectivityConfigBuilder {
        ConnectivityConfigBuilder {
            config: self.clone(),
        }
    }

    /// Wall-clock budget; `None` is unbounded.
    #[inline]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Number of connected wirings to find before stopping.
    #[inline]
    pub fn min_feasible(&self) -> usize {
        self.min_feasible
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn interface_base_class(&self) -> &ResourceModel {
        &self.interface_base_class
    }

    #[inline]
    pub fn branching(&self) -> Branching {
        self.branching
    }

    /// Interval of the progress log; `None` disables it.
    #[inline]
    pub fn progress_log(&self) -> Option<Duration> {
        self.progress_log
    }
}

impl std::fmt::Display for ConnectivityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.timeout {
            Some(t) => write!(f, "ConnectivityConfig(timeout: {:?}", t)?,
            None => write!(f, "ConnectivityConfig(timeout: none")?,
        }
        write!(
            f,
            ", min_feasible: {}, seed: {}, interface base: {}, branching: {})",
            self.min_feasible,
            self.seed,
            self.interface_base_class.fragment(),
            self.branching
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConnectivityConfigBuilder {
    config: ConnectivityConfig,
}

impl ConnectivityConfigBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// A zero duration means unbounded.
    #[inline]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = if timeout.is_zero() { None } else { Some(timeout) };
        self
    }

    /// Values below one are raised to one.
    #[inline]
    pub fn with_min_feasible(mut self, min_feasible: usize) -> Self {
        self.config.min_feasible = min_feasible.max(1);
        self
    }

    #[inline]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    #[inline]
    pub fn with_interface_base_class(mut self, base: impl Into<ResourceModel>) -> Self {
        self.config.interface_base_class = base.into();
        self
    }

    #[inline]
    pub fn with_branching(mut self, branching: Branching) -> Self {
        self.config.branching = branching;
        self
    }

    /// Logs search progress at most once per `interval`. Zero disables it.
    #[inline]
    pub fn with_progress_log(mut self, interval: Duration) -> Self {
        self.config.progress_log = if interval.is_zero() { None } else { Some(interval) };
        self
    }

    #[inline]
    pub fn build(self) -> ConnectivityConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = ConnectivityConfig::default();
        assert_eq!(c.timeout(), None);
        assert_eq!(c.min_feasible(), 1);
        assert_eq!(c.branching(), Branching::Merit);
        assert_eq!(c.progress_log(), None);
        assert_eq!(
            c.interface_base_class(),
            &vocabulary::electro_mechanical_interface()
        );
    }

    #[test]
    fn test_zero_timeout_is_unbounded() {
        let c = ConnectivityConfig::builder()
            .with_timeout(Duration::ZERO)
            .with_min_feasible(0)
            .build();
        assert_eq!(c.timeout(), None);
        assert_eq!(c.min_feasible(), 1);

        let c = ConnectivityConfig::builder()
            .with_timeout(Duration::from_millis(250))
            .with_seed(11)
            .with_branching(Branching::Lexicographic)
            .with_interface_base_class("Port")
            .build();
        assert_eq!(c.timeout(), Some(Duration::from_millis(250)));
        assert_eq!(c.seed(), 11);
        assert_eq!(c.branching(), Branching::Lexicographic);
        assert_eq!(c.interface_base_class().as_str(), "Port");
    }

    #[test]
    fn test_display() {
        let c = ConnectivityConfig::default();
        assert_eq!(
            format!("{}", c),
            "ConnectivityConfig(timeout: none, min_feasible: 1, seed: 0, interface base: ElectroMechanicalInterface, branching: Merit)"
        );
    }

    #[test]
    fn test_to_builder_keeps_other_fields() {
        let base = ConnectivityConfig::builder().with_seed(5).build();
        let c = base.to_builder().with_timeout(Duration::from_secs(1)).build();
        assert_eq!(c.seed(), 5);
        assert_eq!(c.timeout(), Some(Duration::from_secs(1)));
    }

    #[test]
    fn test_progress_log_interval() {
        let c = ConnectivityConfig::builder()
            .with_progress_log(Duration::from_millis(500))
            .build();
        assert_eq!(c.progress_log(), Some(Duration::from_millis(500)));
        let c = c.to_builder().with_progress_log(Duration::ZERO).build();
        assert_eq!(c.progress_log(), None);
    }
}
