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

//! # Time Limit Monitor
//!
//! Enforces a wall-clock budget. Reading the clock on every step of a tight
//! search loop is measurable, so `search_command` only consults it when the
//! step counter has all bits of `clock_check_mask` cleared. The default mask
//! (`0x3FFF`) reads the clock about every 16k steps; loops whose steps are
//! expensive (one step per enumerated combination, per evaluated coalition)
//! use a mask of zero and check every time.
//!
//! `is_expired` bypasses the mask for callers that want a definite answer.
//!
//! ```rust
//! use troupe_search::monitor::time_limit::TimeLimitMonitor;
//! use troupe_search::monitor::search_monitor::{SearchCommand, SearchMonitor};
//! use std::time::Duration;
//!
//! let mut mon = TimeLimitMonitor::new(Duration::from_secs(5));
//! mon.on_enter_search();
//! mon.on_step();
//! assert_eq!(mon.search_command(), SearchCommand::Continue);
//! ```

use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLimitMonitor {
    clock_check_mask: u64,
    steps: u64,
    time_limit: Duration,
    start_time: Instant,
}

impl TimeLimitMonitor {
    /// Check every 16,384 steps (2^14 - 1 = 0x3FFF).
    pub const DEFAULT_STEP_CLOCK_CHECK_MASK: u64 = 0x3FFF;

    #[inline]
    pub fn new(time_limit: Duration) -> Self {
        Self::with_clock_check_mask(time_limit, Self::DEFAULT_STEP_CLOCK_CHECK_MASK)
    }

    #[inline]
    pub fn with_clock_check_mask(time_limit: Duration, clock_check_mask: u64) -> Self {
        Self {
            clock_check_mask,
            steps: 0,
            time_limit,
            start_time: Instant::now(),
        }
    }

    /// A monitor that reads the clock on every check.
    #[inline]
    pub fn every_step(time_limit: Duration) -> Self {
        Self::with_clock_check_mask(time_limit, 0)
    }

    #[inline]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Budget left, zero once expired.
    #[inline]
    pub fn remaining(&self) -> Duration {
        self.time_limit.saturating_sub(self.elapsed())
    }

    /// Reads the clock regardless of the step mask.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.elapsed() >= self.time_limit
    }
}

impl SearchMonitor for TimeLimitMonitor {
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_enter_search(&mut self) {
        self.start_time = Instant::now();
        self.steps = 0;
    }

    #[inline(always)]
    fn on_step(&mut self) {
        self.steps = self.steps.wrapping_add(1);
    }

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        if (self.steps & self.clock_check_mask) == 0 && self.is_expired() {
            return SearchCommand::Terminate("time limit reached".to_string());
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expired_monitor(mask: u64) -> TimeLimitMonitor {
        let mut mon = TimeLimitMonitor::with_clock_check_mask(Duration::from_millis(5), mask);
        mon.start_time = Instant::now() - Duration::from_millis(50);
        mon
    }

    #[test]
    fn test_terminates_when_mask_condition_met() {
        let mon = expired_monitor(TimeLimitMonitor::DEFAULT_STEP_CLOCK_CHECK_MASK);
        match mon.search_command() {
            SearchCommand::Terminate(msg) => assert!(msg.contains("time limit")),
            other => panic!("expected Terminate, got {:?}", other),
        }
    }

    #[test]
    fn test_skips_clock_between_check_points() {
        let mut mon = expired_monitor(TimeLimitMonitor::DEFAULT_STEP_CLOCK_CHECK_MASK);
        mon.on_step();
        assert_eq!(mon.search_command(), SearchCommand::Continue);
        assert!(mon.is_expired());
        assert_eq!(mon.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_every_step_always_checks() {
        let mut mon = expired_monitor(0);
        for _ in 0..3 {
            mon.on_step();
            assert!(mon.search_command().is_terminate());
        }
    }

    #[test]
    fn test_enter_search_restarts_the_clock() {
        let mut mon = expired_monitor(0);
        mon.time_limit = Duration::from_secs(3600);
        mon.steps = 7;
        mon.on_enter_search();
        assert_eq!(mon.steps, 0);
        assert_eq!(mon.search_command(), SearchCommand::Continue);
    }

    #[test]
    fn test_step_counter_wraps() {
        let mut mon = TimeLimitMonitor::new(Duration::from_secs(1));
        mon.steps = u64::MAX;
        mon.on_step();
        assert_eq!(mon.steps, 0);
    }
}
