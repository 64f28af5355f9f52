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

//! Adapter for engine-agnostic search monitors.
//!
//! `WrapperMonitor` lets a `troupe_search` monitor (time limit, interrupt
//! flag) drive the tree search. Enter, step, solution, exit and
//! `search_command` are forwarded; tree-specific callbacks are ignored.

use crate::graph::ConnectionGraph;
use crate::monitor::tree_search_monitor::TreeSearchMonitor;
use crate::problem::ConnectivityProblem;
use crate::state::SearchState;
use crate::stats::ConnectivityStatistics;
use troupe_search::monitor::search_monitor::{SearchCommand, SearchMonitor};

pub struct WrapperMonitor<'a> {
    inner: &'a mut dyn SearchMonitor,
    name: String,
}

impl<'a> WrapperMonitor<'a> {
    #[inline]
    pub fn new(inner: &'a mut dyn SearchMonitor) -> Self {
        let name = format!("WrapperMonitor({})", inner.name());
        Self { inner, name }
    }
}

impl std::fmt::Debug for WrapperMonitor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl<'a> TreeSearchMonitor for WrapperMonitor<'a> {
    #[inline(always)]
    fn name(&self) -> &str {
        &self.name
    }

    #[inline(always)]
    fn on_enter_search(
        &mut self,
        _problem: &ConnectivityProblem,
        _statistics: &ConnectivityStatistics,
    ) {
        self.inner.on_enter_search();
    }

    #[inline(always)]
    fn on_exit_search(&mut self, _statistics: &ConnectivityStatistics) {
        self.inner.on_exit_search();
    }

    #[inline(always)]
    fn search_command(
        &mut self,
        _state: &SearchState,
        _statistics: &ConnectivityStatistics,
    ) -> SearchCommand {
        self.inner.search_command()
    }

    #[inline(always)]
    fn on_step(&mut self, _state: &SearchState, _statistics: &ConnectivityStatistics) {
        self.inner.on_step();
    }

    #[inline(always)]
    fn on_solution_found(
        &mut self,
        _graph: &ConnectionGraph,
        _statistics: &ConnectivityStatistics,
    ) {
        self.inner.on_solution_found();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use troupe_search::monitor::interrupt::InterruptMonitor;

    #[test]
    fn test_forwards_interrupt() {
        let flag = AtomicBool::new(false);
        let mut interrupt = InterruptMonitor::new(&flag);
        let mut wrapper = WrapperMonitor::new(&mut interrupt);
        assert_eq!(wrapper.name(), "WrapperMonitor(InterruptMonitor)");

        let state = SearchState::new(0, 0);
        let stats = ConnectivityStatistics::default();
        assert_eq!(wrapper.search_command(&state, &stats), SearchCommand::Continue);
        flag.store(true, Ordering::SeqCst);
        assert!(wrapper.search_command(&state, &stats).is_terminate());
    }
}
