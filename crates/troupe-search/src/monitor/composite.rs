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

use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};

/// Forwards every event to a list of monitors. The first monitor asking to
/// terminate wins.
pub struct CompositeMonitor<'a> {
    monitors: Vec<Box<dyn SearchMonitor + 'a>>,
}

impl std::fmt::Debug for CompositeMonitor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeMonitor")
            .field("monitors", &self.names().join(", "))
            .finish()
    }
}

impl std::fmt::Display for CompositeMonitor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CompositeMonitor([{}])", self.names().join(", "))
    }
}

impl Default for CompositeMonitor<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CompositeMonitor<'a> {
    #[inline]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SearchMonitor + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Builder-style `add_monitor`.
    #[inline]
    pub fn with_monitor<M>(mut self, monitor: M) -> Self
    where
        M: SearchMonitor + 'a,
    {
        self.add_monitor(monitor);
        self
    }

    #[inline]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn SearchMonitor + 'a>) {
        self.monitors.push(monitor);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }

    fn names(&self) -> Vec<&str> {
        self.monitors.iter().map(|m| m.name()).collect()
    }
}

impl SearchMonitor for CompositeMonitor<'_> {
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_search(&mut self) {
        self.monitors.iter_mut().for_each(|m| m.on_enter_search());
    }

    fn on_exit_search(&mut self) {
        self.monitors.iter_mut().for_each(|m| m.on_exit_search());
    }

    fn on_solution_found(&mut self) {
        self.monitors.iter_mut().for_each(|m| m.on_solution_found());
    }

    fn on_step(&mut self) {
        self.monitors.iter_mut().for_each(|m| m.on_step());
    }

    fn search_command(&self) -> SearchCommand {
        for monitor in &self.monitors {
            if let cmd @ SearchCommand::Terminate(_) = monitor.search_command() {
                return cmd;
            }
        }
        SearchCommand::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Counting<'c> {
        steps: &'c Cell<u32>,
        stop: bool,
    }

    impl SearchMonitor for Counting<'_> {
        fn name(&self) -> &str {
            "Counting"
        }

        fn on_step(&mut self) {
            self.steps.set(self.steps.get() + 1);
        }

        fn search_command(&self) -> SearchCommand {
            if self.stop {
                SearchCommand::Terminate("counting stop".into())
            } else {
                SearchCommand::Continue
            }
        }
    }

    #[test]
    fn test_events_reach_every_monitor() {
        let a = Cell::new(0);
        let b = Cell::new(0);
        let mut composite = CompositeMonitor::new()
            .with_monitor(Counting { steps: &a, stop: false })
            .with_monitor(Counting { steps: &b, stop: false });
        composite.on_step();
        composite.on_step();
        assert_eq!((a.get(), b.get()), (2, 2));
        assert_eq!(composite.search_command(), SearchCommand::Continue);
    }

    #[test]
    fn test_first_terminate_wins() {
        let a = Cell::new(0);
        let mut composite = CompositeMonitor::with_capacity(2);
        composite.add_monitor(Counting { steps: &a, stop: true });
        composite.add_monitor_boxed(Box::new(Counting { steps: &a, stop: false }));
        assert_eq!(
            composite.search_command(),
            SearchCommand::Terminate("counting stop".into())
        );
        assert_eq!(composite.len(), 2);
        assert_eq!(
            composite.to_string(),
            "CompositeMonitor([Counting, Counting])"
        );
    }

    #[test]
    fn test_empty_composite_continues() {
        let composite = CompositeMonitor::default();
        assert!(composite.is_empty());
        assert_eq!(composite.search_command(), SearchCommand::Continue);
    }
}
