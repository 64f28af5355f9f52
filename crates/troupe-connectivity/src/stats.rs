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
use troupe_core::num::counter::{SaturatingCounter, raise_to};

/// Counters of one connectivity run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectivityStatistics {
    /// Total nodes visited, the root included.
    pub nodes_explored: u64,
    /// Levels abandoned, after exhaustion or pruning.
    pub backtracks: u64,
    /// Decisions taken off the stack.
    pub decisions_generated: u64,
    /// The deepest level reached.
    pub max_depth: u64,
    /// Nodes whose components provably cannot be joined.
    pub prunings_disconnected: u64,
    /// Nodes with too few open endpoints left for the merges still needed.
    pub prunings_exhausted: u64,
    pub solutions_found: u64,
    pub time_total: Duration,
}

impl ConnectivityStatistics {
    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored.bump();
    }

    #[inline]
    pub fn on_backtrack(&mut self) {
        self.backtracks.bump();
    }

    #[inline]
    pub fn on_decision_generated(&mut self) {
        self.decisions_generated.bump();
    }

    #[inline]
    pub fn on_depth_update(&mut self, depth: u64) {
        raise_to(&mut self.max_depth, depth);
    }

    #[inline]
    pub fn on_pruning_disconnected(&mut self) {
        self.prunings_disconnected.bump();
    }

    #[inline]
    pub fn on_pruning_exhausted(&mut self) {
        self.prunings_exhausted.bump();
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found.bump();
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    /// Prunings of either kind.
    #[inline]
    pub fn prunings(&self) -> u64 {
        self.prunings_disconnected
            .saturating_add(self.prunings_exhausted)
    }
}

impl std::fmt::Display for ConnectivityStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Connectivity Search Statistics:")?;
        writeln!(f, "  Nodes explored:         {}", self.nodes_explored)?;
        writeln!(f, "  Backtracks:             {}", self.backtracks)?;
        writeln!(f, "  Max depth reached:      {}", self.max_depth)?;
        writeln!(f, "  Decisions generated:    {}", self.decisions_generated)?;
        writeln!(f, "  Prunings (disconnected):{}", self.prunings_disconnected)?;
        writeln!(f, "  Prunings (exhausted):   {}", self.prunings_exhausted)?;
        writeln!(f, "  Solutions found:        {}", self.solutions_found)?;
        writeln!(f, "  Total time:             {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_and_depth() {
        let mut s = ConnectivityStatistics::default();
        s.on_node_explored();
        s.on_node_explored();
        s.on_backtrack();
        s.on_decision_generated();
        s.on_depth_update(3);
        s.on_depth_update(2);
        s.on_pruning_disconnected();
        s.on_pruning_exhausted();
        s.on_pruning_exhausted();
        s.on_solution_found();

        assert_eq!(s.nodes_explored, 2);
        assert_eq!(s.backtracks, 1);
        assert_eq!(s.decisions_generated, 1);
        assert_eq!(s.max_depth, 3);
        assert_eq!(s.prunings(), 3);
        assert_eq!(s.solutions_found, 1);
    }

    #[test]
    fn test_counters_saturate() {
        let mut s = ConnectivityStatistics {
            nodes_explored: u64::MAX,
            ..Default::default()
        };
        s.on_node_explored();
        assert_eq!(s.nodes_explored, u64::MAX);
    }

    #[test]
    fn test_display_lists_fields() {
        let mut s = ConnectivityStatistics::default();
        s.set_total_time(Duration::from_millis(5));
        let text = format!("{}", s);
        assert!(text.starts_with("Connectivity Search Statistics:"));
        assert!(text.contains("Nodes explored:"));
        assert!(text.contains("Total time:"));
    }
}
