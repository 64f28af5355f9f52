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

use crate::graph::ConnectionGraph;
use crate::stats::ConnectivityStatistics;
use troupe_search::result::TerminationReason;

/// The answer of a connectivity run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectivityResult {
    /// A connected wiring exists; the graph is the first one found.
    Feasible(ConnectionGraph),
    /// No connected wiring exists.
    Infeasible,
    /// The run was aborted before either could be shown.
    Unknown,
}

impl ConnectivityResult {
    #[inline]
    pub fn is_feasible(&self) -> bool {
        matches!(self, ConnectivityResult::Feasible(_))
    }

    #[inline]
    pub fn is_infeasible(&self) -> bool {
        matches!(self, ConnectivityResult::Infeasible)
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self, ConnectivityResult::Unknown)
    }

    #[inline]
    pub fn graph(&self) -> Option<&ConnectionGraph> {
        match self {
            ConnectivityResult::Feasible(graph) => Some(graph),
            _ => None,
        }
    }

    #[inline]
    pub fn into_graph(self) -> Option<ConnectionGraph> {
        match self {
            ConnectivityResult::Feasible(graph) => Some(graph),
            _ => None,
        }
    }

    /// # Panics
    ///
    /// Panics if the result is not `Feasible`.
    #[inline]
    pub fn unwrap_feasible(&self) -> &ConnectionGraph {
        match self {
            ConnectivityResult::Feasible(graph) => graph,
            other => panic!(
                "called `ConnectivityResult::unwrap_feasible()` on a non-feasible result: {}",
                other
            ),
        }
    }
}

impl std::fmt::Display for ConnectivityResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectivityResult::Feasible(graph) => write!(f, "Feasible({})", graph),
            ConnectivityResult::Infeasible => write!(f, "Infeasible"),
            ConnectivityResult::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Result of the solver after termination.
#[derive(Debug, Clone)]
pub struct ConnectivityOutcome {
    result: ConnectivityResult,
    termination_reason: TerminationReason,
    statistics: ConnectivityStatistics,
}

impl ConnectivityOutcome {
    #[inline]
    pub fn feasible(
        graph: ConnectionGraph,
        termination_reason: TerminationReason,
        statistics: ConnectivityStatistics,
    ) -> Self {
        Self {
            result: ConnectivityResult::Feasible(graph),
            termination_reason,
            statistics,
        }
    }

    #[inline]
    pub fn infeasible(statistics: ConnectivityStatistics) -> Self {
        Self {
            result: ConnectivityResult::Infeasible,
            termination_reason: TerminationReason::SearchSpaceExhausted,
            statistics,
        }
    }

    /// An aborted run is still feasible if it found a graph before stopping.
    #[inline]
    pub fn aborted<R>(
        graph: Option<ConnectionGraph>,
        reason: R,
        statistics: ConnectivityStatistics,
    ) -> Self
    where
        R: Into<String>,
    {
        let result = match graph {
            Some(graph) => ConnectivityResult::Feasible(graph),
            None => ConnectivityResult::Unknown,
        };
        Self {
            result,
            termination_reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    #[inline]
    pub fn result(&self) -> &ConnectivityResult {
        &self.result
    }

    #[inline]
    pub fn into_result(self) -> ConnectivityResult {
        self.result
    }

    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    #[inline]
    pub fn statistics(&self) -> &ConnectivityStatistics {
        &self.statistics
    }

    #[inline]
    pub fn is_feasible(&self) -> bool {
        self.result.is_feasible()
    }
}

impl std::fmt::Display for ConnectivityOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ConnectivityOutcome(result: {}, termination: {})",
            self.result, self.termination_reason
        )
    }
}
