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

/// Why a search stopped.
///
/// Only `Aborted` leaves the question open: callers that need certainty
/// retry with a larger (or no) budget instead of reading an aborted run as a
/// negative answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The requested number of solutions was found.
    SolutionLimitReached,
    /// Every candidate was considered; the answer is proven.
    SearchSpaceExhausted,
    /// A limit (time, interrupt, ...) stopped the search. The string names
    /// the limit.
    Aborted(String),
}

impl TerminationReason {
    #[inline]
    pub fn is_aborted(&self) -> bool {
        matches!(self, TerminationReason::Aborted(_))
    }

    /// The answer of the run is definite.
    #[inline]
    pub fn is_proven(&self) -> bool {
        !self.is_aborted()
    }
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::SolutionLimitReached => write!(f, "Solution Limit Reached"),
            TerminationReason::SearchSpaceExhausted => write!(f, "Search Space Exhausted"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_aborted_is_unproven() {
        assert!(TerminationReason::SolutionLimitReached.is_proven());
        assert!(TerminationReason::SearchSpaceExhausted.is_proven());
        let aborted = TerminationReason::Aborted("time limit reached".into());
        assert!(aborted.is_aborted());
        assert_eq!(aborted.to_string(), "Aborted: time limit reached");
    }
}
