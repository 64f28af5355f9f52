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

//! Pending alternatives of the connectivity search.
//!
//! Every level of the search branches on a single open endpoint. A level
//! therefore stores its endpoint once and the partners still to try, least
//! preferred first, so the next alternative is always the last partner. The
//! partners of all levels share one vector; a level only remembers where its
//! slice begins.
//!
//! `None` as a partner stands for leaving the endpoint unconnected.

use crate::branching::decision::Decision;
use crate::index::InterfaceIndex;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct BranchLevel {
    /// Unset until the builder offered alternatives.
    endpoint: Option<InterfaceIndex>,
    /// Start of this level's partners.
    start: usize,
}

#[derive(Clone, Debug, Default)]
pub struct BranchStack {
    partners: Vec<Option<InterfaceIndex>>,
    levels: Vec<BranchLevel>,
}

impl BranchStack {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn preallocated(num_endpoints: usize) -> Self {
        let mut stack = Self::new();
        stack.ensure_capacity(num_endpoints);
        stack
    }

    /// A path decides every endpoint at most once, and a level offers at
    /// most every other endpoint plus the unconnected alternative.
    pub fn ensure_capacity(&mut self, num_endpoints: usize) {
        let levels = num_endpoints.saturating_add(1);
        let partners = num_endpoints.saturating_mul(2).max(levels);
        self.levels.reserve(levels.saturating_sub(self.levels.len()));
        self.partners.reserve(partners.saturating_sub(self.partners.len()));
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Alternatives left across all levels.
    #[inline]
    pub fn num_pending(&self) -> usize {
        self.partners.len()
    }

    /// Opens a level without alternatives.
    #[inline]
    pub fn push_level(&mut self) {
        self.levels.push(BranchLevel {
            endpoint: None,
            start: self.partners.len(),
        });
    }

    /// Closes the deepest level together with its untried alternatives.
    #[inline]
    pub fn pop_level(&mut self) -> Option<InterfaceIndex> {
        let level = self.levels.pop()?;
        self.partners.truncate(level.start);
        level.endpoint
    }

    /// Records the alternatives of the deepest level, least preferred first.
    /// Returns how many were offered.
    pub fn offer<I>(&mut self, decisions: I) -> usize
    where
        I: IntoIterator<Item = Decision>,
    {
        let Some(level) = self.levels.last_mut() else {
            return 0;
        };
        let before = self.partners.len();
        for decision in decisions {
            debug_assert!(
                level.endpoint.is_none_or(|e| e == decision.endpoint()),
                "called `BranchStack::offer` with decisions on endpoints {:?} and {}",
                level.endpoint,
                decision.endpoint()
            );
            level.endpoint = Some(decision.endpoint());
            self.partners.push(decision.partner());
        }
        self.partners.len() - before
    }

    /// Takes the most preferred alternative of the deepest level.
    pub fn next_decision(&mut self) -> Option<Decision> {
        let level = self.levels.last()?;
        let endpoint = level.endpoint?;
        if self.partners.len() == level.start {
            return None;
        }
        let partner = self.partners.pop()?;
        Some(match partner {
            Some(p) => Decision::connect(endpoint, p),
            None => Decision::unconnected(endpoint),
        })
    }

    /// Returns `true` if the deepest level has nothing left to try.
    #[inline]
    pub fn is_level_exhausted(&self) -> bool {
        self.levels
            .last()
            .is_none_or(|level| self.partners.len() == level.start)
    }

    /// The endpoint the deepest level branches on.
    #[inline]
    pub fn branching_endpoint(&self) -> Option<InterfaceIndex> {
        self.levels.last().and_then(|level| level.endpoint)
    }

    #[inline]
    pub fn reset(&mut self) {
        self.partners.clear();
        self.levels.clear();
    }
}

impl std::fmt::Display for BranchStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BranchStack(depth: {}, pending: {}", self.depth(), self.num_pending())?;
        match self.branching_endpoint() {
            Some(e) => write!(f, ", branching on {})", e),
            None => write!(f, ")"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ei(i: usize) -> InterfaceIndex {
        InterfaceIndex::new(i)
    }

    /// Alternatives for `endpoint` as a builder emits them: unconnected
    /// first, then the partners from least to most preferred.
    fn offers(endpoint: usize, partners: &[usize]) -> Vec<Decision> {
        std::iter::once(Decision::unconnected(ei(endpoint)))
            .chain(partners.iter().map(|&p| Decision::connect(ei(endpoint), ei(p))))
            .collect()
    }

    #[test]
    fn test_most_preferred_partner_first_and_unconnected_last() {
        let mut s = BranchStack::new();
        s.push_level();
        assert_eq!(s.offer(offers(0, &[3, 5])), 3);
        assert_eq!(s.branching_endpoint(), Some(ei(0)));
        assert_eq!(s.next_decision(), Some(Decision::connect(ei(0), ei(5))));
        assert_eq!(s.next_decision(), Some(Decision::connect(ei(0), ei(3))));
        assert_eq!(s.next_decision(), Some(Decision::unconnected(ei(0))));
        assert!(s.is_level_exhausted());
        assert_eq!(s.next_decision(), None);
    }

    #[test]
    fn test_deeper_level_does_not_leak_into_parent() {
        let mut s = BranchStack::preallocated(6);
        s.push_level();
        s.offer(offers(0, &[4]));
        assert_eq!(s.next_decision(), Some(Decision::connect(ei(0), ei(4))));

        s.push_level();
        s.offer(offers(1, &[2, 5]));
        assert_eq!(s.depth(), 2);
        assert_eq!(s.num_pending(), 4);
        assert_eq!(s.next_decision(), Some(Decision::connect(ei(1), ei(5))));

        // Backtracking drops the untried partners of endpoint 1.
        assert_eq!(s.pop_level(), Some(ei(1)));
        assert_eq!(s.num_pending(), 1);
        assert_eq!(s.next_decision(), Some(Decision::unconnected(ei(0))));
    }

    #[test]
    fn test_dead_end_level() {
        let mut s = BranchStack::new();
        assert!(s.is_level_exhausted());
        s.push_level();
        assert_eq!(s.offer(std::iter::empty()), 0);
        assert!(s.is_level_exhausted());
        assert_eq!(s.branching_endpoint(), None);
        assert_eq!(s.next_decision(), None);
        assert_eq!(s.pop_level(), None);
        assert!(s.is_empty());
    }

    #[test]
    fn test_display_and_reset() {
        let mut s = BranchStack::new();
        s.push_level();
        s.offer(offers(2, &[7]));
        assert_eq!(s.to_string(), "BranchStack(depth: 1, pending: 2, branching on InterfaceIndex(2))");
        s.reset();
        assert!(s.is_empty());
        assert_eq!(s.num_pending(), 0);
        assert_eq!(s.to_string(), "BranchStack(depth: 0, pending: 0)");
    }
}
