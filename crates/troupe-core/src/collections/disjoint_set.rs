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

//! # Disjoint Sets with Undo
//!
//! A union-find forest that can take back its most recent unions. Depth-first
//! search merges components while descending and has to restore the exact
//! previous partition when it backtracks, so the structure deliberately uses
//! union by size without path compression: every `union` changes exactly two
//! words (a parent pointer and a size), which the history records and
//! `undo_last` restores in O(1). `find` stays O(log n).
//!
//! ```rust
//! use troupe_core::collections::disjoint_set::RollbackDisjointSet;
//!
//! let mut set = RollbackDisjointSet::new(3);
//! let mark = set.checkpoint();
//! assert!(set.union(0, 1));
//! assert_eq!(set.components(), 2);
//! set.rollback_to(mark);
//! assert_eq!(set.components(), 3);
//! ```

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct UnionRecord {
    /// The root that was attached below another root.
    child: usize,
    /// The root that absorbed `child`.
    parent: usize,
}

/// Union-find over `0..len` with union history.
#[derive(Debug, Clone)]
pub struct RollbackDisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
    history: Vec<UnionRecord>,
}

impl RollbackDisjointSet {
    /// Creates `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            components: len,
            history: Vec::new(),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if the forest holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    #[inline]
    pub fn components(&self) -> usize {
        self.components
    }

    /// Representative of the set containing `x`.
    ///
    /// # Panics
    ///
    /// In debug builds if `x` is out of bounds.
    #[inline]
    pub fn find(&self, mut x: usize) -> usize {
        debug_assert!(
            x < self.len(),
            "called `RollbackDisjointSet::find` with element out of bounds: the len is {} but the element is {}",
            self.len(),
            x
        );
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }

    /// Returns `true` if `a` and `b` share a set.
    #[inline]
    pub fn same(&self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Size of the set containing `x`.
    #[inline]
    pub fn size_of(&self, x: usize) -> usize {
        self.size[self.find(x)]
    }

    /// Merges the sets of `a` and `b`.
    ///
    /// Returns `false` (and records nothing) if they already share a set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut ra, mut rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
        self.components -= 1;
        self.history.push(UnionRecord {
            child: rb,
            parent: ra,
        });
        true
    }

    /// Opaque marker for `rollback_to`.
    #[inline]
    pub fn checkpoint(&self) -> usize {
        self.history.len()
    }

    /// Takes back the most recent union. Returns `false` if there was none.
    pub fn undo_last(&mut self) -> bool {
        match self.history.pop() {
            Some(UnionRecord { child, parent }) => {
                self.parent[child] = child;
                self.size[parent] -= self.size[child];
                self.components += 1;
                true
            }
            None => false,
        }
    }

    /// Takes back every union performed after `mark` was taken.
    pub fn rollback_to(&mut self, mark: usize) {
        while self.history.len() > mark {
            self.undo_last();
        }
    }

    /// Groups the elements by set, each group sorted, groups ordered by their
    /// smallest element.
    pub fn groups(&self) -> Vec<Vec<usize>> {
        let mut by_root: Vec<Option<usize>> = vec![None; self.len()];
        let mut groups: Vec<Vec<usize>> = Vec::with_capacity(self.components);
        for x in 0..self.len() {
            let root = self.find(x);
            match by_root[root] {
                Some(slot) => groups[slot].push(x),
                None => {
                    by_root[root] = Some(groups.len());
                    groups.push(vec![x]);
                }
            }
        }
        groups
    }
}
