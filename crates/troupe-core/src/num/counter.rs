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

//! Saturating counters.
//!
//! Search statistics are incremented in hot loops and must never panic on
//! overflow in release or debug builds. `SaturatingCounter` gives every
//! integer type implementing the `num_traits` saturating and identity traits
//! a pair of in-place increment methods that clamp at the numeric maximum.

use num_traits::{One, SaturatingAdd};

/// In-place, clamping increments for counters.
///
/// # Examples
///
/// ```rust
/// # use troupe_core::num::counter::SaturatingCounter;
/// let mut nodes: u8 = 254;
/// nodes.bump();
/// nodes.bump();
/// assert_eq!(nodes, u8::MAX);
/// ```
pub trait SaturatingCounter: Copy {
    /// Increments by one, clamping at the maximum.
    fn bump(&mut self);

    /// Increments by `amount`, clamping at the maximum.
    fn bump_by(&mut self, amount: Self);
}

impl<T> SaturatingCounter for T
where
    T: SaturatingAdd + One + Copy,
{
    #[inline(always)]
    fn bump(&mut self) {
        *self = self.saturating_add(&T::one());
    }

    #[inline(always)]
    fn bump_by(&mut self, amount: Self) {
        *self = self.saturating_add(&amount);
    }
}

/// Raises `slot` to `candidate` when the candidate is larger.
#[inline(always)]
pub fn raise_to<T: PartialOrd + Copy>(slot: &mut T, candidate: T) {
    if candidate > *slot {
        *slot = candidate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_increments() {
        let mut c: u64 = 0;
        c.bump();
        c.bump_by(5);
        assert_eq!(c, 6);
    }

    #[test]
    fn test_bump_saturates() {
        let mut c: u32 = u32::MAX - 1;
        c.bump_by(10);
        assert_eq!(c, u32::MAX);
        c.bump();
        assert_eq!(c, u32::MAX);
    }

    #[test]
    fn test_raise_to_keeps_maximum() {
        let mut depth = 3usize;
        raise_to(&mut depth, 2);
        assert_eq!(depth, 3);
        raise_to(&mut depth, 7);
        assert_eq!(depth, 7);
    }
}
