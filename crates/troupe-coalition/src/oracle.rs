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

//! Valuation of coalitions.

use crate::agent::AtomicAgent;

/// Scores coalitions for the structure search.
///
/// Values are expected in `[0, 1]`; the search compares them against its
/// threshold. Results of `evaluate_coalition` are cached per coalition model
/// pool, so an oracle must score agents of the same model alike.
pub trait FeasibilityOracle {
    /// Value of a single coalition.
    fn evaluate_coalition(&mut self, coalition: &[AtomicAgent]) -> f64;

    /// Value of a structure given the values of its coalitions. A structure
    /// is only as good as its weakest coalition.
    fn evaluate_structure(&mut self, coalition_values: &[f64]) -> f64 {
        coalition_values.iter().copied().reduce(f64::min).unwrap_or(0.0)
    }
}

impl<F> FeasibilityOracle for F
where
    F: FnMut(&[AtomicAgent]) -> f64,
{
    #[inline]
    fn evaluate_coalition(&mut self, coalition: &[AtomicAgent]) -> f64 {
        self(coalition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_oracle_and_default_structure_value() {
        let mut oracle = |c: &[AtomicAgent]| c.len() as f64 / 4.0;
        assert_eq!(oracle.evaluate_coalition(&[AtomicAgent::new("A", 0)]), 0.25);
        assert_eq!(oracle.evaluate_structure(&[1.0, 0.5, 0.75]), 0.5);
        assert_eq!(oracle.evaluate_structure(&[]), 0.0);
    }
}
