//! Leibniz series evaluation.
//!
//! The i-th term is `(4 − 8·(i mod 2)) / (2·i + 1)`: +4/(2i+1) at even
//! indices, −4/(2i+1) at odd ones, with the sign folded into the numerator
//! instead of an explicit alternation branch. Partial sums converge to π
//! with error roughly O(1/N).

use crate::partition::Range;

/// The i-th series term.
#[inline]
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn term(i: u64) -> f64 {
    #[allow(clippy::cast_possible_wrap)]
    let numerator = (4 - 8 * (i % 2) as i64) as f64;
    numerator / (2 * i + 1) as f64
}

/// Sum the series over one range, left to right.
///
/// Pure: no shared state, safe to evaluate concurrently on disjoint ranges.
#[must_use]
pub fn sum_range(range: Range) -> f64 {
    (range.start..range.end).map(term).sum()
}

/// Sum the series over one range by index parity.
///
/// Positive (even-index) and negative (odd-index) terms are accumulated in
/// two stride-2 sweeps and combined. Agrees with [`sum_range`] up to
/// floating-point reordering.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sum_range_strided(range: Range) -> f64 {
    let first_even = range.start + range.start % 2;
    let first_odd = range.start + (1 - range.start % 2);
    let positive: f64 = (first_even..range.end)
        .step_by(2)
        .map(|i| 4.0 / (2 * i + 1) as f64)
        .sum();
    let negative: f64 = (first_odd..range.end)
        .step_by(2)
        .map(|i| 4.0 / (2 * i + 1) as f64)
        .sum();
    positive - negative
}

#[cfg(test)]
mod tests {
    use super::*;

    fn whole(terms: u64) -> Range {
        Range { start: 0, end: terms }
    }

    #[test]
    fn term_signs_and_values() {
        assert!((term(0) - 4.0).abs() < f64::EPSILON);
        assert!((term(1) + 4.0 / 3.0).abs() < f64::EPSILON);
        assert!((term(2) - 0.8).abs() < f64::EPSILON);
        assert!((term(3) + 4.0 / 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn first_four_terms() {
        let expected = 4.0 - 4.0 / 3.0 + 4.0 / 5.0 - 4.0 / 7.0;
        assert!((sum_range(whole(4)) - expected).abs() < 1e-15);
        // 2.895238... per the closed-form partial sum
        assert!((sum_range(whole(4)) - 2.895_238_095_238_095).abs() < 1e-12);
    }

    #[test]
    fn empty_range_sums_to_zero() {
        let r = Range { start: 10, end: 10 };
        assert_eq!(sum_range(r), 0.0);
        assert_eq!(sum_range_strided(r), 0.0);
    }

    #[test]
    fn strided_matches_plain() {
        for (start, end) in [(0u64, 1u64), (0, 17), (3, 20), (7, 8), (100, 10_000)] {
            let r = Range { start, end };
            let plain = sum_range(r);
            let strided = sum_range_strided(r);
            assert!(
                (plain - strided).abs() < 1e-12,
                "mismatch on [{start}, {end}): {plain} vs {strided}"
            );
        }
    }

    #[test]
    fn strided_odd_start_keeps_signs() {
        // [1, 3) = term(1) + term(2) = -4/3 + 4/5
        let r = Range { start: 1, end: 3 };
        let expected = -4.0 / 3.0 + 0.8;
        assert!((sum_range_strided(r) - expected).abs() < 1e-15);
    }

    #[test]
    fn converges_toward_pi() {
        let approx = sum_range(whole(1_000_000));
        let error = (approx - std::f64::consts::PI).abs();
        assert!(error < 1e-5, "error {error} too large");
    }

    #[test]
    fn error_shrinks_with_more_terms() {
        let coarse = (sum_range(whole(1_000)) - std::f64::consts::PI).abs();
        let fine = (sum_range(whole(100_000)) - std::f64::consts::PI).abs();
        assert!(fine < coarse);
    }
}
