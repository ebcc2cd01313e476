//! Float assertions shared by the test suites of the workspace.

use assert_float_eq::*;

/// Asserts that every (1st, 2nd) probability pair in `actual` lies within an absolute
/// `tolerance` of its counterpart in `expected`. Suited to comparing sampled probabilities
/// against exact ones.
pub fn assert_pairs_within(expected: &[(f64, f64)], actual: &[(f64, f64)], tolerance: f64) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    for (expected, actual) in expected.iter().zip(actual) {
        assert_float_absolute_eq!(expected.0, actual.0, tolerance);
        assert_float_absolute_eq!(expected.1, actual.1, tolerance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_within() {
        assert_pairs_within(&[(0.5, 0.25), (0.5, 0.75)], &[(0.49, 0.26), (0.51, 0.74)], 0.02);
    }

    #[test]
    #[should_panic]
    fn pairs_outside() {
        assert_pairs_within(&[(0.25, 0.75)], &[(0.25, 0.7)], 0.02);
    }

    #[test]
    #[should_panic(expected = "lengths do not match: 1 ≠ 2")]
    fn pairs_mismatched_len() {
        assert_pairs_within(&[(0.5, 0.5)], &[(0.5, 0.5), (0.5, 0.5)], 0.02);
    }
}
