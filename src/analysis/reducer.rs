// ============================================================
// Layer 5 — Difference Reducer
// ============================================================
// Computes the integer-truncated average of the element-wise
// differences:
//
//   sum(a[i] - b[i]) / n
//
// Two arithmetic details are pinned down here:
//
//   - The sum is accumulated in i128, not i64. The elements are
//     i64 and the buffer is small, so overflow cannot happen in
//     practice, but the wider accumulator makes that true by
//     construction instead of by input-size argument.
//   - The division truncates toward zero, which is exactly what
//     Rust's `/` does on signed integers. sum -7 over 7 elements
//     gives -1, and -11 over 2 gives -5, not -6.
//
// Division by zero cannot happen: a SequencePair always has at
// least one element.
//
// Reference: Rust Book §3 (Data Types — integer operations)

use crate::domain::sequence::SequencePair;

/// Reduce a validated pair to the truncated average of the
/// pairwise differences.
pub fn average_difference(pair: &SequencePair) -> i64 {
    let sum: i128 = pair
        .iter_pairs()
        .map(|(a, b)| i128::from(a) - i128::from(b))
        .sum();

    // len() > 0 is guaranteed by SequencePair::new
    (sum / pair.len() as i128) as i64
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: Vec<i64>, b: Vec<i64>) -> SequencePair {
        SequencePair::new(a, b).unwrap()
    }

    #[test]
    fn test_worked_example_with_negative_sum() {
        // diffs [5,-7,1,-3,-1,-1,-1], sum -7, n=7 → -1
        let p = pair(
            vec![5, 3, 2, 6, 1, 7, 4],
            vec![0, 10, 1, 9, 2, 8, 5],
        );
        assert_eq!(average_difference(&p), -1);
    }

    #[test]
    fn test_single_element() {
        let p = pair(vec![15], vec![5]);
        assert_eq!(average_difference(&p), 10);
    }

    #[test]
    fn test_exact_division() {
        // diffs [5,10,15], sum 30, n=3 → 10
        let p = pair(vec![10, 20, 30], vec![5, 10, 15]);
        assert_eq!(average_difference(&p), 10);
    }

    #[test]
    fn test_truncates_positive_toward_zero() {
        // diffs [5,6], sum 11, n=2 → 5 (not 5.5, not 6)
        let p = pair(vec![10, 11], vec![5, 5]);
        assert_eq!(average_difference(&p), 5);
    }

    #[test]
    fn test_truncates_negative_toward_zero() {
        // sum -11, n=2 → -5, where floor division would give -6
        let p = pair(vec![0, 0], vec![5, 6]);
        assert_eq!(average_difference(&p), -5);
    }

    #[test]
    fn test_extreme_elements_do_not_overflow_the_sum() {
        // The intermediate sum 2 * (i64::MAX - 1) overflows i64,
        // but the i128 accumulator carries it and the average
        // lands back inside i64
        let p = pair(vec![i64::MAX, i64::MAX], vec![1, 1]);
        assert_eq!(average_difference(&p), i64::MAX - 1);
    }
}
