use lev_dp::{EditDistance, MatrixDistance, MemoizedDistance};
use proptest::prelude::*;

/// Unmemoized reference recursion, exponential in the input length. Only
/// usable on very short inputs, which is exactly where it serves as an
/// independent ground truth for both engines.
fn naive(s: &[u8], t: &[u8]) -> usize {
    if s.is_empty() {
        return t.len();
    }
    if t.is_empty() {
        return s.len();
    }
    if s[0] == t[0] {
        return naive(&s[1..], &t[1..]);
    }
    let insertion = naive(s, &t[1..]);
    let deletion = naive(&s[1..], t);
    let substitution = naive(&s[1..], &t[1..]);
    1 + insertion.min(deletion).min(substitution)
}

proptest! {
    #[test]
    fn matrix_and_memo_agree(a in "[a-z]{0,16}", b in "[a-z]{0,16}") {
        let matrix = MatrixDistance::new();
        let memo = MemoizedDistance::new();
        prop_assert_eq!(
            matrix.distance(a.as_bytes(), b.as_bytes()).unwrap(),
            memo.distance(a.as_bytes(), b.as_bytes()).unwrap()
        );
    }

    #[test]
    fn both_match_the_naive_recursion(a in "[ab]{0,5}", b in "[ab]{0,5}") {
        let expected = naive(a.as_bytes(), b.as_bytes());
        let matrix = MatrixDistance::new();
        let memo = MemoizedDistance::new();
        prop_assert_eq!(matrix.distance(a.as_bytes(), b.as_bytes()).unwrap(), expected);
        prop_assert_eq!(memo.distance(a.as_bytes(), b.as_bytes()).unwrap(), expected);
    }

    #[test]
    fn agreement_holds_beyond_ascii(a in "[a-céß☃]{0,10}", b in "[a-céß☃]{0,10}") {
        let matrix = MatrixDistance::new();
        let memo = MemoizedDistance::new();
        prop_assert_eq!(
            matrix.distance_str(&a, &b).unwrap(),
            memo.distance_str(&a, &b).unwrap()
        );
    }

    #[test]
    fn agreement_holds_on_skewed_lengths(a in "[a-d]{0,3}", b in "[a-d]{20,40}") {
        let matrix = MatrixDistance::new();
        let memo = MemoizedDistance::new();
        prop_assert_eq!(
            matrix.distance(a.as_bytes(), b.as_bytes()).unwrap(),
            memo.distance(a.as_bytes(), b.as_bytes()).unwrap()
        );
    }
}
