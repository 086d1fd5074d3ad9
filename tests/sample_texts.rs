//! Concrete distances, including the two sample sentences the crate's
//! diagnostic probe exercises.

use lev_dp::{EditDistance, MatrixDistance, MemoizedDistance};

const SENTENCE_A: &str = "Mr. and Mrs. Dursley of number four, Privet Drive, were proud to say that they were perfectly normal, thank you very much.";
const SENTENCE_B: &str = "Mr. and Mrs. Potter of number five, Patriot Drive, were shy to say that they were imperfectly abnormal, thank you very much.";

#[test]
fn concrete_cases_both_engines() {
    let matrix = MatrixDistance::new();
    let memo = MemoizedDistance::new();
    for (a, b, expected) in [
        ("", "", 0),
        ("kitten", "sitting", 3),
        ("flaw", "lawn", 2),
        ("abc", "abc", 0),
        ("a", "", 1),
        ("", "a", 1),
        ("sunday", "saturday", 3),
    ] {
        assert_eq!(
            matrix.distance_str(a, b).unwrap(),
            expected,
            "matrix on ({a:?}, {b:?})"
        );
        assert_eq!(
            memo.distance_str(a, b).unwrap(),
            expected,
            "memoized on ({a:?}, {b:?})"
        );
    }
}

#[test]
fn sample_sentences_agree_and_stay_in_bounds() {
    let matrix = MatrixDistance::new();
    let memo = MemoizedDistance::new();

    let d_matrix = matrix.distance_str(SENTENCE_A, SENTENCE_B).unwrap();
    let d_memo = memo.distance_str(SENTENCE_A, SENTENCE_B).unwrap();
    assert_eq!(d_matrix, d_memo);

    let longer = SENTENCE_A.chars().count().max(SENTENCE_B.chars().count());
    assert!(d_matrix > 0, "the sentences differ, so the distance must");
    assert!(d_matrix <= longer);
}

#[test]
fn sample_sentences_are_symmetric() {
    let matrix = MatrixDistance::new();
    assert_eq!(
        matrix.distance_str(SENTENCE_A, SENTENCE_B).unwrap(),
        matrix.distance_str(SENTENCE_B, SENTENCE_A).unwrap()
    );
}
