#![cfg(feature = "heavy")]
use lev_dp::{EditDistance, MatrixDistance, MemoizedDistance};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_text(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz ";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

#[test]
fn heavy_stress_matrix_large() {
    let mut rng = StdRng::seed_from_u64(123);
    let s = random_text(&mut rng, 4_000);
    let t = random_text(&mut rng, 4_000);
    let engine = MatrixDistance::new();
    let d = engine.distance(&s, &t).unwrap();
    assert!(d <= 4_000);
}

#[test]
fn heavy_stress_engines_agree_mid_size() {
    let mut rng = StdRng::seed_from_u64(321);
    let s = random_text(&mut rng, 800);
    let t = random_text(&mut rng, 750);
    let matrix = MatrixDistance::new();
    let memo = MemoizedDistance::new();
    assert_eq!(
        matrix.distance(&s, &t).unwrap(),
        memo.distance(&s, &t).unwrap()
    );
}

#[test]
fn heavy_stress_unrelated_inputs_hit_the_upper_bound() {
    // Disjoint alphabets leave substitution as the only useful edit.
    let s = vec![b'x'; 3_000];
    let t = vec![b'y'; 2_500];
    let engine = MatrixDistance::new();
    assert_eq!(engine.distance(&s, &t).unwrap(), 3_000);
}
