//! Random number generator for augmentation.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seeded generator when `seed` is given (reproducible runs), entropy-seeded
/// otherwise.
pub fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = build_rng(Some(42));
        let mut b = build_rng(Some(42));
        let xs: Vec<i32> = (0..16).map(|_| a.gen_range(-15..15)).collect();
        let ys: Vec<i32> = (0..16).map(|_| b.gen_range(-15..15)).collect();
        assert_eq!(xs, ys);
    }
}
