//! Random input sequences.

use rand::Rng;

use crate::events::Value;

/// Smallest value drawn for a random sequence.
pub const MIN_VALUE: Value = 10;

/// Largest value drawn for a random sequence.
pub const MAX_VALUE: Value = 400;

/// Draw `len` values uniformly from `[MIN_VALUE, MAX_VALUE]`.
pub fn random_sequence<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<Value> {
    (0..len).map(|_| rng.gen_range(MIN_VALUE..=MAX_VALUE)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn values_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let values = random_sequence(500, &mut rng);
        assert_eq!(values.len(), 500);
        assert!(values.iter().all(|v| (MIN_VALUE..=MAX_VALUE).contains(v)));
    }

    #[test]
    fn seeded_is_reproducible() {
        let a = random_sequence(20, &mut StdRng::seed_from_u64(1));
        let b = random_sequence(20, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }
}
