//! Secure Randomness

use rand::{Rng, RngCore, rngs::OsRng};

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Uniform random integer in `0..bound`
///
/// `bound` must be non-zero.
pub fn random_below(bound: u32) -> u32 {
    OsRng.gen_range(0..bound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes() {
        let bytes = random_bytes(32);
        assert_eq!(bytes.len(), 32);
        // Should not be all zeros (statistically)
        assert!(bytes.iter().any(|&b| b != 0));
        assert!(random_bytes(0).is_empty());
    }

    #[test]
    fn test_random_below_in_range() {
        for _ in 0..1000 {
            assert!(random_below(10) < 10);
        }
        assert_eq!(random_below(1), 0);
    }
}
