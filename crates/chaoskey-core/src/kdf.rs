//! Seed derivation from master key and nonce using SHA3-512

use sha3::{Digest, Sha3_512};

/// Derive the chaos seed from a master key and a public nonce.
///
/// Computes `SHA3-512(master_key || nonce)` and reads the first 8 digest
/// bytes as a little-endian two's-complement integer.
///
/// # Security
///
/// - Plain concatenation, no length prefix or separator. Inputs that
///   concatenate to the same bytes (`("ab", "c")` and `("a", "bc")`) yield
///   the same seed. Callers should use a fixed-length nonce.
/// - Only 64 bits of the digest survive, so the seed space is 2^64
/// - Deterministic: same inputs always produce same output
pub fn derive_seed(master_key: &[u8], nonce: &[u8]) -> i64 {
    let mut hasher = Sha3_512::new();
    hasher.update(master_key);
    hasher.update(nonce);
    let digest = hasher.finalize();

    let mut low = [0u8; 8];
    low.copy_from_slice(&digest[..8]);

    tracing::trace!(
        master_key_len = master_key.len(),
        nonce_len = nonce.len(),
        "derived chaos seed"
    );

    i64::from_le_bytes(low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_is_deterministic() {
        let seed1 = derive_seed(b"masterkeyplaceholder", b"defaultnonce");
        let seed2 = derive_seed(b"masterkeyplaceholder", b"defaultnonce");

        assert_eq!(seed1, seed2, "same inputs must produce same output");
    }

    #[test]
    fn derive_matches_reference_seed() {
        let seed = derive_seed(b"masterkeyplaceholder", b"defaultnonce");
        assert_eq!(seed, -2_324_468_198_466_080_735);
        assert_eq!(seed as u64, 0xDFBD_D47D_32BC_B021);
    }

    #[test]
    fn works_with_empty_inputs() {
        // SHA3-512 of the empty message, low 8 bytes little-endian
        let seed = derive_seed(&[], &[]);
        assert_eq!(seed as u64, 0xC59A_3AA2_CC73_9FA6);
    }

    #[test]
    fn different_nonces_produce_different_seeds() {
        let seed_a = derive_seed(b"masterkeyplaceholder", b"nonce-a");
        let seed_b = derive_seed(b"masterkeyplaceholder", b"nonce-b");

        assert_ne!(seed_a, seed_b, "different nonces must produce different seeds");
    }

    #[test]
    fn shifted_boundary_collides() {
        // No framing between key and nonce: only the concatenation matters
        assert_eq!(derive_seed(b"", b"a"), derive_seed(b"a", b""));
        assert_eq!(derive_seed(b"ab", b"c"), derive_seed(b"a", b"bc"));
    }

    #[test]
    fn works_with_large_master_key() {
        let large_key = vec![0xABu8; 4096];
        let _ = derive_seed(&large_key, b"nonce");
    }
}
