//! Wake-up proof verification
//!
//! SIMPLIFIED MODE: a proof is accepted when it is byte-for-byte equal to the
//! current commitment root. Every vault shares that one root, so a valid
//! proof does not bind the restored owner or balance to any particular
//! hibernated record. The caller must already know the balance it is
//! restoring (from the snapshot store).

use crate::constants::ROOT_LEN;

/// Returns true when `proof` equals `root` across all 32 bytes.
pub fn verify_root_proof(proof: &[u8; ROOT_LEN], root: &[u8; ROOT_LEN]) -> bool {
    // no early exit on the first differing byte
    proof
        .iter()
        .zip(root.iter())
        .fold(0u8, |diff, (p, r)| diff | (p ^ r))
        == 0
}
