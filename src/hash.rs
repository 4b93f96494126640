//! SHA-3 family adapters.
//!
//! The symmetric primitives Kyber needs, in the roles the scheme gives them:
//!
//! | Role    | Primitive  | Function |
//! |---------|------------|----------|
//! | **H**   | SHA3-256   | [`hash_h`] |
//! | **G**   | SHA3-512   | [`hash_g`] |
//! | **PRF** | SHAKE-256  | [`prf`] |
//! | **XOF** | SHAKE-128  | [`xof_absorb`] |
//! | **KDF** | SHAKE-256  | [`kdf`] |

use crate::params::{SSBYTES, SYMBYTES};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Digest, Sha3_256, Sha3_512, Shake128, Shake256};

/// H(input) = SHA3-256(input) → 32 bytes.
#[inline]
pub fn hash_h(input: &[u8]) -> [u8; SYMBYTES] {
    let mut h = Sha3_256::new();
    Digest::update(&mut h, input);
    h.finalize().into()
}

/// G(input) = SHA3-512(input) → 64 bytes.
#[inline]
pub fn hash_g(input: &[u8]) -> [u8; 2 * SYMBYTES] {
    let mut h = Sha3_512::new();
    Digest::update(&mut h, input);
    h.finalize().into()
}

/// PRF(seed, nonce) = SHAKE-256(seed ‖ nonce), squeezed to fill `output`.
///
/// Drives the centered-binomial noise sampler.
pub fn prf(seed: &[u8; SYMBYTES], nonce: u8, output: &mut [u8]) {
    let mut h = Shake256::default();
    Update::update(&mut h, seed);
    Update::update(&mut h, &[nonce]);
    let mut reader = h.finalize_xof();
    reader.read(output);
}

/// SHAKE-128 absorber for matrix expansion.
///
/// Absorbs `seed ‖ x ‖ y` and returns a reader from which uniform bytes can
/// be squeezed. A fresh instance per matrix entry; no state is shared.
pub fn xof_absorb(seed: &[u8; SYMBYTES], x: u8, y: u8) -> impl XofReader {
    let mut h = Shake128::default();
    Update::update(&mut h, seed);
    Update::update(&mut h, &[x, y]);
    h.finalize_xof()
}

/// KDF(K̄, H(ct)) = SHAKE-256(K̄ ‖ H(ct)) → 32 bytes.
///
/// Derives the shared secret at the end of both encapsulation and
/// decapsulation; on the implicit-rejection path K̄ has already been
/// replaced by z, so the caller never sees which branch was taken.
pub fn kdf(kbar: &[u8], ct_hash: &[u8; SYMBYTES]) -> [u8; SSBYTES] {
    let mut h = Shake256::default();
    Update::update(&mut h, kbar);
    Update::update(&mut h, ct_hash);
    let mut reader = h.finalize_xof();
    let mut out = [0u8; SSBYTES];
    reader.read(&mut out);
    out
}
