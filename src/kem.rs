//! IND-CCA2 key encapsulation: keypair, encapsulate, decapsulate.
//!
//! The Fujisaki–Okamoto transform over the IND-CPA scheme in [`crate::pke`].
//! Decapsulation re-encrypts and, on mismatch, silently swaps the stored
//! rejection value z into the key-derivation input — callers cannot tell a
//! rejected ciphertext from an honest one.

use crate::ct;
use crate::error::{Error, Result};
use crate::hash;
use crate::params::{ByteArray, KyberParams, SYMBYTES};
use crate::pke;
use crate::types::{Ciphertext, PublicKey, SecretKey, SharedSecret};
use rand_core::TryCryptoRng;

/// Deterministic key generation from 64 bytes of randomness.
///
/// `coins = d ‖ z`: d seeds the IND-CPA keypair, z feeds implicit rejection.
pub fn keypair_derand<P: KyberParams>(coins: &[u8; 2 * SYMBYTES]) -> (PublicKey<P>, SecretKey<P>) {
    let mut pk_arr = P::PkArray::zeroed();
    let mut sk_arr = P::SkArray::zeroed();

    let pk = pk_arr.as_mut();
    let sk = sk_arr.as_mut();

    pke::indcpa_keypair_derand::<P>(
        &mut pk[..P::INDCPA_PK_BYTES],
        &mut sk[..P::INDCPA_SK_BYTES],
        coins[..SYMBYTES].try_into().unwrap(),
    );

    // sk = indcpa_sk ‖ pk ‖ H(pk) ‖ z
    sk[P::INDCPA_SK_BYTES..P::INDCPA_SK_BYTES + P::PK_BYTES].copy_from_slice(&pk[..P::PK_BYTES]);

    let h_pk = hash::hash_h(&pk[..P::PK_BYTES]);
    sk[P::SK_BYTES - 2 * SYMBYTES..P::SK_BYTES - SYMBYTES].copy_from_slice(&h_pk);

    sk[P::SK_BYTES - SYMBYTES..P::SK_BYTES].copy_from_slice(&coins[SYMBYTES..]);

    (PublicKey::from_bytes(pk_arr), SecretKey::from_bytes(sk_arr))
}

/// Key generation. Draws 64 bytes from `rng`; the only failure mode is the
/// entropy source itself.
pub fn keypair<P: KyberParams>(
    rng: &mut impl TryCryptoRng,
) -> Result<(PublicKey<P>, SecretKey<P>)> {
    let mut coins = [0u8; 2 * SYMBYTES];
    rng.try_fill_bytes(&mut coins)
        .map_err(|_| Error::EntropyUnavailable)?;
    Ok(keypair_derand::<P>(&coins))
}

/// Deterministic encapsulation from a 32-byte seed.
///
/// The seed is hashed before use (`m = H(seed)`), so raw RNG output never
/// reaches the encryption routine.
pub fn encapsulate_derand<P: KyberParams>(
    pk: &PublicKey<P>,
    seed: &[u8; SYMBYTES],
) -> (Ciphertext<P>, SharedSecret) {
    let mut ct_arr = P::CtArray::zeroed();

    // buf = m ‖ H(pk)
    let m = hash::hash_h(seed);
    let mut buf = [0u8; 2 * SYMBYTES];
    buf[..SYMBYTES].copy_from_slice(&m);
    buf[SYMBYTES..].copy_from_slice(&hash::hash_h(pk.as_bytes()));

    // (K̄ ‖ r) = G(buf)
    let kr = hash::hash_g(&buf);

    // ct = Enc(pk, m; r)
    pke::indcpa_enc::<P>(
        ct_arr.as_mut(),
        &m,
        pk.as_bytes(),
        kr[SYMBYTES..].try_into().unwrap(),
    );

    // ss = KDF(K̄ ‖ H(ct))
    let ct_hash = hash::hash_h(ct_arr.as_ref());
    let ss = hash::kdf(&kr[..SYMBYTES], &ct_hash);

    (Ciphertext::from_bytes(ct_arr), SharedSecret::from_bytes(ss))
}

/// Encapsulation. Draws 32 bytes from `rng`; the only failure mode is the
/// entropy source itself.
pub fn encapsulate<P: KyberParams>(
    pk: &PublicKey<P>,
    rng: &mut impl TryCryptoRng,
) -> Result<(Ciphertext<P>, SharedSecret)> {
    let mut seed = [0u8; SYMBYTES];
    rng.try_fill_bytes(&mut seed)
        .map_err(|_| Error::EntropyUnavailable)?;
    Ok(encapsulate_derand::<P>(pk, &seed))
}

/// Decapsulation. Never fails: a tampered ciphertext yields a pseudorandom
/// shared secret derived from the stored rejection value, through the same
/// code path and the same number of operations as an honest one.
pub fn decapsulate<P: KyberParams>(ct: &Ciphertext<P>, sk: &SecretKey<P>) -> SharedSecret {
    let sk_bytes = sk.as_bytes();
    let ct_bytes = ct.as_bytes();

    // sk = indcpa_sk ‖ pk ‖ H(pk) ‖ z
    let indcpa_sk = &sk_bytes[..P::INDCPA_SK_BYTES];
    let pk_bytes = &sk_bytes[P::INDCPA_SK_BYTES..P::INDCPA_SK_BYTES + P::PK_BYTES];
    let h_pk = &sk_bytes[P::SK_BYTES - 2 * SYMBYTES..P::SK_BYTES - SYMBYTES];
    let z = &sk_bytes[P::SK_BYTES - SYMBYTES..P::SK_BYTES];

    // m* = Dec(indcpa_sk, ct)
    let mut m_prime = [0u8; SYMBYTES];
    pke::indcpa_dec::<P>(&mut m_prime, ct_bytes, indcpa_sk);

    // (K̄' ‖ r') = G(m* ‖ H(pk))
    let mut buf = [0u8; 2 * SYMBYTES];
    buf[..SYMBYTES].copy_from_slice(&m_prime);
    buf[SYMBYTES..].copy_from_slice(h_pk);
    let mut kr = hash::hash_g(&buf);

    // Re-encrypt: ct' = Enc(pk, m*; r'). Stack buffer sized for the largest
    // parameter set.
    const MAX_CT: usize = 1568;
    let mut cmp = [0u8; MAX_CT];
    pke::indcpa_enc::<P>(
        &mut cmp[..P::CT_BYTES],
        &m_prime,
        pk_bytes,
        kr[SYMBYTES..].try_into().unwrap(),
    );

    // fail = (ct != ct'); on failure K̄' becomes z. Both steps constant-time.
    let fail = ct::ct_verify(ct_bytes, &cmp[..P::CT_BYTES]);
    ct::ct_cmov(&mut kr[..SYMBYTES], z, fail);

    // ss = KDF(K̄' ‖ H(ct))
    let ct_hash = hash::hash_h(ct_bytes);
    SharedSecret::from_bytes(hash::kdf(&kr[..SYMBYTES], &ct_hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Kyber1024, Kyber512, Kyber768};

    fn roundtrip<P: KyberParams>() {
        let coins: [u8; 64] = core::array::from_fn(|i| i as u8);
        let (pk, sk) = keypair_derand::<P>(&coins);

        let seed = [17u8; SYMBYTES];
        let (ct, ss_enc) = encapsulate_derand::<P>(&pk, &seed);
        let ss_dec = decapsulate::<P>(&ct, &sk);

        assert_eq!(
            ct::ct_verify(ss_enc.as_bytes(), ss_dec.as_bytes()),
            0,
            "{}: shared secrets must match",
            P::NAME
        );
    }

    #[test]
    fn roundtrip_kyber512() {
        roundtrip::<Kyber512>();
    }

    #[test]
    fn roundtrip_kyber768() {
        roundtrip::<Kyber768>();
    }

    #[test]
    fn roundtrip_kyber1024() {
        roundtrip::<Kyber1024>();
    }

    fn secret_key_layout<P: KyberParams>() {
        let coins: [u8; 64] = core::array::from_fn(|i| (i * 3) as u8);
        let (pk, sk) = keypair_derand::<P>(&coins);
        let sk_bytes = sk.as_bytes();

        // pk is embedded verbatim
        assert_eq!(
            &sk_bytes[P::INDCPA_SK_BYTES..P::INDCPA_SK_BYTES + P::PK_BYTES],
            pk.as_bytes()
        );
        // then H(pk)
        assert_eq!(
            &sk_bytes[P::SK_BYTES - 2 * SYMBYTES..P::SK_BYTES - SYMBYTES],
            &hash::hash_h(pk.as_bytes())[..]
        );
        // and z is the second half of the coins
        assert_eq!(&sk_bytes[P::SK_BYTES - SYMBYTES..], &coins[SYMBYTES..]);
    }

    #[test]
    fn secret_key_layout_kyber512() {
        secret_key_layout::<Kyber512>();
    }

    #[test]
    fn secret_key_layout_kyber1024() {
        secret_key_layout::<Kyber1024>();
    }

    fn tampered_ct_rejects<P: KyberParams>() {
        let coins: [u8; 64] = core::array::from_fn(|i| (i * 7) as u8);
        let (pk, sk) = keypair_derand::<P>(&coins);
        let (ct, ss_good) = encapsulate_derand::<P>(&pk, &[23u8; SYMBYTES]);

        let mut bad = ct.clone().into_bytes();
        bad.as_mut()[0] ^= 1;
        let ss_bad = decapsulate::<P>(&Ciphertext::from_bytes(bad), &sk);

        assert_eq!(ct::ct_verify(ss_good.as_bytes(), ss_bad.as_bytes()), 1);
    }

    #[test]
    fn tampered_ct_rejects_kyber768() {
        tampered_ct_rejects::<Kyber768>();
    }
}
