//! IND-CPA public-key encryption — the inner scheme the KEM wraps.
//!
//! Deterministic keypair/encrypt/decrypt over packed byte buffers. Not
//! exposed directly; called by [`crate::kem`] with hashed coins.

use crate::hash;
use crate::math::{poly::Poly, polyvec::PolyVec, sample};
use crate::params::{KyberParams, N, SYMBYTES};
use sha3::digest::XofReader;

// ---------------------------------------------------------------------------
// Matrix expansion
// ---------------------------------------------------------------------------

/// Expand the K×K matrix Â from the public seed ρ with SHAKE-128.
///
/// Entry (i, j) absorbs `seed ‖ j ‖ i`, or `seed ‖ i ‖ j` when `transposed`.
/// The first squeeze pulls three XOF blocks (504 bytes, enough for a full
/// polynomial in the common case); rejection shortfalls squeeze one more
/// block at a time. Accepted coefficients are NTT-domain values as-is.
fn gen_matrix<const K: usize>(a: &mut [PolyVec<K>], seed: &[u8; SYMBYTES], transposed: bool) {
    let mut buf = [0u8; 3 * sample::SHAKE128_RATE];
    for i in 0..K {
        for j in 0..K {
            let (x, y) = if transposed {
                (i as u8, j as u8)
            } else {
                (j as u8, i as u8)
            };
            let mut xof = hash::xof_absorb(seed, x, y);
            xof.read(&mut buf);

            let coeffs = &mut a[i].polys[j].coeffs;
            let mut ctr = sample::rej_uniform(&mut coeffs[..], &buf);
            while ctr < N {
                let mut block = [0u8; sample::SHAKE128_RATE];
                xof.read(&mut block);
                ctr += sample::rej_uniform(&mut coeffs[ctr..], &block);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Key generation (deterministic)
// ---------------------------------------------------------------------------

/// Deterministic IND-CPA keypair generation from 32 bytes of randomness.
///
/// Writes the packed public key (t̂ ‖ ρ) to `pk_bytes` and the packed secret
/// ŝ to `sk_bytes`.
pub(crate) fn indcpa_keypair_derand<P: KyberParams>(
    pk_bytes: &mut [u8],
    sk_bytes: &mut [u8],
    coins: &[u8; SYMBYTES],
) {
    match P::K {
        2 => indcpa_keypair_inner::<P, 2>(pk_bytes, sk_bytes, coins),
        3 => indcpa_keypair_inner::<P, 3>(pk_bytes, sk_bytes, coins),
        4 => indcpa_keypair_inner::<P, 4>(pk_bytes, sk_bytes, coins),
        _ => unreachable!(),
    }
}

fn indcpa_keypair_inner<P: KyberParams, const K: usize>(
    pk_bytes: &mut [u8],
    sk_bytes: &mut [u8],
    coins: &[u8; SYMBYTES],
) {
    // (ρ ‖ σ) = G(d)
    let buf = hash::hash_g(coins);
    let public_seed: [u8; SYMBYTES] = buf[..SYMBYTES].try_into().unwrap();
    let noise_seed: [u8; SYMBYTES] = buf[SYMBYTES..].try_into().unwrap();

    // Â from ρ
    let mut a: [PolyVec<K>; K] = core::array::from_fn(|_| PolyVec::zero());
    gen_matrix::<K>(&mut a, &public_seed, false);

    // Secret vector s and error vector e from σ
    let mut nonce: u8 = 0;
    let mut skpv = PolyVec::<K>::zero();
    for i in 0..K {
        skpv.polys[i] = Poly::getnoise_eta(P::ETA1, &noise_seed, nonce);
        nonce += 1;
    }
    let mut e = PolyVec::<K>::zero();
    for i in 0..K {
        e.polys[i] = Poly::getnoise_eta(P::ETA1, &noise_seed, nonce);
        nonce += 1;
    }

    // ŝ = NTT(s), reduced before it is serialized; ê = NTT(e)
    skpv.ntt();
    skpv.reduce();
    e.ntt();

    // t̂ = Â·ŝ + ê  (NTT domain; the inner product needs the Montgomery lift)
    let mut pkpv = PolyVec::<K>::zero();
    for i in 0..K {
        PolyVec::basemul_acc_montgomery(&mut pkpv.polys[i], &a[i], &skpv);
        pkpv.polys[i].tomont();
    }
    pkpv.add_assign(&e);
    pkpv.reduce();

    // pk = Encode₁₂(t̂) ‖ ρ,  sk = Encode₁₂(ŝ)
    pkpv.tobytes(&mut pk_bytes[..P::POLYVEC_BYTES]);
    pk_bytes[P::POLYVEC_BYTES..P::INDCPA_PK_BYTES].copy_from_slice(&public_seed);
    skpv.tobytes(&mut sk_bytes[..P::INDCPA_SK_BYTES]);
}

// ---------------------------------------------------------------------------
// Encryption (deterministic)
// ---------------------------------------------------------------------------

/// Deterministic IND-CPA encryption of the 32-byte message `m` under
/// `pk_bytes` with randomness `coins`.
pub(crate) fn indcpa_enc<P: KyberParams>(
    ct_bytes: &mut [u8],
    m: &[u8; SYMBYTES],
    pk_bytes: &[u8],
    coins: &[u8; SYMBYTES],
) {
    match P::K {
        2 => indcpa_enc_inner::<P, 2>(ct_bytes, m, pk_bytes, coins),
        3 => indcpa_enc_inner::<P, 3>(ct_bytes, m, pk_bytes, coins),
        4 => indcpa_enc_inner::<P, 4>(ct_bytes, m, pk_bytes, coins),
        _ => unreachable!(),
    }
}

fn indcpa_enc_inner<P: KyberParams, const K: usize>(
    ct_bytes: &mut [u8],
    m: &[u8; SYMBYTES],
    pk_bytes: &[u8],
    coins: &[u8; SYMBYTES],
) {
    // Unpack pk into (t̂, ρ)
    let pkpv = PolyVec::<K>::frombytes(&pk_bytes[..P::POLYVEC_BYTES]);
    let seed: [u8; SYMBYTES] = pk_bytes[P::POLYVEC_BYTES..P::INDCPA_PK_BYTES]
        .try_into()
        .unwrap();

    let k = Poly::frommsg(m);

    // Âᵀ from ρ
    let mut at: [PolyVec<K>; K] = core::array::from_fn(|_| PolyVec::zero());
    gen_matrix::<K>(&mut at, &seed, true);

    // r with η₁, e₁ and e₂ with η₂
    let mut nonce: u8 = 0;
    let mut sp = PolyVec::<K>::zero();
    for i in 0..K {
        sp.polys[i] = Poly::getnoise_eta(P::ETA1, coins, nonce);
        nonce += 1;
    }
    let mut ep = PolyVec::<K>::zero();
    for i in 0..K {
        ep.polys[i] = Poly::getnoise_eta(P::ETA2, coins, nonce);
        nonce += 1;
    }
    let epp = Poly::getnoise_eta(P::ETA2, coins, nonce);

    // r̂ = NTT(r)
    sp.ntt();

    // û = Âᵀ·r̂,  v̂ = ⟨t̂, r̂⟩
    let mut b = PolyVec::<K>::zero();
    for i in 0..K {
        PolyVec::basemul_acc_montgomery(&mut b.polys[i], &at[i], &sp);
    }
    let mut v = Poly::zero();
    PolyVec::basemul_acc_montgomery(&mut v, &pkpv, &sp);

    // Back to standard domain, then add the noise and the message
    b.invntt_tomont();
    v.invntt_tomont();

    b.add_assign(&ep);
    v.add_assign(&epp);
    v.add_assign(&k);

    b.reduce();
    v.reduce();

    // c = Compress_du(u) ‖ Compress_dv(v)
    b.compress(&mut ct_bytes[..P::POLYVEC_COMPRESSED_BYTES], P::D_U);
    v.compress(
        &mut ct_bytes[P::POLYVEC_COMPRESSED_BYTES..P::CT_BYTES],
        P::D_V,
    );
}

// ---------------------------------------------------------------------------
// Decryption
// ---------------------------------------------------------------------------

/// IND-CPA decryption: recovers the 32-byte message from a ciphertext and
/// the packed secret key.
pub(crate) fn indcpa_dec<P: KyberParams>(m: &mut [u8; SYMBYTES], ct_bytes: &[u8], sk_bytes: &[u8]) {
    match P::K {
        2 => indcpa_dec_inner::<P, 2>(m, ct_bytes, sk_bytes),
        3 => indcpa_dec_inner::<P, 3>(m, ct_bytes, sk_bytes),
        4 => indcpa_dec_inner::<P, 4>(m, ct_bytes, sk_bytes),
        _ => unreachable!(),
    }
}

fn indcpa_dec_inner<P: KyberParams, const K: usize>(
    m: &mut [u8; SYMBYTES],
    ct_bytes: &[u8],
    sk_bytes: &[u8],
) {
    // Split and decompress the ciphertext into (u, v)
    let b = PolyVec::<K>::decompress(&ct_bytes[..P::POLYVEC_COMPRESSED_BYTES], P::D_U);
    let v = Poly::decompress(
        &ct_bytes[P::POLYVEC_COMPRESSED_BYTES..P::CT_BYTES],
        P::D_V,
    );

    let skpv = PolyVec::<K>::frombytes(&sk_bytes[..P::INDCPA_SK_BYTES]);

    // m = Compress₁(v − NTT⁻¹(⟨ŝ, NTT(u)⟩))
    let mut b_ntt = b;
    b_ntt.ntt();

    let mut mp = Poly::zero();
    PolyVec::basemul_acc_montgomery(&mut mp, &skpv, &b_ntt);
    mp.invntt_tomont();

    let mut m_poly = Poly::zero();
    m_poly.sub(&v, &mp);
    m_poly.reduce();

    *m = m_poly.tomsg();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
