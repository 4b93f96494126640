//! Deterministic vector and self-tests for the Kyber KEM.
//!
//! Covers:
//! - KEM roundtrip (keypair → encapsulate → decapsulate ⇒ same shared secret)
//! - Deterministic reproducibility of the `_derand` entry points
//! - Implicit rejection (single-bit ciphertext flips)
//! - Decapsulation with the wrong secret key
//! - Byte-length consistency with the parameter tables
//! - Randomized 1000-iteration self-tests per parameter set
//! - A wall-clock sanity check on the rejection path

use kyber_kem::{
    ct::ct_verify, decapsulate, encapsulate, encapsulate_derand, keypair, keypair_derand,
    Ciphertext, Kyber1024, Kyber512, Kyber768, KyberParams,
};
use rand_core::OsRng;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fixed 64-byte coins for deterministic keygen tests.
fn fixed_keygen_coins(variant: u8) -> [u8; 64] {
    core::array::from_fn(|i| (i as u8).wrapping_add(variant.wrapping_mul(37)))
}

/// Fixed 32-byte seeds for deterministic encapsulation tests.
fn fixed_enc_seed(variant: u8) -> [u8; 32] {
    core::array::from_fn(|i| (i as u8).wrapping_add(variant.wrapping_mul(53)))
}

// ---------------------------------------------------------------------------
// KEM roundtrip — all parameter sets
// ---------------------------------------------------------------------------

fn kem_roundtrip_derand<P: KyberParams>() {
    let (pk, sk) = keypair_derand::<P>(&fixed_keygen_coins(0));
    let (ct, ss_enc) = encapsulate_derand::<P>(&pk, &fixed_enc_seed(0));
    let ss_dec = decapsulate::<P>(&ct, &sk);

    assert_eq!(
        ct_verify(ss_enc.as_bytes(), ss_dec.as_bytes()),
        0,
        "roundtrip: shared secrets must match"
    );
}

#[test]
fn roundtrip_kyber512() {
    kem_roundtrip_derand::<Kyber512>();
}

#[test]
fn roundtrip_kyber768() {
    kem_roundtrip_derand::<Kyber768>();
}

#[test]
fn roundtrip_kyber1024() {
    kem_roundtrip_derand::<Kyber1024>();
}

// ---------------------------------------------------------------------------
// Deterministic reproducibility
// ---------------------------------------------------------------------------

fn determinism_check<P: KyberParams>() {
    let kp_coins = fixed_keygen_coins(1);
    let enc_seed = fixed_enc_seed(1);

    let (pk1, sk1) = keypair_derand::<P>(&kp_coins);
    let (pk2, sk2) = keypair_derand::<P>(&kp_coins);

    assert_eq!(pk1.as_bytes(), pk2.as_bytes(), "deterministic keypair: pk mismatch");
    assert_eq!(sk1.as_bytes(), sk2.as_bytes(), "deterministic keypair: sk mismatch");

    let (ct1, ss1) = encapsulate_derand::<P>(&pk1, &enc_seed);
    let (ct2, ss2) = encapsulate_derand::<P>(&pk2, &enc_seed);

    assert_eq!(ct1.as_bytes(), ct2.as_bytes(), "deterministic encaps: ct mismatch");
    assert_eq!(ss1.as_bytes(), ss2.as_bytes(), "deterministic encaps: ss mismatch");

    let ss_dec1 = decapsulate::<P>(&ct1, &sk1);
    let ss_dec2 = decapsulate::<P>(&ct2, &sk2);

    assert_eq!(ss_dec1.as_bytes(), ss_dec2.as_bytes());
    assert_eq!(ss1.as_bytes(), ss_dec1.as_bytes());
}

#[test]
fn determinism_kyber512() {
    determinism_check::<Kyber512>();
}

#[test]
fn determinism_kyber768() {
    determinism_check::<Kyber768>();
}

#[test]
fn determinism_kyber1024() {
    determinism_check::<Kyber1024>();
}

// ---------------------------------------------------------------------------
// Implicit rejection
// ---------------------------------------------------------------------------

fn implicit_rejection_check<P: KyberParams>() {
    let (pk, sk) = keypair_derand::<P>(&fixed_keygen_coins(2));
    let (ct, ss_good) = encapsulate_derand::<P>(&pk, &fixed_enc_seed(2));

    // Flip a single bit in several positions across the ciphertext.
    for &(byte, bit) in &[(0usize, 0u8), (P::CT_BYTES / 2, 3), (P::CT_BYTES - 1, 7)] {
        let mut bad_bytes = ct.clone().into_bytes();
        bad_bytes.as_mut()[byte] ^= 1 << bit;
        let bad_ct = Ciphertext::<P>::from_bytes(bad_bytes);

        let ss_bad = decapsulate::<P>(&bad_ct, &sk);
        assert_eq!(
            ct_verify(ss_good.as_bytes(), ss_bad.as_bytes()),
            1,
            "flipping bit {bit} of byte {byte} must change the shared secret"
        );

        // The rejection secret is a deterministic function of (ct', z).
        let ss_bad2 = decapsulate::<P>(&bad_ct, &sk);
        assert_eq!(ss_bad.as_bytes(), ss_bad2.as_bytes());
    }
}

#[test]
fn implicit_rejection_kyber512() {
    implicit_rejection_check::<Kyber512>();
}

#[test]
fn implicit_rejection_kyber768() {
    implicit_rejection_check::<Kyber768>();
}

#[test]
fn implicit_rejection_kyber1024() {
    implicit_rejection_check::<Kyber1024>();
}

// ---------------------------------------------------------------------------
// Wrong secret key
// ---------------------------------------------------------------------------

fn wrong_sk_check<P: KyberParams>() {
    let (pk, _sk) = keypair_derand::<P>(&fixed_keygen_coins(3));
    let (_pk2, wrong_sk) = keypair_derand::<P>(&fixed_keygen_coins(4));

    let (ct, ss_enc) = encapsulate_derand::<P>(&pk, &fixed_enc_seed(3));
    let ss_wrong = decapsulate::<P>(&ct, &wrong_sk);

    assert_eq!(ct_verify(ss_enc.as_bytes(), ss_wrong.as_bytes()), 1);
}

#[test]
fn wrong_sk_kyber512() {
    wrong_sk_check::<Kyber512>();
}

#[test]
fn wrong_sk_kyber768() {
    wrong_sk_check::<Kyber768>();
}

#[test]
fn wrong_sk_kyber1024() {
    wrong_sk_check::<Kyber1024>();
}

// ---------------------------------------------------------------------------
// Byte-length consistency
// ---------------------------------------------------------------------------

fn size_check<P: KyberParams>() {
    let (pk, sk) = keypair_derand::<P>(&fixed_keygen_coins(5));
    let (ct, ss) = encapsulate_derand::<P>(&pk, &fixed_enc_seed(5));

    assert_eq!(pk.as_bytes().len(), P::PK_BYTES);
    assert_eq!(sk.as_bytes().len(), P::SK_BYTES);
    assert_eq!(ct.as_bytes().len(), P::CT_BYTES);
    assert_eq!(ss.as_bytes().len(), 32);
}

#[test]
fn sizes_kyber512() {
    size_check::<Kyber512>();
}

#[test]
fn sizes_kyber768() {
    size_check::<Kyber768>();
}

#[test]
fn sizes_kyber1024() {
    size_check::<Kyber1024>();
}

// ---------------------------------------------------------------------------
// Randomized self-tests (1000 iterations per parameter set)
// ---------------------------------------------------------------------------

fn self_test<P: KyberParams>(iterations: usize) {
    for i in 0..iterations {
        let (pk, sk) = keypair::<P>(&mut OsRng).expect("entropy source failed");
        let (ct, ss_a) = encapsulate::<P>(&pk, &mut OsRng).expect("entropy source failed");
        let ss_b = decapsulate::<P>(&ct, &sk);
        assert_eq!(
            ct_verify(ss_a.as_bytes(), ss_b.as_bytes()),
            0,
            "{} self-test failed at iteration {i}",
            P::NAME
        );
    }
}

#[test]
fn self_test_kyber512() {
    self_test::<Kyber512>(1000);
}

#[test]
fn self_test_kyber768() {
    self_test::<Kyber768>(1000);
}

#[test]
fn self_test_kyber1024() {
    self_test::<Kyber1024>(1000);
}

// ---------------------------------------------------------------------------
// Distinct encapsulations under one public key
// ---------------------------------------------------------------------------

fn different_encapsulations<P: KyberParams>() {
    let (pk, sk) = keypair_derand::<P>(&fixed_keygen_coins(6));

    let (ct1, ss1) = encapsulate_derand::<P>(&pk, &fixed_enc_seed(10));
    let (ct2, ss2) = encapsulate_derand::<P>(&pk, &fixed_enc_seed(11));

    assert_ne!(ct1.as_bytes(), ct2.as_bytes());
    assert_ne!(ss1.as_bytes(), ss2.as_bytes());

    assert_eq!(ss1.as_bytes(), decapsulate::<P>(&ct1, &sk).as_bytes());
    assert_eq!(ss2.as_bytes(), decapsulate::<P>(&ct2, &sk).as_bytes());
}

#[test]
fn different_encapsulations_kyber512() {
    different_encapsulations::<Kyber512>();
}

#[test]
fn different_encapsulations_kyber768() {
    different_encapsulations::<Kyber768>();
}

#[test]
fn different_encapsulations_kyber1024() {
    different_encapsulations::<Kyber1024>();
}

// ---------------------------------------------------------------------------
// Rejection-path timing sanity
// ---------------------------------------------------------------------------

/// The rejected path must not be observably cheaper than the honest path.
/// This is a coarse wall-clock check, not a statistical side-channel test;
/// it catches gross mistakes like an early return before re-encryption.
#[test]
fn rejection_path_timing_sanity() {
    use std::time::Instant;

    const ITERS: usize = 300;

    let (pk, sk) = keypair_derand::<Kyber768>(&fixed_keygen_coins(7));
    let (ct, _ss) = encapsulate_derand::<Kyber768>(&pk, &fixed_enc_seed(7));

    let mut bad_bytes = ct.clone().into_bytes();
    bad_bytes[100] ^= 0x10;
    let bad_ct = Ciphertext::<Kyber768>::from_bytes(bad_bytes);

    // Warm up caches on both paths.
    for _ in 0..20 {
        std::hint::black_box(decapsulate::<Kyber768>(&ct, &sk));
        std::hint::black_box(decapsulate::<Kyber768>(&bad_ct, &sk));
    }

    let start = Instant::now();
    for _ in 0..ITERS {
        std::hint::black_box(decapsulate::<Kyber768>(&ct, &sk));
    }
    let honest = start.elapsed();

    let start = Instant::now();
    for _ in 0..ITERS {
        std::hint::black_box(decapsulate::<Kyber768>(&bad_ct, &sk));
    }
    let rejected = start.elapsed();

    let ratio = rejected.as_secs_f64() / honest.as_secs_f64();
    assert!(
        (0.2..5.0).contains(&ratio),
        "rejected/honest timing ratio {ratio:.2} is far from 1; \
         the rejection path may be short-circuiting"
    );
}
