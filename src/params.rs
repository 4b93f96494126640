//! Kyber parameter sets and derived byte lengths.
//!
//! The sealed [`KyberParams`] trait pins every per-set constant (k, eta,
//! compression widths, byte lengths) at the type level. The polynomial layer
//! stays k-agnostic; k enters only at the polyvec / PKE boundary.

use zeroize::Zeroize;

/// Ring degree: polynomials have 256 coefficients.
pub const N: usize = 256;

/// Coefficient modulus q = 3329 (prime, q ≡ 1 mod 256).
pub const Q: i16 = 3329;

/// Output size of the symmetric primitives (seeds, hashes).
pub const SYMBYTES: usize = 32;

/// Shared-secret size.
pub const SSBYTES: usize = 32;

/// Serialized polynomial size: 256 coefficients at 12 bits each.
pub const POLYBYTES: usize = 384;

/// Fixed-length byte container used for keys and ciphertexts.
pub trait ByteArray:
    AsRef<[u8]> + AsMut<[u8]> + Clone + core::fmt::Debug + Zeroize + Send + Sync + 'static
{
    /// Length of the array in bytes.
    const LEN: usize;

    /// A zero-filled array.
    fn zeroed() -> Self;
}

impl<const SIZE: usize> ByteArray for [u8; SIZE] {
    const LEN: usize = SIZE;

    #[inline]
    fn zeroed() -> Self {
        [0u8; SIZE]
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Kyber parameter set. Sealed — only implemented for [`Kyber512`],
/// [`Kyber768`], and [`Kyber1024`].
pub trait KyberParams: sealed::Sealed + 'static {
    /// Module rank k (dimension of vectors and the matrix A).
    const K: usize;
    /// CBD parameter for the secret vector s, error e, and encryption secret r.
    const ETA1: usize;
    /// CBD parameter for the encryption errors e1 and e2.
    const ETA2: usize;
    /// Compression width for the ciphertext vector u.
    const D_U: u32;
    /// Compression width for the ciphertext polynomial v.
    const D_V: u32;

    /// Serialized polyvec size: K × 384.
    const POLYVEC_BYTES: usize;
    /// Compressed polynomial size (v component).
    const POLY_COMPRESSED_BYTES: usize;
    /// Compressed polyvec size (u component).
    const POLYVEC_COMPRESSED_BYTES: usize;
    /// IND-CPA public key: polyvec ‖ ρ.
    const INDCPA_PK_BYTES: usize;
    /// IND-CPA secret key: polyvec only.
    const INDCPA_SK_BYTES: usize;
    /// KEM public key (same as the IND-CPA public key).
    const PK_BYTES: usize;
    /// KEM secret key: indcpa_sk ‖ pk ‖ H(pk) ‖ z.
    const SK_BYTES: usize;
    /// Ciphertext: compressed u ‖ compressed v.
    const CT_BYTES: usize;

    /// Human-readable name of the parameter set.
    const NAME: &'static str;

    /// Public-key byte container.
    type PkArray: ByteArray;
    /// Secret-key byte container.
    type SkArray: ByteArray;
    /// Ciphertext byte container.
    type CtArray: ByteArray;
}

macro_rules! impl_kyber_params {
    (
        $name:ident, $doc:literal, K = $K:literal,
        ETA1 = $eta1:literal, D_U = $du:literal, D_V = $dv:literal,
        POLYVEC_BYTES = $pvb:literal,
        POLY_COMPRESSED_BYTES = $pcb:literal,
        POLYVEC_COMPRESSED_BYTES = $pvcb:literal,
        PK_BYTES = $pkb:literal, SK_BYTES = $skb:literal, CT_BYTES = $ctb:literal
    ) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl sealed::Sealed for $name {}

        impl KyberParams for $name {
            const K: usize = $K;
            const ETA1: usize = $eta1;
            const ETA2: usize = 2;
            const D_U: u32 = $du;
            const D_V: u32 = $dv;

            const POLYVEC_BYTES: usize = $pvb;
            const POLY_COMPRESSED_BYTES: usize = $pcb;
            const POLYVEC_COMPRESSED_BYTES: usize = $pvcb;
            const INDCPA_PK_BYTES: usize = $pvb + SYMBYTES;
            const INDCPA_SK_BYTES: usize = $pvb;
            const PK_BYTES: usize = $pkb;
            const SK_BYTES: usize = $skb;
            const CT_BYTES: usize = $ctb;

            const NAME: &'static str = stringify!($name);

            type PkArray = [u8; $pkb];
            type SkArray = [u8; $skb];
            type CtArray = [u8; $ctb];
        }
    };
}

impl_kyber_params!(
    Kyber512,
    "Kyber-512 (k = 2, NIST security level 1).",
    K = 2,
    ETA1 = 3,
    D_U = 10,
    D_V = 4,
    POLYVEC_BYTES = 768,
    POLY_COMPRESSED_BYTES = 128,
    POLYVEC_COMPRESSED_BYTES = 640,
    PK_BYTES = 800,
    SK_BYTES = 1632,
    CT_BYTES = 768
);

impl_kyber_params!(
    Kyber768,
    "Kyber-768 (k = 3, NIST security level 3).",
    K = 3,
    ETA1 = 2,
    D_U = 10,
    D_V = 4,
    POLYVEC_BYTES = 1152,
    POLY_COMPRESSED_BYTES = 128,
    POLYVEC_COMPRESSED_BYTES = 960,
    PK_BYTES = 1184,
    SK_BYTES = 2400,
    CT_BYTES = 1088
);

impl_kyber_params!(
    Kyber1024,
    "Kyber-1024 (k = 4, NIST security level 5).",
    K = 4,
    ETA1 = 2,
    D_U = 11,
    D_V = 5,
    POLYVEC_BYTES = 1536,
    POLY_COMPRESSED_BYTES = 160,
    POLYVEC_COMPRESSED_BYTES = 1408,
    PK_BYTES = 1568,
    SK_BYTES = 3168,
    CT_BYTES = 1568
);

const _: () = {
    macro_rules! check_params {
        ($t:ty) => {
            assert!(<$t>::POLYVEC_BYTES == <$t>::K * POLYBYTES);
            assert!(<$t>::POLY_COMPRESSED_BYTES == (<$t>::D_V as usize) * N / 8);
            assert!(
                <$t>::POLYVEC_COMPRESSED_BYTES == <$t>::K * (<$t>::D_U as usize) * N / 8
            );
            assert!(<$t>::INDCPA_PK_BYTES == <$t>::POLYVEC_BYTES + SYMBYTES);
            assert!(<$t>::INDCPA_SK_BYTES == <$t>::POLYVEC_BYTES);
            assert!(<$t>::PK_BYTES == <$t>::INDCPA_PK_BYTES);
            assert!(<$t>::SK_BYTES == <$t>::INDCPA_SK_BYTES + <$t>::PK_BYTES + 2 * SYMBYTES);
            assert!(
                <$t>::CT_BYTES
                    == <$t>::POLYVEC_COMPRESSED_BYTES + <$t>::POLY_COMPRESSED_BYTES
            );
            assert!(<<$t as KyberParams>::PkArray as ByteArray>::LEN == <$t>::PK_BYTES);
            assert!(<<$t as KyberParams>::SkArray as ByteArray>::LEN == <$t>::SK_BYTES);
            assert!(<<$t as KyberParams>::CtArray as ByteArray>::LEN == <$t>::CT_BYTES);
        };
    }
    check_params!(Kyber512);
    check_params!(Kyber768);
    check_params!(Kyber1024);

    assert!(Kyber512::PK_BYTES == 800);
    assert!(Kyber512::SK_BYTES == 1632);
    assert!(Kyber512::CT_BYTES == 768);
    assert!(Kyber768::PK_BYTES == 1184);
    assert!(Kyber768::SK_BYTES == 2400);
    assert!(Kyber768::CT_BYTES == 1088);
    assert!(Kyber1024::PK_BYTES == 1568);
    assert!(Kyber1024::SK_BYTES == 3168);
    assert!(Kyber1024::CT_BYTES == 1568);
};
