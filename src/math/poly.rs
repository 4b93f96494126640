//! Polynomial type and coefficient-level operations.
//!
//! `Poly` wraps `[i16; N]` (N = 256) and provides arithmetic, the NTT
//! transforms, serialization, compression, and noise sampling. Every method
//! documents which coefficient domain (standard, Montgomery, NTT) it expects
//! and produces; all mutation is in place.

use super::{ntt, pack, reduce, sample};
use crate::hash;
use crate::params::{N, Q, SYMBYTES};

/// Polynomial in Rq = Zq[X]/(X²⁵⁶ + 1), stored as 256 signed coefficients.
#[derive(Clone, Copy)]
pub struct Poly {
    pub(crate) coeffs: [i16; N],
}

impl Poly {
    /// The zero polynomial.
    #[inline]
    pub const fn zero() -> Self {
        Poly { coeffs: [0i16; N] }
    }

    // ---- Arithmetic -------------------------------------------------------

    /// Coefficient-wise addition: `self = a + b`.
    #[inline]
    pub fn add(&mut self, a: &Poly, b: &Poly) {
        for i in 0..N {
            self.coeffs[i] = a.coeffs[i] + b.coeffs[i];
        }
    }

    /// Coefficient-wise subtraction: `self = a − b`.
    #[inline]
    pub fn sub(&mut self, a: &Poly, b: &Poly) {
        for i in 0..N {
            self.coeffs[i] = a.coeffs[i] - b.coeffs[i];
        }
    }

    /// In-place addition: `self += other`.
    #[inline]
    pub fn add_assign(&mut self, other: &Poly) {
        for i in 0..N {
            self.coeffs[i] += other.coeffs[i];
        }
    }

    /// Barrett-reduce every coefficient into `[0, q]`.
    #[inline]
    pub fn reduce(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = reduce::barrett_reduce(*c);
        }
    }

    /// Conditionally subtract q from every coefficient. Coefficients must
    /// already lie in `[0, 2q)`.
    #[inline]
    pub fn csubq(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = reduce::csubq(*c);
        }
    }

    // ---- NTT / inverse NTT -----------------------------------------------

    /// Forward NTT (in-place). Standard order in, bit-reversed out.
    #[inline]
    pub fn ntt(&mut self) {
        ntt::ntt(&mut self.coeffs);
    }

    /// Inverse NTT (in-place). Bit-reversed in, standard order out; the
    /// result carries the Montgomery factor R.
    #[inline]
    pub fn invntt_tomont(&mut self) {
        ntt::invntt(&mut self.coeffs);
    }

    /// Lift all coefficients into the Montgomery domain by multiplying with
    /// R² mod q.
    pub fn tomont(&mut self) {
        const F: i32 = ((1u64 << 32) % (Q as u64)) as i32; // 1353
        for c in self.coeffs.iter_mut() {
            *c = reduce::montgomery_reduce((*c as i32) * F);
        }
    }

    /// Pointwise multiplication in the NTT domain (128 products in
    /// `Zq[X]/(X² − ζ)`): `self = a ∘ b`, results Montgomery-reduced.
    pub fn basemul_montgomery(&mut self, a: &Poly, b: &Poly) {
        for i in 0..N / 4 {
            let zeta = ntt::ZETAS[64 + i];
            let lo = ntt::basemul(
                a.coeffs[4 * i],
                a.coeffs[4 * i + 1],
                b.coeffs[4 * i],
                b.coeffs[4 * i + 1],
                zeta,
            );
            let hi = ntt::basemul(
                a.coeffs[4 * i + 2],
                a.coeffs[4 * i + 3],
                b.coeffs[4 * i + 2],
                b.coeffs[4 * i + 3],
                -zeta,
            );
            self.coeffs[4 * i] = lo[0];
            self.coeffs[4 * i + 1] = lo[1];
            self.coeffs[4 * i + 2] = hi[0];
            self.coeffs[4 * i + 3] = hi[1];
        }
    }

    // ---- Serialization ----------------------------------------------------

    /// Serialize to 384 bytes (12 bits per coefficient). Coefficients must
    /// be Barrett-reduced; the packer forces them into `[0, q)`.
    pub fn tobytes(&self, r: &mut [u8]) {
        pack::poly_tobytes(r, &self.coeffs);
    }

    /// Deserialize from 12-bit-packed bytes.
    pub fn frombytes(a: &[u8]) -> Self {
        let mut p = Poly::zero();
        pack::poly_frombytes(&mut p.coeffs, a);
        p
    }

    // ---- Message encoding -------------------------------------------------

    /// Expand a 32-byte message into a polynomial (one bit per coefficient).
    pub fn frommsg(msg: &[u8; SYMBYTES]) -> Self {
        let mut p = Poly::zero();
        pack::poly_frommsg(&mut p.coeffs, msg);
        p
    }

    /// Compress the polynomial to a 32-byte message. Coefficients must be
    /// Barrett-reduced.
    pub fn tomsg(&self) -> [u8; SYMBYTES] {
        let mut msg = [0u8; SYMBYTES];
        pack::poly_tomsg(&mut msg, &self.coeffs);
        msg
    }

    // ---- Compression (d = 4 or 5, ciphertext v component) ------------------

    /// Compress to `d` bits per coefficient and write to `r`.
    pub fn compress(&self, r: &mut [u8], d: u32) {
        match d {
            4 => pack::poly_compress_d4(r, &self.coeffs),
            5 => pack::poly_compress_d5(r, &self.coeffs),
            _ => panic!("unsupported compression width d={d}"),
        }
    }

    /// Decompress from a `d`-bit-packed buffer.
    pub fn decompress(a: &[u8], d: u32) -> Self {
        let mut p = Poly::zero();
        match d {
            4 => pack::poly_decompress_d4(&mut p.coeffs, a),
            5 => pack::poly_decompress_d5(&mut p.coeffs, a),
            _ => panic!("unsupported compression width d={d}"),
        }
        p
    }

    // ---- Noise sampling ---------------------------------------------------

    /// Sample a noise polynomial from PRF(seed, nonce) with CBD parameter
    /// `eta ∈ {2, 3}`.
    pub fn getnoise_eta(eta: usize, seed: &[u8; SYMBYTES], nonce: u8) -> Self {
        let mut p = Poly::zero();
        match eta {
            2 => {
                let mut buf = [0u8; 2 * N / 4]; // 128 bytes
                hash::prf(seed, nonce, &mut buf);
                sample::cbd2(&mut p.coeffs, &buf);
            }
            3 => {
                let mut buf = [0u8; 3 * N / 4]; // 192 bytes
                hash::prf(seed, nonce, &mut buf);
                sample::cbd3(&mut p.coeffs, &buf);
            }
            _ => panic!("unsupported eta={eta}"),
        }
        p
    }
}

impl Default for Poly {
    #[inline]
    fn default() -> Self {
        Poly::zero()
    }
}

impl core::fmt::Debug for Poly {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Poly")
            .field("coeffs[..4]", &&self.coeffs[..4])
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
