//! Deterministic sampling: centered-binomial noise and rejection-uniform
//! coefficients.

use crate::params::{N, Q};

/// SHAKE-128 output rate in bytes (one Keccak-f[1600] squeeze).
pub const SHAKE128_RATE: usize = 168;

/// CBD with η = 2: 128 bytes of PRF output → 256 coefficients in {−2, …, 2}.
///
/// Each 32-bit word yields eight coefficients; the bit-pair popcount trick
/// sums adjacent bits in parallel.
pub fn cbd2(r: &mut [i16; N], buf: &[u8]) {
    debug_assert!(buf.len() >= 2 * N / 4);
    for i in 0..N / 8 {
        let t = u32::from_le_bytes([buf[4 * i], buf[4 * i + 1], buf[4 * i + 2], buf[4 * i + 3]]);
        let d = (t & 0x5555_5555) + ((t >> 1) & 0x5555_5555);
        for j in 0..8 {
            let a = ((d >> (4 * j)) & 0x3) as i16;
            let b = ((d >> (4 * j + 2)) & 0x3) as i16;
            r[8 * i + j] = a - b;
        }
    }
}

/// CBD with η = 3: 192 bytes of PRF output → 256 coefficients in {−3, …, 3}.
///
/// Reads 24-bit words; the three-way mask-and-fold sums bit triples.
pub fn cbd3(r: &mut [i16; N], buf: &[u8]) {
    debug_assert!(buf.len() >= 3 * N / 4);
    for i in 0..N / 4 {
        let t = u32::from_le_bytes([buf[3 * i], buf[3 * i + 1], buf[3 * i + 2], 0]);
        let d = (t & 0x0024_9249) + ((t >> 1) & 0x0024_9249) + ((t >> 2) & 0x0024_9249);
        for j in 0..4 {
            let a = ((d >> (6 * j)) & 0x7) as i16;
            let b = ((d >> (6 * j + 3)) & 0x7) as i16;
            r[4 * i + j] = a - b;
        }
    }
}

/// Rejection-sample uniform coefficients in `[0, q)` from `buf` into `r`.
///
/// Reads three bytes at a time, splitting them into two 12-bit candidates;
/// a candidate is accepted iff it is strictly below q. Stops when `r` is
/// full or fewer than three bytes remain, and returns how many coefficients
/// were written.
pub fn rej_uniform(r: &mut [i16], buf: &[u8]) -> usize {
    let mut ctr = 0;
    let mut pos = 0;

    while ctr < r.len() && pos + 3 <= buf.len() {
        let val0 = ((buf[pos] as u16) | ((buf[pos + 1] as u16) << 8)) & 0x0FFF;
        let val1 = ((buf[pos + 1] as u16) >> 4) | ((buf[pos + 2] as u16) << 4);
        pos += 3;

        if val0 < Q as u16 {
            r[ctr] = val0 as i16;
            ctr += 1;
        }
        if ctr < r.len() && val1 < Q as u16 {
            r[ctr] = val1 as i16;
            ctr += 1;
        }
    }
    ctr
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
