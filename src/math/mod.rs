//! Ring arithmetic for Kyber.
//!
//! Sub-modules cover modular reduction, the number-theoretic transform,
//! polynomial and polynomial-vector arithmetic, byte-level packing and
//! compression, and deterministic sampling.

pub mod ntt;
pub mod pack;
pub mod poly;
pub mod polyvec;
pub mod reduce;
pub mod sample;
