//! `kyber-kem` — a pure-Rust implementation of the Kyber IND-CCA2 key
//! encapsulation mechanism.
//!
//! Supports the three Kyber parameter sets:
//!
//! | Set | k | Public key | Secret key | Ciphertext |
//! |-----|---|-----------|------------|------------|
//! | [`Kyber512`]  | 2 | 800   | 1632 | 768  |
//! | [`Kyber768`]  | 3 | 1184  | 2400 | 1088 |
//! | [`Kyber1024`] | 4 | 1568  | 3168 | 1568 |
//!
//! # Design principles
//!
//! - **No `unsafe`** — enforced by `#![deny(unsafe_code)]`.
//! - **RAII zeroization** of secret material via the `zeroize` crate.
//! - **Constant-time** comparison and selection wherever secrets decide.
//! - **No global state** — every operation works on its own stack buffers
//!   and fresh hash instances; calls from independent threads don't
//!   interact.
//!
//! # Example
//!
//! ```
//! use kyber_kem::{decapsulate, encapsulate, keypair, Kyber768};
//! use rand_core::OsRng;
//!
//! let (pk, sk) = keypair::<Kyber768>(&mut OsRng)?;
//! let (ct, ss_sender) = encapsulate::<Kyber768>(&pk, &mut OsRng)?;
//! let ss_receiver = decapsulate::<Kyber768>(&ct, &sk);
//! assert_eq!(ss_sender.as_bytes(), ss_receiver.as_bytes());
//! # Ok::<(), kyber_kem::Error>(())
//! ```

#![deny(unsafe_code)]

pub mod ct;
pub mod error;
pub mod hash;
pub mod kem;
pub mod math;
pub mod params;
mod pke;
pub mod types;

// Re-export the public API surface.
pub use error::{Error, Result};
pub use kem::{decapsulate, encapsulate, encapsulate_derand, keypair, keypair_derand};
pub use params::{ByteArray, Kyber1024, Kyber512, Kyber768, KyberParams};
pub use types::{Ciphertext, PublicKey, SecretKey, SharedSecret};
