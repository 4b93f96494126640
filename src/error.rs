//! Error type for Kyber KEM operations.
//!
//! Only entropy failure is observable: key generation and encapsulation draw
//! from the host RNG and surface its failure. Decapsulation never fails —
//! a malformed ciphertext takes the implicit-rejection path and still yields
//! a (pseudorandom) shared secret.

use thiserror::Error;

/// Errors that can occur during Kyber KEM operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The host's cryptographic entropy source could not supply the
    /// requested random bytes.
    #[error("system entropy source unavailable")]
    EntropyUnavailable,
}

/// Type alias for results in kyber-kem.
pub type Result<T> = core::result::Result<T, Error>;
