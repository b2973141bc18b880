//! Cryptographic primitives for the Lyra ledger.
//!
//! Hashing, base58-check encoding and ECDSA over secp256r1 are consumed from
//! audited crates; this crate only fixes the conventions the ledger layers
//! rely on (hash160/hash256 composition, 64-byte r||s signatures, checksummed
//! base58 strings and the fixed-width `UInt160`/`UInt256` wire types).

pub mod base58;
pub mod ecdsa;
pub mod hash;
mod types;

pub use ecdsa::ECDsa;
pub use types::{UInt160, UInt256};

use thiserror::Error;

/// Errors raised by cryptographic operations and decoders.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Input has the wrong length or prefix for the decode path.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A base58-check string failed checksum validation.
    #[error("base58 checksum mismatch")]
    ChecksumMismatch,

    /// A private key is not a valid curve scalar.
    #[error("invalid private key: {0}")]
    InvalidKey(String),

    /// A public key does not decode to a point on the curve.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    /// A signature is malformed or fails curve validation.
    #[error("invalid signature: {0}")]
    InvalidSignature(String),
}

/// Result type for cryptographic operations.
pub type Result<T> = std::result::Result<T, Error>;
