//! Account derivation for the Lyra ledger.
//!
//! A secret enters as a raw 32-byte scalar, a WIF string or a bare public
//! key; it leaves as an immutable [`Account`] carrying the derived public
//! key, the parameterized wallet verification script, its script hash and
//! the checksummed address. All derivation is pure; the selected
//! [`lyra_config::ProtocolProfile`] supplies every network constant.

mod account;
mod address;
mod contract;
mod key_pair;
mod wif;

pub use account::Account;
pub use address::{address_to_script_hash, script_hash_to_address};
pub use contract::{wallet_script, ScriptTemplate};
pub use key_pair::{KeyPair, PrivateKey, PublicKey};
pub use wif::{decode_wif, encode_wif};

use thiserror::Error;

/// Errors raised during account derivation and secret decoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Input has the wrong length or prefix for the decode path.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A WIF string failed structural or checksum validation.
    #[error("invalid WIF: {0}")]
    InvalidWif(String),

    /// A public key failed point or parity validation.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    /// An address does not decode to a script hash on this network.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The account was built from a bare public key and holds no
    /// private key.
    #[error("account is watch-only")]
    WatchOnly,

    #[error(transparent)]
    Crypto(#[from] lyra_crypto::Error),
}

/// Result type for wallet operations.
pub type Result<T> = std::result::Result<T, Error>;
