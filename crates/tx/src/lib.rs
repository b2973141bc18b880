//! Transaction construction, serialization and signing for the Lyra ledger.
//!
//! The wire model is the ledger's UTXO form: a transaction consumes prior
//! outputs through [`CoinReference`] inputs, reassigns value through
//! [`TransactionOutput`]s, and is authorized by [`Witness`] pairs appended
//! after signing. Serializing without witnesses yields exactly the bytes
//! that are hashed and signed, so the unsigned form never exists on the
//! wire, only in memory.

mod attribute;
mod builder;
mod coin;
mod fixed8;
mod output;
mod signer;
mod transaction;
mod witness;

pub use attribute::{AttributeUsage, TransactionAttribute};
pub use builder::{TransactionBuilder, TransferIntent};
pub use coin::{Coin, CoinReference};
pub use fixed8::Fixed8;
pub use output::TransactionOutput;
pub use signer::{sign_transaction, verify_witness};
pub use transaction::{Transaction, TransactionPayload};
pub use witness::Witness;

use lyra_crypto::UInt256;
use thiserror::Error;

/// Errors raised while building, encoding or signing transactions.
#[derive(Debug, Error)]
pub enum Error {
    /// The type discriminant does not name a known transaction kind.
    #[error("unsupported transaction kind 0x{0:02x}")]
    UnsupportedTransactionKind(u8),

    /// The supplied coins cannot cover the requested spend of one asset.
    #[error("insufficient funds for asset {asset}: needed {needed}, available {available}")]
    InsufficientFunds {
        asset: UInt256,
        needed: Fixed8,
        available: Fixed8,
    },

    /// Signing was requested on a watch-only account.
    #[error("account holds no signing key")]
    NoSigningKey,

    /// An intent or claim names a zero or negative amount.
    #[error("amount must be positive")]
    NonPositiveAmount,

    /// Attribute data does not fit its usage class.
    #[error("invalid attribute: {0}")]
    InvalidAttribute(String),

    /// A fixed-point amount left the representable range.
    #[error("fixed-point amount out of range")]
    Overflow,

    #[error(transparent)]
    Io(#[from] lyra_io::IoError),

    #[error(transparent)]
    Crypto(#[from] lyra_crypto::Error),

    #[error(transparent)]
    Script(#[from] lyra_script::Error),
}

/// Result type for transaction operations.
pub type Result<T> = std::result::Result<T, Error>;
