//! Binary wire codec primitives for the Lyra ledger.
//!
//! Everything on the wire is little-endian; variable-length collections are
//! prefixed with a self-describing VarInt. The reader and writer here are the
//! only way ledger objects are rendered to and parsed from bytes.

mod binary_writer;
mod memory_reader;
mod serializable;

pub use binary_writer::BinaryWriter;
pub use memory_reader::MemoryReader;
pub use serializable::{helper, Serializable, SerializableExt};

use thiserror::Error;

/// Errors raised by the wire codec.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IoError {
    /// The input stream ended before the requested bytes were available.
    #[error("unexpected end of stream: {needed} more byte(s) required")]
    EndOfStream { needed: usize },

    /// A VarInt length prefix is inconsistent with what the caller allows.
    #[error("malformed length {value} (maximum allowed {max})")]
    MalformedLength { value: u64, max: u64 },

    /// A decoded field carries a value that is invalid in context.
    #[error("invalid {context}: {value}")]
    InvalidData { context: String, value: String },

    /// A field does not fit the fixed width the wire format assigns to it.
    #[error("value out of range for {context}")]
    OutOfRange { context: &'static str },
}

/// Result type for codec operations.
pub type IoResult<T> = Result<T, IoError>;
