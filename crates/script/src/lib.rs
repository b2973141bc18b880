//! VM bytecode construction for the Lyra ledger.
//!
//! The ledger's virtual machine is stack-based; this crate knows how to emit
//! its instruction encodings but never executes them. The main entry point is
//! [`build_invocation_script`], which renders a contract method call into
//! bytecode suitable for an invocation transaction or a dry-run RPC.

mod builder;
mod op_code;

pub use builder::{build_invocation_script, ContractParameter, ScriptBuilder};
pub use op_code::OpCode;

use thiserror::Error;

/// Errors raised while assembling bytecode.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A pushed byte string exceeds the largest PUSHDATA encoding.
    #[error("push of {0} bytes exceeds the maximum item size")]
    ItemTooLarge(usize),

    /// A syscall name exceeds its one-byte length prefix.
    #[error("syscall name of {0} bytes is too long")]
    SyscallTooLong(usize),
}

/// Result type for bytecode assembly.
pub type Result<T> = std::result::Result<T, Error>;
