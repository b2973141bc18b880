//! Instruction encodings for the ledger virtual machine.

/// Opcodes of the ledger VM instruction set.
///
/// Byte values 0x01 through 0x4b are direct pushes whose opcode doubles as
/// the data length; they have no named variant and are emitted as raw bytes
/// by the script builder.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OpCode {
    /// Pushes an empty byte string (numeric zero).
    PUSH0 = 0x00,
    /// Pushes up to 255 bytes, one-byte length prefix.
    PUSHDATA1 = 0x4c,
    /// Pushes up to 65535 bytes, two-byte length prefix.
    PUSHDATA2 = 0x4d,
    /// Pushes up to 2^32-1 bytes, four-byte length prefix.
    PUSHDATA4 = 0x4e,
    /// Pushes the number -1.
    PUSHM1 = 0x4f,
    PUSH1 = 0x51,
    PUSH2 = 0x52,
    PUSH3 = 0x53,
    PUSH4 = 0x54,
    PUSH5 = 0x55,
    PUSH6 = 0x56,
    PUSH7 = 0x57,
    PUSH8 = 0x58,
    PUSH9 = 0x59,
    PUSH10 = 0x5a,
    PUSH11 = 0x5b,
    PUSH12 = 0x5c,
    PUSH13 = 0x5d,
    PUSH14 = 0x5e,
    PUSH15 = 0x5f,
    PUSH16 = 0x60,

    NOP = 0x61,
    JMP = 0x62,
    JMPIF = 0x63,
    JMPIFNOT = 0x64,
    CALL = 0x65,
    RET = 0x66,
    /// Calls into another contract; followed by its 20-byte script hash.
    APPCALL = 0x67,
    SYSCALL = 0x68,
    /// Tail call into another contract; same operand as APPCALL.
    TAILCALL = 0x69,

    DUP = 0x76,

    EQUAL = 0x87,

    CHECKSIG = 0xac,
    CHECKMULTISIG = 0xae,

    /// Packs the top n stack items into an array.
    PACK = 0xc1,
    NEWARRAY = 0xc5,

    THROWIFNOT = 0xf1,
}

impl OpCode {
    /// The dedicated small-integer push for 1..=16, if `value` has one.
    pub fn push_n(value: i64) -> Option<OpCode> {
        match value {
            1 => Some(OpCode::PUSH1),
            2 => Some(OpCode::PUSH2),
            3 => Some(OpCode::PUSH3),
            4 => Some(OpCode::PUSH4),
            5 => Some(OpCode::PUSH5),
            6 => Some(OpCode::PUSH6),
            7 => Some(OpCode::PUSH7),
            8 => Some(OpCode::PUSH8),
            9 => Some(OpCode::PUSH9),
            10 => Some(OpCode::PUSH10),
            11 => Some(OpCode::PUSH11),
            12 => Some(OpCode::PUSH12),
            13 => Some(OpCode::PUSH13),
            14 => Some(OpCode::PUSH14),
            15 => Some(OpCode::PUSH15),
            16 => Some(OpCode::PUSH16),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_n_tracks_byte_values() {
        assert_eq!(OpCode::push_n(1), Some(OpCode::PUSH1));
        assert_eq!(OpCode::push_n(16), Some(OpCode::PUSH16));
        assert_eq!(OpCode::push_n(0), None);
        assert_eq!(OpCode::push_n(17), None);
        assert_eq!(OpCode::PUSH16 as u8, OpCode::PUSH1 as u8 + 15);
    }
}
