//! Programmatic script construction.

use lyra_crypto::UInt160;

use crate::op_code::OpCode;
use crate::{Error, Result};

/// Largest data length that a direct push opcode can carry.
const MAX_DIRECT_PUSH: usize = 0x4b;

/// A typed argument of a contract method call.
///
/// Arguments are pushed onto the VM operand stack; arrays are encoded
/// recursively and packed, so nesting is supported to any depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractParameter {
    ByteArray(Vec<u8>),
    Integer(i64),
    Bool(bool),
    Hash160(UInt160),
    String(String),
    Array(Vec<ContractParameter>),
}

/// Helps construct VM scripts instruction by instruction.
#[derive(Debug)]
pub struct ScriptBuilder {
    script: Vec<u8>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self { script: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.script.len()
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    /// Emits a single opcode.
    pub fn emit(&mut self, op: OpCode) -> &mut Self {
        self.script.push(op as u8);
        self
    }

    /// Emits raw instruction bytes without interpretation.
    pub fn emit_raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.script.extend_from_slice(bytes);
        self
    }

    /// Emits the smallest push instruction that fits `data`.
    pub fn emit_push(&mut self, data: &[u8]) -> Result<&mut Self> {
        let len = data.len();
        if len == 0 {
            self.emit(OpCode::PUSH0);
        } else if len <= MAX_DIRECT_PUSH {
            self.script.push(len as u8);
            self.script.extend_from_slice(data);
        } else if len <= 0xff {
            self.emit(OpCode::PUSHDATA1);
            self.script.push(len as u8);
            self.script.extend_from_slice(data);
        } else if len <= 0xffff {
            self.emit(OpCode::PUSHDATA2);
            self.script.extend_from_slice(&(len as u16).to_le_bytes());
            self.script.extend_from_slice(data);
        } else if len <= 0xffff_ffff {
            self.emit(OpCode::PUSHDATA4);
            self.script.extend_from_slice(&(len as u32).to_le_bytes());
            self.script.extend_from_slice(data);
        } else {
            return Err(Error::ItemTooLarge(len));
        }
        Ok(self)
    }

    /// Emits an integer push using the minimal signed little-endian encoding.
    /// Values -1 and 0..=16 use their dedicated single-byte opcodes.
    pub fn emit_push_int(&mut self, value: i64) -> &mut Self {
        if value == -1 {
            return self.emit(OpCode::PUSHM1);
        }
        if value == 0 {
            return self.emit(OpCode::PUSH0);
        }
        if let Some(op) = OpCode::push_n(value) {
            return self.emit(op);
        }

        let mut bytes = Vec::with_capacity(8);
        let mut v = value;
        while v != 0 && v != -1 {
            bytes.push((v & 0xff) as u8);
            v >>= 8;
        }
        // Keep the sign bit unambiguous in the minimal encoding.
        if value > 0 && bytes.last().is_some_and(|b| b & 0x80 != 0) {
            bytes.push(0x00);
        } else if value < 0 && bytes.last().map_or(true, |b| b & 0x80 == 0) {
            bytes.push(0xff);
        }
        // At most 9 bytes, always within the direct push range.
        self.script.push(bytes.len() as u8);
        self.script.extend_from_slice(&bytes);
        self
    }

    pub fn emit_push_bool(&mut self, value: bool) -> &mut Self {
        if value {
            self.emit(OpCode::PUSH1)
        } else {
            self.emit(OpCode::PUSH0)
        }
    }

    /// Emits a typed contract parameter.
    pub fn emit_push_param(&mut self, param: &ContractParameter) -> Result<&mut Self> {
        match param {
            ContractParameter::ByteArray(bytes) => {
                self.emit_push(bytes)?;
            }
            ContractParameter::Integer(value) => {
                self.emit_push_int(*value);
            }
            ContractParameter::Bool(value) => {
                self.emit_push_bool(*value);
            }
            ContractParameter::Hash160(hash) => {
                self.emit_push(hash.as_bytes())?;
            }
            ContractParameter::String(value) => {
                self.emit_push(value.as_bytes())?;
            }
            ContractParameter::Array(items) => {
                for item in items.iter().rev() {
                    self.emit_push_param(item)?;
                }
                self.emit_push_int(items.len() as i64);
                self.emit(OpCode::PACK);
            }
        }
        Ok(self)
    }

    /// Emits a call into the contract identified by `script_hash`.
    pub fn emit_app_call(&mut self, script_hash: &UInt160, tail: bool) -> &mut Self {
        self.emit(if tail {
            OpCode::TAILCALL
        } else {
            OpCode::APPCALL
        });
        self.script.extend_from_slice(script_hash.as_bytes());
        self
    }

    /// Emits a syscall by interop name.
    pub fn emit_syscall(&mut self, api: &str) -> Result<&mut Self> {
        let bytes = api.as_bytes();
        if bytes.len() > 0xfc {
            return Err(Error::SyscallTooLong(bytes.len()));
        }
        self.emit(OpCode::SYSCALL);
        self.script.push(bytes.len() as u8);
        self.script.extend_from_slice(bytes);
        Ok(self)
    }

    /// Consumes the builder and returns the script bytes.
    pub fn to_bytes(self) -> Vec<u8> {
        self.script
    }
}

impl Default for ScriptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encodes a contract method call into VM bytecode.
///
/// Arguments are pushed in reverse order, followed by the argument count and
/// a PACK, the operation name as a byte string, and an APPCALL referencing
/// the contract. An empty argument list still packs an empty array, so the
/// callee always finds `(args, operation)` on the stack.
pub fn build_invocation_script(
    contract: &UInt160,
    operation: &str,
    args: &[ContractParameter],
) -> Result<Vec<u8>> {
    let mut builder = ScriptBuilder::new();
    for arg in args.iter().rev() {
        builder.emit_push_param(arg)?;
    }
    builder.emit_push_int(args.len() as i64);
    builder.emit(OpCode::PACK);
    builder.emit_push(operation.as_bytes())?;
    builder.emit_app_call(contract, false);

    let script = builder.to_bytes();
    log::debug!(
        "built invocation of {operation} on {contract}: {} byte(s), {} arg(s)",
        script.len(),
        args.len()
    );
    Ok(script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    fn contract() -> UInt160 {
        UInt160::new(hex!("a5762ff6a3176e32db7bf8daa7f938f1d9e2ff8f"))
    }

    #[test]
    fn small_integers_use_dedicated_opcodes() {
        let mut builder = ScriptBuilder::new();
        builder.emit_push_int(-1);
        builder.emit_push_int(0);
        builder.emit_push_int(3);
        builder.emit_push_int(16);
        assert_eq!(builder.to_bytes(), vec![0x4f, 0x00, 0x53, 0x60]);
    }

    #[test]
    fn integers_use_minimal_signed_encoding() {
        let cases: [(i64, &[u8]); 6] = [
            (17, &[0x01, 0x11]),
            (255, &[0x02, 0xff, 0x00]),
            (256, &[0x02, 0x00, 0x01]),
            (12_345_678, &[0x04, 0x4e, 0x61, 0xbc, 0x00]),
            (-2, &[0x01, 0xfe]),
            (-256, &[0x02, 0x00, 0xff]),
        ];
        for (value, encoding) in cases {
            let mut builder = ScriptBuilder::new();
            builder.emit_push_int(value);
            assert_eq!(builder.to_bytes(), encoding, "value {value}");
        }
    }

    #[test]
    fn push_selects_smallest_length_header() {
        let mut builder = ScriptBuilder::new();
        builder.emit_push(&[0xaa; 75]).unwrap();
        builder.emit_push(&[0xbb; 76]).unwrap();
        builder.emit_push(&[0xcc; 256]).unwrap();
        let script = builder.to_bytes();

        assert_eq!(script[0], 75);
        let after_direct = 1 + 75;
        assert_eq!(script[after_direct], OpCode::PUSHDATA1 as u8);
        assert_eq!(script[after_direct + 1], 76);
        let after_data1 = after_direct + 2 + 76;
        assert_eq!(script[after_data1], OpCode::PUSHDATA2 as u8);
        assert_eq!(&script[after_data1 + 1..after_data1 + 3], &[0x00, 0x01]);
    }

    #[test]
    fn invocation_matches_reference_encoding() {
        // Golden bytes computed with an independent reference implementation.
        let from = UInt160::new(hex!("42395b53bec4564d59b53173983e5e5e6ef9bcfa"));
        let to = UInt160::new(hex!("df816f91412730b204777c87f287eebe73906ab5"));
        let script = build_invocation_script(
            &contract(),
            "transfer",
            &[
                ContractParameter::Hash160(from),
                ContractParameter::Hash160(to),
                ContractParameter::Integer(12_345_678),
            ],
        )
        .unwrap();
        assert_eq!(
            hex::encode(script),
            "044e61bc0014df816f91412730b204777c87f287eebe73906ab514\
             42395b53bec4564d59b53173983e5e5e6ef9bcfa53c1087472616e\
             7366657267a5762ff6a3176e32db7bf8daa7f938f1d9e2ff8f"
        );
    }

    #[test]
    fn empty_argument_list_still_packs_an_array() {
        let script = build_invocation_script(&contract(), "totalSupply", &[]).unwrap();
        assert_eq!(
            hex::encode(script),
            "00c10b746f74616c537570706c7967a5762ff6a3176e32db7bf8daa7f938f1d9e2ff8f"
        );
    }

    #[test]
    fn nested_arrays_pack_recursively() {
        let script = build_invocation_script(
            &contract(),
            "batch",
            &[ContractParameter::Array(vec![
                ContractParameter::Integer(1),
                ContractParameter::Bool(false),
            ])],
        )
        .unwrap();
        // inner: PUSH0, PUSH1, PUSH2, PACK; outer: PUSH1, PACK.
        let expected_prefix = [0x00u8, 0x51, 0x52, 0xc1, 0x51, 0xc1];
        assert_eq!(&script[..6], &expected_prefix);
        assert_eq!(script[6], 5); // direct push of "batch"
    }

    #[test]
    fn oversized_syscall_name_is_rejected() {
        let name = "x".repeat(300);
        let mut builder = ScriptBuilder::new();
        assert_eq!(
            builder.emit_syscall(&name).unwrap_err(),
            Error::SyscallTooLong(300)
        );
    }
}
