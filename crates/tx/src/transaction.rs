//! The transaction record and its wire codec.
//!
//! All three kinds share one serialization order: type, version, the
//! kind-specific payload, attributes, inputs, outputs and, only once
//! signed, witnesses. The unsigned form simply stops after the outputs;
//! those bytes are what gets hashed and signed.

use lyra_crypto::UInt256;
use lyra_io::{helper, BinaryWriter, IoError, IoResult, MemoryReader, Serializable};

use crate::attribute::TransactionAttribute;
use crate::coin::CoinReference;
use crate::fixed8::Fixed8;
use crate::output::TransactionOutput;
use crate::witness::Witness;
use crate::{Error, Result};

const KIND_CLAIM: u8 = 0x02;
const KIND_TRANSFER: u8 = 0x80;
const KIND_INVOCATION: u8 = 0xd1;

const MAX_ATTRIBUTES: usize = 16;
const MAX_COLLECTION: usize = 0x10000;

/// The fields exclusive to one transaction kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionPayload {
    /// Converts prior outputs into the secondary asset; carries no
    /// ordinary inputs of its own.
    Claim { claims: Vec<CoinReference> },
    /// A plain spend. No exclusive fields.
    Transfer,
    /// Carries VM bytecode and the execution fee committed to run it.
    /// The fee field is absent on the wire at version 0.
    Invocation { script: Vec<u8>, gas: Fixed8 },
}

impl TransactionPayload {
    /// The kind's wire discriminant.
    pub fn kind(&self) -> u8 {
        match self {
            Self::Claim { .. } => KIND_CLAIM,
            Self::Transfer => KIND_TRANSFER,
            Self::Invocation { .. } => KIND_INVOCATION,
        }
    }
}

/// A transaction in any state: unsigned while `witnesses` is empty,
/// signed once at least one witness is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub version: u8,
    pub payload: TransactionPayload,
    pub attributes: Vec<TransactionAttribute>,
    pub inputs: Vec<CoinReference>,
    pub outputs: Vec<TransactionOutput>,
    pub witnesses: Vec<Witness>,
}

impl Transaction {
    /// An empty transaction of the given kind.
    pub fn new(version: u8, payload: TransactionPayload) -> Self {
        Self {
            version,
            payload,
            attributes: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            witnesses: Vec::new(),
        }
    }

    /// The bytes that are hashed and signed: the full wire form minus
    /// witnesses.
    pub fn serialize_unsigned(&self) -> Result<Vec<u8>> {
        let mut writer = BinaryWriter::with_capacity(self.size());
        self.write_unsigned(&mut writer)?;
        Ok(writer.to_bytes())
    }

    /// The transaction id: double SHA-256 of the unsigned form. Display of
    /// the returned value uses the reversed hex convention.
    pub fn hash(&self) -> Result<UInt256> {
        Ok(UInt256::from_data(&self.serialize_unsigned()?))
    }

    /// Decodes a transaction, signed or unsigned, from its wire form.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut reader = MemoryReader::new(data);
        Self::decode(&mut reader)
    }

    fn write_unsigned(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_u8(self.payload.kind())?;
        writer.write_u8(self.version)?;
        match &self.payload {
            TransactionPayload::Claim { claims } => {
                helper::serialize_array(claims, writer)?;
            }
            TransactionPayload::Transfer => {}
            TransactionPayload::Invocation { script, gas } => {
                writer.write_var_bytes(script)?;
                if self.version >= 1 {
                    gas.serialize(writer)?;
                }
            }
        }
        helper::serialize_array(&self.attributes, writer)?;
        helper::serialize_array(&self.inputs, writer)?;
        helper::serialize_array(&self.outputs, writer)
    }

    fn decode(reader: &mut MemoryReader) -> Result<Self> {
        let kind = reader.read_u8()?;
        let version = reader.read_u8()?;
        let payload = match kind {
            KIND_CLAIM => TransactionPayload::Claim {
                claims: helper::deserialize_array(reader, MAX_COLLECTION)?,
            },
            KIND_TRANSFER => TransactionPayload::Transfer,
            KIND_INVOCATION => TransactionPayload::Invocation {
                script: reader.read_var_bytes(MAX_COLLECTION)?.to_vec(),
                gas: if version >= 1 {
                    Fixed8::deserialize(reader)?
                } else {
                    Fixed8::ZERO
                },
            },
            other => return Err(Error::UnsupportedTransactionKind(other)),
        };
        let attributes = helper::deserialize_array(reader, MAX_ATTRIBUTES)?;
        let inputs = helper::deserialize_array(reader, MAX_COLLECTION)?;
        let outputs = helper::deserialize_array(reader, MAX_COLLECTION)?;
        // The unsigned form ends here; witnesses follow only once signed.
        let witnesses = if reader.remaining() > 0 {
            helper::deserialize_array(reader, MAX_COLLECTION)?
        } else {
            Vec::new()
        };
        Ok(Self {
            version,
            payload,
            attributes,
            inputs,
            outputs,
            witnesses,
        })
    }
}

impl Serializable for Transaction {
    fn size(&self) -> usize {
        let payload = match &self.payload {
            TransactionPayload::Claim { claims } => helper::get_array_size(claims),
            TransactionPayload::Transfer => 0,
            TransactionPayload::Invocation { script, .. } => {
                let gas = if self.version >= 1 { 8 } else { 0 };
                helper::get_var_bytes_size(script) + gas
            }
        };
        let witnesses = if self.witnesses.is_empty() {
            0
        } else {
            helper::get_array_size(&self.witnesses)
        };
        2 + payload
            + helper::get_array_size(&self.attributes)
            + helper::get_array_size(&self.inputs)
            + helper::get_array_size(&self.outputs)
            + witnesses
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        self.write_unsigned(writer)?;
        if !self.witnesses.is_empty() {
            helper::serialize_array(&self.witnesses, writer)?;
        }
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Self::decode(reader).map_err(|e| match e {
            Error::Io(io) => io,
            other => IoError::InvalidData {
                context: "transaction".to_string(),
                value: other.to_string(),
            },
        })
    }
}
