//! Transaction attributes.
//!
//! Each attribute is a usage byte plus data whose wire encoding depends on
//! the usage class: the hash classes carry exactly 32 raw bytes with no
//! length prefix, `Script` carries 20, `DescriptionUrl` a single-byte
//! length, and the description and remark classes a VarInt-prefixed string.

use lyra_io::{BinaryWriter, IoError, IoResult, MemoryReader, Serializable};

use crate::{Error, Result};

/// Largest payload of a description or remark attribute.
const MAX_VAR_DATA: usize = 0xffff;

/// Usage byte of a transaction attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AttributeUsage {
    ContractHash = 0x00,
    Ecdh02 = 0x02,
    Ecdh03 = 0x03,
    Script = 0x20,
    Vote = 0x30,
    DescriptionUrl = 0x81,
    Description = 0x90,
    Hash1 = 0xa1,
    Hash2 = 0xa2,
    Hash3 = 0xa3,
    Hash4 = 0xa4,
    Hash5 = 0xa5,
    Hash6 = 0xa6,
    Hash7 = 0xa7,
    Hash8 = 0xa8,
    Hash9 = 0xa9,
    Hash10 = 0xaa,
    Hash11 = 0xab,
    Hash12 = 0xac,
    Hash13 = 0xad,
    Hash14 = 0xae,
    Hash15 = 0xaf,
    Remark = 0xf0,
    Remark1 = 0xf1,
    Remark2 = 0xf2,
    Remark3 = 0xf3,
    Remark4 = 0xf4,
    Remark5 = 0xf5,
    Remark6 = 0xf6,
    Remark7 = 0xf7,
    Remark8 = 0xf8,
    Remark9 = 0xf9,
    Remark10 = 0xfa,
    Remark11 = 0xfb,
    Remark12 = 0xfc,
    Remark13 = 0xfd,
    Remark14 = 0xfe,
    Remark15 = 0xff,
}

/// How the data of one usage class sits on the wire.
enum Encoding {
    /// Raw bytes of a fixed width, no length prefix.
    Fixed(usize),
    /// Single-byte length prefix.
    ByteLength,
    /// VarInt length prefix.
    VarLength,
}

impl AttributeUsage {
    pub fn from_u8(value: u8) -> Option<Self> {
        let usage = match value {
            0x00 => Self::ContractHash,
            0x02 => Self::Ecdh02,
            0x03 => Self::Ecdh03,
            0x20 => Self::Script,
            0x30 => Self::Vote,
            0x81 => Self::DescriptionUrl,
            0x90 => Self::Description,
            0xa1 => Self::Hash1,
            0xa2 => Self::Hash2,
            0xa3 => Self::Hash3,
            0xa4 => Self::Hash4,
            0xa5 => Self::Hash5,
            0xa6 => Self::Hash6,
            0xa7 => Self::Hash7,
            0xa8 => Self::Hash8,
            0xa9 => Self::Hash9,
            0xaa => Self::Hash10,
            0xab => Self::Hash11,
            0xac => Self::Hash12,
            0xad => Self::Hash13,
            0xae => Self::Hash14,
            0xaf => Self::Hash15,
            0xf0 => Self::Remark,
            0xf1 => Self::Remark1,
            0xf2 => Self::Remark2,
            0xf3 => Self::Remark3,
            0xf4 => Self::Remark4,
            0xf5 => Self::Remark5,
            0xf6 => Self::Remark6,
            0xf7 => Self::Remark7,
            0xf8 => Self::Remark8,
            0xf9 => Self::Remark9,
            0xfa => Self::Remark10,
            0xfb => Self::Remark11,
            0xfc => Self::Remark12,
            0xfd => Self::Remark13,
            0xfe => Self::Remark14,
            0xff => Self::Remark15,
            _ => return None,
        };
        Some(usage)
    }

    fn encoding(self) -> Encoding {
        match self {
            Self::ContractHash
            | Self::Ecdh02
            | Self::Ecdh03
            | Self::Vote
            | Self::Hash1
            | Self::Hash2
            | Self::Hash3
            | Self::Hash4
            | Self::Hash5
            | Self::Hash6
            | Self::Hash7
            | Self::Hash8
            | Self::Hash9
            | Self::Hash10
            | Self::Hash11
            | Self::Hash12
            | Self::Hash13
            | Self::Hash14
            | Self::Hash15 => Encoding::Fixed(32),
            Self::Script => Encoding::Fixed(20),
            Self::DescriptionUrl => Encoding::ByteLength,
            Self::Description
            | Self::Remark
            | Self::Remark1
            | Self::Remark2
            | Self::Remark3
            | Self::Remark4
            | Self::Remark5
            | Self::Remark6
            | Self::Remark7
            | Self::Remark8
            | Self::Remark9
            | Self::Remark10
            | Self::Remark11
            | Self::Remark12
            | Self::Remark13
            | Self::Remark14
            | Self::Remark15 => Encoding::VarLength,
        }
    }
}

/// A usage byte paired with data that fits its wire class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionAttribute {
    usage: AttributeUsage,
    data: Vec<u8>,
}

impl TransactionAttribute {
    /// Pairs a usage with data, rejecting data the usage class cannot carry.
    pub fn new(usage: AttributeUsage, data: Vec<u8>) -> Result<Self> {
        match usage.encoding() {
            Encoding::Fixed(width) if data.len() != width => {
                return Err(Error::InvalidAttribute(format!(
                    "{usage:?} carries exactly {width} bytes, got {}",
                    data.len()
                )));
            }
            Encoding::ByteLength if data.len() > 0xff => {
                return Err(Error::InvalidAttribute(format!(
                    "{usage:?} carries at most 255 bytes, got {}",
                    data.len()
                )));
            }
            Encoding::VarLength if data.len() > MAX_VAR_DATA => {
                return Err(Error::InvalidAttribute(format!(
                    "{usage:?} carries at most {MAX_VAR_DATA} bytes, got {}",
                    data.len()
                )));
            }
            _ => {}
        }
        Ok(Self { usage, data })
    }

    pub fn usage(&self) -> AttributeUsage {
        self.usage
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl Serializable for TransactionAttribute {
    fn size(&self) -> usize {
        1 + match self.usage.encoding() {
            Encoding::Fixed(width) => width,
            Encoding::ByteLength => 1 + self.data.len(),
            Encoding::VarLength => lyra_io::helper::get_var_bytes_size(&self.data),
        }
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_u8(self.usage as u8)?;
        match self.usage.encoding() {
            Encoding::Fixed(_) => writer.write_bytes(&self.data),
            Encoding::ByteLength => {
                writer.write_u8(self.data.len() as u8)?;
                writer.write_bytes(&self.data)
            }
            Encoding::VarLength => writer.write_var_bytes(&self.data),
        }
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let byte = reader.read_u8()?;
        let usage = AttributeUsage::from_u8(byte).ok_or_else(|| IoError::InvalidData {
            context: "attribute usage".to_string(),
            value: format!("0x{byte:02x}"),
        })?;
        let data = match usage.encoding() {
            Encoding::Fixed(width) => reader.read_bytes(width)?.to_vec(),
            Encoding::ByteLength => {
                let length = reader.read_u8()? as usize;
                reader.read_bytes(length)?.to_vec()
            }
            Encoding::VarLength => reader.read_var_bytes(MAX_VAR_DATA)?.to_vec(),
        };
        Ok(Self { usage, data })
    }
}
