use crate::{IoError, IoResult};

/// Accumulates the little-endian wire encoding of ledger objects.
pub struct BinaryWriter {
    buffer: Vec<u8>,
}

impl BinaryWriter {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Consumes the writer and returns the accumulated bytes.
    pub fn to_bytes(self) -> Vec<u8> {
        self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn write_bool(&mut self, value: bool) -> IoResult<()> {
        self.buffer.push(value as u8);
        Ok(())
    }

    pub fn write_u8(&mut self, value: u8) -> IoResult<()> {
        self.buffer.push(value);
        Ok(())
    }

    pub fn write_u16(&mut self, value: u16) -> IoResult<()> {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    pub fn write_u32(&mut self, value: u32) -> IoResult<()> {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    pub fn write_u64(&mut self, value: u64) -> IoResult<()> {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    pub fn write_i64(&mut self, value: i64) -> IoResult<()> {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> IoResult<()> {
        self.buffer.extend_from_slice(bytes);
        Ok(())
    }

    /// Writes a VarInt: one byte below 0xfd, otherwise a marker byte followed
    /// by the little-endian value in the smallest of u16/u32/u64.
    pub fn write_var_int(&mut self, value: u64) -> IoResult<()> {
        if value < 0xfd {
            self.buffer.push(value as u8);
        } else if value <= 0xffff {
            self.buffer.push(0xfd);
            self.buffer.extend_from_slice(&(value as u16).to_le_bytes());
        } else if value <= 0xffff_ffff {
            self.buffer.push(0xfe);
            self.buffer.extend_from_slice(&(value as u32).to_le_bytes());
        } else {
            self.buffer.push(0xff);
            self.buffer.extend_from_slice(&value.to_le_bytes());
        }
        Ok(())
    }

    /// Writes a VarInt length prefix followed by the bytes themselves.
    pub fn write_var_bytes(&mut self, bytes: &[u8]) -> IoResult<()> {
        self.write_var_int(bytes.len() as u64)?;
        self.buffer.extend_from_slice(bytes);
        Ok(())
    }

    pub fn write_var_string(&mut self, value: &str) -> IoResult<()> {
        self.write_var_bytes(value.as_bytes())
    }

    /// Writes a string into a zero-padded fixed-width field.
    pub fn write_fixed_string(&mut self, value: &str, length: usize) -> IoResult<()> {
        let bytes = value.as_bytes();
        if bytes.len() > length {
            return Err(IoError::OutOfRange {
                context: "fixed string",
            });
        }
        self.buffer.extend_from_slice(bytes);
        self.buffer.resize(self.buffer.len() + length - bytes.len(), 0);
        Ok(())
    }
}

impl Default for BinaryWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_little_endian() {
        let mut writer = BinaryWriter::new();
        writer.write_u8(0x01).unwrap();
        writer.write_u16(0x0302).unwrap();
        writer.write_u32(0x07060504).unwrap();
        writer.write_i64(-2).unwrap();

        let mut expected = vec![1, 2, 3, 4, 5, 6, 7];
        expected.extend_from_slice(&(-2i64).to_le_bytes());
        assert_eq!(writer.to_bytes(), expected);
    }

    #[test]
    fn var_int_markers() {
        let cases: [(u64, Vec<u8>); 7] = [
            (0x00, vec![0x00]),
            (0xfc, vec![0xfc]),
            (0xfd, vec![0xfd, 0xfd, 0x00]),
            (0xffff, vec![0xfd, 0xff, 0xff]),
            (0x10000, vec![0xfe, 0x00, 0x00, 0x01, 0x00]),
            (0xffff_ffff, vec![0xfe, 0xff, 0xff, 0xff, 0xff]),
            (
                0x1_0000_0000,
                vec![0xff, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00],
            ),
        ];
        for (value, encoding) in cases {
            let mut writer = BinaryWriter::new();
            writer.write_var_int(value).unwrap();
            assert_eq!(writer.to_bytes(), encoding, "value {value:#x}");
        }
    }

    #[test]
    fn var_bytes_prefixes_length() {
        let mut writer = BinaryWriter::new();
        writer.write_var_bytes(b"abc").unwrap();
        assert_eq!(writer.to_bytes(), vec![3, b'a', b'b', b'c']);
    }

    #[test]
    fn fixed_string_rejects_overflow() {
        let mut writer = BinaryWriter::new();
        let err = writer.write_fixed_string("too long", 4).unwrap_err();
        assert!(matches!(err, IoError::OutOfRange { .. }));
    }
}
