//! Little-endian field codec shared by the message, call result and
//! transaction context encodings.

use alloc::vec::Vec;

use crate::{Address, Bytes32, TypesError};

pub trait SerializeField {
    /// Appends the encoded field to `out`.
    fn serialize_field(&self, out: &mut Vec<u8>);
}

impl SerializeField for u32 {
    fn serialize_field(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }
}

impl SerializeField for i32 {
    fn serialize_field(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }
}

impl SerializeField for i64 {
    fn serialize_field(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }
}

impl SerializeField for Address {
    fn serialize_field(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.0);
    }
}

impl SerializeField for Bytes32 {
    fn serialize_field(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.0);
    }
}

/// Length prefix for a byte field. Fields longer than `u32::MAX` bytes
/// cannot be encoded.
pub fn length_prefix(len: usize) -> Result<u32, TypesError> {
    u32::try_from(len).map_err(|_| TypesError::TooLong(len))
}

/// Appends `bytes` behind its u32 length prefix.
pub fn write_bytes(out: &mut Vec<u8>, bytes: &[u8]) -> Result<(), TypesError> {
    length_prefix(bytes.len())?.serialize_field(out);
    out.extend_from_slice(bytes);
    Ok(())
}

/// Cursor over an encoded buffer.
pub struct Reader<'a> {
    buf: &'a [u8],
    cursor: usize,
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, cursor: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.cursor
    }

    pub fn read(&mut self, len: usize) -> Result<&'a [u8], TypesError> {
        if len > self.remaining() {
            return Err(TypesError::UnexpectedEof {
                needed: len,
                remaining: self.remaining(),
            });
        }
        let slice = &self.buf[self.cursor..self.cursor + len];
        self.cursor += len;
        Ok(slice)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], TypesError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read(N)?);
        Ok(out)
    }

    pub fn read_u32(&mut self) -> Result<u32, TypesError> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub fn read_i32(&mut self) -> Result<i32, TypesError> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }

    pub fn read_i64(&mut self) -> Result<i64, TypesError> {
        Ok(i64::from_le_bytes(self.read_array()?))
    }

    pub fn read_address(&mut self) -> Result<Address, TypesError> {
        Ok(Address(self.read_array()?))
    }

    pub fn read_bytes32(&mut self) -> Result<Bytes32, TypesError> {
        Ok(Bytes32(self.read_array()?))
    }

    pub fn read_bytes(&mut self) -> Result<Vec<u8>, TypesError> {
        let len = self.read_u32()? as usize;
        Ok(self.read(len)?.to_vec())
    }

    /// Fails if any input is left unread.
    pub fn finish(self) -> Result<(), TypesError> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(TypesError::TrailingBytes(n)),
        }
    }
}
