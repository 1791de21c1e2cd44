use alloc::vec::Vec;

use crate::codec::{write_bytes, Reader, SerializeField};
use crate::{StatusCode, TypesError};

/// Outcome of a nested call, returned by the host to the VM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallResult {
    pub status: StatusCode,
    pub gas_left: i64,
    pub output: Vec<u8>,
}

impl CallResult {
    pub fn success(gas_left: i64, output: Vec<u8>) -> Self {
        Self { status: StatusCode::Success, gas_left, output }
    }

    pub fn failure(status: StatusCode) -> Self {
        Self { status, gas_left: 0, output: Vec::new() }
    }

    pub fn encode(&self) -> Result<Vec<u8>, TypesError> {
        let mut out = Vec::with_capacity(16 + self.output.len());
        (self.status as i32).serialize_field(&mut out);
        self.gas_left.serialize_field(&mut out);
        write_bytes(&mut out, &self.output)?;
        Ok(out)
    }

    pub fn decode(encoded: &[u8]) -> Result<Self, TypesError> {
        let mut reader = Reader::new(encoded);
        let raw_status = reader.read_i32()?;
        // Unknown negative codes are VM internal errors.
        let status = StatusCode::from_i32(raw_status).unwrap_or(StatusCode::InternalError);
        let gas_left = reader.read_i64()?;
        let output = reader.read_bytes()?;
        reader.finish()?;
        Ok(CallResult { status, gas_left, output })
    }
}
