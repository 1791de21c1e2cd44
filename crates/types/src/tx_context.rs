use alloc::vec::Vec;

use crate::codec::{Reader, SerializeField};
use crate::{Address, Bytes32, TypesError};

pub const TX_CONTEXT_LEN: usize = 32 + 20 + 20 + 8 + 8 + 8 + 32;

/// Transaction and block data visible to executing code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TxContext {
    pub gas_price: Bytes32,
    pub origin: Address,
    pub coinbase: Address,
    pub block_number: i64,
    pub block_timestamp: i64,
    pub block_gas_limit: i64,
    pub block_difficulty: Bytes32,
}

impl TxContext {
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(TX_CONTEXT_LEN);
        self.gas_price.serialize_field(&mut out);
        self.origin.serialize_field(&mut out);
        self.coinbase.serialize_field(&mut out);
        self.block_number.serialize_field(&mut out);
        self.block_timestamp.serialize_field(&mut out);
        self.block_gas_limit.serialize_field(&mut out);
        self.block_difficulty.serialize_field(&mut out);
        out
    }

    pub fn decode(encoded: &[u8]) -> Result<Self, TypesError> {
        if encoded.len() != TX_CONTEXT_LEN {
            return Err(TypesError::InvalidLength {
                expected: TX_CONTEXT_LEN,
                actual: encoded.len(),
            });
        }
        let mut reader = Reader::new(encoded);
        let ctx = TxContext {
            gas_price: reader.read_bytes32()?,
            origin: reader.read_address()?,
            coinbase: reader.read_address()?,
            block_number: reader.read_i64()?,
            block_timestamp: reader.read_i64()?,
            block_gas_limit: reader.read_i64()?,
            block_difficulty: reader.read_bytes32()?,
        };
        reader.finish()?;
        Ok(ctx)
    }
}
