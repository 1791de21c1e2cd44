use alloy_primitives::{B256, U256};
use core::fmt;

use crate::{decode_hex, TypesError};

pub const BYTES32_LEN: usize = 32;

/// 256-bit big-endian word: `bytes[0]` is the most significant byte.
///
/// Used both for values read as integers (balances, call value, gas price)
/// and for values read as hashes (code hash, block hash, storage keys).
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(C)]
pub struct Bytes32(pub [u8; BYTES32_LEN]);

impl Bytes32 {
    pub const ZERO: Bytes32 = Bytes32([0u8; BYTES32_LEN]);

    pub fn new(bytes: [u8; BYTES32_LEN]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(slice: &[u8]) -> Result<Self, TypesError> {
        let bytes: [u8; BYTES32_LEN] =
            slice.try_into().map_err(|_| TypesError::InvalidLength {
                expected: BYTES32_LEN,
                actual: slice.len(),
            })?;
        Ok(Bytes32(bytes))
    }

    pub fn from_hex(s: &str) -> Result<Self, TypesError> {
        Self::from_slice(&decode_hex(s)?)
    }

    pub fn from_u64(value: u64) -> Self {
        Self::from_u256(U256::from(value))
    }

    /// Narrows the word to a `u64`, failing if any of the high 24 bytes are set.
    pub fn to_u64(&self) -> Result<u64, TypesError> {
        u64::try_from(self.to_u256()).map_err(|_| TypesError::Overflow)
    }

    pub fn from_u256(value: U256) -> Self {
        Bytes32(value.to_be_bytes::<BYTES32_LEN>())
    }

    pub fn to_u256(&self) -> U256 {
        U256::from_be_bytes(self.0)
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn checked_add(&self, other: &Bytes32) -> Option<Bytes32> {
        self.to_u256().checked_add(other.to_u256()).map(Self::from_u256)
    }

    pub fn checked_sub(&self, other: &Bytes32) -> Option<Bytes32> {
        self.to_u256().checked_sub(other.to_u256()).map(Self::from_u256)
    }
}

impl From<[u8; BYTES32_LEN]> for Bytes32 {
    fn from(bytes: [u8; BYTES32_LEN]) -> Self {
        Bytes32(bytes)
    }
}

impl From<U256> for Bytes32 {
    fn from(value: U256) -> Self {
        Bytes32::from_u256(value)
    }
}

impl From<B256> for Bytes32 {
    fn from(value: B256) -> Self {
        Bytes32(value.0)
    }
}

impl From<u64> for Bytes32 {
    fn from(value: u64) -> Self {
        Bytes32::from_u64(value)
    }
}

impl fmt::Debug for Bytes32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for Bytes32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
