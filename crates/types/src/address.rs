use core::fmt;

use crate::{decode_hex, TypesError};

pub const ADDRESS_LEN: usize = 20;

/// Big-endian 160-bit account address.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(C)]
pub struct Address(pub [u8; ADDRESS_LEN]);

impl Address {
    pub const ZERO: Address = Address([0u8; ADDRESS_LEN]);

    pub fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Builds an address from a slice that must be exactly 20 bytes long.
    pub fn from_slice(slice: &[u8]) -> Result<Self, TypesError> {
        let bytes: [u8; ADDRESS_LEN] =
            slice.try_into().map_err(|_| TypesError::InvalidLength {
                expected: ADDRESS_LEN,
                actual: slice.len(),
            })?;
        Ok(Address(bytes))
    }

    pub fn from_hex(s: &str) -> Result<Self, TypesError> {
        Self::from_slice(&decode_hex(s)?)
    }

    pub fn to_bytes(&self) -> [u8; ADDRESS_LEN] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Address(bytes)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
