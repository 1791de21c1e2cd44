#![no_std]

extern crate alloc;

pub mod address;
pub use address::{Address, ADDRESS_LEN};

pub mod bytes32;
pub use bytes32::{Bytes32, BYTES32_LEN};

pub mod error;
pub use error::TypesError;

pub mod codec;
pub use codec::{length_prefix, write_bytes, Reader, SerializeField};

pub mod status;
pub use status::{StatusCode, StorageStatus};

pub mod message;
pub use message::{CallKind, Message, FLAG_STATIC};

pub mod call_result;
pub use call_result::CallResult;

pub mod tx_context;
pub use tx_context::{TxContext, TX_CONTEXT_LEN};

/// Parses a hex string with an optional `0x` prefix.
pub fn decode_hex(s: &str) -> Result<alloc::vec::Vec<u8>, TypesError> {
    let trimmed = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(trimmed).map_err(|_| TypesError::InvalidHex)
}
