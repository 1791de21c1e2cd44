use types::StorageStatus;

use crate::host_context::{HostBuffer, HostContext};

/// Inert host that answers every callback with a fixed placeholder.
///
/// Accounts always exist, every read yields a zero-filled 64-byte buffer,
/// code size echoes the length of the address argument, and writes,
/// self-destructs and logs are dropped. Nothing is retained between calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockHostContext;

impl MockHostContext {
    pub fn new() -> Self {
        MockHostContext
    }
}

impl HostContext for MockHostContext {
    fn account_exists(&self, _address: &[u8]) -> bool {
        true
    }

    fn get_storage(&self, _address: &[u8], _key: &[u8]) -> HostBuffer {
        HostBuffer::placeholder()
    }

    fn set_storage(&mut self, _address: &[u8], _key: &[u8], _value: &[u8]) -> StorageStatus {
        StorageStatus::Unchanged
    }

    fn get_balance(&self, _address: &[u8]) -> HostBuffer {
        HostBuffer::placeholder()
    }

    fn get_code_size(&self, address: &[u8]) -> usize {
        address.len()
    }

    fn get_code_hash(&self, _address: &[u8]) -> HostBuffer {
        HostBuffer::placeholder()
    }

    fn get_code(&self, _address: &[u8]) -> HostBuffer {
        HostBuffer::placeholder()
    }

    fn selfdestruct(&mut self, _address: &[u8], _beneficiary: &[u8]) {}

    fn call(&mut self, _message: &[u8]) -> HostBuffer {
        HostBuffer::placeholder()
    }

    fn get_tx_context(&self) -> HostBuffer {
        HostBuffer::placeholder()
    }

    fn get_block_hash(&self, _number: i64) -> HostBuffer {
        HostBuffer::placeholder()
    }

    fn emit_log(
        &mut self,
        _address: &[u8],
        _data: &[u8],
        _data_size: usize,
        _topics: &[&[u8]],
        _topic_count: usize,
    ) {
    }
}
