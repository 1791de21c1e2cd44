use hex::encode as hex_encode;
use tracing::debug;
use types::StorageStatus;

use crate::host_context::{HostBuffer, HostContext};

/// Wraps a host and emits a `debug` event for every callback.
#[derive(Debug)]
pub struct LoggedHost<H: HostContext> {
    inner: H,
}

impl<H: HostContext> LoggedHost<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &H {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut H {
        &mut self.inner
    }

    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<H: HostContext> HostContext for LoggedHost<H> {
    fn account_exists(&self, address: &[u8]) -> bool {
        let exists = self.inner.account_exists(address);
        debug!(address = %hex_encode(address), exists, "account_exists");
        exists
    }

    fn get_storage(&self, address: &[u8], key: &[u8]) -> HostBuffer {
        let value = self.inner.get_storage(address, key);
        debug!(
            address = %hex_encode(address),
            key = %hex_encode(key),
            value = %hex_encode(value.as_bytes()),
            "get_storage"
        );
        value
    }

    fn set_storage(&mut self, address: &[u8], key: &[u8], value: &[u8]) -> StorageStatus {
        let status = self.inner.set_storage(address, key, value);
        debug!(
            address = %hex_encode(address),
            key = %hex_encode(key),
            value = %hex_encode(value),
            ?status,
            "set_storage"
        );
        status
    }

    fn get_balance(&self, address: &[u8]) -> HostBuffer {
        let balance = self.inner.get_balance(address);
        debug!(address = %hex_encode(address), balance = %hex_encode(balance.as_bytes()), "get_balance");
        balance
    }

    fn get_code_size(&self, address: &[u8]) -> usize {
        let size = self.inner.get_code_size(address);
        debug!(address = %hex_encode(address), size, "get_code_size");
        size
    }

    fn get_code_hash(&self, address: &[u8]) -> HostBuffer {
        let hash = self.inner.get_code_hash(address);
        debug!(address = %hex_encode(address), hash = %hex_encode(hash.as_bytes()), "get_code_hash");
        hash
    }

    fn get_code(&self, address: &[u8]) -> HostBuffer {
        let code = self.inner.get_code(address);
        debug!(address = %hex_encode(address), len = code.len(), "get_code");
        code
    }

    fn selfdestruct(&mut self, address: &[u8], beneficiary: &[u8]) {
        debug!(
            address = %hex_encode(address),
            beneficiary = %hex_encode(beneficiary),
            "selfdestruct"
        );
        self.inner.selfdestruct(address, beneficiary);
    }

    fn call(&mut self, message: &[u8]) -> HostBuffer {
        let result = self.inner.call(message);
        debug!(
            message_len = message.len(),
            result = %hex_encode(result.as_bytes()),
            "call"
        );
        result
    }

    fn get_tx_context(&self) -> HostBuffer {
        let ctx = self.inner.get_tx_context();
        debug!(len = ctx.len(), "get_tx_context");
        ctx
    }

    fn get_block_hash(&self, number: i64) -> HostBuffer {
        let hash = self.inner.get_block_hash(number);
        debug!(number, hash = %hex_encode(hash.as_bytes()), "get_block_hash");
        hash
    }

    fn emit_log(
        &mut self,
        address: &[u8],
        data: &[u8],
        data_size: usize,
        topics: &[&[u8]],
        topic_count: usize,
    ) {
        debug!(
            address = %hex_encode(address),
            data = %hex_encode(data),
            data_size,
            topic_count,
            "emit_log"
        );
        self.inner.emit_log(address, data, data_size, topics, topic_count);
    }
}
