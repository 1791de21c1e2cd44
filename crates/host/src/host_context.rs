use std::fmt::{self, Debug};
use std::ops::Deref;

use types::StorageStatus;

use crate::global::Config;

/// Owned byte buffer returned from host callbacks.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct HostBuffer(Vec<u8>);

impl HostBuffer {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn zeroed(len: usize) -> Self {
        Self(vec![0u8; len])
    }

    /// The zero-filled placeholder of `Config::DEFAULT_BUFFER_LEN` bytes.
    pub fn placeholder() -> Self {
        Self::zeroed(Config::DEFAULT_BUFFER_LEN)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    pub fn is_zeroed(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl Deref for HostBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for HostBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for HostBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl Debug for HostBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostBuffer({} bytes: {})", self.0.len(), hex::encode(&self.0))
    }
}

/// Callbacks a VM makes into its host while executing code.
///
/// Byte arguments are passed through as the VM supplied them; implementations
/// decide how much of them to interpret.
pub trait HostContext: Debug {
    fn account_exists(&self, address: &[u8]) -> bool;

    fn get_storage(&self, address: &[u8], key: &[u8]) -> HostBuffer;

    fn set_storage(&mut self, address: &[u8], key: &[u8], value: &[u8]) -> StorageStatus;

    fn get_balance(&self, address: &[u8]) -> HostBuffer;

    fn get_code_size(&self, address: &[u8]) -> usize;

    fn get_code_hash(&self, address: &[u8]) -> HostBuffer;

    fn get_code(&self, address: &[u8]) -> HostBuffer;

    fn selfdestruct(&mut self, address: &[u8], beneficiary: &[u8]);

    /// Performs a nested call described by an encoded `types::Message`.
    fn call(&mut self, message: &[u8]) -> HostBuffer;

    fn get_tx_context(&self) -> HostBuffer;

    fn get_block_hash(&self, number: i64) -> HostBuffer;

    /// `data_size` and `topic_count` are the lengths the VM declared;
    /// they may be smaller than the slices passed.
    fn emit_log(
        &mut self,
        address: &[u8],
        data: &[u8],
        data_size: usize,
        topics: &[&[u8]],
        topic_count: usize,
    );
}
