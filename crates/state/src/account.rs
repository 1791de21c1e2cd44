use std::collections::BTreeMap;

use alloy_primitives::keccak256;
use types::Bytes32;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Account {
    pub nonce: u64,
    pub balance: Bytes32,
    pub code: Vec<u8>,

    /// Only non-zero slots are kept.
    pub storage: BTreeMap<Bytes32, Bytes32>,
}

impl Account {
    pub fn with_balance(balance: Bytes32) -> Self {
        Self { balance, ..Self::default() }
    }

    pub fn is_contract(&self) -> bool {
        !self.code.is_empty()
    }

    /// Keccak-256 of the deployed code, or zero for accounts without code.
    pub fn code_hash(&self) -> Bytes32 {
        if self.code.is_empty() {
            return Bytes32::ZERO;
        }
        Bytes32::from(keccak256(&self.code))
    }

    pub fn storage_value(&self, key: &Bytes32) -> Bytes32 {
        self.storage.get(key).copied().unwrap_or(Bytes32::ZERO)
    }
}
