use std::collections::BTreeMap;

use state::State;
use tracing::{debug, warn};
use types::{
    Address, Bytes32, CallKind, CallResult, Message, StatusCode, StorageStatus, TxContext,
};

use crate::global::Config;
use crate::host_context::{HostBuffer, HostContext};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub address: Address,
    pub data: Vec<u8>,
    pub topics: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfDestructRecord {
    pub address: Address,
    pub beneficiary: Address,
    pub balance: Bytes32,
}

/// Host backed by an in-memory account state.
///
/// Nested calls are not executed: the host moves value, deploys init code
/// for creates and records each accepted message in `calls()`.
#[derive(Debug, Default)]
pub struct InMemoryHost {
    state: State,
    tx_context: TxContext,
    block_hashes: BTreeMap<i64, Bytes32>,
    logs: Vec<LogEntry>,
    selfdestructs: Vec<SelfDestructRecord>,
    calls: Vec<Message>,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: State) -> Self {
        Self { state, ..Self::default() }
    }

    pub fn with_tx_context(mut self, tx_context: TxContext) -> Self {
        self.tx_context = tx_context;
        self
    }

    pub fn set_block_hash(&mut self, number: i64, hash: Bytes32) {
        self.block_hashes.insert(number, hash);
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    pub fn tx_context(&self) -> &TxContext {
        &self.tx_context
    }

    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }

    pub fn selfdestructs(&self) -> &[SelfDestructRecord] {
        &self.selfdestructs
    }

    pub fn calls(&self) -> &[Message] {
        &self.calls
    }

    fn parse_address(bytes: &[u8]) -> Option<Address> {
        match Address::from_slice(bytes) {
            Ok(addr) => Some(addr),
            Err(err) => {
                warn!(%err, "ignoring malformed address");
                None
            }
        }
    }

    fn parse_word(bytes: &[u8]) -> Option<Bytes32> {
        match Bytes32::from_slice(bytes) {
            Ok(word) => Some(word),
            Err(err) => {
                warn!(%err, "ignoring malformed storage word");
                None
            }
        }
    }

    fn word_buffer(word: Bytes32) -> HostBuffer {
        HostBuffer::new(word.0.to_vec())
    }

    fn result_buffer(result: &CallResult) -> HostBuffer {
        match result.encode() {
            Ok(encoded) => encoded.into(),
            Err(err) => {
                warn!(%err, "call output cannot be encoded");
                CallResult::failure(StatusCode::InternalError)
                    .encode()
                    .map(HostBuffer::from)
                    .unwrap_or_default()
            }
        }
    }

    fn dispatch(&mut self, msg: &Message) -> CallResult {
        if msg.depth > Config::MAX_CALL_DEPTH {
            return CallResult::failure(StatusCode::CallDepthExceeded);
        }
        if msg.is_static() && (msg.kind == CallKind::Create || !msg.value.is_zero()) {
            return CallResult::failure(StatusCode::StaticModeViolation);
        }

        match msg.kind {
            CallKind::Create => {
                if self.state.get_account(&msg.destination).is_some_and(|a| a.is_contract()) {
                    debug!(destination = %msg.destination, "create collides with existing contract");
                    return CallResult::failure(StatusCode::Failure);
                }
                if let Err(err) = self.state.transfer(&msg.sender, &msg.destination, &msg.value) {
                    debug!(%err, "create endowment failed");
                    return CallResult::failure(StatusCode::Failure);
                }
                self.state.deploy_contract(msg.destination, msg.input.clone());
                CallResult::success(msg.gas, msg.destination.0.to_vec())
            }
            CallKind::DelegateCall => CallResult::success(msg.gas, Vec::new()),
            // CALLCODE moves value from the sender back to itself: it must be
            // covered, but balances end up unchanged.
            CallKind::CallCode => {
                if let Err(err) = self.state.transfer(&msg.sender, &msg.sender, &msg.value) {
                    debug!(%err, "callcode value check failed");
                    return CallResult::failure(StatusCode::Failure);
                }
                CallResult::success(msg.gas, Vec::new())
            }
            CallKind::Call => {
                if let Err(err) = self.state.transfer(&msg.sender, &msg.destination, &msg.value) {
                    debug!(%err, "call value transfer failed");
                    return CallResult::failure(StatusCode::Failure);
                }
                CallResult::success(msg.gas, Vec::new())
            }
        }
    }
}

impl HostContext for InMemoryHost {
    fn account_exists(&self, address: &[u8]) -> bool {
        Self::parse_address(address).is_some_and(|addr| self.state.contains(&addr))
    }

    fn get_storage(&self, address: &[u8], key: &[u8]) -> HostBuffer {
        let value = match (Self::parse_address(address), Self::parse_word(key)) {
            (Some(addr), Some(key)) => self.state.storage(&addr, &key),
            _ => Bytes32::ZERO,
        };
        Self::word_buffer(value)
    }

    fn set_storage(&mut self, address: &[u8], key: &[u8], value: &[u8]) -> StorageStatus {
        let (Some(addr), Some(key), Some(value)) = (
            Self::parse_address(address),
            Self::parse_word(key),
            Self::parse_word(value),
        ) else {
            return StorageStatus::Unchanged;
        };

        let current = self.state.storage(&addr, &key);
        if current == value {
            return StorageStatus::Unchanged;
        }
        self.state.set_storage(&addr, key, value);

        // No original-value tracking, so ModifiedAgain is never reported.
        let status = if current.is_zero() {
            StorageStatus::Added
        } else if value.is_zero() {
            StorageStatus::Deleted
        } else {
            StorageStatus::Modified
        };
        debug!(address = %addr, %key, ?status, "storage written");
        status
    }

    fn get_balance(&self, address: &[u8]) -> HostBuffer {
        let balance = Self::parse_address(address)
            .map(|addr| self.state.balance(&addr))
            .unwrap_or(Bytes32::ZERO);
        Self::word_buffer(balance)
    }

    fn get_code_size(&self, address: &[u8]) -> usize {
        Self::parse_address(address)
            .map(|addr| self.state.code(&addr).len())
            .unwrap_or(0)
    }

    fn get_code_hash(&self, address: &[u8]) -> HostBuffer {
        let hash = Self::parse_address(address)
            .map(|addr| self.state.code_hash(&addr))
            .unwrap_or(Bytes32::ZERO);
        Self::word_buffer(hash)
    }

    fn get_code(&self, address: &[u8]) -> HostBuffer {
        Self::parse_address(address)
            .map(|addr| HostBuffer::from(self.state.code(&addr)))
            .unwrap_or_default()
    }

    fn selfdestruct(&mut self, address: &[u8], beneficiary: &[u8]) {
        let (Some(address), Some(beneficiary)) =
            (Self::parse_address(address), Self::parse_address(beneficiary))
        else {
            return;
        };
        match self.state.selfdestruct(&address, &beneficiary) {
            Ok(Some(balance)) => {
                debug!(%address, %beneficiary, %balance, "account self-destructed");
                self.selfdestructs.push(SelfDestructRecord { address, beneficiary, balance });
            }
            Ok(None) => debug!(%address, "self-destruct of unknown account ignored"),
            Err(err) => warn!(%err, %address, "self-destruct failed"),
        }
    }

    fn call(&mut self, message: &[u8]) -> HostBuffer {
        let msg = match Message::decode(message) {
            Ok(msg) => msg,
            Err(err) => {
                warn!(%err, "rejecting malformed call message");
                return Self::result_buffer(&CallResult::failure(StatusCode::Failure));
            }
        };
        let result = self.dispatch(&msg);
        debug!(
            sender = %msg.sender,
            destination = %msg.destination,
            kind = ?msg.kind,
            status = ?result.status,
            "call dispatched"
        );
        if result.status.is_success() {
            self.calls.push(msg);
        }
        Self::result_buffer(&result)
    }

    fn get_tx_context(&self) -> HostBuffer {
        self.tx_context.encode().into()
    }

    fn get_block_hash(&self, number: i64) -> HostBuffer {
        let current = self.tx_context.block_number;
        let visible = number >= 0 && number < current && current - number <= Config::BLOCK_HASH_WINDOW;
        let hash = if visible {
            self.block_hashes.get(&number).copied().unwrap_or(Bytes32::ZERO)
        } else {
            Bytes32::ZERO
        };
        Self::word_buffer(hash)
    }

    fn emit_log(
        &mut self,
        address: &[u8],
        data: &[u8],
        data_size: usize,
        topics: &[&[u8]],
        topic_count: usize,
    ) {
        let Some(address) = Self::parse_address(address) else {
            return;
        };
        let data = data[..data_size.min(data.len())].to_vec();
        let topics: Vec<Vec<u8>> = topics
            .iter()
            .take(topic_count)
            .map(|topic| topic.to_vec())
            .collect();
        debug!(%address, data_len = data.len(), topics = topics.len(), "log emitted");
        self.logs.push(LogEntry { address, data, topics });
    }
}
