use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use types::{decode_hex, Address, Bytes32, CallKind, Message, TxContext, FLAG_STATIC};

/// Which host implementation a script runs against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    #[default]
    Mock,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub backend: Option<Backend>,
    #[serde(default)]
    pub tx_context: Option<TxContextSpec>,
    /// Block number to hex hash.
    #[serde(default)]
    pub block_hashes: BTreeMap<i64, String>,
    #[serde(default)]
    pub accounts: Vec<AccountSpec>,
    pub ops: Vec<Op>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountSpec {
    pub address: String,
    #[serde(default)]
    pub nonce: u64,
    #[serde(default)]
    pub balance: u64,
    #[serde(default)]
    pub code: String,
    /// Hex slot key to hex slot value.
    #[serde(default)]
    pub storage: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TxContextSpec {
    #[serde(default)]
    pub gas_price: u64,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub coinbase: Option<String>,
    #[serde(default)]
    pub block_number: i64,
    #[serde(default)]
    pub block_timestamp: i64,
    #[serde(default)]
    pub block_gas_limit: i64,
    #[serde(default)]
    pub difficulty: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallKindSpec {
    #[default]
    Call,
    DelegateCall,
    CallCode,
    Create,
}

impl From<CallKindSpec> for CallKind {
    fn from(kind: CallKindSpec) -> Self {
        match kind {
            CallKindSpec::Call => CallKind::Call,
            CallKindSpec::DelegateCall => CallKind::DelegateCall,
            CallKindSpec::CallCode => CallKind::CallCode,
            CallKindSpec::Create => CallKind::Create,
        }
    }
}

/// One host callback. Byte fields are hex strings, `0x` optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    AccountExists {
        address: String,
    },
    GetStorage {
        address: String,
        key: String,
    },
    SetStorage {
        address: String,
        key: String,
        value: String,
    },
    GetBalance {
        address: String,
    },
    GetCodeSize {
        address: String,
    },
    GetCodeHash {
        address: String,
    },
    GetCode {
        address: String,
    },
    Selfdestruct {
        address: String,
        beneficiary: String,
    },
    Call {
        sender: String,
        destination: String,
        #[serde(default)]
        value: u64,
        #[serde(default)]
        input: String,
        #[serde(default)]
        gas: i64,
        #[serde(default)]
        depth: i32,
        #[serde(default)]
        kind: CallKindSpec,
        #[serde(default, rename = "static")]
        is_static: bool,
    },
    GetTxContext,
    GetBlockHash {
        number: i64,
    },
    EmitLog {
        address: String,
        #[serde(default)]
        data: String,
        #[serde(default)]
        topics: Vec<String>,
        #[serde(default)]
        data_size: Option<usize>,
        #[serde(default)]
        topic_count: Option<usize>,
    },
}

impl Op {
    pub fn name(&self) -> &'static str {
        match self {
            Op::AccountExists { .. } => "account_exists",
            Op::GetStorage { .. } => "get_storage",
            Op::SetStorage { .. } => "set_storage",
            Op::GetBalance { .. } => "get_balance",
            Op::GetCodeSize { .. } => "get_code_size",
            Op::GetCodeHash { .. } => "get_code_hash",
            Op::GetCode { .. } => "get_code",
            Op::Selfdestruct { .. } => "selfdestruct",
            Op::Call { .. } => "call",
            Op::GetTxContext => "get_tx_context",
            Op::GetBlockHash { .. } => "get_block_hash",
            Op::EmitLog { .. } => "emit_log",
        }
    }
}

impl Script {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse script {}", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

impl TxContextSpec {
    pub fn to_tx_context(&self) -> Result<TxContext> {
        let origin = self.origin.as_deref().map(parse_address).transpose()?;
        let coinbase = self.coinbase.as_deref().map(parse_address).transpose()?;
        Ok(TxContext {
            gas_price: Bytes32::from_u64(self.gas_price),
            origin: origin.unwrap_or_default(),
            coinbase: coinbase.unwrap_or_default(),
            block_number: self.block_number,
            block_timestamp: self.block_timestamp,
            block_gas_limit: self.block_gas_limit,
            block_difficulty: Bytes32::from_u64(self.difficulty),
        })
    }
}

/// Builds the encoded message for a `call` op.
pub fn call_message(op: &Op) -> Result<Vec<u8>> {
    let Op::Call { sender, destination, value, input, gas, depth, kind, is_static } = op else {
        anyhow::bail!("{} is not a call op", op.name());
    };
    let flags = if *is_static { FLAG_STATIC } else { 0 };
    let msg = Message::call(parse_address(sender)?, parse_address(destination)?, *gas)
        .with_value(Bytes32::from_u64(*value))
        .with_input(parse_bytes(input)?)
        .with_depth(*depth)
        .with_kind((*kind).into())
        .with_flags(flags);
    msg.encode().context("encoding call message")
}

pub fn parse_bytes(s: &str) -> Result<Vec<u8>> {
    decode_hex(s).with_context(|| format!("invalid hex bytes {:?}", s))
}

pub fn parse_address(s: &str) -> Result<Address> {
    Address::from_hex(s).with_context(|| format!("invalid address {:?}", s))
}

pub fn parse_word(s: &str) -> Result<Bytes32> {
    Bytes32::from_hex(s).with_context(|| format!("invalid 32-byte word {:?}", s))
}
