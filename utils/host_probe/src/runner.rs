use anyhow::{Context, Result};
use host::{HostBuffer, HostContext, InMemoryHost, LoggedHost, MockHostContext};
use serde::Serialize;
use state::{Account, State};
use tracing::info;
use types::Bytes32;

use crate::script::{call_message, parse_address, parse_bytes, parse_word, Backend, Op, Script};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    pub index: usize,
    pub op: &'static str,
    pub output: ProbeOutput,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ProbeOutput {
    Bool(bool),
    Size(usize),
    /// Hex-encoded buffer.
    Bytes(String),
    Status(i32),
    Unit,
}

impl ProbeOutput {
    fn bytes(buf: HostBuffer) -> Self {
        ProbeOutput::Bytes(hex::encode(buf.as_bytes()))
    }
}

impl std::fmt::Display for ProbeOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeOutput::Bool(b) => write!(f, "{}", b),
            ProbeOutput::Size(n) => write!(f, "{}", n),
            ProbeOutput::Bytes(hex) => write!(f, "0x{} ({} bytes)", hex, hex.len() / 2),
            ProbeOutput::Status(code) => write!(f, "status {}", code),
            ProbeOutput::Unit => write!(f, "ok"),
        }
    }
}

fn seed_state(script: &Script) -> Result<State> {
    let mut state = State::new();
    for spec in &script.accounts {
        let address = parse_address(&spec.address)?;
        let mut account = Account::with_balance(Bytes32::from_u64(spec.balance));
        account.nonce = spec.nonce;
        account.code = parse_bytes(&spec.code)?;
        for (key, value) in &spec.storage {
            let value = parse_word(value)?;
            if !value.is_zero() {
                account.storage.insert(parse_word(key)?, value);
            }
        }
        state.insert_account(address, account);
    }
    Ok(state)
}

/// Builds the host a script runs against, wrapped in a `LoggedHost`.
pub fn build_host(script: &Script, backend: Backend) -> Result<Box<dyn HostContext>> {
    match backend {
        Backend::Mock => Ok(Box::new(LoggedHost::new(MockHostContext::new()))),
        Backend::Memory => {
            let state = seed_state(script).context("Failed to seed accounts")?;
            let tx_context = script
                .tx_context
                .clone()
                .unwrap_or_default()
                .to_tx_context()
                .context("Failed to build tx context")?;
            let mut host = InMemoryHost::with_state(state).with_tx_context(tx_context);
            for (number, hash) in &script.block_hashes {
                host.set_block_hash(*number, parse_word(hash)?);
            }
            info!(accounts = script.accounts.len(), "seeded in-memory host");
            Ok(Box::new(LoggedHost::new(host)))
        }
    }
}

fn run_op(host: &mut dyn HostContext, op: &Op) -> Result<ProbeOutput> {
    let output = match op {
        Op::AccountExists { address } => ProbeOutput::Bool(host.account_exists(&parse_bytes(address)?)),
        Op::GetStorage { address, key } => {
            ProbeOutput::bytes(host.get_storage(&parse_bytes(address)?, &parse_bytes(key)?))
        }
        Op::SetStorage { address, key, value } => {
            let status = host.set_storage(&parse_bytes(address)?, &parse_bytes(key)?, &parse_bytes(value)?);
            ProbeOutput::Status(status.code())
        }
        Op::GetBalance { address } => ProbeOutput::bytes(host.get_balance(&parse_bytes(address)?)),
        Op::GetCodeSize { address } => ProbeOutput::Size(host.get_code_size(&parse_bytes(address)?)),
        Op::GetCodeHash { address } => ProbeOutput::bytes(host.get_code_hash(&parse_bytes(address)?)),
        Op::GetCode { address } => ProbeOutput::bytes(host.get_code(&parse_bytes(address)?)),
        Op::Selfdestruct { address, beneficiary } => {
            host.selfdestruct(&parse_bytes(address)?, &parse_bytes(beneficiary)?);
            ProbeOutput::Unit
        }
        Op::Call { .. } => ProbeOutput::bytes(host.call(&call_message(op)?)),
        Op::GetTxContext => ProbeOutput::bytes(host.get_tx_context()),
        Op::GetBlockHash { number } => ProbeOutput::bytes(host.get_block_hash(*number)),
        Op::EmitLog { address, data, topics, data_size, topic_count } => {
            let data = parse_bytes(data)?;
            let topics = topics
                .iter()
                .map(|t| parse_bytes(t))
                .collect::<Result<Vec<_>>>()?;
            let topic_refs: Vec<&[u8]> = topics.iter().map(Vec::as_slice).collect();
            host.emit_log(
                &parse_bytes(address)?,
                &data,
                data_size.unwrap_or(data.len()),
                &topic_refs,
                topic_count.unwrap_or(topic_refs.len()),
            );
            ProbeOutput::Unit
        }
    };
    Ok(output)
}

/// Runs every op in order, stopping at the first op whose arguments do not parse.
pub fn run_ops(host: &mut dyn HostContext, ops: &[Op]) -> Result<Vec<ProbeResult>> {
    ops.iter()
        .enumerate()
        .map(|(index, op)| {
            let output = run_op(host, op).with_context(|| format!("op #{} ({})", index, op.name()))?;
            Ok(ProbeResult { index, op: op.name(), output })
        })
        .collect()
}
