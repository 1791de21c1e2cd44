use alloc::vec::Vec;

use crate::codec::{write_bytes, Reader, SerializeField};
use crate::{Address, Bytes32, TypesError};

/// Static call mode: the callee must not modify state.
pub const FLAG_STATIC: u32 = 1;

/// The kind of call-like instruction that produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum CallKind {
    Call = 0,
    /// The value is ignored.
    DelegateCall = 1,
    CallCode = 2,
    /// `input` carries the init code and `destination` the new account.
    Create = 3,
}

impl CallKind {
    pub fn from_u32(value: u32) -> Result<Self, TypesError> {
        match value {
            0 => Ok(CallKind::Call),
            1 => Ok(CallKind::DelegateCall),
            2 => Ok(CallKind::CallCode),
            3 => Ok(CallKind::Create),
            other => Err(TypesError::UnknownCallKind(other)),
        }
    }
}

/// A nested call issued by the VM to its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub destination: Address,
    pub sender: Address,
    pub value: Bytes32,
    pub input: Vec<u8>,
    pub code_hash: Bytes32,
    pub gas: i64,
    pub depth: i32,
    pub kind: CallKind,
    pub flags: u32,
}

impl Message {
    /// A plain zero-depth call with no value and no input.
    pub fn call(sender: Address, destination: Address, gas: i64) -> Self {
        Self {
            destination,
            sender,
            value: Bytes32::ZERO,
            input: Vec::new(),
            code_hash: Bytes32::ZERO,
            gas,
            depth: 0,
            kind: CallKind::Call,
            flags: 0,
        }
    }

    pub fn with_value(mut self, value: Bytes32) -> Self {
        self.value = value;
        self
    }

    pub fn with_input(mut self, input: Vec<u8>) -> Self {
        self.input = input;
        self
    }

    pub fn with_kind(mut self, kind: CallKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_depth(mut self, depth: i32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    pub fn is_static(&self) -> bool {
        self.flags & FLAG_STATIC != 0
    }

    pub fn encode(&self) -> Result<Vec<u8>, TypesError> {
        let mut out = Vec::with_capacity(128 + self.input.len());
        self.destination.serialize_field(&mut out);
        self.sender.serialize_field(&mut out);
        self.value.serialize_field(&mut out);
        self.code_hash.serialize_field(&mut out);
        self.gas.serialize_field(&mut out);
        self.depth.serialize_field(&mut out);
        (self.kind as u32).serialize_field(&mut out);
        self.flags.serialize_field(&mut out);
        write_bytes(&mut out, &self.input)?;
        Ok(out)
    }

    pub fn decode(encoded: &[u8]) -> Result<Self, TypesError> {
        let mut reader = Reader::new(encoded);
        let destination = reader.read_address()?;
        let sender = reader.read_address()?;
        let value = reader.read_bytes32()?;
        let code_hash = reader.read_bytes32()?;
        let gas = reader.read_i64()?;
        let depth = reader.read_i32()?;
        let kind = CallKind::from_u32(reader.read_u32()?)?;
        let flags = reader.read_u32()?;
        let input = reader.read_bytes()?;
        reader.finish()?;

        Ok(Message {
            destination,
            sender,
            value,
            input,
            code_hash,
            gas,
            depth,
            kind,
            flags,
        })
    }
}
