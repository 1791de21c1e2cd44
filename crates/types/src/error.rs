use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid hex string")]
    InvalidHex,

    #[error("unexpected end of input: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof { needed: usize, remaining: usize },

    #[error("{0} trailing bytes after decoded value")]
    TrailingBytes(usize),

    #[error("unknown call kind {0}")]
    UnknownCallKind(u32),

    #[error("{0} bytes exceed the u32 length prefix")]
    TooLong(usize),

    #[error("value does not fit in the target integer")]
    Overflow,
}
