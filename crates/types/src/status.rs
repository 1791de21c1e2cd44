/// Execution status reported back to the caller of a nested call.
///
/// Zero is success, positive values are failures defined by the VM,
/// negative values are internal errors of the VM implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum StatusCode {
    Success = 0,
    Failure = 1,
    Revert = 2,
    OutOfGas = 3,
    InvalidInstruction = 4,
    UndefinedInstruction = 5,
    StackOverflow = 6,
    StackUnderflow = 7,
    BadJumpDestination = 8,
    InvalidMemoryAccess = 9,
    CallDepthExceeded = 10,
    StaticModeViolation = 11,
    PrecompileFailure = 12,
    ContractValidationFailure = 13,
    InternalError = -1,
    Rejected = -2,
}

impl StatusCode {
    pub fn from_i32(value: i32) -> Option<Self> {
        let code = match value {
            0 => StatusCode::Success,
            1 => StatusCode::Failure,
            2 => StatusCode::Revert,
            3 => StatusCode::OutOfGas,
            4 => StatusCode::InvalidInstruction,
            5 => StatusCode::UndefinedInstruction,
            6 => StatusCode::StackOverflow,
            7 => StatusCode::StackUnderflow,
            8 => StatusCode::BadJumpDestination,
            9 => StatusCode::InvalidMemoryAccess,
            10 => StatusCode::CallDepthExceeded,
            11 => StatusCode::StaticModeViolation,
            12 => StatusCode::PrecompileFailure,
            13 => StatusCode::ContractValidationFailure,
            -1 => StatusCode::InternalError,
            -2 => StatusCode::Rejected,
            _ => return None,
        };
        Some(code)
    }

    pub fn is_success(&self) -> bool {
        *self == StatusCode::Success
    }
}

/// Classification of a storage write, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum StorageStatus {
    /// The value was not changed.
    Unchanged = 0,
    /// The value was changed for the first time.
    Modified = 1,
    /// A previously modified value was changed again.
    ModifiedAgain = 2,
    /// A zero slot got a non-zero value.
    Added = 3,
    /// A non-zero slot was set to zero.
    Deleted = 4,
}

impl StorageStatus {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}
