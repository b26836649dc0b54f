use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// An execution error.
///
/// Any of these leaves the computer in an unusable state; callers should
/// stop stepping it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown opcode `{}`", .opcode)]
    UnknownOpcode { opcode: i64 },
    #[error("unknown mode `{}`", .mode)]
    UnknownMode { mode: i64 },
    #[error("negative address `{}`", .addr)]
    NegativeAddress { addr: i64 },
    #[error("write parameter in immediate mode at `{}`", .ptr)]
    ImmediateWrite { ptr: usize },
}
