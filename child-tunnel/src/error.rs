//! Error types for the child tunnel.

use common::GeometryError;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Geometry(#[from] GeometryError),

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Unauthorized: caller is not the registered counterpart relay")]
    UnauthorizedCounterpart,

    #[error("Tunnel is paused")]
    Paused,

    #[error("batch of {got} quads exceeds the maximum of {max}")]
    BatchTooLarge { got: u64, max: u64 },

    #[error("estimated destination gas {estimated} exceeds the limit of {max}")]
    ExceedsGasLimit { estimated: u64, max: u64 },

    #[error("max allowed value cannot be zero")]
    LimitCannotBeZero,

    #[error("malformed message: {reason}")]
    MalformedMessage { reason: String },

    #[error("message has already been applied")]
    AlreadyApplied,

    #[error("trusted relay is not configured")]
    RelayNotConfigured,
}
