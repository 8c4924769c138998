//! Error types for the Grid Ledger contract.

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

    #[error("Unauthorized: caller is not a registered minter")]
    NotMinter,

    #[error("Unauthorized: caller is neither {owner} nor an approved operator")]
    NotApproved { owner: String },

    #[error("cell ({x}, {y}) is already owned")]
    CellAlreadyOwned { x: u64, y: u64 },

    #[error("cell ({x}, {y}) is not owned by {expected}")]
    NotOwner { x: u64, y: u64, expected: String },

    #[error("grid size cannot be zero")]
    GridSizeCannotBeZero,
}
