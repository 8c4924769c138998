//! Land - Grid Ledger Contract
//!
//! Owns the per-cell ownership records of a bounded square grid. Cells are
//! minted, transferred, and burned only in quads (aligned square blocks),
//! and every multi-cell operation is atomic: a failure on any constituent
//! cell reverts the whole transaction.
//!
//! One instance of this contract is deployed per chain; the bridge tunnels
//! move quads between the two instances.
//!
//! # Roles
//! - Admin: grants/revokes minters
//! - Minters: may create previously unowned cells (the child tunnel on the
//!   mirror chain is a minter)
//! - Operators: per-holder `SetApprovalForAll` grants, which is how the
//!   tunnels pull quads out of a holder's balance

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
