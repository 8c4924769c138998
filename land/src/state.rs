//! State definitions for the Grid Ledger contract.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Admin address for role management
    pub admin: Addr,
    /// Side length of the grid; cells live in `[0, grid_size)²`
    pub grid_size: u64,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:land";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = "0.1.0";

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Cell ownership records.
/// Key: (x, y), Value: owner. An absent key is an unowned cell.
pub const CELLS: Map<(u64, u64), Addr> = Map::new("cells");

/// Addresses allowed to mint previously unowned cells.
/// Key: minter address, Value: whether active
pub const MINTERS: Map<&Addr, bool> = Map::new("minters");

/// cw721-style operator grants.
/// Key: (owner, operator), Value: whether the operator may move the
/// owner's quads
pub const OPERATOR_APPROVALS: Map<(&Addr, &Addr), bool> = Map::new("operator_approvals");
