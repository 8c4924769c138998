//! Message types for the Grid Ledger contract.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Admin address for role management
    pub admin: String,
    /// Side length of the grid (e.g. 408); fixed for the contract lifetime
    pub grid_size: u64,
}

/// Execute messages
///
/// Batch variants take the flat `sizes`/`xs`/`ys` arrays used everywhere in
/// the system; the batch is checked for pairwise non-overlap before any cell
/// is touched and applies atomically.
#[cw_serde]
pub enum ExecuteMsg {
    /// Mint one quad of previously unowned cells.
    ///
    /// Authorization: registered minters (and admin)
    MintQuad {
        to: String,
        size: u64,
        x: u64,
        y: u64,
    },

    /// Mint a batch of quads.
    ///
    /// Authorization: registered minters (and admin)
    MintQuadBatch {
        to: String,
        sizes: Vec<u64>,
        xs: Vec<u64>,
        ys: Vec<u64>,
    },

    /// Transfer one quad; every constituent cell must be owned by `from`.
    ///
    /// Authorization: `from` or an operator approved by `from`
    TransferQuad {
        from: String,
        to: String,
        size: u64,
        x: u64,
        y: u64,
    },

    /// Transfer a batch of quads atomically.
    ///
    /// Authorization: `from` or an operator approved by `from`
    BatchTransferQuad {
        from: String,
        to: String,
        sizes: Vec<u64>,
        xs: Vec<u64>,
        ys: Vec<u64>,
    },

    /// Burn one quad; cells become unowned (and mintable again).
    ///
    /// Authorization: `from` or an operator approved by `from`
    BurnQuad {
        from: String,
        size: u64,
        x: u64,
        y: u64,
    },

    /// Burn a batch of quads atomically.
    ///
    /// Authorization: `from` or an operator approved by `from`
    BurnQuadBatch {
        from: String,
        sizes: Vec<u64>,
        xs: Vec<u64>,
        ys: Vec<u64>,
    },

    /// Grant or revoke an operator for all of the sender's cells.
    SetApprovalForAll { operator: String, approved: bool },

    /// Grant or revoke the minter role.
    ///
    /// Authorization: Admin only
    SetMinter { minter: String, enabled: bool },
}

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Number of cells owned by an address (derived, never cached)
    #[returns(BalanceResponse)]
    BalanceOf { owner: String },

    /// Owner of a single cell; `None` for unowned or never-minted cells
    #[returns(OwnerOfResponse)]
    OwnerOf { x: u64, y: u64 },

    /// Whether an address holds the minter role
    #[returns(IsMinterResponse)]
    IsMinter { address: String },

    /// Whether `operator` may move `owner`'s quads
    #[returns(IsApprovedResponse)]
    IsApprovedForAll { owner: String, operator: String },
}

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub grid_size: u64,
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: u64,
}

#[cw_serde]
pub struct OwnerOfResponse {
    pub owner: Option<Addr>,
}

#[cw_serde]
pub struct IsMinterResponse {
    pub is_minter: bool,
}

#[cw_serde]
pub struct IsApprovedResponse {
    pub approved: bool,
}
