//! State definitions for the child tunnel.

use common::Quad;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary};
use cw_storage_plus::{Item, Map};

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Admin address for pause/limit/wiring management
    pub admin: Addr,
    /// Grid Ledger contract on this chain (the tunnel must be a minter)
    pub land: Addr,
    /// The registered message carrier for the trusted root-to-child path
    pub trusted_relay: Option<Addr>,
    /// Whether the tunnel is currently paused
    pub paused: bool,
    /// Maximum quads accepted in one batch
    pub max_allowed_quads: u64,
    /// Ceiling on the estimated cost of releasing a batch on the root chain
    pub max_gas_on_root: u64,
}

/// An initiated exit awaiting proof-gated release on the root chain.
///
/// Durable until released; this contract never expires or refunds it.
#[cw_serde]
pub struct PendingExit {
    /// Recipient on the root chain
    pub holder: String,
    /// Quads burned for this exit
    pub quads: Vec<Quad>,
    /// Opaque sidecar bytes carried with the transfer
    pub sidecar: Binary,
    /// Exit nonce the transaction id was derived from
    pub nonce: u64,
}

/// Tunnel statistics
#[cw_serde]
pub struct Stats {
    /// Batches minted on receive from the root chain
    pub total_received_batches: u64,
    /// Exits initiated toward the root chain
    pub total_exits: u64,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:child-tunnel";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = "0.1.0";

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Tunnel statistics
pub const STATS: Item<Stats> = Item::new("stats");

/// Monotonic nonce assigned to exits
pub const EXIT_NONCE: Item<u64> = Item::new("exit_nonce");

/// Pending exits keyed by 32-byte source transaction id
pub const PENDING_EXITS: Map<&[u8], PendingExit> = Map::new("pending_exits");

/// Root-chain message ids already applied, to reject replays
pub const PROCESSED_MESSAGES: Map<u64, bool> = Map::new("processed_messages");
