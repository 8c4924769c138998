//! State definitions for the root tunnel.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Admin address for pause/limit/wiring management
    pub admin: Addr,
    /// Grid Ledger contract on this chain
    pub land: Addr,
    /// Finality oracle allowed to checkpoint exit transactions
    pub checkpoint_oracle: Option<Addr>,
    /// Identifier of the counterpart tunnel on the mirror chain; carried in
    /// emitted messages for the relay
    pub counterpart: Option<String>,
    /// Whether the tunnel is currently paused
    pub paused: bool,
    /// Maximum quads accepted in one batch
    pub max_allowed_quads: u64,
    /// Ceiling on the estimated cost of applying a batch on the mirror chain
    pub max_gas_on_child: u64,
}

/// Tunnel statistics
#[cw_serde]
pub struct Stats {
    /// Batches locked and sent to the mirror chain
    pub total_sent_batches: u64,
    /// Exits released from escrow against a proof
    pub total_released_exits: u64,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:root-tunnel";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = "0.1.0";

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Tunnel statistics
pub const STATS: Item<Stats> = Item::new("stats");

/// Monotonic id assigned to outgoing messages
pub const OUTGOING_NONCE: Item<u64> = Item::new("outgoing_nonce");

/// Finalized exit transactions reported by the oracle.
/// Key: 32-byte source tx id, Value: keccak256 of the exit payload
pub const CHECKPOINTS: Map<&[u8], [u8; 32]> = Map::new("checkpoints");

/// Exits already applied, to reject replayed proofs.
/// Key: 32-byte source tx id, Value: true once released
pub const PROCESSED_EXITS: Map<&[u8], bool> = Map::new("processed_exits");
