//! Message types for the root tunnel.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary};

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Admin address
    pub admin: String,
    /// Grid Ledger contract on this chain
    pub land: String,
    /// Finality oracle address (may be wired later via `SetCheckpointOracle`)
    pub checkpoint_oracle: Option<String>,
    /// Maximum quads per batch (must be non-zero)
    pub max_allowed_quads: u64,
    /// Estimated-gas ceiling for applying a batch on the mirror chain
    /// (must be non-zero)
    pub max_gas_on_child: u64,
}

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Lock a batch of quads into escrow and emit a transfer message for the
    /// mirror chain.
    ///
    /// Authorization: any holder (the tunnel must be an approved operator on
    /// the ledger for the sender)
    BatchTransferQuadToChild {
        /// Recipient on the mirror chain
        to: String,
        sizes: Vec<u64>,
        xs: Vec<u64>,
        ys: Vec<u64>,
        /// Opaque sidecar bytes carried with the transfer
        data: Binary,
    },

    /// Record that an exit transaction on the mirror chain is finalized,
    /// committing to its payload hash.
    ///
    /// Authorization: checkpoint oracle only
    SubmitCheckpoint {
        /// 32-byte source transaction id
        tx_id: Binary,
        /// keccak256 of the exit payload
        payload_hash: Binary,
    },

    /// Release escrowed quads against an oracle-built proof
    /// (`[32-byte tx id][exit payload]`).
    ///
    /// Authorization: anyone; the proof is verified against the checkpoint
    ReceiveMessage { proof: Binary },

    /// Set the batching limits. Both values must be non-zero.
    ///
    /// Authorization: Admin only
    SetLimits { max_quads: u64, max_gas: u64 },

    /// Stop accepting new outgoing batches. Proof-gated release stays open.
    ///
    /// Authorization: Admin only
    Pause {},

    /// Resume outgoing batches.
    ///
    /// Authorization: Admin only
    Unpause {},

    /// Set the finality oracle address.
    ///
    /// Authorization: Admin only
    SetCheckpointOracle { oracle: String },

    /// Set the counterpart tunnel identifier on the mirror chain.
    ///
    /// Authorization: Admin only
    SetCounterpart { counterpart: String },
}

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Maximum quads accepted in one batch
    #[returns(MaxAllowedQuadsResponse)]
    MaxAllowedQuads {},

    /// Estimated-gas ceiling for the mirror chain
    #[returns(MaxGasOnChildResponse)]
    MaxGasOnChild {},

    /// Whether the tunnel is paused
    #[returns(IsPausedResponse)]
    IsPaused {},

    /// Whether an exit has already been released
    #[returns(ExitProcessedResponse)]
    IsExitProcessed { tx_id: Binary },

    /// The checkpointed payload hash for an exit, if finalized
    #[returns(CheckpointResponse)]
    Checkpoint { tx_id: Binary },

    /// Cells currently held in escrow (derived from the ledger)
    #[returns(EscrowBalanceResponse)]
    EscrowBalance {},

    /// Tunnel statistics
    #[returns(StatsResponse)]
    Stats {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub land: Addr,
    pub checkpoint_oracle: Option<Addr>,
    pub counterpart: Option<String>,
    pub paused: bool,
    pub max_allowed_quads: u64,
    pub max_gas_on_child: u64,
}

#[cw_serde]
pub struct MaxAllowedQuadsResponse {
    pub max_allowed_quads: u64,
}

#[cw_serde]
pub struct MaxGasOnChildResponse {
    pub max_gas_on_child: u64,
}

#[cw_serde]
pub struct IsPausedResponse {
    pub paused: bool,
}

#[cw_serde]
pub struct ExitProcessedResponse {
    pub processed: bool,
}

#[cw_serde]
pub struct CheckpointResponse {
    pub payload_hash: Option<Binary>,
}

#[cw_serde]
pub struct EscrowBalanceResponse {
    pub cells: u64,
}

#[cw_serde]
pub struct StatsResponse {
    pub total_sent_batches: u64,
    pub total_released_exits: u64,
}
