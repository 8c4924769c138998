//! Message types for the child tunnel.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary};

use crate::state::PendingExit;

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
    /// Relay address for the trusted root-to-child path (may be wired later
    /// via `SetTrustedRelay`)
    pub trusted_relay: Option<String>,
    /// Maximum quads per batch (must be non-zero)
    pub max_allowed_quads: u64,
    /// Estimated-gas ceiling for releasing a batch on the root chain
    /// (must be non-zero)
    pub max_gas_on_root: u64,
}

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Apply a transfer message emitted by the root tunnel: mint the quads
    /// to the holder on this chain's ledger.
    ///
    /// Authorization: registered relay only; replay-protected by message id
    ReceiveFromRoot {
        /// Message id assigned by the root tunnel
        message_id: u64,
        /// Encoded transfer payload
        payload: Binary,
    },

    /// Burn a batch of quads and record a pending exit toward the root
    /// chain.
    ///
    /// Authorization: any holder (the tunnel must be an approved operator on
    /// the ledger for the sender)
    BatchTransferQuadToRoot {
        /// Recipient on the root chain
        to: String,
        sizes: Vec<u64>,
        xs: Vec<u64>,
        ys: Vec<u64>,
        /// Opaque sidecar bytes carried with the transfer
        data: Binary,
    },

    /// Set the batching limits. Both values must be non-zero.
    ///
    /// Authorization: Admin only
    SetLimits { max_quads: u64, max_gas: u64 },

    /// Stop accepting transfers in either direction.
    ///
    /// Authorization: Admin only
    Pause {},

    /// Resume transfers.
    ///
    /// Authorization: Admin only
    Unpause {},

    /// Set the relay address for the trusted receive path.
    ///
    /// Authorization: Admin only
    SetTrustedRelay { relay: String },
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

    /// Estimated-gas ceiling for the root chain
    #[returns(MaxGasOnRootResponse)]
    MaxGasOnRoot {},

    /// Whether the tunnel is paused
    #[returns(IsPausedResponse)]
    IsPaused {},

    /// A pending exit by source transaction id, if any
    #[returns(PendingExitResponse)]
    PendingExit { tx_id: Binary },

    /// Whether a root-chain message id has been applied
    #[returns(MessageProcessedResponse)]
    IsMessageProcessed { message_id: u64 },

    /// Tunnel statistics
    #[returns(StatsResponse)]
    Stats {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub land: Addr,
    pub trusted_relay: Option<Addr>,
    pub paused: bool,
    pub max_allowed_quads: u64,
    pub max_gas_on_root: u64,
}

#[cw_serde]
pub struct MaxAllowedQuadsResponse {
    pub max_allowed_quads: u64,
}

#[cw_serde]
pub struct MaxGasOnRootResponse {
    pub max_gas_on_root: u64,
}

#[cw_serde]
pub struct IsPausedResponse {
    pub paused: bool,
}

#[cw_serde]
pub struct PendingExitResponse {
    pub exit: Option<PendingExit>,
}

#[cw_serde]
pub struct MessageProcessedResponse {
    pub processed: bool,
}

#[cw_serde]
pub struct StatsResponse {
    pub total_received_batches: u64,
    pub total_exits: u64,
}
