//! Query handlers for the child tunnel.

use cosmwasm_std::{Binary, Deps, StdResult};

use crate::msg::{
    ConfigResponse, IsPausedResponse, MaxAllowedQuadsResponse, MaxGasOnRootResponse,
    MessageProcessedResponse, PendingExitResponse, StatsResponse,
};
use crate::state::{CONFIG, PENDING_EXITS, PROCESSED_MESSAGES, STATS};

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        land: config.land,
        trusted_relay: config.trusted_relay,
        paused: config.paused,
        max_allowed_quads: config.max_allowed_quads,
        max_gas_on_root: config.max_gas_on_root,
    })
}

/// Query the maximum quads accepted in one batch.
pub fn query_max_allowed_quads(deps: Deps) -> StdResult<MaxAllowedQuadsResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(MaxAllowedQuadsResponse {
        max_allowed_quads: config.max_allowed_quads,
    })
}

/// Query the estimated-gas ceiling for the root chain.
pub fn query_max_gas_on_root(deps: Deps) -> StdResult<MaxGasOnRootResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(MaxGasOnRootResponse {
        max_gas_on_root: config.max_gas_on_root,
    })
}

/// Query whether the tunnel is paused.
pub fn query_is_paused(deps: Deps) -> StdResult<IsPausedResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(IsPausedResponse {
        paused: config.paused,
    })
}

/// Query a pending exit by transaction id, if any.
pub fn query_pending_exit(deps: Deps, tx_id: Binary) -> StdResult<PendingExitResponse> {
    let exit = PENDING_EXITS.may_load(deps.storage, tx_id.as_slice())?;
    Ok(PendingExitResponse { exit })
}

/// Query whether a root-chain message id has been applied.
pub fn query_is_message_processed(
    deps: Deps,
    message_id: u64,
) -> StdResult<MessageProcessedResponse> {
    let processed = PROCESSED_MESSAGES
        .may_load(deps.storage, message_id)?
        .unwrap_or(false);
    Ok(MessageProcessedResponse { processed })
}

/// Query tunnel statistics.
pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        total_received_batches: stats.total_received_batches,
        total_exits: stats.total_exits,
    })
}
