//! Query handlers for the root tunnel.

use cosmwasm_std::{Binary, Deps, Env, StdResult};

use crate::msg::{
    CheckpointResponse, ConfigResponse, EscrowBalanceResponse, ExitProcessedResponse,
    IsPausedResponse, MaxAllowedQuadsResponse, MaxGasOnChildResponse, StatsResponse,
};
use crate::state::{CHECKPOINTS, CONFIG, PROCESSED_EXITS, STATS};

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        land: config.land,
        checkpoint_oracle: config.checkpoint_oracle,
        counterpart: config.counterpart,
        paused: config.paused,
        max_allowed_quads: config.max_allowed_quads,
        max_gas_on_child: config.max_gas_on_child,
    })
}

/// Query the maximum quads accepted in one batch.
pub fn query_max_allowed_quads(deps: Deps) -> StdResult<MaxAllowedQuadsResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(MaxAllowedQuadsResponse {
        max_allowed_quads: config.max_allowed_quads,
    })
}

/// Query the estimated-gas ceiling for the mirror chain.
pub fn query_max_gas_on_child(deps: Deps) -> StdResult<MaxGasOnChildResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(MaxGasOnChildResponse {
        max_gas_on_child: config.max_gas_on_child,
    })
}

/// Query whether the tunnel is paused.
pub fn query_is_paused(deps: Deps) -> StdResult<IsPausedResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(IsPausedResponse {
        paused: config.paused,
    })
}

/// Query whether an exit has already been released.
pub fn query_is_exit_processed(deps: Deps, tx_id: Binary) -> StdResult<ExitProcessedResponse> {
    let processed = PROCESSED_EXITS
        .may_load(deps.storage, tx_id.as_slice())?
        .unwrap_or(false);
    Ok(ExitProcessedResponse { processed })
}

/// Query the checkpointed payload hash for an exit, if any.
pub fn query_checkpoint(deps: Deps, tx_id: Binary) -> StdResult<CheckpointResponse> {
    let payload_hash = CHECKPOINTS
        .may_load(deps.storage, tx_id.as_slice())?
        .map(|hash| Binary::from(hash.to_vec()));
    Ok(CheckpointResponse { payload_hash })
}

/// Query the number of cells held in escrow, derived from the ledger.
pub fn query_escrow_balance(deps: Deps, env: Env) -> StdResult<EscrowBalanceResponse> {
    let config = CONFIG.load(deps.storage)?;
    let balance: land::msg::BalanceResponse = deps.querier.query_wasm_smart(
        &config.land,
        &land::msg::QueryMsg::BalanceOf {
            owner: env.contract.address.to_string(),
        },
    )?;
    Ok(EscrowBalanceResponse {
        cells: balance.balance,
    })
}

/// Query tunnel statistics.
pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        total_sent_batches: stats.total_sent_batches,
        total_released_exits: stats.total_released_exits,
    })
}
