//! Trusted receive path: apply a root-chain transfer message by minting.

use cosmwasm_std::{to_json_binary, Binary, CosmosMsg, DepsMut, MessageInfo, Response, WasmMsg};

use common::{decode_transfer, quads_to_arrays, validate_batch};

use crate::error::ContractError;
use crate::state::{CONFIG, PROCESSED_MESSAGES, STATS};

/// Mint the quads named in a root-chain message to their holder.
///
/// Cells previously exited back to the root chain are unowned here, so
/// re-entry mints cleanly onto the same coordinates.
pub fn execute_receive_from_root(
    deps: DepsMut,
    info: MessageInfo,
    message_id: u64,
    payload: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let relay = config
        .trusted_relay
        .ok_or(ContractError::RelayNotConfigured)?;
    if info.sender != relay {
        return Err(ContractError::UnauthorizedCounterpart);
    }

    if config.paused {
        return Err(ContractError::Paused);
    }

    let processed = PROCESSED_MESSAGES
        .may_load(deps.storage, message_id)?
        .unwrap_or(false);
    if processed {
        return Err(ContractError::AlreadyApplied);
    }

    let transfer = decode_transfer(payload.as_slice()).map_err(|e| {
        ContractError::MalformedMessage {
            reason: e.to_string(),
        }
    })?;

    let holder = deps
        .api
        .addr_validate(&transfer.holder)
        .map_err(|_| ContractError::MalformedMessage {
            reason: format!(
                "holder {} is not a valid address on this chain",
                transfer.holder
            ),
        })?;

    let ledger: land::msg::ConfigResponse = deps
        .querier
        .query_wasm_smart(&config.land, &land::msg::QueryMsg::Config {})?;
    validate_batch(&transfer.quads, ledger.grid_size)?;

    PROCESSED_MESSAGES.save(deps.storage, message_id, &true)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_received_batches += 1;
    STATS.save(deps.storage, &stats)?;

    let (sizes, xs, ys) = quads_to_arrays(&transfer.quads);
    let mint_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.land.to_string(),
        msg: to_json_binary(&land::msg::ExecuteMsg::MintQuadBatch {
            to: holder.to_string(),
            sizes,
            xs,
            ys,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(mint_msg)
        .add_attribute("method", "receive_from_root")
        .add_attribute("message_id", message_id.to_string())
        .add_attribute("holder", holder)
        .add_attribute("quads", transfer.quads.len().to_string()))
}
