//! Outgoing transfer handler (lock into escrow, emit message).

use cosmwasm_std::{to_json_binary, Binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, WasmMsg};

use common::{encode_transfer, estimate_receive_gas, quads_from_arrays, validate_batch};

use crate::error::ContractError;
use crate::state::{CONFIG, OUTGOING_NONCE, STATS};

/// Lock a batch of quads into the tunnel and emit the encoded transfer
/// payload for the relay. All preconditions are checked before the ledger
/// message is dispatched; a ledger failure reverts the whole transaction.
pub fn execute_batch_transfer_to_child(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    to: String,
    sizes: Vec<u64>,
    xs: Vec<u64>,
    ys: Vec<u64>,
    data: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.paused {
        return Err(ContractError::Paused);
    }

    let quads = quads_from_arrays(&sizes, &xs, &ys)?;

    if quads.len() as u64 > config.max_allowed_quads {
        return Err(ContractError::BatchTooLarge {
            got: quads.len() as u64,
            max: config.max_allowed_quads,
        });
    }

    let estimated = estimate_receive_gas(&quads);
    if estimated > config.max_gas_on_child {
        return Err(ContractError::ExceedsGasLimit {
            estimated,
            max: config.max_gas_on_child,
        });
    }

    let ledger: land::msg::ConfigResponse = deps
        .querier
        .query_wasm_smart(&config.land, &land::msg::QueryMsg::Config {})?;
    validate_batch(&quads, ledger.grid_size)?;

    let message_id = OUTGOING_NONCE.load(deps.storage)?;
    OUTGOING_NONCE.save(deps.storage, &(message_id + 1))?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_sent_batches += 1;
    STATS.save(deps.storage, &stats)?;

    // The recipient lives on the mirror chain; it rides the payload opaquely
    // and is validated by the child tunnel on arrival.
    let payload = encode_transfer(&to, &quads, data.as_slice());

    let lock_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.land.to_string(),
        msg: to_json_binary(&land::msg::ExecuteMsg::BatchTransferQuad {
            from: info.sender.to_string(),
            to: env.contract.address.to_string(),
            sizes,
            xs,
            ys,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(lock_msg)
        .add_attribute("method", "batch_transfer_quad_to_child")
        .add_attribute("message_id", message_id.to_string())
        .add_attribute("sender", info.sender)
        .add_attribute("holder", to)
        .add_attribute("quads", quads.len().to_string())
        .add_attribute(
            "counterpart",
            config.counterpart.unwrap_or_else(|| "unset".to_string()),
        )
        .add_attribute("payload", Binary::from(payload).to_string()))
}
