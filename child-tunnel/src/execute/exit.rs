//! Exit handler: burn quads on this chain and record a pending exit.

use cosmwasm_std::{to_json_binary, Binary, CosmosMsg, DepsMut, MessageInfo, Response, WasmMsg};

use common::{
    bytes32_to_hex, compute_exit_tx_id, encode_transfer, estimate_receive_gas, quads_from_arrays,
    validate_batch,
};

use crate::error::ContractError;
use crate::state::{PendingExit, CONFIG, EXIT_NONCE, PENDING_EXITS, STATS};

/// Burn a batch of quads and record the exit for later release on the
/// root chain. The burn rides in the same transaction, so a ledger
/// failure drops the pending exit record along with everything else.
pub fn execute_batch_transfer_to_root(
    deps: DepsMut,
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
    if estimated > config.max_gas_on_root {
        return Err(ContractError::ExceedsGasLimit {
            estimated,
            max: config.max_gas_on_root,
        });
    }

    let ledger: land::msg::ConfigResponse = deps
        .querier
        .query_wasm_smart(&config.land, &land::msg::QueryMsg::Config {})?;
    validate_batch(&quads, ledger.grid_size)?;

    let nonce = EXIT_NONCE.load(deps.storage)?;
    EXIT_NONCE.save(deps.storage, &(nonce + 1))?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_exits += 1;
    STATS.save(deps.storage, &stats)?;

    // The recipient is a root-chain address. It is opaque here and only
    // validated by the root tunnel when the proof lands.
    let payload = encode_transfer(&to, &quads, data.as_slice());
    let tx_id = compute_exit_tx_id(&payload, nonce);

    PENDING_EXITS.save(
        deps.storage,
        &tx_id,
        &PendingExit {
            holder: to.clone(),
            quads: quads.clone(),
            sidecar: data,
            nonce,
        },
    )?;

    let burn_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.land.to_string(),
        msg: to_json_binary(&land::msg::ExecuteMsg::BurnQuadBatch {
            from: info.sender.to_string(),
            sizes,
            xs,
            ys,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(burn_msg)
        .add_attribute("method", "batch_transfer_quad_to_root")
        .add_attribute("tx_id", bytes32_to_hex(&tx_id))
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("sender", info.sender)
        .add_attribute("holder", to)
        .add_attribute("quads", quads.len().to_string())
        .add_attribute("payload", Binary::from(payload).to_string()))
}
