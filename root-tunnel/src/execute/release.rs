//! Checkpoint submission and proof-gated release.
//!
//! The oracle commits `(tx_id, payload_hash)` once the exit transaction on
//! the mirror chain is finalized; release recomputes the hash from the
//! submitted payload, so the relayer carrying the proof is untrusted.

use cosmwasm_std::{
    to_json_binary, Binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, WasmMsg,
};

use common::{
    bytes32_to_hex, decode_transfer, keccak256, quads_to_arrays, split_proof, validate_batch,
};

use crate::error::ContractError;
use crate::state::{CHECKPOINTS, CONFIG, PROCESSED_EXITS, STATS};

/// Record a finalized exit transaction (oracle only).
pub fn execute_submit_checkpoint(
    deps: DepsMut,
    info: MessageInfo,
    tx_id: Binary,
    payload_hash: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let oracle = config
        .checkpoint_oracle
        .ok_or(ContractError::OracleNotConfigured)?;
    if info.sender != oracle {
        return Err(ContractError::UnauthorizedOracle);
    }

    let tx_id = as_bytes32(&tx_id)?;
    let payload_hash = as_bytes32(&payload_hash)?;
    CHECKPOINTS.save(deps.storage, &tx_id, &payload_hash)?;

    Ok(Response::new()
        .add_attribute("method", "submit_checkpoint")
        .add_attribute("tx_id", bytes32_to_hex(&tx_id))
        .add_attribute("payload_hash", bytes32_to_hex(&payload_hash)))
}

/// Release escrowed quads against a proof built by the finality oracle.
///
/// Verification order: finality first (`NotYetFinalized` reveals nothing
/// about the payload), then hash binding, then replay, then structure.
/// Deliberately not pause-gated.
pub fn execute_receive_message(
    deps: DepsMut,
    env: Env,
    proof: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let (tx_id, payload) =
        split_proof(proof.as_slice()).map_err(|e| ContractError::MalformedProof {
            reason: e.to_string(),
        })?;

    let checkpointed = CHECKPOINTS
        .may_load(deps.storage, &tx_id)?
        .ok_or(ContractError::NotYetFinalized)?;

    if keccak256(payload) != checkpointed {
        return Err(ContractError::MalformedProof {
            reason: "payload does not match the checkpointed hash".to_string(),
        });
    }

    let processed = PROCESSED_EXITS
        .may_load(deps.storage, &tx_id)?
        .unwrap_or(false);
    if processed {
        return Err(ContractError::AlreadyApplied);
    }

    let exit = decode_transfer(payload).map_err(|e| ContractError::MalformedProof {
        reason: e.to_string(),
    })?;

    let holder = deps
        .api
        .addr_validate(&exit.holder)
        .map_err(|_| ContractError::MalformedProof {
            reason: format!("holder {} is not a valid address on this chain", exit.holder),
        })?;

    let ledger: land::msg::ConfigResponse = deps
        .querier
        .query_wasm_smart(&config.land, &land::msg::QueryMsg::Config {})?;
    validate_batch(&exit.quads, ledger.grid_size)?;

    PROCESSED_EXITS.save(deps.storage, &tx_id, &true)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_released_exits += 1;
    STATS.save(deps.storage, &stats)?;

    let (sizes, xs, ys) = quads_to_arrays(&exit.quads);
    let release_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.land.to_string(),
        msg: to_json_binary(&land::msg::ExecuteMsg::BatchTransferQuad {
            from: env.contract.address.to_string(),
            to: holder.to_string(),
            sizes,
            xs,
            ys,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(release_msg)
        .add_attribute("method", "receive_message")
        .add_attribute("tx_id", bytes32_to_hex(&tx_id))
        .add_attribute("holder", holder)
        .add_attribute("quads", exit.quads.len().to_string()))
}

fn as_bytes32(value: &Binary) -> Result<[u8; 32], ContractError> {
    value
        .to_vec()
        .try_into()
        .map_err(|_| ContractError::InvalidHashLength { got: value.len() })
}
