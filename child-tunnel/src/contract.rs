//! Child tunnel contract - entry points.

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_batch_transfer_to_root, execute_pause, execute_receive_from_root, execute_set_limits,
    execute_set_trusted_relay, execute_unpause,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_is_message_processed, query_is_paused, query_max_allowed_quads,
    query_max_gas_on_root, query_pending_exit, query_stats,
};
use crate::state::{Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, EXIT_NONCE, STATS};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.max_allowed_quads == 0 || msg.max_gas_on_root == 0 {
        return Err(ContractError::LimitCannotBeZero);
    }

    let admin = deps.api.addr_validate(&msg.admin)?;
    let land = deps.api.addr_validate(&msg.land)?;
    let trusted_relay = msg
        .trusted_relay
        .map(|relay| deps.api.addr_validate(&relay))
        .transpose()?;

    let config = Config {
        admin,
        land,
        trusted_relay,
        paused: false,
        max_allowed_quads: msg.max_allowed_quads,
        max_gas_on_root: msg.max_gas_on_root,
    };
    CONFIG.save(deps.storage, &config)?;

    STATS.save(
        deps.storage,
        &Stats {
            total_received_batches: 0,
            total_exits: 0,
        },
    )?;
    EXIT_NONCE.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("land", config.land)
        .add_attribute("max_allowed_quads", msg.max_allowed_quads.to_string())
        .add_attribute("max_gas_on_root", msg.max_gas_on_root.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::ReceiveFromRoot {
            message_id,
            payload,
        } => execute_receive_from_root(deps, info, message_id, payload),
        ExecuteMsg::BatchTransferQuadToRoot {
            to,
            sizes,
            xs,
            ys,
            data,
        } => execute_batch_transfer_to_root(deps, info, to, sizes, xs, ys, data),
        ExecuteMsg::SetLimits { max_quads, max_gas } => {
            execute_set_limits(deps, info, max_quads, max_gas)
        }
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
        ExecuteMsg::SetTrustedRelay { relay } => execute_set_trusted_relay(deps, info, relay),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::MaxAllowedQuads {} => to_json_binary(&query_max_allowed_quads(deps)?),
        QueryMsg::MaxGasOnRoot {} => to_json_binary(&query_max_gas_on_root(deps)?),
        QueryMsg::IsPaused {} => to_json_binary(&query_is_paused(deps)?),
        QueryMsg::PendingExit { tx_id } => to_json_binary(&query_pending_exit(deps, tx_id)?),
        QueryMsg::IsMessageProcessed { message_id } => {
            to_json_binary(&query_is_message_processed(deps, message_id)?)
        }
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
