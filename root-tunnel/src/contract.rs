//! Root tunnel contract - entry points.

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_batch_transfer_to_child, execute_pause, execute_receive_message,
    execute_set_checkpoint_oracle, execute_set_counterpart, execute_set_limits,
    execute_submit_checkpoint, execute_unpause,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_checkpoint, query_config, query_escrow_balance, query_is_exit_processed,
    query_is_paused, query_max_allowed_quads, query_max_gas_on_child, query_stats,
};
use crate::state::{Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, OUTGOING_NONCE, STATS};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.max_allowed_quads == 0 || msg.max_gas_on_child == 0 {
        return Err(ContractError::LimitCannotBeZero);
    }

    let admin = deps.api.addr_validate(&msg.admin)?;
    let land = deps.api.addr_validate(&msg.land)?;
    let checkpoint_oracle = msg
        .checkpoint_oracle
        .map(|oracle| deps.api.addr_validate(&oracle))
        .transpose()?;

    let config = Config {
        admin,
        land,
        checkpoint_oracle,
        counterpart: None,
        paused: false,
        max_allowed_quads: msg.max_allowed_quads,
        max_gas_on_child: msg.max_gas_on_child,
    };
    CONFIG.save(deps.storage, &config)?;

    STATS.save(
        deps.storage,
        &Stats {
            total_sent_batches: 0,
            total_released_exits: 0,
        },
    )?;
    OUTGOING_NONCE.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("land", config.land)
        .add_attribute("max_allowed_quads", msg.max_allowed_quads.to_string())
        .add_attribute("max_gas_on_child", msg.max_gas_on_child.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::BatchTransferQuadToChild {
            to,
            sizes,
            xs,
            ys,
            data,
        } => execute_batch_transfer_to_child(deps, env, info, to, sizes, xs, ys, data),
        ExecuteMsg::SubmitCheckpoint { tx_id, payload_hash } => {
            execute_submit_checkpoint(deps, info, tx_id, payload_hash)
        }
        ExecuteMsg::ReceiveMessage { proof } => execute_receive_message(deps, env, proof),
        ExecuteMsg::SetLimits { max_quads, max_gas } => {
            execute_set_limits(deps, info, max_quads, max_gas)
        }
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
        ExecuteMsg::SetCheckpointOracle { oracle } => {
            execute_set_checkpoint_oracle(deps, info, oracle)
        }
        ExecuteMsg::SetCounterpart { counterpart } => {
            execute_set_counterpart(deps, info, counterpart)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::MaxAllowedQuads {} => to_json_binary(&query_max_allowed_quads(deps)?),
        QueryMsg::MaxGasOnChild {} => to_json_binary(&query_max_gas_on_child(deps)?),
        QueryMsg::IsPaused {} => to_json_binary(&query_is_paused(deps)?),
        QueryMsg::IsExitProcessed { tx_id } => {
            to_json_binary(&query_is_exit_processed(deps, tx_id)?)
        }
        QueryMsg::Checkpoint { tx_id } => to_json_binary(&query_checkpoint(deps, tx_id)?),
        QueryMsg::EscrowBalance {} => to_json_binary(&query_escrow_balance(deps, env)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
