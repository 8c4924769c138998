//! Grid Ledger contract - entry points.

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_burn, execute_mint, execute_set_approval_for_all, execute_set_minter, execute_transfer,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_balance_of, query_config, query_is_approved_for_all, query_is_minter, query_owner_of,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.grid_size == 0 {
        return Err(ContractError::GridSizeCannotBeZero);
    }

    let admin = deps.api.addr_validate(&msg.admin)?;
    let config = Config {
        admin,
        grid_size: msg.grid_size,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("grid_size", msg.grid_size.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::MintQuad { to, size, x, y } => {
            execute_mint(deps, info, to, vec![size], vec![x], vec![y])
        }
        ExecuteMsg::MintQuadBatch { to, sizes, xs, ys } => {
            execute_mint(deps, info, to, sizes, xs, ys)
        }
        ExecuteMsg::TransferQuad {
            from,
            to,
            size,
            x,
            y,
        } => execute_transfer(deps, info, from, to, vec![size], vec![x], vec![y]),
        ExecuteMsg::BatchTransferQuad {
            from,
            to,
            sizes,
            xs,
            ys,
        } => execute_transfer(deps, info, from, to, sizes, xs, ys),
        ExecuteMsg::BurnQuad { from, size, x, y } => {
            execute_burn(deps, info, from, vec![size], vec![x], vec![y])
        }
        ExecuteMsg::BurnQuadBatch {
            from,
            sizes,
            xs,
            ys,
        } => execute_burn(deps, info, from, sizes, xs, ys),
        ExecuteMsg::SetApprovalForAll { operator, approved } => {
            execute_set_approval_for_all(deps, info, operator, approved)
        }
        ExecuteMsg::SetMinter { minter, enabled } => {
            execute_set_minter(deps, info, minter, enabled)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::BalanceOf { owner } => to_json_binary(&query_balance_of(deps, owner)?),
        QueryMsg::OwnerOf { x, y } => to_json_binary(&query_owner_of(deps, x, y)?),
        QueryMsg::IsMinter { address } => to_json_binary(&query_is_minter(deps, address)?),
        QueryMsg::IsApprovedForAll { owner, operator } => {
            to_json_binary(&query_is_approved_for_all(deps, owner, operator)?)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
