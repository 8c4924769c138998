//! Admin operations: pause/unpause, limits, and relay wiring.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{Config, CONFIG};

/// Pause the tunnel (stops receives and new exits).
pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = load_admin(deps.storage, &info)?;
    config.paused = true;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("method", "pause"))
}

/// Unpause the tunnel.
pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = load_admin(deps.storage, &info)?;
    config.paused = false;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("method", "unpause"))
}

/// Set the batching limits; zero disables the tunnel and is rejected.
pub fn execute_set_limits(
    deps: DepsMut,
    info: MessageInfo,
    max_quads: u64,
    max_gas: u64,
) -> Result<Response, ContractError> {
    let mut config = load_admin(deps.storage, &info)?;
    if max_quads == 0 || max_gas == 0 {
        return Err(ContractError::LimitCannotBeZero);
    }

    config.max_allowed_quads = max_quads;
    config.max_gas_on_root = max_gas;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_limits")
        .add_attribute("max_allowed_quads", max_quads.to_string())
        .add_attribute("max_gas_on_root", max_gas.to_string()))
}

/// Set the relay address allowed to deliver root-chain messages.
pub fn execute_set_trusted_relay(
    deps: DepsMut,
    info: MessageInfo,
    relay: String,
) -> Result<Response, ContractError> {
    let mut config = load_admin(deps.storage, &info)?;
    let relay = deps.api.addr_validate(&relay)?;
    config.trusted_relay = Some(relay.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_trusted_relay")
        .add_attribute("relay", relay))
}

fn load_admin(
    storage: &dyn cosmwasm_std::Storage,
    info: &MessageInfo,
) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }
    Ok(config)
}
