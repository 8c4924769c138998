//! Execute handlers for the Grid Ledger contract.
//!
//! Atomicity: handlers write cells as they walk a batch and return an error
//! on the first bad cell; contract execution is transactional, so the error
//! reverts every prior write in the same call.

use cosmwasm_std::{Addr, DepsMut, MessageInfo, Response, Storage};

use common::{quads_from_arrays, validate_batch};

use crate::error::ContractError;
use crate::state::{CELLS, CONFIG, MINTERS, OPERATOR_APPROVALS};

/// Mint quads of previously unowned cells (minter only).
pub fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    to: String,
    sizes: Vec<u64>,
    xs: Vec<u64>,
    ys: Vec<u64>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let is_minter = MINTERS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or(false);
    if !is_minter && info.sender != config.admin {
        return Err(ContractError::NotMinter);
    }

    let to = deps.api.addr_validate(&to)?;
    let quads = quads_from_arrays(&sizes, &xs, &ys)?;
    validate_batch(&quads, config.grid_size)?;

    let mut cells = 0u64;
    for quad in &quads {
        for (x, y) in quad.cells() {
            if CELLS.may_load(deps.storage, (x, y))?.is_some() {
                return Err(ContractError::CellAlreadyOwned { x, y });
            }
            CELLS.save(deps.storage, (x, y), &to)?;
            cells += 1;
        }
    }

    Ok(Response::new()
        .add_attribute("method", "mint_quad_batch")
        .add_attribute("to", to)
        .add_attribute("quads", quads.len().to_string())
        .add_attribute("cells", cells.to_string()))
}

/// Transfer quads from `from` to `to`; every cell must be owned by `from`.
pub fn execute_transfer(
    deps: DepsMut,
    info: MessageInfo,
    from: String,
    to: String,
    sizes: Vec<u64>,
    xs: Vec<u64>,
    ys: Vec<u64>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let from = deps.api.addr_validate(&from)?;
    let to = deps.api.addr_validate(&to)?;
    ensure_owner_or_operator(deps.storage, &info.sender, &from)?;

    let quads = quads_from_arrays(&sizes, &xs, &ys)?;
    validate_batch(&quads, config.grid_size)?;

    let mut cells = 0u64;
    for quad in &quads {
        for (x, y) in quad.cells() {
            ensure_cell_owner(deps.storage, x, y, &from)?;
            CELLS.save(deps.storage, (x, y), &to)?;
            cells += 1;
        }
    }

    Ok(Response::new()
        .add_attribute("method", "batch_transfer_quad")
        .add_attribute("from", from)
        .add_attribute("to", to)
        .add_attribute("quads", quads.len().to_string())
        .add_attribute("cells", cells.to_string()))
}

/// Burn quads owned by `from`; cells transition back to unowned.
pub fn execute_burn(
    deps: DepsMut,
    info: MessageInfo,
    from: String,
    sizes: Vec<u64>,
    xs: Vec<u64>,
    ys: Vec<u64>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let from = deps.api.addr_validate(&from)?;
    ensure_owner_or_operator(deps.storage, &info.sender, &from)?;

    let quads = quads_from_arrays(&sizes, &xs, &ys)?;
    validate_batch(&quads, config.grid_size)?;

    let mut cells = 0u64;
    for quad in &quads {
        for (x, y) in quad.cells() {
            ensure_cell_owner(deps.storage, x, y, &from)?;
            CELLS.remove(deps.storage, (x, y));
            cells += 1;
        }
    }

    Ok(Response::new()
        .add_attribute("method", "burn_quad_batch")
        .add_attribute("from", from)
        .add_attribute("quads", quads.len().to_string())
        .add_attribute("cells", cells.to_string()))
}

/// Grant or revoke an operator for all of the sender's cells.
pub fn execute_set_approval_for_all(
    deps: DepsMut,
    info: MessageInfo,
    operator: String,
    approved: bool,
) -> Result<Response, ContractError> {
    let operator = deps.api.addr_validate(&operator)?;
    if approved {
        OPERATOR_APPROVALS.save(deps.storage, (&info.sender, &operator), &true)?;
    } else {
        OPERATOR_APPROVALS.remove(deps.storage, (&info.sender, &operator));
    }

    Ok(Response::new()
        .add_attribute("method", "set_approval_for_all")
        .add_attribute("owner", info.sender)
        .add_attribute("operator", operator)
        .add_attribute("approved", approved.to_string()))
}

/// Grant or revoke the minter role (admin only).
pub fn execute_set_minter(
    deps: DepsMut,
    info: MessageInfo,
    minter: String,
    enabled: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let minter = deps.api.addr_validate(&minter)?;
    if enabled {
        MINTERS.save(deps.storage, &minter, &true)?;
    } else {
        MINTERS.remove(deps.storage, &minter);
    }

    Ok(Response::new()
        .add_attribute("method", "set_minter")
        .add_attribute("minter", minter)
        .add_attribute("enabled", enabled.to_string()))
}

fn ensure_owner_or_operator(
    storage: &dyn Storage,
    sender: &Addr,
    from: &Addr,
) -> Result<(), ContractError> {
    if sender == from {
        return Ok(());
    }
    let approved = OPERATOR_APPROVALS
        .may_load(storage, (from, sender))?
        .unwrap_or(false);
    if !approved {
        return Err(ContractError::NotApproved {
            owner: from.to_string(),
        });
    }
    Ok(())
}

fn ensure_cell_owner(
    storage: &dyn Storage,
    x: u64,
    y: u64,
    expected: &Addr,
) -> Result<(), ContractError> {
    match CELLS.may_load(storage, (x, y))? {
        Some(owner) if owner == *expected => Ok(()),
        _ => Err(ContractError::NotOwner {
            x,
            y,
            expected: expected.to_string(),
        }),
    }
}
