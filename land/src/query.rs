//! Query handlers for the Grid Ledger contract.

use cosmwasm_std::{Deps, Order, StdResult};

use crate::msg::{
    BalanceResponse, ConfigResponse, IsApprovedResponse, IsMinterResponse, OwnerOfResponse,
};
use crate::state::{CELLS, CONFIG, MINTERS, OPERATOR_APPROVALS};

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        grid_size: config.grid_size,
    })
}

/// Query the number of cells owned by an address.
///
/// Derived by scanning the cell map rather than kept as a counter, so it
/// cannot diverge from the ownership records.
pub fn query_balance_of(deps: Deps, owner: String) -> StdResult<BalanceResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let mut balance = 0u64;
    for item in CELLS.range(deps.storage, None, None, Order::Ascending) {
        let (_, cell_owner) = item?;
        if cell_owner == owner {
            balance += 1;
        }
    }
    Ok(BalanceResponse { balance })
}

/// Query the owner of a single cell; never-minted cells answer `None`.
pub fn query_owner_of(deps: Deps, x: u64, y: u64) -> StdResult<OwnerOfResponse> {
    let owner = CELLS.may_load(deps.storage, (x, y))?;
    Ok(OwnerOfResponse { owner })
}

/// Query whether an address holds the minter role.
pub fn query_is_minter(deps: Deps, address: String) -> StdResult<IsMinterResponse> {
    let address = deps.api.addr_validate(&address)?;
    let is_minter = MINTERS.may_load(deps.storage, &address)?.unwrap_or(false);
    Ok(IsMinterResponse { is_minter })
}

/// Query whether `operator` is approved for all of `owner`'s cells.
pub fn query_is_approved_for_all(
    deps: Deps,
    owner: String,
    operator: String,
) -> StdResult<IsApprovedResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let operator = deps.api.addr_validate(&operator)?;
    let approved = OPERATOR_APPROVALS
        .may_load(deps.storage, (&owner, &operator))?
        .unwrap_or(false);
    Ok(IsApprovedResponse { approved })
}
