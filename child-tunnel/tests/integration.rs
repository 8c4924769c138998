//! Integration tests for the child tunnel using cw-multi-test.
//!
//! These tests verify the trusted receive (mint) path, its replay
//! protection, and the burn-and-record exit path.

use cosmwasm_std::{Addr, Binary};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use child_tunnel::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, MessageProcessedResponse, PendingExitResponse,
    QueryMsg, StatsResponse,
};
use common::{encode_transfer, hex_to_bytes32, Quad};
use land::msg::BalanceResponse;

// ============================================================================
// Test Setup
// ============================================================================

const GRID_SIZE: u64 = 408;

fn contract_land() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        land::contract::execute,
        land::contract::instantiate,
        land::contract::query,
    );
    Box::new(contract)
}

fn contract_tunnel() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        child_tunnel::contract::execute,
        child_tunnel::contract::instantiate,
        child_tunnel::contract::query,
    );
    Box::new(contract)
}

struct TestEnv {
    app: App,
    land_addr: Addr,
    tunnel_addr: Addr,
    admin: Addr,
    relay: Addr,
    user: Addr,
}

/// Instantiate the ledger and the tunnel, and grant the tunnel the minter
/// role it needs for receives.
fn setup() -> TestEnv {
    let mut app = App::default();

    let admin = Addr::unchecked("admin");
    let relay = Addr::unchecked("relay");
    let user = Addr::unchecked("user");

    let land_code = app.store_code(contract_land());
    let tunnel_code = app.store_code(contract_tunnel());

    let land_addr = app
        .instantiate_contract(
            land_code,
            admin.clone(),
            &land::msg::InstantiateMsg {
                admin: admin.to_string(),
                grid_size: GRID_SIZE,
            },
            &[],
            "land",
            Some(admin.to_string()),
        )
        .unwrap();

    let tunnel_addr = app
        .instantiate_contract(
            tunnel_code,
            admin.clone(),
            &InstantiateMsg {
                admin: admin.to_string(),
                land: land_addr.to_string(),
                trusted_relay: Some(relay.to_string()),
                max_allowed_quads: 144,
                max_gas_on_root: 500,
            },
            &[],
            "child-tunnel",
            Some(admin.to_string()),
        )
        .unwrap();

    app.execute_contract(
        admin.clone(),
        land_addr.clone(),
        &land::msg::ExecuteMsg::SetMinter {
            minter: tunnel_addr.to_string(),
            enabled: true,
        },
        &[],
    )
    .unwrap();

    TestEnv {
        app,
        land_addr,
        tunnel_addr,
        admin,
        relay,
        user,
    }
}

fn attribute(res: &AppResponse, key: &str) -> String {
    res.events
        .iter()
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
        .unwrap_or_else(|| panic!("{} attribute not found", key))
}

fn balance_of(env: &TestEnv, owner: &Addr) -> u64 {
    let res: BalanceResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.land_addr,
            &land::msg::QueryMsg::BalanceOf {
                owner: owner.to_string(),
            },
        )
        .unwrap();
    res.balance
}

/// A root-chain transfer message carrying one 12x12 quad at the origin.
fn origin_quad_payload(holder: &str) -> Binary {
    let quads = vec![Quad::new(12, 0, 0)];
    Binary::from(encode_transfer(holder, &quads, &[]))
}

/// Deliver a message and mint a 12x12 quad at the origin to the user, then
/// approve the tunnel as the user's operator for exits.
fn seed_user_quad(env: &mut TestEnv) {
    env.app
        .execute_contract(
            env.relay.clone(),
            env.tunnel_addr.clone(),
            &ExecuteMsg::ReceiveFromRoot {
                message_id: 0,
                payload: origin_quad_payload(env.user.as_str()),
            },
            &[],
        )
        .unwrap();

    env.app
        .execute_contract(
            env.user.clone(),
            env.land_addr.clone(),
            &land::msg::ExecuteMsg::SetApprovalForAll {
                operator: env.tunnel_addr.to_string(),
                approved: true,
            },
            &[],
        )
        .unwrap();
}

// ============================================================================
// Instantiation
// ============================================================================

#[test]
fn test_instantiate() {
    let env = setup();

    let config: ConfigResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.tunnel_addr, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.admin, env.admin);
    assert_eq!(config.land, env.land_addr);
    assert_eq!(config.trusted_relay, Some(env.relay.clone()));
    assert!(!config.paused);
    assert_eq!(config.max_allowed_quads, 144);
    assert_eq!(config.max_gas_on_root, 500);
}

#[test]
fn test_instantiate_zero_limit_rejected() {
    let mut env = setup();
    let tunnel_code = env.app.store_code(contract_tunnel());

    let res = env.app.instantiate_contract(
        tunnel_code,
        env.admin.clone(),
        &InstantiateMsg {
            admin: env.admin.to_string(),
            land: env.land_addr.to_string(),
            trusted_relay: None,
            max_allowed_quads: 144,
            max_gas_on_root: 0,
        },
        &[],
        "child-tunnel",
        None,
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("max allowed value cannot be zero"),
        "Expected zero-limit error, got: {}",
        err_str
    );
}

// ============================================================================
// Receive
// ============================================================================

#[test]
fn test_receive_mints_to_holder() {
    let mut env = setup();

    let res = env
        .app
        .execute_contract(
            env.relay.clone(),
            env.tunnel_addr.clone(),
            &ExecuteMsg::ReceiveFromRoot {
                message_id: 7,
                payload: origin_quad_payload(env.user.as_str()),
            },
            &[],
        )
        .unwrap();
    assert_eq!(attribute(&res, "message_id"), "7");
    assert_eq!(attribute(&res, "holder"), env.user.to_string());

    assert_eq!(balance_of(&env, &env.user), 144);

    let processed: MessageProcessedResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.tunnel_addr,
            &QueryMsg::IsMessageProcessed { message_id: 7 },
        )
        .unwrap();
    assert!(processed.processed);

    let stats: StatsResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.tunnel_addr, &QueryMsg::Stats {})
        .unwrap();
    assert_eq!(stats.total_received_batches, 1);
}

#[test]
fn test_receive_rejects_non_relay_caller() {
    let mut env = setup();

    let res = env.app.execute_contract(
        env.user.clone(),
        env.tunnel_addr.clone(),
        &ExecuteMsg::ReceiveFromRoot {
            message_id: 0,
            payload: origin_quad_payload(env.user.as_str()),
        },
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("counterpart relay"),
        "Expected relay error, got: {}",
        err_str
    );
    assert_eq!(balance_of(&env, &env.user), 0);
}

#[test]
fn test_receive_rejects_when_relay_unset() {
    let mut env = setup();
    let tunnel_code = env.app.store_code(contract_tunnel());

    let unwired = env
        .app
        .instantiate_contract(
            tunnel_code,
            env.admin.clone(),
            &InstantiateMsg {
                admin: env.admin.to_string(),
                land: env.land_addr.to_string(),
                trusted_relay: None,
                max_allowed_quads: 144,
                max_gas_on_root: 500,
            },
            &[],
            "child-tunnel",
            None,
        )
        .unwrap();

    let res = env.app.execute_contract(
        env.relay.clone(),
        unwired.clone(),
        &ExecuteMsg::ReceiveFromRoot {
            message_id: 0,
            payload: origin_quad_payload(env.user.as_str()),
        },
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("not configured"),
        "Expected unconfigured relay error, got: {}",
        err_str
    );

    // Wiring the relay afterwards makes the same delivery succeed
    env.app
        .execute_contract(
            env.admin.clone(),
            env.land_addr.clone(),
            &land::msg::ExecuteMsg::SetMinter {
                minter: unwired.to_string(),
                enabled: true,
            },
            &[],
        )
        .unwrap();
    env.app
        .execute_contract(
            env.admin.clone(),
            unwired.clone(),
            &ExecuteMsg::SetTrustedRelay {
                relay: env.relay.to_string(),
            },
            &[],
        )
        .unwrap();
    env.app
        .execute_contract(
            env.relay.clone(),
            unwired,
            &ExecuteMsg::ReceiveFromRoot {
                message_id: 0,
                payload: origin_quad_payload("someoneelse"),
            },
            &[],
        )
        .unwrap();
}

#[test]
fn test_receive_rejects_replay() {
    let mut env = setup();

    env.app
        .execute_contract(
            env.relay.clone(),
            env.tunnel_addr.clone(),
            &ExecuteMsg::ReceiveFromRoot {
                message_id: 0,
                payload: origin_quad_payload(env.user.as_str()),
            },
            &[],
        )
        .unwrap();

    // Same id again, even with a different payload, is rejected
    let res = env.app.execute_contract(
        env.relay.clone(),
        env.tunnel_addr.clone(),
        &ExecuteMsg::ReceiveFromRoot {
            message_id: 0,
            payload: Binary::from(encode_transfer(
                env.user.as_str(),
                &[Quad::new(3, 24, 24)],
                &[],
            )),
        },
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("already been applied"),
        "Expected replay error, got: {}",
        err_str
    );
    assert_eq!(balance_of(&env, &env.user), 144);
}

#[test]
fn test_receive_rejects_truncated_payload() {
    let mut env = setup();

    let payload = origin_quad_payload(env.user.as_str());
    let truncated = Binary::from(&payload.as_slice()[..payload.len() - 4]);

    let res = env.app.execute_contract(
        env.relay.clone(),
        env.tunnel_addr.clone(),
        &ExecuteMsg::ReceiveFromRoot {
            message_id: 0,
            payload: truncated,
        },
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("malformed message"),
        "Expected malformed message error, got: {}",
        err_str
    );
}

#[test]
fn test_receive_rejects_foreign_holder_address() {
    let mut env = setup();

    // Uppercase is not a valid address on this chain
    let res = env.app.execute_contract(
        env.relay.clone(),
        env.tunnel_addr.clone(),
        &ExecuteMsg::ReceiveFromRoot {
            message_id: 0,
            payload: origin_quad_payload("NotAnAddress"),
        },
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("not a valid address"),
        "Expected holder address error, got: {}",
        err_str
    );
}

#[test]
fn test_receive_rejected_while_paused() {
    let mut env = setup();

    env.app
        .execute_contract(
            env.admin.clone(),
            env.tunnel_addr.clone(),
            &ExecuteMsg::Pause {},
            &[],
        )
        .unwrap();

    let res = env.app.execute_contract(
        env.relay.clone(),
        env.tunnel_addr.clone(),
        &ExecuteMsg::ReceiveFromRoot {
            message_id: 0,
            payload: origin_quad_payload(env.user.as_str()),
        },
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("paused"),
        "Expected paused error, got: {}",
        err_str
    );
}

// ============================================================================
// Exit
// ============================================================================

#[test]
fn test_exit_burns_and_records_pending() {
    let mut env = setup();
    seed_user_quad(&mut env);

    let res = env
        .app
        .execute_contract(
            env.user.clone(),
            env.tunnel_addr.clone(),
            &ExecuteMsg::BatchTransferQuadToRoot {
                to: "rootuser".to_string(),
                sizes: vec![12],
                xs: vec![0],
                ys: vec![0],
                data: Binary::default(),
            },
            &[],
        )
        .unwrap();
    assert_eq!(attribute(&res, "nonce"), "0");
    assert_eq!(attribute(&res, "holder"), "rootuser");

    // Burned, not escrowed
    assert_eq!(balance_of(&env, &env.user), 0);
    assert_eq!(balance_of(&env, &env.tunnel_addr), 0);

    let tx_id = hex_to_bytes32(&attribute(&res, "tx_id")).unwrap();
    let pending: PendingExitResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.tunnel_addr,
            &QueryMsg::PendingExit {
                tx_id: Binary::from(tx_id.to_vec()),
            },
        )
        .unwrap();
    let exit = pending.exit.expect("pending exit not recorded");
    assert_eq!(exit.holder, "rootuser");
    assert_eq!(exit.quads, vec![Quad::new(12, 0, 0)]);
    assert_eq!(exit.nonce, 0);

    let stats: StatsResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.tunnel_addr, &QueryMsg::Stats {})
        .unwrap();
    assert_eq!(stats.total_exits, 1);
}

#[test]
fn test_exit_nonces_produce_distinct_tx_ids() {
    let mut env = setup();
    seed_user_quad(&mut env);
    env.app
        .execute_contract(
            env.relay.clone(),
            env.tunnel_addr.clone(),
            &ExecuteMsg::ReceiveFromRoot {
                message_id: 1,
                payload: Binary::from(encode_transfer(
                    env.user.as_str(),
                    &[Quad::new(12, 12, 0)],
                    &[],
                )),
            },
            &[],
        )
        .unwrap();

    let mut tx_ids = Vec::new();
    for x in [0u64, 12] {
        let res = env
            .app
            .execute_contract(
                env.user.clone(),
                env.tunnel_addr.clone(),
                &ExecuteMsg::BatchTransferQuadToRoot {
                    to: "rootuser".to_string(),
                    sizes: vec![12],
                    xs: vec![x],
                    ys: vec![0],
                    data: Binary::default(),
                },
                &[],
            )
            .unwrap();
        tx_ids.push(attribute(&res, "tx_id"));
    }
    assert_ne!(tx_ids[0], tx_ids[1]);
}

#[test]
fn test_exit_without_approval_reverts_whole_transaction() {
    let mut env = setup();
    env.app
        .execute_contract(
            env.relay.clone(),
            env.tunnel_addr.clone(),
            &ExecuteMsg::ReceiveFromRoot {
                message_id: 0,
                payload: origin_quad_payload(env.user.as_str()),
            },
            &[],
        )
        .unwrap();
    // No SetApprovalForAll; the ledger refuses the burn

    let res = env.app.execute_contract(
        env.user.clone(),
        env.tunnel_addr.clone(),
        &ExecuteMsg::BatchTransferQuadToRoot {
            to: "rootuser".to_string(),
            sizes: vec![12],
            xs: vec![0],
            ys: vec![0],
            data: Binary::default(),
        },
        &[],
    );
    assert!(res.is_err());
    assert_eq!(balance_of(&env, &env.user), 144);

    // The pending exit record and nonce bump were reverted with the burn
    let stats: StatsResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.tunnel_addr, &QueryMsg::Stats {})
        .unwrap();
    assert_eq!(stats.total_exits, 0);
}

#[test]
fn test_exit_rejected_while_paused() {
    let mut env = setup();
    seed_user_quad(&mut env);

    env.app
        .execute_contract(
            env.admin.clone(),
            env.tunnel_addr.clone(),
            &ExecuteMsg::Pause {},
            &[],
        )
        .unwrap();

    let res = env.app.execute_contract(
        env.user.clone(),
        env.tunnel_addr.clone(),
        &ExecuteMsg::BatchTransferQuadToRoot {
            to: "rootuser".to_string(),
            sizes: vec![12],
            xs: vec![0],
            ys: vec![0],
            data: Binary::default(),
        },
        &[],
    );
    assert!(res.is_err());
}

#[test]
fn test_exit_gas_ceiling_enforced() {
    let mut env = setup();
    seed_user_quad(&mut env);

    // 32 + 144 = 176 over a ceiling of 100
    env.app
        .execute_contract(
            env.admin.clone(),
            env.tunnel_addr.clone(),
            &ExecuteMsg::SetLimits {
                max_quads: 144,
                max_gas: 100,
            },
            &[],
        )
        .unwrap();

    let res = env.app.execute_contract(
        env.user.clone(),
        env.tunnel_addr.clone(),
        &ExecuteMsg::BatchTransferQuadToRoot {
            to: "rootuser".to_string(),
            sizes: vec![12],
            xs: vec![0],
            ys: vec![0],
            data: Binary::default(),
        },
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("gas"),
        "Expected gas limit error, got: {}",
        err_str
    );
    assert_eq!(balance_of(&env, &env.user), 144);
}

#[test]
fn test_exit_batch_limit_enforced() {
    let mut env = setup();
    seed_user_quad(&mut env);

    env.app
        .execute_contract(
            env.admin.clone(),
            env.tunnel_addr.clone(),
            &ExecuteMsg::SetLimits {
                max_quads: 1,
                max_gas: 500,
            },
            &[],
        )
        .unwrap();

    let res = env.app.execute_contract(
        env.user.clone(),
        env.tunnel_addr.clone(),
        &ExecuteMsg::BatchTransferQuadToRoot {
            to: "rootuser".to_string(),
            sizes: vec![3, 3],
            xs: vec![0, 3],
            ys: vec![0, 0],
            data: Binary::default(),
        },
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(
        err_str.contains("exceeds the maximum"),
        "Expected batch size error, got: {}",
        err_str
    );
}
