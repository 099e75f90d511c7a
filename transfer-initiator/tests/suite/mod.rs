//! Shared cw-multi-test setup for the transfer initiator integration tests.
//!
//! Deploys two real cw20-base tokens (the bridged token and the fee token),
//! the mock gateway and the initiator, and funds the test accounts.

#![allow(dead_code)]

use cosmwasm_std::{coin, Addr, Binary, Coin, Empty, Uint128};
use cw20::{AllowanceResponse, BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};

use mock_gateway::msg::{LastSubmissionResponse, SubmissionCountResponse};
use mock_gateway::state::Submission;
use transfer_initiator::msg::{ExecuteMsg, InstantiateMsg, QueryMsg, StatsResponse};
use transfer_initiator::{compute_asset_id, TransferRequest};

pub const RECIPIENT: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
pub const SYMBOL: &str = "TEST";
pub const USER_BALANCE: u128 = 1_000_000;
pub const DEFAULT_RELAYER_FEE: u128 = 25;

pub fn contract_initiator() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        transfer_initiator::contract::execute,
        transfer_initiator::contract::instantiate,
        transfer_initiator::contract::query,
    )
    .with_reply(transfer_initiator::contract::reply);
    Box::new(contract)
}

pub fn contract_gateway() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        mock_gateway::contract::execute,
        mock_gateway::contract::instantiate,
        mock_gateway::contract::query,
    );
    Box::new(contract)
}

pub fn contract_cw20() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

pub struct SuiteConfig {
    /// Gateway pulls the approved tokens (and relayer fee) like a real gateway
    pub pull_funds: bool,
    /// Initiator pays relayer fees in the bridged token itself
    pub fee_token_is_token: bool,
    /// Restrict the default fee setter to an admin
    pub with_admin: bool,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            pull_funds: false,
            fee_token_is_token: false,
            with_admin: true,
        }
    }
}

pub struct Suite {
    pub app: App,
    pub initiator: Addr,
    pub gateway: Addr,
    pub token: Addr,
    pub fee_token: Addr,
    pub admin: Addr,
    pub user: Addr,
}

pub fn setup() -> Suite {
    setup_with(SuiteConfig::default())
}

pub fn setup_with(cfg: SuiteConfig) -> Suite {
    let mut app = App::default();
    let admin = Addr::unchecked("terra1admin");
    let user = Addr::unchecked("terra1user");

    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(
                storage,
                &user,
                vec![coin(10_000_000_000, "uluna"), coin(1_000_000, "uusd")],
            )
            .unwrap();
    });

    let cw20_id = app.store_code(contract_cw20());
    let gateway_id = app.store_code(contract_gateway());
    let initiator_id = app.store_code(contract_initiator());

    let token = instantiate_cw20(&mut app, cw20_id, &admin, "Test Token", "TEST", &user);
    let fee_token = instantiate_cw20(&mut app, cw20_id, &admin, "Fee Token", "FEE", &admin);
    let initiator_fee_token = if cfg.fee_token_is_token {
        token.clone()
    } else {
        fee_token.clone()
    };

    let gateway = app
        .instantiate_contract(
            gateway_id,
            admin.clone(),
            &mock_gateway::msg::InstantiateMsg {
                fee_token: (cfg.pull_funds && !cfg.fee_token_is_token)
                    .then(|| fee_token.to_string()),
                pull_funds: cfg.pull_funds,
            },
            &[],
            "mock-gateway",
            None,
        )
        .unwrap();

    app.execute_contract(
        admin.clone(),
        gateway.clone(),
        &mock_gateway::msg::ExecuteMsg::RegisterAsset {
            asset_id: Binary::from(compute_asset_id(SYMBOL).to_vec()),
            token: token.to_string(),
        },
        &[],
    )
    .unwrap();

    let initiator = app
        .instantiate_contract(
            initiator_id,
            admin.clone(),
            &InstantiateMsg {
                gateway: gateway.to_string(),
                fee_token: initiator_fee_token.to_string(),
                native_denom: "uluna".to_string(),
                default_relayer_fee: Uint128::new(DEFAULT_RELAYER_FEE),
                admin: cfg.with_admin.then(|| admin.to_string()),
            },
            &[],
            "transfer-initiator",
            Some(admin.to_string()),
        )
        .unwrap();

    Suite {
        app,
        initiator,
        gateway,
        token,
        fee_token,
        admin,
        user,
    }
}

fn instantiate_cw20(
    app: &mut App,
    code_id: u64,
    admin: &Addr,
    name: &str,
    symbol: &str,
    holder: &Addr,
) -> Addr {
    app.instantiate_contract(
        code_id,
        admin.clone(),
        &cw20_base::msg::InstantiateMsg {
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimals: 6,
            initial_balances: vec![Cw20Coin {
                address: holder.to_string(),
                amount: Uint128::new(USER_BALANCE),
            }],
            mint: None,
            marketing: None,
        },
        &[],
        symbol,
        None,
    )
    .unwrap()
}

pub fn dest_chain() -> Binary {
    Binary::from(b"EVM-97".to_vec())
}

/// `recipient` left-padded to 32 bytes
pub fn padded_recipient() -> Binary {
    let mut bytes = [0u8; 32];
    bytes[12..].copy_from_slice(&hex::decode(&RECIPIENT[2..]).unwrap());
    Binary::from(bytes.to_vec())
}

/// Full-parameter initiate message for `amount` of TEST
pub fn initiate_msg(
    suite: &Suite,
    amount: u128,
    relayer_fee: Option<u128>,
    timeout: Option<u64>,
    redeem: bool,
) -> ExecuteMsg {
    ExecuteMsg::Initiate {
        token: suite.token.to_string(),
        symbol: SYMBOL.to_string(),
        amount: Uint128::new(amount),
        recipient: RECIPIENT.to_string(),
        dest_chain: dest_chain(),
        relayer_fee: relayer_fee.map(Uint128::new),
        timeout,
        redeem,
    }
}

impl Suite {
    /// User grants the initiator a CW20 allowance on the bridged token
    pub fn approve_initiator(&mut self, amount: u128) {
        self.app
            .execute_contract(
                self.user.clone(),
                self.token.clone(),
                &Cw20ExecuteMsg::IncreaseAllowance {
                    spender: self.initiator.to_string(),
                    amount: Uint128::new(amount),
                    expires: None,
                },
                &[],
            )
            .unwrap();
    }

    pub fn execute(&mut self, msg: &ExecuteMsg, funds: &[Coin]) -> anyhow::Result<AppResponse> {
        self.app
            .execute_contract(self.user.clone(), self.initiator.clone(), msg, funds)
    }

    /// Move fee tokens from the admin into the initiator's custody
    pub fn fund_initiator_fee_token(&mut self, amount: u128) {
        self.app
            .execute_contract(
                self.admin.clone(),
                self.fee_token.clone(),
                &Cw20ExecuteMsg::Transfer {
                    recipient: self.initiator.to_string(),
                    amount: Uint128::new(amount),
                },
                &[],
            )
            .unwrap();
    }

    pub fn balance(&self, token: &Addr, account: &Addr) -> Uint128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                token,
                &Cw20QueryMsg::Balance {
                    address: account.to_string(),
                },
            )
            .unwrap();
        res.balance
    }

    pub fn allowance(&self, token: &Addr, owner: &Addr, spender: &Addr) -> Uint128 {
        let res: AllowanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                token,
                &Cw20QueryMsg::Allowance {
                    owner: owner.to_string(),
                    spender: spender.to_string(),
                },
            )
            .unwrap();
        res.allowance
    }

    /// Allowance the initiator has granted the gateway on `token`
    pub fn gateway_allowance(&self, token: &Addr) -> Uint128 {
        self.allowance(token, &self.initiator, &self.gateway)
    }

    pub fn last_submission(&self) -> Option<Submission> {
        let res: LastSubmissionResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.gateway,
                &mock_gateway::msg::QueryMsg::LastSubmission {},
            )
            .unwrap();
        res.submission
    }

    pub fn submitted_request(&self) -> TransferRequest {
        self.last_submission()
            .expect("gateway received no submission")
            .request
    }

    pub fn submission_count(&self) -> u64 {
        let res: SubmissionCountResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.gateway,
                &mock_gateway::msg::QueryMsg::SubmissionCount {},
            )
            .unwrap();
        res.count
    }

    pub fn total_transfers(&self) -> u64 {
        let res: StatsResponse = self
            .app
            .wrap()
            .query_wasm_smart(&self.initiator, &QueryMsg::Stats {})
            .unwrap();
        res.total_transfers
    }

    pub fn reject_submissions(&mut self, reason: &str) {
        self.app
            .execute_contract(
                self.admin.clone(),
                self.gateway.clone(),
                &mock_gateway::msg::ExecuteMsg::SetRejection {
                    reason: Some(reason.to_string()),
                },
                &[],
            )
            .unwrap();
    }
}

/// Value of the first attribute named `key` in any event
pub fn attr(res: &AppResponse, event_type: &str, key: &str) -> Option<String> {
    res.events
        .iter()
        .filter(|e| e.ty == event_type)
        .flat_map(|e| e.attributes.iter())
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}
