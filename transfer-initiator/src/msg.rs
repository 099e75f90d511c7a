//! Message types for the transfer initiator contract

use common::TransferRequest;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

pub use common::RegisteredTokenResponse;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Bridge gateway contract address
    pub gateway: String,
    /// CW20 token the gateway charges relayer fees in
    pub fee_token: String,
    /// Native denom accepted as attached value (e.g. "uluna")
    pub native_denom: String,
    /// Relayer fee used when the caller leaves it unset (zero is allowed)
    pub default_relayer_fee: Uint128,
    /// Admin allowed to change the default relayer fee.
    /// When omitted, anyone may change it.
    pub admin: Option<String>,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
///
/// Every initiate variant pulls `amount` of the CW20 `token` from the sender
/// (which must have granted this contract an allowance first) and forwards
/// any attached native funds to the gateway.
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Transfer Initiation
    // ========================================================================
    /// Bridge tokens, deriving the asset id from `symbol`
    Initiate {
        /// CW20 token contract to bridge
        token: String,
        /// Asset symbol registered with the gateway (e.g. "USDC")
        symbol: String,
        amount: Uint128,
        /// Destination account (EVM hex, 32-byte hex, or bech32)
        recipient: String,
        /// Opaque destination chain identifier
        dest_chain: Binary,
        /// Relayer fee; None uses the configured default
        relayer_fee: Option<Uint128>,
        /// Request timeout in seconds; None uses 24 hours
        timeout: Option<u64>,
        /// Redeem the underlying asset on the destination instead of minting
        redeem: bool,
    },

    /// Bridge tokens with the default relayer fee, default timeout, and redeem
    InitiateSimple {
        token: String,
        symbol: String,
        amount: Uint128,
        recipient: String,
        dest_chain: Binary,
    },

    /// Bridge tokens with a caller-supplied 32-byte asset id
    InitiateWithAssetId {
        token: String,
        asset_id: Binary,
        amount: Uint128,
        recipient: String,
        dest_chain: Binary,
        relayer_fee: Option<Uint128>,
        timeout: Option<u64>,
        redeem: bool,
    },

    // ========================================================================
    // Configuration
    // ========================================================================
    /// Overwrite the default relayer fee
    ///
    /// Authorization: Admin only, or anyone when no admin is configured
    SetDefaultRelayerFee { fee: Uint128 },
}

/// How a query names the bridged asset
#[cw_serde]
pub enum AssetRef {
    /// Human-readable symbol, hashed into the asset id
    Symbol(String),
    /// Raw 32-byte asset id
    Id(Binary),
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Returns the current default relayer fee
    #[returns(DefaultRelayerFeeResponse)]
    DefaultRelayerFee {},

    /// Returns transfer statistics
    #[returns(StatsResponse)]
    Stats {},

    /// Computes the asset id for a symbol
    #[returns(AssetIdResponse)]
    AssetId { symbol: String },

    /// Resolves an asset id to its token through the gateway registry
    #[returns(RegisteredTokenResponse)]
    RegisteredToken { asset_id: Binary },

    /// Returns the request that would be submitted to the gateway,
    /// without touching any balances
    #[returns(TransferRequest)]
    SimulateTransfer {
        asset: AssetRef,
        amount: Uint128,
        recipient: String,
        dest_chain: Binary,
        relayer_fee: Option<Uint128>,
        timeout: Option<u64>,
        redeem: bool,
        native_cost: Option<Uint128>,
    },
}

// ============================================================================
// Response Types
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub gateway: Addr,
    pub fee_token: Addr,
    pub native_denom: String,
    pub admin: Option<Addr>,
    pub default_relayer_fee: Uint128,
}

#[cw_serde]
pub struct DefaultRelayerFeeResponse {
    pub fee: Uint128,
}

#[cw_serde]
pub struct StatsResponse {
    pub total_transfers: u64,
}

#[cw_serde]
pub struct AssetIdResponse {
    /// 32-byte asset id
    pub asset_id: Binary,
    /// Same id as 0x-prefixed hex
    pub hex: String,
}
