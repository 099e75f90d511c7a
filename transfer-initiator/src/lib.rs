//! Transfer Initiator Contract - Cross-Chain Transfer Requests
//!
//! This contract takes custody of a CW20 deposit, derives the canonical
//! asset identifier and submits a structured transfer request to the
//! external bridge gateway, which owns relaying, proofs and the
//! destination-side mint/release.
//!
//! # Transfer Flow
//! 1. User grants this contract a CW20 allowance for `amount`
//! 2. User calls `Initiate`, `InitiateSimple` or `InitiateWithAssetId`
//!    (optionally attaching native funds for gateway costs)
//! 3. Contract pulls `amount` into custody and approves the gateway
//! 4. Contract submits the request to the gateway with the attached funds
//! 5. A `transfer_initiated` event is emitted for off-chain indexers
//!
//! The chain executes every step in one transaction: any failure, including
//! a gateway rejection, leaves no custody or allowance change behind.

pub mod address_codec;
pub mod contract;
pub mod custody;
pub mod error;
mod execute;
pub mod hash;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
pub use crate::execute::RequestParams;
pub use crate::hash::{compute_asset_id, keccak256};
pub use common::TransferRequest;
