//! Common - Shared Gateway Interface for the Transfer Initiator Contracts
//!
//! This package defines the narrow interface between the transfer initiator
//! and the external bridge gateway, so that both the initiator and any
//! gateway implementation (including the test gateway) agree on the wire format.

pub mod gateway;

pub use gateway::{
    GatewayContract, GatewayExecuteMsg, GatewayQueryMsg, RegisteredTokenResponse, TransferRequest,
};
