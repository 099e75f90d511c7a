//! Mock bridge gateway used to exercise the transfer initiator.
//!
//! Implements the gateway interface from `common::gateway` and adds
//! test controls: asset registration, a switchable rejection, and
//! optional pulling of the approved tokens.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;
