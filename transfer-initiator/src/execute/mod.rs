//! Execute handlers for the transfer initiator contract.
//!
//! - `initiate` - the three initiate entry points and the shared protocol routine
//! - `config` - default relayer fee management

mod config;
mod initiate;

pub use config::*;
pub use initiate::*;
