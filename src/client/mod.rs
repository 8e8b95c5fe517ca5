//! Provides the lifecycle handlers invoked by the cluster manager.
//!
//! Includes:
//! - `config_client`: install and configure handlers plus their dispatch.

mod config_client;

pub use config_client::*;
