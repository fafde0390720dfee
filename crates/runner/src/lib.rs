//! TSOSI Runner
//!
//! Wires configuration, the HTTP gateway and the reference-data store into
//! the `tsosi` command-line client.
//!
//! ```text
//!  RunnerConfig ──► HttpGateway ──► ReferenceStore ──► Command ──► stdout
//! ```

pub mod commands;
pub mod config;
pub mod error;

pub use commands::{Command, run};
pub use config::RunnerConfig;
pub use error::{RunnerError, RunnerResult};

use std::sync::Arc;
use tsosi_gateway::HttpGateway;
use tsosi_refdata::ReferenceStore;

/// Store backed by the HTTP gateway described by `config`
pub fn connect(config: &RunnerConfig) -> RunnerResult<ReferenceStore> {
    let gateway = HttpGateway::new(&config.gateway)?;
    Ok(ReferenceStore::with_config(
        Arc::new(gateway),
        config.refdata.clone(),
    ))
}
