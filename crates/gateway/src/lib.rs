//! TSOSI Gateway
//!
//! Fetch gateway layer for the TSOSI reference-data client. Provides:
//! - Adapters implementing the `FetchGateway` port (HTTP via reqwest,
//!   in-memory fixtures for tests and offline runs)
//! - Route names of the TSOSI API
//! - Gateway configuration (API and static roots)
//!
//! ## Architecture
//!
//! ```text
//!  TSOSI API / static files
//!         │
//!    ┌────▼────┐
//!    │ Gateway │  HttpGateway | InMemoryGateway
//!    └────┬────┘
//!         │ FetchResult (JSON value or FetchError)
//!    ┌────▼────┐
//!    │RefData  │
//!    │ Store   │
//!    └─────────┘
//! ```
//!
//! Every failure (connection, HTTP status, body decoding) is converted to a
//! `FetchError`; the gateway never retries and never panics.

pub mod adapters;
pub mod config;
pub mod error;
pub mod routes;

// Re-export commonly used types
pub use adapters::{HttpGateway, InMemoryGateway};
pub use config::GatewayConfig;
pub use error::ConfigError;
pub use routes::Routes;
pub use tsosi_ports::{FetchError, FetchGateway, FetchRequest, FetchResult, FetchTarget};
