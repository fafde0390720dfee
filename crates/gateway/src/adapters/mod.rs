//! Fetch gateway adapters
//!
//! Adapters implement the `FetchGateway` port: `HttpGateway` talks to the
//! real API, `InMemoryGateway` serves fixtures from memory.

pub mod http;
pub mod memory;

pub use http::HttpGateway;
pub use memory::InMemoryGateway;
