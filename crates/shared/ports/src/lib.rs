//! TSOSI Ports
//!
//! Port definitions (traits) for the TSOSI reference-data client.
//! These define the boundary between the reference-data core and the
//! transport that actually reaches the API.

mod error;
mod fetch;

pub use error::{FetchError, FetchResult};
pub use fetch::{FetchGateway, FetchRequest, FetchTarget, decode};
