//! Error types for the reference-data crate
//!
//! Missing reference data is not an error: lookups return `None`. Errors are
//! reserved for queries the caller asked for explicitly.

use thiserror::Error;
use tsosi_ports::FetchError;

#[derive(Error, Debug)]
pub enum RefDataError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Empty query")]
    EmptyQuery,

    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    #[error("Reference data unavailable: {0}")]
    Unavailable(&'static str),
}

pub type RefDataResult<T> = std::result::Result<T, RefDataError>;
