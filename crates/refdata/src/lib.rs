//! TSOSI Reference Data
//!
//! In-memory reference data of one client session, loaded once from the
//! TSOSI API and shared by every consumer.
//!
//! ```text
//!                  ┌──────────────────────────────┐
//!   FetchGateway ─►│        ReferenceStore        │
//!                  │  SingleFlight per resource   │
//!                  │  ├─ EntityCatalog            │──► entity(), resolve()
//!                  │  │   (entities + identifiers)│
//!                  │  ├─ CountryTable             │──► country()
//!                  │  └─ CurrencyTable            │──► currency()
//!                  │  frozen infrastructures      │──► infrastructures()
//!                  └──────────────────────────────┘
//!                                 │
//!                                 ▼
//!                  queries: transfers, details, search ... (denormalized)
//! ```

pub mod catalog;
pub mod config;
pub mod currency;
pub mod denormalize;
pub mod error;
pub mod queries;
pub mod resolver;
pub mod sequencer;
pub mod single_flight;
pub mod snapshot;
pub mod store;

pub use catalog::EntityCatalog;
pub use config::RefDataConfig;
pub use currency::{
    CurrencySelection, DEFAULT_CURRENCY, ORIGINAL_CURRENCY, available_currencies,
    default_currency, original_currency,
};
pub use denormalize::{TransferRecord, denormalize};
pub use error::{RefDataError, RefDataResult};
pub use resolver::IdentifierIndex;
pub use single_flight::SingleFlight;
pub use snapshot::RefTable;
pub use store::{CountryTable, CurrencyTable, EntityList, ReferenceStore};
