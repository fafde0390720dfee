//! TSOSI Core Domain
//!
//! Pure domain types for the TSOSI reference-data client: entities and their
//! registry identifiers, countries, currencies, funding transfers and
//! partially-known dates.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod identifiers;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    Analytic,
    ConvertedAmount,
    // Reference data
    Country,
    Currency,
    CurrencyCode,
    Entity,
    EntityDetails,
    EntityId,
    InfrastructureDetails,
    // Funding records
    Transfer,
    TransferDetails,
    TransferId,
};
pub use identifiers::{Identifier, IdentifierKind, IdentifierRule, IdentifierRules, Registry};
pub use values::{
    DatePrecision, DateWithPrecision, Paginated, PointCoordinates, format_date, format_optional,
    format_raw, parse_calendar_date, parse_point_coordinates,
};
