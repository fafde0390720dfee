mod analytic;
mod country;
mod currency;
mod entity;
mod transfer;

pub use analytic::Analytic;
pub use country::Country;
pub use currency::{Currency, CurrencyCode};
pub use entity::{Entity, EntityDetails, EntityId, InfrastructureDetails};
pub use transfer::{ConvertedAmount, Transfer, TransferDetails, TransferId};
