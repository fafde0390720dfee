//! Selected display currency
//!
//! Transfers carry their amount converted to every supported currency. The
//! selection picks which one is displayed; the `_original` sentinel keeps
//! each transfer in its own currency.

use log::error;
use parking_lot::RwLock;
use std::sync::Arc;
use tsosi_core::{ConvertedAmount, Currency, CurrencyCode, Transfer};

use crate::error::{RefDataError, RefDataResult};
use crate::store::ReferenceStore;

pub const DEFAULT_CURRENCY: &str = "EUR";

/// Code of the "original currency" choice
pub const ORIGINAL_CURRENCY: &str = "_original";

pub fn default_currency() -> Currency {
    Currency::new(DEFAULT_CURRENCY, "Euro")
}

pub fn original_currency() -> Currency {
    Currency::new(ORIGINAL_CURRENCY, "Original currency")
}

/// Currencies a user can pick: the store currencies, then the original
/// currency choice.
pub async fn available_currencies(store: &ReferenceStore) -> RefDataResult<Vec<Arc<Currency>>> {
    let table = store
        .currencies()
        .await
        .ok_or(RefDataError::Unavailable("currencies"))?;

    let mut currencies: Vec<Arc<Currency>> = table.values().cloned().collect();
    currencies.push(Arc::new(original_currency()));
    Ok(currencies)
}

#[derive(Debug)]
pub struct CurrencySelection {
    selected: RwLock<Currency>,
}

impl Default for CurrencySelection {
    fn default() -> Self {
        Self {
            selected: RwLock::new(default_currency()),
        }
    }
}

impl CurrencySelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Currency {
        self.selected.read().clone()
    }

    pub fn selected_code(&self) -> CurrencyCode {
        self.selected.read().id.clone()
    }

    pub fn is_original(&self) -> bool {
        self.selected.read().id == ORIGINAL_CURRENCY
    }

    /// Select `code` among the available currencies
    pub async fn select(&self, store: &ReferenceStore, code: &str) -> RefDataResult<Currency> {
        let available = available_currencies(store).await?;
        let Some(currency) = available.iter().find(|c| c.id == code) else {
            error!("Unsupported currency: {}", code);
            return Err(RefDataError::UnsupportedCurrency(code.to_string()));
        };

        let currency = Currency::clone(currency);
        *self.selected.write() = currency.clone();
        Ok(currency)
    }

    /// Amount of `transfer` in the selected currency
    pub fn amount_of<'a>(&self, transfer: &'a Transfer) -> ConvertedAmount<'a> {
        transfer.amount_in(&self.selected_code())
    }
}
