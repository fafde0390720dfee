use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::{CurrencyCode, Entity, EntityId};
use crate::values::DateWithPrecision;

/// Unique identifier for a transfer
pub type TransferId = Uuid;

/// Funding transfer between two entities, optionally through an agent
///
/// The API only sends entity IDs. `emitter`, `recipient` and `agent` are
/// filled in by denormalization with the cached entities themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transfer {
    pub id: TransferId,
    pub emitter_id: EntityId,
    pub recipient_id: EntityId,
    #[serde(default)]
    pub agent_id: Option<EntityId>,
    /// Amount in the original currency, hidden for some recipients
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<CurrencyCode>,
    /// Amount converted to each supported currency
    #[serde(default)]
    pub amounts_clc: Option<HashMap<CurrencyCode, Decimal>>,
    pub date_clc: DateWithPrecision,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(skip)]
    pub emitter: Option<Arc<Entity>>,
    #[serde(skip)]
    pub recipient: Option<Arc<Entity>>,
    #[serde(skip)]
    pub agent: Option<Arc<Entity>>,
}

/// Amount and currency picked for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedAmount<'a> {
    pub amount: Option<Decimal>,
    pub currency: Option<&'a str>,
}

impl Transfer {
    pub fn new(
        emitter_id: EntityId,
        recipient_id: EntityId,
        agent_id: Option<EntityId>,
        date_clc: DateWithPrecision,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            emitter_id,
            recipient_id,
            agent_id,
            amount: None,
            currency: None,
            amounts_clc: None,
            date_clc,
            description: None,
            source: None,
            emitter: None,
            recipient: None,
            agent: None,
        }
    }

    /// Amount expressed in `currency_code` when the transfer carries that
    /// conversion, otherwise the original amount and currency.
    pub fn amount_in(&self, currency_code: &str) -> ConvertedAmount<'_> {
        match self
            .amounts_clc
            .as_ref()
            .and_then(|amounts| amounts.get_key_value(currency_code))
        {
            Some((currency, amount)) => ConvertedAmount {
                amount: Some(*amount),
                currency: Some(currency.as_str()),
            },
            None => ConvertedAmount {
                amount: self.amount,
                currency: self.currency.as_deref(),
            },
        }
    }

    /// True once emitter and recipient are attached
    pub fn is_denormalized(&self) -> bool {
        self.emitter.is_some() && self.recipient.is_some()
    }
}

/// Full transfer record, as served by the transfer detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferDetails {
    #[serde(flatten)]
    pub transfer: Transfer,
    #[serde(default)]
    pub emitter_sub: Option<String>,
    #[serde(default)]
    pub date_agreement: Option<DateWithPrecision>,
    #[serde(default)]
    pub date_invoice: Option<DateWithPrecision>,
    #[serde(default)]
    pub date_payment_recipient: Option<DateWithPrecision>,
    #[serde(default)]
    pub date_payment_emitter: Option<DateWithPrecision>,
    #[serde(default)]
    pub date_start: Option<DateWithPrecision>,
    #[serde(default)]
    pub date_end: Option<DateWithPrecision>,
    /// Source record as ingested, free-form
    #[serde(default)]
    pub raw_data: Map<String, Value>,
}

impl TransferDetails {
    /// Every optional date of the record, in display order
    pub fn extra_dates(&self) -> [Option<&DateWithPrecision>; 6] {
        [
            self.date_agreement.as_ref(),
            self.date_invoice.as_ref(),
            self.date_payment_recipient.as_ref(),
            self.date_payment_emitter.as_ref(),
            self.date_start.as_ref(),
            self.date_end.as_ref(),
        ]
    }
}
