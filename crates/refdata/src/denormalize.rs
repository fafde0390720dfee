//! Transfer denormalization
//!
//! Transfers arrive with entity IDs only. Denormalizing swaps those IDs for
//! the cached entities themselves and parses every date of the record.

use std::sync::Arc;
use tsosi_core::{DateWithPrecision, EntityId, Transfer, TransferDetails};

use crate::catalog::EntityCatalog;
use crate::store::ReferenceStore;

/// A record carrying a transfer
pub trait TransferRecord {
    fn transfer(&self) -> &Transfer;

    fn transfer_mut(&mut self) -> &mut Transfer;

    /// Dates beyond `date_clc` that the record carries
    fn supplementary_dates(&self) -> Vec<&DateWithPrecision> {
        Vec::new()
    }
}

impl TransferRecord for Transfer {
    fn transfer(&self) -> &Transfer {
        self
    }

    fn transfer_mut(&mut self) -> &mut Transfer {
        self
    }
}

impl TransferRecord for TransferDetails {
    fn transfer(&self) -> &Transfer {
        &self.transfer
    }

    fn transfer_mut(&mut self) -> &mut Transfer {
        &mut self.transfer
    }

    fn supplementary_dates(&self) -> Vec<&DateWithPrecision> {
        self.extra_dates().into_iter().flatten().collect()
    }
}

/// Attach entities from `catalog` and parse the record dates.
///
/// Entities missing from the catalog are left unset; the record is kept.
/// Running this again on the same record changes nothing.
pub fn denormalize<R: TransferRecord>(record: &mut R, catalog: Option<&EntityCatalog>) {
    let lookup = |id: &EntityId| catalog.and_then(|c| c.get(id)).map(Arc::clone);

    let transfer = record.transfer_mut();
    transfer.emitter = lookup(&transfer.emitter_id);
    transfer.recipient = lookup(&transfer.recipient_id);
    transfer.agent = transfer.agent_id.as_ref().and_then(lookup);

    let transfer = record.transfer();
    transfer.date_clc.parse();
    transfer.date_clc.formatted();
    for date in record.supplementary_dates() {
        date.parse();
        date.formatted();
    }
}

impl ReferenceStore {
    /// Denormalize `record` against the cached entities
    pub fn attach<R: TransferRecord>(&self, record: &mut R) {
        let catalog = self.entity_catalog();
        denormalize(record, catalog.as_deref());
    }

    pub fn attach_all<R: TransferRecord>(&self, records: &mut [R]) {
        let catalog = self.entity_catalog();
        for record in records.iter_mut() {
            denormalize(record, catalog.as_deref());
        }
    }
}
