//! Initialization sequencer
//!
//! ```text
//!   initialize() ──┬── load_entities()   ──┐
//!                  ├── load_countries()  ──┼── all settled
//!                  └── load_currencies() ──┘        │
//!                                                   ▼
//!                              freeze infrastructures, mark ready
//! ```
//!
//! Every caller of `initialize()` shares the one run and its outcome. The
//! loads go through the same single-flight cells as the lazy getters, so a
//! getter that started a load before initialization is simply joined.

use log::{info, warn};

use crate::store::ReferenceStore;

impl ReferenceStore {
    /// Load every reference resource once and mark the store ready.
    ///
    /// Returns `true` only if all three loads succeeded. A failed load does
    /// not stop the others; its resource stays unavailable.
    pub async fn initialize(&self) -> bool {
        *self.initialization.get_or_init(|| self.run_initialization()).await
    }

    async fn run_initialization(&self) -> bool {
        info!("Initializing reference data");

        let (entities, countries, currencies) = tokio::join!(
            self.load_entities(),
            self.load_countries(),
            self.load_currencies(),
        );

        let failed: Vec<&str> = [
            ("entities", entities.is_some()),
            ("countries", countries.is_some()),
            ("currencies", currencies.is_some()),
        ]
        .into_iter()
        .filter(|(_, loaded)| !loaded)
        .map(|(name, _)| name)
        .collect();

        let frozen = self.infrastructures.get_or_init(|| self.shuffled_recipients());
        self.mark_ready();

        if failed.is_empty() {
            info!(
                "Reference data ready ({} infrastructures)",
                frozen.len()
            );
            true
        } else {
            warn!("Reference data ready with missing resources: {:?}", failed);
            false
        }
    }
}
