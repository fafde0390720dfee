//! Reference-data store
//!
//! Owns the entity, country and currency snapshots of one client session.
//! Each resource is loaded at most once through a single-flight cell shared
//! by the initialization sequencer and the lazy getters. Once the sequencer
//! has settled every load the store is ready and getters answer from the
//! cells directly.

use log::{info, warn};
use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use tokio::sync::OnceCell;
use tsosi_core::{Country, Currency, CurrencyCode, Entity, EntityId};
use tsosi_gateway::Routes;
use tsosi_ports::{FetchGateway, FetchRequest, decode};

use crate::catalog::EntityCatalog;
use crate::config::RefDataConfig;
use crate::resolver::IdentifierIndex;
use crate::single_flight::SingleFlight;
use crate::snapshot::RefTable;

/// Countries keyed by uppercase ISO code
pub type CountryTable = RefTable<String, Country>;

/// Currencies keyed by code
pub type CurrencyTable = RefTable<CurrencyCode, Currency>;

/// Shared view of entities, in display order
pub type EntityList = Arc<[Arc<Entity>]>;

/// `None` marks a load that failed
type Loaded<T> = Option<Arc<T>>;

pub struct ReferenceStore {
    pub(crate) gateway: Arc<dyn FetchGateway>,
    entities: SingleFlight<&'static str, Loaded<EntityCatalog>>,
    countries: SingleFlight<&'static str, Loaded<CountryTable>>,
    currencies: SingleFlight<&'static str, Loaded<CurrencyTable>>,
    /// Outcome of the one initialization run
    pub(crate) initialization: OnceCell<bool>,
    ready: AtomicBool,
    /// Frozen infrastructures order
    pub(crate) infrastructures: OnceLock<EntityList>,
    rng: Mutex<StdRng>,
}

impl ReferenceStore {
    pub fn new(gateway: Arc<dyn FetchGateway>) -> Self {
        Self::with_config(gateway, RefDataConfig::default())
    }

    pub fn with_config(gateway: Arc<dyn FetchGateway>, config: RefDataConfig) -> Self {
        let rng = match config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            gateway,
            entities: SingleFlight::new(),
            countries: SingleFlight::new(),
            currencies: SingleFlight::new(),
            initialization: OnceCell::new(),
            ready: AtomicBool::new(false),
            infrastructures: OnceLock::new(),
            rng: Mutex::new(rng),
        }
    }

    /// True once initialization settled every load
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub(crate) fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    // ------------------------------------------------------------------
    // Resource getters
    // ------------------------------------------------------------------

    /// Entity catalog, loading it if no one did yet
    pub async fn entities(&self) -> Option<Arc<EntityCatalog>> {
        if self.is_ready() {
            return self.entity_catalog();
        }
        self.load_entities().await
    }

    /// Country table, loading it if no one did yet
    pub async fn countries(&self) -> Option<Arc<CountryTable>> {
        if self.is_ready() {
            return self.country_table();
        }
        self.load_countries().await
    }

    /// Currency table, loading it if no one did yet
    pub async fn currencies(&self) -> Option<Arc<CurrencyTable>> {
        if self.is_ready() {
            return self.currency_table();
        }
        self.load_currencies().await
    }

    pub(crate) async fn load_entities(&self) -> Option<Arc<EntityCatalog>> {
        self.entities
            .get_or_fetch(Routes::ENTITIES_ALL, || async {
                let records: Vec<Entity> = self.fetch(Routes::entities_all(), "entities").await?;
                let catalog = EntityCatalog::build(records);
                info!("{} entities", catalog.len());
                Some(Arc::new(catalog))
            })
            .await
    }

    pub(crate) async fn load_countries(&self) -> Option<Arc<CountryTable>> {
        self.countries
            .get_or_fetch(Routes::COUNTRIES, || async {
                let records: Vec<Country> = self.fetch(Routes::countries(), "countries").await?;
                let table: CountryTable = records.into_iter().map(|c| (c.key(), c)).collect();
                info!("{} countries", table.len());
                Some(Arc::new(table))
            })
            .await
    }

    pub(crate) async fn load_currencies(&self) -> Option<Arc<CurrencyTable>> {
        self.currencies
            .get_or_fetch(Routes::CURRENCIES, || async {
                let records: Vec<Currency> =
                    self.fetch(Routes::currencies(), "currencies").await?;
                let table: CurrencyTable = records.into_iter().map(|c| (c.id.clone(), c)).collect();
                info!("{} currencies", table.len());
                Some(Arc::new(table))
            })
            .await
    }

    async fn fetch<T: DeserializeOwned>(&self, request: FetchRequest, resource: &str) -> Option<T> {
        match self.gateway.get(&request).await.and_then(decode) {
            Ok(records) => Some(records),
            Err(e) => {
                warn!("Failed to load {}: {}", resource, e);
                None
            }
        }
    }

    // ------------------------------------------------------------------
    // Synchronous accessors (never fetch)
    // ------------------------------------------------------------------

    /// Entity catalog if it is loaded
    pub fn entity_catalog(&self) -> Option<Arc<EntityCatalog>> {
        self.entities.peek(&Routes::ENTITIES_ALL).flatten()
    }

    pub fn country_table(&self) -> Option<Arc<CountryTable>> {
        self.countries.peek(&Routes::COUNTRIES).flatten()
    }

    pub fn currency_table(&self) -> Option<Arc<CurrencyTable>> {
        self.currencies.peek(&Routes::CURRENCIES).flatten()
    }

    /// Cached entity by ID
    pub fn entity(&self, id: &EntityId) -> Option<Arc<Entity>> {
        self.entity_catalog()?.get(id).cloned()
    }

    /// Cached country by ISO code, case-insensitive
    pub fn country(&self, code: &str) -> Option<Arc<Country>> {
        self.country_table()?.get(&code.to_uppercase()).cloned()
    }

    pub fn currency(&self, code: &str) -> Option<Arc<Currency>> {
        self.currency_table()?.get(code).cloned()
    }

    /// Entity ID denoted by `id`: an entity UUID as-is, or a registry
    /// identifier looked up in the identifier index.
    pub fn resolve(&self, id: &str) -> Option<EntityId> {
        match self.entity_catalog() {
            Some(catalog) => catalog.identifiers().resolve(id),
            None => IdentifierIndex::new().resolve(id),
        }
    }

    // ------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------

    /// Recipient entities in random order.
    ///
    /// The order is drawn once, when initialization completes, and kept for
    /// the lifetime of the store. Before that, each call reshuffles whatever
    /// entities are cached.
    pub fn infrastructures(&self) -> EntityList {
        match self.infrastructures.get() {
            Some(frozen) => frozen.clone(),
            None => self.shuffled_recipients(),
        }
    }

    /// Infrastructures once the store is ready, always in the frozen order
    pub async fn stable_infrastructures(&self) -> EntityList {
        self.initialize().await;
        self.infrastructures()
    }

    pub(crate) fn shuffled_recipients(&self) -> EntityList {
        let mut recipients: Vec<Arc<Entity>> = self
            .entity_catalog()
            .map(|catalog| {
                catalog
                    .entities()
                    .values()
                    .filter(|e| e.is_recipient)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        recipients.shuffle(&mut *self.rng.lock());
        recipients.into()
    }

    /// Entities that are not recipients, in API order
    pub fn emitters(&self) -> Vec<Arc<Entity>> {
        self.filter_entities(|e| !e.is_recipient)
    }

    /// Partner entities, in API order
    pub fn partners(&self) -> Vec<Arc<Entity>> {
        self.filter_entities(|e| e.is_partner)
    }

    fn filter_entities(&self, predicate: impl Fn(&Entity) -> bool) -> Vec<Arc<Entity>> {
        self.entity_catalog()
            .map(|catalog| {
                catalog
                    .entities()
                    .values()
                    .filter(|e| predicate(e))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}
