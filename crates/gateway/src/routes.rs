//! Routes of the TSOSI API
//!
//! Route names are relative to the configured roots so adapters and
//! fixtures agree on them.

use tsosi_ports::FetchRequest;

pub struct Routes;

impl Routes {
    // Reference data

    /// Every entity, unpaginated (summary form)
    pub const ENTITIES_ALL: &'static str = "entities/all/";

    /// Country list, served as a static file
    pub const COUNTRIES: &'static str = "static_data/country.json";

    /// Supported currencies
    pub const CURRENCIES: &'static str = "currencies/";

    // Records

    /// Every transfer, unpaginated, optionally filtered by `entity_id`
    pub const TRANSFERS_ALL: &'static str = "transfers/all/";

    /// Paginated entity search
    pub const ENTITIES: &'static str = "entities/";

    /// Emitters of a recipient, with coordinates
    pub const ENTITY_EMITTERS: &'static str = "entities/emitters/";

    /// Yearly aggregates of a recipient
    pub const ANALYTICS: &'static str = "analytics/";

    /// Entity detail: `entities/{id}`
    pub fn entity(id: &str) -> String {
        format!("entities/{}", id)
    }

    /// Transfer detail: `transfers/{id}`
    pub fn transfer(id: &str) -> String {
        format!("transfers/{}", id)
    }

    pub fn entities_all() -> FetchRequest {
        FetchRequest::api(Self::ENTITIES_ALL)
    }

    pub fn countries() -> FetchRequest {
        FetchRequest::static_file(Self::COUNTRIES)
    }

    pub fn currencies() -> FetchRequest {
        FetchRequest::api(Self::CURRENCIES)
    }

    pub fn transfers(entity_id: Option<&str>) -> FetchRequest {
        let request = FetchRequest::api(Self::TRANSFERS_ALL);
        match entity_id {
            Some(id) => request.with_query("entity_id", id),
            None => request,
        }
    }

    pub fn transfer_details(id: &str) -> FetchRequest {
        FetchRequest::api(Self::transfer(id))
    }

    pub fn entity_details(id: &str) -> FetchRequest {
        FetchRequest::api(Self::entity(id))
    }

    pub fn analytics(recipient_id: &str) -> FetchRequest {
        FetchRequest::api(Self::ANALYTICS).with_query("recipient_id", recipient_id)
    }

    pub fn emitters_for_entity(entity_id: &str) -> FetchRequest {
        FetchRequest::api(Self::ENTITY_EMITTERS).with_query("entity_id", entity_id)
    }

    /// Recipients first, then by name
    pub fn entity_search(query: &str) -> FetchRequest {
        FetchRequest::api(Self::ENTITIES)
            .with_query("search", query)
            .with_query("ordering", "-is_recipient,name")
    }
}
