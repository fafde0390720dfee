//! Commands of the `tsosi` binary
//!
//! Each command writes plain text lines to the given writer so the binary
//! and the tests share one code path.

use log::info;
use std::io::Write;
use std::sync::Arc;
use tsosi_core::{Entity, EntityId, Transfer, format_optional};
use tsosi_refdata::{DEFAULT_CURRENCY, ReferenceStore};

use crate::error::{RunnerError, RunnerResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load the reference data and report what was loaded
    Init,
    /// Resolve an entity UUID or registry identifier
    Resolve(String),
    /// List infrastructures in display order
    Infrastructures,
    /// List transfers, optionally those of one entity
    Transfers(Option<String>),
}

impl Command {
    /// Parse a command from its positional arguments
    pub fn parse(args: &[String]) -> RunnerResult<Self> {
        let Some((name, rest)) = args.split_first() else {
            return Err(RunnerError::Usage("missing command".to_string()));
        };

        match (name.as_str(), rest) {
            ("init", []) => Ok(Command::Init),
            ("resolve", [id]) => Ok(Command::Resolve(id.clone())),
            ("resolve", _) => Err(RunnerError::Usage("resolve <id>".to_string())),
            ("infrastructures", []) => Ok(Command::Infrastructures),
            ("transfers", []) => Ok(Command::Transfers(None)),
            ("transfers", [entity]) => Ok(Command::Transfers(Some(entity.clone()))),
            ("transfers", _) => Err(RunnerError::Usage("transfers [entity]".to_string())),
            (other, _) => Err(RunnerError::Usage(format!("unknown command '{}'", other))),
        }
    }
}

pub async fn run(store: &ReferenceStore, command: &Command, out: &mut impl Write) -> RunnerResult<()> {
    match command {
        Command::Init => init(store, out).await,
        Command::Resolve(id) => resolve(store, id, out).await,
        Command::Infrastructures => infrastructures(store, out).await,
        Command::Transfers(entity) => transfers(store, entity.as_deref(), out).await,
    }
}

async fn init(store: &ReferenceStore, out: &mut impl Write) -> RunnerResult<()> {
    let complete = store.initialize().await;

    let entities = store.entity_catalog().map(|c| c.len());
    let countries = store.country_table().map(|t| t.len());
    let currencies = store.currency_table().map(|t| t.len());
    for (name, count) in [
        ("entities", entities),
        ("countries", countries),
        ("currencies", currencies),
    ] {
        match count {
            Some(count) => writeln!(out, "{:<12}{}", name, count)?,
            None => writeln!(out, "{:<12}unavailable", name)?,
        }
    }
    writeln!(out, "{:<12}{}", "complete", complete)?;
    Ok(())
}

async fn resolve(store: &ReferenceStore, id: &str, out: &mut impl Write) -> RunnerResult<()> {
    store.initialize().await;

    let entity = store
        .resolve(id)
        .and_then(|entity_id| store.entity(&entity_id))
        .ok_or_else(|| RunnerError::UnknownEntity(id.to_string()))?;

    writeln!(out, "{}\t{}", entity.id, entity.name)?;
    for identifier in &entity.identifiers {
        match identifier.url() {
            Some(url) => writeln!(out, "  {}\t{}\t{}", identifier.registry, identifier.value, url)?,
            None => writeln!(out, "  {}\t{}", identifier.registry, identifier.value)?,
        }
    }
    Ok(())
}

async fn infrastructures(store: &ReferenceStore, out: &mut impl Write) -> RunnerResult<()> {
    for entity in store.stable_infrastructures().await.iter() {
        writeln!(out, "{}\t{}", entity.id, entity.display_name())?;
    }
    Ok(())
}

async fn transfers(
    store: &ReferenceStore,
    entity: Option<&str>,
    out: &mut impl Write,
) -> RunnerResult<()> {
    // Accept registry identifiers as well as entity IDs
    let entity_id = match entity {
        Some(id) => {
            store.initialize().await;
            let resolved = store
                .resolve(id)
                .ok_or_else(|| RunnerError::UnknownEntity(id.to_string()))?;
            Some(resolved.to_string())
        }
        None => None,
    };

    let transfers = store.transfers(entity_id.as_deref()).await?;
    info!("{} transfers", transfers.len());
    for transfer in &transfers {
        writeln!(out, "{}", transfer_line(transfer))?;
    }
    Ok(())
}

fn transfer_line(transfer: &Transfer) -> String {
    let name = |entity: &Option<Arc<Entity>>, id: &EntityId| {
        entity
            .as_ref()
            .map(|e| e.display_name().to_string())
            .unwrap_or_else(|| id.to_string())
    };

    let date = format_optional(Some(&transfer.date_clc)).unwrap_or(transfer.date_clc.value.as_str());
    let amount = transfer.amount_in(DEFAULT_CURRENCY);
    let amount = match (amount.amount, amount.currency) {
        (Some(value), Some(currency)) => format!("{} {}", value, currency),
        (Some(value), None) => value.to_string(),
        _ => "-".to_string(),
    };

    format!(
        "{}\t{} -> {}\t{}",
        date,
        name(&transfer.emitter, &transfer.emitter_id),
        name(&transfer.recipient, &transfer.recipient_id),
        amount
    )
}
