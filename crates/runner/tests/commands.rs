//! Integration test: runner commands against fixture data

use serde_json::json;
use std::sync::Arc;
use tsosi_gateway::{InMemoryGateway, Routes};
use tsosi_refdata::{RefDataConfig, ReferenceStore};
use tsosi_runner::{Command, RunnerError, run};

const SCOSS: &str = "4c6e8a0b-2d4f-4a6b-8c0d-6e8f0a2b4c57";
const ARXIV: &str = "7a9c1e3f-5b7d-4f9a-8b1c-9d1e3f5a7b92";
const CERN: &str = "e1f3a5b7-9c0d-4e2f-8a4b-6c8d0e2f4a69";

fn store(gateway: InMemoryGateway) -> ReferenceStore {
    ReferenceStore::with_config(Arc::new(gateway), RefDataConfig::seeded(11))
}

fn fixtures() -> InMemoryGateway {
    InMemoryGateway::new()
        .with_response(
            Routes::ENTITIES_ALL,
            json!([
                {"id": ARXIV, "name": "arXiv", "identifiers": [{"registry": "ror", "value": "04a7f6w43"}], "is_recipient": true},
                {"id": CERN, "name": "European Organization for Nuclear Research", "short_name": "CERN",
                 "identifiers": [{"registry": "wikidata", "value": "Q42944"}]},
                {"id": SCOSS, "name": "SCOSS", "identifiers": [{"registry": "_custom", "value": "scoss"}], "is_partner": true}
            ]),
        )
        .with_response(Routes::COUNTRIES, json!([{"code": "CH", "name": "Switzerland"}]))
        .with_response(Routes::CURRENCIES, json!([{"id": "EUR", "name": "Euro"}]))
        .with_response(
            format!("{}?entity_id={}", Routes::TRANSFERS_ALL, CERN),
            json!([{
                "id": "3f5a7b9c-1d3e-4f5a-9b7c-1d3e5f7a9b0c",
                "emitter_id": CERN,
                "recipient_id": ARXIV,
                "amount": 10000,
                "currency": "CHF",
                "amounts_clc": {"EUR": 9500},
                "date_clc": {"value": "2022-06-30", "precision": "year"}
            }]),
        )
}

async fn output(store: &ReferenceStore, command: &Command) -> Result<String, RunnerError> {
    let mut out = Vec::new();
    run(store, command, &mut out).await?;
    Ok(String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn test_init_reports_counts() {
    let _ = env_logger::try_init();

    let store = store(fixtures().with_failure(Routes::COUNTRIES));
    let text = output(&store, &Command::Init).await.unwrap();

    assert!(text.contains("entities    3"));
    assert!(text.contains("countries   unavailable"));
    assert!(text.contains("currencies  1"));
    assert!(text.contains("complete    false"));
}

#[tokio::test]
async fn test_resolve_command() {
    let _ = env_logger::try_init();

    let store = store(fixtures());
    let text = output(&store, &Command::Resolve("Q42944".to_string()))
        .await
        .unwrap();
    assert!(text.starts_with(&format!("{}\tEuropean Organization", CERN)));
    assert!(text.contains("https://wikidata.org/wiki/Q42944"));

    let err = output(&store, &Command::Resolve("Q1".to_string()))
        .await
        .unwrap_err();
    assert!(matches!(err, RunnerError::UnknownEntity(id) if id == "Q1"));
}

#[tokio::test]
async fn test_infrastructures_command_is_stable() {
    let _ = env_logger::try_init();

    let store = store(fixtures());
    let first = output(&store, &Command::Infrastructures).await.unwrap();
    let second = output(&store, &Command::Infrastructures).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first, format!("{}\tarXiv\n", ARXIV));
}

#[tokio::test]
async fn test_transfers_command_resolves_entity() {
    let _ = env_logger::try_init();

    let store = store(fixtures());
    let text = output(&store, &Command::Transfers(Some("Q42944".to_string())))
        .await
        .unwrap();

    assert_eq!(text, "2022\tCERN -> arXiv\t9500 EUR\n");

    let err = output(&store, &Command::Transfers(Some("unknown".to_string())))
        .await
        .unwrap_err();
    assert!(matches!(err, RunnerError::UnknownEntity(_)));
}
