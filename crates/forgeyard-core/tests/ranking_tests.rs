//! End-to-end matching tests: scripted chat backend, seeded catalog,
//! ranking through the public API.

use std::sync::Arc;

use forgeyard_core::{
    load_seed, CapabilityEntry, ContactInfo, ForgeyardApi, ForgeyardError, MatchOutcome,
    MatchRequest, MemoryStore, NewManufacturer, OperationVocabulary, ScriptedBackend,
};

const ARC_WELDING_REPLY: &str = r#"{"normalized_operation": "Arc Welding"}"#;
const WELDING_REPLY: &str = r#"{"normalized_operation": "Welding"}"#;

fn capability(name: &str, materials: &[&str], tools: &[&str]) -> CapabilityEntry {
    CapabilityEntry {
        name: name.into(),
        materials: materials.iter().map(|s| s.to_string()).collect(),
        tools: tools.iter().map(|s| s.to_string()).collect(),
    }
}

fn manufacturer(name: &str, entries: Vec<CapabilityEntry>) -> NewManufacturer {
    NewManufacturer {
        name: name.to_string(),
        industry: "Manufacturing".into(),
        location: "Pune".into(),
        contact: ContactInfo {
            email: "contact@factory.example".into(),
            phone: "+91 20 5550 0199".into(),
        },
        rating: 4.0,
        operations: entries,
    }
}

fn seed_batch() -> Vec<NewManufacturer> {
    vec![
        manufacturer(
            "Apex Metal Works",
            vec![
                capability(
                    "Welding",
                    &["Steel", "Aluminum"],
                    &["MIG Welder", "TIG Welder"],
                ),
                capability("Laser Cutting", &["Steel", "Aluminum"], &["Laser Cutter"]),
            ],
        ),
        manufacturer(
            "Precision Fab",
            vec![capability("Welding", &["Steel"], &["Press"])],
        ),
        manufacturer(
            "Shree Textile Mill",
            vec![capability("Sewing", &["Cotton"], &["Sewing Machine"])],
        ),
    ]
}

fn request(operation: &str, tools: &[&str], materials: &[&str]) -> MatchRequest {
    MatchRequest {
        operation: operation.into(),
        tools: tools.iter().map(|s| s.to_string()).collect(),
        materials: materials.iter().map(|s| s.to_string()).collect(),
    }
}

async fn seeded_api(replies: Vec<&str>) -> ForgeyardApi {
    let api = ForgeyardApi::builder()
        .with_backend(Arc::new(ScriptedBackend::new(
            replies.into_iter().map(|s| s.to_string()).collect(),
        )))
        .build();
    api.add_manufacturers(seed_batch()).await.unwrap();
    api
}

fn ranked_names(outcome: &MatchOutcome) -> Vec<&str> {
    match outcome {
        MatchOutcome::Ranked { manufacturers, .. } => {
            manufacturers.iter().map(|r| r.name.as_str()).collect()
        }
        other => panic!("expected ranked outcome, got {other:?}"),
    }
}

#[tokio::test]
async fn test_vague_operation_resolves_and_ranks() {
    let api = seeded_api(vec![ARC_WELDING_REPLY]).await;
    let outcome = api
        .match_manufacturers(&request("arc welding", &["MIG Welder"], &["Steel"]))
        .await
        .unwrap();

    match &outcome {
        MatchOutcome::Ranked { operation, .. } => {
            // "Arc Welding" is not a vocabulary entry; it resolves to "Welding".
            assert_eq!(operation, "Welding");
            // Apex outranks Precision: its full welding entry (100) plus the
            // material coverage on its laser cutting entry (30) beats
            // Precision's operation-plus-materials 50.
            assert_eq!(
                ranked_names(&outcome),
                vec!["Apex Metal Works", "Precision Fab"]
            );
        }
        other => panic!("expected ranked outcome, got {other:?}"),
    }
}

#[tokio::test]
async fn test_equal_scores_preserve_insertion_order() {
    let twins = vec![
        manufacturer(
            "First Twin",
            vec![capability("Welding", &["Steel"], &["Torch"])],
        ),
        manufacturer(
            "Second Twin",
            vec![capability("Welding", &["Steel"], &["Torch"])],
        ),
    ];
    let api = ForgeyardApi::builder()
        .with_backend(Arc::new(ScriptedBackend::with_reply(WELDING_REPLY)))
        .build();
    api.add_manufacturers(twins).await.unwrap();

    let outcome = api
        .match_manufacturers(&request("welding", &[], &[]))
        .await
        .unwrap();
    assert_eq!(ranked_names(&outcome), vec!["First Twin", "Second Twin"]);
}

#[tokio::test]
async fn test_no_relevant_manufacturers_is_a_no_match_outcome() {
    let api = ForgeyardApi::builder()
        .with_backend(Arc::new(ScriptedBackend::with_reply(WELDING_REPLY)))
        .build();
    api.add_manufacturers(vec![manufacturer(
        "Shree Textile Mill",
        vec![capability("Sewing", &["Cotton"], &["Sewing Machine"])],
    )])
    .await
    .unwrap();

    let outcome = api
        .match_manufacturers(&request("welding", &[], &[]))
        .await
        .unwrap();
    match outcome {
        MatchOutcome::NoMatch { operation } => assert_eq!(operation, "Welding"),
        other => panic!("expected no-match outcome, got {other:?}"),
    }
}

#[tokio::test]
async fn test_backend_failure_aborts_the_match() {
    // No scripted replies, so the backend fails like a dead service.
    let api = seeded_api(vec![]).await;
    let err = api
        .match_manufacturers(&request("welding", &[], &[]))
        .await
        .unwrap_err();
    assert!(matches!(err, ForgeyardError::NormalizationFailed { .. }));
    assert_eq!(err.http_status(), 502);
}

#[tokio::test]
async fn test_unresolvable_proposal_ranks_on_raw_text() {
    let api = ForgeyardApi::builder()
        .with_backend(Arc::new(ScriptedBackend::with_reply(
            r#"{"normalized_operation": "Basket Weaving"}"#,
        )))
        .with_vocabulary(OperationVocabulary::new(vec![
            "Welding".into(),
            "Sewing".into(),
        ]))
        .build();
    api.add_manufacturers(vec![manufacturer(
        "Craft Collective",
        vec![capability("hand weaving", &["Wicker"], &["Loom"])],
    )])
    .await
    .unwrap();

    let outcome = api
        .match_manufacturers(&request("hand weaving", &[], &[]))
        .await
        .unwrap();
    match &outcome {
        MatchOutcome::Ranked {
            operation,
            manufacturers,
        } => {
            // The proposal resolves to nothing, so the raw request text is
            // kept and still matches the catalog entry verbatim.
            assert_eq!(operation, "hand weaving");
            assert_eq!(manufacturers[0].name, "Craft Collective");
        }
        other => panic!("expected ranked outcome, got {other:?}"),
    }
}

#[tokio::test]
async fn test_normalization_runs_once_per_match() {
    let backend = Arc::new(ScriptedBackend::with_reply(WELDING_REPLY));
    let api = ForgeyardApi::builder()
        .with_backend(backend.clone())
        .build();
    api.add_manufacturers(seed_batch()).await.unwrap();

    api.match_manufacturers(&request("welding", &[], &[]))
        .await
        .unwrap();
    assert_eq!(backend.call_count(), 1);
}

#[tokio::test]
async fn test_seed_file_flows_into_matching() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("manufacturers.json");
    let seed = serde_json::to_string_pretty(&seed_batch()).unwrap();
    tokio::fs::write(&path, seed).await.unwrap();

    let store = Arc::new(MemoryStore::new());
    load_seed(store.as_ref(), &path).await.unwrap();

    let api = ForgeyardApi::builder()
        .with_store(store)
        .with_backend(Arc::new(ScriptedBackend::with_reply(WELDING_REPLY)))
        .build();

    let outcome = api
        .match_manufacturers(&request("welding", &[], &["Steel"]))
        .await
        .unwrap();
    assert_eq!(
        ranked_names(&outcome),
        vec!["Apex Metal Works", "Precision Fab"]
    );
}
