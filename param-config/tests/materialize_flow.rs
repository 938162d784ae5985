use param_config::domain::{ConfigMap, Parameter, ParameterKind};
use param_config::store::{MemoryParameterStore, ParameterStore};

fn seeded_store() -> MemoryParameterStore {
    MemoryParameterStore::with_parameters(vec![
        Parameter::new("/app/username", "admin"),
        Parameter::new("/app/password", "admin").with_kind(ParameterKind::Secure),
        Parameter::new("/app/hosts", "a.example,b.example").with_kind(ParameterKind::StringList),
    ])
}

#[tokio::test]
async fn test_fetch_and_materialize() {
    let store = seeded_store();

    let outcome = store
        .fetch(
            &["/app/username".to_string(), "/app/password".to_string()],
            true,
        )
        .await
        .unwrap();

    assert!(outcome.invalid_parameters.is_empty());

    let config = ConfigMap::from_parameters(outcome.parameters);
    assert_eq!(config.len(), 2);
    assert_eq!(config.get("/app/username"), Some("admin"));
    assert_eq!(config.get("/app/password"), Some("admin"));
}

#[tokio::test]
async fn test_partial_resolution_omits_missing_names() {
    let store = seeded_store();

    let outcome = store
        .fetch(
            &["/app/username".to_string(), "/app/missing".to_string()],
            true,
        )
        .await
        .unwrap();

    assert_eq!(outcome.invalid_parameters, vec!["/app/missing".to_string()]);

    let config = ConfigMap::from_parameters(outcome.parameters);
    assert_eq!(config.len(), 1);
    assert_eq!(config.get("/app/missing"), None);
}

#[tokio::test]
async fn test_secure_and_plain_materialize_identically() {
    let store = seeded_store();

    let outcome = store
        .fetch(
            &[
                "/app/username".to_string(),
                "/app/password".to_string(),
                "/app/hosts".to_string(),
            ],
            false,
        )
        .await
        .unwrap();

    let config = ConfigMap::from_parameters(outcome.parameters);
    assert_eq!(config.get("/app/password"), Some("admin"));
    assert_eq!(config.get("/app/hosts"), Some("a.example,b.example"));
}

#[tokio::test]
async fn test_duplicate_requested_name_last_wins() {
    let store = seeded_store();

    let outcome = store
        .fetch(
            &["/app/username".to_string(), "/app/username".to_string()],
            true,
        )
        .await
        .unwrap();

    assert_eq!(outcome.parameters.len(), 2);

    let config = ConfigMap::from_parameters(outcome.parameters);
    assert_eq!(config.len(), 1);
    assert_eq!(config.get("/app/username"), Some("admin"));
}
