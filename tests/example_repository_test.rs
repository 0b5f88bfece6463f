//! Integration tests for the example store and its unit-of-work semantics.

use example_service::config::Config;
use example_service::domain::{Example, ExampleDraft, ExampleFilter};
use example_service::errors::{AppError, EMAIL_NOT_AVAILABLE};
use example_service::infra::{Database, ExampleRepository, ExampleStore, Persistence, UnitOfWork};

async fn database() -> Database {
    let mut config = Config::with_database_url("sqlite::memory:");
    config.database_max_connections = 1;

    let db = Database::connect(&config).await.unwrap();
    db.ensure_schema().await.unwrap();
    db
}

fn example(first_name: &str, email: &str) -> Example {
    Example::new(
        ExampleDraft::new(first_name, "Lee", email, "Passw0rd1"),
        "$argon2id$stub".to_string(),
    )
}

#[tokio::test]
async fn test_ensure_schema_is_idempotent() {
    let db = database().await;
    db.ensure_schema().await.unwrap();
    db.ping().await.unwrap();
}

#[tokio::test]
async fn test_changes_are_staged_until_save() {
    let db = database().await;
    let mut store = ExampleStore::new(db.get_connection());

    store.add(example("Ann", "ann@x.com"));
    store.add(example("Bob", "bob@x.com"));
    assert_eq!(store.pending_changes(), 2);
    assert!(store.get_all().await.unwrap().is_empty());

    let summary = store.save().await.unwrap();
    assert_eq!(summary.affected, 2);
    assert_eq!(summary.inserted_ids.len(), 2);
    assert_eq!(store.pending_changes(), 0);

    let all = store.get_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|e| summary.inserted_ids.contains(&e.id)));
}

#[tokio::test]
async fn test_dropped_unit_discards_changes() {
    let db = database().await;
    let uow = Persistence::new(db.get_connection());

    {
        let mut repo = uow.begin().await.unwrap();
        repo.add(example("Ann", "ann@x.com"));
    }

    let repo = uow.begin().await.unwrap();
    assert!(repo.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_save_with_nothing_staged() {
    let db = database().await;
    let mut store = ExampleStore::new(db.get_connection());

    let summary = store.save().await.unwrap();
    assert_eq!(summary.affected, 0);
    assert!(summary.inserted_ids.is_empty());
}

#[tokio::test]
async fn test_unique_violation_rolls_back_whole_save() {
    let db = database().await;
    let mut store = ExampleStore::new(db.get_connection());

    store.add(example("Ann", "ann@x.com"));
    store.add(example("Bob", "bob@x.com"));
    store.add(example("Eve", "ann@x.com"));

    let err = store.save().await.unwrap_err();
    assert!(matches!(err, AppError::Validation(ref msg) if msg == EMAIL_NOT_AVAILABLE));

    assert!(store.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_onto_taken_email_rolls_back() {
    let db = database().await;
    let mut store = ExampleStore::new(db.get_connection());

    store.add(example("Ann", "ann@x.com"));
    store.add(example("Bob", "bob@x.com"));
    let ids = store.save().await.unwrap().inserted_ids;
    let bob_id = ids[1];

    let mut bob = store.get_by_id(bob_id).await.unwrap().unwrap();
    bob.email = "ann@x.com".to_string();
    bob.first_name = "Robert".to_string();
    store.update(bob);

    let err = store.save().await.unwrap_err();
    assert!(matches!(err, AppError::Validation(ref msg) if msg == EMAIL_NOT_AVAILABLE));
    assert_eq!(store.pending_changes(), 0);

    let unchanged = store.get_by_id(bob_id).await.unwrap().unwrap();
    assert_eq!(unchanged.email, "bob@x.com");
    assert_eq!(unchanged.first_name, "Bob");
}

#[tokio::test]
async fn test_update_and_remove() {
    let db = database().await;
    let mut store = ExampleStore::new(db.get_connection());

    store.add(example("Ann", "ann@x.com"));
    let id = store.save().await.unwrap().inserted_ids[0];

    let mut stored = store.get_by_id(id).await.unwrap().unwrap();
    stored.first_name = "Annie".to_string();
    stored.touch();
    store.update(stored);
    assert_eq!(store.save().await.unwrap().affected, 1);

    let reloaded = store.find_by_email("ann@x.com").await.unwrap().unwrap();
    assert_eq!(reloaded.first_name, "Annie");
    assert!(reloaded.updated_at.is_some());

    store.remove(reloaded);
    assert_eq!(store.save().await.unwrap().affected, 1);
    assert!(store.get_by_id(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_filter_terms_match_wildcards_literally() {
    let db = database().await;
    let mut store = ExampleStore::new(db.get_connection());

    store.add(example("Ann", "a_b@x.com"));
    store.add(example("Bob", "axb@x.com"));
    store.save().await.unwrap();

    let filter = ExampleFilter {
        email: Some("a_b".to_string()),
        ..ExampleFilter::default()
    };
    assert_eq!(store.count_by_filter(&filter).await.unwrap(), 1);

    let filter = ExampleFilter {
        email: Some("%".to_string()),
        ..ExampleFilter::default()
    };
    assert_eq!(store.count_by_filter(&filter).await.unwrap(), 0);
}

#[tokio::test]
async fn test_get_by_filter_and_blank_terms() {
    let db = database().await;
    let mut store = ExampleStore::new(db.get_connection());

    store.add(example("Ann", "ann@x.com"));
    store.add(example("Bob", "bob@x.com"));
    let ids = store.save().await.unwrap().inserted_ids;

    let found = store
        .get_by_filter(&ExampleFilter::by_id(ids[1]))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.email, "bob@x.com");

    let blank = ExampleFilter {
        first_name: Some("   ".to_string()),
        ..ExampleFilter::default()
    };
    assert_eq!(store.count_by_filter(&blank).await.unwrap(), 2);

    let none = store.get_by_filter(&ExampleFilter::by_id(9999)).await.unwrap();
    assert!(none.is_none());
}
