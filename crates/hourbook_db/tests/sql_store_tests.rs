//! Integration tests for the SQL reservation store against a SQLite
//! database file.

use hourbook_db::{DbClient, Reservation, ReservationStore, SqlReservationStore, StoreError};
use tempfile::TempDir;

async fn sqlite_store() -> (TempDir, SqlReservationStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let url = format!("sqlite://{}", dir.path().join("reservations.db").display());
    let client = DbClient::from_url(&url).await.expect("connect");
    let store = SqlReservationStore::new(client);
    store.init_schema().await.expect("schema");
    (dir, store)
}

fn slot(start_time: &str, user_name: &str) -> Reservation {
    Reservation::new(start_time, user_name)
}

#[tokio::test]
async fn create_then_scan_returns_the_record() {
    let (_dir, store) = sqlite_store().await;

    store
        .create(slot("2024-01-01T10:00:00", "alice"))
        .await
        .unwrap();

    let found = store
        .scan("2024-01-01T10:00:00", "2024-01-01T11:00:00")
        .await
        .unwrap();
    assert_eq!(found, vec![slot("2024-01-01T10:00:00", "alice")]);
}

#[tokio::test]
async fn occupied_slot_rejects_any_second_create() {
    let (_dir, store) = sqlite_store().await;

    store
        .create(slot("2024-01-01T10:00:00", "alice"))
        .await
        .unwrap();

    // Another user, and then the same user again: both conflict.
    let err = store
        .create(slot("2024-01-01T10:00:00", "bob"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::AlreadyExists));
    let err = store
        .create(slot("2024-01-01T10:00:00", "alice"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::AlreadyExists));

    // And the failed attempts left no extra state behind.
    let found = store
        .scan("2024-01-01T00:00:00", "2024-01-02T00:00:00")
        .await
        .unwrap();
    assert_eq!(found, vec![slot("2024-01-01T10:00:00", "alice")]);
}

#[tokio::test]
async fn delete_is_gated_on_the_stored_owner() {
    let (_dir, store) = sqlite_store().await;

    store
        .create(slot("2024-01-01T10:00:00", "alice"))
        .await
        .unwrap();

    let err = store
        .delete(slot("2024-01-01T10:00:00", "bob"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotOwnerOrMissing));

    // The failed delete left the reservation in place.
    let found = store
        .scan("2024-01-01T10:00:00", "2024-01-01T11:00:00")
        .await
        .unwrap();
    assert_eq!(found.len(), 1);

    store
        .delete(slot("2024-01-01T10:00:00", "alice"))
        .await
        .unwrap();

    // Deleting an already-freed slot reports the merged outcome.
    let err = store
        .delete(slot("2024-01-01T10:00:00", "alice"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotOwnerOrMissing));
}

#[tokio::test]
async fn scan_includes_start_and_excludes_end() {
    let (_dir, store) = sqlite_store().await;

    store
        .create(slot("2024-01-01T10:00:00", "alice"))
        .await
        .unwrap();
    store
        .create(slot("2024-01-01T11:00:00", "bob"))
        .await
        .unwrap();
    store
        .create(slot("2024-01-01T12:00:00", "carol"))
        .await
        .unwrap();

    let mut found = store
        .scan("2024-01-01T10:00:00", "2024-01-01T12:00:00")
        .await
        .unwrap();
    found.sort_by(|a, b| a.start_time().cmp(b.start_time()));

    assert_eq!(
        found,
        vec![
            slot("2024-01-01T10:00:00", "alice"),
            slot("2024-01-01T11:00:00", "bob"),
        ]
    );
}

#[tokio::test]
async fn full_booking_scenario() {
    let (_dir, store) = sqlite_store().await;

    store
        .create(slot("2024-01-01T10:00:00", "alice"))
        .await
        .unwrap();
    assert!(matches!(
        store
            .create(slot("2024-01-01T10:00:00", "bob"))
            .await
            .unwrap_err(),
        StoreError::AlreadyExists
    ));
    assert!(matches!(
        store
            .delete(slot("2024-01-01T10:00:00", "bob"))
            .await
            .unwrap_err(),
        StoreError::NotOwnerOrMissing
    ));
    store
        .delete(slot("2024-01-01T10:00:00", "alice"))
        .await
        .unwrap();

    let found = store
        .scan("2024-01-01T00:00:00", "2024-01-02T00:00:00")
        .await
        .unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn ping_reports_reachable_store() {
    let (_dir, store) = sqlite_store().await;
    store.ping().await.unwrap();
}

#[tokio::test]
async fn empty_scan_bound_is_invalid() {
    let (_dir, store) = sqlite_store().await;

    let err = store.scan("2024-01-01T00:00:00", "").await.unwrap_err();
    assert!(matches!(err, StoreError::InvalidArgument(_)));
}
