//! Integration tests for the MongoDB-backed repository
//!
//! These need a reachable server and are ignored by default. Each test writes
//! to its own collection in the `handset_test` database.
//!
//! Run with:
//!   HANDSET_MONGO_URI=mongodb://localhost:27017/ \
//!     cargo test --package handset-storage --test mongo_store -- --ignored

use chrono::{Duration, Utc};
use handset_core::{DeviceFields, next_update_timestamp};
use handset_storage::models::device::generate_device_id;
use handset_storage::{
    Database, DatabaseConfig, DeviceRepository, DeviceStore, MongoDeviceRepository,
};

const TEST_DATABASE: &str = "handset_test";

fn mongo_uri() -> String {
    std::env::var("HANDSET_MONGO_URI").unwrap_or_else(|_| "mongodb://localhost:27017/".to_string())
}

async fn repository() -> MongoDeviceRepository {
    let collection = format!("devices_{}", generate_device_id());
    let config = DatabaseConfig::new(mongo_uri())
        .database(TEST_DATABASE)
        .collection(collection);
    let database = Database::new(config).unwrap();
    database.acquire().await.unwrap()
}

fn fields(name: &str, os: &str, phone_number: &str) -> DeviceFields {
    DeviceFields {
        name: name.to_string(),
        os: os.to_string(),
        phone_number: phone_number.to_string(),
    }
}

#[tokio::test]
#[ignore = "requires a running MongoDB server"]
async fn test_insert_then_find() {
    let repo = repository().await;
    let now = Utc::now();

    let inserted = repo
        .insert(fields("Pixel", "android", "555-0100"), now)
        .await
        .unwrap();
    let found = repo.find_by_id(&inserted.id).await.unwrap();

    assert_eq!(found.id, inserted.id);
    assert_eq!(found.name, "Pixel");
    assert_eq!(found.os, "android");
    assert_eq!(found.phone_number, "555-0100");
    assert_eq!(found.created_timestamp.timestamp_millis(), now.timestamp_millis());
    assert_eq!(found.created_timestamp, found.last_updated_timestamp);
}

#[tokio::test]
#[ignore = "requires a running MongoDB server"]
async fn test_update_then_refetch() {
    let repo = repository().await;
    let created = repo
        .insert(fields("Pixel", "android", "555-0100"), Utc::now())
        .await
        .unwrap();
    let stored = repo.find_by_id(&created.id).await.unwrap();

    // A clock reading equal to the stored one still has to move forward.
    let updated_at = next_update_timestamp(&stored, stored.last_updated_timestamp);
    repo.update_fields(&created.id, &fields("iPhone", "ios", "555-0199"), updated_at)
        .await
        .unwrap();

    let refetched = repo.find_by_id(&created.id).await.unwrap();
    assert_eq!(refetched.name, "iPhone");
    assert_eq!(refetched.os, "ios");
    assert_eq!(refetched.phone_number, "555-0199");
    assert_eq!(refetched.created_timestamp, stored.created_timestamp);
    assert!(refetched.last_updated_timestamp > stored.last_updated_timestamp);
}

#[tokio::test]
#[ignore = "requires a running MongoDB server"]
async fn test_successive_updates_keep_advancing() {
    let repo = repository().await;
    let created = repo
        .insert(fields("Pixel", "android", "555-0100"), Utc::now())
        .await
        .unwrap();

    let mut previous = repo.find_by_id(&created.id).await.unwrap();
    for i in 0..3 {
        // Clock stuck behind the stored timestamp.
        let stale_now = previous.last_updated_timestamp - Duration::seconds(1);
        let updated_at = next_update_timestamp(&previous, stale_now);
        repo.update_fields(&created.id, &fields(&format!("N{i}"), "android", ""), updated_at)
            .await
            .unwrap();

        let current = repo.find_by_id(&created.id).await.unwrap();
        assert!(current.last_updated_timestamp > previous.last_updated_timestamp);
        previous = current;
    }
}

#[tokio::test]
#[ignore = "requires a running MongoDB server"]
async fn test_delete_then_find() {
    let repo = repository().await;
    let created = repo
        .insert(fields("Pixel", "android", "555-0100"), Utc::now())
        .await
        .unwrap();

    repo.delete(&created.id).await.unwrap();

    let err = repo.find_by_id(&created.id).await.unwrap_err();
    assert!(err.is_not_found());
    let err = repo.delete(&created.id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
#[ignore = "requires a running MongoDB server"]
async fn test_missing_id_is_not_found() {
    let repo = repository().await;
    let missing = generate_device_id();

    assert!(repo.find_by_id(&missing).await.unwrap_err().is_not_found());
    assert!(
        repo.update_fields(&missing, &fields("N", "android", ""), Utc::now())
            .await
            .unwrap_err()
            .is_not_found()
    );
    assert!(repo.delete(&missing).await.unwrap_err().is_not_found());
}

#[tokio::test]
#[ignore = "requires a running MongoDB server"]
async fn test_list_after_delete() {
    let repo = repository().await;
    assert!(repo.find_all().await.unwrap().is_empty());

    let mut ids = Vec::new();
    for name in ["A", "B", "C"] {
        let device = repo
            .insert(fields(name, "android", "555-0100"), Utc::now())
            .await
            .unwrap();
        ids.push(device.id);
    }

    repo.delete(&ids[1]).await.unwrap();

    let mut listed: Vec<_> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|device| device.id)
        .collect();
    listed.sort();
    let mut expected = vec![ids[0].clone(), ids[2].clone()];
    expected.sort();
    assert_eq!(listed, expected);
}
