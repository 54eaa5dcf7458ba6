//! Integration tests for request-scoped store handles
//!
//! These tests use the in-memory store and validate handle isolation,
//! release accounting, and concurrent access patterns.
//!
//! Run with: cargo test --package handset-storage --test integration_store

use std::sync::Arc;

use chrono::Utc;
use handset_core::{DeviceFields, next_update_timestamp};
use handset_storage::{DeviceRepository, DeviceStore, InMemoryStore};
use tokio::sync::Barrier;

fn fields(name: &str, os: &str) -> DeviceFields {
    DeviceFields {
        name: name.to_string(),
        os: os.to_string(),
        phone_number: "5551234".to_string(),
    }
}

#[tokio::test]
async fn test_concurrent_handles() {
    let store = InMemoryStore::new();

    const NUM_CONCURRENT_TASKS: usize = 10;
    let barrier = Arc::new(Barrier::new(NUM_CONCURRENT_TASKS));

    let mut handles = vec![];

    for i in 0..NUM_CONCURRENT_TASKS {
        let store_clone = store.clone();
        let barrier_clone = barrier.clone();

        let handle = tokio::spawn(async move {
            let repo = store_clone.acquire().await.unwrap();
            barrier_clone.wait().await;

            repo.insert(fields(&format!("Phone{}", i), "android"), Utc::now())
                .await
                .unwrap()
        });

        handles.push(handle);
    }

    let results: Vec<_> = futures::future::join_all(handles).await;

    assert_eq!(results.len(), NUM_CONCURRENT_TASKS);

    let mut ids: Vec<_> = results.into_iter().map(|r| r.unwrap().id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), NUM_CONCURRENT_TASKS);

    assert_eq!(store.len().await, NUM_CONCURRENT_TASKS);
    assert_eq!(store.stats().acquired(), NUM_CONCURRENT_TASKS);
    assert_eq!(store.stats().outstanding(), 0);
}

#[tokio::test]
async fn test_handle_released_after_failure() {
    let store = InMemoryStore::new();

    {
        let repo = store.acquire().await.unwrap();
        let missing = handset_storage::models::device::generate_device_id();
        assert!(repo.find_by_id(&missing).await.is_err());
    }

    assert_eq!(store.stats().acquired(), 1);
    assert_eq!(store.stats().released(), 1);
}

#[tokio::test]
async fn test_update_then_read_sequence() {
    let store = InMemoryStore::new();

    let device = {
        let repo = store.acquire().await.unwrap();
        repo.insert(fields("Phone1", "android"), Utc::now())
            .await
            .unwrap()
    };

    let repo = store.acquire().await.unwrap();
    let current = repo.find_by_id(&device.id).await.unwrap();
    let updated_at = next_update_timestamp(&current, current.last_updated_timestamp);

    repo.update_fields(&device.id, &fields("Phone2", "ios"), updated_at)
        .await
        .unwrap();

    let updated = repo.find_by_id(&device.id).await.unwrap();
    assert_eq!(updated.name, "Phone2");
    assert_eq!(updated.os, "ios");
    assert_eq!(updated.created_timestamp, device.created_timestamp);
    assert!(updated.last_updated_timestamp > device.last_updated_timestamp);
}

#[tokio::test]
async fn test_delete_then_list() {
    let store = InMemoryStore::new();
    let repo = store.acquire().await.unwrap();

    let first = repo.insert(fields("A", "android"), Utc::now()).await.unwrap();
    let second = repo.insert(fields("B", "ios"), Utc::now()).await.unwrap();

    repo.delete(&first.id).await.unwrap();

    let remaining = repo.find_all().await.unwrap();
    assert_eq!(remaining, vec![second]);
}
