mod common;

use chrono::Utc;
use greenspace_storage::infra::storage::entity;
use greenspace_storage::{EntityKind, StorageError};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::EntityTrait;

#[tokio::test]
async fn committed_transaction_is_visible() {
    let (store, repos) = common::setup().await;

    let inner = store.clone();
    store
        .with_transaction(move |txn| {
            Box::pin(async move {
                let now = Utc::now();
                let active = entity::region::ActiveModel {
                    id: NotSet,
                    created_at: Set(now),
                    updated_at: Set(now),
                    name: Set("Nord".to_string()),
                };
                entity::region::Entity::insert(active)
                    .exec(txn)
                    .await
                    .map_err(|err| inner.classify(EntityKind::Region, err))?;
                Ok(())
            })
        })
        .await
        .expect("transaction commits");

    let regions = repos.region.get_all().await.expect("get_all");
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].name, "Nord");
}

#[tokio::test]
async fn failed_transaction_leaves_storage_unchanged() {
    let (store, repos) = common::setup().await;

    let inner = store.clone();
    let result: Result<(), StorageError> = store
        .with_transaction(move |txn| {
            Box::pin(async move {
                let now = Utc::now();
                let active = entity::region::ActiveModel {
                    id: NotSet,
                    created_at: Set(now),
                    updated_at: Set(now),
                    name: Set("Sued".to_string()),
                };
                entity::region::Entity::insert(active)
                    .exec(txn)
                    .await
                    .map_err(|err| inner.classify(EntityKind::Region, err))?;

                Err(StorageError::EntityNotFound)
            })
        })
        .await;

    assert!(matches!(result, Err(StorageError::EntityNotFound)));

    let regions = repos.region.get_all().await.expect("get_all");
    assert!(regions.is_empty());
}

#[tokio::test]
async fn check_exists_with_no_reference_is_trivially_satisfied() {
    let (store, _repos) = common::setup().await;

    store
        .check_sensor_exists(None)
        .await
        .expect("no reference to validate");
    store
        .check_region_exists(None)
        .await
        .expect("no reference to validate");
}

#[tokio::test]
async fn check_exists_reports_missing_reference_per_kind() {
    let (store, _repos) = common::setup().await;

    let err = store.check_sensor_exists(Some(4242)).await.unwrap_err();
    assert!(matches!(err, StorageError::SensorNotFound));

    let err = store.check_image_exists(Some(4242)).await.unwrap_err();
    assert!(matches!(err, StorageError::ImageNotFound));

    let err = store.check_tree_cluster_exists(Some(4242)).await.unwrap_err();
    assert!(matches!(err, StorageError::TreeClusterNotFound));

    let err = store.check_region_exists(Some(4242)).await.unwrap_err();
    assert!(matches!(err, StorageError::EntityNotFound));
}

#[tokio::test]
async fn singular_fetch_over_duplicates_reports_too_many_rows() {
    let (_store, repos) = common::setup().await;

    common::create_region(&repos, "Mitte").await;
    common::create_region(&repos, "Mitte").await;

    let err = repos.region.get_by_name("Mitte").await.unwrap_err();
    assert!(matches!(err, StorageError::TooManyRows));
}

#[tokio::test]
async fn not_found_variants_match_entity_kind() {
    let (_store, repos) = common::setup().await;

    let err = repos.image.get_by_id(1).await.unwrap_err();
    assert!(matches!(err, StorageError::ImageNotFound));

    let err = repos.sensor.get_by_id(1).await.unwrap_err();
    assert!(matches!(err, StorageError::SensorNotFound));

    let err = repos.flowerbed.get_by_id(1).await.unwrap_err();
    assert!(matches!(err, StorageError::FlowerbedNotFound));

    let err = repos.tree_cluster.get_by_id(1).await.unwrap_err();
    assert!(matches!(err, StorageError::TreeClusterNotFound));

    // Tree, vehicle and region share the generic variant.
    let err = repos.tree.get_by_id(1).await.unwrap_err();
    assert!(matches!(err, StorageError::EntityNotFound));

    let err = repos.vehicle.get_by_id(1).await.unwrap_err();
    assert!(matches!(err, StorageError::EntityNotFound));

    let err = repos.region.get_by_id(1).await.unwrap_err();
    assert!(matches!(err, StorageError::EntityNotFound));
}

#[tokio::test]
async fn is_not_found_covers_every_missing_row_variant() {
    assert!(StorageError::ImageNotFound.is_not_found());
    assert!(StorageError::SensorNotFound.is_not_found());
    assert!(StorageError::FlowerbedNotFound.is_not_found());
    assert!(StorageError::TreeClusterNotFound.is_not_found());
    assert!(StorageError::EntityNotFound.is_not_found());
    assert!(!StorageError::TooManyRows.is_not_found());
    assert!(!StorageError::ConnectionClosed.is_not_found());
}
