//! Coverage for the flat catalog entities: vehicles, regions, images.

mod common;

use greenspace_storage::domain::mutation::{image, region, vehicle};
use greenspace_storage::StorageError;

#[tokio::test]
async fn vehicle_create_and_lookup_by_number_plate() {
    let (_store, repos) = common::setup().await;

    let created = repos
        .vehicle
        .create(vec![
            vehicle::with_number_plate("KI GR 1234"),
            vehicle::with_description("watering truck"),
            vehicle::with_water_capacity(2000.0),
        ])
        .await
        .expect("create");

    assert_ne!(created.id, 0);
    assert_eq!(created.water_capacity, 2000.0);

    let found = repos
        .vehicle
        .get_by_number_plate("KI GR 1234")
        .await
        .expect("get_by_number_plate");
    assert_eq!(found.id, created.id);
    assert_eq!(found.description, "watering truck");

    let err = repos
        .vehicle
        .get_by_number_plate("KI XX 0000")
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::EntityNotFound));
}

#[tokio::test]
async fn vehicle_update_and_delete() {
    let (_store, repos) = common::setup().await;

    let created = repos
        .vehicle
        .create(vec![vehicle::with_number_plate("KI GR 5678")])
        .await
        .expect("create");

    let updated = repos
        .vehicle
        .update(created.id, vec![vehicle::with_water_capacity(3500.0)])
        .await
        .expect("update");
    assert_eq!(updated.water_capacity, 3500.0);
    assert_eq!(updated.number_plate, "KI GR 5678");

    repos.vehicle.delete(created.id).await.expect("delete");
    let err = repos.vehicle.get_by_id(created.id).await.unwrap_err();
    assert!(matches!(err, StorageError::EntityNotFound));
}

#[tokio::test]
async fn region_lookup_by_name() {
    let (_store, repos) = common::setup().await;

    let created = common::create_region(&repos, "Ravensberg").await;

    let found = repos
        .region
        .get_by_name("Ravensberg")
        .await
        .expect("get_by_name");
    assert_eq!(found.id, created.id);

    let err = repos.region.get_by_name("Atlantis").await.unwrap_err();
    assert!(matches!(err, StorageError::EntityNotFound));
}

#[tokio::test]
async fn region_update_renames() {
    let (_store, repos) = common::setup().await;

    let created = common::create_region(&repos, "Sued").await;
    let updated = repos
        .region
        .update(created.id, vec![region::with_name("Suedfriedhof")])
        .await
        .expect("update");

    assert_eq!(updated.name, "Suedfriedhof");
    assert_eq!(updated.id, created.id);
}

#[tokio::test]
async fn image_metadata_is_optional() {
    let (_store, repos) = common::setup().await;

    let bare = repos
        .image
        .create(vec![image::with_url("https://img.example/raw.jpg")])
        .await
        .expect("create");
    assert_eq!(bare.filename, None);
    assert_eq!(bare.mime_type, None);

    let full = repos
        .image
        .create(vec![
            image::with_url("https://img.example/full.jpg"),
            image::with_filename(Some("full.jpg".to_string())),
            image::with_mime_type(Some("image/jpeg".to_string())),
        ])
        .await
        .expect("create");
    assert_eq!(full.filename.as_deref(), Some("full.jpg"));
    assert_eq!(full.mime_type.as_deref(), Some("image/jpeg"));
}

#[tokio::test]
async fn image_update_can_clear_metadata() {
    let (_store, repos) = common::setup().await;

    let created = repos
        .image
        .create(vec![
            image::with_url("https://img.example/meta.jpg"),
            image::with_filename(Some("meta.jpg".to_string())),
        ])
        .await
        .expect("create");

    let updated = repos
        .image
        .update(created.id, vec![image::with_filename(None)])
        .await
        .expect("update");

    assert_eq!(updated.filename, None);
    assert_eq!(updated.url, "https://img.example/meta.jpg");
}

#[tokio::test]
async fn image_delete_then_lookup_reports_not_found() {
    let (_store, repos) = common::setup().await;

    let created = common::create_image(&repos, "https://img.example/gone.jpg").await;
    repos.image.delete(created.id).await.expect("delete");

    let err = repos.image.get_by_id(created.id).await.unwrap_err();
    assert!(matches!(err, StorageError::ImageNotFound));
}
