mod common;

use greenspace_storage::domain::mutation::flowerbed;
use greenspace_storage::{Sensor, SensorStatus, StorageError};

#[tokio::test]
async fn create_resolves_region_sensor_and_image_references() {
    let (_store, repos) = common::setup().await;

    let region = common::create_region(&repos, "Gaarden").await;
    let sensor = common::create_sensor(&repos, SensorStatus::Online).await;
    let image = common::create_image(&repos, "https://img.example/bed.jpg").await;

    let bed = repos
        .flowerbed
        .create(vec![
            flowerbed::with_address("Kirchenweg 12"),
            flowerbed::with_description("tulips and daffodils"),
            flowerbed::with_size(12.5),
            flowerbed::with_number_of_plants(240),
            flowerbed::with_moisture_level(0.4),
            flowerbed::with_position(54.31, 10.14),
            flowerbed::with_region(Some(region.clone())),
            flowerbed::with_sensor(Some(sensor.clone())),
            flowerbed::with_images(vec![image.clone()]),
        ])
        .await
        .expect("create");

    assert_ne!(bed.id, 0);
    assert_eq!(bed.address, "Kirchenweg 12");
    assert_eq!(bed.size, 12.5);
    assert_eq!(bed.number_of_plants, 240);
    assert_eq!(bed.latitude, Some(54.31));
    assert_eq!(bed.longitude, Some(10.14));
    assert_eq!(bed.region.as_ref().map(|r| r.id), Some(region.id));
    assert_eq!(bed.sensor.as_ref().map(|s| s.id), Some(sensor.id));
    assert_eq!(bed.images.len(), 1);
    assert_eq!(bed.images[0].id, image.id);
    assert!(!bed.archived);
}

#[tokio::test]
async fn create_without_position_leaves_both_coordinates_unset() {
    let (_store, repos) = common::setup().await;

    let bed = repos
        .flowerbed
        .create(vec![flowerbed::with_address("Exerzierplatz")])
        .await
        .expect("create");

    assert_eq!(bed.latitude, None);
    assert_eq!(bed.longitude, None);
}

#[tokio::test]
async fn create_rejects_unknown_sensor_reference() {
    let (_store, repos) = common::setup().await;

    let ghost = Sensor {
        id: 4242,
        ..Sensor::default()
    };
    let err = repos
        .flowerbed
        .create(vec![flowerbed::with_sensor(Some(ghost))])
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::SensorNotFound));
}

#[tokio::test]
async fn update_replaces_images_and_keeps_untouched_fields() {
    let (_store, repos) = common::setup().await;

    let first = common::create_image(&repos, "https://img.example/a.jpg").await;
    let second = common::create_image(&repos, "https://img.example/b.jpg").await;

    let bed = repos
        .flowerbed
        .create(vec![
            flowerbed::with_address("Blücherplatz"),
            flowerbed::with_moisture_level(0.3),
            flowerbed::with_images(vec![first.clone()]),
        ])
        .await
        .expect("create");

    let updated = repos
        .flowerbed
        .update(bed.id, vec![flowerbed::with_images(vec![second.clone()])])
        .await
        .expect("update");

    let image_ids: Vec<i32> = updated.images.iter().map(|i| i.id).collect();
    assert_eq!(image_ids, vec![second.id]);
    assert_eq!(updated.address, "Blücherplatz");
    assert_eq!(updated.moisture_level, 0.3);
}

#[tokio::test]
async fn archive_marks_the_bed_without_touching_content() {
    let (_store, repos) = common::setup().await;

    let bed = repos
        .flowerbed
        .create(vec![
            flowerbed::with_address("Schrevenpark"),
            flowerbed::with_number_of_plants(80),
        ])
        .await
        .expect("create");

    repos.flowerbed.archive(bed.id).await.expect("archive");

    let archived = repos.flowerbed.get_by_id(bed.id).await.expect("get_by_id");
    assert!(archived.archived);
    assert_eq!(archived.address, "Schrevenpark");
    assert_eq!(archived.number_of_plants, 80);
}

#[tokio::test]
async fn archive_of_missing_bed_reports_not_found() {
    let (_store, repos) = common::setup().await;

    let err = repos.flowerbed.archive(9999).await.unwrap_err();
    assert!(matches!(err, StorageError::FlowerbedNotFound));
}

#[tokio::test]
async fn delete_removes_the_bed_and_keeps_images() {
    let (_store, repos) = common::setup().await;

    let image = common::create_image(&repos, "https://img.example/keep.jpg").await;
    let bed = repos
        .flowerbed
        .create(vec![
            flowerbed::with_address("Wilhelmplatz"),
            flowerbed::with_images(vec![image.clone()]),
        ])
        .await
        .expect("create");

    repos.flowerbed.delete(bed.id).await.expect("delete");

    let err = repos.flowerbed.get_by_id(bed.id).await.unwrap_err();
    assert!(matches!(err, StorageError::FlowerbedNotFound));

    repos.image.get_by_id(image.id).await.expect("image kept");
}
