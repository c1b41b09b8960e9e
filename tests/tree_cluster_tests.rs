mod common;

use greenspace_storage::domain::mutation::tree_cluster;
use greenspace_storage::{Region, SoilCondition, StorageError, WateringStatus};

#[tokio::test]
async fn create_fills_unset_fields_with_defaults() {
    let (_store, repos) = common::setup().await;

    let cluster = repos
        .tree_cluster
        .create(vec![
            tree_cluster::with_name("Main St 1"),
            tree_cluster::with_moisture_level(0.5),
        ])
        .await
        .expect("create");

    assert_ne!(cluster.id, 0);
    assert_eq!(cluster.name, "Main St 1");
    assert_eq!(cluster.moisture_level, 0.5);
    assert_eq!(cluster.address, "");
    assert_eq!(cluster.watering_status, WateringStatus::Unknown);
    assert_eq!(cluster.soil_condition, SoilCondition::Unknown);
    assert_eq!(cluster.latitude, None);
    assert_eq!(cluster.longitude, None);
    assert!(cluster.region.is_none());
    assert!(cluster.trees.is_empty());
    assert!(!cluster.archived);
}

#[tokio::test]
async fn create_and_get_by_id_return_the_same_entity() {
    let (_store, repos) = common::setup().await;

    let created = repos
        .tree_cluster
        .create(vec![
            tree_cluster::with_name("Holtenauer Allee"),
            tree_cluster::with_address("Holtenauer Str. 100"),
            tree_cluster::with_position(54.35, 10.13),
            tree_cluster::with_watering_status(WateringStatus::Moderate),
        ])
        .await
        .expect("create");

    let fetched = repos
        .tree_cluster
        .get_by_id(created.id)
        .await
        .expect("get_by_id");

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn later_mutations_win_over_earlier_ones() {
    let (_store, repos) = common::setup().await;

    let cluster = repos
        .tree_cluster
        .create(vec![
            tree_cluster::with_name("first"),
            tree_cluster::with_name("second"),
        ])
        .await
        .expect("create");

    assert_eq!(cluster.name, "second");
}

#[tokio::test]
async fn position_is_persisted_only_as_a_complete_pair() {
    let (_store, repos) = common::setup().await;

    let without = repos
        .tree_cluster
        .create(vec![tree_cluster::with_name("no position")])
        .await
        .expect("create");
    assert_eq!(without.latitude, None);
    assert_eq!(without.longitude, None);

    let with = repos
        .tree_cluster
        .create(vec![
            tree_cluster::with_name("positioned"),
            tree_cluster::with_position(54.32, 10.12),
        ])
        .await
        .expect("create");
    assert_eq!(with.latitude, Some(54.32));
    assert_eq!(with.longitude, Some(10.12));

    let fetched = repos
        .tree_cluster
        .get_by_id(with.id)
        .await
        .expect("get_by_id");
    assert_eq!(fetched.latitude, Some(54.32));
    assert_eq!(fetched.longitude, Some(10.12));
}

#[tokio::test]
async fn create_resolves_region_back_reference() {
    let (_store, repos) = common::setup().await;

    let region = common::create_region(&repos, "Mitte").await;
    let cluster = repos
        .tree_cluster
        .create(vec![
            tree_cluster::with_name("Stadtpark"),
            tree_cluster::with_region(Some(region.clone())),
        ])
        .await
        .expect("create");

    let linked = cluster.region.expect("region populated");
    assert_eq!(linked.id, region.id);
    assert_eq!(linked.name, "Mitte");
}

#[tokio::test]
async fn create_rejects_unknown_region_reference() {
    let (_store, repos) = common::setup().await;

    let ghost = Region {
        id: 9999,
        ..Region::default()
    };
    let err = repos
        .tree_cluster
        .create(vec![tree_cluster::with_region(Some(ghost))])
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::EntityNotFound));
}

#[tokio::test]
async fn update_rewrites_fields_and_returns_stored_state() {
    let (_store, repos) = common::setup().await;

    let cluster = repos
        .tree_cluster
        .create(vec![
            tree_cluster::with_name("before"),
            tree_cluster::with_position(54.0, 10.0),
        ])
        .await
        .expect("create");

    let updated = repos
        .tree_cluster
        .update(
            cluster.id,
            vec![
                tree_cluster::with_name("after"),
                tree_cluster::with_watering_status(WateringStatus::Good),
            ],
        )
        .await
        .expect("update");

    assert_eq!(updated.name, "after");
    assert_eq!(updated.watering_status, WateringStatus::Good);
    // Untouched fields keep their stored values.
    assert_eq!(updated.latitude, Some(54.0));
    assert_eq!(updated.longitude, Some(10.0));

    let fetched = repos
        .tree_cluster
        .get_by_id(cluster.id)
        .await
        .expect("get_by_id");
    assert_eq!(fetched.name, "after");
    assert_eq!(fetched.watering_status, WateringStatus::Good);
}

#[tokio::test]
async fn update_of_missing_cluster_fails_before_applying_mutations() {
    let (_store, repos) = common::setup().await;

    let err = repos
        .tree_cluster
        .update(9999, vec![tree_cluster::with_name("nobody")])
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::TreeClusterNotFound));
}

#[tokio::test]
async fn archive_flips_the_flag_and_nothing_else() {
    let (_store, repos) = common::setup().await;

    let cluster = repos
        .tree_cluster
        .create(vec![
            tree_cluster::with_name("Alter Botanischer Garten"),
            tree_cluster::with_soil_condition(SoilCondition::Loamy),
        ])
        .await
        .expect("create");
    assert!(!cluster.archived);

    repos.tree_cluster.archive(cluster.id).await.expect("archive");

    let archived = repos
        .tree_cluster
        .get_by_id(cluster.id)
        .await
        .expect("get_by_id");
    assert!(archived.archived);
    assert_eq!(archived.name, "Alter Botanischer Garten");
    assert_eq!(archived.soil_condition, SoilCondition::Loamy);
}

#[tokio::test]
async fn archive_of_missing_cluster_reports_not_found() {
    let (_store, repos) = common::setup().await;

    let err = repos.tree_cluster.archive(9999).await.unwrap_err();
    assert!(matches!(err, StorageError::TreeClusterNotFound));
}

#[tokio::test]
async fn delete_orphans_owned_trees_instead_of_removing_them() {
    let (_store, repos) = common::setup().await;
    use greenspace_storage::domain::mutation::tree;

    let cluster = repos
        .tree_cluster
        .create(vec![tree_cluster::with_name("doomed")])
        .await
        .expect("create cluster");

    let planted = repos
        .tree
        .create(vec![
            tree::with_species("Tilia cordata"),
            tree::with_tree_cluster(Some(cluster.clone())),
        ])
        .await
        .expect("create tree");

    repos.tree_cluster.delete(cluster.id).await.expect("delete");

    let err = repos.tree_cluster.get_by_id(cluster.id).await.unwrap_err();
    assert!(matches!(err, StorageError::TreeClusterNotFound));

    let orphan = repos.tree.get_by_id(planted.id).await.expect("tree survives");
    assert!(orphan.tree_cluster.is_none());
}

#[tokio::test]
async fn delete_of_missing_cluster_reports_not_found() {
    let (_store, repos) = common::setup().await;

    let err = repos.tree_cluster.delete(9999).await.unwrap_err();
    assert!(matches!(err, StorageError::TreeClusterNotFound));
}

#[tokio::test]
async fn get_all_returns_clusters_with_their_trees_in_sequence_order() {
    let (_store, repos) = common::setup().await;
    use greenspace_storage::domain::mutation::tree;

    let cluster = repos
        .tree_cluster
        .create(vec![tree_cluster::with_name("rows")])
        .await
        .expect("create cluster");

    for number in [2, 1, 3] {
        repos
            .tree
            .create(vec![
                tree::with_number(number),
                tree::with_tree_cluster(Some(cluster.clone())),
            ])
            .await
            .expect("create tree");
    }

    let all = repos.tree_cluster.get_all().await.expect("get_all");
    assert_eq!(all.len(), 1);
    let numbers: Vec<i32> = all[0].trees.iter().map(|t| t.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}
