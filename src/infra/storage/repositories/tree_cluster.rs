//! SeaORM tree cluster repository
//!
//! Creation is a two-step write: the insert projection never carries the
//! position, and a dependent location write fills latitude and longitude
//! only when both are present. Both steps run in one transaction.

use crate::contract::model::{Region, TreeCluster};
use crate::contract::StorageError;
use crate::domain::mutation::EntityFn;
use crate::domain::repository::TreeClusterRepository;
use crate::infra::storage::store::{EntityKind, Store};
use crate::infra::storage::{entity, mapper};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use tracing::debug;

pub struct SeaOrmTreeClusterRepository {
    store: Store,
}

impl SeaOrmTreeClusterRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Loads the region back-reference and the owned trees for one cluster
    /// row. Trees come back shallow: their own cluster/sensor/image relations
    /// are left unpopulated to avoid loading the graph recursively.
    async fn hydrate(
        &self,
        row: entity::tree_cluster::Model,
    ) -> Result<TreeCluster, StorageError> {
        let region = match row.region_id {
            Some(region_id) => entity::region::Entity::find_by_id(region_id)
                .one(self.store.conn())
                .await
                .map_err(|err| self.store.classify(EntityKind::Region, err))?
                .map(Region::from),
            None => None,
        };

        let tree_rows = entity::tree::Entity::find()
            .filter(entity::tree::Column::TreeClusterId.eq(row.id))
            .order_by_asc(entity::tree::Column::Number)
            .all(self.store.conn())
            .await
            .map_err(|err| self.store.classify(EntityKind::Tree, err))?;

        let trees = tree_rows
            .into_iter()
            .map(|tree| mapper::tree_from_row(tree, None, None, Vec::new()))
            .collect();

        Ok(mapper::tree_cluster_from_row(row, region, trees))
    }
}

#[async_trait]
impl TreeClusterRepository for SeaOrmTreeClusterRepository {
    async fn get_all(&self) -> Result<Vec<TreeCluster>, StorageError> {
        let rows = entity::tree_cluster::Entity::find()
            .order_by_asc(entity::tree_cluster::Column::Id)
            .all(self.store.conn())
            .await
            .map_err(|err| self.store.classify(EntityKind::TreeCluster, err))?;

        let mut clusters = Vec::with_capacity(rows.len());
        for row in rows {
            clusters.push(self.hydrate(row).await?);
        }

        Ok(clusters)
    }

    async fn get_by_id(&self, id: i32) -> Result<TreeCluster, StorageError> {
        let row = self
            .store
            .find_one(
                self.store.conn(),
                EntityKind::TreeCluster,
                entity::tree_cluster::Entity::find_by_id(id),
            )
            .await?;

        self.hydrate(row).await
    }

    async fn create(
        &self,
        mutations: Vec<EntityFn<TreeCluster>>,
    ) -> Result<TreeCluster, StorageError> {
        let mut cluster = TreeCluster::default();
        for mutation in mutations {
            mutation(&mut cluster);
        }

        self.store
            .check_region_exists(cluster.region.as_ref().map(|r| r.id))
            .await?;

        // The closure outlives this frame, so it captures owned values only.
        let store = self.store.clone();
        let active = mapper::tree_cluster_active(&cluster);
        let position = (cluster.latitude, cluster.longitude);
        let id = self
            .store
            .with_transaction(move |txn| {
                Box::pin(async move {
                    let result = entity::tree_cluster::Entity::insert(active)
                        .exec(txn)
                        .await
                        .map_err(|err| store.classify(EntityKind::TreeCluster, err))?;
                    let id = result.last_insert_id;

                    if let (Some(latitude), Some(longitude)) = position {
                        let location = entity::tree_cluster::ActiveModel {
                            id: Set(id),
                            latitude: Set(Some(latitude)),
                            longitude: Set(Some(longitude)),
                            ..Default::default()
                        };
                        entity::tree_cluster::Entity::update(location)
                            .exec(txn)
                            .await
                            .map_err(|err| store.classify(EntityKind::TreeCluster, err))?;
                    }

                    Ok(id)
                })
            })
            .await?;

        debug!(id, "created tree cluster");
        self.get_by_id(id).await
    }

    async fn update(
        &self,
        id: i32,
        mutations: Vec<EntityFn<TreeCluster>>,
    ) -> Result<TreeCluster, StorageError> {
        let mut cluster = self.get_by_id(id).await?;
        for mutation in mutations {
            mutation(&mut cluster);
        }

        self.store
            .check_region_exists(cluster.region.as_ref().map(|r| r.id))
            .await?;

        let mut active = mapper::tree_cluster_active(&cluster);
        active.id = Set(id);
        active.updated_at = Set(Utc::now());
        match (cluster.latitude, cluster.longitude) {
            (Some(latitude), Some(longitude)) => {
                active.latitude = Set(Some(latitude));
                active.longitude = Set(Some(longitude));
            }
            (None, None) => {
                active.latitude = Set(None);
                active.longitude = Set(None);
            }
            // A half-set position is never written; the stored pair stays
            // as it was.
            _ => {}
        }

        entity::tree_cluster::Entity::update(active)
            .exec(self.store.conn())
            .await
            .map_err(|err| self.store.classify(EntityKind::TreeCluster, err))?;

        self.get_by_id(id).await
    }

    async fn archive(&self, id: i32) -> Result<(), StorageError> {
        let active = entity::tree_cluster::ActiveModel {
            id: Set(id),
            archived: Set(true),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        entity::tree_cluster::Entity::update(active)
            .exec(self.store.conn())
            .await
            .map_err(|err| self.store.classify(EntityKind::TreeCluster, err))?;

        debug!(id, "archived tree cluster");
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), StorageError> {
        let store = self.store.clone();
        self.store
            .with_transaction(move |txn| {
                Box::pin(async move {
                    // Trees keep existing; they only lose the back-reference.
                    let orphan = entity::tree::ActiveModel {
                        tree_cluster_id: Set(None),
                        ..Default::default()
                    };
                    entity::tree::Entity::update_many()
                        .set(orphan)
                        .filter(entity::tree::Column::TreeClusterId.eq(id))
                        .exec(txn)
                        .await
                        .map_err(|err| store.classify(EntityKind::Tree, err))?;

                    let result = entity::tree_cluster::Entity::delete_by_id(id)
                        .exec(txn)
                        .await
                        .map_err(|err| store.classify(EntityKind::TreeCluster, err))?;

                    if result.rows_affected == 0 {
                        return Err(EntityKind::TreeCluster.not_found());
                    }

                    Ok(())
                })
            })
            .await?;

        debug!(id, "deleted tree cluster");
        Ok(())
    }
}
