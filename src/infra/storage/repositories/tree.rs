//! SeaORM tree repository
//!
//! A tree row carries optional back-references to its cluster and sensor and
//! owns an ordered image attachment list through the `tree_images` join
//! table. All referenced entities are validated before a write is issued.

use crate::contract::model::{Image, Sensor, Tree};
use crate::contract::StorageError;
use crate::domain::mutation::EntityFn;
use crate::domain::repository::TreeRepository;
use crate::infra::storage::store::{EntityKind, Store};
use crate::infra::storage::{entity, mapper};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder};
use tracing::debug;

pub struct SeaOrmTreeRepository {
    store: Store,
}

impl SeaOrmTreeRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    async fn validate_references(&self, tree: &Tree) -> Result<(), StorageError> {
        self.store
            .check_tree_cluster_exists(tree.tree_cluster.as_ref().map(|tc| tc.id))
            .await?;
        self.store
            .check_sensor_exists(tree.sensor.as_ref().map(|s| s.id))
            .await?;
        for image in &tree.images {
            self.store.check_image_exists(Some(image.id)).await?;
        }
        Ok(())
    }

    /// Replaces the tree's image attachments inside the given transaction.
    /// Reads return attachments ordered by image id.
    async fn relink_images(
        store: &Store,
        txn: &DatabaseTransaction,
        tree_id: i32,
        images: &[Image],
    ) -> Result<(), StorageError> {
        entity::tree_image::Entity::delete_many()
            .filter(entity::tree_image::Column::TreeId.eq(tree_id))
            .exec(txn)
            .await
            .map_err(|err| store.classify(EntityKind::Tree, err))?;

        if images.is_empty() {
            return Ok(());
        }

        let links = images.iter().map(|image| entity::tree_image::ActiveModel {
            tree_id: Set(tree_id),
            image_id: Set(image.id),
        });
        entity::tree_image::Entity::insert_many(links)
            .exec(txn)
            .await
            .map_err(|err| store.classify(EntityKind::Tree, err))?;

        Ok(())
    }

    /// Loads the cluster and sensor back-references and the ordered image
    /// list for one tree row. The nested cluster is shallow: its own region
    /// and tree list stay unpopulated.
    async fn hydrate(&self, row: entity::tree::Model) -> Result<Tree, StorageError> {
        let tree_cluster = match row.tree_cluster_id {
            Some(cluster_id) => entity::tree_cluster::Entity::find_by_id(cluster_id)
                .one(self.store.conn())
                .await
                .map_err(|err| self.store.classify(EntityKind::TreeCluster, err))?
                .map(|cluster| mapper::tree_cluster_from_row(cluster, None, Vec::new())),
            None => None,
        };

        let sensor = match row.sensor_id {
            Some(sensor_id) => entity::sensor::Entity::find_by_id(sensor_id)
                .one(self.store.conn())
                .await
                .map_err(|err| self.store.classify(EntityKind::Sensor, err))?
                .map(Sensor::from),
            None => None,
        };

        let links = entity::tree_image::Entity::find()
            .filter(entity::tree_image::Column::TreeId.eq(row.id))
            .order_by_asc(entity::tree_image::Column::ImageId)
            .all(self.store.conn())
            .await
            .map_err(|err| self.store.classify(EntityKind::Tree, err))?;

        let mut images = Vec::with_capacity(links.len());
        for link in links {
            let image = entity::image::Entity::find_by_id(link.image_id)
                .one(self.store.conn())
                .await
                .map_err(|err| self.store.classify(EntityKind::Image, err))?;
            if let Some(image) = image {
                images.push(Image::from(image));
            }
        }

        Ok(mapper::tree_from_row(row, tree_cluster, sensor, images))
    }
}

#[async_trait]
impl TreeRepository for SeaOrmTreeRepository {
    async fn get_all(&self) -> Result<Vec<Tree>, StorageError> {
        let rows = entity::tree::Entity::find()
            .order_by_asc(entity::tree::Column::Id)
            .all(self.store.conn())
            .await
            .map_err(|err| self.store.classify(EntityKind::Tree, err))?;

        let mut trees = Vec::with_capacity(rows.len());
        for row in rows {
            trees.push(self.hydrate(row).await?);
        }

        Ok(trees)
    }

    async fn get_by_id(&self, id: i32) -> Result<Tree, StorageError> {
        let row = self
            .store
            .find_one(
                self.store.conn(),
                EntityKind::Tree,
                entity::tree::Entity::find_by_id(id),
            )
            .await?;

        self.hydrate(row).await
    }

    async fn get_by_tree_cluster_id(&self, cluster_id: i32) -> Result<Vec<Tree>, StorageError> {
        self.store.check_tree_cluster_exists(Some(cluster_id)).await?;

        let rows = entity::tree::Entity::find()
            .filter(entity::tree::Column::TreeClusterId.eq(cluster_id))
            .order_by_asc(entity::tree::Column::Number)
            .all(self.store.conn())
            .await
            .map_err(|err| self.store.classify(EntityKind::Tree, err))?;

        let mut trees = Vec::with_capacity(rows.len());
        for row in rows {
            trees.push(self.hydrate(row).await?);
        }

        Ok(trees)
    }

    async fn create(&self, mutations: Vec<EntityFn<Tree>>) -> Result<Tree, StorageError> {
        let mut tree = Tree::default();
        for mutation in mutations {
            mutation(&mut tree);
        }

        self.validate_references(&tree).await?;

        // The closure outlives this frame, so it captures owned values only.
        let store = self.store.clone();
        let active = mapper::tree_active(&tree);
        let images = tree.images.clone();
        let id = self
            .store
            .with_transaction(move |txn| {
                Box::pin(async move {
                    let result = entity::tree::Entity::insert(active)
                        .exec(txn)
                        .await
                        .map_err(|err| store.classify(EntityKind::Tree, err))?;
                    let id = result.last_insert_id;

                    Self::relink_images(&store, txn, id, &images).await?;

                    Ok(id)
                })
            })
            .await?;

        debug!(id, "created tree");
        self.get_by_id(id).await
    }

    async fn update(&self, id: i32, mutations: Vec<EntityFn<Tree>>) -> Result<Tree, StorageError> {
        let mut tree = self.get_by_id(id).await?;
        for mutation in mutations {
            mutation(&mut tree);
        }

        self.validate_references(&tree).await?;

        let store = self.store.clone();
        let mut active = mapper::tree_active(&tree);
        active.id = Set(id);
        active.updated_at = Set(Utc::now());
        let images = tree.images.clone();
        self.store
            .with_transaction(move |txn| {
                Box::pin(async move {
                    entity::tree::Entity::update(active)
                        .exec(txn)
                        .await
                        .map_err(|err| store.classify(EntityKind::Tree, err))?;

                    Self::relink_images(&store, txn, id, &images).await
                })
            })
            .await?;

        self.get_by_id(id).await
    }

    async fn delete(&self, id: i32) -> Result<(), StorageError> {
        let store = self.store.clone();
        self.store
            .with_transaction(move |txn| {
                Box::pin(async move {
                    entity::tree_image::Entity::delete_many()
                        .filter(entity::tree_image::Column::TreeId.eq(id))
                        .exec(txn)
                        .await
                        .map_err(|err| store.classify(EntityKind::Tree, err))?;

                    let result = entity::tree::Entity::delete_by_id(id)
                        .exec(txn)
                        .await
                        .map_err(|err| store.classify(EntityKind::Tree, err))?;

                    if result.rows_affected == 0 {
                        return Err(EntityKind::Tree.not_found());
                    }

                    Ok(())
                })
            })
            .await?;

        debug!(id, "deleted tree");
        Ok(())
    }
}
