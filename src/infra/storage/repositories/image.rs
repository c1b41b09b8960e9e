//! SeaORM image repository

use crate::contract::model::Image;
use crate::contract::StorageError;
use crate::domain::mutation::EntityFn;
use crate::domain::repository::ImageRepository;
use crate::infra::storage::store::{EntityKind, Store};
use crate::infra::storage::entity;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{EntityTrait, QueryOrder};
use tracing::debug;

pub struct SeaOrmImageRepository {
    store: Store,
}

impl SeaOrmImageRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ImageRepository for SeaOrmImageRepository {
    async fn get_all(&self) -> Result<Vec<Image>, StorageError> {
        let rows = entity::image::Entity::find()
            .order_by_asc(entity::image::Column::Id)
            .all(self.store.conn())
            .await
            .map_err(|err| self.store.classify(EntityKind::Image, err))?;

        Ok(rows.into_iter().map(Image::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Image, StorageError> {
        let row = self
            .store
            .find_one(
                self.store.conn(),
                EntityKind::Image,
                entity::image::Entity::find_by_id(id),
            )
            .await?;

        Ok(row.into())
    }

    async fn create(&self, mutations: Vec<EntityFn<Image>>) -> Result<Image, StorageError> {
        let mut image = Image::default();
        for mutation in mutations {
            mutation(&mut image);
        }

        let active: entity::image::ActiveModel = (&image).into();
        let result = entity::image::Entity::insert(active)
            .exec(self.store.conn())
            .await
            .map_err(|err| self.store.classify(EntityKind::Image, err))?;

        debug!(id = result.last_insert_id, "created image");
        self.get_by_id(result.last_insert_id).await
    }

    async fn update(
        &self,
        id: i32,
        mutations: Vec<EntityFn<Image>>,
    ) -> Result<Image, StorageError> {
        let mut image = self.get_by_id(id).await?;
        for mutation in mutations {
            mutation(&mut image);
        }

        let mut active: entity::image::ActiveModel = (&image).into();
        active.id = Set(id);
        active.updated_at = Set(Utc::now());
        entity::image::Entity::update(active)
            .exec(self.store.conn())
            .await
            .map_err(|err| self.store.classify(EntityKind::Image, err))?;

        self.get_by_id(id).await
    }

    async fn delete(&self, id: i32) -> Result<(), StorageError> {
        let result = entity::image::Entity::delete_by_id(id)
            .exec(self.store.conn())
            .await
            .map_err(|err| self.store.classify(EntityKind::Image, err))?;

        if result.rows_affected == 0 {
            return Err(EntityKind::Image.not_found());
        }

        debug!(id, "deleted image");
        Ok(())
    }
}
