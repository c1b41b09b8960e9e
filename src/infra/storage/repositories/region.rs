//! SeaORM region repository

use crate::contract::model::Region;
use crate::contract::StorageError;
use crate::domain::mutation::EntityFn;
use crate::domain::repository::RegionRepository;
use crate::infra::storage::store::{EntityKind, Store};
use crate::infra::storage::entity;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use tracing::debug;

pub struct SeaOrmRegionRepository {
    store: Store,
}

impl SeaOrmRegionRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RegionRepository for SeaOrmRegionRepository {
    async fn get_all(&self) -> Result<Vec<Region>, StorageError> {
        let rows = entity::region::Entity::find()
            .order_by_asc(entity::region::Column::Id)
            .all(self.store.conn())
            .await
            .map_err(|err| self.store.classify(EntityKind::Region, err))?;

        Ok(rows.into_iter().map(Region::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Region, StorageError> {
        let row = self
            .store
            .find_one(
                self.store.conn(),
                EntityKind::Region,
                entity::region::Entity::find_by_id(id),
            )
            .await?;

        Ok(row.into())
    }

    async fn get_by_name(&self, name: &str) -> Result<Region, StorageError> {
        let row = self
            .store
            .find_one(
                self.store.conn(),
                EntityKind::Region,
                entity::region::Entity::find().filter(entity::region::Column::Name.eq(name)),
            )
            .await?;

        Ok(row.into())
    }

    async fn create(&self, mutations: Vec<EntityFn<Region>>) -> Result<Region, StorageError> {
        let mut region = Region::default();
        for mutation in mutations {
            mutation(&mut region);
        }

        let active: entity::region::ActiveModel = (&region).into();
        let result = entity::region::Entity::insert(active)
            .exec(self.store.conn())
            .await
            .map_err(|err| self.store.classify(EntityKind::Region, err))?;

        debug!(id = result.last_insert_id, "created region");
        self.get_by_id(result.last_insert_id).await
    }

    async fn update(
        &self,
        id: i32,
        mutations: Vec<EntityFn<Region>>,
    ) -> Result<Region, StorageError> {
        let mut region = self.get_by_id(id).await?;
        for mutation in mutations {
            mutation(&mut region);
        }

        let mut active: entity::region::ActiveModel = (&region).into();
        active.id = Set(id);
        active.updated_at = Set(Utc::now());
        entity::region::Entity::update(active)
            .exec(self.store.conn())
            .await
            .map_err(|err| self.store.classify(EntityKind::Region, err))?;

        self.get_by_id(id).await
    }

    async fn delete(&self, id: i32) -> Result<(), StorageError> {
        let result = entity::region::Entity::delete_by_id(id)
            .exec(self.store.conn())
            .await
            .map_err(|err| self.store.classify(EntityKind::Region, err))?;

        if result.rows_affected == 0 {
            return Err(EntityKind::Region.not_found());
        }

        debug!(id, "deleted region");
        Ok(())
    }
}
