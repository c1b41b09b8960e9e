//! SeaORM vehicle repository

use crate::contract::model::Vehicle;
use crate::contract::StorageError;
use crate::domain::mutation::EntityFn;
use crate::domain::repository::VehicleRepository;
use crate::infra::storage::store::{EntityKind, Store};
use crate::infra::storage::entity;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use tracing::debug;

pub struct SeaOrmVehicleRepository {
    store: Store,
}

impl SeaOrmVehicleRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl VehicleRepository for SeaOrmVehicleRepository {
    async fn get_all(&self) -> Result<Vec<Vehicle>, StorageError> {
        let rows = entity::vehicle::Entity::find()
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.store.conn())
            .await
            .map_err(|err| self.store.classify(EntityKind::Vehicle, err))?;

        Ok(rows.into_iter().map(Vehicle::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Vehicle, StorageError> {
        let row = self
            .store
            .find_one(
                self.store.conn(),
                EntityKind::Vehicle,
                entity::vehicle::Entity::find_by_id(id),
            )
            .await?;

        Ok(row.into())
    }

    async fn get_by_number_plate(&self, plate: &str) -> Result<Vehicle, StorageError> {
        let row = self
            .store
            .find_one(
                self.store.conn(),
                EntityKind::Vehicle,
                entity::vehicle::Entity::find()
                    .filter(entity::vehicle::Column::NumberPlate.eq(plate)),
            )
            .await?;

        Ok(row.into())
    }

    async fn create(&self, mutations: Vec<EntityFn<Vehicle>>) -> Result<Vehicle, StorageError> {
        let mut vehicle = Vehicle::default();
        for mutation in mutations {
            mutation(&mut vehicle);
        }

        let active: entity::vehicle::ActiveModel = (&vehicle).into();
        let result = entity::vehicle::Entity::insert(active)
            .exec(self.store.conn())
            .await
            .map_err(|err| self.store.classify(EntityKind::Vehicle, err))?;

        debug!(id = result.last_insert_id, "created vehicle");
        self.get_by_id(result.last_insert_id).await
    }

    async fn update(
        &self,
        id: i32,
        mutations: Vec<EntityFn<Vehicle>>,
    ) -> Result<Vehicle, StorageError> {
        let mut vehicle = self.get_by_id(id).await?;
        for mutation in mutations {
            mutation(&mut vehicle);
        }

        let mut active: entity::vehicle::ActiveModel = (&vehicle).into();
        active.id = Set(id);
        active.updated_at = Set(Utc::now());
        entity::vehicle::Entity::update(active)
            .exec(self.store.conn())
            .await
            .map_err(|err| self.store.classify(EntityKind::Vehicle, err))?;

        self.get_by_id(id).await
    }

    async fn delete(&self, id: i32) -> Result<(), StorageError> {
        let result = entity::vehicle::Entity::delete_by_id(id)
            .exec(self.store.conn())
            .await
            .map_err(|err| self.store.classify(EntityKind::Vehicle, err))?;

        if result.rows_affected == 0 {
            return Err(EntityKind::Vehicle.not_found());
        }

        debug!(id, "deleted vehicle");
        Ok(())
    }
}
