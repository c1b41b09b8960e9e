//! SeaORM sensor repository

use crate::contract::model::{Sensor, SensorData, SensorPayload, SensorStatus};
use crate::contract::StorageError;
use crate::domain::mutation::EntityFn;
use crate::domain::repository::SensorRepository;
use crate::infra::storage::store::{EntityKind, Store};
use crate::infra::storage::{entity, mapper};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use tracing::debug;

pub struct SeaOrmSensorRepository {
    store: Store,
}

impl SeaOrmSensorRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SensorRepository for SeaOrmSensorRepository {
    async fn get_all(&self) -> Result<Vec<Sensor>, StorageError> {
        let rows = entity::sensor::Entity::find()
            .order_by_asc(entity::sensor::Column::Id)
            .all(self.store.conn())
            .await
            .map_err(|err| self.store.classify(EntityKind::Sensor, err))?;

        Ok(rows.into_iter().map(Sensor::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Sensor, StorageError> {
        let row = self
            .store
            .find_one(
                self.store.conn(),
                EntityKind::Sensor,
                entity::sensor::Entity::find_by_id(id),
            )
            .await?;

        Ok(row.into())
    }

    async fn get_by_status(&self, status: SensorStatus) -> Result<Vec<Sensor>, StorageError> {
        let rows = entity::sensor::Entity::find()
            .filter(entity::sensor::Column::Status.eq(mapper::sensor_status_to_db(status)))
            .order_by_asc(entity::sensor::Column::Id)
            .all(self.store.conn())
            .await
            .map_err(|err| self.store.classify(EntityKind::Sensor, err))?;

        Ok(rows.into_iter().map(Sensor::from).collect())
    }

    async fn get_data_by_sensor_id(&self, id: i32) -> Result<Vec<SensorData>, StorageError> {
        // Reject unknown sensors before reading the series.
        self.store.check_sensor_exists(Some(id)).await?;

        let rows = entity::sensor_data::Entity::find()
            .filter(entity::sensor_data::Column::SensorId.eq(id))
            .order_by_desc(entity::sensor_data::Column::CreatedAt)
            .all(self.store.conn())
            .await
            .map_err(|err| self.store.classify(EntityKind::Sensor, err))?;

        rows.into_iter().map(mapper::sensor_data_from_row).collect()
    }

    async fn insert_data(
        &self,
        sensor_id: i32,
        payload: SensorPayload,
    ) -> Result<SensorData, StorageError> {
        self.store.check_sensor_exists(Some(sensor_id)).await?;

        let now = Utc::now();
        let active = entity::sensor_data::ActiveModel {
            id: NotSet,
            created_at: Set(now),
            updated_at: Set(now),
            sensor_id: Set(sensor_id),
            data: Set(mapper::encode_payload(&payload)?),
        };

        let result = entity::sensor_data::Entity::insert(active)
            .exec(self.store.conn())
            .await
            .map_err(|err| self.store.classify(EntityKind::Sensor, err))?;

        debug!(sensor_id, id = result.last_insert_id, "inserted sensor data");

        let row = self
            .store
            .find_one(
                self.store.conn(),
                EntityKind::Sensor,
                entity::sensor_data::Entity::find_by_id(result.last_insert_id),
            )
            .await?;

        mapper::sensor_data_from_row(row)
    }

    async fn create(&self, mutations: Vec<EntityFn<Sensor>>) -> Result<Sensor, StorageError> {
        let mut sensor = Sensor::default();
        for mutation in mutations {
            mutation(&mut sensor);
        }

        let active: entity::sensor::ActiveModel = (&sensor).into();
        let result = entity::sensor::Entity::insert(active)
            .exec(self.store.conn())
            .await
            .map_err(|err| self.store.classify(EntityKind::Sensor, err))?;

        debug!(id = result.last_insert_id, "created sensor");
        self.get_by_id(result.last_insert_id).await
    }

    async fn update(
        &self,
        id: i32,
        mutations: Vec<EntityFn<Sensor>>,
    ) -> Result<Sensor, StorageError> {
        let mut sensor = self.get_by_id(id).await?;
        for mutation in mutations {
            mutation(&mut sensor);
        }

        let mut active: entity::sensor::ActiveModel = (&sensor).into();
        active.id = Set(id);
        active.updated_at = Set(Utc::now());
        entity::sensor::Entity::update(active)
            .exec(self.store.conn())
            .await
            .map_err(|err| self.store.classify(EntityKind::Sensor, err))?;

        self.get_by_id(id).await
    }

    async fn delete(&self, id: i32) -> Result<(), StorageError> {
        // The time series goes with the sensor.
        let store = self.store.clone();
        self.store
            .with_transaction(move |txn| {
                Box::pin(async move {
                    entity::sensor_data::Entity::delete_many()
                        .filter(entity::sensor_data::Column::SensorId.eq(id))
                        .exec(txn)
                        .await
                        .map_err(|err| store.classify(EntityKind::Sensor, err))?;

                    let result = entity::sensor::Entity::delete_by_id(id)
                        .exec(txn)
                        .await
                        .map_err(|err| store.classify(EntityKind::Sensor, err))?;

                    if result.rows_affected == 0 {
                        return Err(EntityKind::Sensor.not_found());
                    }

                    Ok(())
                })
            })
            .await?;

        debug!(id, "deleted sensor");
        Ok(())
    }
}
