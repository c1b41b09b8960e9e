//! SeaORM flowerbed repository

use crate::contract::model::{Flowerbed, Image, Region, Sensor};
use crate::contract::StorageError;
use crate::domain::mutation::EntityFn;
use crate::domain::repository::FlowerbedRepository;
use crate::infra::storage::store::{EntityKind, Store};
use crate::infra::storage::{entity, mapper};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder};
use tracing::debug;

pub struct SeaOrmFlowerbedRepository {
    store: Store,
}

impl SeaOrmFlowerbedRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    async fn validate_references(&self, flowerbed: &Flowerbed) -> Result<(), StorageError> {
        self.store
            .check_sensor_exists(flowerbed.sensor.as_ref().map(|s| s.id))
            .await?;
        self.store
            .check_region_exists(flowerbed.region.as_ref().map(|r| r.id))
            .await?;
        for image in &flowerbed.images {
            self.store.check_image_exists(Some(image.id)).await?;
        }
        Ok(())
    }

    async fn relink_images(
        store: &Store,
        txn: &DatabaseTransaction,
        flowerbed_id: i32,
        images: &[Image],
    ) -> Result<(), StorageError> {
        entity::flowerbed_image::Entity::delete_many()
            .filter(entity::flowerbed_image::Column::FlowerbedId.eq(flowerbed_id))
            .exec(txn)
            .await
            .map_err(|err| store.classify(EntityKind::Flowerbed, err))?;

        if images.is_empty() {
            return Ok(());
        }

        let links = images
            .iter()
            .map(|image| entity::flowerbed_image::ActiveModel {
                flowerbed_id: Set(flowerbed_id),
                image_id: Set(image.id),
            });
        entity::flowerbed_image::Entity::insert_many(links)
            .exec(txn)
            .await
            .map_err(|err| store.classify(EntityKind::Flowerbed, err))?;

        Ok(())
    }

    async fn hydrate(&self, row: entity::flowerbed::Model) -> Result<Flowerbed, StorageError> {
        let sensor = match row.sensor_id {
            Some(sensor_id) => entity::sensor::Entity::find_by_id(sensor_id)
                .one(self.store.conn())
                .await
                .map_err(|err| self.store.classify(EntityKind::Sensor, err))?
                .map(Sensor::from),
            None => None,
        };

        let region = match row.region_id {
            Some(region_id) => entity::region::Entity::find_by_id(region_id)
                .one(self.store.conn())
                .await
                .map_err(|err| self.store.classify(EntityKind::Region, err))?
                .map(Region::from),
            None => None,
        };

        let links = entity::flowerbed_image::Entity::find()
            .filter(entity::flowerbed_image::Column::FlowerbedId.eq(row.id))
            .order_by_asc(entity::flowerbed_image::Column::ImageId)
            .all(self.store.conn())
            .await
            .map_err(|err| self.store.classify(EntityKind::Flowerbed, err))?;

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

        Ok(mapper::flowerbed_from_row(row, sensor, region, images))
    }
}

#[async_trait]
impl FlowerbedRepository for SeaOrmFlowerbedRepository {
    async fn get_all(&self) -> Result<Vec<Flowerbed>, StorageError> {
        let rows = entity::flowerbed::Entity::find()
            .order_by_asc(entity::flowerbed::Column::Id)
            .all(self.store.conn())
            .await
            .map_err(|err| self.store.classify(EntityKind::Flowerbed, err))?;

        let mut flowerbeds = Vec::with_capacity(rows.len());
        for row in rows {
            flowerbeds.push(self.hydrate(row).await?);
        }

        Ok(flowerbeds)
    }

    async fn get_by_id(&self, id: i32) -> Result<Flowerbed, StorageError> {
        let row = self
            .store
            .find_one(
                self.store.conn(),
                EntityKind::Flowerbed,
                entity::flowerbed::Entity::find_by_id(id),
            )
            .await?;

        self.hydrate(row).await
    }

    async fn create(
        &self,
        mutations: Vec<EntityFn<Flowerbed>>,
    ) -> Result<Flowerbed, StorageError> {
        let mut flowerbed = Flowerbed::default();
        for mutation in mutations {
            mutation(&mut flowerbed);
        }

        self.validate_references(&flowerbed).await?;

        // The closure outlives this frame, so it captures owned values only.
        let store = self.store.clone();
        let active = mapper::flowerbed_active(&flowerbed);
        let position = (flowerbed.latitude, flowerbed.longitude);
        let images = flowerbed.images.clone();
        let id = self
            .store
            .with_transaction(move |txn| {
                Box::pin(async move {
                    let result = entity::flowerbed::Entity::insert(active)
                        .exec(txn)
                        .await
                        .map_err(|err| store.classify(EntityKind::Flowerbed, err))?;
                    let id = result.last_insert_id;

                    if let (Some(latitude), Some(longitude)) = position {
                        let location = entity::flowerbed::ActiveModel {
                            id: Set(id),
                            latitude: Set(Some(latitude)),
                            longitude: Set(Some(longitude)),
                            ..Default::default()
                        };
                        entity::flowerbed::Entity::update(location)
                            .exec(txn)
                            .await
                            .map_err(|err| store.classify(EntityKind::Flowerbed, err))?;
                    }

                    Self::relink_images(&store, txn, id, &images).await?;

                    Ok(id)
                })
            })
            .await?;

        debug!(id, "created flowerbed");
        self.get_by_id(id).await
    }

    async fn update(
        &self,
        id: i32,
        mutations: Vec<EntityFn<Flowerbed>>,
    ) -> Result<Flowerbed, StorageError> {
        let mut flowerbed = self.get_by_id(id).await?;
        for mutation in mutations {
            mutation(&mut flowerbed);
        }

        self.validate_references(&flowerbed).await?;

        let store = self.store.clone();
        let mut active = mapper::flowerbed_active(&flowerbed);
        active.id = Set(id);
        active.updated_at = Set(Utc::now());
        match (flowerbed.latitude, flowerbed.longitude) {
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
        let images = flowerbed.images.clone();
        self.store
            .with_transaction(move |txn| {
                Box::pin(async move {
                    entity::flowerbed::Entity::update(active)
                        .exec(txn)
                        .await
                        .map_err(|err| store.classify(EntityKind::Flowerbed, err))?;

                    Self::relink_images(&store, txn, id, &images).await
                })
            })
            .await?;

        self.get_by_id(id).await
    }

    async fn archive(&self, id: i32) -> Result<(), StorageError> {
        let active = entity::flowerbed::ActiveModel {
            id: Set(id),
            archived: Set(true),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        entity::flowerbed::Entity::update(active)
            .exec(self.store.conn())
            .await
            .map_err(|err| self.store.classify(EntityKind::Flowerbed, err))?;

        debug!(id, "archived flowerbed");
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), StorageError> {
        let store = self.store.clone();
        self.store
            .with_transaction(move |txn| {
                Box::pin(async move {
                    entity::flowerbed_image::Entity::delete_many()
                        .filter(entity::flowerbed_image::Column::FlowerbedId.eq(id))
                        .exec(txn)
                        .await
                        .map_err(|err| store.classify(EntityKind::Flowerbed, err))?;

                    let result = entity::flowerbed::Entity::delete_by_id(id)
                        .exec(txn)
                        .await
                        .map_err(|err| store.classify(EntityKind::Flowerbed, err))?;

                    if result.rows_affected == 0 {
                        return Err(EntityKind::Flowerbed.not_found());
                    }

                    Ok(())
                })
            })
            .await?;

        debug!(id, "deleted flowerbed");
        Ok(())
    }
}
