//! Repository traits for data access
//!
//! One trait per entity kind. Implementations are in
//! `infra::storage::repositories`. Create and update take an ordered list of
//! mutation functions; there is no direct field-setting API.

use crate::contract::model::{
    Flowerbed, Image, Region, Sensor, SensorData, SensorPayload, SensorStatus, Tree, TreeCluster,
    Vehicle,
};
use crate::contract::StorageError;
use crate::domain::mutation::EntityFn;
use async_trait::async_trait;

#[async_trait]
pub trait TreeRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Tree>, StorageError>;

    async fn get_by_id(&self, id: i32) -> Result<Tree, StorageError>;

    /// Trees of one cluster, ordered by their sequence number.
    async fn get_by_tree_cluster_id(&self, cluster_id: i32) -> Result<Vec<Tree>, StorageError>;

    async fn create(&self, mutations: Vec<EntityFn<Tree>>) -> Result<Tree, StorageError>;

    async fn update(
        &self,
        id: i32,
        mutations: Vec<EntityFn<Tree>>,
    ) -> Result<Tree, StorageError>;

    async fn delete(&self, id: i32) -> Result<(), StorageError>;
}

#[async_trait]
pub trait TreeClusterRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<TreeCluster>, StorageError>;

    async fn get_by_id(&self, id: i32) -> Result<TreeCluster, StorageError>;

    async fn create(
        &self,
        mutations: Vec<EntityFn<TreeCluster>>,
    ) -> Result<TreeCluster, StorageError>;

    async fn update(
        &self,
        id: i32,
        mutations: Vec<EntityFn<TreeCluster>>,
    ) -> Result<TreeCluster, StorageError>;

    /// Marks the cluster archived without touching any other column.
    async fn archive(&self, id: i32) -> Result<(), StorageError>;

    async fn delete(&self, id: i32) -> Result<(), StorageError>;
}

#[async_trait]
pub trait SensorRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Sensor>, StorageError>;

    async fn get_by_id(&self, id: i32) -> Result<Sensor, StorageError>;

    async fn get_by_status(&self, status: SensorStatus) -> Result<Vec<Sensor>, StorageError>;

    /// Time-series records for one sensor, newest first, payloads decoded.
    async fn get_data_by_sensor_id(&self, id: i32) -> Result<Vec<SensorData>, StorageError>;

    async fn insert_data(
        &self,
        sensor_id: i32,
        payload: SensorPayload,
    ) -> Result<SensorData, StorageError>;

    async fn create(&self, mutations: Vec<EntityFn<Sensor>>) -> Result<Sensor, StorageError>;

    async fn update(
        &self,
        id: i32,
        mutations: Vec<EntityFn<Sensor>>,
    ) -> Result<Sensor, StorageError>;

    async fn delete(&self, id: i32) -> Result<(), StorageError>;
}

#[async_trait]
pub trait ImageRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Image>, StorageError>;

    async fn get_by_id(&self, id: i32) -> Result<Image, StorageError>;

    async fn create(&self, mutations: Vec<EntityFn<Image>>) -> Result<Image, StorageError>;

    async fn update(
        &self,
        id: i32,
        mutations: Vec<EntityFn<Image>>,
    ) -> Result<Image, StorageError>;

    async fn delete(&self, id: i32) -> Result<(), StorageError>;
}

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Vehicle>, StorageError>;

    async fn get_by_id(&self, id: i32) -> Result<Vehicle, StorageError>;

    async fn get_by_number_plate(&self, plate: &str) -> Result<Vehicle, StorageError>;

    async fn create(&self, mutations: Vec<EntityFn<Vehicle>>) -> Result<Vehicle, StorageError>;

    async fn update(
        &self,
        id: i32,
        mutations: Vec<EntityFn<Vehicle>>,
    ) -> Result<Vehicle, StorageError>;

    async fn delete(&self, id: i32) -> Result<(), StorageError>;
}

#[async_trait]
pub trait FlowerbedRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Flowerbed>, StorageError>;

    async fn get_by_id(&self, id: i32) -> Result<Flowerbed, StorageError>;

    async fn create(
        &self,
        mutations: Vec<EntityFn<Flowerbed>>,
    ) -> Result<Flowerbed, StorageError>;

    async fn update(
        &self,
        id: i32,
        mutations: Vec<EntityFn<Flowerbed>>,
    ) -> Result<Flowerbed, StorageError>;

    async fn archive(&self, id: i32) -> Result<(), StorageError>;

    async fn delete(&self, id: i32) -> Result<(), StorageError>;
}

#[async_trait]
pub trait RegionRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Region>, StorageError>;

    async fn get_by_id(&self, id: i32) -> Result<Region, StorageError>;

    async fn get_by_name(&self, name: &str) -> Result<Region, StorageError>;

    async fn create(&self, mutations: Vec<EntityFn<Region>>) -> Result<Region, StorageError>;

    async fn update(
        &self,
        id: i32,
        mutations: Vec<EntityFn<Region>>,
    ) -> Result<Region, StorageError>;

    async fn delete(&self, id: i32) -> Result<(), StorageError>;
}
