//! SeaORM repository implementations, one per entity kind

pub mod flowerbed;
pub mod image;
pub mod region;
pub mod sensor;
pub mod tree;
pub mod tree_cluster;
pub mod vehicle;

pub use flowerbed::SeaOrmFlowerbedRepository;
pub use image::SeaOrmImageRepository;
pub use region::SeaOrmRegionRepository;
pub use sensor::SeaOrmSensorRepository;
pub use tree::SeaOrmTreeRepository;
pub use tree_cluster::SeaOrmTreeClusterRepository;
pub use vehicle::SeaOrmVehicleRepository;

use crate::domain::repository::{
    FlowerbedRepository, ImageRepository, RegionRepository, SensorRepository,
    TreeClusterRepository, TreeRepository, VehicleRepository,
};
use crate::infra::storage::store::Store;
use std::sync::Arc;

/// The full repository set over one shared store, handed to the service
/// layer as trait objects.
pub struct Repositories {
    pub tree: Arc<dyn TreeRepository>,
    pub tree_cluster: Arc<dyn TreeClusterRepository>,
    pub sensor: Arc<dyn SensorRepository>,
    pub image: Arc<dyn ImageRepository>,
    pub vehicle: Arc<dyn VehicleRepository>,
    pub flowerbed: Arc<dyn FlowerbedRepository>,
    pub region: Arc<dyn RegionRepository>,
}

impl Repositories {
    pub fn new(store: Store) -> Self {
        Self {
            tree: Arc::new(SeaOrmTreeRepository::new(store.clone())),
            tree_cluster: Arc::new(SeaOrmTreeClusterRepository::new(store.clone())),
            sensor: Arc::new(SeaOrmSensorRepository::new(store.clone())),
            image: Arc::new(SeaOrmImageRepository::new(store.clone())),
            vehicle: Arc::new(SeaOrmVehicleRepository::new(store.clone())),
            flowerbed: Arc::new(SeaOrmFlowerbedRepository::new(store.clone())),
            region: Arc::new(SeaOrmRegionRepository::new(store)),
        }
    }
}
