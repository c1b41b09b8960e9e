//! Green-space asset persistence layer
//!
//! A typed, transactional veneer over the relational store backing a
//! municipal green-space backend: trees, tree clusters, sensors, images,
//! vehicles, flowerbeds, and regions. Repositories build and update entities
//! through ordered mutation functions and translate every raw database
//! failure into the [`contract::StorageError`] taxonomy exactly once, inside
//! the [`infra::storage::Store`].

// Public exports
pub mod contract;
pub use contract::{
    Flowerbed, Image, Region, Sensor, SensorData, SensorPayload, SensorStatus, SoilCondition,
    StorageError, Tree, TreeCluster, Vehicle, WateringStatus,
};

pub mod domain;
pub use domain::{
    FlowerbedRepository, ImageRepository, RegionRepository, SensorRepository,
    TreeClusterRepository, TreeRepository, VehicleRepository,
};

pub mod config;
pub mod infra;
pub use infra::storage::{connect, EntityKind, Repositories, Store};
