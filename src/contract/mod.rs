//! Contract layer - public types shared with the service layer
//!
//! Transport-agnostic domain models and the storage error taxonomy. Models
//! carry no serde derives; row representations live in the storage layer.

pub mod error;
pub mod model;

pub use error::StorageError;
pub use model::{
    Flowerbed, Image, Region, Sensor, SensorData, SensorPayload, SensorStatus, SoilCondition,
    Tree, TreeCluster, Vehicle, WateringStatus, UNASSIGNED_ID,
};
