//! Domain entities for green-space assets
//!
//! Pure domain types - no serde derives, no storage concerns. Storage row
//! representations live in `infra::storage::entity` and are projected through
//! `infra::storage::mapper`.

use chrono::{DateTime, Utc};
use std::net::IpAddr;
use std::time::Duration;
use url::Url;

/// Sentinel identifier carried by entities that have not been persisted yet.
/// A successful create replaces it with the storage-assigned id.
pub const UNASSIGNED_ID: i32 = 0;

/// Watering state of a tree cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WateringStatus {
    Good,
    Moderate,
    Bad,
    #[default]
    Unknown,
}

/// Soil condition of a tree cluster site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SoilCondition {
    Silty,
    Sandy,
    Loamy,
    Clayey,
    #[default]
    Unknown,
}

/// Operational state of a sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SensorStatus {
    Online,
    Offline,
    #[default]
    Unknown,
}

/// A single tree, optionally belonging to a cluster and carrying a sensor.
///
/// Cluster and sensor are back-references: the tree holds them for reads but
/// does not own their lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub tree_cluster: Option<TreeCluster>,
    pub sensor: Option<Sensor>,
    pub images: Vec<Image>,
    pub age: i32,
    pub height_above_sea_level: f64,
    pub planting_year: i32,
    pub species: String,
    /// Sequence number of the tree within its cluster.
    pub number: i32,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for Tree {
    fn default() -> Self {
        Self {
            id: UNASSIGNED_ID,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            tree_cluster: None,
            sensor: None,
            images: Vec::new(),
            age: 0,
            height_above_sea_level: 0.0,
            planting_year: 0,
            species: String::new(),
            number: 0,
            latitude: 0.0,
            longitude: 0.0,
        }
    }
}

/// A group of trees watered and assessed together.
///
/// Latitude and longitude are set as a unit: both present or both absent.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeCluster {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub region: Option<Region>,
    pub address: String,
    pub description: String,
    pub moisture_level: f64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub watering_status: WateringStatus,
    pub soil_condition: SoilCondition,
    pub archived: bool,
    pub last_watered: Option<DateTime<Utc>>,
    /// Trees owned by this cluster, ordered by their sequence number.
    pub trees: Vec<Tree>,
    pub name: String,
}

impl Default for TreeCluster {
    fn default() -> Self {
        Self {
            id: UNASSIGNED_ID,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            region: None,
            address: String::new(),
            description: String::new(),
            moisture_level: 0.0,
            latitude: None,
            longitude: None,
            watering_status: WateringStatus::Unknown,
            soil_condition: SoilCondition::Unknown,
            archived: false,
            last_watered: None,
            trees: Vec::new(),
            name: String::new(),
        }
    }
}

/// A moisture/telemetry sensor installed in the field.
#[derive(Debug, Clone, PartialEq)]
pub struct Sensor {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: SensorStatus,
}

impl Default for Sensor {
    fn default() -> Self {
        Self {
            id: UNASSIGNED_ID,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            status: SensorStatus::Unknown,
        }
    }
}

/// One time-series record reported by a sensor.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorData {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub payload: SensorPayload,
}

/// Decoded sensor telemetry. Persisted as a raw JSON column and decoded on
/// read; see `infra::storage::mapper`.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorPayload {
    pub device: String,
    pub battery: f64,
    pub humidity: f64,
    pub temperature: f64,
    /// Time since the device last booted.
    pub uptime: Duration,
    pub gateway: Option<Url>,
    pub device_ip: Option<IpAddr>,
}

impl Default for SensorPayload {
    fn default() -> Self {
        Self {
            device: String::new(),
            battery: 0.0,
            humidity: 0.0,
            temperature: 0.0,
            uptime: Duration::ZERO,
            gateway: None,
            device_ip: None,
        }
    }
}

/// An uploaded photograph attached to a tree or flowerbed.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub url: String,
    pub filename: Option<String>,
    pub mime_type: Option<String>,
}

impl Default for Image {
    fn default() -> Self {
        Self {
            id: UNASSIGNED_ID,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            url: String::new(),
            filename: None,
            mime_type: None,
        }
    }
}

/// A watering vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub number_plate: String,
    pub description: String,
    /// Tank capacity in liters.
    pub water_capacity: f64,
}

impl Default for Vehicle {
    fn default() -> Self {
        Self {
            id: UNASSIGNED_ID,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            number_plate: String::new(),
            description: String::new(),
            water_capacity: 0.0,
        }
    }
}

/// A planted bed, optionally monitored by a sensor.
#[derive(Debug, Clone, PartialEq)]
pub struct Flowerbed {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub sensor: Option<Sensor>,
    pub images: Vec<Image>,
    pub region: Option<Region>,
    /// Bed area in square meters.
    pub size: f64,
    pub description: String,
    pub number_of_plants: i32,
    pub moisture_level: f64,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub archived: bool,
}

impl Default for Flowerbed {
    fn default() -> Self {
        Self {
            id: UNASSIGNED_ID,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            sensor: None,
            images: Vec::new(),
            region: None,
            size: 0.0,
            description: String::new(),
            number_of_plants: 0,
            moisture_level: 0.0,
            address: String::new(),
            latitude: None,
            longitude: None,
            archived: false,
        }
    }
}

/// A municipal district referenced by clusters and flowerbeds.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
}

impl Default for Region {
    fn default() -> Self {
        Self {
            id: UNASSIGNED_ID,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            name: String::new(),
        }
    }
}
