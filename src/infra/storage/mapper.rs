//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models. Row-to-domain
//! conversions never fail on well-formed input: unrecognized stored enum
//! strings fall back to `Unknown`, and absent relations map to `None` rather
//! than zero-valued entities. The sensor payload is the one exception - it is
//! an opaque JSON column whose decoding can legitimately fail.

use super::entity;
use super::scalar;
use crate::contract::model::{
    Flowerbed, Image, Region, Sensor, SensorData, SensorPayload, SensorStatus, SoilCondition,
    Tree, TreeCluster, Vehicle, WateringStatus,
};
use crate::contract::StorageError;
use sea_orm::ActiveValue::{NotSet, Set};

// ===== Enum codecs =====

pub fn watering_status_to_db(status: WateringStatus) -> &'static str {
    match status {
        WateringStatus::Good => "good",
        WateringStatus::Moderate => "moderate",
        WateringStatus::Bad => "bad",
        WateringStatus::Unknown => "unknown",
    }
}

pub fn parse_watering_status(value: &str) -> WateringStatus {
    match value {
        "good" => WateringStatus::Good,
        "moderate" => WateringStatus::Moderate,
        "bad" => WateringStatus::Bad,
        _ => WateringStatus::Unknown,
    }
}

pub fn soil_condition_to_db(condition: SoilCondition) -> &'static str {
    match condition {
        SoilCondition::Silty => "silty",
        SoilCondition::Sandy => "sandy",
        SoilCondition::Loamy => "loamy",
        SoilCondition::Clayey => "clayey",
        SoilCondition::Unknown => "unknown",
    }
}

pub fn parse_soil_condition(value: &str) -> SoilCondition {
    match value {
        "silty" => SoilCondition::Silty,
        "sandy" => SoilCondition::Sandy,
        "loamy" => SoilCondition::Loamy,
        "clayey" => SoilCondition::Clayey,
        _ => SoilCondition::Unknown,
    }
}

pub fn sensor_status_to_db(status: SensorStatus) -> &'static str {
    match status {
        SensorStatus::Online => "online",
        SensorStatus::Offline => "offline",
        SensorStatus::Unknown => "unknown",
    }
}

pub fn parse_sensor_status(value: &str) -> SensorStatus {
    match value {
        "online" => SensorStatus::Online,
        "offline" => SensorStatus::Offline,
        _ => SensorStatus::Unknown,
    }
}

// ===== Region =====

impl From<entity::region::Model> for Region {
    fn from(row: entity::region::Model) -> Self {
        Self {
            id: row.id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            name: row.name,
        }
    }
}

impl From<&Region> for entity::region::ActiveModel {
    fn from(model: &Region) -> Self {
        Self {
            id: NotSet,
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
            name: Set(model.name.clone()),
        }
    }
}

// ===== Image =====

impl From<entity::image::Model> for Image {
    fn from(row: entity::image::Model) -> Self {
        Self {
            id: row.id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            url: row.url,
            filename: row.filename,
            mime_type: row.mime_type,
        }
    }
}

impl From<&Image> for entity::image::ActiveModel {
    fn from(model: &Image) -> Self {
        Self {
            id: NotSet,
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
            url: Set(model.url.clone()),
            filename: Set(model.filename.clone()),
            mime_type: Set(model.mime_type.clone()),
        }
    }
}

// ===== Sensor =====

impl From<entity::sensor::Model> for Sensor {
    fn from(row: entity::sensor::Model) -> Self {
        Self {
            id: row.id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            status: parse_sensor_status(&row.status),
        }
    }
}

impl From<&Sensor> for entity::sensor::ActiveModel {
    fn from(model: &Sensor) -> Self {
        Self {
            id: NotSet,
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
            status: Set(sensor_status_to_db(model.status).to_string()),
        }
    }
}

// ===== Vehicle =====

impl From<entity::vehicle::Model> for Vehicle {
    fn from(row: entity::vehicle::Model) -> Self {
        Self {
            id: row.id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            number_plate: row.number_plate,
            description: row.description,
            water_capacity: row.water_capacity,
        }
    }
}

impl From<&Vehicle> for entity::vehicle::ActiveModel {
    fn from(model: &Vehicle) -> Self {
        Self {
            id: NotSet,
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
            number_plate: Set(model.number_plate.clone()),
            description: Set(model.description.clone()),
            water_capacity: Set(model.water_capacity),
        }
    }
}

// ===== TreeCluster =====

/// Builds a fully populated cluster from its row and the separately fetched
/// region and tree rows. Tree order is preserved as given.
pub fn tree_cluster_from_row(
    row: entity::tree_cluster::Model,
    region: Option<Region>,
    trees: Vec<Tree>,
) -> TreeCluster {
    TreeCluster {
        id: row.id,
        created_at: row.created_at,
        updated_at: row.updated_at,
        region,
        address: row.address,
        description: row.description,
        moisture_level: row.moisture_level,
        latitude: row.latitude,
        longitude: row.longitude,
        watering_status: parse_watering_status(&row.watering_status),
        soil_condition: parse_soil_condition(&row.soil_condition),
        archived: row.archived,
        last_watered: row.last_watered,
        trees,
        name: row.name,
    }
}

/// Insert projection for a cluster. Latitude and longitude are deliberately
/// left unset; the dependent location write fills both or neither.
pub fn tree_cluster_active(model: &TreeCluster) -> entity::tree_cluster::ActiveModel {
    entity::tree_cluster::ActiveModel {
        id: NotSet,
        created_at: Set(model.created_at),
        updated_at: Set(model.updated_at),
        region_id: Set(model.region.as_ref().map(|r| r.id)),
        address: Set(model.address.clone()),
        description: Set(model.description.clone()),
        moisture_level: Set(model.moisture_level),
        latitude: NotSet,
        longitude: NotSet,
        watering_status: Set(watering_status_to_db(model.watering_status).to_string()),
        soil_condition: Set(soil_condition_to_db(model.soil_condition).to_string()),
        archived: Set(model.archived),
        last_watered: Set(model.last_watered),
        name: Set(model.name.clone()),
    }
}

// ===== Tree =====

/// Builds a fully populated tree from its row and the separately fetched
/// relations. Image order is preserved as given.
pub fn tree_from_row(
    row: entity::tree::Model,
    tree_cluster: Option<TreeCluster>,
    sensor: Option<Sensor>,
    images: Vec<Image>,
) -> Tree {
    Tree {
        id: row.id,
        created_at: row.created_at,
        updated_at: row.updated_at,
        tree_cluster,
        sensor,
        images,
        age: row.age,
        height_above_sea_level: row.height_above_sea_level,
        planting_year: row.planting_year,
        species: row.species,
        number: row.number,
        latitude: row.latitude,
        longitude: row.longitude,
    }
}

pub fn tree_active(model: &Tree) -> entity::tree::ActiveModel {
    entity::tree::ActiveModel {
        id: NotSet,
        created_at: Set(model.created_at),
        updated_at: Set(model.updated_at),
        tree_cluster_id: Set(model.tree_cluster.as_ref().map(|tc| tc.id)),
        sensor_id: Set(model.sensor.as_ref().map(|s| s.id)),
        age: Set(model.age),
        height_above_sea_level: Set(model.height_above_sea_level),
        planting_year: Set(model.planting_year),
        species: Set(model.species.clone()),
        number: Set(model.number),
        latitude: Set(model.latitude),
        longitude: Set(model.longitude),
    }
}

// ===== Flowerbed =====

pub fn flowerbed_from_row(
    row: entity::flowerbed::Model,
    sensor: Option<Sensor>,
    region: Option<Region>,
    images: Vec<Image>,
) -> Flowerbed {
    Flowerbed {
        id: row.id,
        created_at: row.created_at,
        updated_at: row.updated_at,
        sensor,
        images,
        region,
        size: row.size,
        description: row.description,
        number_of_plants: row.number_of_plants,
        moisture_level: row.moisture_level,
        address: row.address,
        latitude: row.latitude,
        longitude: row.longitude,
        archived: row.archived,
    }
}

/// Insert projection for a flowerbed; position handled like the cluster's.
pub fn flowerbed_active(model: &Flowerbed) -> entity::flowerbed::ActiveModel {
    entity::flowerbed::ActiveModel {
        id: NotSet,
        created_at: Set(model.created_at),
        updated_at: Set(model.updated_at),
        sensor_id: Set(model.sensor.as_ref().map(|s| s.id)),
        region_id: Set(model.region.as_ref().map(|r| r.id)),
        size: Set(model.size),
        description: Set(model.description.clone()),
        number_of_plants: Set(model.number_of_plants),
        moisture_level: Set(model.moisture_level),
        address: Set(model.address.clone()),
        latitude: NotSet,
        longitude: NotSet,
        archived: Set(model.archived),
    }
}

// ===== Sensor payload =====

/// JSON representation of the sensor payload column. Durations are stored as
/// whole seconds, URLs and addresses as optional strings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct SensorPayloadJson {
    device: String,
    battery: f64,
    humidity: f64,
    temperature: f64,
    uptime_seconds: i64,
    gateway: Option<String>,
    device_ip: Option<String>,
}

impl From<&SensorPayload> for SensorPayloadJson {
    fn from(payload: &SensorPayload) -> Self {
        Self {
            device: payload.device.clone(),
            battery: payload.battery,
            humidity: payload.humidity,
            temperature: payload.temperature,
            uptime_seconds: scalar::duration_to_seconds(payload.uptime),
            gateway: scalar::url_to_string(payload.gateway.as_ref()),
            device_ip: scalar::ip_to_string(payload.device_ip),
        }
    }
}

impl From<SensorPayloadJson> for SensorPayload {
    fn from(json: SensorPayloadJson) -> Self {
        Self {
            device: json.device,
            battery: json.battery,
            humidity: json.humidity,
            temperature: json.temperature,
            uptime: scalar::seconds_to_duration(json.uptime_seconds),
            gateway: scalar::string_to_url(json.gateway.as_deref()),
            device_ip: scalar::string_to_ip(json.device_ip.as_deref()),
        }
    }
}

pub fn encode_payload(payload: &SensorPayload) -> Result<serde_json::Value, StorageError> {
    serde_json::to_value(SensorPayloadJson::from(payload)).map_err(StorageError::PayloadDecode)
}

pub fn decode_payload(value: serde_json::Value) -> Result<SensorPayload, StorageError> {
    let json: SensorPayloadJson =
        serde_json::from_value(value).map_err(StorageError::PayloadDecode)?;
    Ok(json.into())
}

pub fn sensor_data_from_row(row: entity::sensor_data::Model) -> Result<SensorData, StorageError> {
    Ok(SensorData {
        id: row.id,
        created_at: row.created_at,
        updated_at: row.updated_at,
        payload: decode_payload(row.data)?,
    })
}
