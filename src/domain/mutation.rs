//! Mutation functions - the only write interface into entity fields
//!
//! Repositories build and update entities by applying an ordered list of
//! these closures to a default or freshly fetched value. Later mutations win
//! over earlier ones field by field, and each one is testable in isolation
//! as a pure function over an entity value.

use crate::contract::model::{
    Flowerbed, Image, Region, Sensor, SensorStatus, SoilCondition, Tree, TreeCluster, Vehicle,
    WateringStatus,
};
use chrono::{DateTime, Utc};

/// An ordered, composable field update applied to an entity being built.
pub type EntityFn<T> = Box<dyn FnOnce(&mut T) + Send>;

pub mod tree_cluster {
    use super::*;

    pub fn with_name(name: impl Into<String>) -> EntityFn<TreeCluster> {
        let name = name.into();
        Box::new(move |tc| tc.name = name)
    }

    pub fn with_address(address: impl Into<String>) -> EntityFn<TreeCluster> {
        let address = address.into();
        Box::new(move |tc| tc.address = address)
    }

    pub fn with_description(description: impl Into<String>) -> EntityFn<TreeCluster> {
        let description = description.into();
        Box::new(move |tc| tc.description = description)
    }

    pub fn with_region(region: Option<Region>) -> EntityFn<TreeCluster> {
        Box::new(move |tc| tc.region = region)
    }

    pub fn with_moisture_level(level: f64) -> EntityFn<TreeCluster> {
        Box::new(move |tc| tc.moisture_level = level)
    }

    /// Sets both coordinates as a unit. There is deliberately no way to set
    /// one coordinate without the other.
    pub fn with_position(latitude: f64, longitude: f64) -> EntityFn<TreeCluster> {
        Box::new(move |tc| {
            tc.latitude = Some(latitude);
            tc.longitude = Some(longitude);
        })
    }

    pub fn with_watering_status(status: WateringStatus) -> EntityFn<TreeCluster> {
        Box::new(move |tc| tc.watering_status = status)
    }

    pub fn with_soil_condition(condition: SoilCondition) -> EntityFn<TreeCluster> {
        Box::new(move |tc| tc.soil_condition = condition)
    }

    pub fn with_last_watered(at: Option<DateTime<Utc>>) -> EntityFn<TreeCluster> {
        Box::new(move |tc| tc.last_watered = at)
    }

    pub fn with_archived(archived: bool) -> EntityFn<TreeCluster> {
        Box::new(move |tc| tc.archived = archived)
    }
}

pub mod tree {
    use super::*;

    pub fn with_species(species: impl Into<String>) -> EntityFn<Tree> {
        let species = species.into();
        Box::new(move |t| t.species = species)
    }

    pub fn with_age(age: i32) -> EntityFn<Tree> {
        Box::new(move |t| t.age = age)
    }

    pub fn with_height_above_sea_level(height: f64) -> EntityFn<Tree> {
        Box::new(move |t| t.height_above_sea_level = height)
    }

    pub fn with_planting_year(year: i32) -> EntityFn<Tree> {
        Box::new(move |t| t.planting_year = year)
    }

    /// Sequence number of the tree within its cluster.
    pub fn with_number(number: i32) -> EntityFn<Tree> {
        Box::new(move |t| t.number = number)
    }

    pub fn with_position(latitude: f64, longitude: f64) -> EntityFn<Tree> {
        Box::new(move |t| {
            t.latitude = latitude;
            t.longitude = longitude;
        })
    }

    /// Back-reference to the owning cluster; the cluster record itself is
    /// persisted independently.
    pub fn with_tree_cluster(cluster: Option<TreeCluster>) -> EntityFn<Tree> {
        Box::new(move |t| t.tree_cluster = cluster)
    }

    pub fn with_sensor(sensor: Option<Sensor>) -> EntityFn<Tree> {
        Box::new(move |t| t.sensor = sensor)
    }

    pub fn with_images(images: Vec<Image>) -> EntityFn<Tree> {
        Box::new(move |t| t.images = images)
    }
}

pub mod sensor {
    use super::*;

    pub fn with_status(status: SensorStatus) -> EntityFn<Sensor> {
        Box::new(move |s| s.status = status)
    }
}

pub mod image {
    use super::*;

    pub fn with_url(url: impl Into<String>) -> EntityFn<Image> {
        let url = url.into();
        Box::new(move |i| i.url = url)
    }

    pub fn with_filename(filename: Option<String>) -> EntityFn<Image> {
        Box::new(move |i| i.filename = filename)
    }

    pub fn with_mime_type(mime_type: Option<String>) -> EntityFn<Image> {
        Box::new(move |i| i.mime_type = mime_type)
    }
}

pub mod vehicle {
    use super::*;

    pub fn with_number_plate(plate: impl Into<String>) -> EntityFn<Vehicle> {
        let plate = plate.into();
        Box::new(move |v| v.number_plate = plate)
    }

    pub fn with_description(description: impl Into<String>) -> EntityFn<Vehicle> {
        let description = description.into();
        Box::new(move |v| v.description = description)
    }

    pub fn with_water_capacity(liters: f64) -> EntityFn<Vehicle> {
        Box::new(move |v| v.water_capacity = liters)
    }
}

pub mod flowerbed {
    use super::*;

    pub fn with_address(address: impl Into<String>) -> EntityFn<Flowerbed> {
        let address = address.into();
        Box::new(move |f| f.address = address)
    }

    pub fn with_description(description: impl Into<String>) -> EntityFn<Flowerbed> {
        let description = description.into();
        Box::new(move |f| f.description = description)
    }

    pub fn with_size(square_meters: f64) -> EntityFn<Flowerbed> {
        Box::new(move |f| f.size = square_meters)
    }

    pub fn with_number_of_plants(count: i32) -> EntityFn<Flowerbed> {
        Box::new(move |f| f.number_of_plants = count)
    }

    pub fn with_moisture_level(level: f64) -> EntityFn<Flowerbed> {
        Box::new(move |f| f.moisture_level = level)
    }

    pub fn with_region(region: Option<Region>) -> EntityFn<Flowerbed> {
        Box::new(move |f| f.region = region)
    }

    pub fn with_sensor(sensor: Option<Sensor>) -> EntityFn<Flowerbed> {
        Box::new(move |f| f.sensor = sensor)
    }

    pub fn with_images(images: Vec<Image>) -> EntityFn<Flowerbed> {
        Box::new(move |f| f.images = images)
    }

    pub fn with_position(latitude: f64, longitude: f64) -> EntityFn<Flowerbed> {
        Box::new(move |f| {
            f.latitude = Some(latitude);
            f.longitude = Some(longitude);
        })
    }

    pub fn with_archived(archived: bool) -> EntityFn<Flowerbed> {
        Box::new(move |f| f.archived = archived)
    }
}

pub mod region {
    use super::*;

    pub fn with_name(name: impl Into<String>) -> EntityFn<Region> {
        let name = name.into();
        Box::new(move |r| r.name = name)
    }
}
