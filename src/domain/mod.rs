//! Domain layer - repository contracts and the mutation catalog

pub mod mutation;
pub mod repository;

pub use mutation::EntityFn;
pub use repository::{
    FlowerbedRepository, ImageRepository, RegionRepository, SensorRepository,
    TreeClusterRepository, TreeRepository, VehicleRepository,
};
