//! SeaORM entities for database tables
//!
//! Optional references are nullable columns, never zero sentinels; a missing
//! relation is `None` all the way up to the domain model.

pub mod region {
    use sea_orm::entity::prelude::*;

    /// Regions table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "regions")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub created_at: DateTimeUtc,
        pub updated_at: DateTimeUtc,
        pub name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod image {
    use sea_orm::entity::prelude::*;

    /// Images table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "images")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub created_at: DateTimeUtc,
        pub updated_at: DateTimeUtc,
        pub url: String,
        pub filename: Option<String>,
        pub mime_type: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod sensor {
    use sea_orm::entity::prelude::*;

    /// Sensors table entity; status is stored as a string and decoded in the
    /// mapper.
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "sensors")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub created_at: DateTimeUtc,
        pub updated_at: DateTimeUtc,
        pub status: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::sensor_data::Entity")]
        SensorData,
    }

    impl Related<super::sensor_data::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::SensorData.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod sensor_data {
    use sea_orm::entity::prelude::*;

    /// Sensor time-series table entity; the payload is a raw JSON column.
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "sensor_data")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub created_at: DateTimeUtc,
        pub updated_at: DateTimeUtc,
        pub sensor_id: i32,
        pub data: Json,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::sensor::Entity",
            from = "Column::SensorId",
            to = "super::sensor::Column::Id"
        )]
        Sensor,
    }

    impl Related<super::sensor::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Sensor.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod tree_cluster {
    use sea_orm::entity::prelude::*;

    /// Tree clusters table entity
    ///
    /// Latitude and longitude are written only as a pair; the insert
    /// projection leaves them NULL and the dependent location write fills
    /// both or neither.
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "tree_clusters")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub created_at: DateTimeUtc,
        pub updated_at: DateTimeUtc,
        pub region_id: Option<i32>,
        pub address: String,
        pub description: String,
        pub moisture_level: f64,
        pub latitude: Option<f64>,
        pub longitude: Option<f64>,
        pub watering_status: String,
        pub soil_condition: String,
        pub archived: bool,
        pub last_watered: Option<DateTimeUtc>,
        pub name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::region::Entity",
            from = "Column::RegionId",
            to = "super::region::Column::Id"
        )]
        Region,
        #[sea_orm(has_many = "super::tree::Entity")]
        Trees,
    }

    impl Related<super::region::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Region.def()
        }
    }

    impl Related<super::tree::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Trees.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod tree {
    use sea_orm::entity::prelude::*;

    /// Trees table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "trees")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub created_at: DateTimeUtc,
        pub updated_at: DateTimeUtc,
        pub tree_cluster_id: Option<i32>,
        pub sensor_id: Option<i32>,
        pub age: i32,
        pub height_above_sea_level: f64,
        pub planting_year: i32,
        pub species: String,
        pub number: i32,
        pub latitude: f64,
        pub longitude: f64,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::tree_cluster::Entity",
            from = "Column::TreeClusterId",
            to = "super::tree_cluster::Column::Id"
        )]
        TreeCluster,
        #[sea_orm(
            belongs_to = "super::sensor::Entity",
            from = "Column::SensorId",
            to = "super::sensor::Column::Id"
        )]
        Sensor,
    }

    impl Related<super::tree_cluster::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::TreeCluster.def()
        }
    }

    impl Related<super::sensor::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Sensor.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod tree_image {
    use sea_orm::entity::prelude::*;

    /// Join table attaching images to trees, insertion order preserved by id.
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "tree_images")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub tree_id: i32,
        #[sea_orm(primary_key, auto_increment = false)]
        pub image_id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::tree::Entity",
            from = "Column::TreeId",
            to = "super::tree::Column::Id"
        )]
        Tree,
        #[sea_orm(
            belongs_to = "super::image::Entity",
            from = "Column::ImageId",
            to = "super::image::Column::Id"
        )]
        Image,
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod vehicle {
    use sea_orm::entity::prelude::*;

    /// Vehicles table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "vehicles")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub created_at: DateTimeUtc,
        pub updated_at: DateTimeUtc,
        pub number_plate: String,
        pub description: String,
        pub water_capacity: f64,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod flowerbed {
    use sea_orm::entity::prelude::*;

    /// Flowerbeds table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "flowerbeds")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub created_at: DateTimeUtc,
        pub updated_at: DateTimeUtc,
        pub sensor_id: Option<i32>,
        pub region_id: Option<i32>,
        pub size: f64,
        pub description: String,
        pub number_of_plants: i32,
        pub moisture_level: f64,
        pub address: String,
        pub latitude: Option<f64>,
        pub longitude: Option<f64>,
        pub archived: bool,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::sensor::Entity",
            from = "Column::SensorId",
            to = "super::sensor::Column::Id"
        )]
        Sensor,
        #[sea_orm(
            belongs_to = "super::region::Entity",
            from = "Column::RegionId",
            to = "super::region::Column::Id"
        )]
        Region,
    }

    impl Related<super::region::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Region.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod flowerbed_image {
    use sea_orm::entity::prelude::*;

    /// Join table attaching images to flowerbeds.
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "flowerbed_images")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub flowerbed_id: i32,
        #[sea_orm(primary_key, auto_increment = false)]
        pub image_id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::flowerbed::Entity",
            from = "Column::FlowerbedId",
            to = "super::flowerbed::Column::Id"
        )]
        Flowerbed,
        #[sea_orm(
            belongs_to = "super::image::Entity",
            from = "Column::ImageId",
            to = "super::image::Column::Id"
        )]
        Image,
    }

    impl ActiveModelBehavior for ActiveModel {}
}
