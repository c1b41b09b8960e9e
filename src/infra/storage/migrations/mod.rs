//! Database migrations for the green-space schema

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250110_000001_create_regions_images_sensors::Migration),
            Box::new(m20250110_000002_create_tree_clusters::Migration),
            Box::new(m20250110_000003_create_trees::Migration),
            Box::new(m20250110_000004_create_vehicles_flowerbeds::Migration),
        ]
    }
}

mod m20250110_000001_create_regions_images_sensors {
    use super::*;

    pub struct Migration;

    // Inline modules share one file, so the name is spelled out instead of
    // derived from the file stem.
    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250110_000001_create_regions_images_sensors"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Regions::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Regions::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Regions::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Regions::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Regions::Name).string().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Images::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Images::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Images::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Images::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Images::Url).string().not_null())
                        .col(ColumnDef::new(Images::Filename).string())
                        .col(ColumnDef::new(Images::MimeType).string())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Sensors::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Sensors::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Sensors::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Sensors::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Sensors::Status).string().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(SensorData::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SensorData::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(SensorData::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SensorData::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(SensorData::SensorId).integer().not_null())
                        .col(ColumnDef::new(SensorData::Data).json().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SensorData::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Sensors::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Images::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Regions::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Regions {
        Table,
        Id,
        CreatedAt,
        UpdatedAt,
        Name,
    }

    #[derive(DeriveIden)]
    enum Images {
        Table,
        Id,
        CreatedAt,
        UpdatedAt,
        Url,
        Filename,
        MimeType,
    }

    #[derive(DeriveIden)]
    enum Sensors {
        Table,
        Id,
        CreatedAt,
        UpdatedAt,
        Status,
    }

    #[derive(DeriveIden)]
    enum SensorData {
        Table,
        Id,
        CreatedAt,
        UpdatedAt,
        SensorId,
        Data,
    }
}

mod m20250110_000002_create_tree_clusters {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250110_000002_create_tree_clusters"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(TreeClusters::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(TreeClusters::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(TreeClusters::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(TreeClusters::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(TreeClusters::RegionId).integer())
                        .col(ColumnDef::new(TreeClusters::Address).string().not_null())
                        .col(
                            ColumnDef::new(TreeClusters::Description)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(TreeClusters::MoistureLevel)
                                .double()
                                .not_null(),
                        )
                        .col(ColumnDef::new(TreeClusters::Latitude).double())
                        .col(ColumnDef::new(TreeClusters::Longitude).double())
                        .col(
                            ColumnDef::new(TreeClusters::WateringStatus)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(TreeClusters::SoilCondition)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(TreeClusters::Archived)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(TreeClusters::LastWatered).timestamp_with_time_zone())
                        .col(ColumnDef::new(TreeClusters::Name).string().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(TreeClusters::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum TreeClusters {
        Table,
        Id,
        CreatedAt,
        UpdatedAt,
        RegionId,
        Address,
        Description,
        MoistureLevel,
        Latitude,
        Longitude,
        WateringStatus,
        SoilCondition,
        Archived,
        LastWatered,
        Name,
    }
}

mod m20250110_000003_create_trees {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250110_000003_create_trees"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Trees::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Trees::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Trees::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Trees::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Trees::TreeClusterId).integer())
                        .col(ColumnDef::new(Trees::SensorId).integer())
                        .col(ColumnDef::new(Trees::Age).integer().not_null())
                        .col(
                            ColumnDef::new(Trees::HeightAboveSeaLevel)
                                .double()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Trees::PlantingYear).integer().not_null())
                        .col(ColumnDef::new(Trees::Species).string().not_null())
                        .col(ColumnDef::new(Trees::Number).integer().not_null())
                        .col(ColumnDef::new(Trees::Latitude).double().not_null())
                        .col(ColumnDef::new(Trees::Longitude).double().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(TreeImages::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(TreeImages::TreeId).integer().not_null())
                        .col(ColumnDef::new(TreeImages::ImageId).integer().not_null())
                        .primary_key(
                            Index::create()
                                .col(TreeImages::TreeId)
                                .col(TreeImages::ImageId),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(TreeImages::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Trees::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Trees {
        Table,
        Id,
        CreatedAt,
        UpdatedAt,
        TreeClusterId,
        SensorId,
        Age,
        HeightAboveSeaLevel,
        PlantingYear,
        Species,
        Number,
        Latitude,
        Longitude,
    }

    #[derive(DeriveIden)]
    enum TreeImages {
        Table,
        TreeId,
        ImageId,
    }
}

mod m20250110_000004_create_vehicles_flowerbeds {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250110_000004_create_vehicles_flowerbeds"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Vehicles::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Vehicles::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Vehicles::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Vehicles::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Vehicles::NumberPlate).string().not_null())
                        .col(ColumnDef::new(Vehicles::Description).string().not_null())
                        .col(ColumnDef::new(Vehicles::WaterCapacity).double().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Flowerbeds::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Flowerbeds::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Flowerbeds::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Flowerbeds::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Flowerbeds::SensorId).integer())
                        .col(ColumnDef::new(Flowerbeds::RegionId).integer())
                        .col(ColumnDef::new(Flowerbeds::Size).double().not_null())
                        .col(ColumnDef::new(Flowerbeds::Description).string().not_null())
                        .col(
                            ColumnDef::new(Flowerbeds::NumberOfPlants)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Flowerbeds::MoistureLevel)
                                .double()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Flowerbeds::Address).string().not_null())
                        .col(ColumnDef::new(Flowerbeds::Latitude).double())
                        .col(ColumnDef::new(Flowerbeds::Longitude).double())
                        .col(
                            ColumnDef::new(Flowerbeds::Archived)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(FlowerbedImages::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(FlowerbedImages::FlowerbedId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(FlowerbedImages::ImageId)
                                .integer()
                                .not_null(),
                        )
                        .primary_key(
                            Index::create()
                                .col(FlowerbedImages::FlowerbedId)
                                .col(FlowerbedImages::ImageId),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(FlowerbedImages::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Flowerbeds::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Vehicles::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Vehicles {
        Table,
        Id,
        CreatedAt,
        UpdatedAt,
        NumberPlate,
        Description,
        WaterCapacity,
    }

    #[derive(DeriveIden)]
    enum Flowerbeds {
        Table,
        Id,
        CreatedAt,
        UpdatedAt,
        SensorId,
        RegionId,
        Size,
        Description,
        NumberOfPlants,
        MoistureLevel,
        Address,
        Latitude,
        Longitude,
        Archived,
    }

    #[derive(DeriveIden)]
    enum FlowerbedImages {
        Table,
        FlowerbedId,
        ImageId,
    }
}
