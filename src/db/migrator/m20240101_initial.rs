use crate::entities::{departments, locations, prelude::*};
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::Schema;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let schema = Schema::new(backend);

        // Referenced tables first: employees carries foreign keys to both.
        manager
            .create_table(
                schema
                    .create_table_from_entity(Locations)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(Departments)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(Employees)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_locations_name")
                    .table(Locations)
                    .col(locations::Column::Name)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // not unique: duplicate level tuples are resolved to the lowest id
        manager
            .create_index(
                Index::create()
                    .name("idx_departments_levels")
                    .table(Departments)
                    .col(departments::Column::CompanyLevel0)
                    .col(departments::Column::CompanyLevel1)
                    .col(departments::Column::CompanyLevel2)
                    .col(departments::Column::CompanyLevel3)
                    .col(departments::Column::CompanyLevel4)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employees).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Departments).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Locations).to_owned())
            .await
    }
}
