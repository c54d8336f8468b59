use sea_orm_migration::{prelude::*, schema::*};

use super::m20261017_000002_create_station_table::Station;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Battery::Table)
                    .if_not_exists()
                    .col(pk_auto(Battery::Id))
                    .col(string(Battery::Capacity))
                    .col(date(Battery::InstallationDate))
                    .col(integer(Battery::StationId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_battery_station_id")
                            .from(Battery::Table, Battery::StationId)
                            .to(Station::Table, Station::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Battery::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Battery {
    Table,
    Id,
    Capacity,
    InstallationDate,
    StationId,
}
