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
                    .table(EnergySale::Table)
                    .if_not_exists()
                    .col(pk_auto(EnergySale::Id))
                    .col(double(EnergySale::EnergySold))
                    .col(double(EnergySale::PricePerKwh))
                    .col(date_time(EnergySale::DateTime))
                    .col(integer(EnergySale::StationId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_energy_sale_station_id")
                            .from(EnergySale::Table, EnergySale::StationId)
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
            .drop_table(Table::drop().table(EnergySale::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EnergySale {
    Table,
    Id,
    EnergySold,
    PricePerKwh,
    DateTime,
    StationId,
}
