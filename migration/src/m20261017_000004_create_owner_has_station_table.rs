use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261017_000002_create_station_table::Station, m20261017_000003_create_owner_table::Owner,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OwnerHasStation::Table)
                    .if_not_exists()
                    .col(pk_auto(OwnerHasStation::Id))
                    .col(integer(OwnerHasStation::OwnerId))
                    .col(integer(OwnerHasStation::StationId))
                    .col(double(OwnerHasStation::OwnershipPercentage))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_owner_has_station_owner_id")
                            .from(OwnerHasStation::Table, OwnerHasStation::OwnerId)
                            .to(Owner::Table, Owner::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_owner_has_station_station_id")
                            .from(OwnerHasStation::Table, OwnerHasStation::StationId)
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
            .drop_table(Table::drop().table(OwnerHasStation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OwnerHasStation {
    Table,
    Id,
    OwnerId,
    StationId,
    OwnershipPercentage,
}
