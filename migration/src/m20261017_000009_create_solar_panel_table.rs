use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261017_000002_create_station_table::Station,
    m20261017_000008_create_panel_type_table::PanelType,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SolarPanel::Table)
                    .if_not_exists()
                    .col(pk_auto(SolarPanel::Id))
                    .col(date(SolarPanel::InstallationDate))
                    .col(integer(SolarPanel::PanelTypeId))
                    .col(integer(SolarPanel::StationId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_solar_panel_panel_type_id")
                            .from(SolarPanel::Table, SolarPanel::PanelTypeId)
                            .to(PanelType::Table, PanelType::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_solar_panel_station_id")
                            .from(SolarPanel::Table, SolarPanel::StationId)
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
            .drop_table(Table::drop().table(SolarPanel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SolarPanel {
    Table,
    Id,
    InstallationDate,
    PanelTypeId,
    StationId,
}
