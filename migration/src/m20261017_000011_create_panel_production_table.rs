use sea_orm_migration::{prelude::*, schema::*};

use super::m20261017_000009_create_solar_panel_table::SolarPanel;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PanelProduction::Table)
                    .if_not_exists()
                    .col(pk_auto(PanelProduction::Id))
                    .col(date_time(PanelProduction::DateTime))
                    .col(double(PanelProduction::Production))
                    .col(integer(PanelProduction::SolarPanelId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_panel_production_solar_panel_id")
                            .from(PanelProduction::Table, PanelProduction::SolarPanelId)
                            .to(SolarPanel::Table, SolarPanel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PanelProduction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PanelProduction {
    Table,
    Id,
    DateTime,
    Production,
    SolarPanelId,
}
