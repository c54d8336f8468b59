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
                    .table(PanelAngle::Table)
                    .if_not_exists()
                    .col(pk_auto(PanelAngle::Id))
                    .col(date_time(PanelAngle::DateTime))
                    .col(double(PanelAngle::Angle))
                    .col(integer(PanelAngle::SolarPanelId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_panel_angle_solar_panel_id")
                            .from(PanelAngle::Table, PanelAngle::SolarPanelId)
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
            .drop_table(Table::drop().table(PanelAngle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PanelAngle {
    Table,
    Id,
    DateTime,
    Angle,
    SolarPanelId,
}
