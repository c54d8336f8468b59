use sea_orm_migration::{prelude::*, schema::*};

use super::m20261017_000006_create_battery_table::Battery;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BatteryLevel::Table)
                    .if_not_exists()
                    .col(pk_auto(BatteryLevel::Id))
                    .col(date_time(BatteryLevel::DateTime))
                    .col(double(BatteryLevel::ChargeLevel))
                    .col(integer(BatteryLevel::BatteryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_battery_level_battery_id")
                            .from(BatteryLevel::Table, BatteryLevel::BatteryId)
                            .to(Battery::Table, Battery::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BatteryLevel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BatteryLevel {
    Table,
    Id,
    DateTime,
    ChargeLevel,
    BatteryId,
}
