use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PanelType::Table)
                    .if_not_exists()
                    .col(pk_auto(PanelType::Id))
                    .col(string(PanelType::TypeName))
                    .col(text(PanelType::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PanelType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PanelType {
    Table,
    Id,
    TypeName,
    Description,
}
