use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "panel_production")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date_time: DateTime,
    pub production: f64,
    pub solar_panel_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::solar_panel::Entity",
        from = "Column::SolarPanelId",
        to = "super::solar_panel::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    SolarPanel,
}

impl Related<super::solar_panel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SolarPanel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
