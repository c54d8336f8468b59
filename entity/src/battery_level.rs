use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "battery_level")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date_time: DateTime,
    pub charge_level: f64,
    pub battery_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::battery::Entity",
        from = "Column::BatteryId",
        to = "super::battery::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Battery,
}

impl Related<super::battery::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Battery.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
