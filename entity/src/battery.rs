use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "battery")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub capacity: String,
    pub installation_date: Date,
    pub station_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::station::Entity",
        from = "Column::StationId",
        to = "super::station::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Station,
    #[sea_orm(has_many = "super::battery_level::Entity")]
    BatteryLevel,
}

impl Related<super::station::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Station.def()
    }
}

impl Related<super::battery_level::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BatteryLevel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
