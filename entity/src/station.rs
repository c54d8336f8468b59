use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "station")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub total_capacity: f64,
    pub installation_date: Date,
    pub location_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::LocationId",
        to = "super::location::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Location,
    #[sea_orm(has_many = "super::battery::Entity")]
    Battery,
    #[sea_orm(has_many = "super::solar_panel::Entity")]
    SolarPanel,
    #[sea_orm(has_many = "super::energy_sale::Entity")]
    EnergySale,
    #[sea_orm(has_many = "super::owner_has_station::Entity")]
    OwnerHasStation,
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::battery::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Battery.def()
    }
}

impl Related<super::solar_panel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SolarPanel.def()
    }
}

impl Related<super::energy_sale::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EnergySale.def()
    }
}

impl Related<super::owner_has_station::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OwnerHasStation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
