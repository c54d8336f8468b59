use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "solar_panel")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub installation_date: Date,
    pub panel_type_id: i32,
    pub station_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::panel_type::Entity",
        from = "Column::PanelTypeId",
        to = "super::panel_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    PanelType,
    #[sea_orm(
        belongs_to = "super::station::Entity",
        from = "Column::StationId",
        to = "super::station::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Station,
    #[sea_orm(has_many = "super::panel_angle::Entity")]
    PanelAngle,
    #[sea_orm(has_many = "super::panel_production::Entity")]
    PanelProduction,
}

impl Related<super::panel_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PanelType.def()
    }
}

impl Related<super::station::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Station.def()
    }
}

impl Related<super::panel_angle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PanelAngle.def()
    }
}

impl Related<super::panel_production::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PanelProduction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
