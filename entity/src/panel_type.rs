use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "panel_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub type_name: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::solar_panel::Entity")]
    SolarPanel,
}

impl Related<super::solar_panel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SolarPanel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
