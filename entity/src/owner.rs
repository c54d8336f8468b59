use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "owner")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub contact_number: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::owner_has_station::Entity")]
    OwnerHasStation,
}

impl Related<super::owner_has_station::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OwnerHasStation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
