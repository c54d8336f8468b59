//! Panel type factory for creating test panel type entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct PanelTypeFactory<'a> {
    db: &'a DatabaseConnection,
    type_name: String,
    description: String,
}

impl<'a> PanelTypeFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            type_name: format!("Monocrystalline {}", next_id()),
            description: "High efficiency silicon panel".to_string(),
        }
    }

    pub fn type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub async fn build(self) -> Result<entity::panel_type::Model, DbErr> {
        entity::panel_type::ActiveModel {
            id: ActiveValue::NotSet,
            type_name: ActiveValue::Set(self.type_name),
            description: ActiveValue::Set(self.description),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_panel_type(db: &DatabaseConnection) -> Result<entity::panel_type::Model, DbErr> {
    PanelTypeFactory::new(db).build().await
}
