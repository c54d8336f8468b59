//! Owner factory for creating test owner entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct OwnerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    surname: String,
    contact_number: i64,
}

impl<'a> OwnerFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();

        Self {
            db,
            name: "Jan".to_string(),
            surname: format!("Owner {}", id),
            contact_number: 500_000_000 + id as i64,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = surname.into();
        self
    }

    pub fn contact_number(mut self, contact_number: i64) -> Self {
        self.contact_number = contact_number;
        self
    }

    pub async fn build(self) -> Result<entity::owner::Model, DbErr> {
        entity::owner::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            surname: ActiveValue::Set(self.surname),
            contact_number: ActiveValue::Set(self.contact_number),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_owner(db: &DatabaseConnection) -> Result<entity::owner::Model, DbErr> {
    OwnerFactory::new(db).build().await
}
