use std::marker::PhantomData;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::crud::{CrudRepository, Resource},
    error::AppError,
};

/// Service exposing the standard operations of a [`Resource`].
pub struct CrudService<'a, R: Resource> {
    pub(crate) db: &'a DatabaseConnection,
    _resource: PhantomData<R>,
}

impl<'a, R: Resource> CrudService<'a, R> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            _resource: PhantomData,
        }
    }

    fn repository(&self) -> CrudRepository<'a, R> {
        CrudRepository::new(self.db)
    }

    /// Gets every row of the resource ordered by id.
    pub async fn find_all(&self) -> Result<Vec<R::Domain>, AppError> {
        self.repository().find_all().await
    }

    /// Gets a single row by id, `NotFound` if it does not exist.
    pub async fn find_by_id(&self, id: i32) -> Result<R::Domain, AppError> {
        self.repository().find_by_id(id).await
    }

    /// Creates a new row and returns it with its assigned id.
    pub async fn create(&self, fields: R::Fields) -> Result<R::Domain, AppError> {
        let created = self.repository().create(fields).await?;

        tracing::debug!("Created {}", R::NAME);

        Ok(created)
    }

    /// Replaces every writable field of a row.
    pub async fn update(&self, id: i32, fields: R::Fields) -> Result<(), AppError> {
        self.repository().update(id, fields).await
    }

    /// Updates only the fields present in `patch`.
    pub async fn patch(&self, id: i32, patch: R::Patch) -> Result<(), AppError> {
        self.repository().patch(id, patch).await
    }

    /// Deletes a row by id.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.repository().delete(id).await?;

        tracing::debug!("Deleted {} {}", R::NAME, id);

        Ok(())
    }
}
