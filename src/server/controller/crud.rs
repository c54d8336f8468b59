use std::marker::PhantomData;

use sea_orm::DatabaseConnection;

use crate::server::{data::crud::Resource, error::AppError, service::crud::CrudService};

/// Controller exposing the standard operations of a [`Resource`].
///
/// Constructed per request from the connection held in `AppState`.
pub struct CrudController<'a, R: Resource> {
    pub(crate) db: &'a DatabaseConnection,
    _resource: PhantomData<R>,
}

impl<'a, R: Resource> CrudController<'a, R> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            _resource: PhantomData,
        }
    }

    fn service(&self) -> CrudService<'a, R> {
        CrudService::new(self.db)
    }

    pub async fn find_all(&self) -> Result<Vec<R::Domain>, AppError> {
        self.service().find_all().await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<R::Domain, AppError> {
        self.service().find_by_id(id).await
    }

    pub async fn create(&self, fields: R::Fields) -> Result<R::Domain, AppError> {
        self.service().create(fields).await
    }

    pub async fn update(&self, id: i32, fields: R::Fields) -> Result<(), AppError> {
        self.service().update(id, fields).await
    }

    pub async fn patch(&self, id: i32, patch: R::Patch) -> Result<(), AppError> {
        self.service().patch(id, patch).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.service().delete(id).await
    }
}
