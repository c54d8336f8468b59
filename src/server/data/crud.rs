//! Generic CRUD repository shared by every resource.
//!
//! A resource is described once by implementing [`Resource`] on a zero-sized marker type.
//! The descriptor names the SeaORM entity, its active model, the domain model returned to
//! callers and the parameter types used for full and partial updates. `CrudRepository`
//! then provides the standard operations for any descriptor, and resource specific
//! queries are added as inherent impls on the concrete instantiation.

use std::marker::PhantomData;

use sea_orm::{
    sea_query::{DeleteStatement, SelectStatement},
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, FromQueryResult, IntoActiveModel, Iterable,
    PrimaryKeyToColumn, PrimaryKeyTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait,
    Value,
};

use crate::server::error::AppError;

/// Descriptor binding a domain model to its backing table.
pub trait Resource: Send + Sync + 'static {
    /// Human readable entity name used in response messages, e.g. `"Station"`.
    const NAME: &'static str;

    type Entity: EntityTrait<Model = Self::Model, PrimaryKey = Self::PrimaryKey>;
    type Model: IntoActiveModel<Self::ActiveModel> + FromQueryResult + Send + Sync;
    type PrimaryKey: PrimaryKeyTrait<ValueType = i32>
        + PrimaryKeyToColumn<Column = <Self::Entity as EntityTrait>::Column>;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + Default
        + Send
        + Sync;

    /// Domain model handed to services and controllers.
    type Domain: Send;
    /// Complete set of writable fields, used for creation and full replacement.
    type Fields: Send;
    /// Writable fields where every field is optional, used for partial updates.
    type Patch: Send;

    /// Converts a row into the domain model.
    fn from_entity(model: Self::Model) -> Self::Domain;

    /// Sets every writable column of `active` from `fields`.
    fn apply_fields(active: &mut Self::ActiveModel, fields: Self::Fields);

    /// Sets only the columns present in `patch`, leaving the rest untouched.
    fn apply_patch(active: &mut Self::ActiveModel, patch: Self::Patch);
}

/// Repository providing the standard database operations for a [`Resource`].
pub struct CrudRepository<'a, R: Resource> {
    pub(crate) db: &'a DatabaseConnection,
    _resource: PhantomData<R>,
}

impl<'a, R: Resource> CrudRepository<'a, R> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CrudRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            _resource: PhantomData,
        }
    }

    /// Gets every row of the resource's table ordered by primary key.
    ///
    /// # Returns
    /// - `Ok(Vec<Domain>)` - All rows (empty if the table is empty)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_all(&self) -> Result<Vec<R::Domain>, AppError> {
        let entities = fetch_all::<R::Model>(self.db, Self::ordered().into_query()).await?;

        Ok(entities.into_iter().map(R::from_entity).collect())
    }

    /// Finds a single row by primary key.
    ///
    /// # Arguments
    /// - `id` - Primary key of the row
    ///
    /// # Returns
    /// - `Ok(Domain)` - The requested row
    /// - `Err(AppError::NotFound)` - No row with that id exists
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<R::Domain, AppError> {
        let entity = self.find_model(id).await?;

        Ok(R::from_entity(entity))
    }

    /// Gets every row whose `column` equals `value`, ordered by primary key.
    ///
    /// Building block for the foreign key filters exposed by individual resources.
    ///
    /// # Arguments
    /// - `column` - Column to compare
    /// - `value` - Value the column must equal
    ///
    /// # Returns
    /// - `Ok(Vec<Domain>)` - Matching rows (empty if none match)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_column(
        &self,
        column: <R::Entity as EntityTrait>::Column,
        value: i32,
    ) -> Result<Vec<R::Domain>, AppError> {
        let query = Self::ordered().filter(column.eq(value)).into_query();
        let entities = fetch_all::<R::Model>(self.db, query).await?;

        Ok(entities.into_iter().map(R::from_entity).collect())
    }

    /// Inserts a new row; the identifier is assigned by the database.
    ///
    /// # Arguments
    /// - `fields` - Values for every writable column
    ///
    /// # Returns
    /// - `Ok(Domain)` - The created row including its assigned id
    /// - `Err(AppError::BadRequest)` - A foreign key does not resolve to an existing row
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, fields: R::Fields) -> Result<R::Domain, AppError> {
        let mut active = <R::ActiveModel as Default>::default();
        R::apply_fields(&mut active, fields);

        let entity = active.insert(self.db).await?;

        Ok(R::from_entity(entity))
    }

    /// Replaces every writable column of an existing row.
    ///
    /// # Arguments
    /// - `id` - Primary key of the row to replace
    /// - `fields` - New values for every writable column
    ///
    /// # Returns
    /// - `Ok(())` - The row was updated
    /// - `Err(AppError::NotFound)` - No row with that id exists
    /// - `Err(AppError::BadRequest)` - A foreign key does not resolve to an existing row
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, id: i32, fields: R::Fields) -> Result<(), AppError> {
        let mut active = self.find_model(id).await?.into_active_model();
        R::apply_fields(&mut active, fields);

        active.update(self.db).await?;

        Ok(())
    }

    /// Updates only the columns present in `patch`.
    ///
    /// # Arguments
    /// - `id` - Primary key of the row to modify
    /// - `patch` - Values for the columns to change
    ///
    /// # Returns
    /// - `Ok(())` - The row was updated (or the patch was empty)
    /// - `Err(AppError::NotFound)` - No row with that id exists
    /// - `Err(AppError::BadRequest)` - A foreign key does not resolve to an existing row
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn patch(&self, id: i32, patch: R::Patch) -> Result<(), AppError> {
        let mut active = self.find_model(id).await?.into_active_model();
        R::apply_patch(&mut active, patch);

        if active.is_changed() {
            active.update(self.db).await?;
        }

        Ok(())
    }

    /// Deletes a row by primary key.
    ///
    /// # Arguments
    /// - `id` - Primary key of the row to delete
    ///
    /// # Returns
    /// - `Ok(())` - The row was deleted
    /// - `Err(AppError::NotFound)` - No row with that id exists
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = self.db.execute(&Self::delete_query(id)).await?;

        if result.rows_affected() == 0 {
            return Err(not_found::<R>(id));
        }

        Ok(())
    }

    async fn find_model(&self, id: i32) -> Result<R::Model, AppError> {
        let query = R::Entity::find_by_id(id).limit(1).into_query();

        fetch_one::<R::Model>(self.db, query)
            .await?
            .ok_or_else(|| not_found::<R>(id))
    }

    fn ordered() -> sea_orm::Select<R::Entity> {
        let mut select = R::Entity::find();
        for key in R::PrimaryKey::iter() {
            select = select.order_by_asc(key.into_column());
        }
        select
    }

    fn delete_query(id: i32) -> DeleteStatement {
        let mut delete = R::Entity::delete_many();
        for key in R::PrimaryKey::iter() {
            delete = delete.filter(key.into_column().eq(id));
        }
        delete.into_query()
    }
}

// Awaited query futures hold only the connection and a plain statement, keeping the
// generic handlers `Send`.

async fn fetch_all<M: FromQueryResult>(
    db: &DatabaseConnection,
    query: SelectStatement,
) -> Result<Vec<M>, DbErr> {
    let rows = db.query_all(&query).await?;

    rows.iter().map(|row| M::from_query_result(row, "")).collect()
}

async fn fetch_one<M: FromQueryResult>(
    db: &DatabaseConnection,
    query: SelectStatement,
) -> Result<Option<M>, DbErr> {
    let row = db.query_one(&query).await?;

    row.map(|row| M::from_query_result(&row, "")).transpose()
}

fn not_found<R: Resource>(id: i32) -> AppError {
    AppError::NotFound(format!("{} with id {} not found", R::NAME, id))
}

/// Sets `field` to `value` when a value is present, leaving it unchanged otherwise.
///
/// Shorthand for the optional columns of a partial update.
pub fn set_if_some<V>(field: &mut ActiveValue<V>, value: Option<V>)
where
    V: Into<Value>,
{
    if let Some(value) = value {
        *field = ActiveValue::Set(value);
    }
}
