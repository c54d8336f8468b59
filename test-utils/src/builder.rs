use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Location, Station};
///
/// let test = TestBuilder::new()
///     .with_table(Location)
///     .with_table(Station)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement, foreign keys included, from the provided SeaORM
    /// entity using SQLite syntax. Tables with foreign keys must be added after the tables
    /// they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the location and station tables.
    ///
    /// Enough for tests that only touch stations and locations.
    pub fn with_station_tables(self) -> Self {
        self.with_table(Location).with_table(Station)
    }

    /// Adds every table of the registry in dependency order:
    /// - Location, Station
    /// - Owner, OwnerHasStation
    /// - BatteryProducer, Battery, BatteryLevel
    /// - PanelType, SolarPanel, PanelAngle, PanelProduction
    /// - EnergySale
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_solar_tables(self) -> Self {
        self.with_station_tables()
            .with_table(Owner)
            .with_table(OwnerHasStation)
            .with_table(BatteryProducer)
            .with_table(Battery)
            .with_table(BatteryLevel)
            .with_table(PanelType)
            .with_table(SolarPanel)
            .with_table(PanelAngle)
            .with_table(PanelProduction)
            .with_table(EnergySale)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

