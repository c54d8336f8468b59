//! Solar Registry Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the solar
//! registry. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, plus factories and fixtures for the registry's entities.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert entities with sensible defaults
//! - **fixture**: In-memory entity models without database insertion
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn creates_station() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_solar_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let station = factory::create_station(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
