//! Server-side API backend.
//!
//! This module contains the complete backend for the solar registry: HTTP routes, the
//! controller/service/data triad shared by every resource, domain models and the
//! infrastructure that wires them together. Axum is the web framework and SeaORM is used
//! for all database access.
//!
//! # Architecture
//!
//! Every resource is served by the same four layers, each depending only on the one below:
//!
//! - **Route Layer** (`route/`) - HTTP handlers, payload parsing and DTO conversion
//! - **Controller Layer** (`controller/`) - Seam between transport and business logic
//! - **Service Layer** (`service/`) - Home for business rules, delegates to the data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, parameter types and resource descriptors
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! The controller, service and data layers are generic over a [`data::crud::Resource`]
//! descriptor. Resource specific operations (filtered reads, the energy sold aggregate)
//! are inherent impls on the concrete instantiation, e.g. `CrudRepository<'_, BatteryResource>`.
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database connection pool)
//! - **Startup** (`startup`) - Database connection, migrations, tracing and shutdown
//! - **Router** (`router`) - Axum route configuration and middleware layers

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod route;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
