//! Shared helper utilities for factory methods.
//!
//! Provides ID generation for unique test values and convenience methods for creating
//! entities together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a station together with the location it references.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((location, station))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_station_with_location(
    db: &DatabaseConnection,
) -> Result<(entity::location::Model, entity::station::Model), DbErr> {
    let location = crate::factory::location::create_location(db).await?;
    let station = crate::factory::station::create_station_at(db, location.id).await?;

    Ok((location, station))
}

/// Creates a station with a fresh location, returning only the station.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::station::Model)` - Created station
/// - `Err(DbErr)` - Database error during creation
pub async fn create_station(db: &DatabaseConnection) -> Result<entity::station::Model, DbErr> {
    let (_, station) = create_station_with_location(db).await?;

    Ok(station)
}

/// Creates a solar panel with its station, location and panel type.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((station, panel_type, solar_panel))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_solar_panel_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::station::Model,
        entity::panel_type::Model,
        entity::solar_panel::Model,
    ),
    DbErr,
> {
    let station = create_station(db).await?;
    let panel_type = crate::factory::panel_type::create_panel_type(db).await?;
    let solar_panel =
        crate::factory::solar_panel::create_solar_panel(db, panel_type.id, station.id).await?;

    Ok((station, panel_type, solar_panel))
}
