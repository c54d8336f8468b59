pub use sea_orm_migration::prelude::*;

mod m20261017_000001_create_location_table;
mod m20261017_000002_create_station_table;
mod m20261017_000003_create_owner_table;
mod m20261017_000004_create_owner_has_station_table;
mod m20261017_000005_create_battery_producer_table;
mod m20261017_000006_create_battery_table;
mod m20261017_000007_create_battery_level_table;
mod m20261017_000008_create_panel_type_table;
mod m20261017_000009_create_solar_panel_table;
mod m20261017_000010_create_panel_angle_table;
mod m20261017_000011_create_panel_production_table;
mod m20261017_000012_create_energy_sale_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261017_000001_create_location_table::Migration),
            Box::new(m20261017_000002_create_station_table::Migration),
            Box::new(m20261017_000003_create_owner_table::Migration),
            Box::new(m20261017_000004_create_owner_has_station_table::Migration),
            Box::new(m20261017_000005_create_battery_producer_table::Migration),
            Box::new(m20261017_000006_create_battery_table::Migration),
            Box::new(m20261017_000007_create_battery_level_table::Migration),
            Box::new(m20261017_000008_create_panel_type_table::Migration),
            Box::new(m20261017_000009_create_solar_panel_table::Migration),
            Box::new(m20261017_000010_create_panel_angle_table::Migration),
            Box::new(m20261017_000011_create_panel_production_table::Migration),
            Box::new(m20261017_000012_create_energy_sale_table::Migration),
        ]
    }
}
