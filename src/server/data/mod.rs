//! Database repository layer for all domain entities.
//!
//! `crud` holds the generic [`CrudRepository`](crud::CrudRepository) used by every
//! resource. The remaining modules name the repository of one resource and add the
//! queries only that resource needs: foreign key filters, the custom inserts of
//! locations and ownership shares, and the energy sold aggregate. Repositories use
//! SeaORM entity models internally and return domain models.

pub mod battery;
pub mod battery_level;
pub mod crud;
pub mod energy_sale;
pub mod location;
pub mod owner_has_station;
pub mod panel_angle;
pub mod panel_production;
pub mod solar_panel;
pub mod station;

#[cfg(test)]
mod test;
