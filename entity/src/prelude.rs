pub use super::battery::Entity as Battery;
pub use super::battery_level::Entity as BatteryLevel;
pub use super::battery_producer::Entity as BatteryProducer;
pub use super::energy_sale::Entity as EnergySale;
pub use super::location::Entity as Location;
pub use super::owner::Entity as Owner;
pub use super::owner_has_station::Entity as OwnerHasStation;
pub use super::panel_angle::Entity as PanelAngle;
pub use super::panel_production::Entity as PanelProduction;
pub use super::panel_type::Entity as PanelType;
pub use super::solar_panel::Entity as SolarPanel;
pub use super::station::Entity as Station;
