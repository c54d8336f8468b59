mod crud;
mod energy_sale;
mod filter;
mod location;
mod owner_has_station;
