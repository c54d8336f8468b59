use crate::server::{data::owner_has_station::OwnerHasStationRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod find_by_owner;
mod find_by_station;
mod insert_owner_has_station;
