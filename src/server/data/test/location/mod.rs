use crate::server::{data::location::LocationRepository, error::AppError};
use test_utils::builder::TestBuilder;

mod insert_location;
