use std::collections::BTreeMap;

use sea_orm::{EntityTrait, QueryOrder};

use crate::server::{
    data::crud::CrudRepository,
    error::AppError,
    model::energy_sale::{EnergySale, EnergySaleResource, EnergySoldByPeriod, SalePeriod},
};

pub type EnergySaleRepository<'a> = CrudRepository<'a, EnergySaleResource>;

impl<'a> EnergySaleRepository<'a> {
    /// Gets all energy sales of a station, ordered by id.
    ///
    /// # Arguments
    /// - `station_id` - ID of the station
    ///
    /// # Returns
    /// - `Ok(Vec<EnergySale>)` - Sales of the station (empty if none)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_station(&self, station_id: i32) -> Result<Vec<EnergySale>, AppError> {
        self.find_by_column(entity::energy_sale::Column::StationId, station_id)
            .await
    }

    /// Sums energy sold per period across all stations.
    ///
    /// Each sale's timestamp is truncated to the period key (`YYYY-MM-DD`, `YYYY-MM` or
    /// `YYYY`) and `energy_sold` is summed per key. Buckets are returned in ascending key
    /// order; periods without sales are absent.
    ///
    /// # Arguments
    /// - `period` - Granularity of the buckets
    ///
    /// # Returns
    /// - `Ok(Vec<EnergySoldByPeriod>)` - One entry per period with at least one sale
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn energy_sold_by_period(
        &self,
        period: SalePeriod,
    ) -> Result<Vec<EnergySoldByPeriod>, AppError> {
        let sales = entity::prelude::EnergySale::find()
            .order_by_asc(entity::energy_sale::Column::DateTime)
            .all(self.db)
            .await?;

        let mut totals: BTreeMap<String, f64> = BTreeMap::new();
        for sale in sales {
            *totals.entry(period.key(&sale.date_time)).or_insert(0.0) += sale.energy_sold;
        }

        Ok(totals
            .into_iter()
            .map(|(period, energy_sold)| EnergySoldByPeriod {
                period,
                energy_sold,
            })
            .collect())
    }
}
