use crate::server::{
    data::energy_sale::EnergySaleRepository,
    error::AppError,
    model::energy_sale::{EnergySale, EnergySaleResource, EnergySoldByPeriod, SalePeriod},
    service::crud::CrudService,
};

pub type EnergySaleService<'a> = CrudService<'a, EnergySaleResource>;

impl<'a> EnergySaleService<'a> {
    /// Gets all energy sales of a station.
    pub async fn find_by_station(&self, station_id: i32) -> Result<Vec<EnergySale>, AppError> {
        EnergySaleRepository::new(self.db)
            .find_by_station(station_id)
            .await
    }

    /// Sums energy sold per period bucket.
    ///
    /// # Arguments
    /// - `period` - Granularity of the buckets
    ///
    /// # Returns
    /// - `Ok(Vec<EnergySoldByPeriod>)` - Totals in ascending period order
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn energy_sold_by_period(
        &self,
        period: SalePeriod,
    ) -> Result<Vec<EnergySoldByPeriod>, AppError> {
        let totals = EnergySaleRepository::new(self.db)
            .energy_sold_by_period(period)
            .await?;

        tracing::debug!("Computed {} energy sold buckets ({:?})", totals.len(), period);

        Ok(totals)
    }
}
