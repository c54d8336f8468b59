use crate::server::{
    controller::crud::CrudController,
    error::AppError,
    model::energy_sale::{EnergySale, EnergySaleResource, EnergySoldByPeriod, SalePeriod},
    service::energy_sale::EnergySaleService,
};

pub type EnergySaleController<'a> = CrudController<'a, EnergySaleResource>;

impl<'a> EnergySaleController<'a> {
    pub async fn find_by_station(&self, station_id: i32) -> Result<Vec<EnergySale>, AppError> {
        EnergySaleService::new(self.db)
            .find_by_station(station_id)
            .await
    }

    pub async fn energy_sold_by_period(
        &self,
        period: SalePeriod,
    ) -> Result<Vec<EnergySoldByPeriod>, AppError> {
        EnergySaleService::new(self.db)
            .energy_sold_by_period(period)
            .await
    }
}
