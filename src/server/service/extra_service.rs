//! Extra service business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{extra_service::ExtraServiceRepository, hotel::HotelRepository},
    error::AppError,
    model::extra_service::{CreateExtraServiceParams, ExtraService},
};

pub struct ExtraServiceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExtraServiceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an extra service for an existing hotel.
    ///
    /// # Returns
    /// - `Ok(ExtraService)` - The created service
    /// - `Err(AppError::NotFound)` - Hotel does not exist
    /// - `Err(AppError::BadRequest)` - Negative price
    pub async fn create(&self, params: CreateExtraServiceParams) -> Result<ExtraService, AppError> {
        if params.price < 0.0 {
            return Err(AppError::BadRequest(
                "price must not be negative".to_string(),
            ));
        }

        self.ensure_hotel(params.hotel_id).await?;

        let service = ExtraServiceRepository::new(self.db).create(params).await?;

        Ok(service)
    }

    pub async fn get_by_hotel(&self, hotel_id: i32) -> Result<Vec<ExtraService>, AppError> {
        self.ensure_hotel(hotel_id).await?;

        let services = ExtraServiceRepository::new(self.db)
            .get_by_hotel(hotel_id)
            .await?;

        Ok(services)
    }

    async fn ensure_hotel(&self, hotel_id: i32) -> Result<(), AppError> {
        match HotelRepository::new(self.db).find_by_id(hotel_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound("Hotel not found".to_string())),
        }
    }
}
