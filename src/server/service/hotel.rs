//! Hotel service for business logic.

use entity::reservation::ReservationState;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{hotel::HotelRepository, reservation::ReservationRepository, room::RoomRepository},
    error::AppError,
    model::hotel::{CreateHotelParams, Hotel, PaginatedHotels},
};

/// Service providing business logic for hotels.
pub struct HotelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateHotelParams) -> Result<Hotel, AppError> {
        let hotel = HotelRepository::new(self.db).create(params).await?;

        tracing::info!(hotel_id = hotel.id, "Hotel created");

        Ok(hotel)
    }

    pub async fn get(&self, hotel_id: i32) -> Result<Option<Hotel>, AppError> {
        let hotel = HotelRepository::new(self.db).find_by_id(hotel_id).await?;

        Ok(hotel)
    }

    /// Retrieves hotels with pagination.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Hotels per page
    ///
    /// # Returns
    /// - `Ok(PaginatedHotels)` - Hotels for the requested page with pagination metadata
    /// - `Err(AppError::BadRequest)` - `per_page` is zero
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<PaginatedHotels, AppError> {
        if per_page == 0 {
            return Err(AppError::BadRequest(
                "entries must be greater than zero".to_string(),
            ));
        }

        let (hotels, total) = HotelRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        let total_pages = total.div_ceil(per_page);

        Ok(PaginatedHotels {
            hotels,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Deletes a hotel with all its rooms.
    ///
    /// Every active reservation on each room is cancelled (no reassignment), then the room
    /// is deleted, one room per transaction. The hotel goes last; its extra services
    /// cascade with it.
    ///
    /// # Returns
    /// - `Ok(())` - Hotel deleted
    /// - `Err(AppError::NotFound)` - Hotel does not exist
    /// - `Err(AppError::DbErr)` - Database error; rooms processed before the failure stay
    ///   deleted and a repeat call finishes the job
    pub async fn delete(&self, hotel_id: i32) -> Result<(), AppError> {
        let hotel_repo = HotelRepository::new(self.db);
        let Some(hotel) = hotel_repo.find_by_id(hotel_id).await? else {
            return Err(AppError::NotFound("Hotel not found".to_string()));
        };

        let rooms = RoomRepository::new(self.db).get_by_hotel(hotel.id).await?;

        let mut cancelled = 0;
        for room in &rooms {
            let txn = self.db.begin().await?;
            let reservation_repo = ReservationRepository::new(&txn);

            let ids: Vec<i32> = reservation_repo
                .get_active_by_room(room.id)
                .await?
                .iter()
                .map(|r| r.id)
                .collect();
            cancelled += reservation_repo
                .set_state_many(&ids, ReservationState::Cancelled)
                .await?;

            RoomRepository::new(&txn).delete(room.id).await?;

            txn.commit().await?;
        }

        hotel_repo.delete(hotel.id).await?;

        tracing::info!(
            hotel_id = hotel.id,
            rooms = rooms.len(),
            cancelled,
            "Hotel deleted"
        );

        Ok(())
    }
}
