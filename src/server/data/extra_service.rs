//! Extra service data repository.
//!
//! Besides plain CRUD this answers the engine's lookup of "which of these ids belong to
//! this hotel", used to validate the services attached to a booking.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::extra_service::{CreateExtraServiceParams, ExtraService};

pub struct ExtraServiceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ExtraServiceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateExtraServiceParams) -> Result<ExtraService, DbErr> {
        let entity = entity::extra_service::ActiveModel {
            hotel_id: ActiveValue::Set(params.hotel_id),
            name: ActiveValue::Set(params.name),
            price: ActiveValue::Set(params.price),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ExtraService::from_entity(entity))
    }

    pub async fn get_by_hotel(&self, hotel_id: i32) -> Result<Vec<ExtraService>, DbErr> {
        let entities = entity::prelude::ExtraService::find()
            .filter(entity::extra_service::Column::HotelId.eq(hotel_id))
            .order_by_asc(entity::extra_service::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ExtraService::from_entity).collect())
    }

    /// Returns the subset of `ids` that exist and belong to `hotel_id`.
    ///
    /// # Arguments
    /// - `ids` - Requested extra service ids
    /// - `hotel_id` - Hotel the services must belong to
    ///
    /// # Returns
    /// - `Ok(Vec<ExtraService>)` - Matching services; empty when `ids` is empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_in_hotel(
        &self,
        ids: &[i32],
        hotel_id: i32,
    ) -> Result<Vec<ExtraService>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::ExtraService::find()
            .filter(entity::extra_service::Column::Id.is_in(ids.iter().copied()))
            .filter(entity::extra_service::Column::HotelId.eq(hotel_id))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ExtraService::from_entity).collect())
    }
}
