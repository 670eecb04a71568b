//! Hotel data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::hotel::{CreateHotelParams, Hotel};

pub struct HotelRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HotelRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateHotelParams) -> Result<Hotel, DbErr> {
        let entity = entity::hotel::ActiveModel {
            name: ActiveValue::Set(params.name),
            address: ActiveValue::Set(params.address),
            city: ActiveValue::Set(params.city),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Hotel::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Hotel>, DbErr> {
        let entity = entity::prelude::Hotel::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Hotel::from_entity))
    }

    /// Gets hotels with pagination, ordered by name.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of hotels per page
    ///
    /// # Returns
    /// - `Ok((hotels, total))` - Hotels for the requested page and total hotel count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Hotel>, u64), DbErr> {
        let paginator = entity::prelude::Hotel::find()
            .order_by_asc(entity::hotel::Column::Name)
            .order_by_asc(entity::hotel::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((entities.into_iter().map(Hotel::from_entity).collect(), total))
    }

    /// Deletes a hotel. Extra services are removed by the foreign key cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Hotel::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
