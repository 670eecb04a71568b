//! Reservation data repository.
//!
//! This module provides the reservation store queried by the availability engine. All
//! date-range checks use the half-open convention: a stay occupies the nights
//! `[date_entry, departure_date)`, so a stay departing on a given day does not overlap one
//! entering that same day.

use chrono::{NaiveDate, Utc};
use entity::reservation::ReservationState;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::{BTreeSet, HashMap};

use crate::server::model::{
    availability::OccupancyWindow,
    reservation::{CreateReservationRecord, Reservation},
};

pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an active reservation and links its extra services.
    ///
    /// # Arguments
    /// - `record` - Row data including the precomputed total price
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The created reservation with `state = active`
    /// - `Err(DbErr)` - Database error during either insert
    pub async fn create(&self, record: CreateReservationRecord) -> Result<Reservation, DbErr> {
        let entity = entity::reservation::ActiveModel {
            user_id: ActiveValue::Set(record.user_id),
            room_id: ActiveValue::Set(Some(record.room_id)),
            date_entry: ActiveValue::Set(record.date_entry),
            departure_date: ActiveValue::Set(record.departure_date),
            state: ActiveValue::Set(ReservationState::Active),
            payment_method: ActiveValue::Set(record.payment_method),
            payment_status: ActiveValue::Set("pending".to_string()),
            total_price: ActiveValue::Set(record.total_price),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut extra_service_ids = record.extra_service_ids;
        extra_service_ids.sort_unstable();
        extra_service_ids.dedup();

        for extra_service_id in &extra_service_ids {
            entity::reservation_extra_service::ActiveModel {
                reservation_id: ActiveValue::Set(entity.id),
                extra_service_id: ActiveValue::Set(*extra_service_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(Reservation::from_entity(entity, extra_service_ids))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Reservation>, DbErr> {
        let Some(entity) = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut extras = self.extra_service_ids_for(&[entity.id]).await?;
        let ids = extras.remove(&entity.id).unwrap_or_default();

        Ok(Some(Reservation::from_entity(entity, ids)))
    }

    /// Gets all reservations of a user, newest stay first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Reservation>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .order_by_desc(entity::reservation::Column::DateEntry)
            .order_by_desc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        self.with_extra_services(entities).await
    }

    /// Gets the active reservations of a user.
    pub async fn get_active_by_user(&self, user_id: i32) -> Result<Vec<Reservation>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .filter(entity::reservation::Column::State.eq(ReservationState::Active))
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        self.with_extra_services(entities).await
    }

    /// Gets the active reservations held on a room, in id order.
    pub async fn get_active_by_room(&self, room_id: i32) -> Result<Vec<Reservation>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::RoomId.eq(room_id))
            .filter(entity::reservation::Column::State.eq(ReservationState::Active))
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        self.with_extra_services(entities).await
    }

    /// Checks whether an active reservation on `room_id` overlaps `[date_entry, departure_date)`.
    ///
    /// # Arguments
    /// - `room_id` - Room to scan
    /// - `date_entry` - First night of the requested range
    /// - `departure_date` - Exclusive end of the requested range
    /// - `exclude_id` - Reservation to ignore, if any
    ///
    /// # Returns
    /// - `Ok(true)` - At least one active reservation overlaps
    /// - `Ok(false)` - The range is free on this room
    /// - `Err(DbErr)` - Database error during count query
    pub async fn has_active_overlap(
        &self,
        room_id: i32,
        date_entry: NaiveDate,
        departure_date: NaiveDate,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::RoomId.eq(room_id))
            .filter(entity::reservation::Column::State.eq(ReservationState::Active))
            .filter(entity::reservation::Column::DateEntry.lt(departure_date))
            .filter(entity::reservation::Column::DepartureDate.gt(date_entry));

        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::reservation::Column::Id.ne(exclude_id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Checks whether an active reservation on `room_id` intersects `window`.
    pub async fn has_active_in_window(
        &self,
        room_id: i32,
        window: OccupancyWindow,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::RoomId.eq(room_id))
            .filter(entity::reservation::Column::State.eq(ReservationState::Active));

        if let Some(from) = window.from {
            query = query.filter(entity::reservation::Column::DepartureDate.gt(from));
        }
        if let Some(until) = window.until {
            query = query.filter(entity::reservation::Column::DateEntry.lt(until));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Collects every room holding an active reservation, other than `exclude_id`, that
    /// overlaps `[date_entry, departure_date)`.
    pub async fn room_ids_with_active_overlap(
        &self,
        date_entry: NaiveDate,
        departure_date: NaiveDate,
        exclude_id: i32,
    ) -> Result<BTreeSet<i32>, DbErr> {
        let room_ids: Vec<Option<i32>> = entity::prelude::Reservation::find()
            .select_only()
            .column(entity::reservation::Column::RoomId)
            .filter(entity::reservation::Column::State.eq(ReservationState::Active))
            .filter(entity::reservation::Column::Id.ne(exclude_id))
            .filter(entity::reservation::Column::DateEntry.lt(departure_date))
            .filter(entity::reservation::Column::DepartureDate.gt(date_entry))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(room_ids.into_iter().flatten().collect())
    }

    /// Gets active reservations whose departure date is on or before `today`.
    pub async fn get_elapsed_active(&self, today: NaiveDate) -> Result<Vec<Reservation>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::State.eq(ReservationState::Active))
            .filter(entity::reservation::Column::DepartureDate.lte(today))
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        self.with_extra_services(entities).await
    }

    /// Sets the lifecycle state of a reservation.
    pub async fn set_state(&self, id: i32, state: ReservationState) -> Result<(), DbErr> {
        self.set_state_many(&[id], state).await.map(|_| ())
    }

    /// Sets the lifecycle state of several reservations at once.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated (0 when `ids` is empty)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_state_many(&self, ids: &[i32], state: ReservationState) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Reservation::update_many()
            .filter(entity::reservation::Column::Id.is_in(ids.iter().copied()))
            .col_expr(entity::reservation::Column::State, Expr::value(state))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Moves a reservation to another room, keeping its dates and state.
    pub async fn reassign_room(&self, id: i32, room_id: i32) -> Result<(), DbErr> {
        entity::prelude::Reservation::update_many()
            .filter(entity::reservation::Column::Id.eq(id))
            .col_expr(entity::reservation::Column::RoomId, Expr::value(room_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn with_extra_services(
        &self,
        entities: Vec<entity::reservation::Model>,
    ) -> Result<Vec<Reservation>, DbErr> {
        let ids: Vec<i32> = entities.iter().map(|e| e.id).collect();
        let mut extras = self.extra_service_ids_for(&ids).await?;

        Ok(entities
            .into_iter()
            .map(|entity| {
                let extra_ids = extras.remove(&entity.id).unwrap_or_default();
                Reservation::from_entity(entity, extra_ids)
            })
            .collect())
    }

    async fn extra_service_ids_for(
        &self,
        reservation_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        if reservation_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links = entity::prelude::ReservationExtraService::find()
            .filter(
                entity::reservation_extra_service::Column::ReservationId
                    .is_in(reservation_ids.iter().copied()),
            )
            .order_by_asc(entity::reservation_extra_service::Column::ExtraServiceId)
            .all(self.db)
            .await?;

        let mut map: HashMap<i32, Vec<i32>> = HashMap::new();
        for link in links {
            map.entry(link.reservation_id)
                .or_default()
                .push(link.extra_service_id);
        }

        Ok(map)
    }
}
