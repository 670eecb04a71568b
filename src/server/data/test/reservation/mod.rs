use crate::server::{
    data::reservation::ReservationRepository,
    model::{availability::OccupancyWindow, reservation::CreateReservationRecord},
};
use chrono::NaiveDate;
use entity::reservation::ReservationState;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod get_elapsed_active;
mod has_active_in_window;
mod has_active_overlap;
mod room_ids_with_active_overlap;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
