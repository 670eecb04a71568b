use super::{room_status, stored_reservation};
use crate::server::{
    error::{auth::AuthError, booking::BookingError, AppError},
    model::user::{CreateUserParams, Requester},
    service::user::UserService,
};
use entity::room::RoomStatus;
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod create;
