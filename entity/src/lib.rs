//! SeaORM entity models for the hotel booking schema.

pub mod prelude;

pub mod extra_service;
pub mod hotel;
pub mod reservation;
pub mod reservation_extra_service;
pub mod room;
pub mod user;
