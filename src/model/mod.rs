//! Request and response DTOs exchanged over the HTTP API.

pub mod api;
pub mod extra_service;
pub mod hotel;
pub mod reservation;
pub mod room;
pub mod user;
