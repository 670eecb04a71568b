//! Business logic layer.
//!
//! Services orchestrate repositories, enforce ownership and validation rules, and own the
//! transaction boundaries. The availability engine lives in `reservation`, `room` and
//! `hotel`, with the shared room status rule in `availability`.

pub mod availability;
pub mod extra_service;
pub mod hotel;
pub mod reservation;
pub mod room;
pub mod user;
