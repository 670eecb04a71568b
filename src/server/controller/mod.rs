//! HTTP request handlers.
//!
//! Controllers check access through `AuthGuard`, convert DTOs into parameter models, call
//! a service, and convert the resulting domain models back into DTOs.

pub mod auth;
pub mod extra_service;
pub mod hotel;
pub mod reservation;
pub mod room;
pub mod user;
