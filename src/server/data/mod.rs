//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic.
//!
//! Every repository is generic over `ConnectionTrait` so the same queries run against a
//! plain `DatabaseConnection` or inside a `DatabaseTransaction`.

pub mod extra_service;
pub mod hotel;
pub mod reservation;
pub mod room;
pub mod user;
