//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let (hotel, room) = factory::helpers::create_room_with_hotel(&db).await?;
//! let reservation = factory::reservation::ReservationFactory::new(&db, user.id, room.id)
//!     .dates(entry, departure)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `hotel` - Create hotel entities
//! - `room` - Create room entities
//! - `extra_service` - Create extra service entities
//! - `reservation` - Create reservation entities (bypassing availability checks)
//! - `helpers` - ID generation and convenience methods for dependent entities

pub mod extra_service;
pub mod helpers;
pub mod hotel;
pub mod reservation;
pub mod room;
pub mod user;

pub use extra_service::create_extra_service;
pub use hotel::create_hotel;
pub use reservation::create_reservation;
pub use room::create_room;
pub use user::create_user;
