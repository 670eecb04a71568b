//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use entity::room::RoomStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let suite = RoomFactory::new(&db, hotel.id)
///     .tipo("suite")
///     .status(RoomStatus::Occupied)
///     .build()
///     .await?;
/// ```
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    hotel_id: i32,
    tipo: String,
    capacity: i32,
    price: f64,
    number: String,
    status: RoomStatus,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values.
    ///
    /// Defaults:
    /// - tipo: `"doble"`
    /// - capacity: `2`
    /// - price: `100.0`
    /// - number: `"{id}"`
    /// - status: `AVAILABLE`
    pub fn new(db: &'a DatabaseConnection, hotel_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            hotel_id,
            tipo: "doble".to_string(),
            capacity: 2,
            price: 100.0,
            number: id.to_string(),
            status: RoomStatus::Available,
        }
    }

    /// Sets the room type.
    pub fn tipo(mut self, tipo: impl Into<String>) -> Self {
        self.tipo = tipo.into();
        self
    }

    /// Sets the nightly price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Sets the room number.
    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Sets the cached occupancy status.
    pub fn status(mut self, status: RoomStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the room entity into the database.
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            id: ActiveValue::NotSet,
            hotel_id: ActiveValue::Set(self.hotel_id),
            tipo: ActiveValue::Set(self.tipo),
            capacity: ActiveValue::Set(self.capacity),
            price: ActiveValue::Set(self.price),
            number: ActiveValue::Set(self.number),
            status: ActiveValue::Set(self.status),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available room with default values in the given hotel.
pub async fn create_room(
    db: &DatabaseConnection,
    hotel_id: i32,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db, hotel_id).build().await
}
