//! Hotel factory for creating test hotel entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test hotels with customizable fields.
pub struct HotelFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    address: String,
    city: String,
}

impl<'a> HotelFactory<'a> {
    /// Creates a new HotelFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Hotel {id}"`
    /// - address: `"{id} Test Street"`
    /// - city: `"Testville"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Hotel {}", id),
            address: format!("{} Test Street", id),
            city: "Testville".to_string(),
        }
    }

    /// Sets the hotel name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the hotel city.
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Builds and inserts the hotel entity into the database.
    pub async fn build(self) -> Result<entity::hotel::Model, DbErr> {
        entity::hotel::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            city: ActiveValue::Set(self.city),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a hotel with default values.
pub async fn create_hotel(db: &DatabaseConnection) -> Result<entity::hotel::Model, DbErr> {
    HotelFactory::new(db).build().await
}
