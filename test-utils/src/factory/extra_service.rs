//! Extra service factory for creating test add-on entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test extra services with customizable fields.
pub struct ExtraServiceFactory<'a> {
    db: &'a DatabaseConnection,
    hotel_id: i32,
    name: String,
    price: f64,
}

impl<'a> ExtraServiceFactory<'a> {
    /// Creates a new ExtraServiceFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Service {id}"`
    /// - price: `15.0`
    pub fn new(db: &'a DatabaseConnection, hotel_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            hotel_id,
            name: format!("Service {}", id),
            price: 15.0,
        }
    }

    /// Sets the service name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the service price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the extra service entity into the database.
    pub async fn build(self) -> Result<entity::extra_service::Model, DbErr> {
        entity::extra_service::ActiveModel {
            id: ActiveValue::NotSet,
            hotel_id: ActiveValue::Set(self.hotel_id),
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an extra service with default values for the given hotel.
pub async fn create_extra_service(
    db: &DatabaseConnection,
    hotel_id: i32,
) -> Result<entity::extra_service::Model, DbErr> {
    ExtraServiceFactory::new(db, hotel_id).build().await
}
