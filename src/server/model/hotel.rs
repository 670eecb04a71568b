//! Hotel domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::hotel::{CreateHotelDto, HotelDto, PaginatedHotelsDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub created_at: DateTime<Utc>,
}

impl Hotel {
    pub fn into_dto(self) -> HotelDto {
        HotelDto {
            id: self.id,
            name: self.name,
            address: self.address,
            city: self.city,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::hotel::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            city: entity.city,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateHotelParams {
    pub name: String,
    pub address: String,
    pub city: String,
}

impl CreateHotelParams {
    pub fn from_dto(dto: CreateHotelDto) -> Self {
        Self {
            name: dto.name,
            address: dto.address,
            city: dto.city,
        }
    }
}

/// One page of hotels together with pagination metadata.
#[derive(Debug, Clone)]
pub struct PaginatedHotels {
    pub hotels: Vec<Hotel>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedHotels {
    pub fn into_dto(self) -> PaginatedHotelsDto {
        PaginatedHotelsDto {
            hotels: self.hotels.into_iter().map(Hotel::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
