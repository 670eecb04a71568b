//! Extra service (hotel add-on) domain models and parameters.

use crate::model::extra_service::{CreateExtraServiceDto, ExtraServiceDto};

/// Add-on such as breakfast, scoped to a single hotel.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtraService {
    pub id: i32,
    pub hotel_id: i32,
    pub name: String,
    pub price: f64,
}

impl ExtraService {
    pub fn into_dto(self) -> ExtraServiceDto {
        ExtraServiceDto {
            id: self.id,
            hotel_id: self.hotel_id,
            name: self.name,
            price: self.price,
        }
    }

    pub fn from_entity(entity: entity::extra_service::Model) -> Self {
        Self {
            id: entity.id,
            hotel_id: entity.hotel_id,
            name: entity.name,
            price: entity.price,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateExtraServiceParams {
    pub hotel_id: i32,
    pub name: String,
    pub price: f64,
}

impl CreateExtraServiceParams {
    pub fn from_dto(hotel_id: i32, dto: CreateExtraServiceDto) -> Self {
        Self {
            hotel_id,
            name: dto.name,
            price: dto.price,
        }
    }
}
