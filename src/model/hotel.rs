use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateHotelDto {
    pub name: String,
    pub address: String,
    pub city: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct HotelDto {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct PaginatedHotelsDto {
    pub hotels: Vec<HotelDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
