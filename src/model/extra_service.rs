use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateExtraServiceDto {
    pub name: String,
    pub price: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ExtraServiceDto {
    pub id: i32,
    pub hotel_id: i32,
    pub name: String,
    pub price: f64,
}
