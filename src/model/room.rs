use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateRoomDto {
    pub tipo: String,
    pub capacity: i32,
    pub price: f64,
    pub number: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct RoomDto {
    pub id: i32,
    pub hotel_id: i32,
    pub tipo: String,
    pub capacity: i32,
    pub price: f64,
    pub number: String,
    pub status: String, // "AVAILABLE" | "OCCUPIED"
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct DeleteRoomResultDto {
    pub affected_reservations: u64,
}
