use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateReservationDto {
    pub room_id: i32,
    pub date_entry: Option<String>,     // Format: "YYYY-MM-DD"
    pub departure_date: Option<String>, // Format: "YYYY-MM-DD", exclusive
    #[serde(default)]
    pub extra_service_ids: Vec<i32>,
    pub payment_method: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ReservationDto {
    pub id: i32,
    pub user_id: i32,
    pub room_id: Option<i32>,
    pub date_entry: NaiveDate,
    pub departure_date: NaiveDate,
    pub state: String, // "active" | "finished" | "cancelled"
    pub extra_service_ids: Vec<i32>,
    pub payment_method: Option<String>,
    pub payment_status: String,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}
