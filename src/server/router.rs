use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::server::{
    controller::{
        auth::{get_user, login, logout},
        extra_service::{create_extra_service, get_hotel_extra_services},
        hotel::{create_hotel, delete_hotel, get_hotel_by_id, get_hotels},
        reservation::{
            cancel_reservation, create_reservation, get_my_reservations, get_reservation_by_id,
        },
        room::{create_room, delete_room, get_hotel_rooms, get_room_by_id},
        user::{create_user, delete_user},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", get(logout))
        .route("/api/auth/user", get(get_user))
        .route("/api/users", post(create_user))
        .route("/api/users/{user_id}", delete(delete_user))
        .route("/api/hotels", post(create_hotel).get(get_hotels))
        .route(
            "/api/hotels/{hotel_id}",
            get(get_hotel_by_id).delete(delete_hotel),
        )
        .route(
            "/api/hotels/{hotel_id}/rooms",
            post(create_room).get(get_hotel_rooms),
        )
        .route(
            "/api/hotels/{hotel_id}/services",
            post(create_extra_service).get(get_hotel_extra_services),
        )
        .route("/api/rooms/{room_id}", get(get_room_by_id).delete(delete_room))
        .route(
            "/api/reservations",
            post(create_reservation).get(get_my_reservations),
        )
        .route(
            "/api/reservations/{reservation_id}",
            get(get_reservation_by_id),
        )
        .route(
            "/api/reservations/{reservation_id}/cancel",
            post(cancel_reservation),
        )
}
