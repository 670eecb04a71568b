pub use super::extra_service::Entity as ExtraService;
pub use super::hotel::Entity as Hotel;
pub use super::reservation::Entity as Reservation;
pub use super::reservation_extra_service::Entity as ReservationExtraService;
pub use super::room::Entity as Room;
pub use super::user::Entity as User;
