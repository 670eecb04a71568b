pub mod reservation_finisher;
