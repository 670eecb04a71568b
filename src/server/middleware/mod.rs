//! Request guards and session wrappers used by controllers.

pub mod auth;
pub mod session;
