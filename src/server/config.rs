use crate::server::{
    error::{config::ConfigError, AppError},
    model::availability::RoomReleasePolicy,
};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub room_release_policy: RoomReleasePolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let room_release_policy = match std::env::var("ROOM_RELEASE_POLICY") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: "ROOM_RELEASE_POLICY".to_string(),
                value,
            })?,
            Err(_) => RoomReleasePolicy::default(),
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            room_release_policy,
        })
    }
}
