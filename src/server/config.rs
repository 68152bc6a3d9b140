use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Outbound e-mail provider settings. Present only when both the API URL and key are set.
#[derive(Clone, Debug)]
pub struct EmailConfig {
    pub api_url: String,
    pub api_key: String,
    pub from: String,
}

pub struct Config {
    pub database_url: String,
    pub app_url: String,
    pub bind_address: SocketAddr,
    pub email: Option<EmailConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_address = std::env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address =
            bind_address
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::InvalidValue {
                    name: "BIND_ADDRESS".to_string(),
                    reason: e.to_string(),
                })?;

        let email = match (
            std::env::var("EMAIL_API_URL"),
            std::env::var("EMAIL_API_KEY"),
        ) {
            (Ok(api_url), Ok(api_key)) => Some(EmailConfig {
                api_url,
                api_key,
                from: std::env::var("EMAIL_FROM")
                    .unwrap_or_else(|_| "no-reply@kolab.local".to_string()),
            }),
            _ => None,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            app_url: std::env::var("APP_URL")
                .map_err(|_| ConfigError::MissingEnvVar("APP_URL".to_string()))?,
            bind_address,
            email,
        })
    }
}
