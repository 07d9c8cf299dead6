//! Server Configuration
//!
//! Read once at startup from the environment (after `.env` is loaded).

use std::env;

use anyhow::Context;
use auth::AuthConfig;

const DEFAULT_PORT: u16 = 4000;

const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {raw:?}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let frontend_origins = env::var("FRONTEND_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let auth = if cfg!(debug_assertions) {
            match env::var("REFRESH_TOKEN_SECRET") {
                Ok(secret) if !secret.is_empty() => AuthConfig::new(secret),
                _ => {
                    tracing::warn!("REFRESH_TOKEN_SECRET not set, using a random secret");
                    AuthConfig::development()
                }
            }
        } else {
            // In production the secret must survive restarts
            let secret = env::var("REFRESH_TOKEN_SECRET")
                .context("REFRESH_TOKEN_SECRET must be set in production")?;
            anyhow::ensure!(!secret.is_empty(), "REFRESH_TOKEN_SECRET must not be empty");
            AuthConfig::new(secret)
        };

        let pepper = env::var("PASSWORD_PEPPER")
            .ok()
            .filter(|p| !p.is_empty())
            .map(String::into_bytes);

        Ok(Self {
            database_url,
            port,
            frontend_origins,
            auth: auth.with_pepper(pepper),
        })
    }
}
