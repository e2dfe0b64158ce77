// src/config.rs
use std::{env, net::SocketAddr};
use thiserror::Error;

const PROFILE_VAR: &str = "SERVICES_PROFILE";
const DOCKER_PROFILE: &str = "docker";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    host: String,
    port: u16,
    user: String,
    password: String,
    name: String,
    max_connections: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    database: DatabaseConfig,
    run_migration: bool,
    host: String,
    port: u16,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read env file {path}: {source}")]
    EnvFile {
        path: String,
        #[source]
        source: dotenvy::Error,
    },
    #[error("invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}

fn default_db_host() -> String {
    "localhost".into()
}

fn default_db_user() -> String {
    "postgres".into()
}

fn default_db_name() -> String {
    "articles".into()
}

fn default_host() -> String {
    "0.0.0.0".into()
}

impl AppConfig {
    /// Load the env file selected by `SERVICES_PROFILE`, then read the
    /// process environment.
    ///
    /// The `docker` profile skips file loading entirely. Any other profile
    /// name requires `<profile>.env` to exist; without a profile a `.env`
    /// file is loaded when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_env_file(env::var(PROFILE_VAR).ok().as_deref())?;
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database = DatabaseConfig {
            host: get("DB_HOST").unwrap_or_else(default_db_host),
            port: parse_or("DB_PORT", get("DB_PORT"), 5432)?,
            user: get("DB_USER").unwrap_or_else(default_db_user),
            password: lookup("DB_PASSWORD").unwrap_or_default(),
            name: get("DB_NAME").unwrap_or_else(default_db_name),
            max_connections: parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), 16)?,
        };

        let run_migration = match get("RUN_MIGRATION") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid("RUN_MIGRATION", raw))?,
            None => false,
        };

        Ok(Self {
            database,
            run_migration,
            host: get("HOST").unwrap_or_else(default_host),
            port: parse_or("PORT", get("PORT"), 8080)?,
        })
    }

    pub fn database(&self) -> &DatabaseConfig {
        &self.database
    }

    pub fn run_migration(&self) -> bool {
        self.run_migration
    }

    pub fn listen_addr(&self) -> String {
        // bracket IPv6 literals so the result parses as a socket address
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    pub fn socket_addr(&self) -> Option<SocketAddr> {
        self.listen_addr().parse().ok()
    }
}

impl DatabaseConfig {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// Empty when the database accepts password-less connections.
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_connections(&self) -> u32 {
        self.max_connections
    }
}

fn load_env_file(profile: Option<&str>) -> Result<(), ConfigError> {
    match profile.map(str::trim).filter(|p| !p.is_empty()) {
        Some(p) if p.eq_ignore_ascii_case(DOCKER_PROFILE) => Ok(()),
        Some(p) => {
            let path = format!("{}.env", p.to_lowercase());
            dotenvy::from_filename(&path)
                .map(|_| ())
                .map_err(|source| ConfigError::EnvFile { path, source })
        }
        None => {
            dotenvy::dotenv().ok();
            Ok(())
        }
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid(key, raw)),
        None => Ok(default),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
