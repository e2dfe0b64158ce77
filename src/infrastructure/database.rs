// src/infrastructure/database.rs
use crate::config::DatabaseConfig;
use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
};

pub fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    let options = PgConnectOptions::new()
        .host(config.host())
        .port(config.port())
        .username(config.user())
        .database(config.name())
        .ssl_mode(PgSslMode::Disable);

    if config.password().is_empty() {
        options
    } else {
        options.password(config.password())
    }
}

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new().max_connections(config.max_connections())
}

/// Connects eagerly, so an unreachable database is reported here.
pub async fn init_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    pool_options(config)
        .connect_with(connect_options(config))
        .await
}

/// Pool that only connects on first use. Lets the server come up without a
/// reachable database; each query then fails and is mapped like any other
/// storage error.
pub fn lazy_pool(config: &DatabaseConfig) -> PgPool {
    pool_options(config).connect_lazy_with(connect_options(config))
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
