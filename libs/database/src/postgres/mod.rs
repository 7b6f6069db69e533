//! PostgreSQL connection management, migrations and health checks

mod config;
mod connector;
mod health;

#[cfg(feature = "config")]
pub use config::ConnectionParts;
pub use config::PostgresConfig;
pub use connector::{
    connect, connect_from_config, connect_from_config_with_retry, connect_with_options,
    run_migrations,
};
pub use health::{check_health, check_health_detailed, HealthStatus};

pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
