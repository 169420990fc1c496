use std::str::FromStr;

use anyhow::Result;
use sqlx::{
    Sqlite,
    migrate::MigrateDatabase,
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
};

pub mod models;
pub mod repositories;
pub mod seed;
pub mod transaction;

pub async fn init_database(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    // Create database if it doesn't exist
    if !Sqlite::database_exists(database_url).await.unwrap_or(false) {
        log::info!("Creating database {}", database_url);
        Sqlite::create_database(database_url).await?;
    } else {
        log::debug!("Database {} already exists", database_url);
    }

    let options = SqliteConnectOptions::from_str(database_url)?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await?;

    log::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    log::info!("Migrations completed successfully");

    Ok(pool)
}

/// Logs how much data the store holds and hints at the seeder when empty.
pub async fn report_contents(pool: &SqlitePool) -> Result<(i64, i64)> {
    let teams = repositories::team::count(pool).await?;
    let players = repositories::player::count(pool).await?;

    log::info!("Database contains {} teams and {} players", teams, players);
    if teams == 0 || players == 0 {
        log::warn!("No data found in the database. Run `cargo run --bin seed` to load sample data");
    }

    Ok((teams, players))
}
