pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod validation;

use sqlx::SqlitePool;

pub use config::Config;
pub use error::AppError;
pub use services::ActivityLogger;

/// Shared handler state. Built once in `main` (or a test) and handed to the
/// app through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
    pub activity_logger: ActivityLogger,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        let activity_logger = ActivityLogger::new(&config.activity_log_path);
        Self {
            pool,
            config,
            activity_logger,
        }
    }
}
